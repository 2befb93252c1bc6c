#![allow(unused_variables)]

use super::*;

pub trait VisitMut {
    fn visit_expr_mut(&mut self, i: &mut Expr) {
        visit_expr_mut(self, i);
    }

    fn visit_expr_aggregation_mut(&mut self, i: &mut ExprAggregation) {
        visit_expr_aggregation_mut(self, i);
    }

    fn visit_expr_binary_op_mut(&mut self, i: &mut ExprBinaryOp) {
        visit_expr_binary_op_mut(self, i);
    }

    fn visit_expr_case_mut(&mut self, i: &mut ExprCase) {
        visit_expr_case_mut(self, i);
    }

    fn visit_expr_column_mut(&mut self, i: &mut SqlColumn) {
        visit_expr_column_mut(self, i);
    }

    fn visit_expr_constant_mut(&mut self, i: &mut Value) {
        visit_expr_constant_mut(self, i);
    }

    fn visit_expr_convert_mut(&mut self, i: &mut ExprConvert) {
        visit_expr_convert_mut(self, i);
    }

    fn visit_expr_entity_mut(&mut self, i: &mut SqlEntity) {
        visit_expr_entity_mut(self, i);
    }

    fn visit_expr_entity_ref_member_mut(&mut self, i: &mut ExprEntityRefMember) {
        visit_expr_entity_ref_member_mut(self, i);
    }

    fn visit_expr_exists_mut(&mut self, i: &mut ExprExists) {
        visit_expr_exists_mut(self, i);
    }

    fn visit_expr_func_mut(&mut self, i: &mut ExprFunc) {
        visit_expr_func_mut(self, i);
    }

    fn visit_expr_grouping_select_mut(&mut self, i: &mut ExprGroupingSelect) {
        visit_expr_grouping_select_mut(self, i);
    }

    fn visit_expr_is_null_mut(&mut self, i: &mut ExprIsNull) {
        visit_expr_is_null_mut(self, i);
    }

    fn visit_expr_literal_mut(&mut self, i: &mut SqlLiteral) {
        visit_expr_literal_mut(self, i);
    }

    fn visit_expr_member_mut(&mut self, i: &mut ExprMember) {
        visit_expr_member_mut(self, i);
    }

    fn visit_expr_method_call_mut(&mut self, i: &mut ExprMethodCall) {
        visit_expr_method_call_mut(self, i);
    }

    fn visit_expr_named_mut(&mut self, i: &mut ExprNamed) {
        visit_expr_named_mut(self, i);
    }

    fn visit_expr_new_mut(&mut self, i: &mut ExprNew) {
        visit_expr_new_mut(self, i);
    }

    fn visit_expr_stmt_mut(&mut self, i: &mut ExprStmt) {
        visit_expr_stmt_mut(self, i);
    }

    fn visit_expr_table_reference_mut(&mut self, i: &mut ExprTableReference) {
        visit_expr_table_reference_mut(self, i);
    }

    fn visit_expr_unary_op_mut(&mut self, i: &mut ExprUnaryOp) {
        visit_expr_unary_op_mut(self, i);
    }

    fn visit_join_mut(&mut self, i: &mut SqlJoin) {
        visit_join_mut(self, i);
    }

    fn visit_ordering_mut(&mut self, i: &mut Ordering) {
        visit_ordering_mut(self, i);
    }

    fn visit_stmt_mut(&mut self, i: &mut SqlStatement) {
        visit_stmt_mut(self, i);
    }

    fn visit_table_mut(&mut self, i: &mut SqlTable) {
        visit_table_mut(self, i);
    }

    fn visit_table_info_mut(&mut self, i: &mut TableInfo) {
        visit_table_info_mut(self, i);
    }
}

impl<V: VisitMut> VisitMut for &mut V {
    fn visit_expr_mut(&mut self, i: &mut Expr) {
        VisitMut::visit_expr_mut(&mut **self, i);
    }

    fn visit_expr_aggregation_mut(&mut self, i: &mut ExprAggregation) {
        VisitMut::visit_expr_aggregation_mut(&mut **self, i);
    }

    fn visit_expr_binary_op_mut(&mut self, i: &mut ExprBinaryOp) {
        VisitMut::visit_expr_binary_op_mut(&mut **self, i);
    }

    fn visit_expr_case_mut(&mut self, i: &mut ExprCase) {
        VisitMut::visit_expr_case_mut(&mut **self, i);
    }

    fn visit_expr_column_mut(&mut self, i: &mut SqlColumn) {
        VisitMut::visit_expr_column_mut(&mut **self, i);
    }

    fn visit_expr_constant_mut(&mut self, i: &mut Value) {
        VisitMut::visit_expr_constant_mut(&mut **self, i);
    }

    fn visit_expr_convert_mut(&mut self, i: &mut ExprConvert) {
        VisitMut::visit_expr_convert_mut(&mut **self, i);
    }

    fn visit_expr_entity_mut(&mut self, i: &mut SqlEntity) {
        VisitMut::visit_expr_entity_mut(&mut **self, i);
    }

    fn visit_expr_entity_ref_member_mut(&mut self, i: &mut ExprEntityRefMember) {
        VisitMut::visit_expr_entity_ref_member_mut(&mut **self, i);
    }

    fn visit_expr_exists_mut(&mut self, i: &mut ExprExists) {
        VisitMut::visit_expr_exists_mut(&mut **self, i);
    }

    fn visit_expr_func_mut(&mut self, i: &mut ExprFunc) {
        VisitMut::visit_expr_func_mut(&mut **self, i);
    }

    fn visit_expr_grouping_select_mut(&mut self, i: &mut ExprGroupingSelect) {
        VisitMut::visit_expr_grouping_select_mut(&mut **self, i);
    }

    fn visit_expr_is_null_mut(&mut self, i: &mut ExprIsNull) {
        VisitMut::visit_expr_is_null_mut(&mut **self, i);
    }

    fn visit_expr_literal_mut(&mut self, i: &mut SqlLiteral) {
        VisitMut::visit_expr_literal_mut(&mut **self, i);
    }

    fn visit_expr_member_mut(&mut self, i: &mut ExprMember) {
        VisitMut::visit_expr_member_mut(&mut **self, i);
    }

    fn visit_expr_method_call_mut(&mut self, i: &mut ExprMethodCall) {
        VisitMut::visit_expr_method_call_mut(&mut **self, i);
    }

    fn visit_expr_named_mut(&mut self, i: &mut ExprNamed) {
        VisitMut::visit_expr_named_mut(&mut **self, i);
    }

    fn visit_expr_new_mut(&mut self, i: &mut ExprNew) {
        VisitMut::visit_expr_new_mut(&mut **self, i);
    }

    fn visit_expr_stmt_mut(&mut self, i: &mut ExprStmt) {
        VisitMut::visit_expr_stmt_mut(&mut **self, i);
    }

    fn visit_expr_table_reference_mut(&mut self, i: &mut ExprTableReference) {
        VisitMut::visit_expr_table_reference_mut(&mut **self, i);
    }

    fn visit_expr_unary_op_mut(&mut self, i: &mut ExprUnaryOp) {
        VisitMut::visit_expr_unary_op_mut(&mut **self, i);
    }

    fn visit_join_mut(&mut self, i: &mut SqlJoin) {
        VisitMut::visit_join_mut(&mut **self, i);
    }

    fn visit_ordering_mut(&mut self, i: &mut Ordering) {
        VisitMut::visit_ordering_mut(&mut **self, i);
    }

    fn visit_stmt_mut(&mut self, i: &mut SqlStatement) {
        VisitMut::visit_stmt_mut(&mut **self, i);
    }

    fn visit_table_mut(&mut self, i: &mut SqlTable) {
        VisitMut::visit_table_mut(&mut **self, i);
    }

    fn visit_table_info_mut(&mut self, i: &mut TableInfo) {
        VisitMut::visit_table_info_mut(&mut **self, i);
    }
}

pub fn visit_expr_mut<V>(v: &mut V, node: &mut Expr)
where
    V: VisitMut + ?Sized,
{
    match node {
        Expr::Aggregation(expr) => v.visit_expr_aggregation_mut(expr),
        Expr::BinaryOp(expr) => v.visit_expr_binary_op_mut(expr),
        Expr::Case(expr) => v.visit_expr_case_mut(expr),
        Expr::Column(expr) => v.visit_expr_column_mut(expr),
        Expr::Constant(expr) => v.visit_expr_constant_mut(expr),
        Expr::Convert(expr) => v.visit_expr_convert_mut(expr),
        Expr::Entity(expr) => v.visit_expr_entity_mut(expr),
        Expr::EntityRefMember(expr) => v.visit_expr_entity_ref_member_mut(expr),
        Expr::Exists(expr) => v.visit_expr_exists_mut(expr),
        Expr::Func(expr) => v.visit_expr_func_mut(expr),
        Expr::GroupingSelect(expr) => v.visit_expr_grouping_select_mut(expr),
        Expr::IsNull(expr) => v.visit_expr_is_null_mut(expr),
        Expr::Literal(expr) => v.visit_expr_literal_mut(expr),
        Expr::Member(expr) => v.visit_expr_member_mut(expr),
        Expr::MethodCall(expr) => v.visit_expr_method_call_mut(expr),
        Expr::Named(expr) => v.visit_expr_named_mut(expr),
        Expr::New(expr) => v.visit_expr_new_mut(expr),
        Expr::Stmt(expr) => v.visit_expr_stmt_mut(expr),
        Expr::TableReference(expr) => v.visit_expr_table_reference_mut(expr),
        Expr::UnaryOp(expr) => v.visit_expr_unary_op_mut(expr),
    }
}

pub fn visit_expr_aggregation_mut<V>(v: &mut V, node: &mut ExprAggregation)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.expr);
}

pub fn visit_expr_binary_op_mut<V>(v: &mut V, node: &mut ExprBinaryOp)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.lhs);
    v.visit_expr_mut(&mut node.rhs);
}

pub fn visit_expr_case_mut<V>(v: &mut V, node: &mut ExprCase)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.test);
    v.visit_expr_mut(&mut node.then);
    v.visit_expr_mut(&mut node.otherwise);
}

pub fn visit_expr_column_mut<V>(v: &mut V, node: &mut SqlColumn)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_expr_constant_mut<V>(v: &mut V, node: &mut Value)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_expr_convert_mut<V>(v: &mut V, node: &mut ExprConvert)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.source);
}

pub fn visit_expr_entity_mut<V>(v: &mut V, node: &mut SqlEntity)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_expr_entity_ref_member_mut<V>(v: &mut V, node: &mut ExprEntityRefMember)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_expr_exists_mut<V>(v: &mut V, node: &mut ExprExists)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.subquery);
}

pub fn visit_expr_func_mut<V>(v: &mut V, node: &mut ExprFunc)
where
    V: VisitMut + ?Sized,
{
    for arg in &mut node.args {
        v.visit_expr_mut(arg);
    }
}

pub fn visit_expr_grouping_select_mut<V>(v: &mut V, node: &mut ExprGroupingSelect)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.key);
    v.visit_expr_mut(&mut node.element);
}

pub fn visit_expr_is_null_mut<V>(v: &mut V, node: &mut ExprIsNull)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.expr);
}

pub fn visit_expr_literal_mut<V>(v: &mut V, node: &mut SqlLiteral)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_expr_member_mut<V>(v: &mut V, node: &mut ExprMember)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.expr);
}

pub fn visit_expr_method_call_mut<V>(v: &mut V, node: &mut ExprMethodCall)
where
    V: VisitMut + ?Sized,
{
    if let Some(instance) = &mut node.instance {
        v.visit_expr_mut(instance);
    }
    for arg in &mut node.args {
        v.visit_expr_mut(arg);
    }
}

pub fn visit_expr_named_mut<V>(v: &mut V, node: &mut ExprNamed)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.expr);
}

pub fn visit_expr_new_mut<V>(v: &mut V, node: &mut ExprNew)
where
    V: VisitMut + ?Sized,
{
    for member in &mut node.members {
        v.visit_expr_named_mut(member);
    }
}

pub fn visit_expr_stmt_mut<V>(v: &mut V, node: &mut ExprStmt)
where
    V: VisitMut + ?Sized,
{
    v.visit_stmt_mut(&mut node.stmt);
}

pub fn visit_expr_table_reference_mut<V>(v: &mut V, node: &mut ExprTableReference)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_expr_unary_op_mut<V>(v: &mut V, node: &mut ExprUnaryOp)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.operand);
}

pub fn visit_join_mut<V>(v: &mut V, node: &mut SqlJoin)
where
    V: VisitMut + ?Sized,
{
    if let Some(condition) = &mut node.condition {
        v.visit_expr_mut(condition);
    }
}

pub fn visit_ordering_mut<V>(v: &mut V, node: &mut Ordering)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.expr);
}

pub fn visit_stmt_mut<V>(v: &mut V, node: &mut SqlStatement)
where
    V: VisitMut + ?Sized,
{
    for (_, table) in node.tables.iter_mut() {
        v.visit_table_mut(table);
    }

    v.visit_expr_mut(&mut node.select_projection);

    if let Some(condition) = &mut node.where_condition {
        v.visit_expr_mut(condition);
    }

    if let Some(key) = &mut node.group_by {
        v.visit_expr_mut(key);
    }

    for ordering in &mut node.orderings {
        v.visit_ordering_mut(ordering);
    }

    if let Some(top) = &mut node.top {
        v.visit_expr_mut(top);
    }
}

pub fn visit_table_mut<V>(v: &mut V, node: &mut SqlTable)
where
    V: VisitMut + ?Sized,
{
    let (table_info, joins) = node.parts_mut();
    v.visit_table_info_mut(table_info);

    for join in joins {
        v.visit_join_mut(join);
    }
}

pub fn visit_table_info_mut<V>(v: &mut V, node: &mut TableInfo)
where
    V: VisitMut + ?Sized,
{
    match node {
        TableInfo::UnresolvedCollectionJoin(info) => v.visit_expr_mut(&mut info.source),
        TableInfo::UnresolvedGroupReference(info) => v.visit_stmt_mut(&mut info.grouping_statement),
        TableInfo::ResolvedSubStatement(info) => v.visit_stmt_mut(&mut info.statement),
        TableInfo::ResolvedJoinedGrouping(info) => v.visit_stmt_mut(&mut info.statement),
        TableInfo::Unresolved(_)
        | TableInfo::UnresolvedJoin(_)
        | TableInfo::UnresolvedDummyRow(_)
        | TableInfo::ResolvedSimple(_) => {}
    }
}
