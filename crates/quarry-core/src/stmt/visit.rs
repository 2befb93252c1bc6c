#![allow(unused_variables)]

use super::*;

pub trait Visit {
    fn visit_expr(&mut self, i: &Expr) {
        visit_expr(self, i);
    }

    fn visit_expr_aggregation(&mut self, i: &ExprAggregation) {
        visit_expr_aggregation(self, i);
    }

    fn visit_expr_binary_op(&mut self, i: &ExprBinaryOp) {
        visit_expr_binary_op(self, i);
    }

    fn visit_expr_case(&mut self, i: &ExprCase) {
        visit_expr_case(self, i);
    }

    fn visit_expr_column(&mut self, i: &SqlColumn) {
        visit_expr_column(self, i);
    }

    fn visit_expr_constant(&mut self, i: &Value) {
        visit_expr_constant(self, i);
    }

    fn visit_expr_convert(&mut self, i: &ExprConvert) {
        visit_expr_convert(self, i);
    }

    fn visit_expr_entity(&mut self, i: &SqlEntity) {
        visit_expr_entity(self, i);
    }

    fn visit_expr_entity_ref_member(&mut self, i: &ExprEntityRefMember) {
        visit_expr_entity_ref_member(self, i);
    }

    fn visit_expr_exists(&mut self, i: &ExprExists) {
        visit_expr_exists(self, i);
    }

    fn visit_expr_func(&mut self, i: &ExprFunc) {
        visit_expr_func(self, i);
    }

    fn visit_expr_grouping_select(&mut self, i: &ExprGroupingSelect) {
        visit_expr_grouping_select(self, i);
    }

    fn visit_expr_is_null(&mut self, i: &ExprIsNull) {
        visit_expr_is_null(self, i);
    }

    fn visit_expr_literal(&mut self, i: &SqlLiteral) {
        visit_expr_literal(self, i);
    }

    fn visit_expr_member(&mut self, i: &ExprMember) {
        visit_expr_member(self, i);
    }

    fn visit_expr_method_call(&mut self, i: &ExprMethodCall) {
        visit_expr_method_call(self, i);
    }

    fn visit_expr_named(&mut self, i: &ExprNamed) {
        visit_expr_named(self, i);
    }

    fn visit_expr_new(&mut self, i: &ExprNew) {
        visit_expr_new(self, i);
    }

    fn visit_expr_stmt(&mut self, i: &ExprStmt) {
        visit_expr_stmt(self, i);
    }

    fn visit_expr_table_reference(&mut self, i: &ExprTableReference) {
        visit_expr_table_reference(self, i);
    }

    fn visit_expr_unary_op(&mut self, i: &ExprUnaryOp) {
        visit_expr_unary_op(self, i);
    }

    fn visit_join(&mut self, i: &SqlJoin) {
        visit_join(self, i);
    }

    fn visit_ordering(&mut self, i: &Ordering) {
        visit_ordering(self, i);
    }

    fn visit_stmt(&mut self, i: &SqlStatement) {
        visit_stmt(self, i);
    }

    fn visit_table(&mut self, i: &SqlTable) {
        visit_table(self, i);
    }

    fn visit_table_info(&mut self, i: &TableInfo) {
        visit_table_info(self, i);
    }
}

impl<V: Visit> Visit for &mut V {
    fn visit_expr(&mut self, i: &Expr) {
        Visit::visit_expr(&mut **self, i);
    }

    fn visit_expr_aggregation(&mut self, i: &ExprAggregation) {
        Visit::visit_expr_aggregation(&mut **self, i);
    }

    fn visit_expr_binary_op(&mut self, i: &ExprBinaryOp) {
        Visit::visit_expr_binary_op(&mut **self, i);
    }

    fn visit_expr_case(&mut self, i: &ExprCase) {
        Visit::visit_expr_case(&mut **self, i);
    }

    fn visit_expr_column(&mut self, i: &SqlColumn) {
        Visit::visit_expr_column(&mut **self, i);
    }

    fn visit_expr_constant(&mut self, i: &Value) {
        Visit::visit_expr_constant(&mut **self, i);
    }

    fn visit_expr_convert(&mut self, i: &ExprConvert) {
        Visit::visit_expr_convert(&mut **self, i);
    }

    fn visit_expr_entity(&mut self, i: &SqlEntity) {
        Visit::visit_expr_entity(&mut **self, i);
    }

    fn visit_expr_entity_ref_member(&mut self, i: &ExprEntityRefMember) {
        Visit::visit_expr_entity_ref_member(&mut **self, i);
    }

    fn visit_expr_exists(&mut self, i: &ExprExists) {
        Visit::visit_expr_exists(&mut **self, i);
    }

    fn visit_expr_func(&mut self, i: &ExprFunc) {
        Visit::visit_expr_func(&mut **self, i);
    }

    fn visit_expr_grouping_select(&mut self, i: &ExprGroupingSelect) {
        Visit::visit_expr_grouping_select(&mut **self, i);
    }

    fn visit_expr_is_null(&mut self, i: &ExprIsNull) {
        Visit::visit_expr_is_null(&mut **self, i);
    }

    fn visit_expr_literal(&mut self, i: &SqlLiteral) {
        Visit::visit_expr_literal(&mut **self, i);
    }

    fn visit_expr_member(&mut self, i: &ExprMember) {
        Visit::visit_expr_member(&mut **self, i);
    }

    fn visit_expr_method_call(&mut self, i: &ExprMethodCall) {
        Visit::visit_expr_method_call(&mut **self, i);
    }

    fn visit_expr_named(&mut self, i: &ExprNamed) {
        Visit::visit_expr_named(&mut **self, i);
    }

    fn visit_expr_new(&mut self, i: &ExprNew) {
        Visit::visit_expr_new(&mut **self, i);
    }

    fn visit_expr_stmt(&mut self, i: &ExprStmt) {
        Visit::visit_expr_stmt(&mut **self, i);
    }

    fn visit_expr_table_reference(&mut self, i: &ExprTableReference) {
        Visit::visit_expr_table_reference(&mut **self, i);
    }

    fn visit_expr_unary_op(&mut self, i: &ExprUnaryOp) {
        Visit::visit_expr_unary_op(&mut **self, i);
    }

    fn visit_join(&mut self, i: &SqlJoin) {
        Visit::visit_join(&mut **self, i);
    }

    fn visit_ordering(&mut self, i: &Ordering) {
        Visit::visit_ordering(&mut **self, i);
    }

    fn visit_stmt(&mut self, i: &SqlStatement) {
        Visit::visit_stmt(&mut **self, i);
    }

    fn visit_table(&mut self, i: &SqlTable) {
        Visit::visit_table(&mut **self, i);
    }

    fn visit_table_info(&mut self, i: &TableInfo) {
        Visit::visit_table_info(&mut **self, i);
    }
}

pub fn visit_expr<V>(v: &mut V, node: &Expr)
where
    V: Visit + ?Sized,
{
    match node {
        Expr::Aggregation(expr) => v.visit_expr_aggregation(expr),
        Expr::BinaryOp(expr) => v.visit_expr_binary_op(expr),
        Expr::Case(expr) => v.visit_expr_case(expr),
        Expr::Column(expr) => v.visit_expr_column(expr),
        Expr::Constant(expr) => v.visit_expr_constant(expr),
        Expr::Convert(expr) => v.visit_expr_convert(expr),
        Expr::Entity(expr) => v.visit_expr_entity(expr),
        Expr::EntityRefMember(expr) => v.visit_expr_entity_ref_member(expr),
        Expr::Exists(expr) => v.visit_expr_exists(expr),
        Expr::Func(expr) => v.visit_expr_func(expr),
        Expr::GroupingSelect(expr) => v.visit_expr_grouping_select(expr),
        Expr::IsNull(expr) => v.visit_expr_is_null(expr),
        Expr::Literal(expr) => v.visit_expr_literal(expr),
        Expr::Member(expr) => v.visit_expr_member(expr),
        Expr::MethodCall(expr) => v.visit_expr_method_call(expr),
        Expr::Named(expr) => v.visit_expr_named(expr),
        Expr::New(expr) => v.visit_expr_new(expr),
        Expr::Stmt(expr) => v.visit_expr_stmt(expr),
        Expr::TableReference(expr) => v.visit_expr_table_reference(expr),
        Expr::UnaryOp(expr) => v.visit_expr_unary_op(expr),
    }
}

pub fn visit_expr_aggregation<V>(v: &mut V, node: &ExprAggregation)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_binary_op<V>(v: &mut V, node: &ExprBinaryOp)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.lhs);
    v.visit_expr(&node.rhs);
}

pub fn visit_expr_case<V>(v: &mut V, node: &ExprCase)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.test);
    v.visit_expr(&node.then);
    v.visit_expr(&node.otherwise);
}

pub fn visit_expr_column<V>(v: &mut V, node: &SqlColumn)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_constant<V>(v: &mut V, node: &Value)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_convert<V>(v: &mut V, node: &ExprConvert)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.source);
}

pub fn visit_expr_entity<V>(v: &mut V, node: &SqlEntity)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_entity_ref_member<V>(v: &mut V, node: &ExprEntityRefMember)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_exists<V>(v: &mut V, node: &ExprExists)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.subquery);
}

pub fn visit_expr_func<V>(v: &mut V, node: &ExprFunc)
where
    V: Visit + ?Sized,
{
    for arg in &node.args {
        v.visit_expr(arg);
    }
}

pub fn visit_expr_grouping_select<V>(v: &mut V, node: &ExprGroupingSelect)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.key);
    v.visit_expr(&node.element);
}

pub fn visit_expr_is_null<V>(v: &mut V, node: &ExprIsNull)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_literal<V>(v: &mut V, node: &SqlLiteral)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_member<V>(v: &mut V, node: &ExprMember)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_method_call<V>(v: &mut V, node: &ExprMethodCall)
where
    V: Visit + ?Sized,
{
    if let Some(instance) = &node.instance {
        v.visit_expr(instance);
    }
    for arg in &node.args {
        v.visit_expr(arg);
    }
}

pub fn visit_expr_named<V>(v: &mut V, node: &ExprNamed)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_new<V>(v: &mut V, node: &ExprNew)
where
    V: Visit + ?Sized,
{
    for member in &node.members {
        v.visit_expr_named(member);
    }
}

pub fn visit_expr_stmt<V>(v: &mut V, node: &ExprStmt)
where
    V: Visit + ?Sized,
{
    v.visit_stmt(&node.stmt);
}

pub fn visit_expr_table_reference<V>(v: &mut V, node: &ExprTableReference)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_unary_op<V>(v: &mut V, node: &ExprUnaryOp)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.operand);
}

pub fn visit_join<V>(v: &mut V, node: &SqlJoin)
where
    V: Visit + ?Sized,
{
    if let Some(condition) = &node.condition {
        v.visit_expr(condition);
    }
}

pub fn visit_ordering<V>(v: &mut V, node: &Ordering)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_stmt<V>(v: &mut V, node: &SqlStatement)
where
    V: Visit + ?Sized,
{
    for (_, table) in node.tables.iter() {
        v.visit_table(table);
    }

    v.visit_expr(&node.select_projection);

    if let Some(condition) = &node.where_condition {
        v.visit_expr(condition);
    }

    if let Some(key) = &node.group_by {
        v.visit_expr(key);
    }

    for ordering in &node.orderings {
        v.visit_ordering(ordering);
    }

    if let Some(top) = &node.top {
        v.visit_expr(top);
    }
}

pub fn visit_table<V>(v: &mut V, node: &SqlTable)
where
    V: Visit + ?Sized,
{
    v.visit_table_info(node.table_info());

    for join in node.joins() {
        v.visit_join(join);
    }
}

pub fn visit_table_info<V>(v: &mut V, node: &TableInfo)
where
    V: Visit + ?Sized,
{
    match node {
        TableInfo::UnresolvedCollectionJoin(info) => v.visit_expr(&info.source),
        TableInfo::UnresolvedGroupReference(info) => v.visit_stmt(&info.grouping_statement),
        TableInfo::ResolvedSubStatement(info) => v.visit_stmt(&info.statement),
        TableInfo::ResolvedJoinedGrouping(info) => v.visit_stmt(&info.statement),
        TableInfo::Unresolved(_)
        | TableInfo::UnresolvedJoin(_)
        | TableInfo::UnresolvedDummyRow(_)
        | TableInfo::ResolvedSimple(_) => {}
    }
}
