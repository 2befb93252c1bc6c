use super::Engine;

use quarry_core::stmt::{visit_mut, Expr, SqlJoin, SqlStatement, UnaryOp, Value, VisitMut};

/// Makes every expression fit the SQL context it is used in.
///
/// T-SQL has no boolean values. Where a value is expected, predicates become
/// `CASE WHEN p THEN 1 ELSE 0 END` and boolean constants become `1` or `0`.
/// Where a predicate is expected, values are compared with `1`.
struct ContextNormalize;

impl Engine<'_> {
    pub(super) fn normalize_context(&self, stmt: &mut SqlStatement) {
        ContextNormalize.visit_stmt_mut(stmt);
    }
}

impl VisitMut for ContextNormalize {
    fn visit_expr_mut(&mut self, i: &mut Expr) {
        self.children(i);
        to_value(i);
    }

    fn visit_join_mut(&mut self, i: &mut SqlJoin) {
        if let Some(condition) = &mut i.condition {
            self.predicate(condition);
        }
    }

    fn visit_stmt_mut(&mut self, i: &mut SqlStatement) {
        for (_, table) in i.tables.iter_mut() {
            self.visit_table_mut(table);
        }

        self.visit_expr_mut(&mut i.select_projection);

        if let Some(condition) = &mut i.where_condition {
            self.predicate(condition);
        }

        if let Some(key) = &mut i.group_by {
            self.visit_expr_mut(key);
        }

        for ordering in &mut i.orderings {
            self.visit_ordering_mut(ordering);
        }

        if let Some(top) = &mut i.top {
            self.visit_expr_mut(top);
        }
    }
}

impl ContextNormalize {
    fn predicate(&mut self, expr: &mut Expr) {
        self.children(expr);
        to_predicate(expr);
    }

    fn children(&mut self, expr: &mut Expr) {
        match expr {
            Expr::BinaryOp(e) if e.op.is_logical() => {
                self.predicate(&mut e.lhs);
                self.predicate(&mut e.rhs);
            }
            Expr::UnaryOp(e) if e.op == UnaryOp::Not && e.ty.is_bool() => {
                self.predicate(&mut e.operand);
            }
            Expr::Case(e) => {
                self.predicate(&mut e.test);
                self.visit_expr_mut(&mut e.then);
                self.visit_expr_mut(&mut e.otherwise);
            }
            _ => visit_mut::visit_expr_mut(self, expr),
        }
    }
}

fn to_value(expr: &mut Expr) {
    if let Expr::Constant(Value::Bool(value)) = *expr {
        *expr = Expr::literal_int(i64::from(value));
    } else if expr.is_predicate() {
        let predicate = expr.take();
        *expr = Expr::case(predicate, Expr::literal_int(1), Expr::literal_int(0));
    }
}

fn to_predicate(expr: &mut Expr) {
    if let Expr::Constant(Value::Bool(value)) = *expr {
        *expr = Expr::eq(Expr::literal_int(1), Expr::literal_int(i64::from(value)));
    } else if !expr.is_predicate() {
        let value = expr.take();
        *expr = Expr::eq(value, Expr::literal_int(1));
    }
}
