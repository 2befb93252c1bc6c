use super::Engine;

use quarry_core::{
    stmt::{self, Expr, SqlStatement, TableInfo, Visit},
    Error, Result,
};

use std::fmt;

/// Finds the first construct that should not survive mapping resolution.
#[derive(Default)]
struct Verify {
    error: Option<Error>,
}

impl Engine<'_> {
    pub(super) fn verify(&self, stmt: &SqlStatement) -> Result<()> {
        let mut verify = Verify::default();
        verify.visit_stmt(stmt);

        match verify.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl stmt::Visit for Verify {
    fn visit_expr(&mut self, i: &Expr) {
        if i.is_unresolved() {
            self.fail(i.kind_name(), i);
            return;
        }

        stmt::visit::visit_expr(self, i);
    }

    fn visit_table_info(&mut self, i: &TableInfo) {
        if !i.is_resolved() {
            self.fail(i.kind_name(), i);
            return;
        }

        stmt::visit::visit_table_info(self, i);
    }
}

impl Verify {
    fn fail(&mut self, kind: &str, node: &dyn fmt::Display) {
        if self.error.is_none() {
            self.error = Some(Error::invalid_state(format!(
                "{kind} '{node}' is not valid at this point."
            )));
        }
    }
}
