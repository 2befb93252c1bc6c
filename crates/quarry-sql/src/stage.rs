use super::{generate_expression, generate_from_table, generate_statement, CommandBuilder};

use quarry_core::{
    stmt::{Expr, SqlAppendedTable, SqlStatement, Tables},
    Result,
};

/// The steps of SQL generation. The statement and table generators call
/// back into the stage for every nested part, so a stage can replace any of
/// them.
pub trait GenerationStage {
    fn generate_text_for_from_table(
        &mut self,
        builder: &mut CommandBuilder,
        table: &SqlAppendedTable,
        tables: &Tables,
        is_first_table: bool,
    ) -> Result<()>;

    fn generate_text_for_select_expression(
        &mut self,
        builder: &mut CommandBuilder,
        expr: &Expr,
    ) -> Result<()>;

    fn generate_text_for_where_expression(
        &mut self,
        builder: &mut CommandBuilder,
        expr: &Expr,
    ) -> Result<()>;

    fn generate_text_for_group_by_expression(
        &mut self,
        builder: &mut CommandBuilder,
        expr: &Expr,
    ) -> Result<()>;

    fn generate_text_for_order_by_expression(
        &mut self,
        builder: &mut CommandBuilder,
        expr: &Expr,
    ) -> Result<()>;

    fn generate_text_for_top_expression(
        &mut self,
        builder: &mut CommandBuilder,
        expr: &Expr,
    ) -> Result<()>;

    fn generate_text_for_join_condition(
        &mut self,
        builder: &mut CommandBuilder,
        expr: &Expr,
    ) -> Result<()>;

    fn generate_text_for_sql_statement(
        &mut self,
        builder: &mut CommandBuilder,
        stmt: &SqlStatement,
    ) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultGenerationStage;

impl GenerationStage for DefaultGenerationStage {
    fn generate_text_for_from_table(
        &mut self,
        builder: &mut CommandBuilder,
        table: &SqlAppendedTable,
        tables: &Tables,
        is_first_table: bool,
    ) -> Result<()> {
        generate_from_table(builder, table, tables, is_first_table, self)
    }

    fn generate_text_for_select_expression(
        &mut self,
        builder: &mut CommandBuilder,
        expr: &Expr,
    ) -> Result<()> {
        generate_expression(builder, expr, self)
    }

    fn generate_text_for_where_expression(
        &mut self,
        builder: &mut CommandBuilder,
        expr: &Expr,
    ) -> Result<()> {
        generate_expression(builder, expr, self)
    }

    fn generate_text_for_group_by_expression(
        &mut self,
        builder: &mut CommandBuilder,
        expr: &Expr,
    ) -> Result<()> {
        // A record key groups by each of its members, without output names
        if let Expr::New(record) = expr {
            return builder.append_separated(", ", &record.members, |builder, member| {
                generate_expression(builder, &member.expr, self)
            });
        }
        generate_expression(builder, expr, self)
    }

    fn generate_text_for_order_by_expression(
        &mut self,
        builder: &mut CommandBuilder,
        expr: &Expr,
    ) -> Result<()> {
        // SQL Server rejects constants in ORDER BY
        if let Expr::Constant(_) | Expr::Literal(_) = expr {
            builder.append("(SELECT ");
            generate_expression(builder, expr, self)?;
            builder.append(")");
            return Ok(());
        }
        generate_expression(builder, expr, self)
    }

    fn generate_text_for_top_expression(
        &mut self,
        builder: &mut CommandBuilder,
        expr: &Expr,
    ) -> Result<()> {
        generate_expression(builder, expr, self)
    }

    fn generate_text_for_join_condition(
        &mut self,
        builder: &mut CommandBuilder,
        expr: &Expr,
    ) -> Result<()> {
        generate_expression(builder, expr, self)
    }

    fn generate_text_for_sql_statement(
        &mut self,
        builder: &mut CommandBuilder,
        stmt: &SqlStatement,
    ) -> Result<()> {
        generate_statement(builder, stmt, self)
    }
}
