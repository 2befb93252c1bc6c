use super::{CommandBuilder, GenerationStage};

use quarry_core::{
    stmt::{OrderingDirection, SqlStatement},
    Result,
};

/// Appends `SELECT [DISTINCT ][TOP (n) ]projection[ FROM ..][ WHERE ..][ GROUP BY ..][ ORDER BY ..]`.
pub fn generate_statement(
    builder: &mut CommandBuilder,
    stmt: &SqlStatement,
    stage: &mut dyn GenerationStage,
) -> Result<()> {
    builder.append("SELECT ");

    if stmt.is_distinct {
        builder.append("DISTINCT ");
    }

    if let Some(top) = &stmt.top {
        builder.append("TOP (");
        stage.generate_text_for_top_expression(builder, top)?;
        builder.append(") ");
    }

    stage.generate_text_for_select_expression(builder, &stmt.select_projection)?;

    if !stmt.from.is_empty() {
        builder.append(" FROM ");
        for (i, table) in stmt.from.iter().enumerate() {
            stage.generate_text_for_from_table(builder, table, &stmt.tables, i == 0)?;
        }
    }

    if let Some(condition) = &stmt.where_condition {
        builder.append(" WHERE ");
        stage.generate_text_for_where_expression(builder, condition)?;
    }

    if let Some(key) = &stmt.group_by {
        builder.append(" GROUP BY ");
        stage.generate_text_for_group_by_expression(builder, key)?;
    }

    if !stmt.orderings.is_empty() {
        builder.append(" ORDER BY ");
        for (i, ordering) in stmt.orderings.iter().enumerate() {
            if i > 0 {
                builder.append(", ");
            }
            stage.generate_text_for_order_by_expression(builder, &ordering.expr)?;
            builder.append(match ordering.direction {
                OrderingDirection::Asc => " ASC",
                OrderingDirection::Desc => " DESC",
            });
        }
    }

    Ok(())
}
