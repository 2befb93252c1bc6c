use super::{ident::QualifiedIdent, CommandBuilder, GenerationStage};

use quarry_core::{
    stmt::{JoinSemantics, SqlAppendedTable, SqlJoin, SqlTable, TableId, TableInfo, Tables},
    Error, Result,
};

/// Appends a table of the `FROM` list followed by its joins.
///
/// The first table is rendered bare; a first table with left semantics is
/// applied to a single empty row. Later tables are combined with the ones
/// before them by `CROSS JOIN`, `CROSS APPLY` or `OUTER APPLY`.
pub fn generate_from_table(
    builder: &mut CommandBuilder,
    appended: &SqlAppendedTable,
    tables: &Tables,
    is_first_table: bool,
    stage: &mut dyn GenerationStage,
) -> Result<()> {
    let table = table(tables, appended.table)?;

    if is_first_table {
        if appended.semantics == JoinSemantics::Left {
            builder.append("(SELECT NULL AS [Empty]) AS [Empty] OUTER APPLY ");
        }
    } else {
        builder.append(" ");
        builder.append(combinator(appended.semantics, table.table_info()));
        builder.append(" ");
    }

    generate_table_info(builder, table.table_info(), stage)?;
    generate_joins(builder, table, tables, stage)
}

fn generate_joins(
    builder: &mut CommandBuilder,
    table: &SqlTable,
    tables: &Tables,
    stage: &mut dyn GenerationStage,
) -> Result<()> {
    for join in table.joins() {
        generate_join(builder, join, tables, stage)?;
    }
    Ok(())
}

fn generate_join(
    builder: &mut CommandBuilder,
    join: &SqlJoin,
    tables: &Tables,
    stage: &mut dyn GenerationStage,
) -> Result<()> {
    let joined = table(tables, join.table)?;

    builder.append(" ");
    builder.append(match (&join.condition, join.semantics) {
        (Some(_), JoinSemantics::Inner) => "INNER JOIN",
        (Some(_), JoinSemantics::Left) => "LEFT OUTER JOIN",
        (None, semantics) => combinator(semantics, joined.table_info()),
    });
    builder.append(" ");

    generate_table_info(builder, joined.table_info(), stage)?;

    // Joins of the joined table come before its own ON clause
    generate_joins(builder, joined, tables, stage)?;

    if let Some(condition) = &join.condition {
        builder.append(" ON ");
        stage.generate_text_for_join_condition(builder, condition)?;
    }

    Ok(())
}

/// Keyword combining a table without join condition with the tables before
/// it.
fn combinator(semantics: JoinSemantics, table_info: &TableInfo) -> &'static str {
    match (semantics, table_info) {
        (JoinSemantics::Left, _) => "OUTER APPLY",
        (JoinSemantics::Inner, TableInfo::ResolvedSimple(_)) => "CROSS JOIN",
        (JoinSemantics::Inner, _) => "CROSS APPLY",
    }
}

fn generate_table_info(
    builder: &mut CommandBuilder,
    table_info: &TableInfo,
    stage: &mut dyn GenerationStage,
) -> Result<()> {
    match table_info {
        TableInfo::ResolvedSimple(info) => {
            builder.append_fmt(format_args!("{}", QualifiedIdent(&info.table_name)));
            builder.append(" AS ");
            builder.append_identifier(&info.table_alias);
        }
        TableInfo::ResolvedSubStatement(info) => {
            builder.append("(");
            stage.generate_text_for_sql_statement(builder, &info.statement)?;
            builder.append(") AS ");
            builder.append_identifier(&info.table_alias);
        }
        TableInfo::ResolvedJoinedGrouping(info) => {
            builder.append("(");
            stage.generate_text_for_sql_statement(builder, &info.statement)?;
            builder.append(") AS ");
            builder.append_identifier(&info.table_alias);
        }
        TableInfo::Unresolved(_)
        | TableInfo::UnresolvedJoin(_)
        | TableInfo::UnresolvedCollectionJoin(_)
        | TableInfo::UnresolvedDummyRow(_)
        | TableInfo::UnresolvedGroupReference(_) => {
            return Err(Error::invalid_state(format!(
                "{} is not valid at this point.",
                table_info.kind_name()
            )));
        }
    }
    Ok(())
}

fn table(tables: &Tables, id: TableId) -> Result<&SqlTable> {
    tables
        .get(id)
        .ok_or_else(|| Error::invalid_state(format!("table {id:?} is not part of the statement")))
}
