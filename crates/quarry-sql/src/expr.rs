use super::{CommandBuilder, GenerationStage};

use quarry_core::{
    stmt::{
        AggregationModifier, BinaryOp, Expr, ExprAggregation, ExprBinaryOp, ExprNamed, SqlColumn,
        SqlEntity, SqlLiteral, UnaryOp, Value,
    },
    Error, Result,
};

/// Appends the SQL text of a resolved expression. Nested statements are
/// generated through `stage`.
pub fn generate_expression(
    builder: &mut CommandBuilder,
    expr: &Expr,
    stage: &mut dyn GenerationStage,
) -> Result<()> {
    Generator { builder, stage }.expr(expr)
}

struct Generator<'a> {
    builder: &'a mut CommandBuilder,
    stage: &'a mut dyn GenerationStage,
}

impl Generator<'_> {
    fn expr(&mut self, expr: &Expr) -> Result<()> {
        match expr {
            Expr::Aggregation(e) => self.aggregation(e),
            Expr::BinaryOp(e) => self.binary_op(e),
            Expr::Case(e) => {
                self.builder.append("CASE WHEN ");
                self.expr(&e.test)?;
                self.builder.append(" THEN ");
                self.expr(&e.then)?;
                self.builder.append(" ELSE ");
                self.expr(&e.otherwise)?;
                self.builder.append(" END");
                Ok(())
            }
            Expr::Column(column) => {
                self.column(column);
                Ok(())
            }
            Expr::Constant(value) => self.constant(value, expr),
            Expr::Convert(e) => {
                let Some(type_name) = e.ty.sql_type_name() else {
                    return Err(unsupported(expr));
                };
                self.builder.append("CONVERT(");
                self.builder.append(type_name);
                self.builder.append(", ");
                self.expr(&e.source)?;
                self.builder.append(")");
                Ok(())
            }
            Expr::Entity(entity) => self.entity(entity),
            Expr::Exists(e) => {
                self.builder.append("EXISTS(");
                self.expr(&e.subquery)?;
                self.builder.append(")");
                Ok(())
            }
            Expr::Func(e) => {
                self.builder.append(&e.name);
                self.builder.append("(");
                self.list(", ", &e.args)?;
                self.builder.append(")");
                Ok(())
            }
            Expr::GroupingSelect(e) => self.named(&ExprNamed {
                name: Some("key".to_string()),
                expr: e.key.clone(),
            }),
            Expr::IsNull(e) => {
                self.builder.append("(");
                self.expr(&e.expr)?;
                self.builder.append(if e.negate {
                    " IS NOT NULL)"
                } else {
                    " IS NULL)"
                });
                Ok(())
            }
            Expr::Literal(SqlLiteral::Int(value)) => {
                self.builder.append(&value.to_string());
                Ok(())
            }
            Expr::Literal(SqlLiteral::Text(value)) => {
                self.builder.append_string_literal(value);
                Ok(())
            }
            Expr::Named(e) => self.named(e),
            Expr::New(e) => self
                .builder
                .append_separated(",", &e.members, |builder, member| {
                    Generator {
                        builder,
                        stage: &mut *self.stage,
                    }
                    .named(member)
                }),
            Expr::Stmt(e) => {
                self.builder.append("(");
                self.stage.generate_text_for_sql_statement(self.builder, &e.stmt)?;
                self.builder.append(")");
                Ok(())
            }
            Expr::UnaryOp(e) => {
                let token = match e.op {
                    UnaryOp::Not if e.ty.is_bool() => "NOT ",
                    UnaryOp::Not => "~",
                    UnaryOp::Negate => "-",
                    UnaryOp::Plus => "+",
                    UnaryOp::Convert => "",
                };
                self.builder.append(token);
                self.expr(&e.operand)
            }
            Expr::EntityRefMember(_)
            | Expr::Member(_)
            | Expr::MethodCall(_)
            | Expr::TableReference(_) => Err(unsupported(expr)),
        }
    }

    fn list(&mut self, separator: &str, exprs: &[Expr]) -> Result<()> {
        let stage = &mut *self.stage;
        self.builder.append_separated(separator, exprs, |builder, expr| {
            Generator {
                builder,
                stage: &mut *stage,
            }
            .expr(expr)
        })
    }

    fn column(&mut self, column: &SqlColumn) {
        self.builder.append_identifier(&column.owning_table_alias);
        self.builder.append(".");
        if column.is_star() {
            self.builder.append(SqlColumn::STAR);
        } else {
            self.builder.append_identifier(&column.sql_name());
        }
    }

    fn entity(&mut self, entity: &SqlEntity) -> Result<()> {
        self.list(",", &entity.projection_columns())
    }

    fn constant(&mut self, value: &Value, expr: &Expr) -> Result<()> {
        match value {
            Value::Null => self.builder.append("NULL"),
            Value::List(items) if items.is_empty() => {
                self.builder.append("(SELECT NULL WHERE 1 = 0)")
            }
            Value::List(items) => {
                self.builder.append("(");
                self.builder.append_separated(", ", items, |builder, item| {
                    builder.append_parameter(item);
                    Ok(())
                })?;
                self.builder.append(")");
            }
            // Booleans must have been turned into predicates or bit values,
            // and domain objects replaced by the mapping resolver.
            Value::Bool(_) | Value::Object { .. } => return Err(unsupported(expr)),
            _ => {
                self.builder.append_parameter(value);
            }
        }
        Ok(())
    }

    fn binary_op(&mut self, e: &ExprBinaryOp) -> Result<()> {
        let Some(token) = e.op.sql_token() else {
            debug_assert_eq!(e.op, BinaryOp::Coalesce);
            self.builder.append("COALESCE(");
            self.expr(&e.lhs)?;
            self.builder.append(", ");
            self.expr(&e.rhs)?;
            self.builder.append(")");
            return Ok(());
        };

        self.builder.append("(");
        self.expr(&e.lhs)?;
        self.builder.append(" ");
        self.builder.append(token);
        self.builder.append(" ");
        self.expr(&e.rhs)?;
        self.builder.append(")");
        Ok(())
    }

    fn named(&mut self, named: &ExprNamed) -> Result<()> {
        if let Expr::Entity(entity) = &*named.expr {
            let entity = entity.update(entity.item_type.clone(), &entity.table_alias, named.name.clone());
            return self.entity(&entity);
        }

        self.expr(&named.expr)?;
        self.builder.append(" AS ");
        self.builder.append_identifier(named.output_name());
        Ok(())
    }

    fn aggregation(&mut self, e: &ExprAggregation) -> Result<()> {
        let function = match e.modifier {
            AggregationModifier::Count | AggregationModifier::LongCount => {
                self.builder.append("COUNT(*)");
                return Ok(());
            }
            AggregationModifier::Average => "AVG",
            AggregationModifier::Max => "MAX",
            AggregationModifier::Min => "MIN",
            AggregationModifier::Sum => "SUM",
        };

        self.builder.append(function);
        self.builder.append("(");
        self.expr(e.expr.unwrap_named())?;
        self.builder.append(")");
        Ok(())
    }
}

fn unsupported(expr: &Expr) -> Error {
    Error::not_supported(format!(
        "The expression '{expr}' cannot be translated to SQL text by this SQL generator. \
         Expression type '{}' is not supported.",
        expr.kind_name()
    ))
}
