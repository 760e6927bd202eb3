//! Directive interpretation.
//!
//! Turns the raw directives attached to a field into typed modifiers. Only
//! `default`, `unique`, `index`, `primary`, `autoIncrement` and `foreignKey`
//! mean anything here; every other directive is ignored.

use tracing::trace;

use crate::ddl::CompileError;
use crate::schema::{Directive, FieldDefinition, Literal};

/// A directive the compiler understands.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDirective {
    /// `@default(value: ...)`
    Default(Literal),
    /// `@unique`
    Unique,
    /// `@index`
    Index,
    /// `@primary`
    Primary,
    /// `@autoIncrement`
    AutoIncrement,
    /// `@foreignKey(value: "...")`
    ForeignKey(String),
}

impl FieldDirective {
    /// Interpret one directive. Unknown names yield `Ok(None)`.
    ///
    /// `default` and `foreignKey` require a `value` argument; `foreignKey`
    /// additionally requires it to be a string.
    pub fn interpret(
        type_name: &str,
        field: &str,
        directive: &Directive,
    ) -> Result<Option<Self>, CompileError> {
        let missing = || CompileError::MissingDirectiveArgument {
            type_name: type_name.to_string(),
            field: field.to_string(),
            directive: directive.name.clone(),
        };

        let interpreted = match directive.name.as_str() {
            "default" => FieldDirective::Default(directive.value().cloned().ok_or_else(missing)?),
            "unique" => FieldDirective::Unique,
            "index" => FieldDirective::Index,
            "primary" => FieldDirective::Primary,
            "autoIncrement" => FieldDirective::AutoIncrement,
            "foreignKey" => {
                let name = directive.value().and_then(Literal::as_str).ok_or_else(missing)?;
                FieldDirective::ForeignKey(name.to_string())
            }
            other => {
                trace!(type_name, field, directive = other, "ignoring unknown directive");
                return Ok(None);
            }
        };

        Ok(Some(interpreted))
    }
}

/// Everything the directives of one field ask for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnModifiers {
    /// `DEFAULT ...` and `UNIQUE` clauses in directive order.
    pub clauses: Vec<String>,
    pub unique: bool,
    pub indexed: bool,
    pub primary: bool,
    pub auto_increment: bool,
    /// Foreign key column override for relation fields. Last one wins.
    pub foreign_key: Option<String>,
}

impl ColumnModifiers {
    /// Interpret every directive on `field`, in encounter order.
    pub fn interpret(type_name: &str, field: &FieldDefinition) -> Result<Self, CompileError> {
        let mut modifiers = ColumnModifiers::default();

        for directive in &field.directives {
            let Some(interpreted) = FieldDirective::interpret(type_name, &field.name, directive)?
            else {
                continue;
            };

            match interpreted {
                FieldDirective::Default(value) => {
                    modifiers.clauses.push(format!("DEFAULT {}", value.to_sql_default()));
                }
                FieldDirective::Unique => {
                    modifiers.unique = true;
                    modifiers.clauses.push("UNIQUE".to_string());
                }
                FieldDirective::Index => modifiers.indexed = true,
                FieldDirective::Primary => modifiers.primary = true,
                FieldDirective::AutoIncrement => modifiers.auto_increment = true,
                FieldDirective::ForeignKey(name) => modifiers.foreign_key = Some(name),
            }
        }

        Ok(modifiers)
    }
}
