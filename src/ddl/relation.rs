//! Relation classification.
//!
//! A field's role is decided by its name prefix, not by a directive:
//!
//! | Prefix | Kind | Effect |
//! |--------|------|--------|
//! | `belongsTo` | BelongsTo | NOT NULL fk column, `ON DELETE CASCADE` |
//! | `associateTo` | AssociateTo | nullable fk column, `ON DELETE SET NULL` |
//! | `hasAndBelongsToMany` | HasAndBelongsToMany | join table, no column |
//! | anything else | Scalar | plain column |

use crate::ddl::CompileError;
use crate::ddl::column::{ColumnDef, ForeignKeyConstraint, OnDelete, column_type};
use crate::ddl::directives::ColumnModifiers;
use crate::ddl::table::JoinTable;
use crate::naming;
use crate::schema::{FieldDefinition, ResolvedType};

/// Role of a field, from its name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    Scalar,
    BelongsTo,
    AssociateTo,
    HasAndBelongsToMany,
}

impl RelationKind {
    /// Classify by case-sensitive name prefix.
    pub fn of(field_name: &str) -> Self {
        if field_name.starts_with("belongsTo") {
            RelationKind::BelongsTo
        } else if field_name.starts_with("associateTo") {
            RelationKind::AssociateTo
        } else if field_name.starts_with("hasAndBelongsToMany") {
            RelationKind::HasAndBelongsToMany
        } else {
            RelationKind::Scalar
        }
    }
}

/// A single-valued relation: an fk column plus its constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyRef {
    pub column: String,
    pub references: String,
}

impl ForeignKeyRef {
    pub fn constraint(&self, on_delete: OnDelete) -> ForeignKeyConstraint {
        ForeignKeyConstraint {
            column: self.column.clone(),
            references: self.references.clone(),
            on_delete,
        }
    }
}

/// A field after classification, ready for its renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedField {
    Scalar {
        column: ColumnDef,
        primary: bool,
        /// `Some(unique)` when an index was requested.
        index: Option<bool>,
    },
    BelongsTo(ForeignKeyRef),
    AssociateTo(ForeignKeyRef),
    HasAndBelongsToMany(JoinTable),
}

/// Classify one field of the type compiled into `table`.
pub fn classify_field(
    type_name: &str,
    table: &str,
    field: &FieldDefinition,
) -> Result<ClassifiedField, CompileError> {
    let resolved = resolve(type_name, field)?;
    let modifiers = ColumnModifiers::interpret(type_name, field)?;

    let classified = match RelationKind::of(&field.name) {
        RelationKind::Scalar => ClassifiedField::Scalar {
            column: ColumnDef {
                name: field.name.clone(),
                sql_type: column_type(resolved.name),
                clauses: modifiers.clauses,
                non_null: resolved.non_null,
                auto_increment: modifiers.auto_increment,
            },
            primary: modifiers.primary,
            index: modifiers.indexed.then_some(modifiers.unique),
        },
        RelationKind::BelongsTo => {
            ClassifiedField::BelongsTo(foreign_key_ref(resolved, modifiers.foreign_key))
        }
        RelationKind::AssociateTo => {
            ClassifiedField::AssociateTo(foreign_key_ref(resolved, modifiers.foreign_key))
        }
        RelationKind::HasAndBelongsToMany => {
            ClassifiedField::HasAndBelongsToMany(JoinTable::between(table, &naming::table_name(resolved.name)))
        }
    };

    Ok(classified)
}

fn resolve<'a>(type_name: &str, field: &'a FieldDefinition) -> Result<ResolvedType<'a>, CompileError> {
    field
        .type_ref
        .resolve()
        .ok_or_else(|| CompileError::UnsupportedTypeReference {
            type_name: type_name.to_string(),
            field: field.name.clone(),
            kind: field.type_ref.kind().to_string(),
        })
}

fn foreign_key_ref(target: ResolvedType<'_>, custom: Option<String>) -> ForeignKeyRef {
    let references = naming::table_name(target.name);
    let column = custom.unwrap_or_else(|| naming::foreign_key(&references));
    ForeignKeyRef { column, references }
}
