//! Extraction of user-defined record types from a parsed schema.

use indexmap::IndexMap;
use tracing::trace;

use crate::schema::definition::{DefinitionKind, TypeDefinition};
use crate::schema::{Schema, SchemaError};

/// Scalar names every schema carries implicitly.
const BUILTIN_SCALARS: &[&str] = &["Int", "Float", "String", "Boolean", "ID"];

/// Record types keyed by name, in declaration order.
pub type TypeCatalog<'a> = IndexMap<&'a str, &'a TypeDefinition>;

fn is_excluded(name: &str) -> bool {
    name.starts_with('_') || BUILTIN_SCALARS.contains(&name)
}

/// Filter a schema down to its object (record) types.
///
/// Private entries (leading underscore) and built-in scalars are skipped
/// regardless of kind. Scalar, interface and union definitions are dropped.
/// Any other definition kind is rejected with
/// [`SchemaError::UnknownDefinitionKind`].
///
/// When a name is declared twice the later definition wins but keeps the
/// position of the first.
pub fn extract_catalog(schema: &Schema) -> Result<TypeCatalog<'_>, SchemaError> {
    let mut catalog = TypeCatalog::new();

    for definition in &schema.definitions {
        let name = definition.name.as_str();
        if is_excluded(name) {
            trace!(type_name = name, "skipping built-in or private type");
            continue;
        }

        match &definition.kind {
            DefinitionKind::ObjectType => {
                catalog.insert(name, definition);
            }
            DefinitionKind::ScalarType
            | DefinitionKind::InterfaceType
            | DefinitionKind::UnionType => {
                trace!(type_name = name, kind = definition.kind.as_str(), "skipping non-record type");
            }
            DefinitionKind::Other(kind) => {
                return Err(SchemaError::UnknownDefinitionKind {
                    name: name.to_string(),
                    kind: kind.clone(),
                });
            }
        }
    }

    Ok(catalog)
}
