//! Core schema definition types.
//!
//! These types describe an already-parsed type-definition schema: named record
//! types, their fields, type references and attached directives. They are
//! read-only input to the DDL compiler and can be built in Rust or deserialized
//! from a JSON AST that uses the usual GraphQL `kind` names.

use serde::{Deserialize, Serialize};

use crate::dml::escape_string_for_quote;

/// Built-in scalar kinds with a fixed column type token.
///
/// | Scalar | Column type |
/// |--------|-------------|
/// | Int | INTEGER |
/// | Float | REAL |
/// | String | TEXT |
/// | Boolean | BOOLEAN |
/// | Date | DATETIME |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Int,
    Float,
    String,
    Boolean,
    Date,
}

impl ScalarKind {
    /// Look up a scalar kind by its schema type name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Int" => Some(ScalarKind::Int),
            "Float" => Some(ScalarKind::Float),
            "String" => Some(ScalarKind::String),
            "Boolean" => Some(ScalarKind::Boolean),
            "Date" => Some(ScalarKind::Date),
            _ => None,
        }
    }

    /// Returns the SQL column type token for this scalar.
    pub fn sql_type(&self) -> &'static str {
        match self {
            ScalarKind::Int => "INTEGER",
            ScalarKind::Float => "REAL",
            ScalarKind::String => "TEXT",
            ScalarKind::Boolean => "BOOLEAN",
            ScalarKind::Date => "DATETIME",
        }
    }
}

/// A literal directive argument value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Literal {
    /// Render the literal as the operand of a `DEFAULT` clause.
    ///
    /// Strings are double-quoted with embedded `"` doubled, booleans become
    /// `TRUE`/`FALSE` and numbers are emitted bare.
    pub fn to_sql_default(&self) -> String {
        match self {
            Literal::Boolean(true) => "TRUE".to_string(),
            Literal::Boolean(false) => "FALSE".to_string(),
            Literal::Int(i) => i.to_string(),
            Literal::Float(f) => f.to_string(),
            Literal::String(s) => format!("\"{}\"", escape_string_for_quote(s, '"')),
        }
    }

    /// Returns the string payload if this is a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

/// A named directive argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    pub value: Literal,
}

/// A directive attached to a field, e.g. `@default(value: "foo")`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    pub name: String,

    #[serde(default)]
    pub arguments: Vec<Argument>,
}

impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Builder-style helper that appends an argument.
    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<Literal>) -> Self {
        self.arguments.push(Argument {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Returns the first argument with the given name.
    pub fn argument(&self, name: &str) -> Option<&Literal> {
        self.arguments
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| &arg.value)
    }

    /// Returns the conventional `value` argument.
    pub fn value(&self) -> Option<&Literal> {
        self.argument("value")
    }
}

/// A reference to a field's type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TypeRef {
    NamedType {
        name: String,
    },
    NonNullType {
        #[serde(rename = "type")]
        of_type: Box<TypeRef>,
    },
    ListType {
        #[serde(rename = "type")]
        of_type: Box<TypeRef>,
    },
}

/// A type reference reduced to its named type and nullability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedType<'a> {
    pub name: &'a str,
    pub non_null: bool,
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::NamedType { name: name.into() }
    }

    pub fn non_null(name: impl Into<String>) -> Self {
        TypeRef::NonNullType {
            of_type: Box::new(TypeRef::named(name)),
        }
    }

    pub fn list(of_type: TypeRef) -> Self {
        TypeRef::ListType {
            of_type: Box::new(of_type),
        }
    }

    /// AST kind name of this reference.
    pub fn kind(&self) -> &'static str {
        match self {
            TypeRef::NamedType { .. } => "NamedType",
            TypeRef::NonNullType { .. } => "NonNullType",
            TypeRef::ListType { .. } => "ListType",
        }
    }

    /// Resolve to a named type plus nullability.
    ///
    /// Only `NamedType` and `NonNullType(NamedType)` have a column
    /// representation; any other shape returns `None`.
    pub fn resolve(&self) -> Option<ResolvedType<'_>> {
        match self {
            TypeRef::NamedType { name } => Some(ResolvedType {
                name,
                non_null: false,
            }),
            TypeRef::NonNullType { of_type } => match of_type.as_ref() {
                TypeRef::NamedType { name } => Some(ResolvedType {
                    name,
                    non_null: true,
                }),
                _ => None,
            },
            TypeRef::ListType { .. } => None,
        }
    }
}

/// A field of a record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,

    #[serde(rename = "type")]
    pub type_ref: TypeRef,

    #[serde(default)]
    pub directives: Vec<Directive>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            directives: Vec::new(),
        }
    }

    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    /// Does this field carry a directive with the given name?
    pub fn has_directive(&self, name: &str) -> bool {
        self.directives.iter().any(|d| d.name == name)
    }

    /// Returns the last directive with the given name.
    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives.iter().rev().find(|d| d.name == name)
    }
}

/// Kind of a top-level type definition.
///
/// Carried as the AST kind string so unrecognized kinds survive
/// deserialization and can be reported by catalog extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DefinitionKind {
    ObjectType,
    ScalarType,
    InterfaceType,
    UnionType,
    Other(String),
}

impl DefinitionKind {
    pub fn as_str(&self) -> &str {
        match self {
            DefinitionKind::ObjectType => "ObjectTypeDefinition",
            DefinitionKind::ScalarType => "ScalarTypeDefinition",
            DefinitionKind::InterfaceType => "InterfaceTypeDefinition",
            DefinitionKind::UnionType => "UnionTypeDefinition",
            DefinitionKind::Other(kind) => kind,
        }
    }
}

impl From<String> for DefinitionKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "ObjectTypeDefinition" => DefinitionKind::ObjectType,
            "ScalarTypeDefinition" => DefinitionKind::ScalarType,
            "InterfaceTypeDefinition" => DefinitionKind::InterfaceType,
            "UnionTypeDefinition" => DefinitionKind::UnionType,
            _ => DefinitionKind::Other(kind),
        }
    }
}

impl From<DefinitionKind> for String {
    fn from(kind: DefinitionKind) -> Self {
        kind.as_str().to_string()
    }
}

/// A named top-level type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDefinition {
    pub kind: DefinitionKind,
    pub name: String,

    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl TypeDefinition {
    /// An object (record) type with no fields yet.
    pub fn object(name: impl Into<String>) -> Self {
        Self {
            kind: DefinitionKind::ObjectType,
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            kind: DefinitionKind::ScalarType,
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }
}
