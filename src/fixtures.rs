//! Schema AST fixtures for unit tests.
//!
//! Each constant is the JSON form of a parsed schema. Fixtures that stand for
//! schemas written with the directive header also carry its `Date` scalar and
//! `scalars` union, which catalog extraction must skip.

/// `type Persons { first_name: String! last_name: String! phone: String email: String }`
pub const SIMPLE: &str = r#"{ "definitions": [
  { "kind": "ObjectTypeDefinition", "name": "Persons", "fields": [
    { "name": "first_name", "type": { "kind": "NonNullType", "type": { "kind": "NamedType", "name": "String" } } },
    { "name": "last_name", "type": { "kind": "NonNullType", "type": { "kind": "NamedType", "name": "String" } } },
    { "name": "phone", "type": { "kind": "NamedType", "name": "String" } },
    { "name": "email", "type": { "kind": "NamedType", "name": "String" } }
  ] }
] }"#;

/// Blogs with `@default` on a string and two non-null booleans.
pub const DEFAULT_DIRECTIVE: &str = r#"{ "definitions": [
  { "kind": "ScalarTypeDefinition", "name": "Date" },
  { "kind": "UnionTypeDefinition", "name": "scalars" },
  { "kind": "ObjectTypeDefinition", "name": "Blogs", "fields": [
    { "name": "name", "type": { "kind": "NamedType", "name": "String" } },
    { "name": "content", "type": { "kind": "NamedType", "name": "String" } },
    { "name": "handle", "type": { "kind": "NamedType", "name": "String" } },
    { "name": "title", "type": { "kind": "NamedType", "name": "String" },
      "directives": [{ "name": "default", "arguments": [{ "name": "value", "value": "foo" }] }] },
    { "name": "description", "type": { "kind": "NamedType", "name": "String" } },
    { "name": "comments_enabled", "type": { "kind": "NonNullType", "type": { "kind": "NamedType", "name": "Boolean" } },
      "directives": [{ "name": "default", "arguments": [{ "name": "value", "value": true }] }] },
    { "name": "moderated", "type": { "kind": "NonNullType", "type": { "kind": "NamedType", "name": "Boolean" } },
      "directives": [{ "name": "default", "arguments": [{ "name": "value", "value": true }] }] }
  ] }
] }"#;

/// Defaults of every literal kind.
pub const DEFAULT_VALUE_TYPES: &str = r#"{ "definitions": [
  { "kind": "ScalarTypeDefinition", "name": "Date" },
  { "kind": "UnionTypeDefinition", "name": "scalars" },
  { "kind": "ObjectTypeDefinition", "name": "Foos", "fields": [
    { "name": "title", "type": { "kind": "NamedType", "name": "String" },
      "directives": [{ "name": "default", "arguments": [{ "name": "value", "value": "foo" }] }] },
    { "name": "comments_enabled", "type": { "kind": "NonNullType", "type": { "kind": "NamedType", "name": "Boolean" } },
      "directives": [{ "name": "default", "arguments": [{ "name": "value", "value": true }] }] },
    { "name": "auto_enabled", "type": { "kind": "NonNullType", "type": { "kind": "NamedType", "name": "Boolean" } },
      "directives": [{ "name": "default", "arguments": [{ "name": "value", "value": false }] }] },
    { "name": "count", "type": { "kind": "NonNullType", "type": { "kind": "NamedType", "name": "Int" } },
      "directives": [{ "name": "default", "arguments": [{ "name": "value", "value": 0 }] }] },
    { "name": "price", "type": { "kind": "NonNullType", "type": { "kind": "NamedType", "name": "Float" } },
      "directives": [{ "name": "default", "arguments": [{ "name": "value", "value": 1.5 }] }] }
  ] }
] }"#;

/// Students declaring fields the default model synthesizes.
pub const SKIP_DEFAULT_FIELDS: &str = r#"{ "definitions": [
  { "kind": "ScalarTypeDefinition", "name": "Date" },
  { "kind": "ObjectTypeDefinition", "name": "Students", "fields": [
    { "name": "id", "type": { "kind": "NamedType", "name": "Int" } },
    { "name": "created_at", "type": { "kind": "NamedType", "name": "Date" } },
    { "name": "updated_at", "type": { "kind": "NamedType", "name": "Date" } },
    { "name": "name", "type": { "kind": "NonNullType", "type": { "kind": "NamedType", "name": "String" } } }
  ] }
] }"#;

/// `handle: String @index`
pub const INDEX: &str = r#"{ "definitions": [
  { "kind": "ObjectTypeDefinition", "name": "Blogs", "fields": [
    { "name": "handle", "type": { "kind": "NamedType", "name": "String" },
      "directives": [{ "name": "index" }] }
  ] }
] }"#;

/// `handle: String @unique`
pub const UNIQUE: &str = r#"{ "definitions": [
  { "kind": "ObjectTypeDefinition", "name": "Blogs", "fields": [
    { "name": "handle", "type": { "kind": "NamedType", "name": "String" },
      "directives": [{ "name": "unique" }] }
  ] }
] }"#;

/// `handle: String @unique @index`
pub const UNIQUE_INDEX: &str = r#"{ "definitions": [
  { "kind": "ObjectTypeDefinition", "name": "Blogs", "fields": [
    { "name": "handle", "type": { "kind": "NamedType", "name": "String" },
      "directives": [{ "name": "unique" }, { "name": "index" }] }
  ] }
] }"#;

/// Blogs `belongsTo: Users`
pub const BELONGS_TO: &str = r#"{ "definitions": [
  { "kind": "ObjectTypeDefinition", "name": "Users", "fields": [
    { "name": "name", "type": { "kind": "NamedType", "name": "String" } }
  ] },
  { "kind": "ObjectTypeDefinition", "name": "Blogs", "fields": [
    { "name": "handle", "type": { "kind": "NamedType", "name": "String" } },
    { "name": "belongsTo", "type": { "kind": "NamedType", "name": "Users" } }
  ] }
] }"#;

/// Blogs `belongsTo: Users @foreignKey(value: "owner")`
pub const BELONGS_TO_CUSTOM_KEY: &str = r#"{ "definitions": [
  { "kind": "ObjectTypeDefinition", "name": "Users", "fields": [
    { "name": "name", "type": { "kind": "NamedType", "name": "String" } }
  ] },
  { "kind": "ObjectTypeDefinition", "name": "Blogs", "fields": [
    { "name": "handle", "type": { "kind": "NamedType", "name": "String" } },
    { "name": "belongsTo", "type": { "kind": "NamedType", "name": "Users" },
      "directives": [{ "name": "foreignKey", "arguments": [{ "name": "value", "value": "owner" }] }] }
  ] }
] }"#;

/// Blogs `associateTo: Users`
pub const ASSOCIATE_TO: &str = r#"{ "definitions": [
  { "kind": "ObjectTypeDefinition", "name": "Users", "fields": [
    { "name": "name", "type": { "kind": "NamedType", "name": "String" } }
  ] },
  { "kind": "ObjectTypeDefinition", "name": "Blogs", "fields": [
    { "name": "handle", "type": { "kind": "NamedType", "name": "String" } },
    { "name": "associateTo", "type": { "kind": "NamedType", "name": "Users" } }
  ] }
] }"#;

/// Articles `hasAndBelongsToMany: Tags`
pub const HAS_AND_BELONGS_TO_MANY: &str = r#"{ "definitions": [
  { "kind": "ObjectTypeDefinition", "name": "Tags", "fields": [
    { "name": "name", "type": { "kind": "NonNullType", "type": { "kind": "NamedType", "name": "String" } } }
  ] },
  { "kind": "ObjectTypeDefinition", "name": "Articles", "fields": [
    { "name": "content", "type": { "kind": "NamedType", "name": "String" } },
    { "name": "hasAndBelongsToMany", "type": { "kind": "NamedType", "name": "Tags" } }
  ] }
] }"#;

/// `id: Int! @primary`
pub const PRIMARY_KEY: &str = r#"{ "definitions": [
  { "kind": "ObjectTypeDefinition", "name": "Persons", "fields": [
    { "name": "id", "type": { "kind": "NonNullType", "type": { "kind": "NamedType", "name": "Int" } },
      "directives": [{ "name": "primary" }] },
    { "name": "name", "type": { "kind": "NamedType", "name": "String" } }
  ] }
] }"#;

/// Two `@primary` fields on one type.
pub const COMPOSITE_PRIMARY: &str = r#"{ "definitions": [
  { "kind": "ObjectTypeDefinition", "name": "Memberships", "fields": [
    { "name": "group_id", "type": { "kind": "NonNullType", "type": { "kind": "NamedType", "name": "Int" } },
      "directives": [{ "name": "primary" }] },
    { "name": "member_id", "type": { "kind": "NonNullType", "type": { "kind": "NamedType", "name": "Int" } },
      "directives": [{ "name": "primary" }] },
    { "name": "role", "type": { "kind": "NamedType", "name": "String" } }
  ] }
] }"#;

/// `id: Int! @primary @autoIncrement` on a singular type name.
pub const AUTO_INCREMENT_SINGULAR: &str = r#"{ "definitions": [
  { "kind": "ObjectTypeDefinition", "name": "Person", "fields": [
    { "name": "id", "type": { "kind": "NonNullType", "type": { "kind": "NamedType", "name": "Int" } },
      "directives": [{ "name": "primary" }, { "name": "autoIncrement" }] },
    { "name": "name", "type": { "kind": "NamedType", "name": "String" } }
  ] }
] }"#;

/// `meta: JSON` with an undeclared scalar.
pub const JSON_TYPE: &str = r#"{ "definitions": [
  { "kind": "ObjectTypeDefinition", "name": "Person", "fields": [
    { "name": "meta", "type": { "kind": "NamedType", "name": "JSON" } },
    { "name": "name", "type": { "kind": "NamedType", "name": "String" } }
  ] }
] }"#;

/// A full introspection-style type map: built-ins and private entries mixed in.
pub const WITH_BUILTINS: &str = r#"{ "definitions": [
  { "kind": "ScalarTypeDefinition", "name": "String" },
  { "kind": "ScalarTypeDefinition", "name": "Int" },
  { "kind": "ObjectTypeDefinition", "name": "__Schema" },
  { "kind": "InterfaceTypeDefinition", "name": "Node" },
  { "kind": "ObjectTypeDefinition", "name": "Users", "fields": [
    { "name": "name", "type": { "kind": "NamedType", "name": "String" } }
  ] }
] }"#;

/// An enum definition, which has no table form.
pub const ENUM_DEFINITION: &str = r#"{ "definitions": [
  { "kind": "ObjectTypeDefinition", "name": "Users", "fields": [] },
  { "kind": "EnumTypeDefinition", "name": "Color" }
] }"#;

/// A list-typed field.
pub const LIST_FIELD: &str = r#"{ "definitions": [
  { "kind": "ObjectTypeDefinition", "name": "Articles", "fields": [
    { "name": "tags", "type": { "kind": "ListType", "type": { "kind": "NamedType", "name": "String" } } }
  ] }
] }"#;
