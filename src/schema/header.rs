//! Directive declarations that callers prepend to schema source.

/// Declarations for the `Date` scalar and every directive the compiler
/// interprets. Prepending this to schema source lets an upstream parser
/// accept `@default`, `@unique`, `@index`, `@foreignKey`, `@primary` and
/// `@autoIncrement`.
pub const SCHEMA_HEADER: &str = "
scalar Date
union scalars = Int | Float | String | Boolean
directive @default( value: scalars! ) on FIELD_DEFINITION

directive @unique on FIELD_DEFINITION
directive @index on FIELD_DEFINITION
directive @foreignKey( value: String! ) on FIELD_DEFINITION
directive @primary on FIELD_DEFINITION
directive @autoIncrement on FIELD_DEFINITION
";
