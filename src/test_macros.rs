//! Declarative macros for generating DDL compile tests.
//!
//! Each macro compiles a JSON schema fixture and checks the output, so a test
//! case is just the fixture, the default-model flag and the expectation.

/// Generate a test that verifies compiled DDL matches exactly.
///
/// # Example
///
/// ```ignore
/// ddl_test! {
///     test_name: test_index_directive,
///     fixture: fixtures::INDEX,
///     use_default_model: false,
///     expected: "\nCREATE TABLE blogs(\n    handle TEXT\n);\nCREATE INDEX idx_blogs_handle ON blogs (handle);\n",
/// }
/// ```
#[macro_export]
macro_rules! ddl_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:expr,
        use_default_model: $flag:expr,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let ddl = $crate::test_utils::compile_fixture($fixture, $flag);
            assert_eq!(ddl, $expected);
        }
    };
}

/// Generate a test that verifies compiled DDL contains (or omits) fragments.
///
/// Use this when exact string matching is too brittle.
#[macro_export]
macro_rules! ddl_contains_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:expr,
        use_default_model: $flag:expr,
        contains: [$($needle:literal),* $(,)?]
        $(, omits: [$($absent:literal),* $(,)?])? $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let ddl = $crate::test_utils::compile_fixture($fixture, $flag);
            $(
                assert!(ddl.contains($needle), concat!("DDL should contain: ", $needle));
            )*
            $($(
                assert!(!ddl.contains($absent), concat!("DDL should not contain: ", $absent));
            )*)?
        }
    };
}

/// Generate a test that verifies compiling a fixture fails with a given error.
#[macro_export]
macro_rules! ddl_error_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:expr,
        error: $pattern:pat $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = $crate::test_utils::try_compile_fixture($fixture, true);
            assert!(
                matches!(result, Err($pattern)),
                "unexpected result: {:?}",
                result
            );
        }
    };
}
