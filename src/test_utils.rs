//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a valid module name (C identifier)
    pub fn module_name() -> impl Strategy<Value = String> {
        "[a-z_][a-z0-9_]{0,30}".prop_filter("Name must not be empty", |s| !s.is_empty())
    }

    /// Generate a valid semver version string
    pub fn semver_version() -> impl Strategy<Value = String> {
        (0u32..100, 0u32..100, 0u32..100)
            .prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
    }

    /// Generate a C source file name
    pub fn source_file_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,16}".prop_map(|stem| format!("{stem}.c"))
    }

    /// Generate a classifier string
    pub fn classifier() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("Development Status :: 3 - Alpha".to_string()),
            Just("Natural Language :: English".to_string()),
            Just("Programming Language :: C".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_module_name_generator(name in module_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(crate::core::descriptor::is_valid_module_name(&name));
        }

        #[test]
        fn test_semver_version_generator(version in semver_version()) {
            prop_assert!(semver::Version::parse(&version).is_ok());
        }

        #[test]
        fn test_source_file_name_generator(name in source_file_name()) {
            prop_assert!(name.ends_with(".c"));
            prop_assert!(name.len() > 2);
        }
    }
}
