//! Property tests for task and package name derivation.

use proptest::prelude::*;

use apigen::domain::value_objects::{package_fragment, task_name_with_prefix, DerivedIdentity};

fn base_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_.-]{1,24}").unwrap()
}

fn word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9]{0,8}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: derivation is a pure function of the base name.
    #[test]
    fn property_derivation_is_deterministic(name in base_name()) {
        let first = DerivedIdentity::derive(&name, "com.example");
        let second = DerivedIdentity::derive(&name, "com.example");
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: task names are ASCII alphanumeric and keep the prefix.
    #[test]
    fn property_task_name_is_alphanumeric(name in base_name()) {
        if let Ok(task) = task_name_with_prefix("generate", &name) {
            prop_assert!(task.starts_with("generate"));
            prop_assert!(task.len() > "generate".len());
            prop_assert!(task.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    /// PROPERTY: separators never change the task name, only the fragments do.
    #[test]
    fn property_separator_choice_does_not_matter(
        words in proptest::collection::vec(word(), 1..4),
    ) {
        let dashed = words.join("-");
        let underscored = words.join("_");
        prop_assert_eq!(
            task_name_with_prefix("generate", &dashed).unwrap(),
            task_name_with_prefix("generate", &underscored).unwrap()
        );
    }

    /// PROPERTY: the package fragment is lower case and comes from before the first dash.
    #[test]
    fn property_package_fragment_precedes_dash(
        head in word(),
        tail in proptest::string::string_regex("[A-Za-z0-9-]{0,12}").unwrap(),
    ) {
        let name = format!("{head}-{tail}");
        let fragment = package_fragment(&name);
        prop_assert!(head.starts_with(&fragment));
        prop_assert!(!fragment.is_empty());
        prop_assert_eq!(fragment.to_lowercase(), fragment.clone());
    }

    /// PROPERTY: derived packages extend the configured root.
    #[test]
    fn property_packages_extend_root(name in word()) {
        let identity = DerivedIdentity::derive(&name, "org.acme").unwrap();
        let base = format!("org.acme.{}", identity.package_fragment());
        prop_assert_eq!(identity.base_package(), base.as_str());
        prop_assert_eq!(identity.api_package(), format!("{base}.api"));
        prop_assert_eq!(identity.model_package(), format!("{base}.dto"));
        prop_assert_eq!(identity.config_package(), format!("{base}.config"));
    }
}
