//! Property tests for task graph construction.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use apigen::config::Config;
use apigen::domain::entities::SpecificationDocument;
use apigen::domain::services::TaskGraph;
use apigen::error::ApigenError;

fn root() -> PathBuf {
    std::env::temp_dir().join("apigen-properties")
}

fn documents(names: &[String]) -> Vec<SpecificationDocument> {
    names
        .iter()
        .filter_map(|n| SpecificationDocument::from_path(root().join("openapi").join(format!("{n}.yaml"))))
        .collect()
}

fn build(names: &[String]) -> Result<TaskGraph, ApigenError> {
    TaskGraph::build(&documents(names), &Config::default().graph_settings(&root()))
}

fn distinct_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set(
        proptest::string::string_regex("[a-z][a-z0-9]{0,10}").unwrap(),
        0..8,
    )
    .prop_map(|set| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one unit, one output dir and one source root per document.
    #[test]
    fn property_output_dirs_match_source_roots(names in distinct_names()) {
        let graph = build(&names).unwrap();

        prop_assert_eq!(graph.units().len(), names.len());
        prop_assert_eq!(graph.source_roots().len(), names.len());
        for unit in graph.units() {
            prop_assert!(graph.source_roots().contains(unit.source_root()));
            prop_assert!(unit.source_root().starts_with(unit.output_dir()));
        }
    }

    /// PROPERTY: aggregate dependencies are exactly the sorted unit names.
    #[test]
    fn property_aggregate_covers_every_unit(names in distinct_names()) {
        let graph = build(&names).unwrap();

        let tasks: Vec<String> = graph.units().iter().map(|u| u.task_name().to_string()).collect();
        let sorted: Vec<String> = tasks.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(graph.aggregate().dependencies(), sorted.as_slice());
        prop_assert_eq!(graph.compile().depends_on(), &[graph.aggregate().name().to_string()]);
    }

    /// PROPERTY: adding a document adds exactly one aggregate dependency.
    #[test]
    fn property_adding_a_document_changes_aggregate_by_one(
        names in distinct_names(),
        extra in "[a-z][a-z0-9]{0,10}",
    ) {
        prop_assume!(!names.contains(&extra));
        let before = build(&names).unwrap();

        let mut more = names.clone();
        more.push(extra);
        let after = build(&more).unwrap();

        prop_assert_eq!(after.aggregate().dependencies().len(), before.aggregate().dependencies().len() + 1);
        for dep in before.aggregate().dependencies() {
            prop_assert!(after.aggregate().dependencies().contains(dep));
        }
    }

    /// PROPERTY: two files whose names differ only in separators collide.
    #[test]
    fn property_separator_variants_collide(
        head in "[a-z]{1,6}",
        tail in "[a-z]{1,6}",
    ) {
        let names = vec![format!("{head}-{tail}"), format!("{head}_{tail}")];

        match build(&names) {
            Err(ApigenError::DuplicateTask { first, second, .. }) => {
                prop_assert_ne!(first.as_path(), second.as_path());
                prop_assert!(first.starts_with(root()));
                prop_assert!(second.starts_with(root()));
            }
            other => prop_assert!(false, "expected DuplicateTask, got {:?}", other.map(|g| g.units().len())),
        }
    }
}

#[test]
fn graph_build_is_repeatable() {
    let names = vec!["orders".to_string(), "payments-v2".to_string()];
    let first = build(&names).unwrap();
    let second = build(&names).unwrap();

    assert_eq!(first.execution_order(), second.execution_order());
    assert!(first.units()[0].output_dir().starts_with(Path::new(&root())));
}
