//! Scenario: layouts at the edges
//!
//! - an empty `openapi/` directory
//! - a contract named only by separators
//! - a contract named only by its extension
//! - a contract whose package fragment starts with a digit
//! - contracts appearing and disappearing between builds

use std::fs;

use apigen::application::BuildContext;
use apigen::config::Config;
use apigen::error::ApigenError;
use apigen::infrastructure::FsSpecificationLocator;

use crate::common::*;

fn context(env: &TestEnv) -> BuildContext {
    BuildContext::discover(
        env.project_root.path(),
        Config::default(),
        &FsSpecificationLocator::new(),
    )
    .unwrap()
}

#[test]
fn scenario_empty_directory() {
    let env = TestEnv::builder().build();
    fs::create_dir_all(env.project_path("openapi")).unwrap();

    let graph = context(&env).task_graph().unwrap();

    assert!(graph.units().is_empty());
    assert!(graph.aggregate().is_noop());
    assert!(graph.source_roots().is_empty());
    assert_eq!(graph.compile().depends_on(), &["generateAllOpenApi".to_string()]);
}

#[test]
fn scenario_separator_only_name() {
    let env = TestEnv::builder().with_spec("---.yaml").build();

    let err = context(&env).task_graph().unwrap_err();

    match err {
        ApigenError::Naming { file, .. } => assert!(file.ends_with("---.yaml")),
        other => panic!("expected Naming, got {other:?}"),
    }
}

#[test]
fn scenario_extension_only_name() {
    let env = TestEnv::builder()
        .with_spec(".yaml")
        .with_spec("orders.yaml")
        .build();

    let context = context(&env);
    assert_eq!(context.documents().len(), 2);

    match context.task_graph().unwrap_err() {
        ApigenError::Naming { file, .. } => assert!(file.ends_with(".yaml")),
        other => panic!("expected Naming, got {other:?}"),
    }
    assert_eq!(env.run(&["plan"]).exit_code, 1);
}

#[test]
fn scenario_digit_leading_package_is_kept_with_warning() {
    let env = TestEnv::builder().with_spec("2024-orders.yaml").build();

    let graph = context(&env).task_graph().unwrap();
    assert_eq!(graph.units()[0].task_name(), "generate2024Orders");
    assert_eq!(graph.units()[0].identity().base_package(), "com.example.2024");

    let result = env.run(&["plan"]);
    assert!(result.is_success());
    assert!(result.stderr.contains("not a valid Java identifier"));
}

#[test]
fn scenario_contracts_come_and_go() {
    let env = TestEnv::builder().with_spec("orders.yaml").build();
    assert_eq!(context(&env).task_graph().unwrap().aggregate().dependencies().len(), 1);

    env.write_spec("payments.yaml");
    let grown = context(&env).task_graph().unwrap();
    assert_eq!(grown.aggregate().dependencies().len(), 2);

    env.remove_spec("orders.yaml");
    let shrunk = context(&env).task_graph().unwrap();
    assert_eq!(
        shrunk.aggregate().dependencies(),
        &["generatePayments".to_string()]
    );
}
