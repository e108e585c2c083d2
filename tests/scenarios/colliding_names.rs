//! Scenario: two contracts that only differ in case and separators
//!
//! `Order-Events.yaml` and `order_events.yaml` both derive
//! `generateOrderEvents`. The build must stop before any task runs and name
//! both files.

use apigen::application::BuildContext;
use apigen::config::Config;
use apigen::error::ApigenError;
use apigen::infrastructure::FsSpecificationLocator;

use crate::common::*;

#[test]
fn scenario_order_events_collision() {
    let env = TestEnv::builder()
        .with_spec("Order-Events.yaml")
        .with_spec("order_events.yaml")
        .build();

    let context = BuildContext::discover(
        env.project_root.path(),
        Config::default(),
        &FsSpecificationLocator::new(),
    )
    .unwrap();

    match context.task_graph() {
        Err(ApigenError::DuplicateTask {
            task,
            first,
            second,
        }) => {
            assert_eq!(task, "generateOrderEvents");
            assert!(first.ends_with("Order-Events.yaml"));
            assert!(second.ends_with("order_events.yaml"));
        }
        other => panic!("expected DuplicateTask, got {:?}", other.map(|g| g.units().len())),
    }
}

#[test]
fn scenario_yaml_and_yml_with_same_base_name() {
    let env = TestEnv::builder()
        .with_spec("orders.yaml")
        .with_spec("orders.yml")
        .build();

    let result = env.run(&["plan"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("duplicate task 'generateOrders'"));
}
