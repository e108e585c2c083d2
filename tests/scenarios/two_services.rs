//! Scenario: a project with a versioned payments contract and an orders contract
//!
//! Steps:
//! 1. `openapi/` holds `payments-v2.yaml` and `orders.yml`
//! 2. The graph is built once
//! 3. Units, packages, aggregate, source roots and compile edge are checked

use apigen::application::BuildContext;
use apigen::config::Config;
use apigen::infrastructure::FsSpecificationLocator;

use crate::common::*;

#[test]
fn scenario_payments_and_orders() {
    let env = TestEnv::builder()
        .with_spec("payments-v2.yaml")
        .with_spec("orders.yml")
        .build();
    let root = env.project_root.path();

    let context =
        BuildContext::discover(root, Config::default(), &FsSpecificationLocator::new()).unwrap();
    let graph = context.task_graph().unwrap();

    let tasks: Vec<&str> = graph.units().iter().map(|u| u.task_name()).collect();
    assert_eq!(tasks, vec!["generateOrders", "generatePaymentsV2"]);

    let payments = graph.unit("generatePaymentsV2").unwrap();
    assert_eq!(payments.identity().api_package(), "com.example.payments.api");
    assert_eq!(payments.identity().model_package(), "com.example.payments.dto");
    assert_eq!(
        payments.output_dir(),
        root.join("build/generated-sources/openapi/payments-v2")
    );

    let orders = graph.unit("generateOrders").unwrap();
    assert_eq!(orders.identity().base_package(), "com.example.orders");
    assert_eq!(
        orders.source_root(),
        root.join("build/generated-sources/openapi/orders/src/main/java")
    );

    assert_eq!(
        graph.aggregate().dependencies(),
        &["generateOrders".to_string(), "generatePaymentsV2".to_string()]
    );
    assert_eq!(graph.source_roots().len(), 2);
    assert_eq!(graph.compile().depends_on(), &["generateAllOpenApi".to_string()]);
    assert_eq!(
        graph.execution_order(),
        vec![
            "generateOrders",
            "generatePaymentsV2",
            "generateAllOpenApi",
            "compileJava"
        ]
    );

    // The binary agrees with the library
    let plan = env.run(&["plan"]);
    assert!(plan.is_success(), "{}", plan.combined_output());
    assert!(plan
        .stdout
        .contains("generateAllOpenApi -> generateOrders, generatePaymentsV2"));
}

#[test]
fn scenario_generator_invocation_contract() {
    let env = TestEnv::builder().with_spec("payments-v2.yaml").build();

    let context = BuildContext::discover(
        env.project_root.path(),
        Config::default(),
        &FsSpecificationLocator::new(),
    )
    .unwrap();
    let graph = context.task_graph().unwrap();
    let invocation = graph.units()[0].invocation();

    assert_eq!(invocation.generator_name, "spring");
    assert_eq!(invocation.config_package, "com.example.payments.config");
    assert_eq!(
        invocation.config_options.get("library").map(String::as_str),
        Some("spring-cloud")
    );
    assert_eq!(
        invocation.config_options.get("useFeignClientUrl").map(String::as_str),
        Some("true")
    );
    assert_eq!(
        invocation.additional_properties.get("lombokBuilder").map(String::as_str),
        Some("true")
    );
}
