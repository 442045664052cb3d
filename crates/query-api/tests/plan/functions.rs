use query_api::{ExecutionPlan, FunctionDefinition, PlanError};

use super::helpers::*;

#[test]
fn test_function_redefinition_rejected_even_when_identical() {
    let mut plan = ExecutionPlan::new();
    plan.define_function(concat_function("f1")).unwrap();

    let err = plan.define_function(concat_function("f1")).unwrap_err();

    match err {
        PlanError::FunctionAlreadyExists(id) => assert_eq!(id, "f1"),
        other => panic!("expected function already exists, got {other:?}"),
    }
    assert_eq!(plan.function_definitions().len(), 1);
}

#[test]
fn test_function_requires_id() {
    let mut plan = ExecutionPlan::new();

    let err = plan
        .define_function(FunctionDefinition::default().language("javascript"))
        .unwrap_err();

    assert!(matches!(err, PlanError::Validation(_)));
    assert!(plan.function_definitions().is_empty());
}

#[test]
fn test_function_namespace_is_separate_from_streams() {
    let mut plan = ExecutionPlan::new();

    plan.define_stream(stock_stream("shared")).unwrap();
    plan.define_function(concat_function("shared")).unwrap();

    assert!(plan.function_definition("shared").is_some());
    assert!(plan.stream_definition("shared").is_some());
}

#[test]
fn test_empty_function_id_is_accepted_once() {
    let mut plan = ExecutionPlan::new();

    plan.define_function(concat_function("")).unwrap();

    assert!(plan.function_definition("").is_some());
    assert!(matches!(
        plan.define_function(concat_function("")),
        Err(PlanError::FunctionAlreadyExists(_))
    ));
}
