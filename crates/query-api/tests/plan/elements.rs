use query_api::{Annotation, ExecutionElement, ExecutionPlan, PlanError, Query};

use super::helpers::*;

#[test]
fn test_query_and_partition_share_name_space() {
    let mut plan = ExecutionPlan::new();
    plan.add_query(named_query("q1")).unwrap();

    let err = plan.add_partition(named_partition("q1")).unwrap_err();

    match err {
        PlanError::Validation(message) => {
            assert!(message.contains("Partition"));
            assert!(message.contains("'q1'"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(plan.execution_elements().len(), 1);
    assert!(plan.execution_elements()[0].as_query().is_some());
}

#[test]
fn test_duplicate_query_name_rejected() {
    let mut plan = ExecutionPlan::new();
    plan.add_query(named_query("q1")).unwrap();

    assert!(matches!(
        plan.add_query(named_query("q1")),
        Err(PlanError::Validation(_))
    ));
    assert_eq!(plan.execution_element_names(), &[Some("q1".to_string())]);
}

#[test]
fn test_anonymous_elements_never_collide() {
    let mut plan = ExecutionPlan::new();

    for _ in 0..5 {
        plan.add_query(anonymous_query()).unwrap();
        plan.add_partition(anonymous_partition()).unwrap();
    }
    plan.add_query(named_query("q1")).unwrap();
    plan.add_query(anonymous_query()).unwrap();

    assert_eq!(plan.execution_elements().len(), 12);
    assert_eq!(
        plan.execution_element_names()
            .iter()
            .filter(|name| name.is_none())
            .count(),
        11
    );
}

#[test]
fn test_empty_declared_name_is_anonymous() {
    let mut plan = ExecutionPlan::new();
    let blank = || Query::new().annotation(Annotation::info_name(""));

    plan.add_query(blank()).unwrap();
    plan.add_query(blank()).unwrap();

    assert_eq!(plan.execution_element_names(), &[None::<String>, None]);
}

#[test]
fn test_names_are_index_aligned_with_elements() {
    let mut plan = ExecutionPlan::new();
    plan.add_query(named_query("q1"))
        .and_then(|p| p.add_partition(anonymous_partition()))
        .and_then(|p| p.add_partition(named_partition("p1")))
        .and_then(|p| p.add_query(anonymous_query()))
        .unwrap();

    let elements = plan.execution_elements();
    let names = plan.execution_element_names();

    assert_eq!(elements.len(), 4);
    assert_eq!(names.len(), 4);
    for (element, name) in elements.iter().zip(names) {
        assert_eq!(element.declared_name(), name.as_deref());
    }
    assert!(matches!(elements[2], ExecutionElement::Partition(_)));
    assert_eq!(names[2].as_deref(), Some("p1"));
}

#[test]
fn test_plan_annotations_are_appended() {
    let mut plan = ExecutionPlan::named("StockPlan");
    plan.annotation(Annotation::new("async").element("buffer.size", "64"));

    assert_eq!(plan.annotations().len(), 2);
    assert_eq!(plan.annotations()[1].name, "async");
    assert_eq!(plan.name(), Some("StockPlan"));
}
