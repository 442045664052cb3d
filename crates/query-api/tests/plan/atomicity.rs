use query_api::{AttributeType, ExecutionPlan, FunctionDefinition, StreamDefinition};

use super::helpers::*;

/// Runs a mutation expected to fail and asserts the plan is unchanged,
/// including the function map that plan equality ignores.
fn assert_rejected_without_change<F>(mutate: F)
where
    F: FnOnce(&mut ExecutionPlan) -> bool,
{
    let mut plan = populated_plan();
    let snapshot = plan.clone();

    let failed = mutate(&mut plan);

    assert!(failed, "mutation was expected to fail");
    assert_eq!(plan, snapshot);
    assert_eq!(plan.function_definitions(), snapshot.function_definitions());
    assert_eq!(
        plan.execution_element_names(),
        snapshot.execution_element_names()
    );
}

#[test]
fn test_rejected_stream_leaves_plan_unchanged() {
    assert_rejected_without_change(|plan| plan.define_stream(stock_stream("StockTable")).is_err());
    assert_rejected_without_change(|plan| {
        let changed = StreamDefinition::new("StockStream")
            .attribute("symbol", AttributeType::String)
            .unwrap();
        plan.define_stream(changed).is_err()
    });
    assert_rejected_without_change(|plan| plan.define_stream(StreamDefinition::default()).is_err());
}

#[test]
fn test_rejected_table_leaves_plan_unchanged() {
    assert_rejected_without_change(|plan| plan.define_table(stock_table("StockStream")).is_err());
}

#[test]
fn test_rejected_function_leaves_plan_unchanged() {
    assert_rejected_without_change(|plan| plan.define_function(concat_function("concat")).is_err());
    assert_rejected_without_change(|plan| {
        plan.define_function(FunctionDefinition::default()).is_err()
    });
}

#[test]
fn test_rejected_elements_leave_plan_unchanged() {
    assert_rejected_without_change(|plan| plan.add_query(named_query("p1")).is_err());
    assert_rejected_without_change(|plan| plan.add_partition(named_partition("q1")).is_err());
}
