use crate::error::CliError;
use query_api::ExecutionPlan;

pub fn plan_json(plan: &ExecutionPlan) -> Result<String, CliError> {
    serde_json::to_string_pretty(plan).map_err(CliError::JsonSerialize)
}

pub fn plan_summary(plan: &ExecutionPlan) -> Result<String, CliError> {
    let fingerprint = plan.fingerprint().map_err(CliError::Fingerprint)?;
    let names: Vec<&str> = plan
        .execution_element_names()
        .iter()
        .map(|name| name.as_deref().unwrap_or("-"))
        .collect();

    let mut out = String::new();
    out.push_str(&format!(
        "Plan '{}' ({fingerprint})\n",
        plan.name().unwrap_or("<unnamed>")
    ));
    out.push_str(&format!("{:<12} {}\n", "Streams", plan.stream_definitions().len()));
    out.push_str(&format!("{:<12} {}\n", "Tables", plan.table_definitions().len()));
    out.push_str(&format!(
        "{:<12} {}\n",
        "Functions",
        plan.function_definitions().len()
    ));
    out.push_str(&format!(
        "{:<12} {} [{}]\n",
        "Elements",
        plan.execution_elements().len(),
        names.join(", ")
    ));
    Ok(out)
}
