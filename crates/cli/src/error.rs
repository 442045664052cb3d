use query_api::PlanError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the manifest file: {0}")]
    ManifestRead(#[from] std::io::Error),

    #[error("Failed to deserialize the manifest file as JSON: {0}")]
    ManifestDeserialize(#[from] serde_json::Error),

    #[error("Step {index} ({op}) was rejected: {source}")]
    Step {
        index: usize,
        op: &'static str,
        source: PlanError,
    },

    #[error("Failed to compute plan fingerprint: {0}")]
    Fingerprint(PlanError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),
}
