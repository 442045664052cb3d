use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a manifest through the plan builder and report the result
    Check {
        #[arg(long, help = "Manifest file path")]
        manifest: String,

        #[arg(long, help = "Print the assembled plan as JSON instead of a summary")]
        json: bool,
    },
    /// Print the fingerprint of the plan assembled from a manifest
    Fingerprint {
        #[arg(long, help = "Manifest file path")]
        manifest: String,
    },
}
