//! Segment Training Binary
//!
//! Trains one model per segment of a JSON frame and prints the report.
//! Ctrl-C cancels before the next segment starts.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    segmodels::log()?;
    segmodels::cli::Args::run().await
}
