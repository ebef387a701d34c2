use crate::frame::Catalog;
use crate::frame::Frame;
use crate::job::Orchestrator;
use crate::training::Blueprint;
use crate::training::Registry;
use anyhow::Context;
use clap::Parser;
use serde_json::Value as Json;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

/// Train one model per segment of a JSON frame and print the report.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Training frame document.
    #[arg(long)]
    train: PathBuf,
    /// Validation frame document.
    #[arg(long)]
    valid: Option<PathBuf>,
    /// Key frame document, one row per segment.
    #[arg(long, conflicts_with = "by", required_unless_present = "by")]
    segments: Option<PathBuf>,
    /// Segment by every distinct combination of these training columns.
    #[arg(long, value_delimiter = ',')]
    by: Vec<String>,
    #[arg(long, default_value = "mean")]
    algo: String,
    #[arg(long)]
    response: String,
    /// Hyperparameter as name=value; values parse as JSON, else as text.
    #[arg(long = "hyper", value_parser = hyper)]
    hyper: Vec<(String, Json)>,
    #[arg(long, default_value = "segment_models")]
    dest: String,
}

impl Args {
    pub async fn run() -> anyhow::Result<()> {
        let args = Self::parse();
        let catalog = Arc::new(Catalog::default());
        let train = catalog.put(load(&args.train)?)?;
        let mut parms = Blueprint::new(&args.algo, train.key(), &args.response);
        if let Some(path) = args.valid.as_deref() {
            let valid = load(path)?;
            anyhow::ensure!(valid.key() != train.key(), "train and valid are both named {}", train.key());
            parms = parms.with_valid(catalog.put(valid)?.key());
        }
        let parms = args
            .hyper
            .into_iter()
            .fold(parms, |parms, (name, value)| parms.with(&name, value));
        let segments = match args.segments.as_deref() {
            Some(path) => load(path)?,
            None => train.distinct("segments", &args.by)?,
        };
        let orchestrator = Orchestrator::new(parms, segments, Registry::default(), catalog)?
            .with_deadline(crate::deadline());
        let keys = orchestrator.keys().clone();
        let handle = orchestrator.submit(&args.dest);
        let job = handle.job().clone();
        tokio::spawn({
            let job = job.clone();
            async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    println!();
                    job.cancel();
                }
            }
        });
        let result = handle.join().await;
        println!("{}", serde_json::to_string_pretty(&job.report().entries(&keys))?);
        result.map(|_| ()).map_err(anyhow::Error::from)
    }
}

fn load(path: &Path) -> anyhow::Result<Frame> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Frame::try_from(text.as_str()).with_context(|| format!("parsing {}", path.display()))
}

fn hyper(arg: &str) -> Result<(String, Json), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got {:?}", arg))?;
    let value = serde_json::from_str(value).unwrap_or_else(|_| Json::from(value));
    Ok((name.to_string(), value))
}
