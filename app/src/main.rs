mod args;
mod config;
mod yaml;

use anyhow::Result;
use args::Args;
use clap::Parser;
use config::AppConfig;
use log::info;
use tokio::fs::File;
use tokio::io::{self, AsyncBufRead, AsyncWrite, BufReader, BufWriter};
use transform::pipeline;
use transform::transformer::RecordTransformer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    info!("run begins");
    let args = Args::parse();

    let app_config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            yaml::load_config(path)?
        }
        None => AppConfig::default(),
    };

    let reader: Box<dyn AsyncBufRead + Unpin> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path).await?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let writer: Box<dyn AsyncWrite + Unpin> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).await?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let transformer = RecordTransformer::new(app_config.transformer);
    info!(
        "Reading table from '{}', order events go to '{}'",
        transformer.config().table_field,
        transformer.config().order_events_table
    );
    let stats = pipeline::run(&transformer, reader, writer).await?;

    info!("run ends: {}", stats);
    Ok(())
}
