use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// YAML config file, defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Newline-delimited JSON change events, stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Destination for routed records, stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
