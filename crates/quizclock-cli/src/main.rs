//! quizclock CLI: a timed quiz over a CSV of questions and answers.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use quizclock_core::LoadError;

mod run;

#[derive(Parser)]
#[command(
    name = "quizclock",
    version,
    about = "Timed quiz over a CSV of questions and answers"
)]
struct Cli {
    /// CSV file in the form of question,answer [default: problems.csv]
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Time limit for the whole quiz, in seconds [default: 30]
    #[arg(long)]
    limit: Option<u64>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizclock=warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run::execute(cli.csv, cli.limit, cli.config).await {
        // Problem source failures are reported on stdout, like the quiz itself.
        match e.downcast_ref::<LoadError>() {
            Some(load) => println!("{load}"),
            None => eprintln!("Error: {e:#}"),
        }
        process::exit(1);
    }
}
