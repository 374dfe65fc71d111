use anyhow::Result;
use bottle_icons::{run_batch, Config};
use clap::Parser;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "generate-icons")]
#[command(about = "Render the water bottle app icon set", long_about = None)]
struct Cli {
    /// YAML file listing the output directory, icons and font candidates
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Directory to write the icons into (must already exist)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    run_batch(&config, &mut io::stdout().lock())?;

    Ok(())
}
