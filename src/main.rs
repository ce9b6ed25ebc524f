use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::fs;
use std::path::PathBuf;

use avalaunch::config_loader;
use avalaunch::node::{flags_to_args, Flags};

/// Configuration utility for launching Avalanche node processes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the node flags YAML file (stock local-network flags if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base directory the node's storage paths are resolved under
    #[arg(short, long)]
    base_dir: String,

    /// Treat configured storage paths as caller-supplied absolute paths
    #[arg(long)]
    separate_base: bool,

    /// Write the resolved metadata record to this JSON file
    #[arg(short, long)]
    metadata_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let flags = match &args.config {
        Some(path) => config_loader::load_flags(path)
            .wrap_err_with(|| format!("Failed to load node flags from '{}'", path.display()))?,
        None => {
            info!("No flags file given, using stock local-network flags");
            Flags::local_network()
        }
    };

    let work_dir = std::env::current_dir().wrap_err("Failed to read working directory")?;
    let work_dir = work_dir.to_string_lossy().into_owned();

    let (node_args, metadata) = flags_to_args(&flags, &args.base_dir, args.separate_base, &work_dir);

    info!(
        "Translated {} launch arguments for node at {}:{}",
        node_args.len(),
        metadata.server_host,
        metadata.http_port
    );

    // One argument per line, ready to splice into a launcher's argv
    for arg in &node_args {
        println!("{}", arg);
    }

    if let Some(out_path) = &args.metadata_out {
        let json = serde_json::to_string_pretty(&metadata)?;
        fs::write(out_path, json)
            .wrap_err_with(|| format!("Failed to write metadata to '{}'", out_path.display()))?;
        info!("Wrote node metadata: {:?}", out_path);
    }

    Ok(())
}
