//! modforward
//!
//! Forwards the preferred version of each overridden spell and spell tome
//! into a patch module, so the load order ends up using it.
//!
//! Usage:
//!   modforward --load-order load_order.json --settings settings.json
//!
//! The override report is printed to stdout; logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use modforward_cli::{
    DEFAULT_PATCH_NAME, default_output, load_load_order, load_settings, new_patch, write_patch,
};
use modforward_engine::{LinkCache, Patcher};
use modforward_types::ModKey;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "modforward")]
#[command(about = "Forward preferred record overrides into a patch module")]
struct Args {
    /// Load order JSON file, lowest priority first
    #[arg(short, long)]
    load_order: PathBuf,

    /// Settings JSON file (BaseMods, PreferredOverrideOrder)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Where to write the patch; defaults to <patch-name>.json
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Name of the patch module
    #[arg(long, default_value = DEFAULT_PATCH_NAME)]
    patch_name: ModKey,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.as_str()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    info!("modforward starting");

    let load_order = load_load_order(&args.load_order).context("loading load order")?;
    let settings = load_settings(args.settings.as_deref()).context("loading settings")?;
    let mut patch = new_patch(&load_order, &args.patch_name).context("creating patch")?;

    let view = LinkCache::new(&load_order);
    let mut out = io::stdout().lock();
    let summary = Patcher::new(&settings)
        .run(&load_order, &view, &mut patch, &mut out)
        .context("running patcher")?;
    out.flush().context("writing report")?;

    let output = args.output.unwrap_or_else(|| default_output(&args.patch_name));
    write_patch(&output, &patch).context("writing patch")?;

    info!(
        path = %output.display(),
        books = summary.forwarded_books,
        spells = summary.forwarded_spells,
        "patch written"
    );
    Ok(())
}
