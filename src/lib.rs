// src/lib.rs

pub mod cli;
pub mod config;
pub mod document;
pub mod engine;
pub mod errors;
pub mod generator;
pub mod logging;
pub mod rules;
pub mod walk;
pub mod watch;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::cli::CliArgs;
use crate::config::{load_optional, Settings};
use crate::engine::{Runtime, RuntimeEvent, RuntimeOptions};
use crate::generator::{Generator, Regenerate};
use crate::rules::RuleList;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI overrides
/// - the initial regeneration
/// - (optional) file watcher
/// - runtime loop
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_optional(args.config.as_deref().map(Path::new))?;
    let settings = Settings::resolve(&cfg, args.target.as_deref(), args.output.as_deref())?;
    let settings = Arc::new(settings);

    if args.dry_run {
        print_dry_run(&settings);
        return Ok(());
    }

    info!(
        target = %settings.target_dir.display(),
        output = %settings.output_path.display(),
        ignored_rules = settings.ignored.len(),
        content_rules = settings.content_ignored.len(),
        "treedoc starting"
    );

    let generator = Arc::new(Generator::new(Arc::clone(&settings)));

    // The first document is produced unconditionally, before watching starts.
    let initial = {
        let generator = Arc::clone(&generator);
        tokio::task::spawn_blocking(move || generator.regenerate()).await?
    };
    if let Err(err) = initial {
        if args.once {
            return Err(err);
        }
        error!("error while generating markdown document: {err:#}");
    }

    if args.once {
        return Ok(());
    }

    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);

    let _watcher_handle = watch::spawn_watcher(Arc::clone(&settings), rt_tx.clone())?;
    info!("press Ctrl+C to stop");

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    let runtime = Runtime::new(generator, RuntimeOptions::default(), rt_rx, rt_tx);
    runtime.run().await?;
    Ok(())
}

/// Simple dry-run output: print resolved settings and compiled rules.
fn print_dry_run(settings: &Settings) {
    println!("treedoc dry-run");
    println!("  target_directory = {}", settings.target_dir.display());
    println!("  output_markdown_path = {}", settings.output_path.display());
    println!("  sort_entries = {}", settings.sort_entries);
    println!();
    print_rules(&settings.ignored);
    println!();
    print_rules(&settings.content_ignored);
}

fn print_rules(list: &RuleList) {
    println!("{} ({}):", list.name(), list.len());
    for rule in list.rules() {
        println!("  - {:<40} {} {:?}", rule.raw(), rule.kind(), rule.body());
    }
}
