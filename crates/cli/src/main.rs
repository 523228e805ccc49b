//! Custody CLI - run registry operations against a local ledger snapshot.
//!
//! Each invocation loads the snapshot (or starts empty), executes one
//! operation as the identity given by `--user`/`--role`, and writes the
//! snapshot back if the operation committed.
//!
//! ```text
//! custody --user DVLA --role regulator init
//! custody --user DVLA --role regulator invoke createAsset '{"asset":{"assetID":"1234567890"}}'
//! custody --user DVLA invoke readAsset '{"asset":{"assetID":"1234567890"}}' --json
//! ```

mod commands;
mod format;

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use custody_executor::{
    AccessMode, Executor, IdentityResolver, LedgerStore, RegistryConfig, StaticIdentity,
    CONFIG_FILE_NAME,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::{build_cli, DEFAULT_LEDGER};
use format::{format_error, format_output, OutputMode};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let matches = build_cli().get_matches();
    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Raw
    };

    let ledger_path = PathBuf::from(
        matches
            .get_one::<String>("ledger")
            .map(String::as_str)
            .unwrap_or(DEFAULT_LEDGER),
    );

    let executor = match open_executor(&matches, &ledger_path) {
        Ok(executor) => executor,
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(1);
        }
    };

    let (name, args) = match matches.subcommand() {
        Some(("init", sub)) => ("init".to_string(), collect(sub, "pairs")),
        Some(("invoke", sub)) => (
            sub.get_one::<String>("name").cloned().unwrap_or_default(),
            collect(sub, "args"),
        ),
        _ => {
            eprintln!("(error) a subcommand is required");
            process::exit(2);
        }
    };

    process::exit(run(&executor, &name, &args, &ledger_path, mode));
}

fn collect(matches: &clap::ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn open_executor(matches: &clap::ArgMatches, ledger_path: &Path) -> Result<Executor> {
    let config_path = PathBuf::from(
        matches
            .get_one::<String>("config")
            .map(String::as_str)
            .unwrap_or(CONFIG_FILE_NAME),
    );
    RegistryConfig::write_default_if_missing(&config_path)
        .with_context(|| format!("Failed to prepare config {}", config_path.display()))?;
    let config = RegistryConfig::from_file(&config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;

    let store = LedgerStore::open_or_empty(ledger_path)
        .with_context(|| format!("Failed to open ledger {}", ledger_path.display()))?;

    let identity: Arc<dyn IdentityResolver> = match matches.get_one::<String>("user") {
        Some(user) => {
            let role = matches
                .get_one::<String>("role")
                .map(String::as_str)
                .unwrap_or("");
            Arc::new(StaticIdentity::new(user.as_str(), role))
        }
        None => Arc::new(StaticIdentity::unavailable()),
    };

    let access_mode = if matches.get_flag("read-only") {
        AccessMode::ReadOnly
    } else {
        AccessMode::ReadWrite
    };

    Ok(Executor::new_with_mode(
        Arc::new(store),
        config,
        identity,
        access_mode,
    ))
}

fn run(
    executor: &Executor,
    name: &str,
    args: &[String],
    ledger_path: &Path,
    mode: OutputMode,
) -> i32 {
    let before = executor.store().current_version();
    match executor.invoke(name, args) {
        Ok(bytes) => {
            if executor.store().current_version() != before {
                if let Err(e) = executor.store().save_snapshot(ledger_path) {
                    eprintln!("(error) {}", e);
                    return 1;
                }
                info!(path = %ledger_path.display(), "Ledger saved");
            }
            let formatted = format_output(&bytes, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            1
        }
    }
}
