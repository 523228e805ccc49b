//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};

/// Default ledger snapshot path.
pub const DEFAULT_LEDGER: &str = "custody-ledger.json";

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("custody")
        .about("Command-line front end for the custody registry")
        .subcommand_required(true)
        .arg(
            Arg::new("ledger")
                .long("ledger")
                .help("Ledger snapshot path (default: custody-ledger.json)")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Registry configuration file (default: custody.toml)")
                .global(true),
        )
        .arg(
            Arg::new("user")
                .long("user")
                .help("Username of the invoking identity")
                .global(true),
        )
        .arg(
            Arg::new("role")
                .long("role")
                .help("Role attribute of the invoking identity")
                .default_value("")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Pretty-print JSON output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("read-only")
                .long("read-only")
                .help("Reject commands that write to the ledger")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("init")
                .about("Initialize the registry, registering username/credential pairs")
                .arg(Arg::new("pairs").num_args(0..).help("USER CREDENTIAL ...")),
        )
        .subcommand(
            Command::new("invoke")
                .about("Invoke a registry operation by name")
                .arg(
                    Arg::new("name")
                        .required(true)
                        .help("Operation name, e.g. createAsset"),
                )
                .arg(
                    Arg::new("args")
                        .num_args(0..)
                        .allow_hyphen_values(true)
                        .help("Positional operation arguments"),
                ),
        )
}
