use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing::error;

use skirmish_cli::logging::init_logging;
use skirmish_cli::script::{self, ScriptError};
use skirmish_core::config::RulesConfig;

/// Two-player turn-based grid skirmish, driven from JSON match scripts.
#[derive(Parser, Debug)]
#[command(name = "skirmish", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a match script and print each outcome as a JSON line.
    Run {
        /// Match script (JSON).
        script: PathBuf,

        /// Rules file (JSON). Omitted fields use the defaults.
        #[arg(long, env = "SKIRMISH_RULES")]
        rules: Option<PathBuf>,
    },
    /// Print the default rules as JSON.
    Rules,
}

fn run(command: Command) -> Result<(), ScriptError> {
    match command {
        Command::Run {
            script: script_path,
            rules: rules_path,
        } => {
            let rules = script::load_rules(rules_path.as_deref())?;
            let match_script = script::load_script(&script_path)?;
            let report = script::run_script(rules, &match_script)?;
            for outcome in &report.outcomes {
                println!("{}", serde_json::to_string(outcome)?);
            }
            println!("{}", serde_json::to_string(&report.final_snapshot)?);
        }
        Command::Rules => {
            println!("{}", serde_json::to_string_pretty(&RulesConfig::default())?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "skirmish failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
