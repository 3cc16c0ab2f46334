use clap::{Parser, Subcommand};
use molecule_parser::{parse_formula, validator::validate_brackets};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "molecule")]
#[command(about = "Chemical formula tools", version, long_about = None)]
struct Cli {
    /// Log pipeline steps (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse formulas and emit per-element atom counts as JSON
    Parse {
        /// Formulas to parse, e.g. "Mg(OH)2"
        #[arg(value_name = "FORMULA", required = true)]
        formulas: Vec<String>,

        /// Pretty-print the JSON output
        #[arg(long, conflicts_with = "text")]
        pretty: bool,

        /// Print `Symbol: count` lines instead of JSON
        #[arg(long)]
        text: bool,
    },
    /// Check bracket balance only
    Validate {
        #[arg(value_name = "FORMULA", required = true)]
        formulas: Vec<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut failed = false;
    match &cli.command {
        Commands::Parse {
            formulas,
            pretty,
            text,
        } => {
            for formula in formulas {
                match parse_formula(formula) {
                    Ok(atoms) if *text => {
                        println!("{formula}");
                        for (symbol, count) in atoms.iter() {
                            println!("  {symbol}: {count}");
                        }
                    }
                    Ok(atoms) if *pretty => println!("{}", serde_json::to_string_pretty(&atoms)?),
                    Ok(atoms) => println!("{}", serde_json::to_string(&atoms)?),
                    Err(err) => {
                        eprintln!("{formula}: {err}");
                        failed = true;
                    }
                }
            }
        }
        Commands::Validate { formulas } => {
            for formula in formulas {
                match validate_brackets(formula) {
                    Ok(()) => println!("{formula}: ok"),
                    Err(err) => {
                        eprintln!("{formula}: {err}");
                        failed = true;
                    }
                }
            }
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
