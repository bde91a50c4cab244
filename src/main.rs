//! Shunt - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use shunt::util::logger;
use shunt::{translate, translate_file, NAME, VERSION};

/// Infix to postfix (Reverse Polish) notation translator
#[derive(Parser, Debug)]
#[command(name = "shunt")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a single infix expression
    Translate {
        /// Expression to translate, e.g. "(3+4)*5"
        #[arg(value_name = "EXPR")]
        expr: String,
    },

    /// Translate each line of a text file
    Run {
        /// File with one infix expression per line
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Start the interactive translator
    Repl,

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        logger::init_debug();
    } else {
        logger::init_cli();
    }

    match args.command {
        Commands::Translate { expr } => {
            let postfix = translate(&expr)
                .with_context(|| format!("Failed to translate: {}", expr))?;
            println!("{}", postfix);
        }
        Commands::Run { file } => {
            let lines = translate_file(&file)
                .with_context(|| format!("Failed to run: {}", file.display()))?;
            for line in lines {
                match line.postfix {
                    Ok(postfix) => {
                        println!("Infix:   {}", line.infix);
                        println!("Postfix: {}", postfix);
                    }
                    Err(e) => {
                        eprintln!("{} {}: {}", "error:".red().bold(), line.infix, e);
                    }
                }
            }
        }
        Commands::Repl => {
            let mut repl = shunt::repl::Repl::new().context("Failed to start REPL")?;
            repl.run().context("REPL terminated with an error")?;
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}
