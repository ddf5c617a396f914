use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use rill_core::{check_lines, tokenize, FileSystemSource, LineSource};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Rill syntax checker.
#[derive(Parser)]
#[command(name = "rill", version, about = "Rill syntax checker")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a Rill program for syntax errors
    Check {
        /// Path to the program file
        file: PathBuf,
    },

    /// Dump the token stream of a program file (debug aid)
    Tokens {
        /// Path to the program file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file } => {
            cmd_check(&file, cli.output, cli.quiet);
        }
        Commands::Tokens { file } => {
            cmd_tokens(&file, cli.output, cli.quiet);
        }
    }
}

fn cmd_check(file: &Path, output: OutputFormat, quiet: bool) {
    let lines = match FileSystemSource.read_lines(file) {
        Ok(lines) => lines,
        Err(e) => {
            let msg = format!("error reading '{}': {}", file.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    match check_lines(&lines) {
        Ok(()) => {
            if !quiet {
                match output {
                    OutputFormat::Text => println!("Accept"),
                    OutputFormat::Json => println!("{{\"accepted\": true}}"),
                }
            }
        }
        Err(e) => {
            match output {
                OutputFormat::Json => {
                    let err_json = serde_json::json!({
                        "accepted": false,
                        "error": e.to_json_value(),
                    });
                    eprintln!(
                        "{}",
                        serde_json::to_string_pretty(&err_json).unwrap_or_default()
                    );
                }
                OutputFormat::Text => {
                    if !quiet {
                        eprintln!("{}", e);
                    }
                }
            }
            process::exit(1);
        }
    }
}

fn cmd_tokens(file: &Path, output: OutputFormat, quiet: bool) {
    let lines = match FileSystemSource.read_lines(file) {
        Ok(lines) => lines,
        Err(e) => {
            let msg = format!("error reading '{}': {}", file.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let _ = quiet; // the dump is the primary output; quiet has no effect here
    match output {
        OutputFormat::Text => {
            for (idx, line) in lines.iter().enumerate() {
                println!("{}: {:?}", idx + 1, tokenize(line));
            }
        }
        OutputFormat::Json => {
            let dump: Vec<serde_json::Value> = lines
                .iter()
                .enumerate()
                .map(|(idx, line)| {
                    let tokens: Vec<String> =
                        tokenize(line).iter().map(|t| format!("{:?}", t)).collect();
                    serde_json::json!({
                        "line": idx + 1,
                        "tokens": tokens,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::Value::Array(dump))
                    .unwrap_or_default()
            );
        }
    }
}

fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{{\"error\": \"{}\"}}", msg.replace('"', "\\\""));
        }
    }
}
