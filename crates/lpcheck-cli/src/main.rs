use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use lpcheck_form::{check_form, random_example, FormReport};

#[derive(Parser)]
#[command(name = "lpcheck")]
#[command(about = "Validator for two-variable linear-program input", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a problem file: objective on the first non-blank line,
    /// one constraint per line after it
    Check {
        /// The file to check
        file: PathBuf,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Print a randomly selected preset example problem
    Example {
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file, format } => {
            let source = match std::fs::read_to_string(&file) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error reading file: {}", e);
                    std::process::exit(1);
                }
            };

            let (objective, constraints) = split_problem(&source);
            let report = check_form(objective, &constraints);

            if format == "json" {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report)
                        .unwrap_or_else(|e| format!("Error serializing report: {}", e))
                );
                if !report.is_valid() {
                    std::process::exit(1);
                }
            } else {
                print_pretty(&file, &report, &constraints);
            }
        }
        Commands::Example { format } => {
            let example = random_example();
            if format == "json" {
                println!(
                    "{}",
                    serde_json::to_string_pretty(example)
                        .unwrap_or_else(|e| format!("Error serializing example: {}", e))
                );
            } else {
                println!("{}", example.objective);
                println!("{}", example.constraints);
            }
        }
    }
}

/// Split file contents the way the form splits its two fields: the
/// first non-blank line is the objective, everything after it is the
/// constraint list.
fn split_problem(source: &str) -> (&str, String) {
    let mut lines = source.lines();
    let objective = loop {
        match lines.next() {
            Some(line) if line.trim().is_empty() => continue,
            Some(line) => break line,
            None => break "",
        }
    };
    let constraints: Vec<&str> = lines.collect();
    (objective, constraints.join("\n"))
}

fn print_pretty(file: &Path, report: &FormReport, constraints: &str) {
    if report.is_valid() {
        let count = constraints
            .lines()
            .filter(|line| !line.trim().is_empty())
            .count();
        println!("✓ {} is valid", file.display());
        println!("  1 objective");
        println!("  {} constraints", count);
        return;
    }

    eprintln!("✗ {} has errors:", file.display());
    for result in report.failures() {
        match &result.message {
            Some(message) => eprintln!("  {}: {}", result.field, message),
            None => eprintln!("  {}: invalid", result.field),
        }
    }

    // Point at the first offending constraint line, if any
    for (i, line) in constraints.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if !lpcheck_lang::validate_constraint_line(line) {
            eprintln!("  first bad constraint (line {}): {}", i + 1, line.trim());
            break;
        }
    }

    std::process::exit(1);
}
