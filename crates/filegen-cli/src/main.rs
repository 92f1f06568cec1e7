// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, Args, Parser, Subcommand};
use filegen::{matches_size_pattern, units::SizeUnit, Extension, FileRequest};
use itertools::Itertools;
use log::{debug, LevelFilter};

/// Create placeholder files of an exact size
#[derive(Debug, Parser)]
#[command(name = "filegen", version)]
#[command(bin_name = "filegen")]
struct Cli {
    /// Increase log verbosity, may be repeated
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create a file of the requested size
    Generate(GenerateArgs),
    /// List the supported file extensions
    Extensions,
    /// Check whether text is acceptable as a size entry
    CheckSize {
        /// Text to check
        text: String,
    },
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Base file name
    #[arg(short, long)]
    name: Option<String>,

    /// File extension, one of the supported set
    #[arg(short, long)]
    extension: Option<String>,

    /// Size, with at most two decimal places
    #[arg(short, long)]
    size: Option<String>,

    /// Unit of the size: megabytes, kilobytes or bytes
    #[arg(short, long, default_value_t = SizeUnit::default().to_string())]
    unit: String,

    /// Destination file or directory, defaults to NAME.EXTENSION here
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl GenerateArgs {
    fn into_request(self) -> (FileRequest, Option<PathBuf>) {
        let request = FileRequest {
            name: self.name,
            extension: self.extension,
            size: self.size,
            unit: Some(self.unit),
        };
        (request, self.output)
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn generate(args: GenerateArgs) -> miette::Result<()> {
    let (request, output) = args.into_request();
    let spec = request.validate()?;
    let generated = filegen::generate(&spec, output.as_deref())?;

    println!("File created: {}", generated.path.display());
    println!("Size: {} bytes", generated.size);
    Ok(())
}

// One line per extension: name, filter label and filter pattern
fn extension_lines() -> Vec<String> {
    Extension::ALL
        .iter()
        .map(|e| format!("{:<6} {:<12} {}", e.as_str(), e.filter_label(), e.filter_pattern()))
        .collect()
}

fn list_extensions() {
    for line in extension_lines() {
        println!("{line}");
    }
}

// Verdict for a size entry, the error message when it is rejected
fn check_size(text: &str) -> Result<String, String> {
    if matches_size_pattern(text) {
        Ok(format!("'{text}' is accepted"))
    } else {
        Err(format!(
            "'{text}' is not accepted, use digits with at most two decimal places (units: {})",
            SizeUnit::ALL.iter().join(", ")
        ))
    }
}

fn main() -> miette::Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG, when set, takes precedence over -v
    pretty_env_logger::formatted_timed_builder()
        .filter_level(level_for(cli.verbose))
        .parse_env("RUST_LOG")
        .init();
    debug!("Running {:?}", cli.command);

    match cli.command {
        Commands::Generate(args) => generate(args)?,
        Commands::Extensions => list_extensions(),
        Commands::CheckSize { text } => match check_size(&text) {
            Ok(verdict) => println!("{verdict}"),
            Err(verdict) => {
                eprintln!("{verdict}");
                return Ok(ExitCode::FAILURE);
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use test_log::test;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["filegen", "generate", "-n", "demo", "-e", "zip", "-s", "2.5"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };

        let (request, output) = args.into_request();
        assert_eq!(output, None);
        assert_eq!(request.unit.as_deref(), Some("megabytes"));

        let spec = request.validate().unwrap();
        assert_eq!(spec.file_name(), "demo.zip");
        assert_eq!(spec.size_bytes(), 2_621_440);
    }

    #[test]
    fn test_generate_missing_name() {
        let cli = Cli::try_parse_from(["filegen", "generate", "-e", "txt", "-s", "1", "-u", "kb"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };

        let (request, _) = args.into_request();
        assert!(matches!(request.validate(), Err(filegen::Error::MissingField(_))));
    }

    #[test]
    fn test_check_size() {
        assert_eq!(check_size("12.5"), Ok("'12.5' is accepted".to_owned()));
        assert_eq!(check_size(""), Ok("'' is accepted".to_owned()));

        let rejected = check_size("1.234").unwrap_err();
        assert!(rejected.starts_with("'1.234' is not accepted"));
        assert!(rejected.contains("megabytes, kilobytes, bytes"));
        assert!(check_size("abc").is_err());
    }

    #[test]
    fn test_extension_lines() {
        let lines = extension_lines();
        assert_eq!(lines.len(), Extension::ALL.len());
        assert_eq!(lines[0], "txt    TXT files    *.txt");
        assert!(lines.iter().any(|l| l.starts_with("7z ") && l.ends_with("*.7z")));
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::try_parse_from(["filegen", "-vv", "extensions"]).unwrap();
        assert_eq!(level_for(cli.verbose), LevelFilter::Debug);
        assert_eq!(level_for(0), LevelFilter::Warn);
    }
}
