//! CLI tool for ar archive inspection and extraction.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use arex::{Archive, Error, ExtractOptions, FailurePolicy};

/// Pure Rust ar archive extractor
#[derive(Parser)]
#[command(name = "arex")]
#[command(author, version, about = "Pure Rust ar archive extractor", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List archive members (alias: l)
    #[command(alias = "l")]
    List {
        /// Archive file to list
        archive: PathBuf,

        /// Show offsets and metadata
        #[arg(long, short = 'v')]
        verbose: bool,
    },

    /// Extract members from archive (alias: x)
    #[command(alias = "x")]
    Extract {
        /// Archive file to extract
        archive: PathBuf,

        /// Output directory
        #[arg(short = 'o', long, default_value = ".")]
        output: PathBuf,

        /// Keep extracting after a member fails to write
        #[arg(long)]
        keep_going: bool,

        /// Suppress per-member output
        #[arg(long, short = 'q')]
        quiet: bool,
    },
}

/// Process exit codes, one per failure class.
mod exit_codes {
    pub const OK: u8 = 0;
    pub const FORMAT_ERROR: u8 = 3;
    pub const IO_ERROR: u8 = 4;
    pub const PARTIAL_FAILURE: u8 = 5;
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let code = match cli.command {
        Commands::List { archive, verbose } => cmd_list(&archive, verbose),
        Commands::Extract {
            archive,
            output,
            keep_going,
            quiet,
        } => cmd_extract(&archive, &output, keep_going, quiet),
    };
    ExitCode::from(code)
}

fn cmd_list(archive: &PathBuf, verbose: bool) -> u8 {
    let archive = match Archive::open_path(archive) {
        Ok(a) => a,
        Err(e) => return report(e),
    };
    for member in archive.members() {
        if verbose {
            println!(
                "{:>10}  {:>8}  {}",
                member.size,
                format!("{:#x}", member.offset),
                member.name
            );
        } else {
            println!("{}", member.name);
        }
    }
    exit_codes::OK
}

fn cmd_extract(archive_path: &PathBuf, output: &PathBuf, keep_going: bool, quiet: bool) -> u8 {
    let archive = match Archive::open_path(archive_path) {
        Ok(a) => a,
        Err(e) => return report(e),
    };

    let policy = if keep_going {
        FailurePolicy::Continue
    } else {
        FailurePolicy::Abort
    };
    let options = ExtractOptions::new().failure_policy(policy);

    let result = match archive.extract(output, &options) {
        Ok(r) => r,
        Err(e) => return report(e),
    };

    if !quiet {
        for extracted in &result.extracted {
            println!("{}", extracted.path.display());
        }
    }
    for (member, reason) in &result.failures {
        eprintln!("arex: failed to extract '{}': {}", member, reason);
    }

    if result.is_err() {
        exit_codes::PARTIAL_FAILURE
    } else {
        exit_codes::OK
    }
}

fn report(error: Error) -> u8 {
    eprintln!("arex: {}", error);
    if error.is_format_error() {
        exit_codes::FORMAT_ERROR
    } else {
        exit_codes::IO_ERROR
    }
}
