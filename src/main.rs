// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! erd-canvas CLI entrypoint.
//!
//! `replay` reads a JSON array of `{name, data}` commands, dispatches them in order into a
//! fresh store and prints the resulting snapshot. Set `RUST_LOG=erd_canvas=debug` to trace each
//! executor.

use std::fmt;
use std::path::PathBuf;

use erd_canvas::command::{decode_commands, CommandDecodeError};
use erd_canvas::Store;
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} replay <commands.json> [--pretty]\n\nReplays the commands into an empty canvas and prints the final state as JSON.\nLog verbosity follows RUST_LOG (default: warn)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    commands_path: Option<PathBuf>,
    pretty: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    match args.next().as_deref() {
        Some("replay") => {}
        _ => return Err(()),
    }

    for arg in args {
        match arg.as_str() {
            "--pretty" => {
                if options.pretty {
                    return Err(());
                }
                options.pretty = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.commands_path.is_some() {
                    return Err(());
                }
                options.commands_path = Some(PathBuf::from(arg));
            }
        }
    }

    if options.commands_path.is_none() {
        return Err(());
    }

    Ok(options)
}

#[derive(Debug)]
enum ReplayError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Decode(CommandDecodeError),
    Encode(serde_json::Error),
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Decode(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Decode(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

fn replay(raw: &str, pretty: bool) -> Result<String, ReplayError> {
    let commands = decode_commands(raw).map_err(ReplayError::Decode)?;
    tracing::info!(count = commands.len(), "replaying commands");

    let mut store = Store::new();
    store.dispatch_all(&commands);

    let snapshot = store.snapshot();
    let encoded = if pretty {
        serde_json::to_string_pretty(&snapshot)
    } else {
        serde_json::to_string(&snapshot)
    };
    encoded.map_err(ReplayError::Encode)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "erd-canvas".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    let result = (|| -> Result<String, ReplayError> {
        let path = options.commands_path.unwrap_or_default();
        let raw = std::fs::read_to_string(&path)
            .map_err(|source| ReplayError::Read { path, source })?;
        replay(&raw, options.pretty)
    })();

    match result {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("erd-canvas: {err}");
            std::process::exit(1);
        }
    }
}
