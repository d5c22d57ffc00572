/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2025-2026 trcat contributors
*/

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file
    #[arg(long, global = true, default_value = "trcat.toml")]
    pub config: PathBuf,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve one UI string for a locale
    Lookup {
        /// Context name, e.g. a dialog class
        context: String,

        /// Untranslated source text
        source: String,

        /// Disambiguation comment of the message
        #[arg(short, long)]
        disambiguation: Option<String>,

        /// Locale to resolve for (default: configured or system locale)
        #[arg(short, long)]
        locale: Option<String>,

        /// Values for %1, %2, ... applied after lookup
        #[arg(short, long = "arg")]
        args: Vec<String>,
    },
    /// Show per-context translation progress of a .ts file
    Stats {
        path: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report placeholder mismatches, empty translations and duplicate keys
    Check {
        path: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the parsed contents of a .ts file
    Dump {
        path: PathBuf,

        #[arg(short, long, value_enum, default_value_t = DumpFormat::Json)]
        format: DumpFormat,
    },
    /// Rewrite a .ts file in canonical Linguist layout
    Normalize {
        path: PathBuf,

        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List locales that can be loaded
    Locales,
    /// Store the preferred UI language in the configuration file
    SetLocale {
        /// Locale ID, or "system" to follow the environment
        locale: String,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum DumpFormat {
    Json,
    Yaml,
}
