/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2025-2026 trcat contributors
*/

mod cli;
mod report;

use anyhow::{bail, Context as _, Result};
use clap::Parser;
use cli::{Cli, Command, DumpFormat};
use linguist_ts::{parse_document, write_document, TsDocument};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use trcat_core::locale::{available_locales, load_or_source, LocaleId};
use trcat_core::placeholder::substitute;
use trcat_core::{load_for_locale, Config};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli, &mut io::stdout().lock()) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn read_document(path: &Path) -> Result<TsDocument> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_document(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Returns the process exit code. Command output goes to `out`.
fn run(cli: Cli, out: &mut impl Write) -> Result<i32> {
    let config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Command::Lookup {
            context,
            source,
            disambiguation,
            locale,
            args,
        } => {
            let locale = match locale {
                Some(l) => l,
                None => config
                    .effective_language()
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| config.locale.source_language.clone()),
            };
            let catalog = load_or_source(&locale, &config.sources());
            let text = catalog.lookup(&context, &source, disambiguation.as_deref());
            if args.is_empty() {
                writeln!(out, "{}", text)?;
            } else {
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                writeln!(out, "{}", substitute(text, &args))?;
            }
        }
        Command::Stats { path, json } => {
            let doc = read_document(&path)?;
            let (rows, total) = report::stats(&doc);
            if json {
                let value = serde_json::json!({ "contexts": rows, "total": total });
                writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            } else {
                writeln!(
                    out,
                    "{:<40} {:>8} {:>10} {:>8} {:>8} {:>6} {:>7}",
                    "CONTEXT", "FINISHED", "UNFINISHED", "VANISHED", "OBSOLETE", "EMPTY", "DONE"
                )?;
                for row in rows.iter().chain(std::iter::once(&total)) {
                    writeln!(
                        out,
                        "{:<40} {:>8} {:>10} {:>8} {:>8} {:>6} {:>6.1}%",
                        row.context,
                        row.finished,
                        row.unfinished,
                        row.vanished,
                        row.obsolete,
                        row.empty,
                        row.completion()
                    )?;
                }
            }
        }
        Command::Check { path, json } => {
            let doc = read_document(&path)?;
            let issues = report::check(&doc);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&issues)?)?;
            } else {
                for issue in &issues {
                    writeln!(out, "{}", issue)?;
                }
                writeln!(out, "{} issue(s) in {}", issues.len(), path.display())?;
            }
            if !issues.is_empty() {
                return Ok(1);
            }
        }
        Command::Dump { path, format } => {
            let doc = read_document(&path)?;
            match format {
                DumpFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?,
                DumpFormat::Yaml => write!(out, "{}", serde_yaml::to_string(&doc)?)?,
            }
        }
        Command::Normalize { path, output } => {
            let doc = read_document(&path)?;
            let text = write_document(&doc);
            match output {
                Some(out) => fs::write(&out, text)
                    .with_context(|| format!("writing {}", out.display()))?,
                None => out.write_all(text.as_bytes())?,
            }
        }
        Command::Locales => {
            for id in available_locales(&config.sources()) {
                writeln!(out, "{}", id)?;
            }
        }
        Command::SetLocale { locale } => {
            let mut config = config;
            if locale == "system" {
                config.locale.language = String::new();
            } else {
                let Some(id) = LocaleId::parse(&locale) else {
                    bail!("not a locale identifier: {}", locale);
                };
                // Refuse to persist a language that cannot be loaded.
                load_for_locale(&id.to_string(), &config.sources())?;
                config.locale.language = id.to_string();
            }
            config.save(&cli.config)?;
            log::info!("saved language preference to {}", cli.config.display());
        }
    }

    Ok(0)
}
