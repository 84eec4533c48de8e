// Файл: crates/dirctl/src/main.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use directory_core::{derive_options, filter_all, normalize_with_report, FilterState};
use serde_json::Value;
use std::fs;
use tracing_subscriber::{fmt, EnvFilter};

use dirctl::clean::clean;
use dirctl::duplicates::find_duplicates;
use dirctl::legacy::migrate_str;

#[derive(Parser)]
#[command(version, about = "Company directory data tools for companies.json")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Найти повторяющиеся имена компаний
    Duplicates {
        #[arg(long)]
        input: String,
    },
    /// Convert the legacy array format to the current one
    MigrateLegacy {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Normalize and report dropped entries
    Validate {
        #[arg(long)]
        input: String,
    },
    /// Rewrite the file with only valid, sanitized entries
    Clean {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Print the field / location options
    Options {
        #[arg(long)]
        input: String,
    },
    /// Print companies matching the filters
    Filter {
        #[arg(long)]
        input: String,
        #[arg(long)]
        field: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        q: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Duplicates { input } => {
            let report = find_duplicates(&read(&input)?)?;
            if report.is_empty() {
                println!("No duplicate companies found.");
            } else {
                println!("Duplicate companies found:");
                for (name, n) in &report.exact {
                    println!("  {name}: {n} entries");
                }
                for (key, names) in &report.case_insensitive {
                    println!("  {key}: differs only by case: {}", names.join(", "));
                }
            }
        }
        Cmd::MigrateLegacy { input, out } => {
            let v = migrate_str(&read(&input)?).with_context(|| format!("parse legacy {input}"))?;
            write_json(&out, &v)?;
            let n = v["companies"].as_object().map(|m| m.len()).unwrap_or(0);
            eprintln!("migrated {n} companies -> {out}");
        }
        Cmd::Validate { input } => {
            let report = normalize_with_report(&load(&input)?)?;
            for (name, reason) in &report.dropped {
                println!("dropped\t{name}\t{reason}");
            }
            println!(
                "kept={} dropped={}",
                report.companies.len(),
                report.dropped.len()
            );
        }
        Cmd::Clean { input, out } => {
            let (cleaned, report) = clean(&load(&input)?)?;
            write_json(&out, &cleaned)?;
            eprintln!(
                "wrote {} companies ({} dropped) -> {out}",
                report.companies.len(),
                report.dropped.len()
            );
        }
        Cmd::Options { input } => {
            let report = normalize_with_report(&load(&input)?)?;
            let opts = derive_options(&report.companies);
            println!("fields:");
            for f in &opts.fields {
                println!("  {f}");
            }
            println!("locations:");
            for l in &opts.locations {
                println!("  {l}");
            }
        }
        Cmd::Filter {
            input,
            field,
            location,
            q,
        } => {
            let report = normalize_with_report(&load(&input)?)?;
            let mut st = FilterState::new();
            st.set_field(field.as_deref());
            st.set_location(location.as_deref());
            st.set_search_term(q.as_deref().unwrap_or_default());

            let visible = filter_all(&report.companies, &st);
            for c in &visible {
                println!(
                    "{}\t{}\t{:.4},{:.4}\t{}",
                    c.name,
                    c.locations.join("; "),
                    c.coordinates.lat,
                    c.coordinates.lon,
                    c.work_field.join(", ")
                );
            }
            eprintln!("{} of {} companies", visible.len(), report.companies.len());
        }
    }
    Ok(())
}

fn read(path: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {path}"))
}

fn load(path: &str) -> Result<Value> {
    serde_json::from_str(&read(path)?).with_context(|| format!("parse {path}"))
}

fn write_json(path: &str, v: &Value) -> Result<()> {
    let s = serde_json::to_string_pretty(v)?;
    fs::write(path, s).with_context(|| format!("write {path}"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
