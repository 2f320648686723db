use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triage_core::{screen, ResponseSet, SymptomCatalog, Tier};
use triage_report::{render_pdf, render_text, PatientDetails, Sex};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Upper-GI endoscopy screening questionnaire")]
struct Cli {
    /// Catalog YAML file to use instead of the built-in EGD catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog's groups and items with their ids
    Catalog {
        /// Only show groups of this tier: urgent, elective or advisory
        #[arg(long)]
        tier: Option<String>,
    },
    /// Evaluate checked items and print the screening outcome
    Screen {
        /// Item ids to mark as checked
        ids: Vec<String>,
        /// JSON answer file with an id-to-bool map; positional ids are
        /// applied on top
        #[arg(long)]
        answers: Option<PathBuf>,
        /// Patient name for the summary (optional)
        #[arg(long)]
        name: Option<String>,
        /// Age in years (optional)
        #[arg(long)]
        age: Option<u16>,
        /// Sex: male, female or other (optional)
        #[arg(long)]
        sex: Option<String>,
        /// Screening date as YYYY-MM-DD (optional)
        #[arg(long)]
        date: Option<String>,
        /// Write the plain-text summary to this path
        #[arg(long)]
        text_out: Option<PathBuf>,
        /// Write the PDF summary to this path
        #[arg(long)]
        pdf_out: Option<PathBuf>,
        /// Print the outcome as JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
}

fn load_catalog(path: Option<&Path>) -> triage_core::TriageResult<SymptomCatalog> {
    match path {
        Some(path) => SymptomCatalog::from_yaml_file(path),
        None => SymptomCatalog::builtin_egd(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("triage_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Catalog { tier } => {
            let tier = tier.as_deref().map(Tier::parse).transpose()?;
            println!("{}", catalog.title().plain());
            for group in catalog.groups() {
                if let Some(wanted) = tier {
                    if group.tier != wanted {
                        continue;
                    }
                }
                println!();
                println!("{} [{} tier]", group.title.plain(), group.tier);
                for item in &group.items {
                    println!("  {:<28} {}", item.id.as_str(), item.label.plain());
                }
            }
        }
        Commands::Screen {
            ids,
            answers,
            name,
            age,
            sex,
            date,
            text_out,
            pdf_out,
            json,
        } => {
            let mut responses: ResponseSet = match answers {
                Some(path) => serde_json::from_str(&std::fs::read_to_string(&path)?)?,
                None => ResponseSet::new(),
            };
            for id in ids {
                responses.set(id, true);
            }

            let details = PatientDetails {
                name,
                age,
                sex: sex.as_deref().map(Sex::parse).transpose()?,
                date: date
                    .as_deref()
                    .map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d"))
                    .transpose()?,
            };

            let outcome = screen(&responses, &catalog);

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", render_text(&outcome, &catalog, &details));
            }

            if let Some(path) = text_out {
                let summary = render_text(&outcome, &catalog, &details);
                match std::fs::write(&path, summary) {
                    Ok(()) => println!("Wrote text summary to {}", path.display()),
                    Err(e) => eprintln!(
                        "Text export failed ({}); the screening result above is unaffected, try again",
                        e
                    ),
                }
            }

            if let Some(path) = pdf_out {
                match render_pdf(&outcome, &catalog, &details) {
                    Ok(bytes) => match std::fs::write(&path, bytes) {
                        Ok(()) => println!("Wrote PDF summary to {}", path.display()),
                        Err(e) => eprintln!(
                            "PDF export failed ({}); the screening result above is unaffected, try again",
                            e
                        ),
                    },
                    Err(e) => eprintln!(
                        "PDF export failed ({}); the screening result above is unaffected, try again",
                        e
                    ),
                }
            }
        }
    }

    Ok(())
}
