use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;

use riskforms::{export, scoring, FormTemplate, FormType, RiskLevel, TemplateStore};

#[derive(Parser)]
#[command(name = "riskforms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Risk-assessment form template engine", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered form templates
    List,

    /// Show a template's fields and scoring setup
    Show {
        /// Form type (FRAT, GRAT, Hazard, ASAP, Waiver, Audit)
        form_type: String,
    },

    /// Export a template to a JSON snapshot file
    Export {
        /// Form type to export
        form_type: String,

        /// Output directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// Print the maximum achievable risk score for a scored template
    #[command(name = "max-score")]
    MaxScore {
        /// Form type (FRAT or GRAT)
        form_type: String,
    },

    /// Classify a submission score against a template's thresholds
    Classify {
        /// Form type (FRAT or GRAT)
        form_type: String,

        /// Total submission score
        score: u32,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = TemplateStore::new();

    match cli.command {
        Commands::List => {
            for template in store.iter() {
                let scoring_note = if template.form_type.has_scoring() {
                    "scored".green()
                } else {
                    "unscored".dimmed()
                };
                println!(
                    "{:<8} {:<30} {:>2} fields  [{}]",
                    template.form_type.to_string().bold(),
                    template.name,
                    template.field_count(),
                    scoring_note
                );
            }
        }

        Commands::Show { form_type } => {
            let template = lookup(&store, &form_type)?;
            show_template(template)?;
        }

        Commands::Export { form_type, out } => {
            let template = lookup(&store, &form_type)?;
            let path = export::write_export(template, &out, Utc::now())?;
            println!("{} exported to {}", "OK".green().bold(), path.display());
        }

        Commands::MaxScore { form_type } => {
            let template = lookup(&store, &form_type)?;
            let max = scoring::max_score(template)?;
            println!("{}: max achievable score {}", template.form_type, max);
        }

        Commands::Classify { form_type, score } => {
            let template = lookup(&store, &form_type)?;
            let rules = template
                .scoring_rules
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("{} has no scoring rules", template.form_type))?;
            let level = scoring::classify(score, rules);
            println!("score {} -> {}", score, colorize_level(level));
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "riskforms", &mut io::stdout());
        }
    }

    Ok(())
}

fn lookup<'a>(store: &'a TemplateStore, form_type: &str) -> Result<&'a FormTemplate> {
    let form_type: FormType = form_type.parse()?;
    Ok(store.get(form_type)?)
}

fn show_template(template: &FormTemplate) -> Result<()> {
    println!(
        "{} ({})",
        template.name.bold(),
        template.form_type.to_string().cyan()
    );
    if let Some(description) = &template.description {
        println!("{}", description.dimmed());
    }
    println!(
        "last modified {} by {}\n",
        template.last_modified.format("%Y-%m-%d %H:%M UTC"),
        template.modified_by
    );

    for field in &template.fields {
        let required = if field.required { "*" } else { " " };
        println!(
            "{:>3}. {}{} [{}]{}",
            field.order,
            field.label,
            required,
            field.control.name(),
            field
                .category
                .as_deref()
                .map(|c| format!("  ({c})"))
                .unwrap_or_default()
        );
        if let Some(options) = field.control.options() {
            for option in options {
                match option.points {
                    Some(points) => println!("       - {} ({} pts)", option.label, points),
                    None => println!("       - {}", option.label),
                }
            }
        }
    }

    if let Some(rules) = &template.scoring_rules {
        let max = scoring::max_score(template)?;
        println!("\nmax score: {}", max.to_string().bold());
        println!(
            "bands: {} 0-{}  {} {}-{}  {} {}-{}  {} {}+",
            "low".green(),
            rules.low_risk,
            "medium".yellow(),
            rules.low_risk + 1,
            rules.medium_risk,
            "high".red(),
            rules.medium_risk + 1,
            rules.high_risk,
            "critical".red().bold(),
            rules.high_risk + 1,
        );
    }

    Ok(())
}

fn colorize_level(level: RiskLevel) -> colored::ColoredString {
    match level {
        RiskLevel::Low => level.label().green(),
        RiskLevel::Medium => level.label().yellow(),
        RiskLevel::High => level.label().red(),
        RiskLevel::Critical => level.label().red().bold(),
    }
}
