use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use folio::content::{self, CATEGORIES, PROJECTS, SKILLS};
use folio::page::{Section, filter_projects};
use folio::{Config, animation};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Single-page developer portfolio")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read settings from this file instead of ./folio.toml
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the portfolio window (default)
    Run,
    /// List projects, optionally for one category
    Projects {
        #[arg(long, default_value = "all")]
        category: String,
        #[arg(long)]
        json: bool,
    },
    /// List skills with their levels
    Skills {
        #[arg(long)]
        json: bool,
    },
    /// Print the entrance animations a section registers, as JSON
    Timeline {
        #[arg(value_name = "SECTION")]
        section: Section,
    },
    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    debug!(?config, "configuration loaded");

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => run(config)?,
        Command::Projects { category, json } => list_projects(&category, json)?,
        Command::Skills { json } => list_skills(json)?,
        Command::Timeline { section } => {
            let animations = section.animations(PROJECTS.len());
            println!("{}", serde_json::to_string_pretty(&animations)?);
        }
        Command::Config => print!("{}", config.to_toml()?),
    }

    Ok(())
}

#[cfg(feature = "gui")]
fn run(config: Config) -> anyhow::Result<()> {
    let plugin = animation::init();
    info!("starting portfolio window");
    folio::gui::run(plugin, config)?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn run(_config: Config) -> anyhow::Result<()> {
    animation::init();
    anyhow::bail!("built without the `gui` feature; use a listing subcommand instead")
}

fn list_projects(category: &str, json: bool) -> anyhow::Result<()> {
    if content::category(category).is_none() {
        debug!(category, "category is not one of the tabs");
    }
    let projects = filter_projects(PROJECTS, category);
    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("{}", content::NO_PROJECTS_NOTICE);
        let known: Vec<&str> = CATEGORIES.iter().map(|c| c.id).collect();
        println!("Categories: {}", known.join(", "));
        return Ok(());
    }
    for project in projects {
        println!("{:>2}  {:<18} [{}]", project.id, project.title, project.category);
        println!("    {}", project.description);
        println!("    tags: {}", project.tags.join(", "));
        println!("    repo: {}", project.repo_url);
        if let Some(demo) = project.demo_url() {
            println!("    demo: {demo}");
        }
    }
    Ok(())
}

fn list_skills(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(SKILLS)?);
        return Ok(());
    }
    for skill in SKILLS {
        let filled = usize::from(skill.level.min(100) / 5);
        println!(
            "{:<14} {:>3}% {}{}",
            skill.name,
            skill.level,
            "#".repeat(filled),
            ".".repeat(20 - filled)
        );
    }
    Ok(())
}
