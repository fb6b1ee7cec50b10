// oddscard command line: render card documents and manage the team store

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oddscard::{render, CardDocument, FontConfig, RasterSurface, ThemeRegistry, TeamStore};

/// Betting odds cards for stories and reels
#[derive(Parser)]
#[command(name = "oddscard")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the team store
    #[arg(long, global = true, default_value = "./teams.json")]
    teams: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a card document to JPEG or PNG
    Render {
        /// Card document (JSON)
        document: PathBuf,

        /// Output image; defaults to odds-DD-MM-YYYY.jpg
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory with campeonatos/<theme>.png and footer-banner.png
        #[arg(long, default_value = "./assets")]
        assets: PathBuf,

        /// Extra directory to load fonts from (repeatable)
        #[arg(long = "font-dir")]
        font_dirs: Vec<PathBuf>,

        /// Override the document date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Write a default card document
    Init {
        document: PathBuf,

        /// Overwrite an existing document
        #[arg(long)]
        force: bool,
    },

    /// List the available themes
    Themes,

    /// Manage registered teams
    Teams {
        #[command(subcommand)]
        command: TeamCommands,
    },
}

#[derive(Subcommand)]
enum TeamCommands {
    /// List every team
    List,

    /// Register a team
    Add {
        name: String,

        /// Path to the badge image
        #[arg(long)]
        badge: Option<String>,
    },

    /// Rename a team or change its badge
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        badge: Option<String>,
    },

    /// Remove a team by id
    Remove { id: String },

    /// Find teams whose name contains the query
    Search { query: String },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oddscard=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            document,
            output,
            assets,
            font_dirs,
            date,
        } => cmd_render(&document, output, &assets, font_dirs, date.as_deref(), &cli.teams),
        Commands::Init { document, force } => cmd_init(&document, force),
        Commands::Themes => {
            for theme in ThemeRegistry::builtin().iter() {
                println!("{:<14} {}", theme.key, theme.name);
            }
            Ok(())
        }
        Commands::Teams { command } => cmd_teams(command, &cli.teams),
    }
}

fn cmd_render(
    document_path: &Path,
    output: Option<PathBuf>,
    assets: &Path,
    font_dirs: Vec<PathBuf>,
    date: Option<&str>,
    teams_path: &Path,
) -> Result<()> {
    let mut document = CardDocument::load(document_path)
        .with_context(|| format!("Failed to read {}", document_path.display()))?;
    if let Some(date) = date {
        document.set_date_iso(date)?;
    }

    let teams = TeamStore::load(teams_path)
        .with_context(|| format!("Failed to read team store {}", teams_path.display()))?;
    let (matches, options) = document.to_render_input(assets, Some(&teams));

    let font_config = FontConfig {
        font_dirs,
        ..FontConfig::default()
    };
    let mut surface = RasterSurface::new(&font_config).context("Failed to set up fonts")?;
    render(&mut surface, &matches, &options);

    let output = output.unwrap_or_else(|| PathBuf::from(document.export_file_name()));
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    surface
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Rendered {} games to {}", matches.len(), output.display());
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        warn!("{} already exists, use --force to overwrite", path.display());
        return Ok(());
    }
    CardDocument::default()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn cmd_teams(command: TeamCommands, teams_path: &Path) -> Result<()> {
    let mut store = TeamStore::load(teams_path)
        .with_context(|| format!("Failed to read team store {}", teams_path.display()))?;

    match command {
        TeamCommands::List => {
            for team in store.teams() {
                print_team(team);
            }
        }
        TeamCommands::Add { name, badge } => {
            let team = store.add(&name, badge.as_deref())?;
            print_team(team);
            store.save()?;
        }
        TeamCommands::Update { id, name, badge } => {
            match store.update(&id, name.as_deref(), badge.as_deref()) {
                Some(team) => print_team(team),
                None => anyhow::bail!("No team with id {}", id),
            }
            store.save()?;
        }
        TeamCommands::Remove { id } => {
            if !store.remove(&id) {
                anyhow::bail!("No team with id {}", id);
            }
            store.save()?;
        }
        TeamCommands::Search { query } => {
            for team in store.search(&query) {
                print_team(team);
            }
        }
    }
    Ok(())
}

fn print_team(team: &oddscard::TeamRecord) {
    println!(
        "{}  {}  {}",
        team.id,
        team.name,
        team.badge.as_deref().unwrap_or("-")
    );
}
