use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::recommend;
use serde::Deserialize;
use std::path::PathBuf;
use store::{Catalog, Directory, Series};

/// FlixRec - Series Recommendation Engine
#[derive(Parser)]
#[command(name = "flixrec")]
#[command(about = "Personalized series recommendations over a local library", long_about = None)]
struct Cli {
    /// Path to a JSON library snapshot; omit to use the built-in demo library
    #[arg(short, long)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get series recommendations for a user
    Recommend {
        /// Username to get recommendations for
        #[arg(long)]
        user: String,

        /// Maximum number of series per genre (0 = no cap)
        #[arg(long, default_value = "0")]
        limit: i32,
    },

    /// List every series in the catalog, grouped by genre
    Series,

    /// List every user in the directory
    Users,
}

// =============================================================================
// Library snapshot format
// =============================================================================

/// On-disk library snapshot. Series entries reuse the domain type directly;
/// users carry their friend and favorite name lists inline.
#[derive(Debug, Deserialize)]
struct LibraryFile {
    series: Vec<Series>,
    users: Vec<UserEntry>,
}

#[derive(Debug, Deserialize)]
struct UserEntry {
    username: String,
    age: i32,
    #[serde(default)]
    friends: Vec<String>,
    #[serde(default)]
    favorites: Vec<String>,
}

/// Build validated stores out of a parsed snapshot.
///
/// Users are added before any friendships so forward references within the
/// file resolve; favorites are checked against the catalog, since the
/// engine treats a dangling favorite as fatal.
fn build_library(file: LibraryFile) -> Result<(Catalog, Directory)> {
    let mut catalog = Catalog::new();
    for series in file.series {
        let name = series.name.clone();
        catalog
            .add(series)
            .with_context(|| format!("Failed to add series {name:?}"))?;
    }

    let mut directory = Directory::new();
    for user in &file.users {
        directory
            .add_user(&user.username, user.age)
            .with_context(|| format!("Failed to add user {:?}", user.username))?;
    }
    for user in &file.users {
        for friend in &user.friends {
            directory
                .add_friend(&user.username, friend)
                .with_context(|| format!("Failed to befriend {friend:?}"))?;
        }
        for favorite in &user.favorites {
            if !catalog.contains(favorite) {
                bail!(
                    "User {:?} favorites unknown series {favorite:?}",
                    user.username
                );
            }
            directory.add_favorite(&user.username, favorite)?;
        }
    }

    Ok((catalog, directory))
}

/// The scenario shipped for kicking the tires without a data file: Vered
/// has seen most of the catalog, and both of her friends favorite Kabab.
fn demo_library() -> Result<(Catalog, Directory)> {
    let snapshot = serde_json::json!({
        "series": [
            { "name": "Stranger", "episodes": 4, "genre": "Drama",
              "age_range": { "min": 29, "max": 100 }, "episode_duration": 40.0 },
            { "name": "Suits", "episodes": 4, "genre": "Drama", "episode_duration": 40.0 },
            { "name": "GameOfThrones", "episodes": 4, "genre": "Mystery", "episode_duration": 40.0 },
            { "name": "Fauda", "episodes": 4, "genre": "Mystery", "episode_duration": 40.0 },
            { "name": "Kabab", "episodes": 4, "genre": "Drama", "episode_duration": 40.0 }
        ],
        "users": [
            { "username": "Vered", "age": 57, "friends": ["Orian", "Efraim"],
              "favorites": ["Stranger", "Suits", "GameOfThrones"] },
            { "username": "Orian", "age": 21, "favorites": ["Suits", "Kabab"] },
            { "username": "Efraim", "age": 60, "favorites": ["Suits", "Kabab"] }
        ]
    });
    let file: LibraryFile =
        serde_json::from_value(snapshot).context("Demo library is malformed")?;
    build_library(file)
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let (catalog, directory) = match &cli.data {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let file: LibraryFile = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            build_library(file)?
        }
        None => demo_library()?,
    };
    tracing::info!(
        series = catalog.len(),
        users = directory.len(),
        "library loaded"
    );

    match cli.command {
        Commands::Recommend { user, limit } => handle_recommend(&catalog, &directory, &user, limit),
        Commands::Series => handle_series(&catalog),
        Commands::Users => handle_users(&directory),
    }
}

/// Handle the 'recommend' command
fn handle_recommend(
    catalog: &Catalog,
    directory: &Directory,
    user: &str,
    limit: i32,
) -> Result<()> {
    let recommendations =
        recommend(catalog, directory, user, limit).context("Recommendation failed")?;

    println!("{}", format!("Recommendations for {user}:").bold().blue());
    let mut empty = true;
    for rec in recommendations {
        empty = false;
        println!("{} ({})", rec.name, rec.genre.to_string().cyan());
    }
    if empty {
        println!("{}", "(nothing to recommend)".dimmed());
    }
    Ok(())
}

/// Handle the 'series' command
fn handle_series(catalog: &Catalog) -> Result<()> {
    println!("{}", "Catalog:".bold().blue());
    // Catalog iteration is already genre-rank major, names alphabetical.
    for series in catalog.all() {
        println!(
            "{} ({}) - {} episodes, {:.0} min",
            series.name,
            series.genre.to_string().cyan(),
            series.episodes,
            series.episode_duration
        );
    }
    Ok(())
}

/// Handle the 'users' command
fn handle_users(directory: &Directory) -> Result<()> {
    println!("{}", "Users:".bold().blue());
    for user in directory.all() {
        println!(
            "{} (age {}) - {} friends, {} favorites",
            user.username.bold(),
            user.age,
            user.friends.len(),
            user.favorites.len()
        );
        for favorite in &user.favorites {
            println!("  {} {}", "•".green(), favorite);
        }
    }
    Ok(())
}
