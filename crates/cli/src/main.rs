use anyhow::{Context, Result, bail};
use catalog::Audiobook;
use clap::{Parser, Subcommand};
use colored::Colorize;
use feed::{HomeController, LibraryController, Phase};
use pipeline::{DisplayMode, FilterCriterion, HomeFeed, Preferences, SortField};
use sources::SnapshotSource;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// shelf - browse an audiobook library snapshot
#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Library and home feed views over an audiobook library snapshot", long_about = None)]
struct Cli {
    /// Path to the library snapshot directory
    #[arg(short, long, default_value = "data/sample-library")]
    snapshot: PathBuf,

    /// Preferences file (defaults to preferences.json in the snapshot)
    #[arg(short, long)]
    prefs: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the library list
    Library {
        /// Filter criterion: all, finished, unfinished, favorites
        #[arg(long)]
        filter: Option<FilterCriterion>,

        /// Sort field: title, author, released, added, duration, last-played
        #[arg(long)]
        sort: Option<SortField>,

        /// Sort in descending order
        #[arg(long)]
        descending: bool,

        /// Narrow by genre (repeatable)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Layout: grid or list
        #[arg(long)]
        display: Option<DisplayMode>,
    },

    /// Show the home feed
    Home,

    /// List the genres present in the library
    Genres,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let source = Arc::new(
        SnapshotSource::load(&cli.snapshot)
            .with_context(|| format!("Failed to load snapshot from {}", cli.snapshot.display()))?,
    );
    let preferences = load_preferences(cli.prefs.as_deref(), &cli.snapshot)?;
    println!(
        "{} Loaded '{}' in {:?}",
        "✓".green(),
        source.snapshot().library.name,
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Library {
            filter,
            sort,
            descending,
            genres,
            display,
        } => {
            let mut preferences = preferences;
            if let Some(filter) = filter {
                preferences.filter = filter;
            }
            if let Some(sort) = sort {
                preferences.sort_field = sort;
            }
            if descending {
                preferences.ascending = false;
            }
            if !genres.is_empty() {
                preferences.selected_genres = genres.into_iter().collect();
            }
            if let Some(display) = display {
                preferences.display_mode = display;
            }
            handle_library(source, &preferences).await?
        }
        Commands::Home => handle_home(source, &preferences).await?,
        Commands::Genres => handle_genres(source).await?,
    }

    Ok(())
}

/// Use the explicit preferences file, else the snapshot's, else defaults
fn load_preferences(explicit: Option<&Path>, snapshot: &Path) -> Result<Preferences> {
    if let Some(path) = explicit {
        return Preferences::load(path);
    }

    let bundled = snapshot.join("preferences.json");
    if bundled.exists() {
        Preferences::load(&bundled)
    } else {
        debug!("No preferences file, using defaults");
        Ok(Preferences::default())
    }
}

/// Handle the 'library' command
async fn handle_library(source: Arc<SnapshotSource>, preferences: &Preferences) -> Result<()> {
    let library_id = source.snapshot().library.id.clone();
    let controller = LibraryController::new(library_id, source);

    if controller.refresh().await == Phase::Failed {
        bail!("Could not load the library");
    }

    let visible = controller.visible(preferences)?;
    println!(
        "{}",
        format!(
            "Library ({} of {} items, filter: {}, sort: {} {})",
            visible.len(),
            controller.items().len(),
            preferences.filter,
            preferences.sort_field,
            if preferences.ascending { "↑" } else { "↓" }
        )
        .bold()
        .blue()
    );
    if !preferences.selected_genres.is_empty() {
        let mut genres: Vec<_> = preferences.selected_genres.iter().cloned().collect();
        genres.sort();
        println!("{}Genres: {}", "• ".cyan(), genres.join(", "));
    }

    match preferences.display_mode {
        DisplayMode::List => print_list(&visible),
        DisplayMode::Grid => print_grid(&visible),
    }
    Ok(())
}

/// Handle the 'home' command
async fn handle_home(source: Arc<SnapshotSource>, preferences: &Preferences) -> Result<()> {
    let library_id = source.snapshot().library.id.clone();
    let controller = HomeController::new(library_id, Arc::clone(&source), source);

    controller.refresh().finished().await;
    if controller.phase() == Phase::Failed {
        bail!("Could not load the home feed");
    }

    let feed = controller.compose(&preferences.home_config())?;
    print_home(&feed);
    Ok(())
}

/// Handle the 'genres' command
async fn handle_genres(source: Arc<SnapshotSource>) -> Result<()> {
    let library_id = source.snapshot().library.id.clone();
    let controller = LibraryController::new(library_id, source);

    for genre in load_genres(&controller).await? {
        println!("{}{}", "• ".green(), genre);
    }
    Ok(())
}

async fn load_genres(controller: &LibraryController<SnapshotSource>) -> Result<Vec<String>> {
    if controller.refresh().await == Phase::Failed {
        bail!("Could not load the library");
    }
    Ok(controller.genres())
}

fn format_duration(seconds: f64) -> String {
    let minutes = (seconds / 60.0).round() as u64;
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

fn print_list(items: &[Audiobook]) {
    for (i, item) in items.iter().enumerate() {
        let progress = match item.progress {
            Some(p) if p >= 1.0 => "finished".green().to_string(),
            Some(p) => format!("{:.0}%", p * 100.0).yellow().to_string(),
            None => "new".dimmed().to_string(),
        };
        println!(
            "{:>3}. {} {} [{}] {}",
            i + 1,
            item.title.bold(),
            if item.favorite { "★".yellow().to_string() } else { String::new() },
            format_duration(item.duration),
            progress
        );
        if !item.authors.is_empty() {
            println!("     {}", item.authors.join(", "));
        }
        if !item.genres.is_empty() {
            println!("     {}", item.genres.join(", ").dimmed());
        }
    }
}

fn print_grid(items: &[Audiobook]) {
    const COLUMNS: usize = 3;
    const WIDTH: usize = 28;

    for row in items.chunks(COLUMNS) {
        let line: Vec<String> = row
            .iter()
            .map(|item| {
                let title: String = item.title.chars().take(WIDTH - 2).collect();
                format!("{:<width$}", title, width = WIDTH)
            })
            .collect();
        println!("{}", line.join(""));
    }
}

fn print_home(feed: &HomeFeed) {
    if feed.is_empty() {
        println!("{}", "Nothing to show yet".dimmed());
        return;
    }

    for row in &feed.audiobook_rows {
        println!("{}", row.label.bold().blue());
        for item in &row.entities {
            println!("  - {}", item.title);
        }
    }
    for row in &feed.author_rows {
        println!("{}", row.label.bold().magenta());
        for author in &row.entities {
            println!("  - {} ({} books)", author.name, author.book_count);
        }
    }
    if let Some(downloads) = &feed.downloads {
        println!("{}", downloads.label.bold().green());
        for item in &downloads.entities {
            println!("  - {}", item.title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{HomeResponse, Library, LibrarySnapshot};

    fn source() -> Arc<SnapshotSource> {
        Arc::new(SnapshotSource::new(LibrarySnapshot {
            library: Library {
                id: "lib".to_string(),
                name: "Books".to_string(),
            },
            items: vec![
                Audiobook::new("a", "lib", "A").with_genres(["Fantasy"]),
                Audiobook::new("b", "lib", "B").with_genres(["Horror", "Fantasy"]),
            ],
            home: HomeResponse::default(),
            downloads: Vec::new(),
        }))
    }

    #[tokio::test]
    async fn test_genres_for_loaded_library() {
        let controller = LibraryController::new("lib", source());
        let genres = load_genres(&controller).await.unwrap();
        assert_eq!(genres, vec!["Fantasy".to_string(), "Horror".to_string()]);
    }

    #[tokio::test]
    async fn test_genres_fail_for_unknown_library() {
        let controller = LibraryController::new("missing", source());
        assert!(load_genres(&controller).await.is_err());
        assert_eq!(controller.phase(), Phase::Failed);
    }
}
