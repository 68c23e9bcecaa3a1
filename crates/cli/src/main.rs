use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::{DatasetSource, DEFAULT_DATASET_PATH};
use gallery::{Card, Control, GalleryApp, PageDocument};
use pipeline::SortMode;
use std::path::PathBuf;
use std::time::Instant;
use tracing::warn;

/// MCU Gallery - filterable, sortable movie gallery
#[derive(Parser)]
#[command(name = "mcu-gallery")]
#[command(about = "Filter and sort a movie dataset into a gallery page", long_about = None)]
struct Cli {
    /// Path or http(s) URL of the movie dataset
    #[arg(short, long, default_value = DEFAULT_DATASET_PATH)]
    data: DatasetSource,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the gallery page as static HTML
    Render {
        /// Output file
        #[arg(short, long, default_value = "index.html")]
        out: PathBuf,

        #[command(flatten)]
        selections: Selections,
    },

    /// Print the gallery to the terminal
    List {
        #[command(flatten)]
        selections: Selections,

        /// Print the visible movies as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Show the character and phase options derived from the dataset
    Options,
}

/// The three select controls, as flags
#[derive(Args)]
struct Selections {
    /// Gallery ordering
    #[arg(long, value_enum, default_value_t = SortArg::Chronological)]
    sort: SortArg,

    /// Main character to show, or "all"
    #[arg(long, default_value = "all")]
    character: String,

    /// Phase to show, or "all"
    #[arg(long, default_value = "all")]
    phase: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    /// In-story order
    Chronological,
    /// Release date order
    Release,
}

impl SortArg {
    fn control_value(self) -> &'static str {
        match self {
            SortArg::Chronological => SortMode::Chronological.control_value(),
            SortArg::Release => SortMode::ReleaseDate.control_value(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Status lines go to stderr so `list --json` stays pipeable
    eprintln!("Loading movie dataset from {}...", cli.data);
    let start = Instant::now();
    let app = GalleryApp::start(&cli.data, PageDocument::new())
        .await
        .with_context(|| format!("Failed to load movie dataset from {}", cli.data))?;
    eprintln!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        app.dataset().len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Render { out, selections } => handle_render(app, &selections, out)?,
        Commands::List { selections, json } => handle_list(app, &selections, json)?,
        Commands::Options => handle_options(&app),
    }

    Ok(())
}

/// Apply the command-line selections the way a user would pick them
fn apply_selections(app: &mut GalleryApp<PageDocument>, selections: &Selections) {
    let picks = [
        (Control::Sort, selections.sort.control_value()),
        (Control::Character, selections.character.as_str()),
        (Control::Phase, selections.phase.as_str()),
    ];

    for (control, value) in picks {
        if !app.view().control(control).has_option(value) {
            warn!(
                "{} has no option {:?}; no movie will match it",
                control, value
            );
        }
        app.on_control_change(control, value);
    }
}

/// Handle the 'render' command
fn handle_render(
    mut app: GalleryApp<PageDocument>,
    selections: &Selections,
    out: PathBuf,
) -> Result<()> {
    apply_selections(&mut app, selections);

    let page = app.into_view();
    std::fs::write(&out, page.to_html())
        .with_context(|| format!("Failed to write {}", out.display()))?;

    if page.is_empty_state_visible() {
        println!(
            "{} Wrote {} (no movies match the selected filters)",
            "!".yellow(),
            out.display()
        );
    } else {
        println!(
            "{} Wrote {} cards to {}",
            "✓".green(),
            page.cards().len(),
            out.display()
        );
    }
    Ok(())
}

/// Handle the 'list' command
fn handle_list(mut app: GalleryApp<PageDocument>, selections: &Selections, json: bool) -> Result<()> {
    apply_selections(&mut app, selections);

    if json {
        let visible = app.visible_movies();
        let output =
            serde_json::to_string_pretty(&visible).context("Failed to serialize movies")?;
        println!("{}", output);
        return Ok(());
    }

    print_gallery(app.view());
    Ok(())
}

/// Handle the 'options' command
fn handle_options(app: &GalleryApp<PageDocument>) {
    let options = app.options();

    println!("{}", "Characters:".bold().blue());
    for character in &options.characters {
        println!("  {} {}", "•".green(), character);
    }

    println!("{}", "Phases:".bold().blue());
    for phase in &options.phases {
        println!("  {} {}", "•".green(), phase);
    }
}

/// Helper function to format and print the rendered cards
fn print_gallery(page: &PageDocument) {
    if page.is_empty_state_visible() {
        println!("{}", "No movies match the selected filters.".yellow());
        return;
    }

    println!("{}", "Movie Gallery:".bold().blue());
    for (idx, card) in page.cards().iter().enumerate() {
        print_card(idx + 1, card);
    }
}

fn print_card(position: usize, card: &Card) {
    let phase = if card.phase.is_empty() {
        String::new()
    } else {
        format!(" [{}]", card.phase)
    };
    println!(
        "{}. {}{} - {}",
        position.to_string().green(),
        card.title.bold(),
        phase,
        card.character.cyan()
    );
    println!(
        "   Release: {}   Story Order: {}",
        card.release, card.story_order
    );
}
