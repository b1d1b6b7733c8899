//! CLI administration tool for booklink.
//!
//! Manages the book catalog and inspects short links directly against the
//! configured storage backend, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! cargo run --bin admin -- books list
//!
//! # Add a book (prompts for anything not given)
//! cargo run --bin admin -- books add --title "Rust in Action" --link https://books.example/ria
//!
//! # Delete a book
//! cargo run --bin admin -- books delete Xy12_ab9Qz
//!
//! # List short links with their matched books
//! cargo run --bin admin -- links list
//!
//! # Dry-run the matcher for a URL
//! cargo run --bin admin -- match https://blog.example/async-rust --keywords "tokio"
//! ```
//!
//! # Environment Variables
//!
//! The same as the server: `DATABASE_URL` (or `DB_*`) selects PostgreSQL,
//! otherwise `DATA_DIR` holds the JSON files.

use booklink::application::matching::MatchOrchestrator;
use booklink::application::services::{CatalogService, LinkService};
use booklink::config;
use booklink::domain::entities::NewBook;
use booklink::infrastructure::StorageBackend;
use booklink::server::build_orchestrator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};

/// CLI tool for managing booklink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage the book catalog
    Books {
        #[command(subcommand)]
        action: BookAction,
    },

    /// Inspect short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Run the matcher for a URL without creating a link
    Match {
        /// Target URL
        url: String,

        /// Optional keywords, as a visitor would type them
        #[arg(short, long, default_value = "")]
        keywords: String,
    },
}

#[derive(Subcommand)]
enum BookAction {
    /// List all books, oldest first
    List,

    /// Add a book
    Add {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        link: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Delete a book by id
    Delete {
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum LinkAction {
    /// List all short links, oldest first
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let storage = StorageBackend::connect(&config)
        .await
        .context("Failed to open storage")?;

    match cli.command {
        Commands::Books { action } => {
            let catalog = CatalogService::new(storage.book_repository());
            handle_book_action(action, &catalog).await?
        }
        Commands::Links {
            action: LinkAction::List,
        } => {
            let links = LinkService::new(storage.link_repository());
            list_links(&links).await?
        }
        Commands::Match { url, keywords } => {
            let orchestrator = build_orchestrator(&config, &storage)?;
            run_match(&orchestrator, &url, &keywords).await?
        }
    }

    Ok(())
}

async fn handle_book_action(action: BookAction, catalog: &CatalogService) -> Result<()> {
    match action {
        BookAction::List => list_books(catalog).await,
        BookAction::Add {
            title,
            link,
            description,
            yes,
        } => add_book(catalog, title, link, description, yes).await,
        BookAction::Delete { id, yes } => delete_book(catalog, &id, yes).await,
    }
}

/// Prints the catalog.
///
/// The last row is the book attached when nothing else matches.
async fn list_books(catalog: &CatalogService) -> Result<()> {
    println!("{}", "Books".bright_blue().bold());
    println!();

    let books = catalog
        .list_books()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list books: {}", e))?;

    if books.is_empty() {
        println!("{}", "  No books found".yellow());
        println!();
        println!(
            "  Add one with: {} admin books add",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<12} {:<40} {:<20}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Created".bright_white().bold(),
    );
    println!("  {}", "-".repeat(75).bright_black());

    for book in &books {
        println!(
            "  {:<12} {:<40} {}",
            book.id.bright_black(),
            truncate(&book.title, 40).cyan(),
            book.created
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
        );
    }

    println!();
    println!("  Total: {}", books.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn add_book(
    catalog: &CatalogService,
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Add Book".bright_blue().bold());
    println!();

    let title = match title {
        Some(t) => t,
        None => Input::new().with_prompt("Title").interact_text()?,
    };

    let link = match link {
        Some(l) => l,
        None => Input::new()
            .with_prompt("Link")
            .with_initial_text("https://")
            .interact_text()?,
    };

    let description = match description {
        Some(d) => d,
        None => Input::new()
            .with_prompt("Description")
            .allow_empty(true)
            .interact_text()?,
    };

    println!();
    println!("  Title:       {}", title.cyan());
    println!("  Link:        {}", link.cyan());
    println!("  Description: {}", description.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Add this book?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let book = catalog
        .add_book(NewBook {
            link,
            title,
            description: Some(description),
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add book: {}", e))?;

    println!();
    println!(
        "{} {}",
        "Book added:".green().bold(),
        book.id.bright_yellow()
    );
    println!();

    Ok(())
}

/// Deletes a book after confirmation (default: No).
///
/// Links already matched to the book keep their snapshot of it.
async fn delete_book(catalog: &CatalogService, id: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "Delete Book".bright_blue().bold());
    println!();

    let books = catalog
        .list_books()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list books: {}", e))?;

    let book = books
        .iter()
        .find(|b| b.id == id)
        .with_context(|| format!("Book {} not found", id))?;

    println!("  Book: {}", book.title.cyan());
    println!("  ID:   {}", book.id.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this book?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    catalog
        .delete_book(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete book: {}", e))?;

    println!("{}", "Book deleted".green().bold());
    println!();

    Ok(())
}

async fn list_links(links: &LinkService) -> Result<()> {
    println!("{}", "Short Links".bright_blue().bold());
    println!();

    let links = links
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<9} {:<45} {:<30}",
        "Code".bright_white().bold(),
        "URL".bright_white().bold(),
        "Book".bright_white().bold(),
    );
    println!("  {}", "-".repeat(85).bright_black());

    for link in &links {
        let book = match link.book {
            Some(ref b) => truncate(&b.title, 30).green(),
            None => "-".bright_black(),
        };

        println!(
            "  {:<9} {:<45} {}",
            link.code.cyan(),
            truncate(&link.url, 45),
            book
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Runs every matching stage for `url` and reports which one decided.
async fn run_match(orchestrator: &MatchOrchestrator, url: &str, keywords: &str) -> Result<()> {
    println!("{} {}", "Matching".bright_blue().bold(), url.cyan());
    println!();

    match orchestrator.resolve(url, keywords).await {
        Ok(outcome) => {
            println!(
                "  {} {} ({})",
                "Book:".bright_white().bold(),
                outcome.book.title.green(),
                outcome.book.id.bright_black()
            );
            println!(
                "  {} {}",
                "Stage:".bright_white().bold(),
                outcome.source.as_str().yellow()
            );
        }
        Err(e) => {
            println!("  {} {}", "No book:".yellow().bold(), e);
        }
    }
    println!();

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
