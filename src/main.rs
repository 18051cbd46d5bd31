use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use lupa::{catalog, filter, Record};

mod cli;
use cli::{Cli, Commands};

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { query, catalog } => run(&catalog, &query),
        Commands::List { catalog } => run(&catalog, ""),
    }
}

/// Load the catalog, filter it, and render the result.
///
/// An empty result set is an observable state, not an error: it prints the
/// no-results notice and still exits 0. Only loader failures are errors.
fn run(catalog_path: &str, query: &str) -> ExitCode {
    let records = match catalog::load(Path::new(catalog_path)) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let matches = filter(&records, query);
    if matches.is_empty() {
        println!("No results found. Try another search term.");
        return ExitCode::SUCCESS;
    }

    for record in matches {
        render_card(record);
    }
    ExitCode::SUCCESS
}

/// Check if colors should be used (TTY detection)
fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply an ANSI style if stdout is a TTY, otherwise return plain text
fn styled(style: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", style, text, RESET)
    } else {
        text.to_string()
    }
}

/// One text card per record: name, optional date, description, optional link.
fn render_card(record: &Record) {
    println!("{}", styled(BOLD, &record.name));
    if let Some(created) = &record.created {
        println!("  {}", styled(DIM, created));
    }
    println!("  {}", record.description);
    if let Some(link) = &record.link {
        println!("  {}", styled(DIM, link));
    }
    println!();
}
