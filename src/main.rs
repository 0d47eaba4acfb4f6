use clap::Parser;

use newsdesk::cli::{Cli, Commands};
use newsdesk::config::Config;
use newsdesk::domain::filter::parse_country_code;
use newsdesk::domain::{Category, FilterState};
use newsdesk::errors::{NewsdeskError, NewsdeskResult};
use newsdesk::output::{ContentSurface, JsonSurface, StatusLine, TerminalSurface};
use newsdesk::services::{FetchOutcome, FetchService, QueryBuilder};
use newsdesk::sources::MediastackSource;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> NewsdeskResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            country,
            category,
            search,
            json,
        } => cmd_fetch(country, category, search, json),
        Commands::Categories => cmd_categories(),
    }
}

fn cmd_fetch(
    country: Option<String>,
    category: Option<String>,
    search: Option<String>,
    json: bool,
) -> NewsdeskResult<()> {
    let config = Config::from_env();

    let country = country.map(|c| parse_country_code(&c)).transpose()?;
    let category = category.map(|c| parse_category(&c)).transpose()?;
    let filters = FilterState::new(country, category, search);

    let service = FetchService::new(
        QueryBuilder::new(&config),
        MediastackSource::new(&config.base_url),
        config.insecure_endpoint(),
    );

    let outcome = if json {
        run_cycle(&service, &filters, JsonSurface::new())
    } else {
        run_cycle(&service, &filters, TerminalSurface::new())
    };

    match outcome {
        // Already reported in full through the surfaces
        FetchOutcome::Failed(_) => Err(NewsdeskError::FetchFailed),
        _ => Ok(()),
    }
}

fn run_cycle<D: ContentSurface + StatusLine>(
    service: &FetchService<MediastackSource>,
    filters: &FilterState,
    mut surface: D,
) -> FetchOutcome {
    service.run(filters, &mut surface)
}

fn cmd_categories() -> NewsdeskResult<()> {
    println!("Supported categories:\n");
    for category in Category::ALL {
        println!("  {}", category);
    }
    Ok(())
}

fn parse_category(raw: &str) -> NewsdeskResult<Category> {
    raw.parse::<Category>().map_err(|e| {
        let valid: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        NewsdeskError::InvalidInput(format!("{}. Valid categories: {}", e, valid.join(", ")))
    })
}
