mod card_pricer;
mod cards;
mod catalog;
mod display;
mod error;
mod image_fetcher;
mod matching;
mod test;
mod utilities;

use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{error, info};

use card_pricer::CardPricer;
use cards::card::Card;
use cards::search_query::SearchQuery;
use catalog::catalog_client::RapidApiCatalog;
use display::DisplayState;
use image_fetcher::HttpImageFetcher;
use matching::matcher::MatchOutcome;
use utilities::config::Config;

/// Looks up a Pokémon card in the catalog and prints its trend price and buy offer.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Card name, e.g. "Pikachu"
    #[arg(short, long)]
    name: String,

    /// Card number as printed, e.g. "206/198"
    #[arg(short = 'N', long)]
    number: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Asks for a 1-based pick. An empty line cancels.
fn prompt_selection(candidates: &[Card]) -> io::Result<Option<usize>> {
    println!("Card number not found. Choose a card from the list:");
    for (i, card) in candidates.iter().enumerate() {
        println!("{:>3}. {}", i + 1, card);
    }

    let stdin = io::stdin();
    loop {
        print!("Choice [1-{}, empty to cancel]: ", candidates.len());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        match line.parse::<usize>() {
            Ok(choice) if (1..=candidates.len()).contains(&choice) => return Ok(Some(choice - 1)),
            _ => println!("'{}' is not on the list", line),
        }
    }
}

fn print_state(state: &DisplayState, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(state)?);
    } else {
        println!("{}", state);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = Config::from_env().map_err(|e| {
        error!("{}", e);
        e
    })?;
    let query = SearchQuery::new(&args.name, args.number.as_deref())?;

    let start_time = chrono::prelude::Local::now();
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;
    let pricer = CardPricer::new(
        RapidApiCatalog::new(&config, None, client.clone()),
        HttpImageFetcher::new(client),
    );

    let outcome = pricer.search(&query).await?;
    if outcome.is_empty() {
        println!("No cards found.");
        return Ok(());
    }
    let card = match outcome {
        MatchOutcome::Resolved(card) => card,
        MatchOutcome::Ambiguous(candidates) => match prompt_selection(&candidates)? {
            Some(index) => pricer.select(candidates, index)?,
            None => {
                info!("Selection cancelled");
                return Ok(());
            }
        },
    };

    let state = pricer.render(card).await;
    print_state(&state, args.json)?;

    let end_time = chrono::prelude::Local::now();
    info!(
        "Search started at: {}. Finished at: {}. Took: {} ms",
        start_time,
        end_time,
        (end_time - start_time).num_milliseconds()
    );
    Ok(())
}
