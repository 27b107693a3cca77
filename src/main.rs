//! bandstand: command-line client for a venue and artist booking service
//!
//! Usage:
//!   bandstand venues                  # list venues grouped by area
//!   bandstand venue <id>              # one venue with its shows
//!   bandstand artists                 # list artists
//!   bandstand artist <id>             # one artist with their shows
//!   bandstand shows                   # list booked shows
//!   bandstand search-venues <term>
//!   bandstand search-artists <term>
//!   bandstand delete-venue <id>
//!   bandstand delete-artist <id>
//!   bandstand init-config             # write a default config file

use anyhow::Result;
use chrono::Utc;

use bandstand::api::{ARTISTS, VENUES};
use bandstand::config::Config;
use bandstand::utils::datetime;
use bandstand::{actions, constants, logger, BookingClient, Navigator};

fn usage() -> ! {
    eprintln!("Usage: bandstand <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  venues | venue <id> | artists | artist <id> | shows");
    eprintln!("  search-venues <term> | search-artists <term>");
    eprintln!("  delete-venue <id> | delete-artist <id>");
    eprintln!("  init-config");
    std::process::exit(2);
}

/// Render a show start time according to the display configuration.
fn show_time(config: &Config, raw: &str) -> String {
    match datetime::parse_show_time(raw) {
        Some(start) if config.display.relative_dates => {
            let time = start.format(&config.display.time_format);
            format!("{} at {}", datetime::format_relative_date(start, Utc::now()), time)
        }
        Some(start) => {
            let fmt = format!("{} {}", config.display.date_format, config.display.time_format);
            start.format(&fmt).to_string()
        }
        // Unparsable start time: show the raw value rather than nothing
        None => raw.to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    let base_url =
        std::env::var(constants::BASE_URL_ENV).unwrap_or_else(|_| config.api.base_url.clone());
    let client = BookingClient::with_timeout(&base_url, config.api.timeout_seconds)?;

    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("venues") => {
            for area in client.venues().await? {
                println!("{}, {}", area.city, area.state);
                for venue in area.venues {
                    println!("  #{} {} ({} upcoming)", venue.id, venue.name, venue.num_upcoming_shows);
                }
            }
        }
        Some("venue") => {
            let id = parse_id(&args);
            let venue = client.venue(id).await?;
            println!("#{} {}", venue.id, venue.name);
            if let (Some(city), Some(state)) = (&venue.city, &venue.state) {
                println!("  {}, {}", city, state);
            }
            if !venue.genres.is_empty() {
                println!("  genres: {}", venue.genres.join(", "));
            }
            if venue.seeking_talent {
                println!("  seeking talent: {}", venue.seeking_description.as_deref().unwrap_or("yes"));
            }
            println!("  {} past / {} upcoming shows", venue.past_shows_count, venue.upcoming_shows_count);
            for show in &venue.upcoming_shows {
                println!("    {} - {}", show_time(&config, &show.start_time), show.artist_name);
            }
        }
        Some("artists") => {
            for artist in client.artists().await? {
                println!("#{} {}", artist.id, artist.name);
            }
        }
        Some("artist") => {
            let id = parse_id(&args);
            let artist = client.artist(id).await?;
            println!("#{} {}", artist.id, artist.name);
            if !artist.genres.is_empty() {
                println!("  genres: {}", artist.genres.join(", "));
            }
            if artist.seeking_venue {
                println!("  seeking a venue: {}", artist.seeking_description.as_deref().unwrap_or("yes"));
            }
            println!("  {} past / {} upcoming shows", artist.past_shows_count, artist.upcoming_shows_count);
            for show in &artist.upcoming_shows {
                println!("    {} - {}", show_time(&config, &show.start_time), show.venue_name);
            }
        }
        Some("shows") => {
            for show in client.shows().await? {
                println!(
                    "{} - {} at {}",
                    show_time(&config, &show.start_time),
                    show.artist_name,
                    show.venue_name
                );
            }
        }
        Some("search-venues") => {
            let term = args.get(1).map(String::as_str).unwrap_or_else(|| usage());
            let results = client.search_venues(term).await?;
            println!("{} result(s)", results.count);
            for hit in results.data {
                println!("  #{} {} ({} upcoming)", hit.id, hit.name, hit.num_upcoming_shows);
            }
        }
        Some("search-artists") => {
            let term = args.get(1).map(String::as_str).unwrap_or_else(|| usage());
            let results = client.search_artists(term).await?;
            println!("{} result(s)", results.count);
            for hit in results.data {
                println!("  #{} {} ({} upcoming)", hit.id, hit.name, hit.num_upcoming_shows);
            }
        }
        Some("delete-venue") => {
            let id = args.get(1).map(String::as_str).unwrap_or_else(|| usage());
            let navigator = Navigator::new();
            actions::venue_delete(&client, &navigator, id).await;
            if navigator.location().as_deref() == Some(VENUES.listing_path) {
                println!("{}", constants::MSG_VENUE_DELETED);
            } else {
                eprintln!("{}", constants::ERROR_VENUE_DELETE_FAILED);
            }
        }
        Some("delete-artist") => {
            let id = args.get(1).map(String::as_str).unwrap_or_else(|| usage());
            let navigator = Navigator::new();
            actions::artist_delete(&client, &navigator, id).await;
            if navigator.location().as_deref() == Some(ARTISTS.listing_path) {
                println!("{}", constants::MSG_ARTIST_DELETED);
            } else {
                eprintln!("{}", constants::ERROR_ARTIST_DELETE_FAILED);
            }
        }
        Some("init-config") => {
            let path = Config::get_default_config_path()?;
            Config::generate_default_config(&path)?;
            println!("{}: {}", constants::CONFIG_GENERATED, path.display());
        }
        _ => usage(),
    }

    Ok(())
}

fn parse_id(args: &[String]) -> i64 {
    match args.get(1).and_then(|raw| raw.parse().ok()) {
        Some(id) => id,
        None => usage(),
    }
}
