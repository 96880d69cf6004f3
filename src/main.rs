use clap::Parser;
use disc_title::{api_keys, Config, Disc, OmdbClient, TitleResolver};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};

/// Get movie title and year from a DVD or Blu-ray
#[derive(Parser, Debug)]
#[command(name = "disc-title", version)]
struct Args {
    /// Mount path to disc
    #[arg(
        short,
        long,
        required_unless_present_any = ["store_api_key", "remove_api_key"]
    )]
    path: Option<PathBuf>,

    /// Volume label of the disc, defaults to the last component of the mount path
    #[arg(short, long)]
    label: Option<String>,

    /// Save an OMDb API key to the system keychain and exit
    #[arg(long, value_name = "KEY", conflicts_with = "remove_api_key")]
    store_api_key: Option<String>,

    /// Remove the OMDb API key from the system keychain and exit
    #[arg(long)]
    remove_api_key: bool,
}

#[derive(Serialize)]
struct Output {
    title: Option<String>,
    year: Option<String>,
    has_nice_title: bool,
}

#[tokio::main]
async fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Some(key) = args.store_api_key {
        if let Err(e) = api_keys::store_api_key(&key) {
            error!("Failed to store API key: {}", e);
            std::process::exit(1);
        }
        return;
    }

    if args.remove_api_key {
        match api_keys::remove_api_key() {
            Ok(()) => {}
            Err(api_keys::ApiKeyError::NotFound) => info!("No OMDb API key stored"),
            Err(e) => {
                error!("Failed to remove API key: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let Some(mountpoint) = args.path else {
        error!("--path is required");
        std::process::exit(1);
    };

    let label = args.label.unwrap_or_else(|| {
        mountpoint
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    let config = Config::load();
    let client = OmdbClient::with_base_url(
        config.omdb_api_key.unwrap_or_default(),
        config.omdb_base_url,
    );
    let resolver = TitleResolver::new(client);

    let mut disc = Disc::new(label, mountpoint);
    let found = resolver.resolve(&mut disc).await;

    let output = Output {
        title: found.title,
        year: found.year,
        has_nice_title: disc.has_nice_title,
    };

    match serde_json::to_string(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialise result: {}", e);
            std::process::exit(1);
        }
    }
}
