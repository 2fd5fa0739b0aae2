use std::path::PathBuf;

use clap::Parser;
use country_explorer::config::Config;
use country_explorer::logging::init_tracing;
use country_explorer::nav::{parse_link, Route};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "country-explorer")]
#[command(about = "Look up countries by code and flip through their details")]
#[command(version)]
struct Cli {
    /// Open the country screen and search for this code (e.g. BR)
    #[arg(long, value_name = "CODE", conflicts_with = "link")]
    code: Option<String>,

    /// Open a deep link (countryexplorer://country/br)
    #[arg(long, value_name = "URL")]
    link: Option<String>,

    /// Override the GraphQL endpoint from the config file
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .unwrap_or_else(|e| fail(&e.to_string()));

    if let Some(endpoint) = cli.endpoint {
        config.api.endpoint = endpoint;
        if let Err(e) = config.validate() {
            fail(&e.to_string());
        }
    }

    let route = match (cli.link, cli.code) {
        (Some(link), _) => parse_link(&link)
            .unwrap_or_else(|| fail(&format!("Unrecognized link '{}'", link))),
        (None, Some(code)) => Route::Profile {
            country_code: Some(code),
        },
        (None, None) => Route::Home,
    };
    info!(?route, endpoint = %config.api.endpoint, "starting country explorer");

    if let Err(e) = country_explorer::ui::run(&config, route) {
        error!(error = %e, "explorer exited with error");
        fail(&format!("{:#}", e));
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
