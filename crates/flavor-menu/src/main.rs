use clap::Parser;
use flavor_menu::config::MenuConfig;
use flavor_menu::lifecycle::{setup_tracing, MenuSystem};
use flavor_menu::model::Menu;
use flavor_menu::order::OrderOutcome;
use std::path::PathBuf;
use tracing::{info, warn, Instrument};

/// Boots a flavor menu page, replays scripted interactions and prints the result.
#[derive(Debug, Parser)]
#[command(name = "flavor-menu", version)]
struct Cli {
    /// Menu file with `[[flavor]]` tables; the bundled demo menu when absent.
    #[arg(long)]
    menu: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the quantity RNG, overriding the configuration.
    #[arg(long)]
    seed: Option<u64>,

    /// Order to place, as NAME=AMOUNT. Repeatable.
    #[arg(long = "order", value_name = "NAME=AMOUNT", value_parser = parse_order)]
    orders: Vec<(String, String)>,

    /// Flavor to click. Repeatable; clicking twice removes the highlight.
    #[arg(long = "favorite", value_name = "NAME")]
    favorites: Vec<String>,

    /// Print the final page as HTML instead of the quantity summary.
    #[arg(long)]
    html: bool,
}

fn parse_order(raw: &str) -> Result<(String, String), String> {
    raw.rsplit_once('=')
        .map(|(name, amount)| (name.trim().to_string(), amount.to_string()))
        .ok_or_else(|| format!("expected NAME=AMOUNT, got '{}'", raw))
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let cli = Cli::parse();

    let menu = match &cli.menu {
        Some(path) => Menu::load(path),
        None => Menu::demo(),
    }
    .map_err(|e| e.to_string())?;

    let mut config = match &cli.config {
        Some(path) => MenuConfig::load(path).map_err(|e| e.to_string())?,
        None => MenuConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    info!(flavors = menu.flavors.len(), "Starting menu page");
    let system = MenuSystem::start(&menu, &config).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("scripted_orders");
    async {
        for (flavor, amount) in &cli.orders {
            match system.client.place_order(flavor, amount).await {
                Ok(OrderOutcome::Applied { remaining, .. }) => {
                    info!(%flavor, %amount, remaining, "Order placed")
                }
                Ok(outcome) => info!(%flavor, %amount, ?outcome, "Order ignored"),
                Err(e) => warn!(%flavor, %amount, error = %e, "Order rejected"),
            }
        }
    }
    .instrument(span)
    .await;

    for flavor in &cli.favorites {
        match system.client.favorite(flavor).await {
            Ok(highlighted) => info!(%flavor, highlighted, "Favorite toggled"),
            Err(e) => warn!(%flavor, error = %e, "Favorite failed"),
        }
    }

    if cli.html {
        let html = system.client.render_html().await.map_err(|e| e.to_string())?;
        println!("{}", html);
    } else {
        if let Some(stats) = &system.statistics {
            println!("Average price: ${}", stats.average_price);
            for line in &stats.cheap_flavors {
                println!("Cheap: {}", line);
            }
        }
        for record in system.client.records().await.map_err(|e| e.to_string())? {
            println!("{:<20} {:>6} {:>4}", record.name, record.price, record.quantity);
        }
    }

    system.shutdown().await.map_err(|e| e.to_string())?;
    info!("Menu page closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order() {
        assert_eq!(
            parse_order("Mint Chip=3"),
            Ok(("Mint Chip".to_string(), "3".to_string()))
        );
        assert_eq!(parse_order("A=B=2"), Ok(("A=B".to_string(), "2".to_string())));
        assert!(parse_order("Mint Chip").is_err());
    }

    #[test]
    fn test_cli_accepts_repeated_flags() {
        let cli = Cli::parse_from([
            "flavor-menu",
            "--seed",
            "4",
            "--order",
            "A=1",
            "--order",
            "B=2",
            "--favorite",
            "A",
            "--html",
        ]);
        assert_eq!(cli.seed, Some(4));
        assert_eq!(cli.orders.len(), 2);
        assert_eq!(cli.favorites, vec!["A"]);
        assert!(cli.html);
    }
}
