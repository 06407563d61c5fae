use clap::Parser;
use food_insights::utils::error::ErrorSeverity;
use food_insights::utils::logger;
use food_insights::utils::validation;
use food_insights::{
    CliConfig, Command, FixedGeocoder, HttpDirectory, InMemoryStore, InsightError,
    OrderAnalytics, ProximityFilter, Settings, VendorDiscovery,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if settings.json_logging {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }
    tracing::debug!("Settings: {:?}", settings);

    match run(&cli.command, &settings).await {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) if e.is_reported() => {
            tracing::info!("{}", e);
            println!("{}", e.user_friendly_message());
        }
        Err(e) => {
            tracing::error!(
                "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run(command: &Command, settings: &Settings) -> Result<String, InsightError> {
    match command {
        Command::Nearby { customer, query } => {
            let directory = match settings.request_timeout {
                Some(timeout) => HttpDirectory::with_timeout(&settings.directory_url, timeout)?,
                None => HttpDirectory::new(&settings.directory_url),
            };
            let discovery = VendorDiscovery::new(
                Arc::new(directory),
                Arc::new(FixedGeocoder::new(settings.geocoder_point)),
                ProximityFilter::new(settings.radius_km),
            );

            let vendors = match query {
                Some(query) => discovery.nearby_vendors_matching(*customer, query).await?,
                None => discovery.nearby_vendors(*customer).await?,
            };
            to_json(&vendors)
        }
        Command::Popular { vendor } => {
            let dishes = analytics(settings)?.dishes_by_popularity(*vendor).await?;
            to_json(&dishes)
        }
        Command::Hourly { vendor } => {
            let histogram = analytics(settings)?.order_volume_by_hour(*vendor).await?;
            to_json(histogram.as_slice())
        }
        Command::Volume { vendor } => {
            let volume = analytics(settings)?.order_volume(*vendor).await?;
            Ok(volume.to_string())
        }
    }
}

fn analytics(settings: &Settings) -> Result<OrderAnalytics, InsightError> {
    let path = validation::validate_required_field("store.snapshot_path", &settings.snapshot_path)?;
    let store = Arc::new(InMemoryStore::from_file(path)?);
    Ok(OrderAnalytics::new(store.clone(), store, settings.zone))
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, InsightError> {
    Ok(serde_json::to_string_pretty(value)?)
}
