use clap::Args;
use dayglow_core::weather::LOCATIONS;
use dayglow_core::{Config, FetchOutcome, WeatherService};
use tokio::sync::mpsc::unbounded_channel;

#[derive(Args)]
pub struct WeatherArgs {
    /// Location key (bangkok, salaya, phetchaburi); defaults to the configured one
    pub location: Option<String>,
    /// List known locations and exit
    #[arg(long)]
    pub list: bool,
    /// Print the reading as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: WeatherArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    if args.list {
        for loc in LOCATIONS.iter() {
            println!(
                "{:<12} {:>8.4} {:>9.4}  {}",
                loc.key, loc.latitude, loc.longitude, loc.name
            );
        }
        return Ok(());
    }

    let key = args
        .location
        .unwrap_or_else(|| config.weather.default_location.clone());
    let locale = config.clock.locale;

    // Events are only needed by the interactive views.
    let (tx, _rx) = unbounded_channel();
    let service = WeatherService::connect(&config.weather.api_base_url, locale, tx)?;

    match service.fetch(&key).await? {
        FetchOutcome::Updated(reading) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&reading)?);
            } else {
                println!(
                    "{} {}  {}",
                    reading.icon,
                    reading.temperature_label(),
                    locale.weather_status(&reading.description, reading.wind_speed_kmh)
                );
            }
            Ok(())
        }
        FetchOutcome::Failed(message) => Err(message.into()),
        FetchOutcome::Superseded => Ok(()),
    }
}
