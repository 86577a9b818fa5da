use clap::{CommandFactory, Parser, Subcommand};
use dayglow_core::Config;

mod commands;
mod input;
mod logging;
mod notify;
mod render;

#[derive(Parser)]
#[command(name = "dayglow", version, about = "Clock, daylight, weather and Pomodoro in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Current time, Buddhist-era date and lighting
    Clock(commands::clock::ClockArgs),
    /// Daylight curve for a time of day
    Lighting(commands::lighting::LightingArgs),
    /// Current weather for a known location
    Weather(commands::weather::WeatherArgs),
    /// Interactive Pomodoro countdown
    Timer(commands::timer::TimerArgs),
    /// Full widget: clock, lighting, weather and timer
    Dashboard(commands::dashboard::DashboardArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Clock(args) => commands::clock::run(args, &Config::load()?).await,
        Commands::Lighting(args) => commands::lighting::run(args),
        Commands::Weather(args) => commands::weather::run(args, &Config::load()?).await,
        Commands::Timer(args) => commands::timer::run(args, &Config::load()?).await,
        Commands::Dashboard(args) => commands::dashboard::run(args, &Config::load()?).await,
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "dayglow", &mut std::io::stdout());
            Ok(())
        }
    }
}
