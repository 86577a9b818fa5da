use chrono::{NaiveTime, Timelike};
use clap::Args;
use dayglow_core::clock::render_ascii_chart;
use dayglow_core::LightingState;

use crate::render;

#[derive(Args)]
pub struct LightingArgs {
    /// Time of day as HH:MM (defaults to now)
    #[arg(long, value_parser = parse_hhmm)]
    pub at: Option<NaiveTime>,
    /// Print the state as JSON
    #[arg(long)]
    pub json: bool,
    /// Print an hourly chart of the whole day
    #[arg(long)]
    pub chart: bool,
}

fn parse_hhmm(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("expected HH:MM ({e})"))
}

pub fn run(args: LightingArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.chart {
        print!("{}", render_ascii_chart());
        return Ok(());
    }

    let at = args.at.unwrap_or_else(|| chrono::Local::now().time());
    let state = LightingState::at(at.hour() * 60 + at.minute());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("{}  {}", at.format("%H:%M"), render::lighting(&state));
    }
    Ok(())
}
