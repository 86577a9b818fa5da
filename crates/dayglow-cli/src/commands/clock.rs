use std::io::Write;
use std::time::Duration;

use clap::Args;
use dayglow_core::{ClockSnapshot, Config};

use crate::render;

#[derive(Args)]
pub struct ClockArgs {
    /// Print the snapshot as JSON
    #[arg(long)]
    pub json: bool,
    /// Keep refreshing once per second
    #[arg(long)]
    pub watch: bool,
}

pub async fn run(args: ClockArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let locale = config.clock.locale;

    if !args.watch {
        print_snapshot(&ClockSnapshot::now(locale), args.json)?;
        return Ok(());
    }

    let mut tick = tokio::time::interval(Duration::from_secs(1));
    loop {
        tokio::select! {
            _ = tick.tick() => {
                let snapshot = ClockSnapshot::now(locale);
                if args.json {
                    print_snapshot(&snapshot, true)?;
                } else {
                    let mut out = std::io::stdout().lock();
                    write!(
                        out,
                        "\r{}  {}",
                        render::clock(&snapshot),
                        render::lighting(&snapshot.lighting)
                    )?;
                    out.flush()?;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                return Ok(());
            }
        }
    }
}

fn print_snapshot(snapshot: &ClockSnapshot, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(snapshot)?);
    } else {
        println!("{}", render::clock(snapshot));
        println!("{}", render::lighting(&snapshot.lighting));
    }
    Ok(())
}
