use std::io::Write;

use clap::Args;
use dayglow_core::{Config, Event, PomodoroController, TimerEngine, TimerMode, TimerState};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::unbounded_channel;

use crate::input::{self, UserCommand};
use crate::{notify, render};

#[derive(Args)]
pub struct TimerArgs {
    /// Mode to begin in
    #[arg(long, default_value = "work")]
    pub mode: TimerMode,
    /// Start counting immediately
    #[arg(long)]
    pub auto_start: bool,
    /// Print every event as a JSON line instead of the countdown face
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: TimerArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let locale = config.clock.locale;
    let (tx, mut rx) = unbounded_channel();
    let controller = PomodoroController::new(TimerEngine::new(config.timer.durations()), tx)
        .with_intervals(config.timer.tick_interval(), config.timer.completion_delay());

    controller.set_mode(args.mode).await;
    if args.auto_start {
        controller.start().await;
    }
    if !args.json {
        eprintln!("{}", input::HELP);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    // Zero reached, completion signal still pending.
    let mut finishing = false;

    loop {
        tokio::select! {
            biased;

            Some(event) = rx.recv() => {
                if args.json {
                    println!("{}", serde_json::to_string(&event)?);
                } else {
                    let view = controller.view().await;
                    let mut out = std::io::stdout().lock();
                    write!(out, "\r{}   ", render::timer(&view))?;
                    out.flush()?;
                }

                match event {
                    Event::TimerTicked { state: TimerState::Paused, remaining_ms: 0, .. } => {
                        finishing = true;
                    }
                    // A pending completion is cancelled by these.
                    Event::TimerReset { .. } | Event::ModeChanged { .. } => finishing = false,
                    Event::TimerCompleted { mode, .. } => {
                        finishing = false;
                        if !args.json {
                            notify::completion(&config.notifications, locale.completion_message(mode));
                        }
                        if !stdin_open {
                            break;
                        }
                    }
                    _ => {}
                }
            }
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(line) => match input::parse(&line) {
                        UserCommand::Toggle => {
                            controller.toggle().await;
                        }
                        UserCommand::Reset => controller.reset().await,
                        UserCommand::Mode(mode) => controller.set_mode(mode).await,
                        UserCommand::Quit => break,
                        UserCommand::Help => eprintln!("{}", input::HELP),
                        UserCommand::Dismiss => {}
                        UserCommand::Location(_) | UserCommand::Unknown(_) => {
                            eprintln!("{}", input::HELP)
                        }
                    },
                    None => {
                        stdin_open = false;
                        if !controller.is_running().await && !finishing {
                            break;
                        }
                    }
                }
            }
        }
    }

    if !args.json {
        println!();
    }
    Ok(())
}
