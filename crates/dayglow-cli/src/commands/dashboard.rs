use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Args;
use dayglow_core::{
    Config, Dashboard, Event, Location, PomodoroController, TimerEngine, WeatherService,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::unbounded_channel;
use tracing::warn;

use crate::input::{self, UserCommand};
use crate::{notify, render};

/// Redraws caused by countdown ticks are rate-limited to this period.
const TICK_REDRAW_PERIOD: Duration = Duration::from_millis(50);

#[derive(Args)]
pub struct DashboardArgs {
    /// Initial weather location (defaults to the configured one)
    #[arg(long)]
    pub location: Option<String>,
}

pub async fn run(args: DashboardArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let locale = config.clock.locale;
    let (tx, mut rx) = unbounded_channel();

    let controller =
        PomodoroController::new(TimerEngine::new(config.timer.durations()), tx.clone())
            .with_intervals(config.timer.tick_interval(), config.timer.completion_delay());
    let weather = Arc::new(WeatherService::connect(
        &config.weather.api_base_url,
        locale,
        tx,
    )?);

    let mut dash = Dashboard::new(
        locale,
        config.weather.keep_loading_on_error,
        controller.view().await,
    );

    let initial = args
        .location
        .unwrap_or_else(|| config.weather.default_location.clone());
    spawn_fetch(&weather, &initial)?;

    let mut clock_tick = tokio::time::interval(Duration::from_secs(1));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut last_draw: Option<Instant> = None;
    let mut hint: Option<String> = Some(input::HELP.to_string());

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    draw(&dash, hint.as_deref())?;

    loop {
        let mut force_draw = true;
        tokio::select! {
            _ = &mut ctrl_c => break,
            _ = clock_tick.tick() => {
                dash.refresh_clock();
            }
            Some(event) = rx.recv() => {
                if event.is_timer_event() {
                    dash.timer = controller.view().await;
                }
                if let Event::TimerCompleted { mode, .. } = &event {
                    notify::completion(&config.notifications, locale.completion_message(*mode));
                }
                force_draw = !matches!(event, Event::TimerTicked { .. });
                dash.apply(&event);
            }
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(line) => {
                        hint = None;
                        match input::parse(&line) {
                            UserCommand::Toggle => {
                                controller.toggle().await;
                            }
                            UserCommand::Reset => controller.reset().await,
                            UserCommand::Mode(mode) => controller.set_mode(mode).await,
                            UserCommand::Location(key) => {
                                if let Err(e) = spawn_fetch(&weather, &key) {
                                    hint = Some(e.to_string());
                                }
                            }
                            UserCommand::Dismiss => dash.notice = None,
                            UserCommand::Help => hint = Some(input::HELP.to_string()),
                            UserCommand::Quit => break,
                            UserCommand::Unknown(text) => {
                                hint = Some(format!("unknown command: {text}\n{}", input::HELP));
                            }
                        }
                        dash.timer = controller.view().await;
                    }
                    None => stdin_open = false,
                }
            }
        }

        let due = last_draw.map_or(true, |at| at.elapsed() >= TICK_REDRAW_PERIOD);
        if force_draw || due {
            draw(&dash, hint.as_deref())?;
            last_draw = Some(Instant::now());
        }
    }

    Ok(())
}

/// Validate the key, then fetch in the background. Results arrive as events.
fn spawn_fetch(service: &Arc<WeatherService>, key: &str) -> Result<(), dayglow_core::CoreError> {
    let location = Location::find(key)?;
    let service = Arc::clone(service);
    let key = location.key;
    tokio::spawn(async move {
        if let Err(e) = service.fetch(key).await {
            warn!(error = %e, "weather fetch rejected");
        }
    });
    Ok(())
}

fn draw(dash: &Dashboard, hint: Option<&str>) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    write!(out, "\x1b[2J\x1b[H{}", render::dashboard(dash))?;
    if let Some(hint) = hint {
        write!(out, "\n{hint}\n")?;
    }
    out.flush()
}
