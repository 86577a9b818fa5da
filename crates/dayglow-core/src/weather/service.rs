//! Weather fetch orchestration.
//!
//! Each fetch takes a ticket from a monotonically increasing counter. Only
//! the holder of the newest ticket may publish a result; an older request
//! that finishes late is dropped instead of overwriting fresher state.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, error, info};

use super::client::{WeatherClient, WeatherReading};
use super::location::Location;
use crate::error::Result;
use crate::events::Event;
use crate::locale::Locale;

/// What happened to one fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Updated(WeatherReading),
    /// Request or parse failed; carries the message shown to the user.
    Failed(String),
    /// A newer fetch started before this one finished.
    Superseded,
}

pub struct WeatherService {
    client: WeatherClient,
    locale: Locale,
    latest_seq: AtomicU64,
    events: UnboundedSender<Event>,
}

impl WeatherService {
    pub fn new(client: WeatherClient, locale: Locale, events: UnboundedSender<Event>) -> Self {
        Self {
            client,
            locale,
            latest_seq: AtomicU64::new(0),
            events,
        }
    }

    /// Build a service with its own client against `base_url`.
    pub fn connect(base_url: &str, locale: Locale, events: UnboundedSender<Event>) -> Result<Self> {
        Ok(Self::new(WeatherClient::new(base_url)?, locale, events))
    }

    /// Sequence number of the most recently started fetch.
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq.load(Ordering::SeqCst)
    }

    /// Fetch and publish current weather for `location_key`.
    ///
    /// Unknown keys are rejected before anything is published. Network and
    /// parse failures never escape: they are logged and published as a
    /// `WeatherFailed` event.
    pub async fn fetch(&self, location_key: &str) -> Result<FetchOutcome> {
        let location = Location::find(location_key)?;
        let seq = self.latest_seq.fetch_add(1, Ordering::SeqCst) + 1;

        self.publish(Event::WeatherLoading {
            seq,
            location: location.key.to_string(),
            status: self.locale.loading_status(location.name),
            at: Utc::now(),
        });

        let result = self.client.current(location).await;

        if seq != self.latest_seq() {
            debug!(seq, location = location.key, "discarding superseded weather response");
            return Ok(FetchOutcome::Superseded);
        }

        match result {
            Ok(current) => {
                let reading = WeatherReading::from_current(location, &current, self.locale);
                info!(
                    location = location.key,
                    temperature_c = reading.temperature_c,
                    weather_code = reading.weather_code,
                    "weather updated"
                );
                self.publish(Event::WeatherUpdated {
                    seq,
                    status: self
                        .locale
                        .weather_status(&reading.description, reading.wind_speed_kmh),
                    reading: reading.clone(),
                    at: Utc::now(),
                });
                Ok(FetchOutcome::Updated(reading))
            }
            Err(e) => {
                error!(location = location.key, error = %e, "weather fetch failed");
                let message = self.locale.fetch_failed().to_string();
                self.publish(Event::WeatherFailed {
                    seq,
                    location: location.key.to_string(),
                    message: message.clone(),
                    at: Utc::now(),
                });
                Ok(FetchOutcome::Failed(message))
            }
        }
    }

    fn publish(&self, event: Event) {
        if self.events.send(event).is_err() {
            debug!("event receiver dropped; weather event not delivered");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, WeatherError};
    use tokio::sync::mpsc::unbounded_channel;

    #[test]
    fn connect_rejects_bad_base_url() {
        let (tx, _rx) = unbounded_channel();
        let err = WeatherService::connect("not a url", Locale::Th, tx)
            .err()
            .unwrap();
        assert!(matches!(
            err,
            CoreError::Weather(WeatherError::InvalidUrl(_))
        ));
    }

    #[test]
    fn connect_starts_with_no_fetches() {
        let (tx, _rx) = unbounded_channel();
        let service = WeatherService::connect("http://127.0.0.1:1", Locale::En, tx).unwrap();
        assert_eq!(service.latest_seq(), 0);
    }
}
