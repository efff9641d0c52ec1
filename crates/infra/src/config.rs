use chrono::NaiveTime;
use event_reminder_domain::Tz;
use std::{fmt::Display, str::FromStr};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Base url of the transactional email api
    pub api_url: String,
    /// Server token for the email api. When absent reminders are only logged.
    pub api_token: Option<String>,
    /// Address the reminders are sent from
    pub sender: String,
    /// Timeout in millis for a single request against the email api
    pub timeout_millis: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Time zone which decides what "today" is for the reminder dispatch job
    /// and how dates without an explicit offset are interpreted.
    pub timezone: Tz,
    /// Wall clock time in `timezone` at which the reminder dispatch job runs every day
    pub dispatch_time: NaiveTime,
    pub email: EmailConfig,
}

const DEFAULT_PORT: &str = "5000";
const DEFAULT_TIMEZONE: &str = "UTC";
const DEFAULT_DISPATCH_TIME: &str = "07:00";
const DEFAULT_EMAIL_API_URL: &str = "https://api.postmarkapp.com";
const DEFAULT_EMAIL_SENDER: &str = "reminders@localhost";
const DEFAULT_EMAIL_TIMEOUT_MILLIS: &str = "10000";

/// Reads `key` from the environment and parses it, falling back to `default`
/// when the variable is absent or invalid.
fn env_or<T>(key: &str, default: &'static str) -> T
where
    T: FromStr,
    T::Err: Display + std::fmt::Debug,
{
    let value = std::env::var(key).unwrap_or_else(|_| default.into());
    match value.parse::<T>() {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(
                "The given {}: {} is not valid ({}), falling back to the default: {}.",
                key, value, e, default
            );
            default.parse::<T>().expect("Defaults are valid")
        }
    }
}

fn parse_dispatch_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

impl Config {
    pub fn new() -> Self {
        let dispatch_time = std::env::var("REMINDER_DISPATCH_TIME")
            .unwrap_or_else(|_| DEFAULT_DISPATCH_TIME.into());
        let dispatch_time = match parse_dispatch_time(&dispatch_time) {
            Some(time) => time,
            None => {
                warn!(
                    "The given REMINDER_DISPATCH_TIME: {} is not valid, falling back to the default: {}.",
                    dispatch_time, DEFAULT_DISPATCH_TIME
                );
                parse_dispatch_time(DEFAULT_DISPATCH_TIME).expect("Defaults are valid")
            }
        };

        let api_token = std::env::var("EMAIL_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        Self {
            port: env_or("PORT", DEFAULT_PORT),
            timezone: env_or("REMINDER_TIMEZONE", DEFAULT_TIMEZONE),
            dispatch_time,
            email: EmailConfig {
                api_url: std::env::var("EMAIL_API_URL")
                    .unwrap_or_else(|_| DEFAULT_EMAIL_API_URL.into()),
                api_token,
                sender: std::env::var("EMAIL_SENDER")
                    .unwrap_or_else(|_| DEFAULT_EMAIL_SENDER.into()),
                timeout_millis: env_or("EMAIL_TIMEOUT_MILLIS", DEFAULT_EMAIL_TIMEOUT_MILLIS),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
