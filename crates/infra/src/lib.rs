mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, EmailConfig};
pub use repos::{IReminderRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::{info, warn};

#[derive(Clone)]
pub struct ReminderContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: Arc<dyn INotifier>,
}

struct ContextParams {
    pub postgres_connection_string: Option<String>,
}

impl ReminderContext {
    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let config = Config::new();
        let repos = match params.postgres_connection_string {
            Some(connection_string) => Repos::create_postgres(&connection_string).await?,
            None => {
                warn!("DATABASE_URL is not set. Reminders will only be stored in memory.");
                Repos::create_inmemory()
            }
        };
        let notifier = create_notifier(&config)?;

        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            notifier,
        })
    }

    /// Context without any external infrastructure
    pub fn create_inmemory(sys: Arc<dyn ISys>, notifier: Arc<dyn INotifier>) -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys,
            notifier,
        }
    }
}

fn create_notifier(config: &Config) -> anyhow::Result<Arc<dyn INotifier>> {
    match &config.email.api_token {
        Some(token) => {
            info!("Reminders will be emailed through {}", config.email.api_url);
            Ok(Arc::new(EmailApiNotifier::new(&config.email, token.clone())?))
        }
        None => {
            warn!("EMAIL_API_TOKEN is not set. Reminders will be logged instead of emailed.");
            Ok(Arc::new(LogNotifier {}))
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<ReminderContext> {
    ReminderContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
    })
    .await
}

fn get_psql_connection_string() -> Option<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .ok()
        .filter(|url| !url.trim().is_empty())
}
