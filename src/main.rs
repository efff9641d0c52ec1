mod telemetry;

use event_reminder_api::Application;
use event_reminder_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};
use tracing::error;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("event_reminder".into(), "info".into());
    init_subscriber(subscriber);

    let context = match setup_context().await {
        Ok(context) => context,
        Err(e) => {
            error!("Unable to set up the infrastructure: {:?}", e);
            std::process::exit(1);
        }
    };

    let app = Application::new(context).await?;
    app.start().await
}
