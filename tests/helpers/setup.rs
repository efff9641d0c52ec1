use chrono::{DateTime, TimeZone, Utc};
use event_reminder_api::Application;
use event_reminder_infra::{INotifier, InMemoryNotifier, ReminderContext, StaticTimeSys};
use event_reminder_sdk::ReminderSDK;
use std::sync::Arc;

pub struct TestApp {
    pub ctx: ReminderContext,
    pub notifier: Arc<InMemoryNotifier>,
}

impl TestApp {
    /// Same stores and notifier as the running server, with the clock frozen at `now`
    pub fn context_at(&self, now: DateTime<Utc>) -> ReminderContext {
        let mut ctx = self.ctx.clone();
        ctx.sys = Arc::new(StaticTimeSys::at(now));
        ctx
    }
}

pub fn submission_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap()
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, ReminderSDK, String) {
    let notifier = Arc::new(InMemoryNotifier::new());
    let mut ctx = ReminderContext::create_inmemory(
        Arc::new(StaticTimeSys::at(submission_time())),
        notifier.clone() as Arc<dyn INotifier>,
    );
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { ctx, notifier };
    let sdk = ReminderSDK::new(address.clone());
    (app, sdk, address)
}
