mod helpers;

use chrono::{Duration, TimeZone, Utc};
use event_reminder_api::{dispatch_due_reminders, DispatchSummary};
use event_reminder_domain::DayWindow;
use event_reminder_sdk::{APIError, CreateRemindersInput, ReminderInput};
use helpers::setup::{spawn_app, submission_time, TestApp};
use helpers::utils::{birthday, format_date};
use reqwest::StatusCode;

fn assert_rejected(err: APIError, expected_message: &str) {
    match err {
        APIError::Rejected { status, message } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(message.as_deref(), Some(expected_message));
        }
        e => panic!("Expected the request to be rejected, got: {:?}", e),
    }
}

async fn stored_on_june_first(app: &TestApp) -> usize {
    let window = DayWindow::containing(
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        &app.ctx.config.timezone,
    );
    app.ctx
        .repos
        .reminders
        .find_unsent_in(&window)
        .await
        .expect("To query reminders")
        .len()
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk.status.check_health().await.expect("To get status");
    assert_eq!(res.message, "Yo! We are up!\r\n");
}

#[actix_web::main]
#[test]
async fn test_create_single_reminder() {
    let (app, sdk, _) = spawn_app().await;
    let res = sdk
        .reminder
        .create(CreateRemindersInput {
            reminders: vec![birthday("Mom's Birthday", "2024-06-01", "a@b.com")],
        })
        .await
        .expect("To create reminder");

    assert!(res.success);
    assert_eq!(res.message, "Reminders created successfully");
    assert_eq!(res.data.len(), 1);
    let reminder = &res.data[0];
    assert_eq!(reminder.event_name, "Mom's Birthday");
    assert_eq!(reminder.customer_email, "a@b.com");
    assert_eq!(reminder.event_type, "Birthday");
    assert_eq!(reminder.other_event_type, None);
    assert!(!reminder.is_reminder_sent);
    assert_eq!(reminder.created_at, submission_time());
    assert_eq!(stored_on_june_first(&app).await, 1);
}

#[actix_web::main]
#[test]
async fn test_create_max_reminders() {
    let (app, sdk, _) = spawn_app().await;
    let date = format_date(&Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
    let res = sdk
        .reminder
        .create(CreateRemindersInput {
            reminders: vec![
                birthday("Mom's Birthday", &date, "a@b.com"),
                ReminderInput {
                    event_type: Some("Anniversary".into()),
                    ..birthday("Wedding", &date, "c@d.com")
                },
                ReminderInput {
                    event_type: Some("Other".into()),
                    other_event_type: Some("Graduation".into()),
                    ..birthday("Anna graduates", &date, "e@f.com")
                },
            ],
        })
        .await
        .expect("To create reminders");

    assert_eq!(res.data.len(), 3);
    assert_eq!(res.data[2].event_type, "Other");
    assert_eq!(res.data[2].other_event_type.as_deref(), Some("Graduation"));
    assert_eq!(stored_on_june_first(&app).await, 3);
}

#[actix_web::main]
#[test]
async fn test_rejects_too_many_reminders() {
    let (app, sdk, _) = spawn_app().await;
    let reminders = (0..4)
        .map(|i| birthday(&format!("Event {}", i), "2024-06-01", "a@b.com"))
        .collect();
    let err = sdk
        .reminder
        .create(CreateRemindersInput { reminders })
        .await
        .unwrap_err();

    assert_rejected(err, "A maximum of 3 reminders can be submitted at once");
    assert_eq!(stored_on_june_first(&app).await, 0);
}

#[actix_web::main]
#[test]
async fn test_rejects_empty_batch() {
    let (_, sdk, _) = spawn_app().await;
    let err = sdk
        .reminder
        .create(CreateRemindersInput { reminders: vec![] })
        .await
        .unwrap_err();

    assert_rejected(err, "Invalid reminder data");
}

#[actix_web::main]
#[test]
async fn test_rejects_whole_batch_on_malformed_email() {
    let (app, sdk, _) = spawn_app().await;
    let err = sdk
        .reminder
        .create(CreateRemindersInput {
            reminders: vec![
                birthday("Mom's Birthday", "2024-06-01", "a@b.com"),
                birthday("Dad's Birthday", "2024-06-01", "not-an-email"),
            ],
        })
        .await
        .unwrap_err();

    assert_rejected(err, "Invalid email format");
    assert_eq!(stored_on_june_first(&app).await, 0);
}

#[actix_web::main]
#[test]
async fn test_rejects_other_without_label() {
    let (_, sdk, _) = spawn_app().await;
    let err = sdk
        .reminder
        .create(CreateRemindersInput {
            reminders: vec![ReminderInput {
                event_type: Some("Other".into()),
                other_event_type: None,
                ..birthday("Something", "2024-06-01", "a@b.com")
            }],
        })
        .await
        .unwrap_err();

    assert_rejected(err, "Please specify the other event type");
}

#[actix_web::main]
#[test]
async fn test_rejects_missing_fields() {
    let (_, sdk, _) = spawn_app().await;
    let err = sdk
        .reminder
        .create(CreateRemindersInput {
            reminders: vec![ReminderInput {
                event_name: Some("   ".into()),
                ..birthday("", "2024-06-01", "a@b.com")
            }],
        })
        .await
        .unwrap_err();

    assert_rejected(err, "All required fields must be provided");
}

#[actix_web::main]
#[test]
async fn test_rejects_unknown_event_type_and_bad_date() {
    let (_, sdk, _) = spawn_app().await;
    let err = sdk
        .reminder
        .create(CreateRemindersInput {
            reminders: vec![ReminderInput {
                event_type: Some("Holiday".into()),
                ..birthday("Christmas", "2024-12-24", "a@b.com")
            }],
        })
        .await
        .unwrap_err();
    assert_rejected(err, "Invalid event type");

    let err = sdk
        .reminder
        .create(CreateRemindersInput {
            reminders: vec![birthday("Mom's Birthday", "the first of June", "a@b.com")],
        })
        .await
        .unwrap_err();
    assert_rejected(err, "Invalid event date");
}

#[actix_web::main]
#[test]
async fn test_rejects_malformed_body() {
    let (_, _, address) = spawn_app().await;
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/reminders", address))
        .header("content-type", "application/json")
        .body("{\"reminders\": [")
        .send()
        .await
        .expect("To send request");

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.expect("To get json body");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid reminder data");
}

#[actix_web::main]
#[test]
async fn test_sends_reminder_on_event_day_once() {
    let (app, sdk, _) = spawn_app().await;
    sdk.reminder
        .create(CreateRemindersInput {
            reminders: vec![birthday("Mom's Birthday", "2024-06-01", "a@b.com")],
        })
        .await
        .expect("To create reminder");

    let day_before = app.context_at(Utc.with_ymd_and_hms(2024, 5, 31, 7, 0, 0).unwrap());
    assert_eq!(
        dispatch_due_reminders(&day_before).await,
        Some(DispatchSummary::default())
    );
    assert!(app.notifier.sent_messages().is_empty());

    let dispatch_time = Utc.with_ymd_and_hms(2024, 6, 1, 7, 0, 0).unwrap();
    let event_day = app.context_at(dispatch_time);
    let summary = dispatch_due_reminders(&event_day).await.expect("To dispatch");
    assert_eq!(summary.sent, 1);

    let sent = app.notifier.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "a@b.com");
    assert_eq!(sent[0].subject, "Reminder: Mom's Birthday is Today!");
    assert_eq!(stored_on_june_first(&app).await, 0);

    let later_that_day = app.context_at(dispatch_time + Duration::hours(6));
    let summary = dispatch_due_reminders(&later_that_day)
        .await
        .expect("To dispatch");
    assert_eq!(summary.due, 0);
    assert_eq!(app.notifier.sent_messages().len(), 1);
}
