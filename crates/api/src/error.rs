use actix_web::{http::StatusCode, HttpResponse};
use event_reminder_api_structs::ErrorResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReminderError {
    #[error("Server error")]
    InternalError,
    #[error("{0}")]
    BadClientData(String),
}

impl actix_web::error::ResponseError for ReminderError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, ResponseError};

    #[actix_web::test]
    async fn renders_json_envelope() {
        let res = ReminderError::BadClientData("Invalid email format".into()).error_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(res.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid email format");
    }

    #[actix_web::test]
    async fn hides_internal_details() {
        let res = ReminderError::InternalError.error_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(res.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], "Server error");
    }
}
