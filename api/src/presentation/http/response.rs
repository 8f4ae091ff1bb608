use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

/// Uniform body of every API response.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            error: None,
        }
    }
}

impl Envelope<()> {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(error.into()),
        }
    }

    pub fn done(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            error: None,
        }
    }
}

pub type Reply<T> = Json<Envelope<T>>;

pub fn ok<T: Serialize>(message: &str, data: T) -> Reply<T> {
    Json(Envelope::success(message, data))
}

pub fn created<T: Serialize>(message: &str, data: T) -> (StatusCode, Reply<T>) {
    (StatusCode::CREATED, Json(Envelope::success(message, data)))
}

pub fn done(message: &str) -> Reply<()> {
    Json(Envelope::done(message))
}
