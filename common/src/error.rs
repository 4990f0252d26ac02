use std::borrow::Cow;
use std::fmt::Display;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, ToSchema)]
pub struct ErrorInformation {
    /// A machine-readable error type
    pub error: Cow<'static, str>,
    /// A human-readable error message
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Human-readable error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorInformation {
    pub fn new(error: impl Into<Cow<'static, str>>, message: impl Display) -> Self {
        Self {
            error: error.into(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Log an unanticipated error under a fresh correlation id and return a
    /// generic body carrying only that id.
    pub fn internal(err: impl Display) -> Self {
        let correlation_id = uuid::Uuid::new_v4();
        log::error!("[{correlation_id}] internal error: {err}");
        Self {
            error: "Internal".into(),
            message: format!("internal server error (correlation id {correlation_id})"),
            details: None,
        }
    }
}
