use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum BridgeMessage {
    #[serde(rename = "SUCCESS")]
    Success(SuccessPayload),
    #[serde(rename = "ERROR")]
    Error(ErrorPayload),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessPayload {
    pub id: String,
    pub customer_id: String,
    pub login_source_id: String,
    pub login_status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "CONFIGURATION_ERROR")]
    ConfigurationError,
    #[serde(rename = "INVALID_CREDENTIALS")]
    InvalidCredentials,
    #[serde(rename = "CONNECTION_FAILED")]
    ConnectionFailed,
}

// Diagnostic side channel only: the stored entry always keeps the decoded
// JSON as-is, whether or not it matches the schema.
pub fn diagnose(value: &Value) {
    match serde_json::from_value::<BridgeMessage>(value.clone()) {
        Ok(BridgeMessage::Success(payload)) => {
            log::info!("account connected: {}", payload.id);
        }
        Ok(BridgeMessage::Error(payload)) => match payload.code {
            // The user can retry inside the hosted page itself.
            ErrorCode::InvalidCredentials => {
                log::warn!("login rejected by the institution: {}", payload.message);
            }
            ErrorCode::ConnectionFailed => {
                log::warn!("connection to the institution failed: {}", payload.message);
            }
            // The connect URL is missing or carries bad query parameters.
            ErrorCode::ConfigurationError => {
                log::warn!("hosted page rejected the connect URL: {}", payload.message);
            }
        },
        Err(err) => {
            log::debug!("message does not match the bridge schema: {err}");
        }
    }
}
