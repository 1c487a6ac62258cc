pub mod bridge;
pub mod config;
pub mod logbook;
pub mod screen;

pub use crate::bridge::{BridgeMessage, ErrorCode, ErrorPayload, SuccessPayload};
pub use crate::config::ConnectConfig;
pub use crate::logbook::{EntryBody, LogBook, LogEntry};
pub use crate::screen::ScreenState;
