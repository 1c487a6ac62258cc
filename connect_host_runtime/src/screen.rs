use serde_json::Value;

use crate::bridge;
use crate::logbook::LogBook;

#[derive(Debug, Default)]
pub struct ScreenState {
    pub logbook: LogBook,
    url: String,
    active_url: String,
}

impl ScreenState {
    pub fn new(initial_url: impl Into<String>) -> Self {
        let initial_url = initial_url.into();
        Self { logbook: LogBook::default(), url: initial_url.clone(), active_url: initial_url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn active_url(&self) -> &str {
        &self.active_url
    }

    // Draft edits never touch the active URL or the log.
    pub fn edit_url(&mut self, draft: impl Into<String>) {
        self.url = draft.into();
    }

    pub fn reload(&mut self) -> String {
        self.active_url = self.url.clone();
        self.logbook.record_info(format!("Reloaded: {}", self.active_url));
        self.active_url.clone()
    }

    pub fn clear_logs(&mut self) {
        self.logbook.clear();
    }

    // Inbound page text cannot fail the screen: anything that is not valid
    // JSON is kept verbatim as a raw entry.
    pub fn handle_page_message(&mut self, raw: &str) {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => {
                bridge::diagnose(&value);
                self.logbook.record_data(value);
            }
            Err(_) => self.logbook.record_raw(raw),
        }
    }
}
