use chrono::{SecondsFormat, Utc};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub body: EntryBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryBody {
    Data(Value),
    Raw(String),
    Info(String),
}

impl LogEntry {
    fn stamped(body: EntryBody) -> Self {
        Self { timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true), body }
    }

    pub fn render_line(&self) -> String {
        let body = match &self.body {
            EntryBody::Info(text) => text.clone(),
            EntryBody::Raw(text) => text.clone(),
            EntryBody::Data(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        };

        format!("[{}] {body}", clock_time(&self.timestamp))
    }
}

#[derive(Debug, Default)]
pub struct LogBook {
    entries: Vec<LogEntry>,
}

impl LogBook {
    pub fn record_data(&mut self, value: Value) {
        self.entries.push(LogEntry::stamped(EntryBody::Data(value)));
    }

    pub fn record_raw(&mut self, text: impl Into<String>) {
        self.entries.push(LogEntry::stamped(EntryBody::Raw(text.into())));
    }

    pub fn record_info(&mut self, text: impl Into<String>) {
        self.entries.push(LogEntry::stamped(EntryBody::Info(text.into())));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render_lines(&self) -> Vec<String> {
        self.entries.iter().map(LogEntry::render_line).collect()
    }
}

// Display wants the wall-clock portion only; the stamp is full RFC 3339 UTC.
fn clock_time(timestamp: &str) -> &str {
    timestamp.get(11..19).unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn info_lines_render_the_text_after_the_clock() {
        let entry = LogEntry {
            timestamp: "2026-08-05T09:41:07.123Z".to_string(),
            body: EntryBody::Info("Reloaded: https://example.test".to_string()),
        };

        assert_eq!(entry.render_line(), "[09:41:07] Reloaded: https://example.test");
    }

    #[test]
    fn data_lines_render_pretty_printed_json() {
        let entry = LogEntry {
            timestamp: "2026-08-05T09:41:07.123Z".to_string(),
            body: EntryBody::Data(json!({"type": "SUCCESS"})),
        };

        let line = entry.render_line();
        assert!(line.starts_with("[09:41:07] {"));
        assert!(line.contains("\"type\": \"SUCCESS\""));
    }

    #[test]
    fn raw_lines_render_the_original_text() {
        let entry = LogEntry {
            timestamp: "2026-08-05T09:41:07.123Z".to_string(),
            body: EntryBody::Raw("<<not json>>".to_string()),
        };

        assert_eq!(entry.render_line(), "[09:41:07] <<not json>>");
    }

    #[test]
    fn malformed_timestamps_fall_back_to_the_full_stamp() {
        assert_eq!(clock_time("2026-08-05T09:41:07.123Z"), "09:41:07");
        assert_eq!(clock_time("oops"), "oops");
    }

    #[test]
    fn records_are_stamped_and_appended_in_order() {
        let mut book = LogBook::default();
        book.record_info("first");
        book.record_raw("second");
        book.record_data(json!({"n": 3}));

        let entries = book.entries();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|entry| entry.timestamp.len() >= 20));
        assert!(matches!(entries[0].body, EntryBody::Info(_)));
        assert!(matches!(entries[1].body, EntryBody::Raw(_)));
        assert!(matches!(entries[2].body, EntryBody::Data(_)));
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut book = LogBook::default();
        book.record_info("something");
        assert!(!book.is_empty());

        book.clear();
        assert!(book.is_empty());
        assert!(book.render_lines().is_empty());
    }
}
