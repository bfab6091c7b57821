use chrono::{SecondsFormat, Utc};

// created_at columns hold this exact format. UTC with
// milliseconds and a Z suffix, which is also what the
// API serves, and it sorts correctly as plain text.

pub fn current_timestamp_rfc3339() -> String {
  Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
