use serde::{Deserialize, Serialize};

/// Conventional activity type tags. The `type` field itself is free-form.
pub mod kind {
    pub const CONTACT_CREATED: &str = "contact_created";
    pub const DEAL_CREATED: &str = "deal_created";
    pub const DEAL_UPDATED: &str = "deal_updated";
    pub const EMAIL_SENT: &str = "email_sent";
    pub const TASK_COMPLETED: &str = "task_completed";
}

/// Newest-first feed entries kept by the store.
pub const ACTIVITY_CAP: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub time: String,
}

impl Activity {
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        text: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            text: text.into(),
            time: time.into(),
        }
    }
}
