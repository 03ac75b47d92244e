use super::validate;
use crate::errors::AppResult;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Lead,
    Prospect,
    Customer,
    Churned,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 4] = [
        ContactStatus::Lead,
        ContactStatus::Prospect,
        ContactStatus::Customer,
        ContactStatus::Churned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Lead => "lead",
            ContactStatus::Prospect => "prospect",
            ContactStatus::Customer => "customer",
            ContactStatus::Churned => "churned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub status: ContactStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: NaiveDate,
    pub last_updated: String,
}

impl Contact {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive match on names, email and company.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }

        self.first_name.to_lowercase().contains(&q)
            || self.last_name.to_lowercase().contains(&q)
            || self.email.to_lowercase().contains(&q)
            || self
                .company
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&q))
    }
}

/// Fields a caller supplies to create a contact; id and timestamps are stamped by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub status: ContactStatus,
    pub avatar: Option<String>,
}

impl NewContact {
    pub fn validate(&self) -> AppResult<()> {
        validate::person_name("first name", &self.first_name)?;
        validate::person_name("last name", &self.last_name)?;
        validate::email(&self.email)?;
        Ok(())
    }

    pub(crate) fn into_contact(self, id: String, created_at: NaiveDate) -> Contact {
        Contact {
            id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: validate::non_blank(self.phone),
            company: validate::non_blank(self.company),
            status: self.status,
            avatar: validate::non_blank(self.avatar),
            created_at,
            last_updated: super::JUST_NOW.to_string(),
        }
    }
}

/// Partial update of a contact. `None` leaves a field untouched; for the
/// optional fields `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub company: Option<Option<String>>,
    pub status: Option<ContactStatus>,
    pub avatar: Option<Option<String>>,
}

impl ContactUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ContactUpdate::default()
    }

    pub fn validate(&self) -> AppResult<()> {
        if let Some(v) = &self.first_name {
            validate::person_name("first name", v)?;
        }
        if let Some(v) = &self.last_name {
            validate::person_name("last name", v)?;
        }
        if let Some(v) = &self.email {
            validate::email(v)?;
        }
        Ok(())
    }

    /// Shallow merge into `contact`, refreshing the last-updated marker.
    pub(crate) fn apply(self, contact: &mut Contact) {
        if let Some(v) = self.first_name {
            contact.first_name = v.trim().to_string();
        }
        if let Some(v) = self.last_name {
            contact.last_name = v.trim().to_string();
        }
        if let Some(v) = self.email {
            contact.email = v.trim().to_string();
        }
        if let Some(v) = self.phone {
            contact.phone = validate::non_blank(v);
        }
        if let Some(v) = self.company {
            contact.company = validate::non_blank(v);
        }
        if let Some(v) = self.status {
            contact.status = v;
        }
        if let Some(v) = self.avatar {
            contact.avatar = validate::non_blank(v);
        }
        contact.last_updated = super::JUST_NOW.to_string();
    }
}
