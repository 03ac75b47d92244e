// src/export/model.rs

use crate::models::{Activity, Contact, Deal};
use serde::Serialize;

/// Flat contact row for CSV.
#[derive(Serialize, Clone, Debug)]
pub struct ContactExport {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub status: String,
    pub created_at: String,
    pub last_updated: String,
}

impl From<&Contact> for ContactExport {
    fn from(c: &Contact) -> Self {
        Self {
            id: c.id.clone(),
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone().unwrap_or_default(),
            company: c.company.clone().unwrap_or_default(),
            status: c.status.as_str().to_string(),
            created_at: c.created_at.format("%Y-%m-%d").to_string(),
            last_updated: c.last_updated.clone(),
        }
    }
}

/// Flat deal row for CSV.
#[derive(Serialize, Clone, Debug)]
pub struct DealExport {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub stage: String,
    pub contact_id: String,
    pub company: String,
    pub expected_close: String,
    pub probability: u8,
    pub created_at: String,
}

impl From<&Deal> for DealExport {
    fn from(d: &Deal) -> Self {
        Self {
            id: d.id.clone(),
            name: d.name.clone(),
            value: d.value,
            stage: d.stage.as_str().to_string(),
            contact_id: d.contact_id.clone(),
            company: d.company.clone(),
            expected_close: d.expected_close.format("%Y-%m-%d").to_string(),
            probability: d.probability,
            created_at: d.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct ActivityExport {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub time: String,
}

impl From<&Activity> for ActivityExport {
    fn from(a: &Activity) -> Self {
        Self {
            id: a.id.clone(),
            kind: a.kind.clone(),
            text: a.text.clone(),
            time: a.time.clone(),
        }
    }
}
