//! Example records used to populate an empty store, and as the read-only
//! fallback whenever storage cannot be read.

use super::activity::{Activity, kind};
use super::contact::{Contact, ContactStatus};
use super::deal::{Deal, DealStage};
use super::settings::{Currency, Language, Theme, UserSettings};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn contact(
    id: &str,
    first: &str,
    last: &str,
    email: &str,
    phone: Option<&str>,
    company: &str,
    status: ContactStatus,
    avatar_img: u8,
    created_at: NaiveDate,
    last_updated: &str,
) -> Contact {
    Contact {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        phone: phone.map(str::to_string),
        company: Some(company.to_string()),
        status,
        avatar: Some(format!("https://i.pravatar.cc/150?img={avatar_img}")),
        created_at,
        last_updated: last_updated.to_string(),
    }
}

pub fn contacts() -> Vec<Contact> {
    vec![
        contact(
            "1",
            "John",
            "Smith",
            "john.smith@techcorp.com",
            Some("+1 555-0101"),
            "Tech Corp",
            ContactStatus::Customer,
            1,
            date(2025, 12, 15),
            "2 days ago",
        ),
        contact(
            "2",
            "Sarah",
            "Johnson",
            "sarah.j@startup.io",
            Some("+1 555-0102"),
            "Startup Inc",
            ContactStatus::Prospect,
            5,
            date(2025, 12, 10),
            "1 day ago",
        ),
        contact(
            "3",
            "Michael",
            "Chen",
            "mchen@globaltech.com",
            None,
            "GlobalTech",
            ContactStatus::Lead,
            3,
            date(2025, 12, 18),
            "5 hours ago",
        ),
        contact(
            "4",
            "Emily",
            "Davis",
            "emily.d@innovate.co",
            None,
            "Innovate Co",
            ContactStatus::Customer,
            9,
            date(2025, 11, 20),
            "1 week ago",
        ),
    ]
}

pub fn deals() -> Vec<Deal> {
    vec![
        Deal {
            id: "d1".into(),
            name: "Enterprise License Deal".into(),
            value: 50000.0,
            stage: DealStage::Proposal,
            contact_id: "1".into(),
            company: "Tech Corp".into(),
            expected_close: date(2025, 2, 15),
            probability: 60,
            created_at: date(2025, 12, 1),
        },
        Deal {
            id: "d2".into(),
            name: "Annual Subscription".into(),
            value: 12000.0,
            stage: DealStage::Negotiation,
            contact_id: "2".into(),
            company: "Startup Inc".into(),
            expected_close: date(2025, 1, 30),
            probability: 80,
            created_at: date(2025, 12, 5),
        },
        Deal {
            id: "d3".into(),
            name: "Consulting Services".into(),
            value: 25000.0,
            stage: DealStage::Qualification,
            contact_id: "3".into(),
            company: "GlobalTech".into(),
            expected_close: date(2025, 3, 1),
            probability: 30,
            created_at: date(2025, 12, 10),
        },
    ]
}

pub fn activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "1",
            kind::CONTACT_CREATED,
            "New contact added: John Smith",
            "2 min ago",
        ),
        Activity::new(
            "2",
            kind::DEAL_UPDATED,
            "Deal moved to proposal: Enterprise License",
            "15 min ago",
        ),
        Activity::new(
            "3",
            kind::EMAIL_SENT,
            "Email opened by Sarah Johnson",
            "1 hour ago",
        ),
        Activity::new(
            "4",
            kind::TASK_COMPLETED,
            "Follow-up call completed",
            "2 hours ago",
        ),
    ]
}

pub fn settings() -> UserSettings {
    UserSettings {
        theme: Theme::Light,
        company_name: "MiniCRM Inc".into(),
        notifications: true,
        email_alerts: true,
        currency: Currency::Usd,
        language: Language::En,
    }
}
