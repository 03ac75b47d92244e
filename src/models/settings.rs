use super::validate;
use crate::errors::AppResult;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub theme: Theme,
    pub company_name: String,
    pub notifications: bool,
    pub email_alerts: bool,
    pub currency: Currency,
    pub language: Language,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub theme: Option<Theme>,
    pub company_name: Option<String>,
    pub notifications: Option<bool>,
    pub email_alerts: Option<bool>,
    pub currency: Option<Currency>,
    pub language: Option<Language>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        *self == SettingsUpdate::default()
    }

    pub fn validate(&self) -> AppResult<()> {
        if let Some(v) = &self.company_name {
            validate::required("company name", v)?;
        }
        Ok(())
    }

    pub(crate) fn apply(self, settings: &mut UserSettings) {
        if let Some(v) = self.theme {
            settings.theme = v;
        }
        if let Some(v) = self.company_name {
            settings.company_name = v.trim().to_string();
        }
        if let Some(v) = self.notifications {
            settings.notifications = v;
        }
        if let Some(v) = self.email_alerts {
            settings.email_alerts = v;
        }
        if let Some(v) = self.currency {
            settings.currency = v;
        }
        if let Some(v) = self.language {
            settings.language = v;
        }
    }
}
