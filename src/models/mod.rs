//! Record types kept by the store, with their create/update structures.

pub mod activity;
pub mod contact;
pub mod deal;
pub mod seed;
pub mod settings;
pub mod stats;
pub mod validate;

pub use activity::{ACTIVITY_CAP, Activity};
pub use contact::{Contact, ContactStatus, ContactUpdate, NewContact};
pub use deal::{Deal, DealStage, DealUpdate, NewDeal};
pub use settings::{Currency, Language, SettingsUpdate, Theme, UserSettings};
pub use stats::{Insights, StageColumn, Stats};

/// Relative-time label stamped on freshly written records.
pub const JUST_NOW: &str = "Just now";
