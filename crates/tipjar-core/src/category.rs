//! Spending categories a tip can be filed under.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The fixed set of categories offered by the category picker.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Restaurant,
    Cafe,
    Bar,
    Delivery,
    Taxi,
    Salon,
    Other,
}

impl Category {
    /// Parses a stored category name, mapping anything unrecognised to `Other`.
    ///
    /// Used when reading persisted records so that a renamed or removed
    /// category never makes a whole history undecodable.
    pub fn from_stored(name: &str) -> Self {
        name.trim().parse().unwrap_or(Category::Other)
    }
}
