use serde::{Deserialize, Serialize};

use crate::profile::TasteVector;

/// A finished food-experience entry in the journal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewRecord {
    pub id: u64,
    pub dish: String,
    pub place: String,
    pub notes: String,
    /// Craving intensity on the five-point kuchisabishii scale, 1-5.
    pub kuchisabishii: u8,
    /// Conventional star rating, 0-5.
    pub stars: f32,
    pub tags: Vec<String>,
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
    pub taste: TasteVector,
}
