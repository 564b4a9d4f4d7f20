//! Taste-profile core for the Kuchisabishii platform.
//!
//! The modules cover the palate data model, the radar-chart layout geometry
//! shared by the five-axis and full-palate charts, the review journal, and
//! friend-link tokens, behind safe typed interfaces.

pub mod journal;
pub mod prelude;
pub mod profile;
pub mod radar;
pub mod social;
pub mod telemetry;

pub use prelude::{ChartError, ChartFrame, ChartResult, Point, ValueScale};
