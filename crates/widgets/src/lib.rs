//! Presentation of battery estimates: formatting, severity, warnings and the
//! runtime card itself.

pub mod card;
pub mod format;
pub mod layout;
pub mod severity;
pub mod warnings;

pub use card::{CardView, RuntimeCard, CARD_SIZE};
pub use format::{format_charge_time, format_duration, format_power, format_runtime};
pub use layout::{CardLayout, Headline, StatTile};
pub use severity::classify_severity;
pub use warnings::{collect_warnings, Warning, WarningLevel};
