//! Entity-state data source for the battery card.

pub mod client;
pub mod monitor;
pub mod states;

pub use client::StatesFile;
pub use monitor::spawn_refresh;
pub use states::parse_states;
