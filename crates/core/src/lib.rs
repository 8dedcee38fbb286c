pub mod entity;
pub mod error;
pub mod event;
pub mod state;

pub use entity::{parse_number, EntityState, StateLookup, StateTable};
pub use error::{CardError, Result};
pub use event::Message;
pub use state::{
    CapacityAttributes, CapacitySource, DerivedMetrics, DisplayMode, ReadingSnapshot, Severity,
};
