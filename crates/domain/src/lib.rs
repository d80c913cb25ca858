//! Marquee domain - the screen aggregate and the value objects it is built from.
//!
//! This crate has no I/O. Persistence and HTTP live in `marquee-engine`.

pub mod aggregates;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::Screen;
pub use error::DomainError;
pub use ids::ScreenId;
pub use value_objects::{ScreenName, Seat};
