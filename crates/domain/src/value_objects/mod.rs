//! Value objects - Immutable objects defined by their attributes

mod names;
mod seat;

pub use names::{ScreenName, MAX_SCREEN_NAME_LENGTH, MIN_SCREEN_NAME_LENGTH};
pub use seat::Seat;
