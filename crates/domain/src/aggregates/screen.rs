//! Screen aggregate - a theater screen with its seats
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: state is reached through accessors only
//! - **Newtypes**: `ScreenId`, `ScreenName` and `Seat`
//! - **Valid by construction**: `new()` takes a pre-validated `ScreenName`
//! - **Builder pattern**: fluent API for the optional parts
//!
//! The serialized form is the document stored by repositories and returned
//! over HTTP: `{"id", "screenName", "seats", "seatBooked"}`.

use serde::{Deserialize, Serialize};

use crate::ids::ScreenId;
use crate::value_objects::{ScreenName, Seat};

/// A cinema screen
///
/// # Invariants
///
/// - `id` is always present; a fresh one is generated on construction
/// - `name` is 3..=20 characters after trimming (enforced by `ScreenName`)
/// - `seats` is never null; it starts empty and keeps insertion order
/// - `booked` is a whole-screen flag with no relation to `seats`
///
/// # Example
///
/// ```
/// use marquee_domain::{Screen, Seat};
/// use marquee_domain::value_objects::ScreenName;
///
/// let name = ScreenName::new("Screen 1").unwrap();
/// let screen = Screen::new(name).with_seats(vec![Seat::from("A1")]);
///
/// assert_eq!(screen.name().as_str(), "Screen 1");
/// assert_eq!(screen.seats().len(), 1);
/// assert!(!screen.is_booked());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    id: ScreenId,
    #[serde(rename = "screenName")]
    name: ScreenName,
    #[serde(default)]
    seats: Vec<Seat>,
    #[serde(rename = "seatBooked", default)]
    booked: bool,
}

impl Screen {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create an unbooked screen with no seats and a freshly generated id.
    pub fn new(name: ScreenName) -> Self {
        Self {
            id: ScreenId::new(),
            name,
            seats: Vec::new(),
            booked: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> ScreenId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &ScreenName {
        &self.name
    }

    /// Returns the seats as a read-only view; callers cannot mutate the
    /// screen through it.
    #[inline]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    #[inline]
    pub fn is_booked(&self) -> bool {
        self.booked
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Replace the identifier. No uniqueness check happens here; that is up
    /// to the repository.
    pub fn set_id(&mut self, id: ScreenId) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: ScreenName) {
        self.name = name;
    }

    pub fn set_seats(&mut self, seats: Vec<Seat>) {
        self.seats = seats;
    }

    pub fn set_booked(&mut self, booked: bool) {
        self.booked = booked;
    }

    // =========================================================================
    // Builder Methods (for construction)
    // =========================================================================

    /// Set the screen's ID (used when loading from storage).
    pub fn with_id(mut self, id: ScreenId) -> Self {
        self.id = id;
        self
    }

    pub fn with_seats(mut self, seats: Vec<Seat>) -> Self {
        self.seats = seats;
        self
    }

    pub fn with_booked(mut self, booked: bool) -> Self {
        self.booked = booked;
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn screen(name: &str) -> Screen {
        Screen::new(ScreenName::new(name).unwrap())
    }

    #[test]
    fn new_screen_has_defaults() {
        let screen = screen("Screen 1");
        assert!(screen.seats().is_empty());
        assert!(!screen.is_booked());
        assert_eq!(screen.id().to_hex().len(), 24);
    }

    #[test]
    fn set_id_replaces_unconditionally() {
        let mut screen = screen("Screen 1");
        let other = ScreenId::new();
        screen.set_id(other);
        assert_eq!(screen.id(), other);

        // the same id may be assigned twice; uniqueness is not checked here
        screen.set_id(other);
        assert_eq!(screen.id(), other);
    }

    #[test]
    fn seats_view_is_detached_from_callers_copy() {
        let mut screen = screen("Screen 1").with_seats(vec![Seat::from("A1")]);

        let mut copy = screen.seats().to_vec();
        copy.push(Seat::from("A2"));
        assert_eq!(screen.seats().len(), 1);

        screen.set_seats(copy);
        assert_eq!(screen.seats().len(), 2);
    }

    #[test]
    fn seats_keep_order_and_duplicates() {
        let seats = vec![Seat::from("A1"), Seat::from("A1"), Seat::from("B7")];
        let screen = screen("Screen 1").with_seats(seats.clone());
        assert_eq!(screen.seats(), seats.as_slice());
    }

    #[test]
    fn large_seat_lists_are_not_capped() {
        let seats: Vec<Seat> = (0..10_000).map(|n| Seat::new(n)).collect();
        let screen = screen("Screen 1").with_seats(seats);
        assert_eq!(screen.seats().len(), 10_000);
    }

    #[test]
    fn booked_flag_is_independent_of_seats() {
        let mut screen = screen("Screen 1");
        screen.set_booked(true);
        assert!(screen.is_booked());
        assert!(screen.seats().is_empty());

        screen.set_booked(false);
        assert!(!screen.is_booked());
    }

    #[test]
    fn set_name_updates_name() {
        let mut screen = screen("ScreenOne");
        screen.set_name(ScreenName::new("UpdatedScreenOne").unwrap());
        assert_eq!(screen.name().as_str(), "UpdatedScreenOne");
    }

    #[test]
    fn document_uses_wire_field_names() {
        let id = ScreenId::parse("65f1a2b3c4d5e6f708192a3b").unwrap();
        let screen = screen("Screen 1")
            .with_id(id)
            .with_seats(vec![Seat::from("A1")])
            .with_booked(true);

        let value = serde_json::to_value(&screen).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "65f1a2b3c4d5e6f708192a3b",
                "screenName": "Screen 1",
                "seats": ["A1"],
                "seatBooked": true
            })
        );

        let back: Screen = serde_json::from_value(value).unwrap();
        assert_eq!(back, screen);
    }

    #[test]
    fn document_with_invalid_name_is_rejected() {
        let result = serde_json::from_value::<Screen>(json!({
            "id": "65f1a2b3c4d5e6f708192a3b",
            "screenName": "x",
        }));
        assert!(result.is_err());
    }
}
