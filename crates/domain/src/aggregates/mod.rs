//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate has a unique identity, owns its constituent parts, and
//! keeps its fields private behind accessors.

pub mod screen;

pub use screen::Screen;
