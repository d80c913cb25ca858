//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases take port traits directly and keep HTTP handlers thin.

pub mod management;

pub use management::ManagementUseCases;
