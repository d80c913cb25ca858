//! Marquee Engine library.
//!
//! This crate contains all server-side code for the screen management backend.
//!
//! ## Structure
//!
//! - `use_cases/` - Operations over the repository ports
//! - `infrastructure/` - Port traits and their adapters (in-memory, SQLite)
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment-driven configuration

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
