//! Roster module — school records: classes and the students enrolled in them.
//!
//! # Resources
//!
//! - **Class** — a school class with a name and an optional description
//! - **Student** — a student enrolled in exactly one class
//!
//! # Usage
//!
//! ```ignore
//! use roster::service::RosterService;
//!
//! let svc = RosterService::new(sql)?;
//! let router = roster::api::build_router(svc); // routes at /classes, /students
//! ```

pub mod api;
pub mod model;
pub mod service;

pub use service::RosterService;
