//! Use-case services orchestrating store and layout.
//!
//! # Responsibility
//! - Provide stable entry points for hosting code: add/delete entries and
//!   produce laid-out views.
//!
//! # Invariants
//! - Services never bypass store validation/persistence contracts.
//! - Layout stays a pure function; services only feed it loaded data.

pub mod calendar_service;
