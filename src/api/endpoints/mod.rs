//! API endpoint handlers.
//!
//! Handlers unpack the request, call one `CoreState` operation and wrap
//! the result in the response envelope clients expect.

pub mod appointments;
pub mod auth;
pub mod catalog;
pub mod exams;
pub mod health;
pub mod stats;
