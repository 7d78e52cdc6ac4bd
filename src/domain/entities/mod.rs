//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`User`] - A stored user record with a store-assigned id
//! - [`NewUser`] - Input for saving a user, with an optional id for upserts

pub mod user;

pub use user::{NewUser, User};
