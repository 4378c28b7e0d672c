//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching backend requests/responses
//! - `convert.rs` — `From` conversions from wire types
//! - `state.rs` — State containers with update methods
//! - `client.rs` — Sub-client driving the backend for that domain

pub mod order;
pub mod submission;
pub mod vendor;
