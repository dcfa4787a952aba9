//! Wire models shared by every layer of the portal.
//!
//! These types mirror the JSON exchanged with the garage REST backend. Decoding is
//! deliberately lenient: the backend is inconsistent about field names and envelopes,
//! so every field has a default and the French spellings are accepted as aliases.

pub mod api;
pub mod entity;
pub mod garage;
pub mod inventory;
pub mod shop;
pub mod stats;
pub mod user;
pub mod validation;
