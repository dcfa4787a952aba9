//! JSON fixtures mirroring what the backend returns.
//!
//! - `user` - user records for each role, as returned by login and stored in the session
//! - `envelope` - the response envelopes list endpoints use

pub mod envelope;
pub mod user;
