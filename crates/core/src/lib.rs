//! `grpadmin-core` — identifier codec and payload container.
//!
//! This crate is **pure data**: no IO, no logging, no knowledge of commands.

pub mod error;
pub mod id;
pub mod payload;

pub use error::{IdError, IdResult};
pub use id::Id;
pub use payload::{Payload, value_kind};
