//! Runtime shell around the simulation core.
//!
//! This crate owns everything the pure core refuses to: the wall
//! clock, content files, the save slot, and raw input. Embedders build
//! a [`Session`] from loaded content, forward button edges into it,
//! call [`Session::tick`] from their frame timer, and render from the
//! state it exposes.

mod error;
pub mod input;
pub mod session;
pub mod telemetry;

pub use error::RuntimeError;
pub use input::Button;
pub use session::Session;
