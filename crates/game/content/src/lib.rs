//! Static content and persistence for Thornvale.
//!
//! The loaders turn RON content files into the core's world data: the
//! [`thornvale_core::Scenario`] describing every zone, and the dialog
//! table its talkers draw their lines from. The save module round-trips
//! a running game through a plain text save file.

#[cfg(feature = "loaders")]
pub mod loaders;
pub mod save;

#[cfg(feature = "loaders")]
pub use loaders::{DialogLoader, DialogTable, LoadResult, ScenarioLoader};
pub use save::{SaveError, load_game, save_game};
