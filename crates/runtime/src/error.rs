//! Runtime-level errors.

/// Failures that keep a session from starting. Problems during play,
/// like an empty save slot, are reported in-game instead.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Content(#[from] anyhow::Error),
}
