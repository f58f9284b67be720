//! The button vocabulary embedders translate their raw input into.

/// One logical button. Embedders map whatever physical keys they like
/// onto these and forward the press and release edges to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    /// Attack in the world, use the selected item on the sheet.
    Action,
    /// Enter: overlays, restart, character sheet.
    Confirm,
}
