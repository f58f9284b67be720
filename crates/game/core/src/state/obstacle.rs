//! Static zone furniture the player can collide with, walk through, or
//! talk to.

use crate::geom::Rect;
use crate::rng::Dice;
use crate::state::zone::ZoneId;

/// What colliding with an obstacle does.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObstacleKind {
    /// Solid scenery: pushes the player back out.
    Collision,
    /// Sends the player to another zone.
    Teleport {
        destination: ZoneId,
        /// Where the player reappears inside the destination zone.
        relocation: (i32, i32),
    },
    /// An interactable character with a pool of lines.
    Dialog {
        /// Lookup tag; also selects special interactions ("vendor",
        /// "guards").
        tag: String,
        /// Pre-wrapped lines this character can say.
        responses: Vec<String>,
    },
}

/// A static object occupying a rectangle of a zone.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub rect: Rect,
    pub kind: ObstacleKind,
    /// Line currently on display, as an index into the dialog's
    /// responses. Rolled fresh each time a dialog starts.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub active_response: Option<usize>,
}

impl Obstacle {
    pub fn new(rect: Rect, kind: ObstacleKind) -> Self {
        Self {
            rect,
            kind,
            active_response: None,
        }
    }

    pub fn is_dialog(&self) -> bool {
        matches!(self.kind, ObstacleKind::Dialog { .. })
    }

    /// Tag of a dialog obstacle, lowercase by construction.
    pub fn dialog_tag(&self) -> Option<&str> {
        match &self.kind {
            ObstacleKind::Dialog { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Picks a random line from the response pool.
    pub fn randomize_response(&mut self, rng: &mut dyn Dice) {
        if let ObstacleKind::Dialog { responses, .. } = &self.kind
            && !responses.is_empty()
        {
            self.active_response = Some(rng.index(responses.len()));
        }
    }

    /// The line currently on display, if a dialog is active.
    pub fn active_response(&self) -> Option<&str> {
        let ObstacleKind::Dialog { responses, .. } = &self.kind else {
            return None;
        };
        responses.get(self.active_response?).map(String::as_str)
    }
}
