//! The overworld zone grid and its static content.

use crate::config::GameConfig;
use crate::geom::Point;
use crate::state::item::ItemKind;
use crate::state::obstacle::Obstacle;

/// Coordinates of a zone in the overworld grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneId {
    pub x: usize,
    pub y: usize,
}

impl ZoneId {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn start() -> Self {
        let (x, y) = GameConfig::START_ZONE;
        Self { x, y }
    }
}

/// Something placed fresh every time a zone loads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpawnKind {
    Enemy,
    Item(ItemKind),
}

/// A spawn point inside a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spawn {
    pub position: Point,
    pub kind: SpawnKind,
}

/// Static definition of one zone: its furniture and what spawns in it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneDef {
    pub obstacles: Vec<Obstacle>,
    pub spawns: Vec<Spawn>,
}

/// Read-only world data: every zone of the overworld grid. Built once
/// by a loader and only consulted afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scenario {
    zones: Vec<ZoneDef>,
}

impl Scenario {
    /// An all-empty overworld. Zones without a definition stay empty.
    pub fn empty() -> Self {
        Self {
            zones: vec![ZoneDef::default(); GameConfig::ZONES_X * GameConfig::ZONES_Y],
        }
    }

    pub fn set_zone(&mut self, id: ZoneId, def: ZoneDef) {
        if self.zones.is_empty() {
            *self = Self::empty();
        }
        if let Some(slot) = self.zones.get_mut(Self::index(id)) {
            *slot = def;
        }
    }

    pub fn zone(&self, id: ZoneId) -> &ZoneDef {
        static EMPTY: ZoneDef = ZoneDef {
            obstacles: Vec::new(),
            spawns: Vec::new(),
        };
        self.zones.get(Self::index(id)).unwrap_or(&EMPTY)
    }

    fn index(id: ZoneId) -> usize {
        id.y * GameConfig::ZONES_X + id.x
    }
}
