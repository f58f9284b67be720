//! The overworld scenario: zone furniture and spawn points.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thornvale_core::{
    GameConfig, ItemKind, Obstacle, ObstacleKind, Point, Rect, Scenario, Spawn, SpawnKind, ZoneDef,
    ZoneId,
};

use super::dialog::DialogTable;
use super::{LoadResult, read_file};

#[derive(Debug, Serialize, Deserialize)]
struct ScenarioDataRon {
    zones: Vec<ZoneDataRon>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ZoneDataRon {
    x: usize,
    y: usize,
    #[serde(default)]
    obstacles: Vec<ObstacleDataRon>,
    #[serde(default)]
    spawns: Vec<SpawnDataRon>,
}

#[derive(Debug, Serialize, Deserialize)]
enum ObstacleDataRon {
    Collision {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    Teleport {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        destination: (usize, usize),
        relocation: (i32, i32),
    },
    Dialog {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        tag: String,
    },
}

#[derive(Debug, Serialize, Deserialize)]
enum SpawnDataRon {
    Enemy { x: i32, y: i32 },
    Item { x: i32, y: i32, kind: ItemKind },
}

/// Loads the overworld definition from a RON file, resolving dialog
/// tags against the loaded [`DialogTable`].
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path, dialogs: &DialogTable) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::from_ron(&content, dialogs)
    }

    pub fn from_ron(content: &str, dialogs: &DialogTable) -> LoadResult<Scenario> {
        let data: ScenarioDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario data: {}", e))?;

        let mut scenario = Scenario::empty();
        for zone in data.zones {
            if zone.x >= GameConfig::ZONES_X || zone.y >= GameConfig::ZONES_Y {
                return Err(anyhow::anyhow!(
                    "Zone ({}, {}) is outside the {}x{} overworld",
                    zone.x,
                    zone.y,
                    GameConfig::ZONES_X,
                    GameConfig::ZONES_Y
                ));
            }

            let def = ZoneDef {
                obstacles: zone
                    .obstacles
                    .into_iter()
                    .map(|o| build_obstacle(o, dialogs))
                    .collect(),
                spawns: zone.spawns.into_iter().map(build_spawn).collect(),
            };
            scenario.set_zone(ZoneId::new(zone.x, zone.y), def);
        }
        Ok(scenario)
    }
}

fn build_obstacle(data: ObstacleDataRon, dialogs: &DialogTable) -> Obstacle {
    match data {
        ObstacleDataRon::Collision {
            x,
            y,
            width,
            height,
        } => Obstacle::new(Rect::new(x, y, width, height), ObstacleKind::Collision),
        ObstacleDataRon::Teleport {
            x,
            y,
            width,
            height,
            destination,
            relocation,
        } => Obstacle::new(
            Rect::new(x, y, width, height),
            ObstacleKind::Teleport {
                destination: ZoneId::new(destination.0, destination.1),
                relocation,
            },
        ),
        ObstacleDataRon::Dialog {
            x,
            y,
            width,
            height,
            tag,
        } => {
            let tag = tag.to_lowercase();
            let responses = dialogs.responses(&tag).to_vec();
            Obstacle::new(
                Rect::new(x, y, width, height),
                ObstacleKind::Dialog { tag, responses },
            )
        }
    }
}

fn build_spawn(data: SpawnDataRon) -> Spawn {
    match data {
        SpawnDataRon::Enemy { x, y } => Spawn {
            position: Point::new(x, y),
            kind: SpawnKind::Enemy,
        },
        SpawnDataRon::Item { x, y, kind } => Spawn {
            position: Point::new(x, y),
            kind: SpawnKind::Item(kind),
        },
    }
}
