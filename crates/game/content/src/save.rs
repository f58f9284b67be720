//! The saved-game codec.
//!
//! A save is a plain text file, one entity per line. Each line starts
//! with an element name followed by `key="value"` attributes:
//!
//! ```text
//! save version="1"
//! fields zoneX="0" zoneY="3" score="42" paused="false" debug="false"
//! player x="246" y="419" health="87" damage="12" block="6" crit="2" sheetOpen="false"
//! item row="0" col="3" kind="Weapon" quality="Blue" state="Inventory" ...
//! item kind="HealthCake" quality="Green" state="Dropped" x="120" y="340" ...
//! enemy x="300" y="200" health="40"
//! ```
//!
//! Items in the `Dropped` state lie in the world; any other state puts
//! them back into the inventory grid at (`row`, `col`). Restoring never
//! runs the zone's spawn points: the enemies and loot present at save
//! time are the only ones that come back, while the zone's furniture is
//! taken from the scenario as usual.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thornvale_core::{
    ActorState, Item, ItemState, Point, Scenario, SimulationState, ZoneId,
};

const VERSION: &str = "1";

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("cannot access save file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported save version `{0}`")]
    UnsupportedVersion(String),
    #[error("save line {line}: unknown element `{element}`")]
    UnknownElement { line: usize, element: String },
    #[error("save line {line}: missing attribute `{key}`")]
    MissingAttribute { line: usize, key: &'static str },
    #[error("save line {line}: malformed value `{value}` for `{key}`")]
    BadValue {
        line: usize,
        key: &'static str,
        value: String,
    },
}

impl SaveError {
    /// True when loading failed only because no save exists yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Writes the state to `path` in the save text format.
pub fn save_game(state: &SimulationState, path: &Path) -> Result<(), SaveError> {
    std::fs::write(path, encode(state)).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a save file back into a state. The scenario supplies the
/// restored zone's furniture.
pub fn load_game(path: &Path, scenario: &Scenario) -> Result<SimulationState, SaveError> {
    let text = std::fs::read_to_string(path).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&text, scenario)
}

/// Renders a state as save text.
pub fn encode(state: &SimulationState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "save version=\"{VERSION}\"");

    let _ = write!(
        out,
        "fields zoneX=\"{}\" zoneY=\"{}\" score=\"{}\" paused=\"{}\" debug=\"{}\"",
        state.zone.x, state.zone.y, state.score as i32, state.paused, state.debug
    );
    if let Some(overlay) = state.overlay {
        let _ = write!(out, " overlay=\"{overlay}\"");
    }
    out.push('\n');

    let p = &state.player;
    let _ = writeln!(
        out,
        "player x=\"{}\" y=\"{}\" health=\"{}\" damage=\"{}\" block=\"{}\" crit=\"{}\" sheetOpen=\"{}\"",
        p.position.x,
        p.position.y,
        p.health,
        p.stats.damage,
        p.stats.block,
        p.stats.crit,
        state.inventory.open
    );

    for (row, col, item) in state.inventory.iter_slots() {
        let _ = writeln!(out, "item row=\"{row}\" col=\"{col}\" {}", item_attrs(item));
    }
    for item in &state.items {
        let _ = writeln!(out, "item {}", item_attrs(item));
    }
    for enemy in &state.enemies {
        let _ = writeln!(
            out,
            "enemy x=\"{}\" y=\"{}\" health=\"{}\"",
            enemy.position.x, enemy.position.y, enemy.health
        );
    }
    out
}

fn item_attrs(item: &Item) -> String {
    format!(
        "kind=\"{}\" quality=\"{}\" state=\"{}\" x=\"{}\" y=\"{}\" \
         damageBonus=\"{}\" blockBonus=\"{}\" critBonus=\"{}\"",
        item.kind,
        item.quality,
        item.state,
        item.position.x,
        item.position.y,
        item.damage_bonus,
        item.block_bonus,
        item.crit_bonus
    )
}

/// Rebuilds a state from save text.
pub fn decode(text: &str, scenario: &Scenario) -> Result<SimulationState, SaveError> {
    let mut state = SimulationState::new(scenario);
    state.enemies.clear();
    state.items.clear();
    state.combat_texts.clear();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let (element, rest) = raw.split_once(' ').unwrap_or((raw, ""));
        let attrs = Attrs::parse(rest, line);

        match element {
            "save" => {
                let version: String = attrs.get("version")?;
                if version != VERSION {
                    return Err(SaveError::UnsupportedVersion(version));
                }
            }
            "fields" => {
                state.zone = ZoneId::new(attrs.get("zoneX")?, attrs.get("zoneY")?);
                state.score = attrs.get::<i32>("score")? as f32;
                state.paused = attrs.get("paused")?;
                state.debug = attrs.get("debug")?;
                state.overlay = if attrs.has("overlay") {
                    Some(attrs.get("overlay")?)
                } else {
                    None
                };
            }
            "player" => {
                state.player.position = Point::new(attrs.get("x")?, attrs.get("y")?);
                state.player.health = attrs.get("health")?;
                state.player.stats.damage = attrs.get("damage")?;
                state.player.stats.block = attrs.get("block")?;
                state.player.stats.crit = attrs.get("crit")?;
                state.inventory.open = attrs.get("sheetOpen")?;
            }
            "item" => {
                let item = Item {
                    kind: attrs.get("kind")?,
                    quality: attrs.get("quality")?,
                    state: attrs.get("state")?,
                    position: Point::new(attrs.get("x")?, attrs.get("y")?),
                    damage_bonus: attrs.get("damageBonus")?,
                    block_bonus: attrs.get("blockBonus")?,
                    crit_bonus: attrs.get("critBonus")?,
                };
                if item.state == ItemState::Dropped {
                    state.items.push(item);
                } else {
                    state
                        .inventory
                        .insert_at(attrs.get("row")?, attrs.get("col")?, item);
                }
            }
            "enemy" => {
                let mut enemy =
                    ActorState::new_enemy(Point::new(attrs.get("x")?, attrs.get("y")?));
                enemy.health = attrs.get("health")?;
                state.enemies.push(enemy);
            }
            other => {
                return Err(SaveError::UnknownElement {
                    line,
                    element: other.to_string(),
                });
            }
        }
    }

    state.obstacles = scenario.zone(state.zone).obstacles.clone();
    Ok(state)
}

/// The `key="value"` attributes of one save line.
struct Attrs<'a> {
    pairs: Vec<(&'a str, &'a str)>,
    line: usize,
}

impl<'a> Attrs<'a> {
    fn parse(text: &'a str, line: usize) -> Self {
        let pairs = text
            .split_whitespace()
            .filter_map(|token| {
                let (key, value) = token.split_once('=')?;
                Some((key, value.trim_matches('"')))
            })
            .collect();
        Self { pairs, line }
    }

    fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| *k == key)
    }

    fn get<T: FromStr>(&self, key: &'static str) -> Result<T, SaveError> {
        let value = self
            .pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .ok_or(SaveError::MissingAttribute {
                line: self.line,
                key,
            })?;
        value.parse().map_err(|_| SaveError::BadValue {
            line: self.line,
            key,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thornvale_core::{GameRng, ItemKind, Overlay};

    fn played_state(scenario: &Scenario) -> SimulationState {
        let mut state = SimulationState::new(scenario);
        state.paused = false;
        state.overlay = None;
        state.zone = ZoneId::new(1, 2);
        state.score = 42.7;
        state.debug = true;

        state.player.position = Point::new(120, 340);
        state.player.health = 67;
        state.player.stats.damage = 15;
        state.player.stats.block = 8;
        state.player.stats.crit = 4;

        // One stored item, one equipped, one lying in the world.
        let mut rng = GameRng::new(11);
        let mut health = state.player.health;
        state
            .inventory
            .loot(Item::random_drop(Point::new(50, 50), &mut rng))
            .unwrap();
        state
            .inventory
            .use_selected(&mut state.player.stats, &mut health);
        state
            .inventory
            .loot(Item::fixed(Point::ORIGIN, ItemKind::QuestItemMap))
            .unwrap();
        state
            .items
            .push(Item::random_drop(Point::new(400, 400), &mut rng));

        state.enemies.push(ActorState::new_enemy(Point::new(300, 200)));
        state.enemies[0].health = 40;
        state
    }

    #[test]
    fn a_played_game_round_trips() {
        let scenario = Scenario::empty();
        let state = played_state(&scenario);

        let restored = decode(&encode(&state), &scenario).unwrap();

        assert_eq!(restored.zone, state.zone);
        assert_eq!(restored.score, 42.0);
        assert!(!restored.paused);
        assert_eq!(restored.overlay, None);
        assert!(restored.debug);

        assert_eq!(restored.player.position, state.player.position);
        assert_eq!(restored.player.health, state.player.health);
        assert_eq!(restored.player.stats, state.player.stats);
        assert_eq!(restored.inventory, state.inventory);

        assert_eq!(restored.items, state.items);
        assert_eq!(restored.enemies.len(), 1);
        assert_eq!(restored.enemies[0].position, Point::new(300, 200));
        assert_eq!(restored.enemies[0].health, 40);
    }

    #[test]
    fn overlays_survive_the_trip() {
        let scenario = Scenario::empty();
        let mut state = SimulationState::new(&scenario);
        state.overlay = Some(Overlay::Finish);

        let restored = decode(&encode(&state), &scenario).unwrap();
        assert_eq!(restored.overlay, Some(Overlay::Finish));
    }

    #[test]
    fn restoring_skips_the_zones_spawn_points() {
        use thornvale_core::{Spawn, SpawnKind, ZoneDef};

        let mut scenario = Scenario::empty();
        scenario.set_zone(
            ZoneId::start(),
            ZoneDef {
                obstacles: Vec::new(),
                spawns: vec![Spawn {
                    position: Point::new(100, 100),
                    kind: SpawnKind::Enemy,
                }],
            },
        );

        // The player cleared this zone before saving.
        let mut state = SimulationState::new(&scenario);
        state.enemies.clear();

        let restored = decode(&encode(&state), &scenario).unwrap();
        assert!(restored.enemies.is_empty());
    }

    #[test]
    fn furniture_comes_from_the_scenario() {
        use thornvale_core::{Obstacle, ObstacleKind, Rect, ZoneDef};

        let mut scenario = Scenario::empty();
        scenario.set_zone(
            ZoneId::new(2, 1),
            ZoneDef {
                obstacles: vec![Obstacle::new(
                    Rect::new(5, 5, 10, 10),
                    ObstacleKind::Collision,
                )],
                spawns: Vec::new(),
            },
        );
        let mut state = SimulationState::new(&scenario);
        state.zone = ZoneId::new(2, 1);

        let restored = decode(&encode(&state), &scenario).unwrap();
        assert_eq!(restored.obstacles.len(), 1);
    }

    #[test]
    fn files_round_trip_and_absence_is_detectable() {
        let scenario = Scenario::empty();
        let state = played_state(&scenario);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.sav");

        let missing = load_game(&path, &scenario).unwrap_err();
        assert!(missing.is_not_found());

        save_game(&state, &path).unwrap();
        let restored = load_game(&path, &scenario).unwrap();
        assert_eq!(restored.player.health, 67);
    }

    #[test]
    fn malformed_saves_are_rejected() {
        let scenario = Scenario::empty();

        let err = decode("save version=\"9\"", &scenario).unwrap_err();
        assert!(matches!(err, SaveError::UnsupportedVersion(v) if v == "9"));

        let err = decode("wizard hat=\"pointy\"", &scenario).unwrap_err();
        assert!(matches!(err, SaveError::UnknownElement { line: 1, .. }));

        let err = decode("enemy x=\"1\" y=\"2\"", &scenario).unwrap_err();
        assert!(matches!(
            err,
            SaveError::MissingAttribute { key: "health", .. }
        ));

        let err = decode("enemy x=\"1\" y=\"2\" health=\"lots\"", &scenario).unwrap_err();
        assert!(matches!(err, SaveError::BadValue { key: "health", .. }));
    }
}
