//! The player's inventory grid.
//!
//! A 3x6 grid: the left three columns form the equipment mannequin
//! (head, weapon, chest, gloves, boots, arranged around the center),
//! the right three columns are storage. The four mannequin corners are
//! dead cells the cursor refuses to enter.

use crate::combat::CombatStats;
use crate::config::GameConfig;
use crate::state::item::{Item, ItemKind, ItemState};

const ROWS: usize = GameConfig::INV_ROWS;
const COLS: usize = GameConfig::INV_COLS;

#[derive(Clone, Debug, PartialEq)]
pub struct Inventory {
    slots: [[Option<Item>; COLS]; ROWS],
    cursor_row: usize,
    cursor_col: usize,
    /// The character sheet is open on screen.
    pub open: bool,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            slots: Default::default(),
            cursor_row: 0,
            cursor_col: GameConfig::INV_STORAGE_COL,
            open: false,
        }
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    pub fn slot(&self, row: usize, col: usize) -> Option<&Item> {
        self.slots.get(row)?.get(col)?.as_ref()
    }

    /// Places an item directly into a slot. Used when restoring a
    /// saved game; no stat bookkeeping happens here.
    pub fn insert_at(&mut self, row: usize, col: usize, item: Item) {
        if row < ROWS && col < COLS {
            self.slots[row][col] = Some(item);
        }
    }

    /// All occupied slots, row-major.
    pub fn iter_slots(&self) -> impl Iterator<Item = (usize, usize, &Item)> {
        self.slots.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, slot)| slot.as_ref().map(|item| (r, c, item)))
        })
    }

    // ------------------------------------------------------------------------
    // Cursor movement
    // ------------------------------------------------------------------------
    //
    // The setters take the raw target index so the dead-cell guard sees
    // out-of-range values too: stepping right off column 5 on a corner
    // row is refused outright instead of wrapping into a dead cell.

    pub fn cursor_left(&mut self) {
        self.set_col(self.cursor_col as i32 - 1);
    }

    pub fn cursor_right(&mut self) {
        self.set_col(self.cursor_col as i32 + 1);
    }

    pub fn cursor_up(&mut self) {
        self.set_row(self.cursor_row as i32 - 1);
    }

    pub fn cursor_down(&mut self) {
        self.set_row(self.cursor_row as i32 + 1);
    }

    fn set_col(&mut self, value: i32) {
        if (value == 0 || value == 2 || value == 6)
            && (self.cursor_row == 0 || self.cursor_row == 2)
        {
            return;
        }

        if value == self.cursor_col as i32 + 1 {
            self.cursor_col = if self.cursor_col != COLS - 1 {
                value as usize
            } else {
                0
            };
        } else {
            self.cursor_col = if self.cursor_col != 0 {
                value as usize
            } else {
                COLS - 1
            };
        }
    }

    fn set_row(&mut self, value: i32) {
        if (value == 0 || value == 2) && (self.cursor_col == 0 || self.cursor_col == 2) {
            return;
        }

        if value == self.cursor_row as i32 + 1 {
            self.cursor_row = if self.cursor_row != ROWS - 1 {
                value as usize
            } else {
                0
            };
        } else {
            self.cursor_row = if self.cursor_row != 0 {
                value as usize
            } else {
                ROWS - 1
            };
        }
    }

    // ------------------------------------------------------------------------
    // Loot and use
    // ------------------------------------------------------------------------

    /// Stores an item in the first free storage slot, row-major.
    ///
    /// Returns the item back when every storage slot is taken.
    pub fn loot(&mut self, mut item: Item) -> Result<(), Item> {
        for row in 0..ROWS {
            for col in GameConfig::INV_STORAGE_COL..COLS {
                if self.slots[row][col].is_none() {
                    item.state = ItemState::Inventory;
                    self.slots[row][col] = Some(item);
                    return Ok(());
                }
            }
        }
        Err(item)
    }

    /// Whether any storage slot holds an item of `kind`.
    pub fn contains_kind(&self, kind: ItemKind) -> bool {
        (0..ROWS).any(|row| {
            (GameConfig::INV_STORAGE_COL..COLS)
                .any(|col| self.slots[row][col].as_ref().is_some_and(|i| i.kind == kind))
        })
    }

    /// Acts on the item under the cursor.
    ///
    /// Stored equipment moves to its mannequin slot if that slot is
    /// free and its bonuses apply to `stats`. A consumable heals and is
    /// spent. An equipped item under the cursor is unequipped: bonuses
    /// come off and it returns to storage if there is room, otherwise
    /// it is gone. Quest pieces ignore use entirely.
    pub fn use_selected(&mut self, stats: &mut CombatStats, health: &mut i32) {
        let (row, col) = (self.cursor_row, self.cursor_col);
        let Some(selected) = self.slots[row][col].as_ref() else {
            return;
        };

        if selected.state != ItemState::Inventory {
            self.unequip_selected(stats);
            return;
        }

        match selected.kind.equip_slot() {
            Some((er, ec)) if self.slots[er][ec].is_none() => {
                if let Some(mut item) = self.slots[row][col].take() {
                    item.state = ItemState::Equipped;
                    stats.damage += item.damage_bonus;
                    stats.block += item.block_bonus;
                    stats.crit += item.crit_bonus;
                    self.slots[er][ec] = Some(item);
                }
            }
            // Mannequin slot occupied: the selected copy is discarded.
            Some(_) => self.unequip_selected(stats),
            None => {
                if selected.kind == ItemKind::HealthCake {
                    *health = (*health + GameConfig::HEAL_AMOUNT).min(GameConfig::MAX_HEALTH);
                    self.unequip_selected(stats);
                }
            }
        }
    }

    /// Clears the cursor slot. If the item there was equipped, its
    /// bonuses come off and it goes back to storage when room allows.
    fn unequip_selected(&mut self, stats: &mut CombatStats) {
        if let Some(item) = self.slots[self.cursor_row][self.cursor_col].take()
            && item.state == ItemState::Equipped
        {
            stats.damage -= item.damage_bonus;
            stats.block -= item.block_bonus;
            stats.crit -= item.crit_bonus;
            let _ = self.loot(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;
    use crate::state::item::ItemQuality;

    fn gear(kind: ItemKind, damage: i32, block: i32, crit: i32) -> Item {
        Item {
            kind,
            quality: ItemQuality::Blue,
            state: ItemState::Dropped,
            position: Point::ORIGIN,
            damage_bonus: damage,
            block_bonus: block,
            crit_bonus: crit,
        }
    }

    #[test]
    fn cursor_starts_on_first_storage_slot() {
        assert_eq!(Inventory::new().cursor(), (0, 3));
    }

    #[test]
    fn cursor_skips_dead_corner_cells() {
        let mut inv = Inventory::new();
        // (0,3) -> left would land on the dead (0,2): refused.
        inv.cursor_left();
        assert_eq!(inv.cursor(), (0, 3));

        // Drop to the middle row, where every column is reachable.
        inv.cursor_down();
        inv.cursor_left();
        inv.cursor_left();
        inv.cursor_left();
        assert_eq!(inv.cursor(), (1, 0));

        // Up from (1,0) would land on the dead (0,0): refused.
        inv.cursor_up();
        assert_eq!(inv.cursor(), (1, 0));
    }

    #[test]
    fn cursor_wraps_on_the_middle_row_only() {
        let mut inv = Inventory::new();
        inv.cursor_down();
        inv.cursor_left();
        inv.cursor_left();
        inv.cursor_left();
        assert_eq!(inv.cursor(), (1, 0));
        inv.cursor_left();
        assert_eq!(inv.cursor(), (1, 5));
        inv.cursor_right();
        assert_eq!(inv.cursor(), (1, 0));

        // On the top row the wrap target is a dead cell, so the cursor
        // pins at the edges instead.
        let mut inv = Inventory::new();
        inv.cursor_right();
        inv.cursor_right();
        assert_eq!(inv.cursor(), (0, 5));
        inv.cursor_right();
        assert_eq!(inv.cursor(), (0, 5));
    }

    #[test]
    fn loot_fills_storage_row_major_and_reports_full() {
        let mut inv = Inventory::new();
        for _ in 0..9 {
            assert!(inv.loot(gear(ItemKind::Boots, 2, 1, 0)).is_ok());
        }
        assert_eq!(inv.slot(0, 3).map(|i| i.state), Some(ItemState::Inventory));
        assert!(inv.slot(2, 5).is_some());

        let overflow = inv.loot(gear(ItemKind::Head, 2, 1, 0));
        assert_eq!(overflow.unwrap_err().kind, ItemKind::Head);
    }

    #[test]
    fn equipping_adds_bonuses_and_moves_the_item() {
        let mut inv = Inventory::new();
        let mut stats = CombatStats::default();
        let mut health = 100;
        inv.loot(gear(ItemKind::Weapon, 5, 2, 1)).unwrap();

        // Cursor is already on (0,3) where the weapon landed.
        inv.use_selected(&mut stats, &mut health);

        assert!(inv.slot(0, 3).is_none());
        let equipped = inv.slot(1, 0).unwrap();
        assert_eq!(equipped.state, ItemState::Equipped);
        assert_eq!(stats.damage, GameConfig::BASE_DAMAGE + 5);
        assert_eq!(stats.block, GameConfig::BASE_BLOCK + 2);
        assert_eq!(stats.crit, GameConfig::BASE_CRIT + 1);
    }

    #[test]
    fn unequipping_removes_bonuses_and_restores_to_storage() {
        let mut inv = Inventory::new();
        let mut stats = CombatStats::default();
        let mut health = 100;
        inv.loot(gear(ItemKind::Weapon, 5, 2, 1)).unwrap();
        inv.use_selected(&mut stats, &mut health);

        // Walk the cursor to the weapon slot (1,0) and use it again.
        inv.cursor_down();
        inv.cursor_left();
        inv.cursor_left();
        inv.cursor_left();
        assert_eq!(inv.cursor(), (1, 0));
        inv.use_selected(&mut stats, &mut health);

        assert!(inv.slot(1, 0).is_none());
        assert_eq!(inv.slot(0, 3).map(|i| i.state), Some(ItemState::Inventory));
        assert_eq!(stats, CombatStats::default());
    }

    #[test]
    fn second_copy_into_an_occupied_slot_is_discarded() {
        let mut inv = Inventory::new();
        let mut stats = CombatStats::default();
        let mut health = 100;
        inv.loot(gear(ItemKind::Head, 3, 1, 0)).unwrap();
        inv.use_selected(&mut stats, &mut health);

        inv.loot(gear(ItemKind::Head, 9, 9, 9)).unwrap();
        inv.use_selected(&mut stats, &mut health);

        // First copy stays equipped, second is gone, stats unchanged.
        assert_eq!(inv.slot(0, 1).map(|i| i.damage_bonus), Some(3));
        assert!(inv.slot(0, 3).is_none());
        assert_eq!(stats.damage, GameConfig::BASE_DAMAGE + 3);
    }

    #[test]
    fn health_cake_heals_capped_and_is_consumed() {
        let mut inv = Inventory::new();
        let mut stats = CombatStats::default();
        let mut health = 50;
        inv.loot(Item::fixed(Point::ORIGIN, ItemKind::HealthCake))
            .unwrap();

        inv.use_selected(&mut stats, &mut health);
        assert_eq!(health, 70);
        assert!(inv.slot(0, 3).is_none());

        health = 95;
        inv.loot(Item::fixed(Point::ORIGIN, ItemKind::HealthCake))
            .unwrap();
        inv.use_selected(&mut stats, &mut health);
        assert_eq!(health, 100);
    }

    #[test]
    fn quest_pieces_ignore_use() {
        let mut inv = Inventory::new();
        let mut stats = CombatStats::default();
        let mut health = 100;
        inv.loot(Item::fixed(Point::ORIGIN, ItemKind::QuestItemMap))
            .unwrap();

        inv.use_selected(&mut stats, &mut health);
        assert!(inv.contains_kind(ItemKind::QuestItemMap));
        assert_eq!(stats, CombatStats::default());
    }
}
