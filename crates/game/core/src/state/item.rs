//! Items: equipment, consumables, and quest pieces.

use strum::{Display, EnumString};

use crate::config::GameConfig;
use crate::geom::{Point, Rect};
use crate::rng::Dice;

/// Everything an item can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Head,
    Weapon,
    Chest,
    Gloves,
    Boots,
    HealthCake,
    QuestItemMap,
    QuestItemKey,
    QuestItemCrystal,
}

impl ItemKind {
    /// Mannequin slot this kind equips into, as (row, col) of the
    /// inventory grid. `None` for consumables and quest pieces.
    pub fn equip_slot(self) -> Option<(usize, usize)> {
        match self {
            Self::Head => Some((0, 1)),
            Self::Weapon => Some((1, 0)),
            Self::Chest => Some((1, 1)),
            Self::Gloves => Some((1, 2)),
            Self::Boots => Some((2, 1)),
            Self::HealthCake | Self::QuestItemMap | Self::QuestItemKey | Self::QuestItemCrystal => {
                None
            }
        }
    }

    pub fn is_quest(self) -> bool {
        matches!(
            self,
            Self::QuestItemMap | Self::QuestItemKey | Self::QuestItemCrystal
        )
    }

    /// The three kinds the endgame dialog checks for.
    pub const QUEST_KINDS: [ItemKind; 3] = [
        Self::QuestItemMap,
        Self::QuestItemKey,
        Self::QuestItemCrystal,
    ];
}

/// Rarity tier of a random drop. Governs the bonus ranges at creation;
/// purely cosmetic afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemQuality {
    #[default]
    Green,
    Blue,
    Purple,
}

/// Where an item currently lives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemState {
    Equipped,
    Inventory,
    #[default]
    Dropped,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub kind: ItemKind,
    pub quality: ItemQuality,
    pub state: ItemState,
    /// World position while dropped; stale once looted.
    pub position: Point,
    pub damage_bonus: i32,
    pub block_bonus: i32,
    pub crit_bonus: i32,
}

impl Item {
    /// A scenario-placed item with no stat bonuses (consumables, quest
    /// pieces).
    pub fn fixed(position: Point, kind: ItemKind) -> Self {
        Self {
            kind,
            quality: ItemQuality::default(),
            state: ItemState::Dropped,
            position,
            damage_bonus: 0,
            block_bonus: 0,
            crit_bonus: 0,
        }
    }

    /// Rolls a random equipment drop at `position`, with a small
    /// position jitter so stacked corpses don't stack their loot.
    pub fn random_drop(position: Point, rng: &mut dyn Dice) -> Self {
        let kind = match rng.roll(0, 5) {
            0 => ItemKind::Boots,
            1 => ItemKind::Chest,
            2 => ItemKind::Gloves,
            3 => ItemKind::Head,
            _ => ItemKind::Weapon,
        };

        let (quality, damage_bonus, block_bonus, crit_bonus) = match rng.roll(0, 101) {
            q if q <= 55 => (ItemQuality::Green, rng.roll(2, 5), 1, 0),
            q if q <= 90 => (
                ItemQuality::Blue,
                rng.roll(2, 10),
                rng.roll(2, 5),
                rng.roll(0, 3),
            ),
            _ => (
                ItemQuality::Purple,
                rng.roll(5, 10),
                rng.roll(6, 8),
                rng.roll(3, 5),
            ),
        };

        let (jit_lo, jit_hi) = GameConfig::DROP_JITTER;
        let mut position = position;
        position.y += rng.roll(jit_lo, jit_hi);
        position.x += rng.roll(jit_lo, jit_hi);

        Self {
            kind,
            quality,
            state: ItemState::Dropped,
            position,
            damage_bonus,
            block_bonus,
            crit_bonus,
        }
    }

    /// Pickup hitbox, centered on the item's position.
    pub fn hitbox(&self) -> Rect {
        let half = GameConfig::ITEM_SIZE / 2;
        Rect::new(
            self.position.x - half,
            self.position.y - half,
            GameConfig::ITEM_SIZE,
            GameConfig::ITEM_SIZE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GameRng;

    #[test]
    fn random_drops_are_equipment_with_tiered_bonuses() {
        let mut rng = GameRng::new(99);
        for _ in 0..200 {
            let item = Item::random_drop(Point::new(100, 100), &mut rng);
            assert!(item.kind.equip_slot().is_some());
            assert_eq!(item.state, ItemState::Dropped);

            match item.quality {
                ItemQuality::Green => {
                    assert!((2..5).contains(&item.damage_bonus));
                    assert_eq!(item.block_bonus, 1);
                    assert_eq!(item.crit_bonus, 0);
                }
                ItemQuality::Blue => {
                    assert!((2..10).contains(&item.damage_bonus));
                    assert!((2..5).contains(&item.block_bonus));
                    assert!((0..3).contains(&item.crit_bonus));
                }
                ItemQuality::Purple => {
                    assert!((5..10).contains(&item.damage_bonus));
                    assert!((6..8).contains(&item.block_bonus));
                    assert!((3..5).contains(&item.crit_bonus));
                }
            }

            // Jitter pushes the drop away from the corpse on both axes.
            assert!((105..121).contains(&item.position.x));
            assert!((105..121).contains(&item.position.y));
        }
    }

    #[test]
    fn fixed_items_carry_no_bonuses() {
        let cake = Item::fixed(Point::new(10, 20), ItemKind::HealthCake);
        assert_eq!(cake.damage_bonus, 0);
        assert_eq!(cake.block_bonus, 0);
        assert_eq!(cake.crit_bonus, 0);
        assert!(cake.kind.equip_slot().is_none());
    }

    #[test]
    fn pickup_hitbox_is_centered() {
        let item = Item::fixed(Point::new(100, 100), ItemKind::QuestItemKey);
        assert_eq!(item.hitbox(), Rect::new(92, 92, 16, 16));
    }

    #[test]
    fn quest_kinds_are_not_equippable() {
        for kind in ItemKind::QUEST_KINDS {
            assert!(kind.is_quest());
            assert!(kind.equip_slot().is_none());
        }
    }
}
