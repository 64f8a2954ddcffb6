use glam::Vec2;

use crate::assets::sprites::SpriteId;
use crate::math::grid::{snap_to_grid, TILE_WIDTH};
use crate::math::rng::Rng;

/// The fixed category of an entity. Immutable after construction; rendering
/// and setup dispatch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    Rock,
    Tree,
    Player,
}

/// A unit in the world. Position is mutable every frame for the player and
/// fixed after spawn for the static archetypes.
#[derive(Debug, Clone)]
pub struct Entity {
    pub archetype: Archetype,
    /// World-space position. By convention this is the sprite's feet.
    pub pos: Vec2,
    pub sprite: SpriteId,
}

impl Entity {
    /// The player, standing at the origin.
    pub fn player() -> Self {
        Self {
            archetype: Archetype::Player,
            pos: Vec2::ZERO,
            sprite: SpriteId::Player,
        }
    }

    /// A rock scattered uniformly within `[-extent, extent]²` and aligned to
    /// the tile grid.
    pub fn rock(rng: &mut Rng, extent: f32) -> Self {
        let pos = scatter(rng, extent);
        log::debug!("rock spawned at {:.1}, {:.1}", pos.x, pos.y);
        Self {
            archetype: Archetype::Rock,
            pos,
            sprite: SpriteId::Rock,
        }
    }

    /// A tree scattered uniformly within `[-extent, extent]²` and aligned to
    /// the tile grid.
    pub fn tree(rng: &mut Rng, extent: f32) -> Self {
        Self {
            archetype: Archetype::Tree,
            pos: scatter(rng, extent),
            sprite: SpriteId::Tree,
        }
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }
}

/// Random spawn position, snapped to the grid and dropped half a tile so the
/// sprite's visual base sits on the tile line instead of the tile center.
fn scatter(rng: &mut Rng, extent: f32) -> Vec2 {
    let raw = Vec2::new(
        rng.range_f32(-extent, extent),
        rng.range_f32(-extent, extent),
    );
    let mut pos = snap_to_grid(raw);
    pos.y -= TILE_WIDTH * 0.5;
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_starts_at_origin() {
        let en = Entity::player();
        assert_eq!(en.archetype, Archetype::Player);
        assert_eq!(en.sprite, SpriteId::Player);
        assert_eq!(en.pos, Vec2::ZERO);
    }

    #[test]
    fn scattered_archetypes_are_grid_aligned() {
        let mut rng = Rng::new(7);
        for _ in 0..50 {
            let rock = Entity::rock(&mut rng, 200.0);
            let tree = Entity::tree(&mut rng, 200.0);
            for en in [rock, tree] {
                // X sits on a tile-center line (8k - 4), Y on a tile edge.
                assert_eq!((en.pos.x + TILE_WIDTH * 0.5).rem_euclid(TILE_WIDTH), 0.0);
                assert_eq!(en.pos.y.rem_euclid(TILE_WIDTH), 0.0);
                assert!(en.pos.x.abs() <= 200.0 + TILE_WIDTH);
                assert!(en.pos.y.abs() <= 200.0 + TILE_WIDTH);
            }
        }
    }

    #[test]
    fn archetypes_carry_matching_sprites() {
        let mut rng = Rng::new(1);
        assert_eq!(Entity::rock(&mut rng, 10.0).sprite, SpriteId::Rock);
        assert_eq!(Entity::tree(&mut rng, 10.0).sprite, SpriteId::Tree);
    }
}
