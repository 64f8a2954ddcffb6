//! Tile grid conversions.
//!
//! The world is carved into square tiles of [`TILE_WIDTH`] world units.
//! Tile coordinates are derived from world positions on demand, never stored.
//! `tile_to_world` is deliberately not the inverse of `world_to_tile`: it
//! re-centers, so a tile's world anchor is its center-aligned origin rather
//! than its corner.

use glam::Vec2;

/// Edge length of a grid tile in world units.
pub const TILE_WIDTH: f32 = 8.0;

/// World position to the index of the tile containing it.
/// Uses floor, not truncation, so negative positions land in the right tile
/// (`-1.0` is inside tile `-1`, not tile `0`).
#[inline]
pub fn world_to_tile(world: f32) -> i32 {
    (world / TILE_WIDTH).floor() as i32
}

/// Tile index to its center-aligned world anchor.
#[inline]
pub fn tile_to_world(tile: i32) -> f32 {
    tile as f32 * TILE_WIDTH - TILE_WIDTH * 0.5
}

/// Snap a world position onto the tile-center grid, per axis.
#[inline]
pub fn snap_to_grid(v: Vec2) -> Vec2 {
    Vec2::new(
        tile_to_world(world_to_tile(v.x)),
        tile_to_world(world_to_tile(v.y)),
    )
}

/// Checkerboard parity rule for grid rendering: a tile is shaded when
/// `(x + (y even)) % 2 == 0`. Matches truncated remainder on negatives.
#[inline]
pub fn checker(x: i32, y: i32) -> bool {
    (x + (y % 2 == 0) as i32) % 2 == 0
}

/// Integer tile coordinates derived from a world position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    pub fn from_world(world: Vec2) -> Self {
        Self {
            x: world_to_tile(world.x),
            y: world_to_tile(world.y),
        }
    }

    /// World position of this tile's corner (for grid cell rendering).
    pub fn corner(self) -> Vec2 {
        Vec2::new(self.x as f32 * TILE_WIDTH, self.y as f32 * TILE_WIDTH)
    }
}
