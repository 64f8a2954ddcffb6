pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod host;
pub mod input;
pub mod math;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::{GameConfig, WindowDesc};
pub use api::types::EntityIndex;
pub use assets::manifest::{AssetManifest, FontDescriptor, SpriteDescriptor};
pub use assets::sprites::{Sprite, SpriteBank, SpriteId, SpriteLoadError};
pub use components::entity::{Archetype, Entity};
pub use core::arena::FrameArena;
pub use core::runner::{BootError, GameRunner};
pub use core::world::{World, MAX_ENTITIES};
pub use host::{AssetError, Color, FontHandle, Host, ImageHandle, Key};
pub use input::move_axis;
pub use math::approach::{almost_equals, approach, approach_vec2};
pub use math::bounds::Bounds;
pub use math::grid::{checker, snap_to_grid, tile_to_world, world_to_tile, TilePos, TILE_WIDTH};
pub use math::rng::Rng;
pub use renderer::camera::{screen_to_world, Camera};
