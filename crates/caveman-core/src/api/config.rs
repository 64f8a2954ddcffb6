use crate::host::Color;

/// Window properties handed to the host at boot.
#[derive(Debug, Clone)]
pub struct WindowDesc {
    pub title: String,
    /// Client size in pixels.
    pub width: u32,
    pub height: u32,
    /// Desktop position of the top-left corner.
    pub x: i32,
    pub y: i32,
    /// Background color the host clears to each frame.
    pub clear_color: Color,
}

impl Default for WindowDesc {
    fn default() -> Self {
        Self {
            title: String::from("untitled"),
            width: 1280,
            height: 720,
            x: 0,
            y: 0,
            clear_color: Color::rgba(0.0, 0.0, 0.0, 1.0),
        }
    }
}

/// Configuration for a game session, provided at boot.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub window: WindowDesc,
    /// Player movement speed in world units per second.
    pub player_speed: f32,
    /// Camera zoom scale applied after the camera translation.
    pub camera_zoom: f32,
    /// Exponential rate at which the camera chases the player.
    pub camera_rate: f32,
    /// Rasterized font height for debug labels.
    pub font_height: u32,
    /// Number of rocks scattered at boot.
    pub rock_count: u32,
    /// Number of trees scattered at boot.
    pub tree_count: u32,
    /// Rocks and trees spawn uniformly in `[-spawn_extent, spawn_extent]²`.
    pub spawn_extent: f32,
    /// Tile-grid render radius around the player, in tiles.
    pub tile_radius_x: i32,
    pub tile_radius_y: i32,
    /// Seed for the spawn-position generator.
    pub rng_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowDesc::default(),
            player_speed: 50.0,
            camera_zoom: 0.1875,
            camera_rate: 10.0,
            font_height: 48,
            rock_count: 10,
            tree_count: 10,
            spawn_extent: 200.0,
            tile_radius_x: 40,
            tile_radius_y: 20,
            rng_seed: 42,
        }
    }
}
