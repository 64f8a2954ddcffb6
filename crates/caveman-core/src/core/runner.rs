use glam::{Mat4, Vec2, Vec3};
use thiserror::Error;

use crate::api::config::GameConfig;
use crate::api::types::EntityIndex;
use crate::assets::manifest::AssetManifest;
use crate::assets::sprites::{SpriteBank, SpriteLoadError};
use crate::components::entity::Entity;
use crate::core::arena::FrameArena;
use crate::core::world::World;
use crate::host::{AssetError, Color, FontHandle, Host, Key};
use crate::input;
use crate::math::bounds::Bounds;
use crate::math::grid::{checker, TilePos, TILE_WIDTH};
use crate::math::rng::Rng;
use crate::renderer::camera::{screen_to_world, Camera};

/// Shade of the checkerboard grid cells.
const TILE_SHADE: Color = Color::rgba(0.1, 0.1, 0.1, 0.1);
/// Hover highlight alpha when the mouse is outside an entity's bounds.
const IDLE_HIGHLIGHT_ALPHA: f32 = 0.4;
/// Scale of the per-entity debug label.
const LABEL_SCALE: f32 = 0.1;

/// Startup failed before the first frame. Both conditions are fatal: the
/// caller reports the diagnostic and exits.
#[derive(Debug, Error)]
pub enum BootError {
    #[error("failed to load font")]
    Font(#[source] AssetError),
    #[error(transparent)]
    Sprites(#[from] SpriteLoadError),
}

/// Owns the session state and drives one frame per [`GameRunner::step`].
///
/// All mutation happens here, single-threaded: the runner reads input and
/// time from the host, advances the world, and issues draw calls back to the
/// host. Nothing is global.
pub struct GameRunner {
    config: GameConfig,
    world: World,
    player: EntityIndex,
    sprites: SpriteBank,
    font: FontHandle,
    camera: Camera,
    arena: FrameArena,
    last_time: f64,
}

impl GameRunner {
    /// Open the window, load the assets, and populate the world.
    pub fn boot<H: Host + ?Sized>(
        host: &mut H,
        config: GameConfig,
        manifest: &AssetManifest,
    ) -> Result<Self, BootError> {
        host.open_window(&config.window);

        let font = host.load_font(&manifest.font.path).map_err(BootError::Font)?;
        let sprites = SpriteBank::load(host, manifest)?;

        let mut world = World::new();
        let mut rng = Rng::new(config.rng_seed);
        let player = world.spawn(Entity::player());
        for _ in 0..config.rock_count {
            world.spawn(Entity::rock(&mut rng, config.spawn_extent));
        }
        for _ in 0..config.tree_count {
            world.spawn(Entity::tree(&mut rng, config.spawn_extent));
        }
        log::info!(
            "world ready: {} entities ({} rocks, {} trees)",
            world.len(),
            config.rock_count,
            config.tree_count
        );

        let camera = Camera::new(config.camera_zoom, config.camera_rate);
        let last_time = host.elapsed_seconds();

        Ok(Self {
            config,
            world,
            player,
            sprites,
            font,
            camera,
            arena: FrameArena::new(),
            last_time,
        })
    }

    /// Drive frames until the host reports a close request.
    pub fn run<H: Host + ?Sized>(&mut self, host: &mut H) {
        while !host.should_close() {
            self.step(host);
            host.present();
        }
    }

    /// One frame: sample time and input, advance the world, draw.
    pub fn step<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.arena.reset();

        if host.key_just_pressed(Key::Escape) {
            host.request_close();
        }
        host.poll();

        let now = host.elapsed_seconds();
        let delta = (now - self.last_time) as f32;
        if now as i64 != self.last_time as i64 {
            log::debug!("{:.2} FPS ({:.2}ms)", 1.0 / delta, delta * 1000.0);
        }
        self.last_time = now;

        self.advance(host, delta);
    }

    fn advance<H: Host + ?Sized>(&mut self, host: &mut H, delta: f32) {
        let Some(player_pos) = self.world.get(self.player).map(|en| en.pos) else {
            return;
        };

        // Chase the player, then install this frame's transform before the
        // mouse is read back through it.
        self.camera.follow(player_pos, delta);
        let view = self.camera.view_matrix();
        host.set_camera_transform(view);

        let mouse_world = screen_to_world(
            host.mouse_position(),
            host.projection(),
            view,
            host.viewport_size(),
        );
        let mouse_tile = TilePos::from_world(mouse_world);

        // Hover highlights.
        for (_, en) in self.world.iter() {
            let sprite = self.sprites.get(en.sprite);
            let bounds = Bounds::bottom_center(sprite.size).shift(en.pos);
            let alpha = if bounds.contains(mouse_world) {
                1.0
            } else {
                IDLE_HIGHLIGHT_ALPHA
            };
            host.draw_rect(bounds.min, bounds.size(), Color::GREEN.with_alpha(alpha));
        }

        // Checkerboard grid around the player, hovered tile on top.
        let player_tile = TilePos::from_world(player_pos);
        for x in (player_tile.x - self.config.tile_radius_x)
            ..(player_tile.x + self.config.tile_radius_x)
        {
            for y in (player_tile.y - self.config.tile_radius_y)
                ..(player_tile.y + self.config.tile_radius_y)
            {
                if checker(x, y) {
                    host.draw_rect(TilePos { x, y }.corner(), Vec2::splat(TILE_WIDTH), TILE_SHADE);
                }
            }
        }
        host.draw_rect(mouse_tile.corner(), Vec2::splat(TILE_WIDTH), Color::RED);

        // Sprites and their debug labels.
        for (_, en) in self.world.iter() {
            let sprite = self.sprites.get(en.sprite);
            // TODO: the hover bounds above anchor bottom-center while this
            // transform shifts the sprite right by half its width; pick one
            // anchor rule for both passes.
            let transform = Mat4::from_translation(Vec3::new(en.pos.x, en.pos.y, 0.0))
                * Mat4::from_translation(Vec3::new(sprite.size.x * 0.5, 0.0, 0.0));
            host.draw_sprite(sprite.image, transform, sprite.size, Color::WHITE);

            let label = self
                .arena
                .format(format_args!("{:.2}, {:.2}", en.pos.x, en.pos.y));
            host.draw_text(
                self.font,
                label,
                self.config.font_height,
                en.pos,
                Vec2::splat(LABEL_SCALE),
                Color::WHITE,
            );
        }

        // Integrate player movement last, from the freshly pumped input.
        let axis = input::move_axis(host);
        if let Some(player) = self.world.get_mut(self.player) {
            player.pos += axis * self.config.player_speed * delta;
        }
    }

    // -- Accessors --

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> EntityIndex {
        self.player
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
