//! Presentation host contract.
//!
//! The core never creates windows, decodes images, or talks to a GPU. It
//! consumes this capability surface and leaves the implementation to a
//! platform backend (winit/wgpu, SDL, a scripted test double, ...).
//!
//! # Example Implementation
//!
//! ```ignore
//! struct SdlHost {
//!     canvas: sdl2::render::WindowCanvas,
//!     // ...
//! }
//!
//! impl Host for SdlHost {
//!     fn elapsed_seconds(&self) -> f64 {
//!         self.timer.ticks64() as f64 / 1000.0
//!     }
//!
//!     fn draw_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
//!         // Fill a world-space rectangle...
//!     }
//!
//!     // ...
//! }
//! ```

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};
use thiserror::Error;

use crate::api::config::WindowDesc;

/// Opaque handle to an image loaded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ImageHandle(pub u32);

/// Opaque handle to a font loaded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontHandle(pub u32);

/// Keys the core samples. Hosts map their native key codes onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Escape,
}

/// RGBA color with float components, laid out for direct GPU upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const GREEN: Color = Color { r: 0.0, g: 1.0, b: 0.0, a: 1.0 };
    pub const RED: Color = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `0xRRGGBBAA` hex value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 24) & 0xff) as f32 / 255.0,
            g: ((hex >> 16) & 0xff) as f32 / 255.0,
            b: ((hex >> 8) & 0xff) as f32 / 255.0,
            a: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }
}

/// A required asset failed to load. Startup treats this as fatal.
#[derive(Debug, Clone, Error)]
#[error("failed to load {path}: {reason}")]
pub struct AssetError {
    pub path: String,
    pub reason: String,
}

/// Capability surface the core consumes from its platform backend.
///
/// Queries take `&self`; anything that draws, loads, or pumps events takes
/// `&mut self`. All drawing positions are world-space; the host applies the
/// camera transform it was handed for the frame.
pub trait Host {
    // -- Window lifecycle --

    /// Create (or reconfigure) the window. Called once during boot.
    fn open_window(&mut self, desc: &WindowDesc);

    /// Whether a close was requested (window chrome or [`Host::request_close`]).
    fn should_close(&self) -> bool;

    /// Ask the host to end the main loop after this frame.
    fn request_close(&mut self);

    /// Pump OS events. Called once per frame before input is sampled.
    fn poll(&mut self);

    /// Present the finished frame.
    fn present(&mut self);

    // -- Time --

    /// Monotonic seconds since an arbitrary epoch.
    fn elapsed_seconds(&self) -> f64;

    // -- Input --

    fn key_down(&self, key: Key) -> bool;
    fn key_just_pressed(&self, key: Key) -> bool;
    fn key_just_released(&self, key: Key) -> bool;

    /// Mouse position in screen pixels, origin top-left.
    fn mouse_position(&self) -> Vec2;

    // -- Camera / projection --

    /// Install the camera transform used for this frame's draws.
    fn set_camera_transform(&mut self, view: Mat4);

    /// The projection matrix of the rendering pipeline.
    fn projection(&self) -> Mat4;

    /// Current drawable size in pixels.
    fn viewport_size(&self) -> Vec2;

    // -- Drawing --

    /// Fill a world-space rectangle. `pos` is the lower-left corner.
    fn draw_rect(&mut self, pos: Vec2, size: Vec2, color: Color);

    /// Draw an image under an arbitrary transform at a logical size.
    fn draw_sprite(&mut self, image: ImageHandle, transform: Mat4, size: Vec2, tint: Color);

    /// Draw a text string at a world position.
    fn draw_text(
        &mut self,
        font: FontHandle,
        text: &str,
        height: u32,
        pos: Vec2,
        scale: Vec2,
        color: Color,
    );

    // -- Assets --

    fn load_image(&mut self, path: &str) -> Result<ImageHandle, AssetError>;
    fn load_font(&mut self, path: &str) -> Result<FontHandle, AssetError>;
}
