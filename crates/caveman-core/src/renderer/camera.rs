use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::math::approach::approach_vec2;

/// World-space camera with a fixed zoom, chasing a target exponentially.
pub struct Camera {
    /// Camera center position in world space.
    pub pos: Vec2,
    /// Zoom scale applied after the camera translation.
    pub zoom: f32,
    /// Exponential chase rate (see [`crate::math::approach::approach`]).
    pub rate: f32,
}

impl Camera {
    pub fn new(zoom: f32, rate: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            zoom,
            rate,
        }
    }

    /// Animate the camera toward `target`. Call once per frame.
    pub fn follow(&mut self, target: Vec2, dt: f32) {
        let (pos, _) = approach_vec2(self.pos, target, dt, self.rate);
        self.pos = pos;
    }

    /// Camera transform handed to the host: translate to the camera position,
    /// then apply the zoom scale.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(self.pos.x, self.pos.y, 1.0))
            * Mat4::from_scale(Vec3::new(self.zoom, self.zoom, 1.0))
    }
}

/// Map a screen-pixel position back to world space.
///
/// Normalizes pixels to the device-space pair the rendering pipeline produces
/// (origin at the viewport center), undoes the projection, then applies the
/// camera transform. Must exactly invert the forward transform or hover
/// hit-testing drifts off by pixels.
pub fn screen_to_world(screen: Vec2, projection: Mat4, camera: Mat4, viewport: Vec2) -> Vec2 {
    let ndc_x = screen.x / (viewport.x * 0.5) - 1.0;
    let ndc_y = -(1.0 - screen.y / (viewport.y * 0.5));

    let world = camera * (projection.inverse() * Vec4::new(ndc_x, ndc_y, 0.0, 1.0));
    Vec2::new(world.x, world.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_converges_on_target() {
        let mut cam = Camera::new(0.1875, 10.0);
        let target = Vec2::new(100.0, -40.0);
        for _ in 0..200 {
            cam.follow(target, 1.0 / 60.0);
        }
        assert_eq!(cam.pos, target);
    }

    #[test]
    fn follow_moves_partway_in_one_frame() {
        let mut cam = Camera::new(1.0, 10.0);
        cam.follow(Vec2::new(100.0, 100.0), 0.016);
        assert!(cam.pos.x > 0.0 && cam.pos.x < 100.0);
        assert!(cam.pos.y > 0.0 && cam.pos.y < 100.0);
    }

    #[test]
    fn view_matrix_translates_then_zooms() {
        let mut cam = Camera::new(0.5, 10.0);
        cam.pos = Vec2::new(10.0, 20.0);
        let m = cam.view_matrix();
        // The world origin maps to the camera position.
        let origin = m * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(Vec2::new(origin.x, origin.y), Vec2::new(10.0, 20.0));
        // A unit step is scaled by the zoom.
        let unit = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(Vec2::new(unit.x, unit.y), Vec2::new(10.5, 20.0));
    }

    #[test]
    fn screen_center_maps_to_camera_position() {
        let viewport = Vec2::new(1280.0, 720.0);
        let mut cam = Camera::new(0.1875, 10.0);
        cam.pos = Vec2::new(33.0, -7.0);
        let world = screen_to_world(
            viewport * 0.5,
            Mat4::IDENTITY,
            cam.view_matrix(),
            viewport,
        );
        assert!((world - cam.pos).length() < 1e-4);
    }

    #[test]
    fn screen_offsets_scale_with_zoom() {
        let viewport = Vec2::new(200.0, 200.0);
        let cam = Camera::new(0.25, 10.0);
        // 50 pixels right of center is half of the half-viewport: ndc 0.5.
        let world = screen_to_world(
            Vec2::new(150.0, 100.0),
            Mat4::IDENTITY,
            cam.view_matrix(),
            viewport,
        );
        assert!((world.x - 0.5 * 0.25).abs() < 1e-6);
        assert!(world.y.abs() < 1e-6);
    }

    #[test]
    fn screen_y_increases_downward_in_device_space() {
        let viewport = Vec2::new(100.0, 100.0);
        let top = screen_to_world(Vec2::new(50.0, 0.0), Mat4::IDENTITY, Mat4::IDENTITY, viewport);
        let bottom =
            screen_to_world(Vec2::new(50.0, 100.0), Mat4::IDENTITY, Mat4::IDENTITY, viewport);
        assert_eq!(top.y, -1.0);
        assert_eq!(bottom.y, 1.0);
    }
}
