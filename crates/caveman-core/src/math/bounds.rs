use glam::Vec2;

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// A box of the given size whose bottom edge is centered on the origin.
    /// Used for sprite hit-testing: the entity position is the sprite's feet.
    pub fn bottom_center(size: Vec2) -> Self {
        Self {
            min: Vec2::new(-size.x * 0.5, 0.0),
            max: Vec2::new(size.x * 0.5, size.y),
        }
    }

    /// Translate the box by `offset`.
    pub fn shift(self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Whether `point` lies inside the box (edges inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}
