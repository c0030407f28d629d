use cgmath::Vector2;

/// A screen-space rectangle, with top-left corner at `min`, and bottom-right
/// corner at `max`. The y axis points down, as in the host UI.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vector2<f32>,
    pub max: Vector2<f32>,
}

impl Rect {
    #[inline]
    pub fn new(min: Vector2<f32>, max: Vector2<f32>) -> Self {
        Rect { min, max }
    }

    /// Builds a rectangle from its top-left corner and size. The size is
    /// taken as-is, so a negative extent yields a rectangle that contains
    /// nothing.
    #[inline]
    pub fn from_pos_size(pos: Vector2<f32>, size: Vector2<f32>) -> Self {
        Rect {
            min: pos,
            max: pos + size,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> Vector2<f32> {
        self.max - self.min
    }

    /// Inclusive on every edge.
    #[inline]
    pub fn contains<P>(&self, p: P) -> bool
    where
        P: Into<Vector2<f32>>,
    {
        let p = p.into();
        p.x >= self.min.x && p.y >= self.min.y && p.x <= self.max.x && p.y <= self.max.y
    }

    /// Returns the four corners, clockwise from the top-left.
    #[inline]
    pub fn corners(&self) -> [Vector2<f32>; 4] {
        [
            self.min,
            Vector2::new(self.max.x, self.min.y),
            self.max,
            Vector2::new(self.min.x, self.max.y),
        ]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let rect = Rect::from_pos_size(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0));
        assert_eq!(rect.max, Vector2::new(4.0, 6.0));

        for &corner in rect.corners().iter() {
            assert!(rect.contains(corner));
        }

        assert!(rect.contains([2.5, 4.0]));
        assert!(!rect.contains([0.0, 4.0]));
        assert!(!rect.contains([5.0, 4.0]));
        assert!(!rect.contains([2.5, 1.0]));
        assert!(!rect.contains([2.5, 7.0]));
    }

    #[test]
    fn negative_extent() {
        let rect = Rect::from_pos_size(Vector2::new(0.0, 0.0), Vector2::new(-1.0, 1.0));
        assert!(!rect.contains([0.0, 0.0]));
        assert!(!rect.contains([-0.5, 0.5]));
    }

    #[test]
    fn dimensions() {
        let rect = Rect::new(Vector2::new(1.0, 1.0), Vector2::new(4.0, 3.0));
        assert_eq!(rect.width(), 3.0);
        assert_eq!(rect.height(), 2.0);
        assert_eq!(rect.size(), Vector2::new(3.0, 2.0));
    }
}
