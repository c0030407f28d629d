use cgmath::{ElementWise, Vector2};

/// One of the nine reference points inside a node's bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    CenterCenter,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Default for Anchor {
    fn default() -> Self {
        Anchor::TopLeft
    }
}

impl Anchor {
    /// All anchors, row by row from the top-left.
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::CenterLeft,
        Anchor::CenterCenter,
        Anchor::CenterRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    /// Returns the fraction of the width and height this anchor sits at.
    pub fn factor(self) -> Vector2<f32> {
        let x = match self {
            Anchor::TopLeft | Anchor::CenterLeft | Anchor::BottomLeft => 0.0,
            Anchor::TopCenter | Anchor::CenterCenter | Anchor::BottomCenter => 0.5,
            Anchor::TopRight | Anchor::CenterRight | Anchor::BottomRight => 1.0,
        };

        let y = match self {
            Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight => 0.0,
            Anchor::CenterLeft | Anchor::CenterCenter | Anchor::CenterRight => 0.5,
            Anchor::BottomLeft | Anchor::BottomCenter | Anchor::BottomRight => 1.0,
        };

        Vector2::new(x, y)
    }

    /// Returns the offset from the top-left corner of a rectangle of `size` to
    /// this anchor.
    #[inline]
    pub fn offset(self, size: Vector2<f32>) -> Vector2<f32> {
        size.mul_element_wise(self.factor())
    }
}
