use cgmath::Vector2;

/// `NodeAttributes` stores the local layout state of a node: where it sits
/// inside its parent, how much it scales its subtree, how large it is, and
/// whether it is drawn at all.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct NodeAttributes {
    pub position: Vector2<f32>,
    pub scale: Vector2<f32>,
    pub size: Vector2<u16>,
    pub visible: bool,
    pub opacity: u8,
}

impl Default for NodeAttributes {
    fn default() -> Self {
        NodeAttributes {
            position: Vector2::new(0.0, 0.0),
            scale: Vector2::new(1.0, 1.0),
            size: Vector2::new(0, 0),
            visible: true,
            opacity: 255,
        }
    }
}

impl NodeAttributes {
    #[inline]
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Vector2::new(x, y);
        self
    }

    #[inline]
    pub fn with_scale(mut self, x: f32, y: f32) -> Self {
        self.scale = Vector2::new(x, y);
        self
    }

    #[inline]
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.size = Vector2::new(width, height);
        self
    }

    #[inline]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}
