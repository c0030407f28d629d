/// A RGBA `Color`. Each color component is a floating point value
/// with a range from 0 to 1.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl From<[f32; 4]> for Color {
    fn from(v: [f32; 4]) -> Self {
        Color::new(v[0], v[1], v[2], v[3])
    }
}

impl Into<[u8; 4]> for Color {
    fn into(self) -> [u8; 4] {
        let v = self.clip();
        [
            (v.r * 255.0) as u8,
            (v.g * 255.0) as u8,
            (v.b * 255.0) as u8,
            (v.a * 255.0) as u8,
        ]
    }
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }

    /// Creates `Color` from a u32 encoded `ARGB`.
    pub fn from_argb_u32(encoded: u32) -> Self {
        Color::new(
            ((encoded >> 16) & 0xFF) as f32 / 255.0,
            ((encoded >> 8) & 0xFF) as f32 / 255.0,
            (encoded & 0xFF) as f32 / 255.0,
            ((encoded >> 24) & 0xFF) as f32 / 255.0,
        )
    }

    /// Creates `Color` from a u32 encoded `ABGR`, the layout draw lists expect.
    pub fn from_abgr_u32(encoded: u32) -> Self {
        Color::new(
            (encoded & 0xFF) as f32 / 255.0,
            ((encoded >> 8) & 0xFF) as f32 / 255.0,
            ((encoded >> 16) & 0xFF) as f32 / 255.0,
            ((encoded >> 24) & 0xFF) as f32 / 255.0,
        )
    }

    /// Packs into `ARGB`. Components are clipped to `[0, 1]` first.
    pub fn to_argb_u32(&self) -> u32 {
        let [r, g, b, a]: [u8; 4] = (*self).into();
        (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// Packs into `ABGR`. Components are clipped to `[0, 1]` first.
    pub fn to_abgr_u32(&self) -> u32 {
        let [r, g, b, a]: [u8; 4] = (*self).into();
        (u32::from(a) << 24) | (u32::from(b) << 16) | (u32::from(g) << 8) | u32::from(r)
    }

    /// Clips all components to `[0, 1]`.
    pub fn clip(&self) -> Self {
        Color::new(
            self.r.max(0.0).min(1.0),
            self.g.max(0.0).min(1.0),
            self.b.max(0.0).min(1.0),
            self.a.max(0.0).min(1.0),
        )
    }

    #[inline]
    pub fn rgba(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn white() -> Self {
        Color::new(1.0, 1.0, 1.0, 1.0)
    }

    pub fn black() -> Self {
        Color::new(0.0, 0.0, 0.0, 1.0)
    }

    pub fn red() -> Self {
        Color::new(1.0, 0.0, 0.0, 1.0)
    }

    pub fn green() -> Self {
        Color::new(0.0, 1.0, 0.0, 1.0)
    }

    pub fn transparent() -> Self {
        Color::new(0.0, 0.0, 0.0, 0.0)
    }
}
