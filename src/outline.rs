//! Debug outlines around nodes, drawn onto the host GUI's draw list.

use cgmath::Vector2;

use crate::errors::Result;
use crate::resolver::{self, Resolver};
use crate::tree::NodeTree;
use crate::utils::Color;

/// The drawing primitives outlines need from the host GUI library. Colors are
/// packed `ABGR`, as immediate-mode draw lists take them.
pub trait DrawSurface {
    fn add_rect_filled(&mut self, min: Vector2<f32>, max: Vector2<f32>, color: u32);

    fn add_rect(&mut self, min: Vector2<f32>, max: Vector2<f32>, color: u32);

    fn add_text(&mut self, pos: Vector2<f32>, color: u32, text: &str);
}

/// Colors and placement of node outlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineStyle {
    pub background: u32,
    /// Outline and label color of visible nodes.
    pub visible: u32,
    /// Outline and label color of hidden nodes.
    pub invisible: u32,
    /// Screen position of the host's main viewport. Node positions are
    /// relative to it.
    pub viewport_origin: Vector2<f32>,
}

impl Default for OutlineStyle {
    fn default() -> Self {
        OutlineStyle {
            background: 0x0800_0000,
            visible: 0xFF00_FF00,
            invisible: 0xFF00_00FF,
            viewport_origin: Vector2::new(0.0, 0.0),
        }
    }
}

impl OutlineStyle {
    /// Creates a style from unpacked colors, placed at the screen origin.
    pub fn new(background: Color, visible: Color, invisible: Color) -> Self {
        OutlineStyle {
            background: background.to_abgr_u32(),
            visible: visible.to_abgr_u32(),
            invisible: invisible.to_abgr_u32(),
            viewport_origin: Vector2::new(0.0, 0.0),
        }
    }
}

impl Resolver {
    /// Draws the node's screen space rectangle, its outline and `label`.
    pub fn try_draw_outline<T, N, S>(
        &self,
        tree: &T,
        surface: &mut S,
        node: N,
        label: &str,
        style: &OutlineStyle,
    ) -> Result<()>
    where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
        S: DrawSurface + ?Sized,
    {
        let node = resolver::resolve(tree, node, "draw_outline")?;

        let rect = resolver::rect_of(tree, node);
        let min = rect.min + style.viewport_origin;
        let max = rect.max + style.viewport_origin;
        let color = if resolver::is_visible_of(tree, node) {
            style.visible
        } else {
            style.invisible
        };

        surface.add_rect_filled(min, max, style.background);
        surface.add_rect(min, max, color);
        surface.add_text(min, color, label);
        Ok(())
    }

    /// Draws an outline around the node. Null nodes are logged and skipped.
    pub fn draw_outline<T, N, S>(
        &self,
        tree: &T,
        surface: &mut S,
        node: N,
        label: &str,
        style: &OutlineStyle,
    ) where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
        S: DrawSurface + ?Sized,
    {
        if let Err(err) = self.try_draw_outline(tree, surface, node, label, style) {
            self.fallback(err, ());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_colors() {
        let style = OutlineStyle::default();
        assert_eq!(style.background, 0x0800_0000);
        assert_eq!(style.visible, 0xFF00_FF00);
        assert_eq!(style.invisible, 0xFF00_00FF);
        assert_eq!(style.viewport_origin, Vector2::new(0.0, 0.0));

        let unpacked = OutlineStyle::new(Color::black(), Color::green(), Color::red());
        assert_eq!(unpacked.background, 0xFF00_0000);
        assert_eq!(unpacked.visible, style.visible);
        assert_eq!(unpacked.invisible, style.invisible);
    }
}
