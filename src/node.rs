//! A per-node view bundling local accessors with the resolver.

use cgmath::{Vector2, Zero};

use crate::anchor::Anchor;
use crate::errors::{Error, Result};
use crate::outline::{DrawSurface, OutlineStyle};
use crate::resolver::{self, Resolver};
use crate::tree::NodeTree;

/// `NodeHelper` borrows a tree and remembers one node in it. Reads fall back
/// to defaults and writes are skipped when the node is gone, each logged
/// through the resolver.
pub struct NodeHelper<'a, T: NodeTree> {
    tree: &'a mut T,
    node: Option<T::Handle>,
    resolver: Resolver,
}

impl<'a, T: NodeTree> NodeHelper<'a, T> {
    pub fn new<N>(tree: &'a mut T, node: N) -> Self
    where
        N: Into<Option<T::Handle>>,
    {
        NodeHelper::with_resolver(tree, node, Resolver::default())
    }

    pub fn with_resolver<N>(tree: &'a mut T, node: N, resolver: Resolver) -> Self
    where
        N: Into<Option<T::Handle>>,
    {
        NodeHelper {
            tree,
            node: node.into(),
            resolver,
        }
    }

    #[inline]
    pub fn node(&self) -> Option<T::Handle> {
        self.node
    }

    #[inline]
    pub fn tree(&self) -> &T {
        &*self.tree
    }

    fn resolve(&self, op: &'static str) -> Result<T::Handle> {
        resolver::resolve(&*self.tree, self.node, op)
    }

    fn report(&self, errors: Vec<Error>) {
        for err in errors {
            self.resolver.fallback(err, ());
        }
    }
}

impl<'a, T: NodeTree> NodeHelper<'a, T> {
    /// Gets the local (top-left) position.
    pub fn position(&self) -> Vector2<f32> {
        self.resolve("position")
            .map(|v| self.tree.local_position(v).unwrap_or_else(Vector2::zero))
            .unwrap_or_else(|err| self.resolver.fallback(err, Vector2::zero()))
    }

    /// Sets the local (top-left) position.
    pub fn set_position(&mut self, position: Vector2<f32>) {
        match self.resolve("set_position") {
            Ok(node) => self.tree.set_local_position(node, position),
            Err(err) => self.resolver.fallback(err, ()),
        }
    }

    /// Gets the anchored position inside the parent. This is not absolute.
    pub fn position_anchored(&self, anchor: Anchor) -> Vector2<f32> {
        self.resolve("position_anchored")
            .map(|v| {
                let local = self.tree.local_position(v).unwrap_or_else(Vector2::zero);
                local + anchor.offset(resolver::scaled_size_of(&*self.tree, v))
            })
            .unwrap_or_else(|err| self.resolver.fallback(err, Vector2::zero()))
    }

    /// Moves the node inside its parent so that `anchor` sits at `position`.
    /// The anchor offset is in screen space units, as with `position_anchored`.
    pub fn set_position_anchored(&mut self, anchor: Anchor, position: Vector2<f32>) {
        match self.resolve("set_position_anchored") {
            Ok(node) => {
                let offset = anchor.offset(resolver::scaled_size_of(&*self.tree, node));
                self.tree.set_local_position(node, position - offset);
            }
            Err(err) => self.resolver.fallback(err, ()),
        }
    }

    /// Gets the screen space position of `anchor`.
    #[inline]
    pub fn absolute_position_anchored(&self, anchor: Anchor) -> Vector2<f32> {
        self.resolver
            .absolute_anchor_position(&*self.tree, self.node, anchor)
    }

    /// Moves the node so that `anchor` sits at `position` in screen space.
    #[inline]
    pub fn set_absolute_position_anchored(&mut self, anchor: Anchor, position: Vector2<f32>) {
        self.resolver
            .set_anchored_position(&mut *self.tree, self.node, anchor, position);
    }

    /// Gets the unscaled size.
    pub fn size(&self) -> Vector2<f32> {
        self.resolve("size")
            .map(|v| {
                let size = self.tree.size(v).unwrap_or_else(|| Vector2::new(0, 0));
                Vector2::new(f32::from(size.x), f32::from(size.y))
            })
            .unwrap_or_else(|err| self.resolver.fallback(err, Vector2::zero()))
    }

    /// Sets the unscaled size. Components are truncated and clamped into the
    /// host's 16-bit range.
    pub fn set_size(&mut self, size: Vector2<f32>) {
        match self.resolve("set_size") {
            Ok(node) => self.tree.set_size(node, to_u16(size)),
            Err(err) => self.resolver.fallback(err, ()),
        }
    }

    /// Gets the size after applying the cumulative scale.
    #[inline]
    pub fn scaled_size(&self) -> Vector2<f32> {
        self.resolver.scaled_size(&*self.tree, self.node)
    }

    /// Sets the unscaled size such that the scaled size becomes `size`. Axes
    /// with a zero cumulative scale are left untouched.
    pub fn set_scaled_size(&mut self, size: Vector2<f32>) {
        const OP: &str = "set_scaled_size";

        let node = match self.resolve(OP) {
            Ok(node) => node,
            Err(err) => return self.resolver.fallback(err, ()),
        };

        let current = self.tree.size(node).unwrap_or_else(|| Vector2::new(0, 0));
        let current = Vector2::new(f32::from(current.x), f32::from(current.y));
        let scale = resolver::scale_of(&*self.tree, node);

        let (size, errors) = resolver::divide_guarded(size, scale, current, OP);
        self.tree.set_size(node, to_u16(size));
        self.report(errors);
    }

    /// Gets the local scale.
    pub fn scale(&self) -> Vector2<f32> {
        self.resolve("scale")
            .map(|v| self.tree.local_scale(v).unwrap_or(Vector2::new(1.0, 1.0)))
            .unwrap_or_else(|err| self.resolver.fallback(err, Vector2::new(1.0, 1.0)))
    }

    /// Sets the local scale.
    pub fn set_scale(&mut self, scale: Vector2<f32>) {
        match self.resolve("set_scale") {
            Ok(node) => self.tree.set_local_scale(node, scale),
            Err(err) => self.resolver.fallback(err, ()),
        }
    }

    /// Gets the cumulative scale, parents included.
    #[inline]
    pub fn world_scale(&self) -> Vector2<f32> {
        self.resolver.scale(&*self.tree, self.node)
    }

    /// Sets the local scale such that the cumulative scale becomes `scale`.
    /// Axes whose ancestors scale to zero are left untouched.
    pub fn set_world_scale(&mut self, scale: Vector2<f32>) {
        const OP: &str = "set_world_scale";

        let node = match self.resolve(OP) {
            Ok(node) => node,
            Err(err) => return self.resolver.fallback(err, ()),
        };

        let current = self
            .tree
            .local_scale(node)
            .unwrap_or(Vector2::new(1.0, 1.0));
        let ancestors = resolver::ancestor_scale_of(&*self.tree, node);

        let (scale, errors) = resolver::divide_guarded(scale, ancestors, current, OP);
        self.tree.set_local_scale(node, scale);
        self.report(errors);
    }

    /// Gets the opacity of the node itself, ignoring its parents.
    pub fn opacity(&self) -> u8 {
        self.resolve("opacity")
            .map(|v| self.tree.opacity(v).unwrap_or(0))
            .unwrap_or_else(|err| self.resolver.fallback(err, 0))
    }

    pub fn set_opacity(&mut self, opacity: u8) {
        match self.resolve("set_opacity") {
            Ok(node) => self.tree.set_opacity(node, opacity),
            Err(err) => self.resolver.fallback(err, ()),
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.resolver.is_visible(&*self.tree, self.node)
    }

    #[inline]
    pub fn contains_point(&self, point: Vector2<f32>) -> bool {
        self.resolver.point_in_node(&*self.tree, self.node, point)
    }

    #[inline]
    pub fn draw_outline<S>(&self, surface: &mut S, label: &str, style: &OutlineStyle)
    where
        S: DrawSurface + ?Sized,
    {
        self.resolver
            .draw_outline(&*self.tree, surface, self.node, label, style);
    }
}

fn to_u16(v: Vector2<f32>) -> Vector2<u16> {
    // `as` truncates toward zero and saturates, NaN becomes zero.
    Vector2::new(v.x as u16, v.y as u16)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn truncation() {
        assert_eq!(to_u16(Vector2::new(3.9, -2.0)), Vector2::new(3, 0));
        assert_eq!(to_u16(Vector2::new(1.0e9, ::std::f32::NAN)), Vector2::new(65535, 0));
    }
}
