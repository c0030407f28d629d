//! Access to the host's UI node tree.
//!
//! The resolver never touches node memory directly. Everything goes through
//! [`NodeTree`], so the mapping onto the host's binary layout lives in an
//! adapter outside this crate. [`UiTree`] is an in-memory implementation that
//! owns its nodes.

pub mod attributes;
pub mod graph;
pub mod links;

pub use self::attributes::NodeAttributes;
pub use self::graph::UiTree;

use std::fmt::Debug;

use cgmath::Vector2;

impl_handle!(NodeId);

/// A capability over a tree of externally owned UI nodes.
///
/// Handles are lookup keys only. A handle may go stale at any time (the host
/// freed the node); accessors then return `None` and setters do nothing.
pub trait NodeTree {
    type Handle: Copy + Eq + Debug;

    /// Returns true if `node` still resolves to a live node.
    fn contains(&self, node: Self::Handle) -> bool;

    /// Gets the parent node, or `None` for roots.
    fn parent(&self, node: Self::Handle) -> Option<Self::Handle>;

    /// Gets the offset relative to the parent's coordinate space.
    fn local_position(&self, node: Self::Handle) -> Option<Vector2<f32>>;

    /// Gets the scale relative to the parent.
    fn local_scale(&self, node: Self::Handle) -> Option<Vector2<f32>>;

    /// Gets the unscaled bounding box.
    fn size(&self, node: Self::Handle) -> Option<Vector2<u16>>;

    /// Gets the local visibility flag.
    fn visible(&self, node: Self::Handle) -> Option<bool>;

    fn opacity(&self, node: Self::Handle) -> Option<u8>;

    fn set_local_position(&mut self, node: Self::Handle, position: Vector2<f32>);

    fn set_local_scale(&mut self, node: Self::Handle, scale: Vector2<f32>);

    fn set_size(&mut self, node: Self::Handle, size: Vector2<u16>);

    fn set_opacity(&mut self, node: Self::Handle, opacity: u8);

    /// Returns an iterator of its ancestors, from the parent up to the root.
    #[inline]
    fn ancestors(&self, node: Self::Handle) -> Ancestors<Self>
    where
        Self: Sized,
    {
        Ancestors {
            tree: self,
            cursor: self.parent(node),
        }
    }
}

/// An iterator of a node's ancestors. It stops at the root, or at the first
/// parent that no longer resolves.
pub struct Ancestors<'a, T: NodeTree> {
    tree: &'a T,
    cursor: Option<T::Handle>,
}

impl<'a, T: NodeTree> Iterator for Ancestors<'a, T> {
    type Item = T::Handle;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor.take().filter(|&v| self.tree.contains(v))?;
        self.cursor = self.tree.parent(node);
        Some(node)
    }
}

pub mod prelude {
    pub use super::{NodeAttributes, NodeId, NodeTree, UiTree};
}
