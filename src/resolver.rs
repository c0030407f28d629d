//! Screen-space resolution of node transforms.
//!
//! A node's absolute position is found by walking up its parent chain: at
//! every ancestor the accumulated offset is scaled by the ancestor's local
//! scale and then shifted by the ancestor's local position. Scales multiply
//! along the same chain, and a node is only visible if every node on the chain
//! is.
//!
//! Every operation comes in two flavours. `try_*` returns a `Result`, the plain
//! one logs a warning and falls back to a documented default, so a missing node
//! never interrupts a frame.

use cgmath::{ElementWise, Vector2, Zero};

use crate::anchor::Anchor;
use crate::errors::{Axis, Error, Result};
use crate::math::Rect;
use crate::settings::Settings;
use crate::tree::NodeTree;

const ONE: Vector2<f32> = Vector2 { x: 1.0, y: 1.0 };

/// Resolves absolute transforms over any `NodeTree`. The tree is passed into
/// every call; the resolver itself only carries logging preferences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolver {
    log_null_nodes: bool,
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver {
            log_null_nodes: true,
        }
    }
}

impl Resolver {
    pub fn new() -> Self {
        Resolver::default()
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Resolver {
            log_null_nodes: settings.log_null_nodes,
        }
    }

    /// Logs `err` and hands back `default`. Null-node warnings can be muted,
    /// scale guards always log.
    pub(crate) fn fallback<V>(&self, err: Error, default: V) -> V {
        match err {
            Error::NullNode(_) if !self.log_null_nodes => {}
            _ => warn!("{}", err),
        }

        default
    }
}

impl Resolver {
    /// Gets the position of the node in screen space.
    pub fn try_absolute_position<T, N>(&self, tree: &T, node: N) -> Result<Vector2<f32>>
    where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
    {
        let node = resolve(tree, node, "absolute_position")?;
        Ok(absolute_position_of(tree, node))
    }

    /// Gets the position of the node in screen space. Returns zero for null nodes.
    pub fn absolute_position<T, N>(&self, tree: &T, node: N) -> Vector2<f32>
    where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
    {
        self.try_absolute_position(tree, node)
            .unwrap_or_else(|err| self.fallback(err, Vector2::zero()))
    }

    /// Gets the product of the node's scale and all of its ancestors' scales.
    pub fn try_scale<T, N>(&self, tree: &T, node: N) -> Result<Vector2<f32>>
    where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
    {
        let node = resolve(tree, node, "scale")?;
        Ok(scale_of(tree, node))
    }

    /// Gets the cumulative scale of the node. Returns `(1, 1)` for null nodes.
    pub fn scale<T, N>(&self, tree: &T, node: N) -> Vector2<f32>
    where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
    {
        self.try_scale(tree, node)
            .unwrap_or_else(|err| self.fallback(err, ONE))
    }

    /// Gets the size of the node after applying its cumulative scale.
    pub fn try_scaled_size<T, N>(&self, tree: &T, node: N) -> Result<Vector2<f32>>
    where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
    {
        let node = resolve(tree, node, "scaled_size")?;
        Ok(scaled_size_of(tree, node))
    }

    /// Gets the scaled size of the node. Returns `(1, 1)` for null nodes.
    pub fn scaled_size<T, N>(&self, tree: &T, node: N) -> Vector2<f32>
    where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
    {
        self.try_scaled_size(tree, node)
            .unwrap_or_else(|err| self.fallback(err, ONE))
    }

    /// Returns true if the node and every one of its ancestors is visible.
    pub fn try_is_visible<T, N>(&self, tree: &T, node: N) -> Result<bool>
    where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
    {
        let node = resolve(tree, node, "is_visible")?;
        Ok(is_visible_of(tree, node))
    }

    /// Returns true if the node is actually drawn. Null nodes are invisible.
    pub fn is_visible<T, N>(&self, tree: &T, node: N) -> bool
    where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
    {
        self.try_is_visible(tree, node)
            .unwrap_or_else(|err| self.fallback(err, false))
    }

    /// Gets the offset from the node's top-left corner to `anchor`, in screen
    /// space units.
    pub fn try_anchor_offset<T, N>(&self, tree: &T, node: N, anchor: Anchor) -> Result<Vector2<f32>>
    where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
    {
        let node = resolve(tree, node, "anchor_offset")?;
        Ok(anchor.offset(scaled_size_of(tree, node)))
    }

    /// Gets the anchor offset. Returns zero for null nodes.
    pub fn anchor_offset<T, N>(&self, tree: &T, node: N, anchor: Anchor) -> Vector2<f32>
    where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
    {
        self.try_anchor_offset(tree, node, anchor)
            .unwrap_or_else(|err| self.fallback(err, Vector2::zero()))
    }

    /// Gets the screen space position of `anchor` on the node.
    pub fn try_absolute_anchor_position<T, N>(
        &self,
        tree: &T,
        node: N,
        anchor: Anchor,
    ) -> Result<Vector2<f32>>
    where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
    {
        let node = resolve(tree, node, "absolute_anchor_position")?;
        Ok(absolute_position_of(tree, node) + anchor.offset(scaled_size_of(tree, node)))
    }

    /// Gets the screen space position of `anchor`. Returns zero for null nodes.
    pub fn absolute_anchor_position<T, N>(&self, tree: &T, node: N, anchor: Anchor) -> Vector2<f32>
    where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
    {
        self.try_absolute_anchor_position(tree, node, anchor)
            .unwrap_or_else(|err| self.fallback(err, Vector2::zero()))
    }

    /// Gets the screen space rectangle the node covers.
    pub fn try_rect<T, N>(&self, tree: &T, node: N) -> Result<Rect>
    where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
    {
        let node = resolve(tree, node, "rect")?;
        Ok(rect_of(tree, node))
    }

    /// Returns true if `point` lies inside the node's screen space rectangle,
    /// edges included.
    pub fn try_point_in_node<T, N>(&self, tree: &T, node: N, point: Vector2<f32>) -> Result<bool>
    where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
    {
        let node = resolve(tree, node, "point_in_node")?;
        Ok(rect_of(tree, node).contains(point))
    }

    /// Hit tests the node. Null nodes contain nothing.
    pub fn point_in_node<T, N>(&self, tree: &T, node: N, point: Vector2<f32>) -> bool
    where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
    {
        self.try_point_in_node(tree, node, point)
            .unwrap_or_else(|err| self.fallback(err, false))
    }

    /// Writes the node's local position so that its `anchor` lands on
    /// `target` in screen space.
    ///
    /// The parent chain is resolved once, before the write. An axis whose
    /// accumulated parent scale is zero can not be solved; that axis keeps its
    /// old value and `Error::ZeroScale` is returned after the other axis has
    /// been written.
    pub fn try_set_anchored_position<T, N>(
        &self,
        tree: &mut T,
        node: N,
        anchor: Anchor,
        target: Vector2<f32>,
    ) -> Result<()>
    where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
    {
        first_error(set_anchored_position_of(tree, node.into(), anchor, target))
    }

    /// Anchored position writer. Null nodes and zero parent scales are logged
    /// and skipped.
    pub fn set_anchored_position<T, N>(&self, tree: &mut T, node: N, anchor: Anchor, target: Vector2<f32>)
    where
        T: NodeTree,
        N: Into<Option<T::Handle>>,
    {
        for err in set_anchored_position_of(tree, node.into(), anchor, target) {
            self.fallback(err, ());
        }
    }
}

/// Returns true if `point` lies inside the rectangle starting at `rect_pos`
/// with extent `rect_size`, edges included.
#[inline]
pub fn point_in_rect(point: Vector2<f32>, rect_pos: Vector2<f32>, rect_size: Vector2<f32>) -> bool {
    Rect::from_pos_size(rect_pos, rect_size).contains(point)
}

pub(crate) fn resolve<T, N>(tree: &T, node: N, op: &'static str) -> Result<T::Handle>
where
    T: NodeTree,
    N: Into<Option<T::Handle>>,
{
    match node.into() {
        Some(node) if tree.contains(node) => Ok(node),
        _ => Err(Error::NullNode(op)),
    }
}

pub(crate) fn first_error(errors: Vec<Error>) -> Result<()> {
    match errors.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

pub(crate) fn absolute_position_of<T: NodeTree>(tree: &T, node: T::Handle) -> Vector2<f32> {
    let local = tree.local_position(node).unwrap_or_else(Vector2::zero);
    tree.ancestors(node).fold(local, |acc, v| {
        let scale = tree.local_scale(v).unwrap_or(ONE);
        let position = tree.local_position(v).unwrap_or_else(Vector2::zero);
        acc.mul_element_wise(scale) + position
    })
}

pub(crate) fn scale_of<T: NodeTree>(tree: &T, node: T::Handle) -> Vector2<f32> {
    let local = tree.local_scale(node).unwrap_or(ONE);
    local.mul_element_wise(ancestor_scale_of(tree, node))
}

/// Product of the ancestors' scales, excluding the node itself.
pub(crate) fn ancestor_scale_of<T: NodeTree>(tree: &T, node: T::Handle) -> Vector2<f32> {
    tree.ancestors(node).fold(ONE, |acc, v| {
        acc.mul_element_wise(tree.local_scale(v).unwrap_or(ONE))
    })
}

pub(crate) fn scaled_size_of<T: NodeTree>(tree: &T, node: T::Handle) -> Vector2<f32> {
    let size = tree.size(node).unwrap_or_else(|| Vector2::new(0, 0));
    Vector2::new(f32::from(size.x), f32::from(size.y)).mul_element_wise(scale_of(tree, node))
}

pub(crate) fn is_visible_of<T: NodeTree>(tree: &T, node: T::Handle) -> bool {
    let visible = |v| tree.visible(v).unwrap_or(false);
    visible(node) && tree.ancestors(node).all(visible)
}

pub(crate) fn rect_of<T: NodeTree>(tree: &T, node: T::Handle) -> Rect {
    Rect::from_pos_size(absolute_position_of(tree, node), scaled_size_of(tree, node))
}

/// Divides `value` by `divisor` per axis. An axis with a zero divisor keeps
/// the matching `current` component and yields a `ZeroScale` error.
pub(crate) fn divide_guarded(
    value: Vector2<f32>,
    divisor: Vector2<f32>,
    current: Vector2<f32>,
    op: &'static str,
) -> (Vector2<f32>, Vec<Error>) {
    let mut out = current;
    let mut errors = Vec::new();

    if divisor.x != 0.0 {
        out.x = value.x / divisor.x;
    } else {
        errors.push(Error::ZeroScale(op, Axis::X));
    }

    if divisor.y != 0.0 {
        out.y = value.y / divisor.y;
    } else {
        errors.push(Error::ZeroScale(op, Axis::Y));
    }

    (out, errors)
}

fn set_anchored_position_of<T: NodeTree>(
    tree: &mut T,
    node: Option<T::Handle>,
    anchor: Anchor,
    target: Vector2<f32>,
) -> Vec<Error> {
    const OP: &str = "set_anchored_position";

    let node = match resolve(&*tree, node, OP) {
        Ok(node) => node,
        Err(err) => return vec![err],
    };

    // The absolute position is `origin + local * scale`, where `origin` and
    // `scale` are the parent's absolute position and cumulative scale.
    let (origin, scale) = match tree.parent(node).filter(|&v| tree.contains(v)) {
        Some(parent) => (absolute_position_of(&*tree, parent), scale_of(&*tree, parent)),
        None => (Vector2::zero(), ONE),
    };

    let offset = anchor.offset(scaled_size_of(&*tree, node));
    let current = tree.local_position(node).unwrap_or_else(Vector2::zero);
    let (local, errors) = divide_guarded(target - offset - origin, scale, current, OP);

    tree.set_local_position(node, local);
    errors
}
