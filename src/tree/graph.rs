use std::collections::{HashMap, HashSet};
use std::iter;
use std::mem;

use cgmath::Vector2;

use super::attributes::NodeAttributes;
use super::links::Links;
use super::{NodeId, NodeTree};
use crate::errors::{Error, Result};
use crate::utils::HandlePool;

/// A simple in-memory node tree. It stores the local attributes of every node
/// together with the tree relationships between them, and hands out versioned
/// `NodeId`s so a deleted node's id never resolves again.
///
/// `UiTree` is the reference implementation of `NodeTree`. Adapters over a host
/// process' own node memory implement the same trait.
#[derive(Default)]
pub struct UiTree {
    handles: HandlePool<NodeId>,
    remap: HashMap<NodeId, usize>,
    ids: Vec<NodeId>,
    links: Vec<Links>,
    attributes: Vec<NodeAttributes>,
    roots: HashSet<NodeId>,
}

impl UiTree {
    pub fn new() -> Self {
        UiTree::default()
    }

    /// Creates a root node with default attributes.
    #[inline]
    pub fn create(&mut self) -> NodeId {
        self.create_with(NodeAttributes::default())
    }

    /// Creates a root node.
    pub fn create_with(&mut self, attributes: NodeAttributes) -> NodeId {
        let node = self.handles.create();

        self.remap.insert(node, self.ids.len());
        self.ids.push(node);
        self.links.push(Links::default());
        self.attributes.push(attributes);
        self.roots.insert(node);
        node
    }

    /// Deletes a node and all of its descendants. Returns the deleted ids, the
    /// node itself first.
    pub fn delete(&mut self, node: NodeId) -> Option<Vec<NodeId>> {
        if !self.remap.contains_key(&node) {
            return None;
        }

        self.detach(node);
        self.roots.remove(&node);

        let removes: Vec<_> = iter::once(node).chain(self.descendants(node)).collect();
        for &w in &removes {
            if let Some(index) = self.remap.remove(&w) {
                self.ids.swap_remove(index);
                self.links.swap_remove(index);
                self.attributes.swap_remove(index);

                if index < self.ids.len() {
                    self.remap.insert(self.ids[index], index);
                }
            }

            self.handles.free(w);
        }

        Some(removes)
    }

    /// Returns the number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns an iterator over the roots, in no particular order.
    #[inline]
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.roots.iter().cloned()
    }

    #[inline]
    fn index(&self, node: NodeId) -> Result<usize> {
        self.remap
            .get(&node)
            .cloned()
            .ok_or(Error::NodeIdInvalid(node))
    }

    #[inline]
    fn links_of(&self, node: NodeId) -> Option<Links> {
        self.remap.get(&node).map(|&index| self.links[index])
    }

    #[inline]
    fn links_mut(&mut self, node: NodeId) -> Option<&mut Links> {
        match self.remap.get(&node) {
            Some(&index) => Some(&mut self.links[index]),
            None => None,
        }
    }
}

impl UiTree {
    /// Returns ture if this is the leaf of a hierarchy, aka. has no child.
    #[inline]
    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.links_of(node)
            .map(|v| v.first_child.is_none())
            .unwrap_or(false)
    }

    /// Returns ture if this is the root of a hierarchy, aka. has no parent.
    #[inline]
    pub fn is_root(&self, node: NodeId) -> bool {
        self.links_of(node)
            .map(|v| v.parent.is_none())
            .unwrap_or(false)
    }

    /// Return true if `rhs` is one of the ancestors of `lhs`.
    #[inline]
    pub fn is_ancestor(&self, lhs: NodeId, rhs: NodeId) -> bool {
        self.ancestors(lhs).any(|v| v == rhs)
    }

    /// Attachs a node to `parent`, before its existing children. Passing `None`
    /// turns the node into a root.
    ///
    /// The local attributes are left untouched, so the node moves along with
    /// its new parent.
    pub fn set_parent<T>(&mut self, child: NodeId, parent: T) -> Result<()>
    where
        T: Into<Option<NodeId>>,
    {
        self.index(child)?;

        let parent = parent.into();
        if let Some(parent) = parent {
            if parent == child {
                return Err(Error::CanNotAttachSelfAsParent(child));
            }

            self.index(parent)?;
            if self.is_ancestor(parent, child) {
                return Err(Error::CanNotAttachDescendantAsParent(parent, child));
            }
        }

        self.detach(child);

        if let Some(parent) = parent {
            let next_sib = self
                .links_mut(parent)
                .and_then(|v| mem::replace(&mut v.first_child, Some(child)));

            if let Some(next_sib) = next_sib {
                if let Some(v) = self.links_mut(next_sib) {
                    v.prev_sib = Some(child);
                }
            }

            if let Some(v) = self.links_mut(child) {
                v.parent = Some(parent);
                v.next_sib = next_sib;
            }

            self.roots.remove(&child);
        }

        Ok(())
    }

    /// Detach a node from its parent and siblings. Children are not affected.
    pub fn remove_from_parent(&mut self, child: NodeId) -> Result<()> {
        self.index(child)?;
        self.detach(child);
        Ok(())
    }

    fn detach(&mut self, child: NodeId) {
        let (parent, next_sib, prev_sib) = match self.links_mut(child) {
            Some(v) => (v.parent.take(), v.next_sib.take(), v.prev_sib.take()),
            None => return,
        };

        if let Some(next_sib) = next_sib {
            if let Some(v) = self.links_mut(next_sib) {
                v.prev_sib = prev_sib;
            }
        }

        if let Some(prev_sib) = prev_sib {
            if let Some(v) = self.links_mut(prev_sib) {
                v.next_sib = next_sib;
            }
        } else if let Some(parent) = parent {
            // Promote the next sibling to first child.
            if let Some(v) = self.links_mut(parent) {
                v.first_child = next_sib;
            }
        }

        self.roots.insert(child);
    }

    /// Returns an iterator of this node's children.
    #[inline]
    pub fn children(&self, node: NodeId) -> Children {
        Children {
            cursor: self.links_of(node).and_then(|v| v.first_child),
            tree: self,
        }
    }

    /// Returns an iterator of this node's descendants in tree order.
    #[inline]
    pub fn descendants(&self, node: NodeId) -> Descendants {
        Descendants {
            root: node,
            cursor: self.links_of(node).and_then(|v| v.first_child),
            tree: self,
        }
    }
}

/// An iterator of a node's children.
pub struct Children<'a> {
    tree: &'a UiTree,
    cursor: Option<NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = self.tree.links_of(node).and_then(|v| v.next_sib);
        Some(node)
    }
}

/// An iterator of a node's descendants, in tree order.
pub struct Descendants<'a> {
    tree: &'a UiTree,
    root: NodeId,
    cursor: Option<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        let mut v = match self.tree.links_of(node) {
            Some(v) => v,
            None => return self.cursor.take(),
        };

        // Deep first search when iterating children recursively.
        if v.first_child.is_some() {
            return mem::replace(&mut self.cursor, v.first_child);
        }

        if v.next_sib.is_some() {
            return mem::replace(&mut self.cursor, v.next_sib);
        }

        // Travel back when we reach leaf-node.
        while let Some(parent) = v.parent {
            if parent == self.root {
                break;
            }

            v = match self.tree.links_of(parent) {
                Some(v) => v,
                None => break,
            };

            if v.next_sib.is_some() {
                return mem::replace(&mut self.cursor, v.next_sib);
            }
        }

        self.cursor.take()
    }
}

impl UiTree {
    /// Gets a copy of the local attributes.
    #[inline]
    pub fn attributes(&self, node: NodeId) -> Option<NodeAttributes> {
        self.remap.get(&node).map(|&index| self.attributes[index])
    }

    /// Replaces the local attributes.
    #[inline]
    pub fn set_attributes(&mut self, node: NodeId, attributes: NodeAttributes) {
        if let Some(&index) = self.remap.get(&node) {
            self.attributes[index] = attributes;
        }
    }

    /// Sets the local visibility flag.
    #[inline]
    pub fn set_visible(&mut self, node: NodeId, visible: bool) {
        if let Some(&index) = self.remap.get(&node) {
            self.attributes[index].visible = visible;
        }
    }

    #[inline]
    fn attributes_mut(&mut self, node: NodeId) -> Option<&mut NodeAttributes> {
        match self.remap.get(&node) {
            Some(&index) => Some(&mut self.attributes[index]),
            None => None,
        }
    }
}

impl NodeTree for UiTree {
    type Handle = NodeId;

    #[inline]
    fn contains(&self, node: NodeId) -> bool {
        self.handles.contains(node)
    }

    #[inline]
    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.links_of(node).and_then(|v| v.parent)
    }

    #[inline]
    fn local_position(&self, node: NodeId) -> Option<Vector2<f32>> {
        self.attributes(node).map(|v| v.position)
    }

    #[inline]
    fn local_scale(&self, node: NodeId) -> Option<Vector2<f32>> {
        self.attributes(node).map(|v| v.scale)
    }

    #[inline]
    fn size(&self, node: NodeId) -> Option<Vector2<u16>> {
        self.attributes(node).map(|v| v.size)
    }

    #[inline]
    fn visible(&self, node: NodeId) -> Option<bool> {
        self.attributes(node).map(|v| v.visible)
    }

    #[inline]
    fn opacity(&self, node: NodeId) -> Option<u8> {
        self.attributes(node).map(|v| v.opacity)
    }

    #[inline]
    fn set_local_position(&mut self, node: NodeId, position: Vector2<f32>) {
        if let Some(v) = self.attributes_mut(node) {
            v.position = position;
        }
    }

    #[inline]
    fn set_local_scale(&mut self, node: NodeId, scale: Vector2<f32>) {
        if let Some(v) = self.attributes_mut(node) {
            v.scale = scale;
        }
    }

    #[inline]
    fn set_size(&mut self, node: NodeId, size: Vector2<u16>) {
        if let Some(v) = self.attributes_mut(node) {
            v.size = size;
        }
    }

    #[inline]
    fn set_opacity(&mut self, node: NodeId, opacity: u8) {
        if let Some(v) = self.attributes_mut(node) {
            v.opacity = opacity;
        }
    }
}
