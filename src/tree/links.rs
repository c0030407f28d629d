use super::NodeId;

/// `Links` records where a node sits in the tree. Every access requires going
/// through the owning `UiTree`, which keeps the records plain `Copy` data.
#[derive(Default, Debug, Clone, Copy)]
pub struct Links {
    pub parent: Option<NodeId>,
    pub next_sib: Option<NodeId>,
    pub prev_sib: Option<NodeId>,
    pub first_child: Option<NodeId>,
}
