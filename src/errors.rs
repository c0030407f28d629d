use std::fmt;

use crate::tree::NodeId;

/// The axis a scale guard tripped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Fail)]
pub enum Error {
    #[fail(display = "[{}] Node is null!", _0)]
    NullNode(&'static str),
    #[fail(display = "[{}] Invalid scale {} value.", _0, _1)]
    ZeroScale(&'static str, Axis),
    #[fail(display = "{} can not set self as parent.", _0)]
    CanNotAttachSelfAsParent(NodeId),
    #[fail(display = "{} is a descendant of {}.", _0, _1)]
    CanNotAttachDescendantAsParent(NodeId, NodeId),
    #[fail(display = "{} is invalid.", _0)]
    NodeIdInvalid(NodeId),
}

pub type Result<T> = ::std::result::Result<T, Error>;
