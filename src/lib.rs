//! # What is This?
//!
//! `uinode` is a small support library for overlay plugins that need to reason
//! about the screen-space layout of a host application's UI tree.
//!
//! The host owns every node. This crate only looks at nodes through the
//! [`NodeTree`](tree::NodeTree) capability, walks their parent chains, and
//! accumulates positions, scales and visibility the same way the host's
//! renderer does. On top of that it offers anchor math, hit testing, an
//! anchored position writer and a debug outline painter.
//!
//! ```rust
//! use uinode::prelude::*;
//!
//! let mut tree = UiTree::new();
//! let window = tree.create();
//! let button = tree.create();
//! tree.set_parent(button, window).unwrap();
//!
//! tree.set_local_position(window, Vector2::new(10.0, 10.0));
//! tree.set_local_scale(window, Vector2::new(2.0, 2.0));
//! tree.set_local_position(button, Vector2::new(5.0, 5.0));
//!
//! let resolver = Resolver::new();
//! assert_eq!(resolver.absolute_position(&tree, button), Vector2::new(20.0, 20.0));
//! ```

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

#[macro_use]
pub mod utils;

pub mod anchor;
pub mod errors;
pub mod math;
pub mod node;
pub mod outline;
pub mod resolver;
pub mod settings;
pub mod tree;

pub mod prelude;
