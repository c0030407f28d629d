//! This module contains the math utils that mainly comes from `cgmath`.

pub use cgmath::*;

pub mod rect;
pub use self::rect::Rect;

pub mod prelude {
    pub use super::rect::Rect;
    pub use cgmath::{ElementWise, Vector2, Zero};
}
