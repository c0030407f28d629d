pub use crate::anchor::Anchor;
pub use crate::errors::{Axis, Error};
pub use crate::math::prelude::*;
pub use crate::node::NodeHelper;
pub use crate::outline::{DrawSurface, OutlineStyle};
pub use crate::resolver::{point_in_rect, Resolver};
pub use crate::settings::Settings;
pub use crate::tree::prelude::*;
pub use crate::utils::Color;
