//! Layout calculation modules for imposition
//!
//! This module handles all the geometric calculations for page imposition:
//! - Sheet arithmetic (sheets, slots, vacant slots)
//! - Per-layout slot numbering (which source page goes where)
//! - Placement geometry (destination rectangles and rotation)
//! - The mirror pass shared by every layout

mod cut_stack;
mod eight_up;
mod four_up;
mod method;
mod sheet;
mod side_fold;
mod square;
mod types;

pub use method::*;
pub use sheet::mirror_pages;
pub use types::*;
