//! Booklet imposition engine
//!
//! Plans how the pages of a document are arranged on printer sheets so the
//! printed stack can be folded or cut into a booklet, and renders those plans
//! with lopdf.

pub mod constants;
pub mod impose;
pub mod layout;
pub mod marks;
mod options;
mod preview;
mod registry;
pub mod render;
mod stats;
mod types;

pub use impose::{impose, load_pdf, plan_document, save_pdf};
pub use layout::{LayoutMethod, OutputPageSpec, PlacementSpec, Rect, SheetPlan, SheetSide};
pub use options::*;
pub use preview::generate_preview;
pub use registry::{LayoutInfo, LayoutRegistry};
pub use render::{DocumentShapeProbe, LopdfRenderer, PageRenderer, render_plan};
pub use stats::calculate_statistics;
pub use types::*;
