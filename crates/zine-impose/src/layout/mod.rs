//! Layout calculation modules
//!
//! This module handles all the geometric calculations for a request:
//! - Grid layout (page size, margins, gutters, cell rectangles)
//! - Zine page order (which logical page goes in which slot)
//! - Content placement (aspect-fit, centering, rotate-in-place transforms)

mod grid;
mod permutation;
mod placement;
mod plan;
mod types;

pub use grid::*;
pub use permutation::*;
pub use placement::*;
pub use plan::*;
pub use types::*;
