//! Text measurement, word wrap and auto-fit
//!
//! The three pieces are independent: wrapping depends only on a
//! [`TextMeasure`], and the size search depends only on a "does size S fit"
//! predicate.

mod fit;
mod metrics;
mod wrap;

pub use fit::*;
pub use metrics::*;
pub use wrap::*;
