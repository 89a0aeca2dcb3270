//! Page geometry: where each section sits on the virtual page, what part of
//! the page the terminal currently shows, and how screen positions map back
//! to the interactive controls.
//!
//! This is the viewport-observation side of the visibility tracker: it
//! reports intersection ratios but never decides what they mean.

mod layout;
mod viewport;

pub use layout::*;
pub use viewport::*;
