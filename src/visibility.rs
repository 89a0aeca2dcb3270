//! Visibility tracking for one-shot entrance animations.
//!
//! A `VisibilityTracker` watches a fixed set of page regions and records in
//! its `VisibilityMap` the first time each one is sufficiently on screen.
//! Flags never revert, so an animation plays once and stays finished even
//! after the region scrolls away.

mod map;
mod tracker;

pub use map::*;
pub use tracker::*;
