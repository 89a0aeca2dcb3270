use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::map::VisibilityMap;

/// Fraction of a region that must be on screen before it counts as seen.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// How much of one region is currently inside the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub region: String,
    /// Visible fraction of the region, `0.0..=1.0`.
    pub ratio: f32,
}

impl IntersectionEntry {
    pub fn new(region: impl Into<String>, ratio: f32) -> Self {
        Self {
            region: region.into(),
            ratio,
        }
    }
}

/// Observes tagged regions and flips their flag the first time they enter
/// the viewport.
#[derive(Debug)]
pub struct VisibilityTracker {
    threshold: f32,
    observed: BTreeSet<String>,
    map: VisibilityMap,
    connected: bool,
}

impl VisibilityTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            observed: BTreeSet::new(),
            map: VisibilityMap::new(),
            connected: true,
        }
    }

    /// Register `regions` for observation.
    pub fn observe<I, S>(&mut self, regions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !self.connected {
            return;
        }
        for region in regions {
            self.observed.insert(region.into());
        }
    }

    /// Apply one batch of intersection reports.
    ///
    /// Returns the regions that became visible for the first time, in batch
    /// order. Reports for unobserved regions, or delivered after
    /// `disconnect`, are ignored.
    pub fn on_intersections(&mut self, batch: &[IntersectionEntry]) -> Vec<String> {
        if !self.connected {
            trace!("intersection batch after disconnect ignored");
            return Vec::new();
        }

        let mut revealed = Vec::new();
        for entry in batch {
            if !self.observed.contains(&entry.region) {
                continue;
            }
            if entry.ratio >= self.threshold
                && entry.ratio > 0.0
                && self.map.mark_visible(&entry.region)
            {
                debug!(region = %entry.region, ratio = entry.ratio, "region revealed");
                revealed.push(entry.region.clone());
            }
        }
        revealed
    }

    /// Flag every observed region at once. Used when entrance animations
    /// are turned off.
    pub fn reveal_all(&mut self) -> Vec<String> {
        let regions: Vec<String> = self.observed.iter().cloned().collect();
        regions
            .into_iter()
            .filter(|r| self.map.mark_visible(r))
            .collect()
    }

    /// Stop observing. Later batches are dropped; the map is kept.
    pub fn disconnect(&mut self) {
        self.observed.clear();
        self.connected = false;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn is_visible(&self, region: &str) -> bool {
        self.map.is_visible(region)
    }

    pub fn map(&self) -> &VisibilityMap {
        &self.map
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}
