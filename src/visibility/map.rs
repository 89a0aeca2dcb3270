use std::collections::BTreeMap;

/// Append-only record of the regions that have been on screen at least once.
#[derive(Debug, Clone, Default)]
pub struct VisibilityMap {
    seen: BTreeMap<String, bool>,
}

impl VisibilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag `region` as visible. Returns true only the first time.
    pub fn mark_visible(&mut self, region: &str) -> bool {
        if self.is_visible(region) {
            return false;
        }
        self.seen.insert(region.to_string(), true);
        true
    }

    pub fn is_visible(&self, region: &str) -> bool {
        self.seen.get(region).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.seen.keys().map(String::as_str)
    }
}
