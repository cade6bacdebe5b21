use crate::options::AssetOptions;

/// Ordered list of assets the scene needs before it is fully dressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    /// Asset locations: environment map, starfield, then planet textures.
    pub items: Vec<String>,
}

impl AssetManifest {
    /// Collect every asset named in `assets`.
    #[must_use]
    pub fn from_options(assets: &AssetOptions) -> Self {
        let mut items = Vec::with_capacity(assets.planet_textures.len() + 2);
        items.push(assets.environment_hdri.clone());
        items.push(assets.starfield_texture.clone());
        items.extend(assets.planet_textures.iter().cloned());
        Self { items }
    }

    /// Number of assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the manifest is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `item` is fetched over the network rather than from disk.
    #[must_use]
    pub fn is_remote(item: &str) -> bool {
        item.starts_with("http://") || item.starts_with("https://")
    }
}

/// Counts finished asset loads and reports progress.
///
/// A failed load still counts as finished so one missing texture can never
/// hold the loading screen forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingTracker {
    total: usize,
    loaded: usize,
    failed: usize,
}

impl LoadingTracker {
    /// Tracker expecting `total` assets.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            loaded: 0,
            failed: 0,
        }
    }

    /// Record a successful load. Extra calls past `total` are ignored.
    pub fn item_loaded(&mut self) {
        if !self.is_complete() {
            self.loaded += 1;
            self.log_if_complete();
        }
    }

    /// Record a failed load. Extra calls past `total` are ignored.
    pub fn item_failed(&mut self) {
        if !self.is_complete() {
            self.failed += 1;
            self.log_if_complete();
        }
    }

    fn log_if_complete(&self) {
        if self.is_complete() {
            log::info!(
                "assets ready: {} loaded, {} failed",
                self.loaded,
                self.failed
            );
        }
    }

    /// Assets finished so far, successful or not.
    #[must_use]
    pub fn finished(&self) -> usize {
        self.loaded + self.failed
    }

    /// Assets that failed to load.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Fraction finished, in `[0, 1]`. An empty manifest is complete.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.finished() as f32 / self.total as f32
        }
    }

    /// Progress as a rounded percentage.
    #[must_use]
    pub fn percent(&self) -> u32 {
        (self.progress() * 100.0).round() as u32
    }

    /// Whether every asset has finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.finished() >= self.total
    }

    /// Loading-screen text, e.g. `Loading... (50%)`.
    #[must_use]
    pub fn status_text(&self) -> String {
        format!("Loading... ({}%)", self.percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_lists_environment_starfield_then_planets() {
        let manifest = AssetManifest::from_options(&AssetOptions::default());
        assert_eq!(manifest.len(), 6);
        assert!(AssetManifest::is_remote(&manifest.items[0]));
        assert_eq!(manifest.items[1], "./stars.jpg");
        assert_eq!(manifest.items[2], "./earth/map.jpg");
        assert!(!AssetManifest::is_remote(&manifest.items[5]));
    }

    #[test]
    fn progress_counts_failures_as_finished() {
        let mut tracker = LoadingTracker::new(4);
        assert_eq!(tracker.status_text(), "Loading... (0%)");
        tracker.item_loaded();
        tracker.item_failed();
        assert_eq!(tracker.percent(), 50);
        assert!(!tracker.is_complete());
        tracker.item_loaded();
        tracker.item_loaded();
        assert!(tracker.is_complete());
        assert_eq!(tracker.failed(), 1);
        assert_eq!(tracker.status_text(), "Loading... (100%)");
    }

    #[test]
    fn percent_rounds() {
        let mut tracker = LoadingTracker::new(3);
        tracker.item_loaded();
        assert_eq!(tracker.percent(), 33);
        tracker.item_loaded();
        assert_eq!(tracker.percent(), 67);
    }

    #[test]
    fn extra_reports_are_ignored() {
        let mut tracker = LoadingTracker::new(1);
        tracker.item_loaded();
        tracker.item_loaded();
        tracker.item_failed();
        assert_eq!(tracker.finished(), 1);
        assert_eq!(tracker.progress(), 1.0);
    }

    #[test]
    fn empty_manifest_is_complete() {
        let tracker = LoadingTracker::new(0);
        assert!(tracker.is_complete());
        assert_eq!(tracker.percent(), 100);
    }
}
