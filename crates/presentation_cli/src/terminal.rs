//! Terminal implementations of the UI ports

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use application::{ArtifactHandle, ArtifactStyle, MapSurfacePort, SuggestionViewPort};
use domain::{AddressCandidate, Bounds, Origin, RouteGeometry};
use parking_lot::Mutex;

/// Prints candidate lists and field updates to stdout
#[derive(Debug, Default)]
pub struct TerminalSuggestionView {
    loading: Mutex<Vec<Origin>>,
}

impl TerminalSuggestionView {
    /// Whether a search is running for `origin`
    pub fn is_loading(&self, origin: Origin) -> bool {
        self.loading.lock().contains(&origin)
    }
}

impl SuggestionViewPort for TerminalSuggestionView {
    fn show_loading(&self, origin: Origin) {
        let mut loading = self.loading.lock();
        if !loading.contains(&origin) {
            loading.push(origin);
        }
        tracing::debug!(%origin, "Searching addresses");
    }

    fn hide_loading(&self, origin: Origin) {
        self.loading.lock().retain(|o| *o != origin);
    }

    fn render_candidates(&self, origin: Origin, candidates: &[AddressCandidate]) {
        if candidates.is_empty() {
            return;
        }
        println!("📍 Suggestions for {origin}:");
        for candidate in candidates {
            println!("  [{}] {}", candidate.id, candidate.label());
        }
    }

    fn clear_candidates(&self, _origin: Origin) {}

    fn set_field_value(&self, origin: Origin, value: &str) {
        println!("✅ {origin}: {value}");
    }
}

/// Keeps route artifacts in memory instead of drawing them
#[derive(Debug, Default)]
pub struct TerminalMapSurface {
    next_id: AtomicU64,
    artifacts: Mutex<HashMap<ArtifactHandle, (RouteGeometry, ArtifactStyle)>>,
    view: Mutex<Option<Bounds>>,
}

impl TerminalMapSurface {
    /// Geometry and style of a live artifact
    pub fn artifact(&self, handle: ArtifactHandle) -> Option<(RouteGeometry, ArtifactStyle)> {
        self.artifacts.lock().get(&handle).cloned()
    }

    /// Number of artifacts currently on the surface
    pub fn live_count(&self) -> usize {
        self.artifacts.lock().len()
    }

    /// Area the view was last fitted to
    pub fn view(&self) -> Option<Bounds> {
        *self.view.lock()
    }
}

impl MapSurfacePort for TerminalMapSurface {
    fn add_artifact(&self, geometry: &RouteGeometry, style: &ArtifactStyle) -> ArtifactHandle {
        let handle = ArtifactHandle::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.artifacts
            .lock()
            .insert(handle, (geometry.clone(), style.clone()));
        handle
    }

    fn remove_artifact(&self, handle: ArtifactHandle) {
        self.artifacts.lock().remove(&handle);
    }

    fn fit_bounds(&self, handle: ArtifactHandle) {
        let bounds = self
            .artifacts
            .lock()
            .get(&handle)
            .and_then(|(geometry, _)| geometry.bounds());
        *self.view.lock() = bounds;
    }
}
