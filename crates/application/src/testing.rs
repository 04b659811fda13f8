//! Recording fakes for controller tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use domain::{AddressCandidate, Origin, RouteGeometry};
use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::error::ApplicationError;
use crate::ports::{
    ArtifactHandle, ArtifactStyle, GeocodingPort, MapSurfacePort, SuggestionViewPort,
};

pub fn candidate(id: usize, street: &str, city: &str) -> AddressCandidate {
    AddressCandidate {
        id,
        street: street.to_string(),
        house_number: String::new(),
        postal_code: String::new(),
        city: city.to_string(),
        location: None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    ShowLoading(Origin),
    HideLoading(Origin),
    Render(Origin, Vec<String>),
    Clear(Origin),
    SetField(Origin, String),
}

/// Suggestion view that logs every call
#[derive(Debug, Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().clone()
    }

    pub fn loading_visible(&self, origin: Origin) -> bool {
        self.events.lock().iter().fold(false, |visible, event| match event {
            ViewEvent::ShowLoading(o) if *o == origin => true,
            ViewEvent::HideLoading(o) if *o == origin => false,
            _ => visible,
        })
    }

    /// Labels currently rendered for `origin`, `None` when cleared or never rendered
    pub fn rendered(&self, origin: Origin) -> Option<Vec<String>> {
        self.events.lock().iter().fold(None, |current, event| match event {
            ViewEvent::Render(o, labels) if *o == origin => Some(labels.clone()),
            ViewEvent::Clear(o) if *o == origin => None,
            _ => current,
        })
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().push(event);
    }
}

impl SuggestionViewPort for RecordingView {
    fn show_loading(&self, origin: Origin) {
        self.push(ViewEvent::ShowLoading(origin));
    }

    fn hide_loading(&self, origin: Origin) {
        self.push(ViewEvent::HideLoading(origin));
    }

    fn render_candidates(&self, origin: Origin, candidates: &[AddressCandidate]) {
        let labels = candidates.iter().map(AddressCandidate::label).collect();
        self.push(ViewEvent::Render(origin, labels));
    }

    fn clear_candidates(&self, origin: Origin) {
        self.push(ViewEvent::Clear(origin));
    }

    fn set_field_value(&self, origin: Origin, value: &str) {
        self.push(ViewEvent::SetField(origin, value.to_string()));
    }
}

/// Map surface that tracks which artifacts are live
#[derive(Debug, Default)]
pub struct RecordingMapSurface {
    next_id: AtomicU64,
    live: Mutex<Vec<ArtifactHandle>>,
    fitted: Mutex<Vec<ArtifactHandle>>,
}

impl RecordingMapSurface {
    pub fn live(&self) -> Vec<ArtifactHandle> {
        self.live.lock().clone()
    }

    pub fn live_count(&self) -> usize {
        self.live.lock().len()
    }

    pub fn fitted(&self) -> Vec<ArtifactHandle> {
        self.fitted.lock().clone()
    }
}

impl MapSurfacePort for RecordingMapSurface {
    fn add_artifact(&self, _geometry: &RouteGeometry, _style: &ArtifactStyle) -> ArtifactHandle {
        let handle = ArtifactHandle::new(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        self.live.lock().push(handle);
        handle
    }

    fn remove_artifact(&self, handle: ArtifactHandle) {
        self.live.lock().retain(|h| *h != handle);
    }

    fn fit_bounds(&self, handle: ArtifactHandle) {
        self.fitted.lock().push(handle);
    }
}

type Gate = oneshot::Sender<Result<Vec<AddressCandidate>, ApplicationError>>;

/// Geocoder whose responses are released by the test, one request at a time
#[derive(Debug, Default)]
pub struct GatedGeocoder {
    requests: Mutex<Vec<String>>,
    gates: Mutex<HashMap<usize, Gate>>,
}

impl GatedGeocoder {
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    /// Yield until at least `count` requests have been issued
    pub async fn wait_for_requests(&self, count: usize) {
        loop {
            let issued = self.requests.lock().len();
            if issued >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }

    /// Answer the request with the given index
    pub fn release(&self, index: usize, result: Result<Vec<AddressCandidate>, ApplicationError>) {
        if let Some(gate) = self.gates.lock().remove(&index) {
            let _ = gate.send(result);
        }
    }
}

#[async_trait]
impl GeocodingPort for GatedGeocoder {
    async fn suggest(
        &self,
        query: &str,
        _limit: usize,
    ) -> Result<Vec<AddressCandidate>, ApplicationError> {
        let (gate, response) = oneshot::channel();
        {
            let mut requests = self.requests.lock();
            self.gates.lock().insert(requests.len(), gate);
            requests.push(query.to_string());
        }
        response
            .await
            .unwrap_or_else(|_| Err(ApplicationError::Internal("gate dropped".to_string())))
    }
}
