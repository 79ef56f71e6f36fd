use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info, warn};
use serde_json::{json, Value};

use super::event::{EventParams, TrackedEvent, SECTION_ENGAGEMENT};
use super::transport::AnalyticsTransport;
use super::visitor::VisitorClassifier;
use crate::config::AnalyticsConfig;

/// Formats analytics events, tags them with the visitor context and hands
/// them to the transport. Every call is fire-and-forget.
pub struct EventTracker {
    transport: Box<dyn AnalyticsTransport>,
    visitor: Rc<VisitorClassifier>,
    config: AnalyticsConfig,
    loaded: Cell<bool>,
}

impl EventTracker {
    pub fn new(
        transport: Box<dyn AnalyticsTransport>,
        visitor: Rc<VisitorClassifier>,
        config: AnalyticsConfig,
    ) -> Self {
        Self {
            transport,
            visitor,
            config,
            loaded: Cell::new(false),
        }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.loaded.get()
    }

    /// Loads the transport once. Returns `true` only for the call that did
    /// the loading.
    pub fn init(&self) -> bool {
        if self.loaded.get() {
            return false;
        }
        // No retry on failure: events simply stay no-ops for this page
        if let Err(err) = self.transport.load(&self.config) {
            warn!("Analytics transport failed to load: {}", err);
        }
        self.loaded.set(true);
        info!("Analytics initialized for {}", self.config.tracking_id);
        true
    }

    pub fn track_event(&self, label: &str, action: &str, extra: EventParams) {
        if !self.transport.is_ready() {
            return;
        }
        let event = TrackedEvent::engagement(action, label, self.visitor.context()).with_extra(extra);
        self.dispatch(event);
    }

    pub fn track_conversion(&self, label: &str, value: u64) {
        if !self.transport.is_ready() {
            return;
        }
        let event = TrackedEvent::conversion(
            self.config.send_target(label),
            value,
            &self.config.currency,
            self.visitor.context(),
        );
        self.dispatch(event);
    }

    pub fn track_section_dwell(&self, section: &str, seconds: u64) {
        let mut extra = EventParams::new();
        extra.insert("value".to_string(), json!(seconds));
        self.track_event(section, SECTION_ENGAGEMENT, extra);
    }

    fn dispatch(&self, event: TrackedEvent) {
        let params = event.params();
        debug!("analytics event {} {}", event.name, Value::Object(params.clone()));
        if let Err(err) = self.transport.send(&event.name, &params) {
            debug!("Dropped analytics event {}: {}", event.name, err);
        }
    }
}
