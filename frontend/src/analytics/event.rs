use serde_json::{json, Map, Value};

use super::visitor::VisitorContext;

pub type EventParams = Map<String, Value>;

pub const ENGAGEMENT: &str = "engagement";
pub const CTA_CLICK: &str = "cta_click";
pub const CONVERSION: &str = "conversion";
pub const SECTION_ENGAGEMENT: &str = "section_engagement";

/// One outbound analytics record. Built per interaction and dropped after
/// it has been handed to the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackedEvent {
    pub name: String,
    pub category: Option<String>,
    pub label: Option<String>,
    pub value: u64,
    pub context: VisitorContext,
    pub extra: EventParams,
}

impl TrackedEvent {
    pub fn engagement(action: &str, label: &str, context: VisitorContext) -> Self {
        Self {
            name: action.to_string(),
            category: Some(ENGAGEMENT.to_string()),
            label: Some(label.to_string()),
            value: 1,
            context,
            extra: EventParams::new(),
        }
    }

    pub fn conversion(send_to: String, value: u64, currency: &str, context: VisitorContext) -> Self {
        let mut extra = EventParams::new();
        extra.insert("send_to".to_string(), json!(send_to));
        extra.insert("currency".to_string(), json!(currency));
        Self {
            name: CONVERSION.to_string(),
            category: None,
            label: None,
            value,
            context,
            extra,
        }
    }

    pub fn with_extra(mut self, extra: EventParams) -> Self {
        self.extra.extend(extra);
        self
    }

    /// Flattens the record into the property map the transport sends.
    /// Caller-supplied extras are applied last and win on key clashes.
    pub fn params(&self) -> EventParams {
        let mut params = EventParams::new();
        if let Some(category) = &self.category {
            params.insert("event_category".to_string(), json!(category));
        }
        if let Some(label) = &self.label {
            params.insert("event_label".to_string(), json!(label));
        }
        params.insert("value".to_string(), json!(self.value));
        params.insert("user_type".to_string(), json!(self.context.user_type));
        params.insert("traffic_source".to_string(), json!(self.context.traffic_source));
        for (key, value) in &self.extra {
            params.insert(key.clone(), value.clone());
        }
        params
    }
}
