//! In-memory stand-ins for the browser capabilities.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::analytics::event::EventParams;
use crate::analytics::transport::{AnalyticsTransport, TransportError};
use crate::analytics::visitor::PageOrigin;
use crate::clock::Clock;
use crate::config::AnalyticsConfig;
use crate::storage::{KeyValueStore, StorageError};

#[derive(Clone, Default)]
pub struct StubOrigin {
    inputs: Rc<RefCell<(String, String)>>,
}

impl StubOrigin {
    pub fn new(referrer: &str, query: &str) -> Self {
        let origin = Self::default();
        origin.set(referrer, query);
        origin
    }

    pub fn set(&self, referrer: &str, query: &str) {
        *self.inputs.borrow_mut() = (referrer.to_string(), query.to_string());
    }
}

impl PageOrigin for StubOrigin {
    fn referrer(&self) -> String {
        self.inputs.borrow().0.clone()
    }

    fn query(&self) -> String {
        self.inputs.borrow().1.clone()
    }

    fn url(&self) -> String {
        format!("https://managedby.app/{}", self.query())
    }
}

/// Becomes ready on `load`, like gtag once its data layer exists.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    ready: Rc<Cell<bool>>,
    loads: Rc<Cell<u32>>,
    fail_loads: Rc<Cell<bool>>,
    fail_sends: Rc<Cell<bool>>,
    sent: Rc<RefCell<Vec<(String, EventParams)>>>,
}

impl RecordingTransport {
    pub fn loads(&self) -> u32 {
        self.loads.get()
    }

    pub fn sent(&self) -> Vec<(String, EventParams)> {
        self.sent.borrow().clone()
    }

    pub fn fail_loads(&self) {
        self.fail_loads.set(true);
    }

    pub fn fail_sends(&self) {
        self.fail_sends.set(true);
    }
}

impl AnalyticsTransport for RecordingTransport {
    fn load(&self, _config: &AnalyticsConfig) -> Result<(), TransportError> {
        self.loads.set(self.loads.get() + 1);
        if self.fail_loads.get() {
            return Err(TransportError::Unavailable("document head"));
        }
        self.ready.set(true);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready.get()
    }

    fn send(&self, name: &str, params: &EventParams) -> Result<(), TransportError> {
        if self.fail_sends.get() {
            return Err(TransportError::Js("blocked by extension".to_string()));
        }
        self.sent.borrow_mut().push((name.to_string(), params.clone()));
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    reject_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }

    pub fn reject_writes(&self) {
        self.reject_writes.set(true);
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes.get() {
            return Err(StorageError::Rejected("QuotaExceededError".to_string()));
        }
        self.insert(key, value);
        Ok(())
    }
}

#[derive(Clone)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    pub fn at(now_ms: i64) -> Self {
        Self { now: Rc::new(Cell::new(now_ms)) }
    }

    pub fn advance(&self, ms: i64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }
}
