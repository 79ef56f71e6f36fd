use log::info;

use crate::storage::{KeyValueStore, StorageError};

const CONSENT_KEY: &str = "cookieConsent";
const CONSENT_TIMESTAMP_KEY: &str = "consentTimestamp";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentState {
    Unset,
    Accepted,
    Declined,
}

impl ConsentState {
    fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("accepted") => ConsentState::Accepted,
            Some("declined") => ConsentState::Declined,
            _ => ConsentState::Unset,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentChoice {
    Accepted,
    Declined,
}

impl ConsentChoice {
    fn as_str(self) -> &'static str {
        match self {
            ConsentChoice::Accepted => "accepted",
            ConsentChoice::Declined => "declined",
        }
    }
}

pub struct ConsentStore {
    storage: Box<dyn KeyValueStore>,
}

impl ConsentStore {
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Read fresh from storage every time; another tab may have answered.
    pub fn state(&self) -> ConsentState {
        ConsentState::from_stored(self.storage.get_item(CONSENT_KEY).as_deref())
    }

    pub fn has_analytics_consent(&self) -> bool {
        self.state() == ConsentState::Accepted
    }

    pub fn needs_decision(&self) -> bool {
        self.state() == ConsentState::Unset
    }

    pub fn decided_at(&self) -> Option<i64> {
        self.storage
            .get_item(CONSENT_TIMESTAMP_KEY)
            .and_then(|ts| ts.parse().ok())
    }

    pub fn save(&self, choice: ConsentChoice, now_ms: i64) -> Result<(), StorageError> {
        self.storage.set_item(CONSENT_KEY, choice.as_str())?;
        self.storage.set_item(CONSENT_TIMESTAMP_KEY, &now_ms.to_string())?;
        info!("Cookie consent {}", choice.as_str());
        Ok(())
    }
}
