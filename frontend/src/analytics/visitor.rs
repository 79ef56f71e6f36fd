use std::cell::Cell;

use serde::Serialize;
use web_sys::window;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    InternationalLandlord,
    ExistingLandlord,
    AccidentalLandlord,
    Unknown,
}

impl UserType {
    pub fn as_str(self) -> &'static str {
        match self {
            UserType::InternationalLandlord => "international_landlord",
            UserType::ExistingLandlord => "existing_landlord",
            UserType::AccidentalLandlord => "accidental_landlord",
            UserType::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficSource {
    GoogleAds,
    Facebook,
    Linkedin,
    Referral,
    Direct,
}

impl TrafficSource {
    pub fn as_str(self) -> &'static str {
        match self {
            TrafficSource::GoogleAds => "google_ads",
            TrafficSource::Facebook => "facebook",
            TrafficSource::Linkedin => "linkedin",
            TrafficSource::Referral => "referral",
            TrafficSource::Direct => "direct",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VisitorContext {
    pub user_type: UserType,
    pub traffic_source: TrafficSource,
}

/// Visitor context plus where and when it was observed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UserContext {
    #[serde(flatten)]
    pub visitor: VisitorContext,
    pub timestamp: i64,
    pub url: String,
    pub referrer: String,
}

/// Where the visitor came from: the raw inputs classification reads.
pub trait PageOrigin {
    fn referrer(&self) -> String;
    fn query(&self) -> String;
    fn url(&self) -> String;
}

pub struct BrowserOrigin;

impl PageOrigin for BrowserOrigin {
    fn referrer(&self) -> String {
        window()
            .and_then(|w| w.document())
            .map(|d| d.referrer())
            .unwrap_or_default()
    }

    fn query(&self) -> String {
        window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }

    fn url(&self) -> String {
        window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }
}

pub fn classify_user_type(referrer: &str, query: &str) -> UserType {
    let referrer = referrer.to_lowercase();
    let query = query.to_lowercase();

    if referrer.contains("google.co") && query.contains("international") {
        UserType::InternationalLandlord
    } else if referrer.contains("property") {
        UserType::ExistingLandlord
    } else if query.contains("inherited") {
        UserType::AccidentalLandlord
    } else {
        UserType::Unknown
    }
}

pub fn classify_traffic_source(referrer: &str) -> TrafficSource {
    let referrer = referrer.to_lowercase();

    if referrer.contains("google.") {
        TrafficSource::GoogleAds
    } else if referrer.contains("facebook") {
        TrafficSource::Facebook
    } else if referrer.contains("linkedin") {
        TrafficSource::Linkedin
    } else if !referrer.is_empty() {
        TrafficSource::Referral
    } else {
        TrafficSource::Direct
    }
}

/// Lazily classifies the visitor and keeps the first answer for the rest of
/// the page session, even if the origin changes underneath it.
pub struct VisitorClassifier {
    origin: Box<dyn PageOrigin>,
    user_type: Cell<Option<UserType>>,
    traffic_source: Cell<Option<TrafficSource>>,
}

impl VisitorClassifier {
    pub fn new(origin: Box<dyn PageOrigin>) -> Self {
        Self {
            origin,
            user_type: Cell::new(None),
            traffic_source: Cell::new(None),
        }
    }

    pub fn user_type(&self) -> UserType {
        if let Some(user_type) = self.user_type.get() {
            return user_type;
        }
        let user_type = classify_user_type(&self.origin.referrer(), &self.origin.query());
        self.user_type.set(Some(user_type));
        user_type
    }

    pub fn traffic_source(&self) -> TrafficSource {
        if let Some(source) = self.traffic_source.get() {
            return source;
        }
        let source = classify_traffic_source(&self.origin.referrer());
        self.traffic_source.set(Some(source));
        source
    }

    pub fn context(&self) -> VisitorContext {
        VisitorContext {
            user_type: self.user_type(),
            traffic_source: self.traffic_source(),
        }
    }

    pub fn user_context(&self, now_ms: i64) -> UserContext {
        UserContext {
            visitor: self.context(),
            timestamp: now_ms,
            url: self.origin.url(),
            referrer: self.origin.referrer(),
        }
    }

    /// Drops the cached labels so the next read classifies again.
    #[cfg(test)]
    pub fn reset_cache(&self) {
        self.user_type.set(None);
        self.traffic_source.set(None);
    }
}
