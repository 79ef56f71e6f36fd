use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

use log::{debug, info, warn};
use serde_json::json;

use crate::analytics::dwell::SectionDwellObserver;
use crate::analytics::event::{EventParams, CTA_CLICK};
use crate::analytics::tracker::EventTracker;
use crate::analytics::transport::{AnalyticsTransport, GtagTransport};
use crate::analytics::visitor::{BrowserOrigin, PageOrigin, VisitorClassifier};
use crate::clock::{Clock, SystemClock};
use crate::config::AnalyticsConfig;
use crate::consent::{ConsentChoice, ConsentStore};
use crate::interactions::cta::CtaKind;
use crate::interactions::intro::{HeroIntro, IntroHistory};
use crate::interactions::region::PageRegion;
use crate::storage::{KeyValueStore, LocalStorage, SessionStorage};

/// Everything one page view shares: built once at startup and handed to
/// every component. Lives on the UI thread only.
pub struct PageSession {
    pub visitor: Rc<VisitorClassifier>,
    pub consent: ConsentStore,
    pub tracker: EventTracker,
    intro: IntroHistory,
    dwell: RefCell<SectionDwellObserver>,
    clock: Box<dyn Clock>,
}

impl PageSession {
    pub fn new(
        origin: Box<dyn PageOrigin>,
        storage: Box<dyn KeyValueStore>,
        tab_storage: Box<dyn KeyValueStore>,
        transport: Box<dyn AnalyticsTransport>,
        clock: Box<dyn Clock>,
        config: AnalyticsConfig,
    ) -> Self {
        let visitor = Rc::new(VisitorClassifier::new(origin));
        Self {
            tracker: EventTracker::new(transport, visitor.clone(), config),
            visitor,
            consent: ConsentStore::new(storage),
            intro: IntroHistory::new(tab_storage),
            dwell: RefCell::new(SectionDwellObserver::default()),
            clock,
        }
    }

    pub fn browser() -> Self {
        Self::new(
            Box::new(BrowserOrigin),
            Box::new(LocalStorage),
            Box::new(SessionStorage),
            Box::new(GtagTransport),
            Box::new(SystemClock),
            AnalyticsConfig::default(),
        )
    }

    fn tracking_allowed(&self) -> bool {
        self.consent.has_analytics_consent()
    }

    /// Initializes the tracker once consent was given. Returns whether the
    /// currently rendered page should have its listeners bound, which holds
    /// on every call while consent stands, not only the first.
    pub fn start_tracking(&self) -> bool {
        if !self.tracking_allowed() {
            debug!("Consent {:?}, tracking stays off", self.consent.state());
            return false;
        }
        if self.tracker.init() {
            let context = self.visitor.user_context(self.clock.now_ms());
            info!(
                "Visitor {} via {} (consent given at {:?})",
                context.visitor.user_type.as_str(),
                context.visitor.traffic_source.as_str(),
                self.consent.decided_at()
            );
        }
        true
    }

    pub fn hero_intro(&self) -> HeroIntro {
        self.intro.begin()
    }

    pub fn record_consent(&self, choice: ConsentChoice) {
        if let Err(err) = self.consent.save(choice, self.clock.now_ms()) {
            warn!("Could not store consent: {}", err);
        }
    }

    pub fn cta_clicked(&self, kind: CtaKind, region: PageRegion) {
        if !self.tracking_allowed() {
            return;
        }
        debug!("{} link clicked in {}", kind.label(), region.as_str());
        let mut extra = EventParams::new();
        extra.insert("page_region".to_string(), json!(region));
        self.tracker.track_event(kind.label(), CTA_CLICK, extra);
        let label = self.tracker.config().lead_conversion_label.clone();
        self.tracker.track_conversion(&label, 1);
    }

    pub fn modal_opened(&self) {
        if !self.tracking_allowed() {
            return;
        }
        self.tracker.track_event("modal_open", CTA_CLICK, EventParams::new());
    }

    pub fn section_visibility(&self, section: &str, ratio: f64) {
        let report = self
            .dwell
            .borrow_mut()
            .on_intersection(section, ratio, self.clock.now_ms());
        if let Some(report) = report {
            if self.tracking_allowed() {
                self.tracker.track_section_dwell(&report.section, report.seconds);
            }
        }
    }

    /// Forgets sections still on screen, for when their nodes are torn down.
    pub fn clear_dwell(&self) {
        self.dwell.borrow_mut().clear();
    }
}

/// Shared handle to the page session, compared by identity.
#[derive(Clone)]
pub struct SessionHandle(Rc<PageSession>);

impl SessionHandle {
    pub fn new(session: PageSession) -> Self {
        Self(Rc::new(session))
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SessionHandle {
    type Target = PageSession;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualClock, MemoryStorage, RecordingTransport, StubOrigin};
    use crate::consent::ConsentState;

    struct Harness {
        session: PageSession,
        transport: RecordingTransport,
        storage: MemoryStorage,
        tab_storage: MemoryStorage,
        clock: ManualClock,
    }

    fn harness(referrer: &str, query: &str) -> Harness {
        let transport = RecordingTransport::default();
        let storage = MemoryStorage::default();
        let tab_storage = MemoryStorage::default();
        let clock = ManualClock::at(1_000_000);
        let session = PageSession::new(
            Box::new(StubOrigin::new(referrer, query)),
            Box::new(storage.clone()),
            Box::new(tab_storage.clone()),
            Box::new(transport.clone()),
            Box::new(clock.clone()),
            AnalyticsConfig::default(),
        );
        Harness { session, transport, storage, tab_storage, clock }
    }

    #[test]
    fn nothing_loads_without_consent() {
        let h = harness("", "");
        assert!(!h.session.start_tracking());
        assert_eq!(h.transport.loads(), 0);

        h.session.record_consent(ConsentChoice::Declined);
        assert_eq!(h.session.consent.state(), ConsentState::Declined);
        assert!(!h.session.start_tracking());
        h.session.cta_clicked(CtaKind::Email, PageRegion::Footer);
        assert_eq!(h.transport.loads(), 0);
        assert!(h.transport.sent().is_empty());
    }

    #[test]
    fn every_mount_with_consent_binds_but_transport_loads_once() {
        let h = harness("", "");
        h.storage.insert("cookieConsent", "accepted");
        assert!(h.session.start_tracking());
        // Landing remounted after navigating away and back
        h.session.clear_dwell();
        assert!(h.session.start_tracking());
        assert_eq!(h.transport.loads(), 1);
    }

    #[test]
    fn remounted_page_still_tracks_clicks_and_dwell() {
        let h = harness("", "");
        h.storage.insert("cookieConsent", "accepted");
        assert!(h.session.start_tracking());
        h.session.section_visibility("hero-section", 1.0);
        h.clock.advance(60_000);

        h.session.clear_dwell();
        assert!(h.session.start_tracking());
        h.session.section_visibility("hero-section", 1.0);
        h.clock.advance(2_000);
        h.session.section_visibility("hero-section", 0.0);
        h.session.cta_clicked(CtaKind::Email, PageRegion::Footer);

        let sent = h.transport.sent();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[0].0, "section_engagement");
        assert_eq!(sent[0].1["value"], json!(2));
        assert_eq!(sent[1].1["event_label"], json!("email"));
        assert_eq!(sent[2].0, "conversion");
    }

    #[test]
    fn accepting_consent_records_time_and_allows_tracking() {
        let h = harness("", "");
        h.session.record_consent(ConsentChoice::Accepted);
        assert_eq!(h.storage.get("cookieConsent").as_deref(), Some("accepted"));
        assert_eq!(h.session.consent.decided_at(), Some(1_000_000));
        assert!(h.session.start_tracking());
        assert!(h.session.tracker.is_loaded());

        h.session.record_consent(ConsentChoice::Accepted);
        assert!(h.session.start_tracking());
        assert_eq!(h.transport.loads(), 1);
    }

    #[test]
    fn storage_failure_leaves_tracking_off() {
        let h = harness("", "");
        h.storage.reject_writes();
        h.session.record_consent(ConsentChoice::Accepted);
        assert!(!h.session.start_tracking());
        assert_eq!(h.transport.loads(), 0);
    }

    #[test]
    fn whatsapp_click_in_hero_tracks_event_then_conversion() {
        let h = harness("https://www.google.co.uk/search", "?ref=international");
        h.session.record_consent(ConsentChoice::Accepted);
        h.session.start_tracking();

        h.session.cta_clicked(CtaKind::Whatsapp, PageRegion::Hero);

        let sent = h.transport.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].0, "cta_click");
        assert_eq!(sent[0].1["event_label"], json!("whatsapp"));
        assert_eq!(sent[0].1["page_region"], json!("hero"));
        assert_eq!(sent[0].1["user_type"], json!("international_landlord"));
        assert_eq!(sent[1].0, "conversion");
        assert_eq!(sent[1].1["send_to"], json!("G-26Q381MZD0/lead_generation"));
        assert_eq!(sent[1].1["traffic_source"], json!("google_ads"));
    }

    #[test]
    fn consent_is_rechecked_before_each_call() {
        let h = harness("", "");
        h.session.record_consent(ConsentChoice::Accepted);
        h.session.start_tracking();
        h.storage.insert("cookieConsent", "declined");

        h.session.modal_opened();
        h.session.cta_clicked(CtaKind::Calendly, PageRegion::Cta);
        assert!(h.transport.sent().is_empty());
    }

    #[test]
    fn modal_open_is_tracked() {
        let h = harness("", "");
        h.session.record_consent(ConsentChoice::Accepted);
        h.session.start_tracking();
        h.session.modal_opened();
        let sent = h.transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].1["event_label"], json!("modal_open"));
    }

    #[test]
    fn section_dwell_flows_to_tracker() {
        let h = harness("", "");
        h.session.record_consent(ConsentChoice::Accepted);
        h.session.start_tracking();

        h.session.section_visibility("hero-section", 0.75);
        h.clock.advance(3_400);
        h.session.section_visibility("hero-section", 0.2);

        h.session.section_visibility("cta-section", 1.0);
        h.clock.advance(900);
        h.session.section_visibility("cta-section", 0.0);

        let sent = h.transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "section_engagement");
        assert_eq!(sent[0].1["event_label"], json!("hero-section"));
        assert_eq!(sent[0].1["value"], json!(3));
    }

    #[test]
    fn every_cta_kind_converts() {
        let h = harness("", "");
        h.session.record_consent(ConsentChoice::Accepted);
        h.session.start_tracking();
        for kind in [CtaKind::Whatsapp, CtaKind::Calendly, CtaKind::Email] {
            h.session.cta_clicked(kind, PageRegion::Cta);
        }
        let names: Vec<String> = h.transport.sent().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            ["cta_click", "conversion", "cta_click", "conversion", "cta_click", "conversion"]
        );
    }

    #[test]
    fn hero_intro_is_full_once_per_tab() {
        let h = harness("", "");
        assert_eq!(h.session.hero_intro(), HeroIntro::FirstVisit);
        assert_eq!(h.tab_storage.get("heroAnimationPlayed").as_deref(), Some("true"));
        assert_eq!(h.session.hero_intro(), HeroIntro::ReturnVisit);
        assert!(h.storage.get("heroAnimationPlayed").is_none());
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = SessionHandle::new(harness("", "").session);
        let b = SessionHandle::new(harness("", "").session);
        assert!(a == a.clone());
        assert!(a != b);
    }
}
