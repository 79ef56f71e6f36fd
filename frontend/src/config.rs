use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Every analytics event shows up in the console locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const TRACKING_ID: &str = "G-26Q381MZD0";
pub const LEAD_CONVERSION_LABEL: &str = "lead_generation";
pub const CONVERSION_CURRENCY: &str = "GBP";
const TAG_SCRIPT_BASE: &str = "https://www.googletagmanager.com/gtag/js";

/// Sections whose time on screen is reported as `section_engagement`.
pub const TRACKED_SECTIONS: [&str; 4] = [
    "hero-section",
    "how-we-are-different-section",
    "how-can-we-help-section",
    "cta-section",
];

pub const BANNER_DELAY_MS: u32 = 4_000;
pub const RETURN_BANNER_DELAY_MS: u32 = 2_500;
pub const RETURN_SUBTITLE_DELAY_MS: u32 = 1_000;
pub const SCROLL_HINT_DELAY_MS: u32 = 15_000;
pub const SCROLL_HINT_FADE_MS: u32 = 1_000;
pub const HERO_LINE_DELAY_MS: u32 = 400;

pub const RENT_MIN: u32 = 500;
pub const RENT_MAX: u32 = 5_000;
pub const RENT_STEP: u32 = 50;
pub const RENT_DEFAULT: u32 = 2_000;

#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsConfig {
    pub tracking_id: String,
    pub lead_conversion_label: String,
    pub currency: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            tracking_id: TRACKING_ID.to_string(),
            lead_conversion_label: LEAD_CONVERSION_LABEL.to_string(),
            currency: CONVERSION_CURRENCY.to_string(),
        }
    }
}

impl AnalyticsConfig {
    pub fn tag_script_url(&self) -> String {
        format!("{}?id={}", TAG_SCRIPT_BASE, urlencoding::encode(&self.tracking_id))
    }

    /// Conversion channel target, `<tracking id>/<label>`.
    pub fn send_target(&self, label: &str) -> String {
        format!("{}/{}", self.tracking_id, label)
    }
}
