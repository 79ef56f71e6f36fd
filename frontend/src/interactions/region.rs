use serde::Serialize;

/// Page area a click came from, reported with CTA events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageRegion {
    Hero,
    Principles,
    Pricing,
    Cta,
    Footer,
    Other,
}

const REGION_SELECTORS: [(&str, PageRegion); 6] = [
    ("#hero-section", PageRegion::Hero),
    ("#how-we-are-different-section", PageRegion::Principles),
    ("#how-can-we-help-section", PageRegion::Pricing),
    ("#pricing-section", PageRegion::Pricing),
    ("#cta-section", PageRegion::Cta),
    ("footer", PageRegion::Footer),
];

impl PageRegion {
    /// `inside` answers whether the clicked element has an ancestor (or is
    /// itself) matching the given selector.
    pub fn resolve(mut inside: impl FnMut(&str) -> bool) -> Self {
        REGION_SELECTORS
            .iter()
            .find(|(selector, _)| inside(selector))
            .map(|(_, region)| *region)
            .unwrap_or(PageRegion::Other)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PageRegion::Hero => "hero",
            PageRegion::Principles => "principles",
            PageRegion::Pricing => "pricing",
            PageRegion::Cta => "cta",
            PageRegion::Footer => "footer",
            PageRegion::Other => "other",
        }
    }
}
