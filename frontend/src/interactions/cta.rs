/// Lead-generating links the page tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaKind {
    Whatsapp,
    Calendly,
    Email,
}

pub struct CtaRule {
    pub href_fragment: &'static str,
    pub kind: CtaKind,
}

pub const CTA_RULES: [CtaRule; 3] = [
    CtaRule { href_fragment: "wa.me", kind: CtaKind::Whatsapp },
    CtaRule { href_fragment: "calendly", kind: CtaKind::Calendly },
    CtaRule { href_fragment: "mailto:", kind: CtaKind::Email },
];

impl CtaRule {
    pub fn selector(&self) -> String {
        format!("a[href*=\"{}\"]", self.href_fragment)
    }
}

/// One selector matching every tracked link.
pub fn cta_selector() -> String {
    CTA_RULES
        .iter()
        .map(CtaRule::selector)
        .collect::<Vec<_>>()
        .join(", ")
}

impl CtaKind {
    /// First matching rule wins, so a link never counts twice.
    pub fn from_href(href: &str) -> Option<Self> {
        CTA_RULES
            .iter()
            .find(|rule| href.contains(rule.href_fragment))
            .map(|rule| rule.kind)
    }

    pub fn label(self) -> &'static str {
        match self {
            CtaKind::Whatsapp => "whatsapp",
            CtaKind::Calendly => "calendly",
            CtaKind::Email => "email",
        }
    }
}
