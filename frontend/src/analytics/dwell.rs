use std::collections::HashMap;

/// Intersection ratio at or above which a section counts as on screen.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;
/// Dwell has to exceed this before it gets reported.
pub const MIN_DWELL_MS: i64 = 1_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DwellReport {
    pub section: String,
    pub seconds: u64,
}

/// Tracks when each watched section became visible. An entry lives only
/// between a section entering and leaving the viewport.
#[derive(Debug, Default)]
pub struct SectionDwellObserver {
    entered_at: HashMap<String, i64>,
}

impl SectionDwellObserver {
    pub fn on_intersection(&mut self, section: &str, ratio: f64, now_ms: i64) -> Option<DwellReport> {
        self.on_visibility(section, ratio >= VISIBILITY_THRESHOLD, now_ms)
    }

    pub fn on_visibility(&mut self, section: &str, visible: bool, now_ms: i64) -> Option<DwellReport> {
        if visible {
            self.entered_at.entry(section.to_string()).or_insert(now_ms);
            return None;
        }

        let entered = self.entered_at.remove(section)?;
        let elapsed = now_ms - entered;
        if elapsed <= MIN_DWELL_MS {
            return None;
        }
        Some(DwellReport {
            section: section.to_string(),
            seconds: (elapsed as f64 / 1000.0).round() as u64,
        })
    }

    pub fn clear(&mut self) {
        self.entered_at.clear();
    }

    #[cfg(test)]
    pub fn is_visible(&self, section: &str) -> bool {
        self.entered_at.contains_key(section)
    }
}
