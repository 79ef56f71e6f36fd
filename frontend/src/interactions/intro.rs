use log::{debug, warn};

use crate::config;
use crate::storage::KeyValueStore;

const HERO_PLAYED_KEY: &str = "heroAnimationPlayed";

/// Which hero animation this page view gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroIntro {
    /// Headline lines revealed one by one, subtitle last.
    FirstVisit,
    /// Headline shown at once, subtitle after a short pause.
    ReturnVisit,
}

impl HeroIntro {
    /// Reveal stage the hero starts at. Stages `0..lines` are headline lines,
    /// stage `lines` is the subtitle.
    pub fn first_stage(self, lines: usize) -> usize {
        match self {
            HeroIntro::FirstVisit => 0,
            HeroIntro::ReturnVisit => lines,
        }
    }

    pub fn step_delay_ms(self) -> u32 {
        match self {
            HeroIntro::FirstVisit => config::HERO_LINE_DELAY_MS,
            HeroIntro::ReturnVisit => config::RETURN_SUBTITLE_DELAY_MS,
        }
    }

    pub fn banner_delay_ms(self) -> u32 {
        match self {
            HeroIntro::FirstVisit => config::BANNER_DELAY_MS,
            HeroIntro::ReturnVisit => config::RETURN_BANNER_DELAY_MS,
        }
    }
}

/// Remembers, for the lifetime of the tab, that the full intro was played.
pub struct IntroHistory {
    storage: Box<dyn KeyValueStore>,
}

impl IntroHistory {
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Picks the intro for this view and marks the full one as played.
    pub fn begin(&self) -> HeroIntro {
        if self.storage.get_item(HERO_PLAYED_KEY).is_some() {
            debug!("Hero intro already played this session");
            return HeroIntro::ReturnVisit;
        }
        if let Err(err) = self.storage.set_item(HERO_PLAYED_KEY, "true") {
            warn!("Could not remember hero intro: {}", err);
        }
        HeroIntro::FirstVisit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStorage;

    #[test]
    fn first_view_plays_full_intro_and_sets_flag() {
        let storage = MemoryStorage::default();
        let history = IntroHistory::new(Box::new(storage.clone()));

        assert_eq!(history.begin(), HeroIntro::FirstVisit);
        assert_eq!(storage.get("heroAnimationPlayed").as_deref(), Some("true"));
    }

    #[test]
    fn later_views_in_the_same_tab_get_the_short_intro() {
        let storage = MemoryStorage::default();
        let history = IntroHistory::new(Box::new(storage.clone()));
        history.begin();

        assert_eq!(history.begin(), HeroIntro::ReturnVisit);
        let reloaded = IntroHistory::new(Box::new(storage));
        assert_eq!(reloaded.begin(), HeroIntro::ReturnVisit);
    }

    #[test]
    fn any_stored_value_counts_as_played() {
        let storage = MemoryStorage::default();
        storage.insert("heroAnimationPlayed", "yes");
        assert_eq!(IntroHistory::new(Box::new(storage)).begin(), HeroIntro::ReturnVisit);
    }

    #[test]
    fn unwritable_storage_still_plays_full_intro() {
        let storage = MemoryStorage::default();
        storage.reject_writes();
        let history = IntroHistory::new(Box::new(storage));
        assert_eq!(history.begin(), HeroIntro::FirstVisit);
        assert_eq!(history.begin(), HeroIntro::FirstVisit);
    }

    #[test]
    fn timings_follow_the_intro() {
        assert_eq!(HeroIntro::FirstVisit.first_stage(3), 0);
        assert_eq!(HeroIntro::ReturnVisit.first_stage(3), 3);
        assert_eq!(HeroIntro::FirstVisit.banner_delay_ms(), 4_000);
        assert_eq!(HeroIntro::ReturnVisit.banner_delay_ms(), 2_500);
        assert_eq!(HeroIntro::FirstVisit.step_delay_ms(), 400);
        assert_eq!(HeroIntro::ReturnVisit.step_delay_ms(), 1_000);
    }
}
