// Live region - polite announcements for every committed transition
use crate::model::Section;
use crate::state::navigation::{NavigationObserver, NavigationSnapshot};
use eframe::egui::accesskit::Live;
use tracing::info;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Politeness {
    #[default]
    Polite,
    Assertive,
}

impl Politeness {
    /// Live setting handed to screen readers through accesskit.
    pub fn live(self) -> Live {
        match self {
            Politeness::Polite => Live::Polite,
            Politeness::Assertive => Live::Assertive,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub politeness: Politeness,
}

#[derive(Debug, Default)]
pub struct LiveRegion {
    latest: Option<Announcement>,
    count: usize,
}

impl LiveRegion {
    pub fn latest(&self) -> Option<&Announcement> {
        self.latest.as_ref()
    }

    /// Number of announcements made so far.
    #[cfg(test)]
    pub fn count(&self) -> usize {
        self.count
    }
}

pub fn announcement_text(snapshot: &NavigationSnapshot, sections: &[Section]) -> String {
    let position = format!("Section {} of {}", snapshot.current + 1, snapshot.total);
    match sections.get(snapshot.current) {
        Some(section) => format!("{position}: {}", section.title),
        None => position,
    }
}

impl NavigationObserver for LiveRegion {
    fn on_navigate(&mut self, snapshot: &NavigationSnapshot, sections: &[Section]) {
        let text = announcement_text(snapshot, sections);
        info!(announcement = %text, "live region");
        self.latest = Some(Announcement {
            text,
            politeness: Politeness::Polite,
        });
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_sections;
    use crate::state::navigation::NavigationStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_announces_each_commit() {
        let region = Rc::new(RefCell::new(LiveRegion::default()));
        let mut store = NavigationStore::new(default_sections()).expect("non-empty deck");
        store.subscribe(region.clone());

        assert!(region.borrow().latest().is_none());

        store.next();
        {
            let region = region.borrow();
            let latest = region.latest().expect("announced");
            assert_eq!(latest.text, "Section 2 of 4: Services");
            assert_eq!(latest.politeness, Politeness::Polite);
        }

        // Rejected while locked: nothing new is announced.
        store.next();
        assert_eq!(region.borrow().count(), 1);

        store.complete_transition();
        store.go_to(3);
        assert_eq!(
            region.borrow().latest().map(|a| a.text.as_str()),
            Some("Section 4 of 4: Contact")
        );
        assert_eq!(region.borrow().count(), 2);
    }

    #[test]
    fn test_politeness_maps_to_live_setting() {
        assert_eq!(Politeness::default().live(), Live::Polite);
        assert_eq!(Politeness::Assertive.live(), Live::Assertive);
    }
}
