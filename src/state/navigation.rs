// Navigation state - the single writer behind the section deck
//
// Every visual consumer (section transforms, progress, dots, live region)
// reads from here; only the commands below mutate it.
use crate::error::EmptyDeck;
use crate::model::Section;
use crate::state::normalizer::Intent;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    None,
    Forward,
    Backward,
}

/// Immutable view of the store handed to observers and views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub current: usize,
    pub previous: usize,
    pub direction: Direction,
    pub locked: bool,
    pub total: usize,
}

impl NavigationSnapshot {
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.total
    }

    /// Fraction of the deck reached, `(current + 1) / total`.
    pub fn progress(&self) -> f32 {
        (self.current + 1) as f32 / self.total as f32
    }
}

/// Read-only subscriber notified synchronously after each committed change.
pub trait NavigationObserver {
    fn on_navigate(&mut self, snapshot: &NavigationSnapshot, sections: &[Section]);

    /// Called when the transition lock is released.
    fn on_settle(&mut self, _snapshot: &NavigationSnapshot) {}
}

impl<T: NavigationObserver> NavigationObserver for Rc<RefCell<T>> {
    fn on_navigate(&mut self, snapshot: &NavigationSnapshot, sections: &[Section]) {
        self.borrow_mut().on_navigate(snapshot, sections);
    }

    fn on_settle(&mut self, snapshot: &NavigationSnapshot) {
        self.borrow_mut().on_settle(snapshot);
    }
}

pub struct NavigationStore {
    sections: Vec<Section>,
    current: usize,
    previous: usize,
    direction: Direction,
    locked: bool,
    observers: Vec<Box<dyn NavigationObserver>>,
}

impl NavigationStore {
    pub fn new(sections: Vec<Section>) -> Result<Self, EmptyDeck> {
        if sections.is_empty() {
            return Err(EmptyDeck);
        }
        Ok(Self {
            sections: crate::model::index_sections(sections),
            current: 0,
            previous: 0,
            direction: Direction::None,
            locked: false,
            observers: Vec::new(),
        })
    }

    pub fn subscribe(&mut self, observer: impl NavigationObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // --- Commands ---

    /// Moves to `index`. Returns `false` (and changes nothing) when the index
    /// is out of range, the lock is held, or `index` is already current.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.sections.len() {
            debug!(index, total = self.sections.len(), "go_to ignored: out of range");
            return false;
        }
        if self.locked {
            debug!(index, "go_to ignored: transition in progress");
            return false;
        }
        if index == self.current {
            return false;
        }

        self.previous = self.current;
        self.current = index;
        self.direction = if index > self.previous {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.locked = true;

        info!(
            from = self.previous,
            to = self.current,
            direction = ?self.direction,
            "section transition committed"
        );
        self.notify_navigate();
        true
    }

    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.go_to(self.current + 1)
    }

    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.go_to(self.current - 1)
    }

    pub fn go_to_id(&mut self, id: &str) -> bool {
        match self.sections.iter().position(|s| s.id == id) {
            Some(index) => self.go_to(index),
            None => {
                debug!(id, "go_to_id ignored: unknown section");
                false
            }
        }
    }

    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Advance => self.next(),
            Intent::Retreat => self.previous(),
            Intent::First => self.go_to(0),
            Intent::Last => self.go_to(self.sections.len() - 1),
        }
    }

    /// Releases the transition lock. Safe to call any number of times.
    pub fn complete_transition(&mut self) {
        if !self.locked {
            return;
        }
        self.locked = false;
        self.direction = Direction::None;
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.on_settle(&snapshot);
        }
    }

    fn notify_navigate(&mut self) {
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.on_navigate(&snapshot, &self.sections);
        }
    }

    // --- Queries ---

    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            current: self.current,
            previous: self.previous,
            direction: self.direction,
            locked: self.locked,
            total: self.sections.len(),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    #[cfg(test)]
    pub fn previous_index(&self) -> usize {
        self.previous
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn total(&self) -> usize {
        self.sections.len()
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.sections.len()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn current_section(&self) -> &Section {
        &self.sections[self.current]
    }

    pub fn previous_section(&self) -> &Section {
        &self.sections[self.previous]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_sections;
    use proptest::prelude::*;

    fn store() -> NavigationStore {
        NavigationStore::new(default_sections()).expect("default deck is not empty")
    }

    fn state(store: &NavigationStore) -> (usize, usize, Direction, bool) {
        (
            store.current(),
            store.previous_index(),
            store.direction(),
            store.is_locked(),
        )
    }

    #[derive(Default)]
    struct Recorder {
        navigated: Vec<NavigationSnapshot>,
        settled: usize,
    }

    impl NavigationObserver for Recorder {
        fn on_navigate(&mut self, snapshot: &NavigationSnapshot, _sections: &[Section]) {
            self.navigated.push(*snapshot);
        }

        fn on_settle(&mut self, _snapshot: &NavigationSnapshot) {
            self.settled += 1;
        }
    }

    #[test]
    fn test_empty_deck_is_rejected() {
        assert!(NavigationStore::new(Vec::new()).is_err());
    }

    #[test]
    fn test_initial_state() {
        let store = store();
        assert_eq!(state(&store), (0, 0, Direction::None, false));
        assert_eq!(store.total(), 4);
        assert!(store.is_first());
        assert!(!store.is_last());
        assert_eq!(store.current_section().id, "hero");
    }

    #[test]
    fn test_next_scenario() {
        let mut store = store();

        assert!(store.next());
        assert_eq!(state(&store), (1, 0, Direction::Forward, true));

        assert!(!store.next());
        assert_eq!(state(&store), (1, 0, Direction::Forward, true));

        store.complete_transition();
        assert!(store.next());
        assert_eq!(state(&store), (2, 1, Direction::Forward, true));
    }

    #[test]
    fn test_backward_direction() {
        let mut store = store();
        store.go_to(3);
        store.complete_transition();
        assert!(store.go_to(1));
        assert_eq!(state(&store), (1, 3, Direction::Backward, true));
        assert_eq!(store.previous_section().id, "cta");
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut store = store();
        assert!(!store.previous());
        assert_eq!(state(&store), (0, 0, Direction::None, false));

        store.go_to(3);
        store.complete_transition();
        assert!(store.is_last());
        assert!(!store.next());
        assert_eq!(state(&store), (3, 0, Direction::None, false));
    }

    #[test]
    fn test_same_index_is_noop() {
        let mut store = store();
        assert!(!store.go_to(0));
        assert_eq!(state(&store), (0, 0, Direction::None, false));
    }

    #[test]
    fn test_complete_transition_is_idempotent() {
        let mut store = store();
        store.next();
        store.complete_transition();
        store.complete_transition();
        assert!(!store.is_locked());
        assert_eq!(store.direction(), Direction::None);
        assert_eq!(store.current(), 1);
    }

    #[test]
    fn test_intents() {
        let mut store = store();
        assert!(store.apply(Intent::Last));
        assert_eq!(store.current(), 3);
        store.complete_transition();
        assert!(store.apply(Intent::Retreat));
        assert_eq!(store.current(), 2);
        store.complete_transition();
        assert!(store.apply(Intent::First));
        assert_eq!(store.current(), 0);
        store.complete_transition();
        assert!(store.apply(Intent::Advance));
        assert_eq!(store.current(), 1);
    }

    #[test]
    fn test_go_to_id() {
        let mut store = store();
        assert!(store.go_to_id("portfolio"));
        assert_eq!(store.current(), 2);
        store.complete_transition();
        assert!(!store.go_to_id("missing"));
        assert_eq!(store.current(), 2);
    }

    #[test]
    fn test_observers_see_committed_snapshots() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut store = store();
        store.subscribe(recorder.clone());

        store.next();
        store.next();
        store.complete_transition();
        store.complete_transition();
        store.go_to(0);

        let recorder = recorder.borrow();
        assert_eq!(recorder.navigated.len(), 2);
        assert_eq!(
            recorder.navigated[0],
            NavigationSnapshot {
                current: 1,
                previous: 0,
                direction: Direction::Forward,
                locked: true,
                total: 4,
            }
        );
        assert_eq!(recorder.navigated[1].direction, Direction::Backward);
        assert_eq!(recorder.settled, 1);
    }

    #[test]
    fn test_snapshot_progress() {
        let mut store = store();
        assert_eq!(store.snapshot().progress(), 0.25);
        store.go_to(3);
        assert_eq!(store.snapshot().progress(), 1.0);
        assert!(store.snapshot().is_last());
    }

    proptest! {
        #[test]
        fn prop_out_of_range_go_to_is_noop(index in 4usize..10_000, start in 0usize..4) {
            let mut store = store();
            store.go_to(start);
            store.complete_transition();
            let before = state(&store);
            prop_assert!(!store.go_to(index));
            prop_assert_eq!(state(&store), before);
        }

        #[test]
        fn prop_locked_store_rejects_commands(first in 1usize..4, second in 0usize..4) {
            let mut store = store();
            prop_assert!(store.go_to(first));
            let before = state(&store);
            store.go_to(second);
            store.next();
            store.previous();
            prop_assert_eq!(state(&store), before);
        }

        #[test]
        fn prop_accepted_go_to_updates_state(start in 0usize..4, target in 0usize..4) {
            let mut store = store();
            store.go_to(start);
            store.complete_transition();
            let current = store.current();
            let accepted = store.go_to(target);
            prop_assert_eq!(accepted, target != current);
            if accepted {
                prop_assert_eq!(store.previous_index(), current);
                prop_assert_eq!(store.current(), target);
                let expected = if target > current { Direction::Forward } else { Direction::Backward };
                prop_assert_eq!(store.direction(), expected);
                prop_assert!(store.is_locked());
            }
        }

        #[test]
        fn prop_complete_transition_always_unlocks(moves in proptest::collection::vec(0usize..6, 0..12), repeats in 1usize..4) {
            let mut store = store();
            for target in moves {
                store.go_to(target);
            }
            for _ in 0..repeats {
                store.complete_transition();
            }
            prop_assert!(!store.is_locked());
        }
    }
}
