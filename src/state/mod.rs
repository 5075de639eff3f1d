pub mod announcer;
pub mod catalog;
pub mod mode;
pub mod navigation;
pub mod normalizer;
pub mod role;
pub mod transition;
pub mod ui;

pub use announcer::{LiveRegion, Politeness};
pub use catalog::{CategoryFilter, DetailTab, ProductDetail, ProductQuery, SortBy};
pub use mode::{AppMode, Page};
pub use navigation::{Direction, NavigationSnapshot, NavigationStore};
pub use normalizer::{InputNormalizer, Intent, NavKey, NormalizerSettings};
pub use transition::{LockTimer, TransitionClock, TransitionTiming};
pub use ui::UIState;
