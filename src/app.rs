use crate::config::{Config, ThemeMode};
use crate::error::EmptyDeck;
use crate::model::{default_catalog, default_sections, Category, Product};
use crate::state::{
    AppMode, CategoryFilter, Intent, InputNormalizer, LiveRegion, LockTimer, NavigationStore, Page,
    ProductDetail, ProductQuery, TransitionClock, UIState,
};
use crate::style::{self, Theme};
use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub struct SnapDeck {
    pub config: Config,

    // Deck
    pub store: NavigationStore,
    pub normalizer: InputNormalizer,
    pub lock_timer: LockTimer,
    pub clock: Rc<RefCell<TransitionClock>>,
    pub live_region: Rc<RefCell<LiveRegion>>,

    // Shop
    pub catalog: Vec<Product>,
    pub query: ProductQuery,
    pub detail: Option<ProductDetail>,

    pub mode: AppMode,
    pub ui: UIState,
}

impl SnapDeck {
    pub fn new(config: Config) -> Result<Self, EmptyDeck> {
        let timing = config.transition.timing();
        let clock = Rc::new(RefCell::new(TransitionClock::new(timing)));
        let live_region = Rc::new(RefCell::new(LiveRegion::default()));

        let mut store = NavigationStore::new(default_sections())?;
        store.subscribe(Rc::clone(&clock));
        store.subscribe(Rc::clone(&live_region));

        let ui = UIState::new(
            Theme::from(config.theme.mode),
            Duration::from_secs(config.nav.auto_hide_secs),
        );

        Ok(Self {
            normalizer: InputNormalizer::new(config.input.normalizer_settings()),
            lock_timer: LockTimer::new(timing.total()),
            query: ProductQuery::new(config.catalog.max_price),
            catalog: default_catalog(),
            detail: None,
            store,
            clock,
            live_region,
            mode: AppMode::default(),
            ui,
            config,
        })
    }

    /// Forwards a normalized intent to the store and arms the lock timeout
    /// when it is accepted.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        let accepted = self.store.apply(intent);
        debug!(?intent, accepted, "intent");
        if accepted {
            self.lock_timer.arm(Instant::now());
        }
        accepted
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        let accepted = self.store.go_to(index);
        if accepted {
            self.lock_timer.arm(Instant::now());
        }
        accepted
    }

    /// Jumps to the section with `id`, as in-deck links (`#portfolio`) do.
    pub fn go_to_id(&mut self, id: &str) -> bool {
        let accepted = self.store.go_to_id(id);
        if accepted {
            self.lock_timer.arm(Instant::now());
        }
        accepted
    }

    /// Explicit completion from the deck view once the animation has finished.
    pub fn complete_transition(&mut self) {
        self.lock_timer.disarm();
        self.store.complete_transition();
    }

    /// Releases a lock whose explicit completion never arrived.
    pub fn poll_lock_timeout(&mut self, now: Instant) {
        if self.lock_timer.poll(now) {
            warn!(
                current = self.store.current(),
                "transition lock timed out, releasing"
            );
            self.store.complete_transition();
        }
    }

    pub fn open_cta(&mut self, url: &str) {
        debug!(url, "opening call to action");
        if let Some(id) = url.strip_prefix('#') {
            self.go_to_id(id);
            return;
        }
        if let Err(e) = open::that(url) {
            self.ui.set_error(format!("Could not open {}: {}", url, e));
        }
    }

    pub fn open_detail(&mut self, product_id: u32) {
        self.detail = Some(ProductDetail::new(product_id));
    }

    /// Opens the shop filtered to one category, from the home page tiles.
    pub fn browse_category(&mut self, category: Category) {
        debug!(?category, "browsing category");
        self.query.category = CategoryFilter::Only(category);
        self.detail = None;
        self.ui.page = Page::Shop;
    }

    pub fn add_to_cart(&mut self) {
        let Some(detail) = self.detail.take() else {
            return;
        };
        if let Some(product) = self.catalog.iter().find(|p| p.id == detail.product_id) {
            self.ui
                .set_info(format!("Added {} x {} to cart", detail.quantity, product.name));
        }
    }

    /// Switches theme and remembers the choice in the config file.
    pub fn toggle_theme(&mut self) {
        self.ui.theme = self.ui.theme.toggle();
        self.config.theme.mode = match self.ui.theme {
            Theme::Dark => ThemeMode::Dark,
            Theme::Light => ThemeMode::Light,
        };
        if let Err(e) = self.config.save() {
            warn!(error = %e, "could not save theme");
            self.ui.set_error(format!("Could not save config: {}", e));
        }
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        if self.store.is_locked() {
            ctx.request_repaint();
        } else if let Some(after) = self.ui.nav_rail.hides_in(now) {
            ctx.request_repaint_after(after);
        }
        if let Some(after) = self.message_expires_in() {
            ctx.request_repaint_after(after);
        }
    }

    fn message_expires_in(&self) -> Option<Duration> {
        let timeout = Duration::from_secs(style::MESSAGE_TIMEOUT_SECS);
        [&self.ui.error_message, &self.ui.info_message]
            .into_iter()
            .flatten()
            .map(|(_, at)| timeout.saturating_sub(at.elapsed()))
            .min()
    }
}

impl eframe::App for SnapDeck {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui.theme.apply(ctx);
        self.handle_input(ctx);

        let now = Instant::now();
        self.poll_lock_timeout(now);
        self.ui.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);

        self.render_top_bar(ctx);
        self.render_status_bar(ctx);

        match self.ui.page {
            Page::Deck => {
                let deck_rect = ctx.available_rect();
                if self.render_deck(ctx, now) {
                    self.complete_transition();
                }
                self.render_chrome(ctx, deck_rect, now);
            }
            Page::Home => {
                self.render_home(ctx);
                self.render_product_detail(ctx);
            }
            Page::Shop => {
                self.render_shop(ctx);
                self.render_product_detail(ctx);
            }
        }

        self.render_help_modal(ctx);
        self.schedule_repaint(ctx, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Direction;

    fn app() -> SnapDeck {
        SnapDeck::new(Config::default()).expect("default deck")
    }

    #[test]
    fn test_dispatch_arms_lock_timer() {
        let mut app = app();
        assert!(app.dispatch(Intent::Advance));
        assert!(app.lock_timer.is_armed());
        assert!(app.store.is_locked());
        assert_eq!(app.store.current(), 1);

        // Rejected while locked, timer stays as it was
        assert!(!app.dispatch(Intent::Advance));
        assert_eq!(app.store.current(), 1);
    }

    #[test]
    fn test_explicit_completion_disarms_timer() {
        let mut app = app();
        app.dispatch(Intent::Last);
        app.complete_transition();
        assert!(!app.lock_timer.is_armed());
        assert!(!app.store.is_locked());
        assert_eq!(app.store.direction(), Direction::None);
    }

    #[test]
    fn test_timeout_releases_lock() {
        let mut app = app();
        let start = Instant::now();
        app.dispatch(Intent::Advance);
        app.poll_lock_timeout(start);
        assert!(app.store.is_locked());

        app.poll_lock_timeout(start + Duration::from_secs(2));
        assert!(!app.store.is_locked());
        assert!(app.dispatch(Intent::Advance));
        assert_eq!(app.store.current(), 2);
    }

    #[test]
    fn test_observers_follow_store() {
        let mut app = app();
        app.go_to(2);
        assert!(app.clock.borrow().is_running());
        assert_eq!(
            app.live_region.borrow().latest().map(|a| a.text.as_str()),
            Some("Section 3 of 4: Portfolio")
        );

        app.complete_transition();
        assert!(!app.clock.borrow().is_running());
        assert_eq!(app.live_region.borrow().count(), 1);
    }

    #[test]
    fn test_in_deck_cta_jumps_to_section() {
        let mut app = app();
        app.open_cta("#portfolio");
        assert_eq!(app.store.current_section().id, "portfolio");
        assert!(app.lock_timer.is_armed());
        assert!(app.ui.error_message.is_none());

        // Unknown anchors are ignored
        app.complete_transition();
        app.open_cta("#missing");
        assert_eq!(app.store.current(), 2);
        assert!(!app.store.is_locked());
    }

    #[test]
    fn test_browse_category_filters_shop() {
        let mut app = app();
        app.ui.page = Page::Home;
        app.open_detail(1);
        app.browse_category(Category::Cooking);
        assert_eq!(app.ui.page, Page::Shop);
        assert!(app.detail.is_none());
        assert_eq!(app.query.category, CategoryFilter::Only(Category::Cooking));
        let visible = app.query.apply(&app.catalog);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|p| p.category == Category::Cooking));
    }

    #[test]
    fn test_add_to_cart_sets_info() {
        let mut app = app();
        app.open_detail(3);
        if let Some(detail) = app.detail.as_mut() {
            detail.set_quantity(2);
        }
        app.add_to_cart();
        assert!(app.detail.is_none());
        let (message, _) = app.ui.info_message.clone().expect("info message");
        assert!(message.starts_with("Added 2 x "));
    }
}
