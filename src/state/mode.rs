#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub enum AppMode {
    #[default]
    Normal,
    Help,
}

impl AppMode {
    pub fn toggle_help(&mut self) {
        *self = match self {
            AppMode::Normal => AppMode::Help,
            AppMode::Help => AppMode::Normal,
        };
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Page {
    #[default]
    Deck,
    Home,
    Shop,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Deck, Page::Home, Page::Shop];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Deck => "Deck",
            Page::Home => "Home",
            Page::Shop => "Shop",
        }
    }
}
