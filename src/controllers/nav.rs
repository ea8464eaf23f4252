use log::{error, warn};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::config::{self, NavConfig};
use crate::error::SiteError;

/// Collapsed (mobile) menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

pub trait SectionLocator {
    /// Top edge of the section relative to the whole document.
    fn document_top(&self, section_id: &str) -> Option<f64>;
}

pub trait Scroller {
    /// Animated scroll of the viewport. Returns immediately.
    fn smooth_scroll_to(&self, top: f64);
}

pub struct NavController<V> {
    viewport: V,
    offset: f64,
    menu: MenuState,
}

impl<V: SectionLocator + Scroller> NavController<V> {
    pub fn new(viewport: V, config: &NavConfig) -> Self {
        Self {
            viewport,
            offset: config.offset,
            menu: MenuState::Closed,
        }
    }

    /// Scrolls so the section sits just below the fixed navbar and closes the
    /// menu. Unknown ids only close the menu. Returns the scroll target.
    pub fn scroll_to(&mut self, section_id: &str) -> Option<f64> {
        let target = self
            .viewport
            .document_top(section_id)
            .map(|top| top - self.offset);

        match target {
            Some(top) => self.viewport.smooth_scroll_to(top),
            None if config::warn_on_missing_section() => {
                warn!("No section with id '{}' to scroll to", section_id)
            }
            None => {}
        }

        self.menu = MenuState::Closed;
        target
    }

    pub fn toggle_menu(&mut self) -> MenuState {
        self.menu = self.menu.toggled();
        self.menu
    }

    pub fn close_menu(&mut self) {
        self.menu = MenuState::Closed;
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }
}

/// The browser window. Looked up on every call so construction cannot fail.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomViewport;

impl SectionLocator for DomViewport {
    fn document_top(&self, section_id: &str) -> Option<f64> {
        let window = web_sys::window()?;
        let element = window.document()?.get_element_by_id(section_id)?;
        let scroll_y = match window.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                error!("Reading scroll position failed: {}", SiteError::from(err));
                return None;
            }
        };
        Some(element.get_bounding_client_rect().top() + scroll_y)
    }
}

impl Scroller for DomViewport {
    fn smooth_scroll_to(&self, top: f64) {
        let Some(window) = web_sys::window() else {
            error!("{}", SiteError::NoWindow);
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
