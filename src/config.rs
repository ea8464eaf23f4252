/// Class that marks an element for scroll-reveal.
pub const REVEAL_SELECTOR: &str = ".animate-on-scroll";

/// Class added to a target once it has been revealed.
pub const REVEALED_CLASS: &str = "animate-fade-in";

/// Attribute carrying a reveal target's key on the element.
pub const REVEAL_KEY_ATTR: &str = "data-reveal";

/// Navbar switches to its compact style past this many pixels of scroll.
pub const SCROLLED_NAV_THRESHOLD: f64 = 80.0;

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the target's area that has to be on screen.
    pub threshold: f64,
    pub selector: &'static str,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            selector: REVEAL_SELECTOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavConfig {
    /// Height of the fixed navbar, subtracted from every scroll target.
    pub offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { offset: 100.0 }
    }
}

#[cfg(debug_assertions)]
pub fn warn_on_missing_section() -> bool {
    true // Surface typos in section ids while developing
}

#[cfg(not(debug_assertions))]
pub fn warn_on_missing_section() -> bool {
    false
}
