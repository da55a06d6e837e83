/// Page wiring constants: element ids, class names and host timings.
///
/// The markup and stylesheet own these names; keeping them here means the
/// Rust side only spells each one once.
// Element ids
pub const ID_SITE_HEADER: &str = "site-header";
pub const ID_MENU_TOGGLE: &str = "menu-toggle";
pub const ID_MAIN_NAV: &str = "main-nav";
pub const ID_PARTICLE_CANVAS: &str = "particle-canvas";
pub const ID_TESTIMONIAL_SLIDER: &str = "testimonial-slider";
pub const ID_TESTIMONIAL_CAROUSEL: &str = "testimonial-carousel";
pub const ID_QUOTE_FORM: &str = "quote-form";
pub const ID_FORM_RESULT: &str = "form-result";

// Class names and selectors
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_VISIBLE: &str = "is-visible";
pub const CLASS_LAZY: &str = "lazy";
pub const SELECTOR_FADE_IN: &str = ".fade-in";
pub const SELECTOR_LAZY_IMAGES: &str = "img.lazy";
pub const SELECTOR_NAV_LINKS: &str = "a";

// Reveal-on-scroll visibility ratio
pub const FADE_IN_THRESHOLD: f64 = 0.1;

// Quote form
pub const FORM_ENDPOINT: &str = "https://api.web3forms.com/submit";
pub const FORM_STATUS_HIDE_DELAY_MS: i32 = 5_000;
