use std::time::Duration;

// Tuning for the hero particle field and the testimonial autoplay.

// Particle counts per viewport width class
pub const NARROW_VIEWPORT_MAX_WIDTH: f32 = 768.0; // widths strictly below this are "narrow"
pub const PARTICLES_NARROW: usize = 35;
pub const PARTICLES_WIDE: usize = 70;

// Per-particle randomised attributes, expressed as (min, span)
pub const RADIUS_MIN: f32 = 0.5;
pub const RADIUS_SPAN: f32 = 1.5;
pub const VELOCITY_X_MIN: f32 = -0.5;
pub const VELOCITY_X_SPAN: f32 = 1.0;
pub const VELOCITY_Y_MIN: f32 = 0.2; // always falling
pub const VELOCITY_Y_SPAN: f32 = 1.0;
pub const OPACITY_MIN: f32 = 0.2;
pub const OPACITY_SPAN: f32 = 0.5;

// Fixed particle hue (gold)
pub const PARTICLE_RGB: [u8; 3] = [212, 175, 55];

// Carousel
pub const AUTOPLAY_PERIOD: Duration = Duration::from_secs(5);
pub const SLIDE_OFFSET_STEP_PERCENT: f64 = 100.0;

// Quote form status line
pub const STATUS_SENDING: &str = "Sending...";
pub const STATUS_SUCCESS: &str = "Form submitted successfully!";
pub const STATUS_FAILURE: &str = "Something went wrong!";
pub const COLOR_NEUTRAL: &str = "white";
pub const COLOR_SUCCESS: &str = "#4CAF50";
pub const COLOR_ERROR: &str = "#f44336";

// Header
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;
