use super::constants::*;
use super::schedule::{FrameLoop, LoopControl};
use glam::Vec2;
use rand::prelude::*;

/// Drawing target for the particle field. The browser implementation wraps a
/// 2D canvas context; tests record the calls.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, rgba: Rgba);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: [u8; 3],
    pub alpha: f32,
}

impl Rgba {
    /// CSS `rgba(...)` form accepted by canvas fill styles.
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.rgb[0], self.rgb[1], self.rgb[2], self.alpha
        )
    }
}

#[derive(Clone, Debug)]
pub struct ParticleParams {
    pub narrow_max_width: f32,
    pub narrow_count: usize,
    pub wide_count: usize,
    pub rgb: [u8; 3],
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            narrow_max_width: NARROW_VIEWPORT_MAX_WIDTH,
            narrow_count: PARTICLES_NARROW,
            wide_count: PARTICLES_WIDE,
            rgb: PARTICLE_RGB,
        }
    }
}

impl ParticleParams {
    pub fn count_for_width(&self, width: f32) -> usize {
        if width < self.narrow_max_width {
            self.narrow_count
        } else {
            self.wide_count
        }
    }
}

pub fn particle_count_for_width(width: f32) -> usize {
    ParticleParams::default().count_for_width(width)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn random(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            velocity: Vec2::new(
                VELOCITY_X_MIN + rng.gen::<f32>() * VELOCITY_X_SPAN,
                VELOCITY_Y_MIN + rng.gen::<f32>() * VELOCITY_Y_SPAN,
            ),
            radius: RADIUS_MIN + rng.gen::<f32>() * RADIUS_SPAN,
            opacity: OPACITY_MIN + rng.gen::<f32>() * OPACITY_SPAN,
        }
    }

    /// Move by one tick. Returns true when the particle fell past the bottom
    /// edge and was recycled to just above the top.
    pub fn update(&mut self, rng: &mut impl Rng, width: f32, height: f32) -> bool {
        self.position += self.velocity;
        if self.position.y > height {
            self.position = Vec2::new(rng.gen::<f32>() * width, -self.radius);
            return true;
        }
        false
    }
}

pub struct ParticleField {
    pub params: ParticleParams,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    pending_resize: Option<(f32, f32)>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: ParticleParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(params: ParticleParams) -> Self {
        Self::with_rng(params, StdRng::from_entropy())
    }

    fn with_rng(params: ParticleParams, rng: StdRng) -> Self {
        Self {
            params,
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            pending_resize: None,
            rng,
        }
    }

    /// Size the field to the viewport and rebuild the particle list from
    /// scratch. Existing particles are discarded.
    pub fn initialize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.pending_resize = None;
        let count = self.params.count_for_width(width);
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        log::debug!(
            "[particles] rebuilt {} particles for {}x{}",
            count,
            width,
            height
        );
    }

    /// Record a viewport change; the rebuild happens at the start of the next tick.
    pub fn schedule_resize(&mut self, width: f32, height: f32) {
        self.pending_resize = Some((width, height));
    }

    pub fn has_pending_resize(&self) -> bool {
        self.pending_resize.is_some()
    }

    pub fn tick(&mut self) {
        if let Some((w, h)) = self.pending_resize.take() {
            self.initialize(w, h);
        }
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.update(&mut self.rng, w, h);
        }
    }

    pub fn render(&self, surface: &mut impl Surface) {
        surface.clear(self.width, self.height);
        for p in &self.particles {
            surface.fill_circle(
                p.position,
                p.radius,
                Rgba {
                    rgb: self.params.rgb,
                    alpha: p.opacity,
                },
            );
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// A particle field bound to the surface it draws on. One frame is a tick
/// followed by a full redraw; the scene never stops on its own.
pub struct ParticleScene<S: Surface> {
    pub field: ParticleField,
    pub surface: S,
}

impl<S: Surface> ParticleScene<S> {
    pub fn new(field: ParticleField, surface: S) -> Self {
        Self { field, surface }
    }
}

impl<S: Surface> FrameLoop for ParticleScene<S> {
    fn frame(&mut self) -> LoopControl {
        self.field.tick();
        self.field.render(&mut self.surface);
        LoopControl::Continue
    }
}
