//! Decorative starfield animation.
//!
//! All animation state lives in one [`Starfield`] context that the view
//! creates when it mounts, steps once per frame and drops when it
//! unmounts. It shares nothing with the game engine.

mod star;

pub use star::{PointerKind, Star, StarSprite, Velocity};

use crate::config::StarfieldConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use star::Entry;
use tracing::{debug, instrument, trace};

/// Depth given to stars that respawn in the middle of the screen.
const RESPAWN_DEPTH: f64 = 0.1;

/// Canvas size in pixels and the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    width: f64,
    height: f64,
    scale: f64,
}

/// Animation context: stars, velocity, pointer and RNG.
#[derive(Debug, Clone)]
pub struct Starfield {
    config: StarfieldConfig,
    stars: Vec<Star>,
    velocity: Velocity,
    pointer: Option<(f64, f64)>,
    bounds: Bounds,
    rng: ChaCha8Rng,
}

impl Starfield {
    /// Generates stars for a `width` x `height` canvas and scatters them.
    #[instrument(skip(config))]
    pub fn new(config: StarfieldConfig, width: f64, height: f64, scale: f64) -> Self {
        let seed = (*config.seed()).unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let count = star_count(&config, width, height);
        let min_scale = *config.star_min_scale();
        let stars = (0..count)
            .map(|_| Star::new(0.0, 0.0, random_depth(&mut rng, min_scale)))
            .collect();

        debug!(count, seed, "Generated starfield");

        let mut field = Self {
            velocity: Velocity {
                z: *config.zoom_speed(),
                ..Velocity::default()
            },
            config,
            stars,
            pointer: None,
            bounds: Bounds {
                width,
                height,
                scale,
            },
            rng,
        };
        field.resize(width, height, scale);
        field
    }

    /// Updates the canvas size and scatters every star across it.
    #[instrument(skip(self))]
    pub fn resize(&mut self, width: f64, height: f64, scale: f64) {
        self.bounds = Bounds {
            width,
            height,
            scale,
        };
        for star in &mut self.stars {
            star.x = self.rng.gen_range(0.0..1.0) * width;
            star.y = self.rng.gen_range(0.0..1.0) * height;
        }
    }

    /// Advances the animation by one frame.
    pub fn step(&mut self) {
        let damping = *self.config.target_damping();
        let easing = *self.config.velocity_easing();
        let overflow = *self.config.overflow_threshold();
        let min_scale = *self.config.star_min_scale();

        let v = &mut self.velocity;
        v.tx *= damping;
        v.ty *= damping;
        v.x += (v.tx - v.x) * easing;
        v.y += (v.ty - v.y) * easing;
        let v = *v;

        let Bounds { width, height, .. } = self.bounds;
        let (cx, cy) = (width / 2.0, height / 2.0);
        let mut recycled = 0usize;

        for (k, star) in self.stars.iter_mut().enumerate() {
            // Drift direction alternates in pairs: -, -, +, +, ...
            let sign = if (k / 2) % 2 == 0 { -1.0 } else { 1.0 };

            star.x += v.x * sign * star.z;
            star.y += v.y * sign * star.z;

            star.x += (star.x - cx) * v.z * star.z;
            star.y += (star.y - cy) * v.z * star.z;
            star.z += v.z;

            if star.x < -overflow
                || star.x > width + overflow
                || star.y < -overflow
                || star.y > height + overflow
            {
                let drift = Velocity {
                    x: v.x * sign,
                    y: v.y * sign,
                    ..v
                };
                let entry = choose_entry(&mut self.rng, &drift);
                respawn(star, entry, &mut self.rng, self.bounds, overflow, min_scale);
                recycled += 1;
            }
        }

        trace!(recycled, vx = v.x, vy = v.y, "Starfield step");
    }

    /// Feeds a pointer position; movement since the last one steers the stars.
    pub fn pointer_moved(&mut self, x: f64, y: f64, kind: PointerKind) {
        if let Some((px, py)) = self.pointer {
            let gain = self.bounds.scale * kind.direction() / *self.config.pointer_sensitivity();
            self.velocity.tx += (x - px) * gain;
            self.velocity.ty += (y - py) * gain;
        }
        self.pointer = Some((x, y));
    }

    /// Forgets the pointer, so the next movement starts fresh.
    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    /// Builds this frame's sprites.
    pub fn sprites(&mut self) -> Vec<StarSprite> {
        let stroke = *self.config.star_size() * self.bounds.scale;
        let rng = &mut self.rng;
        self.stars
            .iter()
            .map(|star| StarSprite::new(star.x, star.y, stroke * star.z, rng.gen_range(0.5..1.0)))
            .collect()
    }

    /// Returns the stars.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Returns the current velocity.
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> f64 {
        self.bounds.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> f64 {
        self.bounds.height
    }
}

fn star_count(config: &StarfieldConfig, width: f64, height: f64) -> usize {
    let density = config.star_density().max(f64::EPSILON);
    ((width + height) / density).max(0.0) as usize
}

fn random_depth(rng: &mut ChaCha8Rng, min_scale: f64) -> f64 {
    min_scale + rng.gen_range(0.0..1.0) * (1.0 - min_scale)
}

/// Fast drift re-enters stars on the side they drift in from, choosing
/// the axis in proportion to speed. Slow drift respawns in the middle.
fn choose_entry(rng: &mut ChaCha8Rng, v: &Velocity) -> Entry {
    let (vx, vy) = (v.x.abs(), v.y.abs());
    if vx <= 1.0 && vy <= 1.0 {
        return Entry::Zoom;
    }

    let roll: f64 = rng.gen_range(0.0..1.0);
    let horizontal = if vx > vy {
        roll < vx / (vx + vy)
    } else {
        roll >= vy / (vx + vy)
    };

    match (horizontal, v.x > 0.0, v.y > 0.0) {
        (true, true, _) => Entry::Left,
        (true, false, _) => Entry::Right,
        (false, _, true) => Entry::Top,
        (false, _, false) => Entry::Bottom,
    }
}

fn respawn(
    star: &mut Star,
    entry: Entry,
    rng: &mut ChaCha8Rng,
    bounds: Bounds,
    overflow: f64,
    min_scale: f64,
) {
    let Bounds { width, height, .. } = bounds;
    star.z = random_depth(rng, min_scale);

    match entry {
        Entry::Zoom => {
            star.z = RESPAWN_DEPTH;
            star.x = rng.gen_range(0.0..1.0) * width;
            star.y = rng.gen_range(0.0..1.0) * height;
        }
        Entry::Left => {
            star.x = -overflow;
            star.y = rng.gen_range(0.0..1.0) * height;
        }
        Entry::Right => {
            star.x = width + overflow;
            star.y = rng.gen_range(0.0..1.0) * height;
        }
        Entry::Top => {
            star.x = rng.gen_range(0.0..1.0) * width;
            star.y = -overflow;
        }
        Entry::Bottom => {
            star.x = rng.gen_range(0.0..1.0) * width;
            star.y = height + overflow;
        }
    }
}
