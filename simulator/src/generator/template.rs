use fmcwcore::prelude::Target;
use rand::Rng;
use std::ops::Range;

/// Uniform sampling bounds for a family of clutter scatterers.
#[derive(Debug, Clone, PartialEq)]
pub struct ClutterTemplate {
    pub range: Range<f64>,
    pub velocity: Range<f64>,
    pub rcs: Range<f64>,
}

/// Weak returns from non-metallic objects.
pub const LOW_CLUTTER: ClutterTemplate = ClutterTemplate {
    range: 1.0..20.0,
    velocity: -2.0..2.0,
    rcs: 0.05..0.3,
};

/// Denser background surrounding a strong reflector.
pub const MODERATE_CLUTTER: ClutterTemplate = ClutterTemplate {
    range: 1.0..20.0,
    velocity: -2.0..2.0,
    rcs: 0.1..0.5,
};

/// Clutter strong enough to mask a weak reflector.
pub const STRONG_CLUTTER: ClutterTemplate = ClutterTemplate {
    range: 1.0..20.0,
    velocity: -2.0..2.0,
    rcs: 0.5..2.0,
};

impl ClutterTemplate {
    /// Draws range, velocity and rcs in that order.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Target {
        let range = rng.gen_range(self.range.clone());
        let velocity = rng.gen_range(self.velocity.clone());
        let rcs = rng.gen_range(self.rcs.clone());
        Target::new(range, velocity, rcs)
    }

    pub fn sample_many<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Target> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}
