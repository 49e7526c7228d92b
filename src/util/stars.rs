//! Procedural star field for the background container.
//!
//! Generation is separated from DOM insertion: [`generate`] returns plain
//! star descriptions drawn from any [`Rng`], and the binding turns each one into a
//! `<div>` with the listed class and style properties.

#[cfg(test)]
#[path = "stars_test.rs"]
mod stars_test;

use rand::Rng;

use crate::consts::{SHOOTING_STAR_CLASS, STAR_CLASS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarSize {
    Small,
    Medium,
    Large,
}

impl StarSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// A twinkling background star.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub size: StarSize,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub base_opacity: f64,
}

impl Star {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            size: StarSize::ALL[rng.random_range(0..StarSize::ALL.len())],
            left_pct: rng.random::<f64>() * 100.0,
            top_pct: rng.random::<f64>() * 100.0,
            duration_s: 2.0 + rng.random::<f64>() * 4.0,
            delay_s: rng.random::<f64>() * 3.0,
            base_opacity: 0.3 + rng.random::<f64>() * 0.5,
        }
    }

    pub fn class_name(&self) -> String {
        format!("{STAR_CLASS} {}", self.size.as_str())
    }

    /// `(property, value)` pairs for `style.setProperty`.
    pub fn style_properties(&self) -> [(&'static str, String); 5] {
        [
            ("left", format!("{}%", self.left_pct)),
            ("top", format!("{}%", self.top_pct)),
            ("--duration", format!("{}s", self.duration_s)),
            ("--delay", format!("{}s", self.delay_s)),
            ("--base-opacity", self.base_opacity.to_string()),
        ]
    }
}

/// A streak that starts in the upper-left region; successive ones are
/// staggered roughly five seconds apart.
#[derive(Clone, Debug, PartialEq)]
pub struct ShootingStar {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
}

impl ShootingStar {
    pub fn random(index: usize, rng: &mut impl Rng) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let stagger = index as f64 * 5.0;
        Self {
            left_pct: rng.random::<f64>() * 70.0,
            top_pct: rng.random::<f64>() * 30.0,
            delay_s: stagger + rng.random::<f64>() * 3.0,
        }
    }

    pub fn class_name(&self) -> &'static str {
        SHOOTING_STAR_CLASS
    }

    pub fn style_properties(&self) -> [(&'static str, String); 3] {
        [
            ("left", format!("{}%", self.left_pct)),
            ("top", format!("{}%", self.top_pct)),
            ("animation-delay", format!("{}s", self.delay_s)),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StarField {
    pub stars: Vec<Star>,
    pub shooting: Vec<ShootingStar>,
}

/// Draw `star_count` stars and `shooting_count` shooting stars.
pub fn generate(rng: &mut impl Rng, star_count: usize, shooting_count: usize) -> StarField {
    let stars = (0..star_count).map(|_| Star::random(rng)).collect();
    let shooting = (0..shooting_count)
        .map(|index| ShootingStar::random(index, rng))
        .collect();
    StarField { stars, shooting }
}

impl StarField {
    pub fn len(&self) -> usize {
        self.stars.len() + self.shooting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
