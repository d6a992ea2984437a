//! Core state types for the planetary simulation.
//!
//! Defines the body/system structs:
//! - `Body`   one gravitating point mass, using `NVec2`
//! - `System` the ordered collection of bodies and the current time `t`
//! - `OrbitHistory` the recorded past positions of a body
//!
//! Name, radius and color are carried for the presentation layer and are
//! opaque to the physics.

use std::collections::VecDeque;

use nalgebra::Vector2;
use thiserror::Error;

pub type NVec2 = Vector2<f64>;

/// RGB display color, opaque to the physics
pub type Color = [u8; 3];

/// Construction-time validation failures for [`Body`]
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("mass must be strictly positive and finite, got {0}")]
    InvalidMass(f64),
}

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // display label
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub m: f64, // mass (kg)
    pub radius: f64, // display radius, not used by the physics
    pub color: Color, // display color, not used by the physics
    pub is_anchor: bool, // treated as the gravitational center (the star)
    pub distance_to_anchor: f64, // separation from the last visited anchor (m), 0 until measured
    pub orbit: OrbitHistory, // past positions, one per completed step
}

impl Body {
    /// Validated constructor; rejects a non-positive or non-finite mass
    /// before it can reach the force computation.
    pub fn new(
        name: impl Into<String>,
        x: NVec2,
        v: NVec2,
        m: f64,
        radius: f64,
        color: Color,
        is_anchor: bool,
    ) -> Result<Self, BodyError> {
        if !(m > 0.0 && m.is_finite()) {
            return Err(BodyError::InvalidMass(m));
        }
        Ok(Self {
            name: name.into(),
            x,
            v,
            m,
            radius,
            color,
            is_anchor,
            distance_to_anchor: 0.0,
            orbit: OrbitHistory::unbounded(),
        })
    }

    /// Cap the orbit history at the last `cap` points
    pub fn with_retention(mut self, cap: usize) -> Self {
        self.orbit = OrbitHistory::with_retention(cap);
        self
    }
}

/// Ordered record of a body's past positions, oldest first.
///
/// Unbounded by default. With a retention cap it behaves as a ring buffer
/// holding the last `cap` points.
#[derive(Debug, Clone)]
pub struct OrbitHistory {
    points: VecDeque<NVec2>,
    cap: Option<usize>,
}

impl OrbitHistory {
    pub fn unbounded() -> Self {
        Self {
            points: VecDeque::new(),
            cap: None,
        }
    }

    pub fn with_retention(cap: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(cap),
            cap: Some(cap),
        }
    }

    /// Append a position, dropping the oldest point once over the cap
    pub fn push(&mut self, x: NVec2) {
        self.points.push_back(x);
        if let Some(cap) = self.cap {
            while self.points.len() > cap {
                self.points.pop_front();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in chronological order
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> {
        self.points.iter()
    }

    /// Most recently recorded position
    pub fn latest(&self) -> Option<&NVec2> {
        self.points.back()
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, insertion order
    pub t: f64, // time (s)
}
