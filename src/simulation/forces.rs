//! Force contributors for the planetary simulation
//!
//! Defines the force trait and the direct pairwise Newtonian gravity
//! implementation, plus the anchor-distance bookkeeping that goes with it

use thiserror::Error;

use crate::simulation::states::{Body, NVec2, System};

/// Faults raised while evaluating forces
#[derive(Debug, Error)]
pub enum ForceError {
    #[error("two bodies coincide at ({x}, {y}); gravity is undefined at zero separation")]
    DegenerateConfiguration { x: f64, y: f64 },
}

/// Collection of force terms (gravity, drag, etc.)
/// Each term implements [`Force`] and their contributions are summed
/// into a single force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total forces at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    ///
    /// Fails without touching `sys` if any term hits a degenerate pair
    pub fn accumulate_forces(&self, t: f64, sys: &System, out: &mut [NVec2]) -> Result<(), ForceError> {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        // Iterate over all force contributors
        for term in &self.terms {
            term.force(t, sys, out)?;
        }
        Ok(())
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Force {
    fn force(&self, t: f64, sys: &System, out: &mut [NVec2]) -> Result<(), ForceError>;
}

/// Gravitational force exerted on `a` by `b`, and their separation.
///
/// F = g * m_a * m_b / d^2, directed from `a` toward `b`. Coincident bodies
/// have no defined force direction; that case fails with
/// [`ForceError::DegenerateConfiguration`] rather than producing Inf/NaN.
pub fn newtonian_pair(a: &Body, b: &Body, g: f64) -> Result<(NVec2, f64), ForceError> {
    // r is the displacement vector from a to b; a is pulled along +r
    let r = b.x - a.x;

    // Squared separation distance |r|^2
    let d2 = r.dot(&r);
    if d2 == 0.0 {
        return Err(ForceError::DegenerateConfiguration { x: a.x.x, y: a.x.y });
    }
    let d = d2.sqrt();

    // Magnitude of the mutual attraction
    let f = g * a.m * b.m / d2;

    // Scale the unit direction r / d by the magnitude
    Ok((r * (f / d), d))
}

impl Body {
    /// Gravitational force vector exerted on `self` by `other`.
    ///
    /// When `other` is an anchor, the measured separation is recorded in
    /// `self.distance_to_anchor`; with several anchors the last one measured
    /// wins, mirroring the visit order of the force loop.
    pub fn attraction(&mut self, other: &Body, g: f64) -> Result<NVec2, ForceError> {
        let (f, d) = newtonian_pair(self, other, g)?;
        if other.is_anchor {
            self.distance_to_anchor = d;
        }
        Ok(f)
    }
}

/// Direct pairwise Newtonian gravity, O(n^2) per evaluation
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Force for NewtonianGravity {
    fn force(&self, _t: f64, sys: &System, out: &mut [NVec2]) -> Result<(), ForceError> {
        let n = sys.bodies.len();

        // For each body, sum the pull from every other body. Self-exclusion
        // is by index, i.e. identity, so two distinct bodies in the same
        // state still attract each other
        for i in 0..n {
            let bi = &sys.bodies[i];
            for j in 0..n {
                if j == i {
                    continue;
                }
                let (f, _d) = newtonian_pair(bi, &sys.bodies[j], self.g)?;
                out[i] += f;
            }
        }
        Ok(())
    }
}

/// Distance from each body to the most recently visited anchor, following
/// the same `j != i` visit order as the force sum. `None` where no other
/// body is an anchor, so a lone anchor keeps its previous value.
///
/// Evaluated against the same position snapshot as the forces, before any
/// body has moved this step.
pub fn anchor_distances(sys: &System) -> Vec<Option<f64>> {
    let n = sys.bodies.len();
    let mut out = vec![None; n];
    for i in 0..n {
        for j in 0..n {
            if j == i {
                continue;
            }
            if sys.bodies[j].is_anchor {
                out[i] = Some((sys.bodies[j].x - sys.bodies[i].x).norm());
            }
        }
    }
    out
}
