use glam::DVec2;

use crate::case::{CaseParams, OUTER_RADIUS};
use crate::geometry::{Annulus, Circle};
use crate::FlowSolution;

/// Closed-form Stokes streamfunction for two rotating circular boundaries
/// with offset centers.
///
/// The solution superposes one rotational term per boundary: a term tied to
/// the outer circle, growing with the squared distance from the origin, and a
/// `1/r` term tied to the inner circle. The inner term is singular at the
/// inner center; every point admitted by the domain mask has
/// `r_inner > inner_radius > 0`, so the singularity is never evaluated.
#[derive(Debug, Clone, Copy)]
pub struct EccentricRotors {
    annulus: Annulus,
    omega_outer: f64,
    omega_inner: f64,
    inner_radius_sq: f64,
}

impl EccentricRotors {
    pub fn new(params: CaseParams) -> Self {
        let outer = Circle::new(DVec2::ZERO, OUTER_RADIUS);
        let inner = Circle::new(
            DVec2::new(params.eccentricity, 0.0),
            params.inner_radius,
        );

        EccentricRotors {
            annulus: Annulus::new(outer, inner),
            omega_outer: params.omega_outer,
            omega_inner: params.omega_inner,
            inner_radius_sq: params.inner_radius * params.inner_radius,
        }
    }

    /// The two boundary circles, for overlay drawing.
    pub fn annulus(&self) -> Annulus {
        self.annulus
    }

    /// Rotational term carried by the outer boundary.
    fn psi_outer(&self, p: DVec2) -> f64 {
        let theta = p.y.atan2(p.x);
        self.omega_outer * (p.length_squared() - self.inner_radius_sq) * theta.sin()
    }

    /// Rotational term carried by the inner boundary.
    fn psi_inner(&self, p: DVec2) -> f64 {
        let d = p - self.annulus.inner.center;
        let theta = d.y.atan2(d.x);
        self.omega_inner * (self.inner_radius_sq / d.length()) * theta.sin()
    }
}

impl FlowSolution for EccentricRotors {
    fn psi(&self, p: DVec2) -> f64 {
        self.psi_outer(p) + self.psi_inner(p)
    }

    fn in_domain(&self, p: DVec2) -> bool {
        self.annulus.contains(p)
    }
}
