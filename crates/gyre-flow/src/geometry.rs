use glam::DVec2;

/// A circular boundary in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Circle { center, radius }
    }

    /// Signed distance from `p` to the boundary (negative inside).
    pub fn signed_distance(&self, p: DVec2) -> f64 {
        (p - self.center).length() - self.radius
    }

    /// `p` lies strictly inside the circle.
    pub fn strictly_inside(&self, p: DVec2) -> bool {
        self.signed_distance(p) < 0.0
    }

    /// `p` lies strictly outside the circle.
    pub fn strictly_outside(&self, p: DVec2) -> bool {
        self.signed_distance(p) > 0.0
    }
}

/// The fluid region between two circular boundaries.
///
/// Membership is strict on both circles: points on either boundary are
/// excluded, since the approximate closed form does not satisfy the physical
/// boundary conditions there. With offset centers the region is an annulus
/// with no common rotational symmetry.
///
/// Degenerate configurations (inner circle not enclosed, or inner radius at
/// least the outer radius) are not rejected; the region simply shrinks or
/// empties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annulus {
    pub outer: Circle,
    pub inner: Circle,
}

impl Annulus {
    pub fn new(outer: Circle, inner: Circle) -> Self {
        Annulus { outer, inner }
    }

    /// `p` lies strictly between the two boundaries.
    pub fn contains(&self, p: DVec2) -> bool {
        self.outer.strictly_inside(p) && self.inner.strictly_outside(p)
    }
}
