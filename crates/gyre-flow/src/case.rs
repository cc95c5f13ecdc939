use std::fmt;

use thiserror::Error;

/// Fixed radius of the outer cylinder. The outer center sits at the origin.
pub const OUTER_RADIUS: f64 = 1.0;

/// Identifier for one of the six built-in flow configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseId {
    A,
    B,
    C,
    D,
    E,
    F,
}

/// Parameters for one eccentric-cylinder configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseParams {
    /// Radius of the inner cylinder, in (0, [`OUTER_RADIUS`]).
    pub inner_radius: f64,
    /// Offset of the inner center from the origin, along the x-axis.
    pub eccentricity: f64,
    /// Angular velocity of the outer cylinder.
    pub omega_outer: f64,
    /// Angular velocity of the inner cylinder.
    pub omega_inner: f64,
}

impl CaseId {
    /// All six cases, in figure order.
    pub const ALL: [CaseId; 6] = [
        CaseId::A,
        CaseId::B,
        CaseId::C,
        CaseId::D,
        CaseId::E,
        CaseId::F,
    ];

    /// Parameter table for the built-in cases.
    pub fn params(self) -> CaseParams {
        let (inner_radius, eccentricity, omega_outer, omega_inner) = match self {
            CaseId::A => (0.25, 0.5, 0.0, 1.0),
            CaseId::B => (0.5, 0.5, 0.0, 1.0),
            CaseId::C => (0.5, 0.5, 1.0, 0.0),
            CaseId::D => (0.5, 0.25, 1.0, 0.0),
            CaseId::E => (0.3, 0.1, 1.0, -4.0),
            CaseId::F => (0.3, 0.1, 1.0, 4.0),
        };

        CaseParams {
            inner_radius,
            eccentricity,
            omega_outer,
            omega_inner,
        }
    }

    pub fn label(self) -> char {
        match self {
            CaseId::A => 'a',
            CaseId::B => 'b',
            CaseId::C => 'c',
            CaseId::D => 'd',
            CaseId::E => 'e',
            CaseId::F => 'f',
        }
    }
}

impl TryFrom<char> for CaseId {
    type Error = UnknownCase;

    fn try_from(c: char) -> Result<CaseId, UnknownCase> {
        match c.to_ascii_lowercase() {
            'a' => Ok(CaseId::A),
            'b' => Ok(CaseId::B),
            'c' => Ok(CaseId::C),
            'd' => Ok(CaseId::D),
            'e' => Ok(CaseId::E),
            'f' => Ok(CaseId::F),
            other => Err(UnknownCase(other)),
        }
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The requested identifier is not one of the six known cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown case `{0}`, expected one of a-f")]
pub struct UnknownCase(pub char);
