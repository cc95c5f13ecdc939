/// Viridis-style color stops for contour coloring: deep purple through teal
/// to yellow, perceptually ordered by level.
pub(crate) const VIRIDIS_STOPS: [(f64, f64, f64); 5] = [
    (68.0, 1.0, 84.0),    // deep purple   (0.00)
    (59.0, 82.0, 139.0),  // blue          (0.25)
    (33.0, 145.0, 140.0), // teal          (0.50)
    (94.0, 201.0, 98.0),  // green         (0.75)
    (253.0, 231.0, 37.0), // yellow        (1.00)
];

/// Map a value in [0.0, 1.0] to an RGB color along the gradient.
pub fn map_to_rgb(t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let seg = t * 4.0;
    let i = (seg as usize).min(3);
    let s = seg - i as f64;

    let (r0, g0, b0) = VIRIDIS_STOPS[i];
    let (r1, g1, b1) = VIRIDIS_STOPS[i + 1];

    [
        (r0 + s * (r1 - r0)) as u8,
        (g0 + s * (g1 - g0)) as u8,
        (b0 + s * (b1 - b0)) as u8,
    ]
}
