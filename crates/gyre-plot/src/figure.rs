use glam::DVec2;
use gyre_flow::field::StreamField;
use gyre_flow::geometry::Annulus;
use gyre_flow::grid::{SampleGrid, GRID_EXTENT};
use log::warn;
use ndarray::Array2;

use crate::canvas::Canvas;
use crate::{color, font, RenderError};

/// One case's contribution to the combined figure.
pub struct CasePanel {
    pub title: String,
    pub field: StreamField,
    pub annulus: Annulus,
    /// Sorted contour levels for this panel.
    pub levels: Vec<f64>,
}

/// Caption drawn across the top of the combined figure.
pub const FIGURE_CAPTION: &str = "stokes flow streamlines between eccentric rotating cylinders";

/// Edge length of one square panel, in pixels.
pub const PANEL_SIZE: usize = 500;

const COLS: usize = 2;
const ROWS: usize = 3;
const MARGIN: usize = 24;
const PANEL_GAP: usize = 20;
const TITLE_BAND: usize = 28;
const CAPTION_BAND: usize = 56;
const TITLE_SCALE: usize = 2;
const CAPTION_SCALE: usize = 2;

const BACKGROUND: [u8; 3] = [255, 255, 255];
const BOUNDARY_COLOR: [u8; 3] = [20, 20, 20];
const TEXT_COLOR: [u8; 3] = [40, 40, 40];
const BOUNDARY_STROKE: f64 = 2.0;

/// Pixel width of the assembled figure.
pub fn figure_width() -> usize {
    2 * MARGIN + COLS * PANEL_SIZE + (COLS - 1) * PANEL_GAP
}

/// Pixel height of the assembled figure.
pub fn figure_height() -> usize {
    2 * MARGIN + CAPTION_BAND + ROWS * (TITLE_BAND + PANEL_SIZE) + (ROWS - 1) * PANEL_GAP
}

/// Assemble the 3x2 contour figure: one subplot per panel, each with its
/// title and boundary overlays, plus the overall caption. Panels beyond the
/// six figure slots are dropped with a warning. Slots without a panel stay
/// blank, so one failed case never hides the others.
pub fn render_figure(grid: &SampleGrid, panels: &[CasePanel]) -> Result<Canvas, RenderError> {
    if panels.is_empty() {
        return Err(RenderError::EmptyFigure);
    }

    let width = figure_width();
    let height = figure_height();
    let mut canvas = Canvas::new(width, height, BACKGROUND);

    let cap_w = font::text_width(FIGURE_CAPTION, CAPTION_SCALE);
    let cap_x = width.saturating_sub(cap_w) / 2;
    let cap_y = MARGIN + (CAPTION_BAND - font::FONT_HEIGHT * CAPTION_SCALE) / 2;
    font::draw_text(
        &mut canvas,
        cap_x as isize,
        cap_y as isize,
        FIGURE_CAPTION,
        TEXT_COLOR,
        CAPTION_SCALE,
    );

    for (k, panel) in panels.iter().enumerate() {
        let row = k / COLS;
        let col = k % COLS;
        if row >= ROWS {
            warn!("{} panels exceed the figure's {} slots, dropping the rest", panels.len(), ROWS * COLS);
            break;
        }

        let ox = MARGIN + col * (PANEL_SIZE + PANEL_GAP);
        let oy = MARGIN
            + CAPTION_BAND
            + row * (TITLE_BAND + PANEL_SIZE + PANEL_GAP)
            + TITLE_BAND;

        let t_w = font::text_width(&panel.title, TITLE_SCALE);
        let t_x = ox + PANEL_SIZE.saturating_sub(t_w) / 2;
        let t_y = oy - TITLE_BAND + (TITLE_BAND - font::FONT_HEIGHT * TITLE_SCALE) / 2;
        font::draw_text(
            &mut canvas,
            t_x as isize,
            t_y as isize,
            &panel.title,
            TEXT_COLOR,
            TITLE_SCALE,
        );

        draw_panel(&mut canvas, ox, oy, panel, grid);
    }

    Ok(canvas)
}

/// Rasterize one subplot: contour pixels from the masked field, then the two
/// boundary circles. The view window is fixed to the sampling window, with
/// equal scaling on both axes and no axis furniture.
fn draw_panel(canvas: &mut Canvas, ox: usize, oy: usize, panel: &CasePanel, grid: &SampleGrid) {
    let n = PANEL_SIZE;
    let world_min = -GRID_EXTENT;
    let world_span = 2.0 * GRID_EXTENT;

    // Field value at each pixel center; NaN where the fluid mask (or the
    // window edge) cuts the bilinear stencil.
    let vals = Array2::from_shape_fn((n, n), |(py, px)| {
        let wx = world_min + (px as f64 + 0.5) / n as f64 * world_span;
        let wy = world_min + ((n - 1 - py) as f64 + 0.5) / n as f64 * world_span;
        sample_bilinear(&panel.field, grid, wx, wy)
    });

    let levels = &panel.levels;
    let (lo, hi) = match (levels.first(), levels.last()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        // Nothing to contour; the boundary overlays still draw.
        _ => (0.0, 0.0),
    };

    for py in 0..n {
        for px in 0..n {
            let v = vals[[py, px]];
            if !v.is_finite() {
                continue;
            }

            // A pixel sits on a contour when some level falls between its
            // value and a right/down neighbor's value.
            let mut crossed: Option<usize> = None;
            for (qx, qy) in [(px + 1, py), (px, py + 1)] {
                if qx >= n || qy >= n {
                    continue;
                }
                let w = vals[[qy, qx]];
                if !w.is_finite() {
                    continue;
                }

                let (a, b) = if v <= w { (v, w) } else { (w, v) };
                let start = levels.partition_point(|&l| l < a);
                let end = levels.partition_point(|&l| l <= b);
                if start < end {
                    crossed = Some(crossed.map_or(start, |c| c.min(start)));
                }
            }

            if let Some(k) = crossed {
                let t = if hi > lo {
                    (levels[k] - lo) / (hi - lo)
                } else {
                    0.5
                };
                canvas.set((ox + px) as isize, (oy + py) as isize, color::map_to_rgb(t));
            }
        }
    }

    for circle in [panel.annulus.outer, panel.annulus.inner] {
        let (cx, cy) = world_to_pixel(circle.center, ox, oy, n);
        let r = circle.radius / world_span * n as f64;
        canvas.draw_ring(cx, cy, r, BOUNDARY_STROKE, BOUNDARY_COLOR);
    }
}

/// Canvas coordinates of a world point inside the panel at `(ox, oy)`.
fn world_to_pixel(p: DVec2, ox: usize, oy: usize, n: usize) -> (f64, f64) {
    let world_min = -GRID_EXTENT;
    let world_span = 2.0 * GRID_EXTENT;
    let px = ox as f64 + (p.x - world_min) / world_span * n as f64 - 0.5;
    let py = oy as f64 + (GRID_EXTENT - p.y) / world_span * n as f64 - 0.5;
    (px, py)
}

/// Bilinear field sample at a world point; NaN outside the lattice or when
/// any stencil corner is masked.
fn sample_bilinear(field: &StreamField, grid: &SampleGrid, wx: f64, wy: f64) -> f64 {
    let nx = grid.nx();
    let ny = grid.ny();
    let xs = grid.xs();
    let ys = grid.ys();

    let gx = (wx - xs[0]) / (xs[nx - 1] - xs[0]) * (nx - 1) as f64;
    let gy = (wy - ys[0]) / (ys[ny - 1] - ys[0]) * (ny - 1) as f64;
    if gx < 0.0 || gy < 0.0 || gx > (nx - 1) as f64 || gy > (ny - 1) as f64 {
        return f64::NAN;
    }

    let i0 = gx.floor() as usize;
    let j0 = gy.floor() as usize;
    let i1 = (i0 + 1).min(nx - 1);
    let j1 = (j0 + 1).min(ny - 1);
    let fx = gx - i0 as f64;
    let fy = gy - j0 as f64;

    let v00 = field.get(i0, j0);
    let v10 = field.get(i1, j0);
    let v01 = field.get(i0, j1);
    let v11 = field.get(i1, j1);

    v00 * (1.0 - fx) * (1.0 - fy)
        + v10 * fx * (1.0 - fy)
        + v01 * (1.0 - fx) * fy
        + v11 * fx * fy
}
