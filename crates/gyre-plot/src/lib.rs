use thiserror::Error;

pub mod canvas;
pub mod color;
pub mod figure;
mod font;

pub use canvas::Canvas;
pub use figure::{render_figure, CasePanel};

/// Failures producing or writing the output figure.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No case produced a drawable panel.
    #[error("no cases produced a drawable panel")]
    EmptyFigure,
    #[error(transparent)]
    Encode(#[from] image::ImageError),
}
