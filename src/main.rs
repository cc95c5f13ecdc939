use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gyre_flow::case::{CaseId, CaseParams, UnknownCase};
use gyre_flow::field::{evaluate, CONTOUR_LEVELS};
use gyre_flow::grid::SampleGrid;
use gyre_plot::{render_figure, CasePanel};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use log::{error, info};

/// Renders streamline figures for Stokes flow between eccentric rotating
/// cylinders.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Cases to render, as a string of identifiers (e.g. "acf").
    #[arg(short, long, default_value = "abcdef")]
    cases: String,

    /// Output image path.
    #[arg(short, long, default_value = "stokes_streamlines.png")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let cases = match parse_cases(&args.cases) {
        Ok(cases) => cases,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let grid = SampleGrid::standard();

    let bar_template =
        "Evaluating cases {spinner:.green} [{elapsed}] [{bar:40.white/white}] {pos}/{len}";
    let style = ProgressStyle::with_template(bar_template)
        .unwrap()
        .progress_chars("=> ")
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    let progress = ProgressBar::new(cases.len() as u64).with_style(style);

    // Cases are independent: one that yields nothing drawable is reported
    // and skipped, and the rest still reach the figure.
    let mut panels = Vec::with_capacity(cases.len());
    for case in cases.iter().copied().progress_with(progress) {
        let params = case.params();
        let (field, annulus) = evaluate(params, &grid);

        let Some(levels) = field.levels(CONTOUR_LEVELS) else {
            error!("case {case}: field has no drawable contour levels, skipping");
            continue;
        };

        panels.push(CasePanel {
            title: panel_title(case, params),
            field,
            annulus,
            levels,
        });
    }

    let canvas = match render_figure(&grid, &panels) {
        Ok(canvas) => canvas,
        Err(err) => {
            error!("assembling figure: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = canvas.save(&args.output) {
        error!("writing {}: {err}", args.output.display());
        return ExitCode::FAILURE;
    }

    info!(
        "wrote {} ({} of {} cases)",
        args.output.display(),
        panels.len(),
        cases.len()
    );
    ExitCode::SUCCESS
}

fn parse_cases(selection: &str) -> Result<Vec<CaseId>, UnknownCase> {
    selection
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(CaseId::try_from)
        .collect()
}

fn panel_title(case: CaseId, params: CaseParams) -> String {
    format!(
        "({})  w1={:.1}  w2={:.1}  r={:.2}  e={:.2}",
        case.label(),
        params.omega_outer,
        params.omega_inner,
        params.inner_radius,
        params.eccentricity,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cases_default_selection() {
        let cases = parse_cases("abcdef").unwrap();
        assert_eq!(cases, CaseId::ALL.to_vec());
    }

    #[test]
    fn test_parse_cases_rejects_unknown() {
        assert_eq!(parse_cases("abx").unwrap_err(), UnknownCase('x'));
    }

    #[test]
    fn test_parse_cases_skips_whitespace() {
        let cases = parse_cases("a c").unwrap();
        assert_eq!(cases, vec![CaseId::A, CaseId::C]);
    }

    #[test]
    fn test_panel_title_contents() {
        let title = panel_title(CaseId::E, CaseId::E.params());
        assert_eq!(title, "(e)  w1=1.0  w2=-4.0  r=0.30  e=0.10");
    }
}
