pub mod engine;
pub mod report;
pub mod score;

use crate::config::{ChartConfig, Config};
use crate::core::report::{ConfigSummary, Counts, FinalReport, Payload};
use crate::radar;
use crate::radar::svg::SvgSurface;
use crate::utils::answers::Selections;
use anyhow::{Result, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunProfile {
    Full,
    ScoreOnly,
    ChartOnly,
}

pub fn run_assessment(selections: &Selections, cfg: &Config) -> Result<FinalReport> {
    let result = engine::evaluate(selections);

    if result.applicable == 0 {
        bail!(
            "no applicable controls selected; answer at least one control with a value other than N/A"
        );
    }

    let tier = score::tier_for_score(result.score);
    let findings = result
        .worst
        .iter()
        .filter_map(report::Finding::from_answer)
        .collect();
    let counts = Counts::from_answers(&result.answers);
    let payload = Payload::build(result.score, &result.answers, &result.worst);
    let exit = report::evaluate_exit(result.score, tier, cfg);

    Ok(FinalReport {
        score: result.score,
        tier,
        applicable: result.applicable,
        counts,
        answers: result.answers,
        findings,
        payload,
        config: ConfigSummary {
            fail_on: cfg.general.fail_on,
            min_score: cfg.general.min_score,
        },
        exit,
    })
}

pub fn render_chart(report: &FinalReport, chart: &ChartConfig) -> String {
    let labels: Vec<&str> = report
        .answers
        .iter()
        .map(|answer| answer.control.id)
        .collect();
    let values: Vec<f64> = report
        .answers
        .iter()
        .map(|answer| f64::from(answer.numeric.unwrap_or(0)))
        .collect();

    let mut surface = SvgSurface::new(chart.width, chart.height);
    radar::render(
        &mut surface,
        &labels,
        &values,
        chart.scale,
        &radar::RadarStyle::default(),
    );
    surface.finish()
}
