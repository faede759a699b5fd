use crate::config::{Config, FailOn};
use crate::core::engine::Answer;
use crate::core::score;
use colored::Colorize;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn advisory(self) -> &'static str {
        match self {
            Self::Low => "Solid baseline. Focus on targeted improvements and formalization.",
            Self::Medium => "Significant gaps. A 30/60/90-day remediation plan is recommended.",
            Self::High => {
                "Elevated risk. Prioritize quick wins (access, backups, vulnerabilities, monitoring)."
            }
        }
    }

    pub fn meets_fail_on(self, fail_on: FailOn) -> bool {
        match fail_on {
            FailOn::None => false,
            FailOn::High => matches!(self, Self::High),
            FailOn::Medium => matches!(self, Self::High | Self::Medium),
        }
    }

    fn colored(self) -> String {
        match self {
            Self::Low => self.as_str().green().bold().to_string(),
            Self::Medium => self.as_str().yellow().bold().to_string(),
            Self::High => self.as_str().red().bold().to_string(),
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Maturity {
    NotImplemented,
    Partial,
    InProgress,
    Implemented,
    Optimized,
}

impl Maturity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotImplemented => "Not implemented",
            Self::Partial => "Partial",
            Self::InProgress => "In progress",
            Self::Implemented => "Implemented",
            Self::Optimized => "Optimized",
        }
    }
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub maturity: Maturity,
    pub value: u8,
    pub question: String,
}

impl Finding {
    pub fn from_answer(answer: &Answer) -> Option<Self> {
        let value = answer.numeric?;
        Some(Self {
            id: answer.control.id.to_string(),
            title: answer.control.title.to_string(),
            maturity: score::maturity_for_value(value),
            value,
            question: answer.control.question.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Counts {
    pub not_implemented: usize,
    pub partial: usize,
    pub in_progress: usize,
    pub implemented: usize,
    pub optimized: usize,
    pub not_applicable: usize,
    pub total: usize,
}

impl Counts {
    pub fn from_answers(answers: &[Answer]) -> Self {
        let mut counts = Self::default();
        for answer in answers {
            match answer.numeric.map(score::maturity_for_value) {
                Some(Maturity::NotImplemented) => counts.not_implemented += 1,
                Some(Maturity::Partial) => counts.partial += 1,
                Some(Maturity::InProgress) => counts.in_progress += 1,
                Some(Maturity::Implemented) => counts.implemented += 1,
                Some(Maturity::Optimized) => counts.optimized += 1,
                None => counts.not_applicable += 1,
            }
        }
        counts.total = answers.len();
        counts
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Payload {
    pub score: u8,
    pub top_gaps: String,
    pub answers: String,
    pub message: String,
}

impl Payload {
    pub fn build(score: u8, answers: &[Answer], worst: &[Answer]) -> Self {
        let top_gaps = worst
            .iter()
            .filter_map(|answer| {
                answer.numeric.map(|value| {
                    format!("{} {} ({}%)", answer.control.id, answer.control.title, value)
                })
            })
            .collect::<Vec<_>>()
            .join(" | ");

        let answers_text = answers
            .iter()
            .map(|answer| {
                format!(
                    "{} {}: {}",
                    answer.control.id,
                    answer.control.title,
                    answer.display_value()
                )
            })
            .collect::<Vec<_>>()
            .join(" || ");

        let message = format!(
            "Hello, I would like the full GAP report (PDF) and a 30/60/90-day plan.\n\n\
             Preliminary result: {score}/100\n\
             Main gaps: {top_gaps}\n\n\
             My goal is to get a quote and schedule a call."
        );

        Self {
            score,
            top_gaps,
            answers: answers_text,
            message,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExitStatus {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl ExitStatus {
    pub fn reason_line(&self) -> String {
        self.reasons.join("; ")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub fail_on: FailOn,
    pub min_score: u8,
}

#[derive(Debug, Clone)]
pub struct FinalReport {
    pub score: u8,
    pub tier: RiskTier,
    pub applicable: usize,
    pub counts: Counts,
    pub answers: Vec<Answer>,
    pub findings: Vec<Finding>,
    pub payload: Payload,
    pub config: ConfigSummary,
    pub exit: ExitStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerRow {
    pub id: String,
    pub title: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub score: u8,
    pub tier: RiskTier,
    pub advisory: &'static str,
    pub applicable: usize,
    pub counts: Counts,
    pub findings: Vec<Finding>,
    pub answers: Vec<AnswerRow>,
    pub payload: Payload,
    pub config: ConfigSummary,
}

impl From<&FinalReport> for JsonReport {
    fn from(report: &FinalReport) -> Self {
        Self {
            score: report.score,
            tier: report.tier,
            advisory: report.tier.advisory(),
            applicable: report.applicable,
            counts: report.counts.clone(),
            findings: report.findings.clone(),
            answers: report
                .answers
                .iter()
                .map(|answer| AnswerRow {
                    id: answer.control.id.to_string(),
                    title: answer.control.title.to_string(),
                    value: answer.display_value(),
                    numeric: answer.numeric,
                })
                .collect(),
            payload: report.payload.clone(),
            config: report.config.clone(),
        }
    }
}

pub fn evaluate_exit(score: u8, tier: RiskTier, cfg: &Config) -> ExitStatus {
    let mut reasons = Vec::new();

    if score < cfg.general.min_score {
        reasons.push(format!(
            "score {} is below min_score {}",
            score, cfg.general.min_score
        ));
    }

    if tier.meets_fail_on(cfg.general.fail_on) {
        reasons.push(match cfg.general.fail_on {
            FailOn::Medium => "risk tier is Medium or worse".to_string(),
            FailOn::High => "risk tier is High".to_string(),
            FailOn::None => String::new(),
        });
    }

    ExitStatus {
        ok: reasons.is_empty(),
        reasons,
    }
}

pub fn print_human(report: &FinalReport) {
    println!(
        "GAP Readiness Score: {}/100 (Risk: {})",
        report.score,
        report.tier.colored()
    );
    println!("{}", report.tier.advisory());

    if !report.findings.is_empty() {
        println!();
        println!("TOP GAPS ({})", report.findings.len());
        for finding in &report.findings {
            println!(
                "[{}] {}: {} ({}%)",
                finding.id, finding.title, finding.maturity, finding.value
            );
            println!("-> {}", finding.question);
        }
    }

    println!();
    println!(
        "ANSWERS ({} of {} applicable)",
        report.applicable, report.counts.total
    );
    for answer in &report.answers {
        println!(
            "{} {}: {}",
            answer.control.id,
            answer.control.title,
            answer.display_value()
        );
    }

    println!();
    println!("Suggested follow-up message:");
    for line in report.payload.message.lines() {
        println!("  {line}");
    }

    println!();
    if report.exit.ok {
        println!("exit: OK");
    } else {
        println!("exit: FAILED ({})", report.exit.reason_line());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine;
    use crate::utils::answers::Selections;

    fn sample_answers(raw: &[&str]) -> engine::ScoreResult {
        engine::evaluate(&Selections::from_values(
            raw.iter().map(|value| Some((*value).to_string())).collect(),
        ))
    }

    #[test]
    fn payload_uses_pipe_delimited_formats() {
        let result = sample_answers(&[
            "0", "20", "40", "60", "80", "100", "NA", "100", "100", "100", "100", "100",
        ]);
        let payload = Payload::build(result.score, &result.answers, &result.worst);

        assert_eq!(
            payload.top_gaps,
            "5.1 Information security policies (0%) | 5.2 Roles and responsibilities (20%) | 5.9 Asset inventory (40%)"
        );
        assert!(payload.answers.contains("5.30 ICT continuity: N/A"));
        assert!(payload.answers.contains(" || "));
        assert_eq!(payload.answers.matches(" || ").count(), 11);
        assert!(payload.message.contains(&format!(
            "Preliminary result: {}/100",
            result.score
        )));
    }

    #[test]
    fn counts_cover_every_answer() {
        let result = sample_answers(&[
            "0", "20", "40", "60", "80", "100", "NA", "bad", "0", "60", "80", "100",
        ]);
        let counts = Counts::from_answers(&result.answers);
        assert_eq!(counts.total, 12);
        assert_eq!(counts.not_applicable, 2);
        assert_eq!(counts.not_implemented, 2);
        assert_eq!(counts.partial, 2);
        assert_eq!(counts.in_progress, 2);
        assert_eq!(counts.implemented, 2);
        assert_eq!(counts.optimized, 2);
    }

    #[test]
    fn exit_gates_on_tier_and_min_score() {
        let cfg = Config::default();
        assert!(evaluate_exit(80, RiskTier::Low, &cfg).ok);
        assert!(!evaluate_exit(30, RiskTier::High, &cfg).ok);

        let mut strict = Config::default();
        strict.general.min_score = 90;
        let status = evaluate_exit(85, RiskTier::Low, &strict);
        assert!(!status.ok);
        assert!(status.reason_line().contains("below min_score"));

        let mut lenient = Config::default();
        lenient.general.fail_on = FailOn::None;
        assert!(evaluate_exit(10, RiskTier::High, &lenient).ok);
    }

    #[test]
    fn findings_only_exist_for_applicable_answers() {
        let result = sample_answers(&[
            "NA", "NA", "NA", "NA", "NA", "NA", "NA", "NA", "NA", "NA", "NA", "20",
        ]);
        let findings: Vec<Finding> = result
            .worst
            .iter()
            .filter_map(Finding::from_answer)
            .collect();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].id, "8.13");
        assert_eq!(findings[0].maturity, Maturity::Partial);
    }
}
