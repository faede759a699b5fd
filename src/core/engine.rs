use crate::catalog::{self, Control};
use crate::utils::answers::Selections;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    NotApplicable,
    Percent(u8),
    Invalid,
}

#[derive(Debug, Clone, Copy)]
pub struct Answer {
    pub control: &'static Control,
    pub selection: Selection,
    pub numeric: Option<u8>,
}

impl Answer {
    pub fn display_value(&self) -> String {
        match self.numeric {
            Some(value) => format!("{value}%"),
            None => "N/A".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub score: u8,
    pub answers: Vec<Answer>,
    pub worst: Vec<Answer>,
    pub applicable: usize,
}

pub fn evaluate(selections: &Selections) -> ScoreResult {
    let mut answers = Vec::with_capacity(catalog::CONTROLS.len());
    let mut sum = 0u32;
    let mut applicable = 0usize;

    for (index, control) in catalog::CONTROLS.iter().enumerate() {
        let selection = resolve_selection(selections.get(index));
        let numeric = match selection {
            Selection::Percent(value) => Some(value),
            Selection::NotApplicable | Selection::Invalid => None,
        };

        if let Some(value) = numeric {
            sum += u32::from(value);
            applicable += 1;
        }

        answers.push(Answer {
            control,
            selection,
            numeric,
        });
    }

    let score = if applicable > 0 {
        (f64::from(sum) / applicable as f64).round() as u8
    } else {
        0
    };

    // stable sort keeps catalog order for equal values.
    let mut worst: Vec<Answer> = answers
        .iter()
        .filter(|answer| answer.numeric.is_some())
        .copied()
        .collect();
    worst.sort_by_key(|answer| answer.numeric.unwrap_or(u8::MAX));
    worst.truncate(3);

    ScoreResult {
        score,
        answers,
        worst,
        applicable,
    }
}

fn resolve_selection(raw: Option<&str>) -> Selection {
    let Some(raw) = raw else {
        return Selection::Invalid;
    };

    let trimmed = raw.trim();
    if catalog::is_not_applicable(trimmed) {
        return Selection::NotApplicable;
    }

    match catalog::percent_value(trimmed) {
        Some(value) => Selection::Percent(value),
        None => Selection::Invalid,
    }
}
