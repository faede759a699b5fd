use crate::catalog;
use anyhow::{Context, Result, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

static ANSWER_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^gap_([1-9][0-9]*)$").expect("valid answer key regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    values: Vec<Option<String>>,
}

impl Selections {
    pub fn from_values(values: Vec<Option<String>>) -> Self {
        Self { values }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.values
            .get(index)
            .and_then(|value| value.as_deref())
            .filter(|value| !value.trim().is_empty())
    }
}

pub fn parse_list(raw: &str) -> Result<Selections> {
    let entries: Vec<&str> = raw.split(',').map(str::trim).collect();
    if entries.len() > catalog::CONTROLS.len() {
        bail!(
            "got {} answers, the catalog has only {} controls",
            entries.len(),
            catalog::CONTROLS.len()
        );
    }

    let values = entries
        .into_iter()
        .map(|entry| {
            if entry.is_empty() {
                None
            } else {
                Some(entry.to_string())
            }
        })
        .collect();

    Ok(Selections::from_values(values))
}

pub fn parse_answers_toml(content: &str) -> Result<Selections> {
    let table: BTreeMap<String, toml::Value> =
        toml::from_str(content).context("failed parsing answers file")?;

    let mut values: Vec<Option<String>> = vec![None; catalog::CONTROLS.len()];
    for (key, value) in table {
        let Some(captures) = ANSWER_KEY_RE.captures(&key) else {
            bail!(
                "unrecognized answer key {} (expected gap_1..gap_{})",
                key,
                catalog::CONTROLS.len()
            );
        };

        let index: usize = captures[1].parse().context("answer key index")?;
        if index > catalog::CONTROLS.len() {
            bail!(
                "answer key {} is out of range (catalog has {} controls)",
                key,
                catalog::CONTROLS.len()
            );
        }

        let raw = match value {
            toml::Value::String(text) => text,
            toml::Value::Integer(number) => number.to_string(),
            other => bail!(
                "answer {} must be a string or integer, got {}",
                key,
                other.type_str()
            ),
        };

        values[index - 1] = if raw.trim().is_empty() {
            None
        } else {
            Some(raw)
        };
    }

    Ok(Selections::from_values(values))
}

pub fn load_answers_file(path: &Path) -> Result<Selections> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading answers file {}", path.display()))?;
    parse_answers_toml(&content)
        .with_context(|| format!("failed parsing answers file {}", path.display()))
}

pub fn template_toml() -> String {
    let mut out = String::new();
    out.push_str("# gapscan answers\n");
    out.push_str("# one entry per control; allowed values: \"NA\"");
    for option in &catalog::ANSWER_OPTIONS {
        if let catalog::OptionValue::Percent(value) = option.value {
            let _ = write!(out, ", \"{value}\"");
        }
    }
    out.push('\n');

    for (index, control) in catalog::CONTROLS.iter().enumerate() {
        out.push('\n');
        let _ = writeln!(out, "# {} {}", control.id, control.title);
        let _ = writeln!(out, "# {}", control.question);
        let _ = writeln!(out, "{} = \"\"", catalog::selection_key(index));
    }

    out
}
