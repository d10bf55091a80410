use std::collections::BTreeMap;
use std::path::Path;

use url::Url;

use crate::error::TemplateError;

use super::job::Job;

/// Separates target and payload on a write line (`URL|>PAYLOAD`).
pub const WRITE_DELIMITER: &str = "|>";

const ACTION_OPEN: &str = "{{";
const ACTION_CLOSE: &str = "}}";

/// Candidate jobs parsed from a rendered template. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTemplate {
    candidates: Vec<Job>,
}

impl JobTemplate {
    /// Reads, renders and parses a template file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or does not parse.
    pub fn load(path: &Path, vars: &BTreeMap<&'static str, String>) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path).map_err(|err| TemplateError::Read {
            path: path.to_path_buf(),
            source: err,
        })?;
        Self::parse(&source, vars)
    }

    /// Renders `source` and turns every non-empty line into a candidate job.
    ///
    /// # Errors
    ///
    /// Returns an error on template syntax errors, unknown variables, invalid
    /// targets, or when no line survives rendering.
    pub fn parse(source: &str, vars: &BTreeMap<&'static str, String>) -> Result<Self, TemplateError> {
        let rendered = render_template(source, vars)?;
        let mut candidates = Vec::new();
        for (idx, line) in rendered.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            candidates.push(parse_line(line, idx.saturating_add(1))?);
        }
        if candidates.is_empty() {
            return Err(TemplateError::NoJobs);
        }
        Ok(Self { candidates })
    }

    #[must_use]
    pub fn candidates(&self) -> &[Job] {
        &self.candidates
    }
}

/// Renders every line of `input`, substituting `{{.NAME}}` / `{{NAME}}` actions.
///
/// # Errors
///
/// Returns an error for unclosed or empty actions and for names missing from `vars`.
pub fn render_template(
    input: &str,
    vars: &BTreeMap<&'static str, String>,
) -> Result<Vec<String>, TemplateError> {
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| render_line(line, idx.saturating_add(1), vars))
        .collect()
}

fn render_line(
    line: &str,
    line_no: usize,
    vars: &BTreeMap<&'static str, String>,
) -> Result<String, TemplateError> {
    let mut rest = line;
    let mut output = String::with_capacity(line.len());

    while let Some(start) = rest.find(ACTION_OPEN) {
        let (before, after_start) = rest.split_at(start);
        output.push_str(before);
        let after = after_start.strip_prefix(ACTION_OPEN).unwrap_or_default();
        let Some(end) = after.find(ACTION_CLOSE) else {
            return Err(TemplateError::UnclosedAction { line: line_no });
        };
        let (key_part, after_end) = after.split_at(end);
        let key = key_part.trim();
        let name = key.strip_prefix('.').unwrap_or(key).trim();
        if name.is_empty() {
            return Err(TemplateError::EmptyAction { line: line_no });
        }
        let value = vars
            .get(name)
            .ok_or_else(|| TemplateError::UnknownVariable {
                name: name.to_owned(),
                line: line_no,
            })?;
        output.push_str(value);
        rest = after_end.strip_prefix(ACTION_CLOSE).unwrap_or_default();
    }
    output.push_str(rest);

    Ok(output)
}

fn parse_line(line: &str, line_no: usize) -> Result<Job, TemplateError> {
    match line.split_once(WRITE_DELIMITER) {
        Some((target, payload)) => Ok(Job::write(
            parse_target(target, line_no)?,
            payload.to_owned(),
        )),
        None => Ok(Job::read(parse_target(line, line_no)?)),
    }
}

fn parse_target(target: &str, line_no: usize) -> Result<Url, TemplateError> {
    let target = target.trim();
    Url::parse(target).map_err(|err| TemplateError::InvalidTarget {
        target: target.to_owned(),
        line: line_no,
        source: err,
    })
}
