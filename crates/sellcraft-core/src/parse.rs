//! Typed decoding of model responses.
//!
//! Counterpart to the prompt builders: each parser decodes the shape its
//! builder declared. Decoding is strict (malformed JSON is an error) but
//! content validation is not re-run here -- the instruction already asked
//! for the right counts and shapes, and a short survey is still usable.

use sellcraft_types::error::ParseError;
use sellcraft_types::idea::{SkillIdea, SkillIdeaDraft};
use sellcraft_types::survey::{SurveyPattern, MANDATORY_QUESTION_COUNT};

/// Decode an idea-generation response and assign fresh local ids.
pub fn parse_ideas(payload: &str) -> Result<Vec<SkillIdea>, ParseError> {
    if payload.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    let drafts: Vec<SkillIdeaDraft> = serde_json::from_str(payload)?;
    Ok(drafts.into_iter().map(SkillIdea::from_draft).collect())
}

/// Decode a promotion response: a flat array of post strings.
///
/// Post content (line counts, emoji placement) is not re-validated; the
/// strings pass through as the model produced them.
pub fn parse_posts(payload: &str) -> Result<Vec<String>, ParseError> {
    if payload.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(serde_json::from_str(payload)?)
}

/// Decode a survey response: the three A/B/C patterns.
///
/// A pattern carrying fewer than the eight mandatory questions is kept
/// as-is with a warning; repairing the list here would mean inventing
/// question text the model never produced.
pub fn parse_survey_patterns(payload: &str) -> Result<Vec<SurveyPattern>, ParseError> {
    if payload.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    let patterns: Vec<SurveyPattern> = serde_json::from_str(payload)?;
    for pattern in &patterns {
        if pattern.questions.len() < MANDATORY_QUESTION_COUNT {
            tracing::warn!(
                pattern = %pattern.id,
                questions = pattern.questions.len(),
                "survey pattern is missing mandatory questions"
            );
        }
    }
    Ok(patterns)
}

/// Strip stray markdown tokens from listing text.
///
/// The listing prompt forbids markdown, but the model occasionally emits
/// some anyway: bold/underscore emphasis, heading hashes, backticks, and
/// `- ` bullets (rewritten to the Japanese middle-dot convention).
pub fn scrub_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let line = line.replace("**", "").replace("__", "").replace('`', "");

        let trimmed_start = line.trim_start();
        if let Some(rest) = strip_heading(trimmed_start) {
            out.push_str(rest);
        } else if let Some(rest) = trimmed_start.strip_prefix("- ") {
            let indent_len = line.len() - trimmed_start.len();
            out.push_str(&line[..indent_len]);
            out.push('・');
            out.push_str(rest);
        } else {
            out.push_str(&line);
        }
    }
    out
}

/// `## heading` -> `heading`; only at line start, hashes then a space.
fn strip_heading(line: &str) -> Option<&str> {
    let without_hashes = line.trim_start_matches('#');
    if without_hashes.len() == line.len() {
        return None;
    }
    without_hashes.strip_prefix(' ')
}
