use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Google-Forms question kinds the survey designer may emit.
///
/// `options` on a question is meaningful only for the choice kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuestionType {
    Text,
    Paragraph,
    Radio,
    Checkbox,
}

impl QuestionType {
    /// True for kinds that carry an options list.
    pub fn has_options(self) -> bool {
        matches!(self, QuestionType::Radio | QuestionType::Checkbox)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::Text => write!(f, "TEXT"),
            QuestionType::Paragraph => write!(f, "PARAGRAPH"),
            QuestionType::Radio => write!(f, "RADIO"),
            QuestionType::Checkbox => write!(f, "CHECKBOX"),
        }
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TEXT" => Ok(QuestionType::Text),
            "PARAGRAPH" => Ok(QuestionType::Paragraph),
            "RADIO" => Ok(QuestionType::Radio),
            "CHECKBOX" => Ok(QuestionType::Checkbox),
            other => Err(format!("invalid question type: '{other}'")),
        }
    }
}

/// One question definition inside a survey pattern.
///
/// Wire format is camelCase with `type` for the kind, matching the
/// structured-output contract sent to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SurveyQuestionDef {
    pub title: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Present and non-empty only for RADIO/CHECKBOX.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub required: bool,
    /// Short-answer guidance shown under the question.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

/// Identifier of one of the three fixed survey patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum PatternId {
    A,
    B,
    C,
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternId::A => write!(f, "A"),
            PatternId::B => write!(f, "B"),
            PatternId::C => write!(f, "C"),
        }
    }
}

impl FromStr for PatternId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(PatternId::A),
            "B" => Ok(PatternId::B),
            "C" => Ok(PatternId::C),
            other => Err(format!("invalid pattern id: '{other}'")),
        }
    }
}

/// A complete survey proposal: form metadata plus an ordered question list.
///
/// Every generation round yields exactly three patterns (A light, B
/// balanced, C improvement-focused); each always embeds the eight
/// mandatory questions in fixed order before its pattern-specific extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SurveyPattern {
    pub id: PatternId,
    pub name: String,
    pub description: String,
    pub form_title: String,
    pub form_description: String,
    pub questions: Vec<SurveyQuestionDef>,
}

/// Number of mandatory questions every pattern must carry.
pub const MANDATORY_QUESTION_COUNT: usize = 8;
