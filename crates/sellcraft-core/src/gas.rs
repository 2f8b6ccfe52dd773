//! Survey-to-Google-Apps-Script compiler.
//!
//! Turns a `SurveyPattern` into a self-contained GAS routine the seller
//! pastes into the Apps Script editor; running it builds the Google Form
//! and logs its URLs. The generated script is an artifact handed to the
//! user -- it is never executed here.

use sellcraft_types::survey::{QuestionType, SurveyPattern, SurveyQuestionDef};

/// Escape a string for embedding in a single-quoted GAS literal.
///
/// Order matters: backslashes first (so later escapes are not doubled),
/// then quotes, then newlines; carriage returns are dropped outright.
pub fn escape_gas_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "")
}

/// Quoted, comma-separated choice list for `setChoiceValues`.
fn choice_list(options: Option<&[String]>) -> String {
    options
        .unwrap_or_default()
        .iter()
        .map(|o| format!("'{}'", escape_gas_string(o)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One builder chunk per question.
fn question_code(q: &SurveyQuestionDef) -> String {
    let clean_title = escape_gas_string(&q.title);
    let help_line = match q.help_text.as_deref() {
        Some(help) if !help.is_empty() => format!(".setHelpText('{}')", escape_gas_string(help)),
        _ => String::new(),
    };
    let req_line = format!(".setRequired({})", q.required);

    match q.question_type {
        QuestionType::Text => format!(
            "  form.addTextItem()\n    .setTitle('{clean_title}')\n    {help_line}\n    {req_line};"
        ),
        QuestionType::Paragraph => format!(
            "  form.addParagraphTextItem()\n    .setTitle('{clean_title}')\n    {help_line}\n    {req_line};"
        ),
        QuestionType::Radio => format!(
            "  form.addMultipleChoiceItem()\n    .setTitle('{clean_title}')\n    .setChoiceValues([{options}])\n    {help_line}\n    {req_line};",
            options = choice_list(q.options.as_deref()),
        ),
        QuestionType::Checkbox => format!(
            "  form.addCheckboxItem()\n    .setTitle('{clean_title}')\n    .setChoiceValues([{options}])\n    {help_line}\n    {req_line};",
            options = choice_list(q.options.as_deref()),
        ),
    }
}

/// Compile a survey pattern into a complete GAS routine.
///
/// Deterministic: the same pattern always yields byte-identical output.
pub fn compile_form_script(pattern: &SurveyPattern) -> String {
    let questions = pattern
        .questions
        .iter()
        .map(question_code)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        r#"function createSurveyForm() {{
  // 1. フォームを作成
  var form = FormApp.create('{title}');
  form.setDescription('{description}');

  // 2. 質問を追加
{questions}

  // 3. URLをログに出力
  Logger.log('--------------------------------------------------');
  Logger.log('編集用URL (管理者用): ' + form.getEditUrl());
  Logger.log('回答用URL (公開用): ' + form.getPublishedUrl());
  Logger.log('--------------------------------------------------');
}}"#,
        title = escape_gas_string(&pattern.form_title),
        description = escape_gas_string(&pattern.form_description),
    )
}
