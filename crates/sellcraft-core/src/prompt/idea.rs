//! Idea-generation prompt.

use sellcraft_types::generation::GenerationConfig;
use sellcraft_types::idea::{SkillIdeaDraft, UserInput};

use super::{schema_value, BuiltPrompt};

/// Build the 20-idea brainstorm prompt from the seller's raw input.
///
/// Asks for two batches of ten: mainstream ("standard") ideas and
/// differentiated ("niche") ones. The response is schema-constrained to
/// an array of `SkillIdeaDraft`.
pub fn build(input: &UserInput) -> BuiltPrompt {
    let instruction = format!(
        r#"
あなたはプロのスキルマーケット・コンサルタントです。
入力されたテキストから「好きなこと」「得意なこと」「経験」の情報を読み取り、それらを掛け合わせてスキルマーケット（ココナラなど）の出品アイデアを提案してください。

【入力された生データ】
{raw_text}

【タスク】
以下の2つのカテゴリで、それぞれ10個ずつ、合計20個のアイデアを出力してください。

1. **standard（王道・スタンダード）**: 市場で需要が安定しており、初心者でも参入しやすい手堅いアイデア。
2. **niche（ニッチ・ユニーク）**: 「えっ、そんなこと？」と思うような隙間産業や、ユーザーの個性が強烈に活きる差別化されたアイデア。

【出力形式】
JSON配列で出力してください。各要素は以下のキーを持つオブジェクトにしてください。
- "title": 出品サービスのタイトル
- "strength": このサービスで活かせる、ユーザーの潜在的な強みや独自性（具体的に）
- "solution": 誰のどんな悩みを解決するか
- "type": 文字列として "standard" または "niche" を指定

【ガイドライン】
- 最初に、入力データから「好きなこと」「得意なこと」「経験」をAIとして整理・解釈してください。
- 各アイデアは具体的で、すぐにでも出品できそうな具体的な内容にしてください。
"#,
        raw_text = input.raw_text
    );

    BuiltPrompt {
        instruction,
        config: GenerationConfig {
            response_schema: Some(schema_value::<Vec<SkillIdeaDraft>>()),
            ..Default::default()
        },
    }
}
