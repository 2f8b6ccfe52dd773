//! Listing-page prompt.

use sellcraft_types::generation::GenerationConfig;
use sellcraft_types::idea::SkillIdea;

use super::BuiltPrompt;
use crate::taxonomy::format_category_master;

/// Build the full listing-page prompt for a selected idea.
///
/// The closed category master is embedded verbatim so the model can only
/// pick from it; the output is labeled plain text (the section extractor
/// depends on the label and marker lines requested here), never markdown.
pub fn build(idea: &SkillIdea) -> BuiltPrompt {
    let instruction = format!(
        r#"
【役割】
あなたは、リベシティ「スキルマーケットonline」に出品するプロの出品ページクリエイターです。
以下の「カテゴリマスター」と「カテゴリ自動決定ルール」を厳守し、出品ページとしてそのまま使える魅力的な文章を作成してください。

【カテゴリマスター】
{category_master}

【カテゴリ自動決定ルール】
・テーマ文から主要キーワードを抽出
・もっとも関連性が高いカテゴリとサブカテゴリを採用
・複数候補が一致した場合は一覧の上位カテゴリを優先

【入力情報】
テーマ：{title}
活かせる強み：{strength}
解決する悩み：{solution}

【出力形式】
カテゴリ：
サブカテゴリ：
タイトル：
キャッチコピー：
サービス詳細（以下の構成と順序）
　💭こんなお悩みありませんか？
　✅このサービスでできること
　🌟信頼と実績
　📦ご依頼の流れ
　💬こんな方におすすめ！
　💰価格の目安
　🔚さいごに
　⚠️キャンセル時の注意事項
　🎯出品者スキル
　📝依頼テンプレート

【出力条件】
・絵文字を適度に使用し、初心者にもわかりやすい親しみやすいトーンで構成
・タイトルは30文字以内
・キャッチコピーは100文字以内
・価格はカテゴリの一般相場を自動反映
・「さいごに」の後に必ず「キャンセル時の注意事項」を配置すること
・マークダウンの書式（# や ** など）は一切使わないこと
"#,
        category_master = format_category_master(),
        title = idea.title,
        strength = idea.strength,
        solution = idea.solution,
    );

    BuiltPrompt {
        instruction,
        config: GenerationConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sellcraft_types::idea::{IdeaKind, SkillIdeaDraft};

    fn idea() -> SkillIdea {
        SkillIdea::from_draft(SkillIdeaDraft {
            title: "YouTube動画編集代行".into(),
            strength: "3年の編集経験".into(),
            solution: "編集時間が取れない配信者".into(),
            kind: IdeaKind::Standard,
        })
    }

    #[test]
    fn test_embeds_idea_fields() {
        let prompt = build(&idea());
        assert!(prompt.instruction.contains("テーマ：YouTube動画編集代行"));
        assert!(prompt.instruction.contains("活かせる強み：3年の編集経験"));
        assert!(prompt.instruction.contains("解決する悩み：編集時間が取れない配信者"));
    }

    #[test]
    fn test_embeds_full_taxonomy() {
        let prompt = build(&idea());
        assert!(prompt.instruction.contains("イラスト・マンガ（SNSアイコン"));
        assert!(prompt.instruction.contains("占い（恋愛・結婚"));
    }

    #[test]
    fn test_requests_section_markers_in_order() {
        let prompt = build(&idea());
        let text = &prompt.instruction;
        let last = text.find("🔚さいごに").expect("closing section");
        let policy = text.find("⚠️キャンセル時の注意事項").expect("policy section");
        let skills = text.find("🎯出品者スキル").expect("skills section");
        let template = text.find("📝依頼テンプレート").expect("template section");
        assert!(last < policy && policy < skills && skills < template);
    }

    #[test]
    fn test_free_text_output() {
        let prompt = build(&idea());
        assert!(prompt.config.response_schema.is_none());
    }
}
