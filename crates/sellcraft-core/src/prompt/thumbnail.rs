//! Thumbnail prompts: tagline shortening and image generation.

use sellcraft_types::generation::{GenerationConfig, ImageOptions};
use sellcraft_types::idea::SkillIdea;

use super::BuiltPrompt;
use crate::listing::labeled_value;

/// Maximum tagline length (characters) allowed inside the thumbnail.
pub const TAGLINE_MAX_CHARS: usize = 18;

/// Build the tagline-compression prompt.
///
/// Callers should skip the call entirely when the catchphrase already
/// fits (`chars().count() <= TAGLINE_MAX_CHARS`); see
/// [`truncate_tagline`] for the failure fallback.
pub fn build_shorten_tagline(catchphrase: &str) -> BuiltPrompt {
    let instruction = format!(
        r#"以下のキャッチコピーを、その核心的なメッセージを保ちながら、15-18文字程度に短縮してください。

【元のキャッチコピー】
{catchphrase}

【要件】
- 15-18文字程度（厳密に15文字でなくても良い。自然な区切りを優先）
- 最も重要なキーワードやメッセージを残す
- 自然な日本語にする
- 句読点は必要に応じて使用可
- 出力は短縮後のキャッチコピーのみ

【出力形式】
短縮後のキャッチコピーのみをテキストで返す（説明や補足は不要）"#
    );

    BuiltPrompt {
        instruction,
        config: GenerationConfig {
            temperature: Some(0.7),
            max_output_tokens: Some(50),
            ..Default::default()
        },
    }
}

/// Hard-truncate a tagline to [`TAGLINE_MAX_CHARS`] characters.
///
/// Character-boundary safe; used when the shortening call fails or the
/// model overshoots past 20 characters.
pub fn truncate_tagline(tagline: &str) -> String {
    tagline.chars().take(TAGLINE_MAX_CHARS).collect()
}

/// Title and catchphrase to embed in the thumbnail, pulled from the
/// generated listing when present.
///
/// The title label in the listing wins over the raw idea title so the
/// image matches what the seller will actually publish.
pub fn thumbnail_texts(idea: &SkillIdea) -> (String, String) {
    let content = idea.generated_content.as_deref().unwrap_or("");
    let title = labeled_value(content, "タイトル").unwrap_or_else(|| idea.title.clone());
    let catchphrase = labeled_value(content, "キャッチコピー").unwrap_or_default();
    (title, catchphrase)
}

/// Build the image-generation prompt.
///
/// High-quality mode embeds the exact title and an already-shortened
/// tagline; standard mode forbids any in-image text. Both use the 3:2
/// thumbnail ratio, with the 2K tier reserved for high quality.
pub fn build_image(
    idea: &SkillIdea,
    title: &str,
    short_tagline: &str,
    high_quality: bool,
) -> BuiltPrompt {
    let instruction = if high_quality {
        format!(
            r#"Generate a thumbnail image for a skill market service listing.
**Text in Image:**
- Title: "{title}"
- Short Tagline: "{short_tagline}"
**Context:** {strength}, {solution}
**Requirements:**
- Aspect Ratio: 3:2
- **Text Handling:** Include the Service Title exactly as provided. Use the Short Tagline exactly as provided (already condensed to 15-18 characters). Display both texts large, bold, and easy to read.
- Ensure text is visually appealing and does NOT overcrowd the image.
- Professional style.
- High definition."#,
            strength = idea.strength,
            solution = idea.solution,
        )
    } else {
        format!(
            r#"Generate a thumbnail image for a skill market service listing.
**Context:** "{title}", {strength}
**Requirements:** Do NOT include any text inside the image. Pure visual representation. Professional and attractive."#,
            strength = idea.strength,
        )
    };

    let image = if high_quality {
        ImageOptions::thumbnail_high_quality()
    } else {
        ImageOptions::thumbnail()
    };

    BuiltPrompt {
        instruction,
        config: GenerationConfig {
            image: Some(image),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sellcraft_types::idea::{IdeaKind, SkillIdeaDraft};

    fn idea_with_content(content: Option<&str>) -> SkillIdea {
        let mut idea = SkillIdea::from_draft(SkillIdeaDraft {
            title: "アイデア題".into(),
            strength: "強み".into(),
            solution: "悩み".into(),
            kind: IdeaKind::Standard,
        });
        idea.generated_content = content.map(str::to_string);
        idea
    }

    #[test]
    fn test_truncate_tagline_char_boundary() {
        let long = "あ".repeat(30);
        let cut = truncate_tagline(&long);
        assert_eq!(cut.chars().count(), 18);
    }

    #[test]
    fn test_truncate_short_tagline_is_noop() {
        assert_eq!(truncate_tagline("短い"), "短い");
    }

    #[test]
    fn test_thumbnail_texts_prefer_listing_labels() {
        let idea = idea_with_content(Some(
            "カテゴリ：動画\nタイトル：本物のタイトル\nキャッチコピー：響くコピー\n本文",
        ));
        let (title, catchphrase) = thumbnail_texts(&idea);
        assert_eq!(title, "本物のタイトル");
        assert_eq!(catchphrase, "響くコピー");
    }

    #[test]
    fn test_thumbnail_texts_fall_back_to_idea_title() {
        let idea = idea_with_content(None);
        let (title, catchphrase) = thumbnail_texts(&idea);
        assert_eq!(title, "アイデア題");
        assert!(catchphrase.is_empty());
    }

    #[test]
    fn test_high_quality_embeds_texts_and_2k() {
        let idea = idea_with_content(None);
        let prompt = build_image(&idea, "題名", "短いコピー", true);
        assert!(prompt.instruction.contains("Title: \"題名\""));
        assert!(prompt.instruction.contains("Short Tagline: \"短いコピー\""));
        let image = prompt.config.image.expect("image options");
        assert_eq!(image.aspect_ratio, "3:2");
        assert_eq!(image.resolution.as_deref(), Some("2K"));
    }

    #[test]
    fn test_standard_mode_forbids_text() {
        let idea = idea_with_content(None);
        let prompt = build_image(&idea, "題名", "", false);
        assert!(prompt.instruction.contains("Do NOT include any text"));
        let image = prompt.config.image.expect("image options");
        assert!(image.resolution.is_none());
    }

    #[test]
    fn test_shorten_prompt_config() {
        let prompt = build_shorten_tagline("とても長いキャッチコピーがここにあります");
        assert!(prompt.instruction.contains("15-18文字程度に短縮"));
        assert_eq!(prompt.config.temperature, Some(0.7));
        assert_eq!(prompt.config.max_output_tokens, Some(50));
    }
}
