//! Marker-based section extractor for generated listing text.
//!
//! The listing prompt asks the model for labeled plain text; this module
//! recovers the form fields from it. Extraction is deliberately lenient:
//! a missing label or marker yields an empty field, never an error, so a
//! partially well-formed response still renders.

use sellcraft_types::listing::ListingSections;

/// Section marker opening the cancellation-policy block.
pub const POLICY_MARKER: &str = "⚠️キャンセル時の注意事項";
/// Section marker opening the seller-skills block.
pub const SKILLS_MARKER: &str = "🎯出品者スキル";
/// Section marker opening the request-template block.
pub const TEMPLATE_MARKER: &str = "📝依頼テンプレート";

/// Value of a `label：...` line, first match wins.
///
/// Accepts both ASCII and full-width colons; the label must start the
/// line. Returns the rest of the line, trimmed.
pub fn labeled_value(text: &str, label: &str) -> Option<String> {
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix(label) {
            if let Some(value) = rest.strip_prefix(':').or_else(|| rest.strip_prefix('：')) {
                return Some(value.trim().to_string());
            }
        }
    }
    None
}

/// Byte offset just past the line that starts the service-detail body.
///
/// Prefers the explicit `サービス詳細（…）` header; falls back to the end
/// of the catchphrase line; absent both, the body starts at the top.
fn detail_start(text: &str) -> usize {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if is_detail_header(line.trim_end_matches('\n')) {
            return offset + line.len();
        }
        offset += line.len();
    }

    if let Some(idx) = text.find("キャッチコピー") {
        match text[idx..].find('\n') {
            Some(nl) => return idx + nl,
            None => return text.len(),
        }
    }

    0
}

/// `サービス詳細` followed by a parenthesized qualifier, either width.
fn is_detail_header(line: &str) -> bool {
    let Some(rest) = line.strip_prefix("サービス詳細") else {
        return false;
    };
    let opens = rest.starts_with('（') || rest.starts_with('(');
    let closes = rest.contains('）') || rest.contains(')');
    opens && closes
}

/// Parse generated listing text into its render-ready sections.
///
/// CRLF input is normalized first. The detail body runs from
/// [`detail_start`] to the earliest of the three markers (or end of
/// text); each marker block runs to the next marker after it. All spans
/// are trimmed.
pub fn parse_listing_sections(text: &str) -> ListingSections {
    let normalized = text.replace("\r\n", "\n");
    let normalized = normalized.as_str();

    let category = labeled_value(normalized, "カテゴリ").unwrap_or_default();
    let sub_category = labeled_value(normalized, "サブカテゴリ").unwrap_or_default();
    let title = labeled_value(normalized, "タイトル").unwrap_or_default();
    let catchphrase = labeled_value(normalized, "キャッチコピー").unwrap_or_default();

    let policy_idx = normalized.find(POLICY_MARKER);
    let skills_idx = normalized.find(SKILLS_MARKER);
    let template_idx = normalized.find(TEMPLATE_MARKER);

    let start = detail_start(normalized);
    let end = [policy_idx, skills_idx, template_idx]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(normalized.len());
    let detail = if start <= end {
        normalized[start..end].trim().to_string()
    } else {
        String::new()
    };

    let policy = policy_idx
        .map(|idx| {
            let body_start = idx + POLICY_MARKER.len();
            let body_end = [skills_idx, template_idx]
                .into_iter()
                .flatten()
                .filter(|&i| i > idx)
                .min()
                .unwrap_or(normalized.len());
            normalized[body_start..body_end].trim().to_string()
        })
        .unwrap_or_default();

    let skills = skills_idx
        .map(|idx| {
            let body_start = idx + SKILLS_MARKER.len();
            let body_end = match template_idx {
                Some(t) if t > idx => t,
                _ => normalized.len(),
            };
            normalized[body_start..body_end].trim().to_string()
        })
        .unwrap_or_default();

    let template = template_idx
        .map(|idx| normalized[idx + TEMPLATE_MARKER.len()..].trim().to_string())
        .unwrap_or_default();

    ListingSections {
        category,
        sub_category,
        title,
        catchphrase,
        detail,
        policy,
        skills,
        template,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "カテゴリ：デザイン\nサブカテゴリ：ロゴ\nタイトル：想いが伝わるロゴ制作\nキャッチコピー：あなたのブランドに、顔を。\nサービス詳細（以下の構成と順序）\n💭こんなお悩みありませんか？\n本文です。\n⚠️キャンセル時の注意事項\n着手後のキャンセルは承れません。\n🎯出品者スキル\nIllustrator歴10年。\n📝依頼テンプレート\nご希望の雰囲気：";

    #[test]
    fn test_full_document() {
        let s = parse_listing_sections(FULL);
        assert_eq!(s.category, "デザイン");
        assert_eq!(s.sub_category, "ロゴ");
        assert_eq!(s.title, "想いが伝わるロゴ制作");
        assert_eq!(s.catchphrase, "あなたのブランドに、顔を。");
        assert!(s.detail.starts_with("💭こんなお悩みありませんか？"));
        assert!(s.detail.ends_with("本文です。"));
        assert_eq!(s.policy, "着手後のキャンセルは承れません。");
        assert_eq!(s.skills, "Illustrator歴10年。");
        assert_eq!(s.template, "ご希望の雰囲気：");
    }

    #[test]
    fn test_crlf_normalized() {
        let s = parse_listing_sections(&FULL.replace('\n', "\r\n"));
        assert_eq!(s.category, "デザイン");
        assert_eq!(s.policy, "着手後のキャンセルは承れません。");
    }

    #[test]
    fn test_missing_everything_is_empty() {
        let s = parse_listing_sections("ただのテキスト");
        assert_eq!(s.category, "");
        assert_eq!(s.policy, "");
        assert_eq!(s.skills, "");
        assert_eq!(s.template, "");
        // No labels, no markers: the whole text is the detail body.
        assert_eq!(s.detail, "ただのテキスト");
    }

    #[test]
    fn test_ascii_colon_accepted() {
        let s = parse_listing_sections("カテゴリ: 動画\nタイトル:編集します");
        assert_eq!(s.category, "動画");
        assert_eq!(s.title, "編集します");
    }

    #[test]
    fn test_first_label_match_wins() {
        let s = parse_listing_sections("タイトル：一つ目\nタイトル：二つ目");
        assert_eq!(s.title, "一つ目");
    }

    #[test]
    fn test_sub_category_does_not_shadow_category() {
        let s = parse_listing_sections("サブカテゴリ：ロゴ");
        assert_eq!(s.category, "");
        assert_eq!(s.sub_category, "ロゴ");
    }

    #[test]
    fn test_detail_falls_back_to_after_catchphrase() {
        let text = "キャッチコピー：心に響く一行\n本文の始まり\n⚠️キャンセル時の注意事項\n注意";
        let s = parse_listing_sections(text);
        assert_eq!(s.detail, "本文の始まり");
        assert_eq!(s.policy, "注意");
    }

    #[test]
    fn test_detail_runs_to_end_without_markers() {
        let text = "サービス詳細（構成）\n本文だけが続きます";
        let s = parse_listing_sections(text);
        assert_eq!(s.detail, "本文だけが続きます");
    }

    #[test]
    fn test_out_of_order_markers() {
        // Template before skills: skills block runs to end of text.
        let text = "📝依頼テンプレート\nテンプレ\n🎯出品者スキル\nスキル内容";
        let s = parse_listing_sections(text);
        assert_eq!(s.skills, "スキル内容");
        assert!(s.template.contains("テンプレ"));
    }

    #[test]
    fn test_marker_at_offset_zero() {
        let text = "⚠️キャンセル時の注意事項\nポリシー本文";
        let s = parse_listing_sections(text);
        assert_eq!(s.detail, "");
        assert_eq!(s.policy, "ポリシー本文");
    }

    #[test]
    fn test_idempotent_on_same_input() {
        assert_eq!(parse_listing_sections(FULL), parse_listing_sections(FULL));
    }

    #[test]
    fn test_labeled_value_helper() {
        assert_eq!(
            labeled_value("タイトル： 余白つき ", "タイトル").as_deref(),
            Some("余白つき")
        );
        assert_eq!(labeled_value("なにもない", "タイトル"), None);
    }
}
