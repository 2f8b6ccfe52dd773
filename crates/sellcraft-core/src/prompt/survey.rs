//! Survey-design prompt.

use sellcraft_types::generation::GenerationConfig;
use sellcraft_types::survey::SurveyPattern;

use super::{schema_value, BuiltPrompt};

/// Placeholder used when no price hint was supplied.
pub const PRICE_UNSET: &str = "価格未定";

/// Build the three-pattern survey prompt.
///
/// The instruction fixes the eight mandatory questions and their order,
/// the per-pattern extra-question budgets, and the optional
/// price-perception pair which must quote `price_hint` verbatim. The
/// response is schema-constrained to an array of `SurveyPattern`.
pub fn build(service_body: &str, price_hint: Option<&str>) -> BuiltPrompt {
    let service_price = match price_hint {
        Some(hint) if !hint.trim().is_empty() => hint,
        _ => PRICE_UNSET,
    };

    let instruction = format!(
        r#"
あなたは「サービス提供後アンケート（Google Form前提）」の設計者です。
入力されたサービス本文を踏まえ、改善に役立つ情報を集めるアンケートを
3パターン（A/B/C）で設計してください。
Aは2〜3分、Bは3〜4分、Cは4〜5分を目安に、設問量を段階的に増やしてください。

【入力】
- サービス本文: {service_body}
- サービス価格（数値・円）: {service_price}

────────────────────────────────────────
【全体ルール（最重要）】
- 個人情報（本名、住所、連絡先）は収集しない。
- 記述式の設問は必要最小限にし、必ず「1〜2行でOK」「箇条書きOK」等の短文誘導を helpText に入れる。
- 選択式で回収できるものは選択式を優先し、自由記述は理由の深掘りに限定する。
- サービス本文から読み取れる提供価値（例：ヒアリング、提案の具体性、スピード、丁寧さ、成果物品質など）を、
  optionsに反映して“サービスに沿った選択肢”にする（本文に無い要素の捏造は禁止）。
- 「動機」と「ご受講の動機」は重複させない（動機は1問に統合する）。
- 「決め手」は“最後の一押し”にフォーカスする（動機の焼き直しにしない）。
- 断定表現（例：改善に繋げます）は避け、「今後の参考に」「見直しのヒントとして」などにする。
- 体験形式（対面/オンライン面談/非対面の納品型）に関わらず自然な設問にするため、
  「当日の対応」という表現は避け、「やりとり・進行（連絡〜納品まで）」の満足度として統一する。
- 最後に、ひとこと（任意）
　「もしよければ、ひとこと感想をいただけると励みになります（任意）。」で締める。

────────────────────────────────────────
【必須設問（全パターン共通・順序厳守）】
※以下8問は必ず全パターンに含め、順序も固定する。
1) リベネーム（TEXT・必須）
  title: 「リベシティでの表示名（リベネーム）を教えてください。」
2) 申し込んだ動機（CHECKBOX・必須）
  title: 「今回お申し込みいただいた理由を教えてください（複数選択可）。」
  options: サービス本文を参考に作成し「その他」を必ず含める
3) 申込の決め手（RADIO・必須）
  title: 「お申し込みの“決め手”として最も近いものを1つ選んでください。」
  options: サービス本文を参考に作成し「その他」を含める
    （例：内容の具体性／レビュー・実績／人柄・安心感／価格／納期／やりとりの丁寧さ など）
4) サービス全体の満足度（RADIO・必須）
  title: 「サービス全体の満足度を教えてください。」
  options: 「とても満足」「満足」「どちらともいえない」「やや不満」「不満」
5) 期待との比較（RADIO・必須）
  title: 「事前の期待と比べて、今回の内容はいかがでしたか？」
  options: 「期待以上」「期待どおり」「期待より少し下」「期待以下」
6) やりとり・進行の満足度（RADIO・必須）
  title: 「やりとりや進行（連絡・ヒアリング・納品までの流れ）はいかがでしたか？」
  options: 「とても満足」「満足」「どちらともいえない」「やや不満」「不満」
7) おすすめ（PARAGRAPH・必須）
  title: 「このサービスは、どんな方におすすめだと思いますか？（1〜2行でOKです。）」
  helpText: 「1〜2行でOKです。『どんな悩みの人に合いそうか』があると参考になります。」
8) 改善点（PARAGRAPH・必須）
  title: 「より良くするために、改善できそうな点があれば教えてください（1〜2行でOK／箇条書きでも可）。」
  helpText: 「1〜2行でOKです。箇条書きでも構いません。」

────────────────────────────────────────
【価格に関する設問（必須ではなく“任意”で追加する）】
※「適正価格レンジ」は作らない。代わりに「価格印象（5段階）」を任意で追加する。
- 価格印象（RADIO・任意）
  title: 「今回の価格（{service_price}円）の印象に最も近いものを選んでください（任意）。」
  options: 「とても安い」「やや安い」「妥当」「やや高い」「とても高い」
  helpText: 「目安でOKです。迷ったら『妥当』で大丈夫です。」
- 理由（TEXTまたはPARAGRAPH・任意）
  title: 「（任意）そう感じた理由があれば、一言で教えてください。」
  helpText: 「1行でOKです。『高い/安い』と感じた場合は理由があると参考になります。」

※パターンCでは、価格印象＋理由の2問セットを原則採用する（任意のまま）。
※パターンAでは価格設問は入れない（最短優先）。B以上で採用を検討する。

────────────────────────────────────────
【追加で使える設問候補（サービス本文に沿って採用・優先度順）】
※必須8問に加えて、各パターンの時間内に収まる範囲で追加する。
優先1：良かった点（CHECKBOX・任意）
  title: 「特に良かった点があれば選んでください（任意／複数選択可）。」
  options: サービス本文に沿って作成＋「その他」
  （例：説明の分かりやすさ／提案の具体性／やりとりの丁寧さ／スピード感／安心感／成果物の品質 など）
優先2：事前サポートで役立った点（CHECKBOX・任意）
  title: 「事前サポートで役立った点があれば選んでください（任意／複数選択可）。」
  options: サービス本文に沿って作成＋「その他」
優先3：期待以下の理由（分岐・TEXTまたはPARAGRAPH・任意）
  title: 「（『期待以下』を選んだ方へ）差し支えなければ理由を教えてください（任意）。」
  helpText: 「差し支えない範囲で大丈夫です。1〜2行でOKです。」
優先4：NPS（RADIO・任意）
  title: 「知人・同僚にこのサービスを勧めたい度合いを教えてください（0〜10）（任意）。」
  options: 0〜10
  helpText: 「0=まったく勧めたくない、10=ぜひ勧めたい」
優先5：価格印象（RADIO・任意）＋理由（任意）
  ※上記「価格に関する設問」ブロックを採用する

────────────────────────────────────────
【パターン別の設問量（目安）】
- パターンA：サクッと（2〜3分）
  - 必須8問のみ（追加0〜1問まで）
  - 追加するなら「良かった点（CHECKBOX・任意）」のみ推奨
  - 価格印象/NPS/理由記述は入れない
- パターンB：ちょうど良い（3〜4分）
  - 必須8問 + 追加1〜3問
  - 推奨：良かった点、事前サポートで役立った点
  - 価格印象（任意）＋理由（任意）は余裕があれば追加
- パターンC：改善に活かす（4〜5分）
  - 必須8問 + 追加3〜6問
  - 推奨：良かった点、事前サポートで役立った点、NPS、価格印象（任意）＋理由（任意）
  - 期待以下の理由は分岐の任意として追加

────────────────────────────────────────
【導入文（formDescription）要件】
- 丁寧・前向き・押しつけない文体。
- 「所要時間：A=2〜3分/B=3〜4分/C=4〜5分」相当の表現を入れる（表示は簡潔でOK）。
- 例：ご利用のお礼＋今後の参考にしたい旨＋短時間で終わる旨＋協力への感謝。

────────────────────────────────────────
【出力形式（厳守）】
JSON配列 Array<SurveyPattern> で出力する。JSON以外の文章は出さない。
Questions配列内の type は "TEXT", "PARAGRAPH", "RADIO", "CHECKBOX" のいずれか。
RADIO/CHECKBOX のみ options を付与する。TEXT/PARAGRAPHにはoptionsを付けない。

────────────────────────────────────────
【最終チェック（必須）】
- 必須8問が全パターンに含まれ、順序が一致していること。
- 価格印象（任意）を入れる場合は、サービス価格（{service_price}円）を文面に含めること。
- 記述設問に短文誘導の helpText が付いていること。
- A=2〜3分、B=3〜4分、C=4〜5分になるように設問数・記述量を調整していること。
- 重複質問（動機系など）が無いこと。
- 出力はJSONとしてパースできること（クォートの閉じ忘れや全角記号の混入に注意）。
"#
    );

    BuiltPrompt {
        instruction,
        config: GenerationConfig {
            response_schema: Some(schema_value::<Vec<SurveyPattern>>()),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_hint_quoted_verbatim() {
        let prompt = build("本文", Some("5000"));
        assert!(prompt.instruction.contains("今回の価格（5000円）"));
        assert!(prompt.instruction.contains("サービス価格（数値・円）: 5000"));
    }

    #[test]
    fn test_missing_price_uses_placeholder() {
        for hint in [None, Some(""), Some("   ")] {
            let prompt = build("本文", hint);
            assert!(prompt.instruction.contains(PRICE_UNSET), "hint {hint:?}");
        }
    }

    #[test]
    fn test_mandatory_questions_fixed() {
        let prompt = build("本文", None);
        assert!(prompt.instruction.contains("※以下8問は必ず全パターンに含め、順序も固定する。"));
        assert!(prompt.instruction.contains("リベネーム（TEXT・必須）"));
        assert!(prompt.instruction.contains("改善点（PARAGRAPH・必須）"));
    }

    #[test]
    fn test_requests_pattern_schema() {
        let prompt = build("本文", None);
        let schema = prompt.config.response_schema.expect("schema");
        assert_eq!(schema["type"], "array");
    }

    #[test]
    fn test_pattern_budgets_present() {
        let prompt = build("本文", None);
        assert!(prompt.instruction.contains("パターンA：サクッと（2〜3分）"));
        assert!(prompt.instruction.contains("パターンB：ちょうど良い（3〜4分）"));
        assert!(prompt.instruction.contains("パターンC：改善に活かす（4〜5分）"));
    }
}
