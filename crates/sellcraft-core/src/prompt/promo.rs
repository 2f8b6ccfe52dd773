//! Promotional-post prompt.

use sellcraft_types::generation::GenerationConfig;

use super::{schema_value, BuiltPrompt};

/// Build the 20-post promotion prompt from a listing body and its URL.
///
/// The instruction carries the whole rulebook: the strict 4-line shape,
/// exactly three testimonial-origin posts (never fabricated), the
/// sentence-final emoji rules, and the 125-character budget for the
/// first three lines. The response is schema-constrained to a string
/// array.
pub fn build(service_body: &str, service_url: &str) -> BuiltPrompt {
    let instruction = format!(
        r#"
あなたは「リベシティのつぶやき投稿」を作るプロのコピーライターです。
以下の【出品サービスページ本文】を読み取り、リベシティの雰囲気に合う
「前向き・丁寧・押しつけない」文章で、つぶやき投稿を20本作成してください。

【出品サービスページ本文】
{service_body}

【差し込み情報】
- 出品サービスURL：{service_url}

【必須フォーマット（1投稿＝4行）】
各投稿は必ず次の4行で構成してください（行数を増やさない）：
1) 悩み（1〜2文：サービス内容に関連するよくある困りごと）
2) 軽い共感（1文：押しつけず、やさしく寄り添う）
3) 解決方法（1〜2文：出品サービスの特徴・価値を自然に提示）
4) URL（注釈として1行）
   例：「※必要な方へ：{service_url}」「※リンクを置いてます：{service_url}」
   ※「詳細はこちら」は使用禁止

【レビュー起点の投稿ルール】
- 20本のうち「ちょうど3本」は、必ず次の書き出しで開始してください：
  「〇〇な嬉しいレビューをいただきました。🙏」
- 〇〇には、【出品サービスページ本文】に実際に記載されているレビュー内容を要約して入れてください。
  ※本文にないレビューの捏造は禁止。
- レビュー起点の3本は、上記4行フォーマットのまま作成してください。
  （1行目＝レビュー要約、2行目＝感謝/共感、3行目＝特徴、4行目＝URL）
- レビュー起点の3本は配列内で分散させ、連続しないようにしてください。
- もし本文にレビューが存在しない/読み取れない場合は、レビュー起点投稿は作らず、通常型の投稿を3本増やしてください。

【絵文字ルール（厳守）】
- 絵文字は「文末」にのみ使用し、必ず句点の代わりに置くこと。
  例：「〜です☺️」「〜ありがとうございます🙏」
- 絵文字を単独行にしない（絵文字の直前で改行しない）。
- 行頭に絵文字は禁止（「☺️〜」はNG）。
- 1投稿あたり絵文字は2〜4個。別々の文末に分散させる。
- URL行（4行目）には絵文字を入れない。

【文字数制限（重要）】
- 各投稿の「1〜3行目合計」は、改行・句読点を含めて125文字以内にしてください（URL行は除外）。
- 125文字を超えそうな場合は次の順で短縮する：
  1) 悩みを1文にする
  2) 解決方法を1文にする
  3) 重複表現を削る
  4) 絵文字を減らす（最少2個まで）
- 最終出力前に自己チェックし、130文字超過があれば必ず修正してから出力する。

【トーン＆禁止事項】
- 口調：丁寧でやさしい。煽り・断定・強いセールスは禁止。
- 「今すぐ」「絶対」「最安」「限定で急げ」など煽り表現は禁止。
- 「購入」「申し込み」「依頼」など直接的な販売ワードは極力避ける。
  「置いてます」「まとめています」「必要な方へ」など柔らかい表現を使う。
- 同じ言い回しの連発を避け、切り口を毎回変える。
- レビューは原文引用ではなく要約でOK（個人情報は出さない）。

【出力形式】
JSON配列 (string[]) で出力してください。
各要素は、上記4行を改行（\n）で含む文字列とすること。
"#
    );

    BuiltPrompt {
        instruction,
        config: GenerationConfig {
            response_schema: Some(schema_value::<Vec<String>>()),
            ..Default::default()
        },
    }
}
