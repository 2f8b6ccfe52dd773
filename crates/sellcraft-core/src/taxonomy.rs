//! Fixed two-level category taxonomy for the marketplace.
//!
//! The listing prompt embeds this closed list verbatim; the model must
//! pick category and sub-category from it and nothing else.

/// Top-level category with its allowed sub-categories.
pub struct Category {
    pub name: &'static str,
    pub sub_categories: &'static [&'static str],
}

/// The marketplace category master, in priority order.
///
/// When a theme matches several categories the prompt instructs the
/// model to prefer the one listed first here.
pub const CATEGORY_MASTER: &[Category] = &[
    Category {
        name: "イラスト・マンガ",
        sub_categories: &["SNSアイコン", "イラスト", "マンガ", "その他"],
    },
    Category {
        name: "デザイン",
        sub_categories: &[
            "ロゴ",
            "チラシ・フライヤー・パンフレット",
            "メニュー・POP",
            "名刺・カード",
            "書籍・カバー",
            "結婚式・イベント",
            "建築・インテリア・図面",
            "プロダクト・3Dモデリング",
            "その他",
        ],
    },
    Category {
        name: "Web制作・Webデザイン",
        sub_categories: &[
            "HP・LP",
            "ブログ",
            "EC",
            "HTML・CSSコーディング",
            "Webサイトデザイン",
            "モバイルアプリデザイン",
            "UI・UX",
            "素材",
            "図解",
            "ヘッダー・バナー",
            "サムネイル",
            "サービス画像・商品画像",
            "Web制作のディレクション",
            "その他",
        ],
    },
    Category {
        name: "IT・プログラミング",
        sub_categories: &[
            "作業自動化・効率化",
            "Webアプリ",
            "モバイルアプリ",
            "Mac・Windowsアプリ",
            "サーバー・インフラ",
            "ゲーム",
            "システムアーキテクチャ",
            "AI・機械学習",
            "バグチェック・テストプレイ",
            "保守・運用・管理",
            "システム開発のディレクション",
            "その他",
        ],
    },
    Category {
        name: "写真・撮影",
        sub_categories: &["撮影・素材提供", "編集・加工", "その他"],
    },
    Category {
        name: "動画",
        sub_categories: &[
            "撮影・素材提供",
            "編集",
            "サムネイル",
            "アニメーション",
            "データ変換・ディスク化",
            "結婚式・イベント",
            "PR・プロモーション",
            "SNS",
            "その他",
        ],
    },
    Category {
        name: "音楽・音響・ナレーション",
        sub_categories: &[
            "作曲・編曲",
            "楽譜・譜面",
            "歌唱・楽器演奏",
            "ナレーション",
            "キャラクターボイス",
            "ミックス・マスタリング",
            "編集・加工",
            "その他",
        ],
    },
    Category {
        name: "マーケティング",
        sub_categories: &[
            "SEO対策",
            "MEO対策",
            "リスティング広告",
            "ディスプレイ広告",
            "メールマーケティング",
            "SNSマーケティング",
            "Webサイト分析",
            "その他",
        ],
    },
    Category {
        name: "ハンドメイド",
        sub_categories: &["ワークショップ", "オーダーメイド", "その他"],
    },
    Category {
        name: "ライティング",
        sub_categories: &[
            "コピーライティング",
            "記事作成",
            "文章校正・編集・リライト",
            "取材・インタビュー",
            "シナリオ・脚本・台本",
            "その他",
        ],
    },
    Category {
        name: "翻訳",
        sub_categories: &["翻訳", "その他"],
    },
    Category {
        name: "せどり・物販",
        sub_categories: &["オーダーメイドツール", "各種代行", "その他"],
    },
    Category {
        name: "コンサル・ビジネス代行",
        sub_categories: &[
            "会計・経理・財務・税務",
            "行政法務",
            "オンライン秘書",
            "営業・集客",
            "資料・企画書",
            "起業・事業・経営",
            "補助金・助成金",
            "DX",
            "データ分析・整理・集計",
            "人事・労務",
            "スカウト・ヘッドハント",
            "文字起こし・データ入力",
            "イベント企画・運営",
            "不動産",
            "YouTube・音声配信",
            "SNS",
            "ブログ・アフィリエイト",
            "コンテンツ販売",
            "EC",
            "せどり・物販",
            "家計見直し",
            "通信費見直し",
            "その他",
        ],
    },
    Category {
        name: "コーチング",
        sub_categories: &[
            "自己理解・強みを活かす",
            "キャリア・転職相談",
            "人生お悩み相談",
            "恋愛・結婚の相談",
            "子育て・教育・進路相談",
            "資格取得の相談",
            "オンライン家庭教師",
            "話術・コミュニケーション",
            "その他",
        ],
    },
    Category {
        name: "スキルアップ支援",
        sub_categories: &[
            "イラスト・マンガ",
            "デザイン",
            "写真・撮影",
            "動画",
            "音楽・音響・ナレーション",
            "ITスキル",
            "Web制作・Webデザイン",
            "プログラミング",
            "マーケティング",
            "ハンドメイド",
            "ライティング",
            "その他",
        ],
    },
    Category {
        name: "ライフスタイル",
        sub_categories: &[
            "ヨガ・ピラティス",
            "フィットネス",
            "ダイエット",
            "ダンス",
            "ファッション",
            "美容",
            "話し相手",
            "DIY",
            "整理収納・インテリア",
            "グルメ・料理・献立",
            "旅行・お出かけ",
            "ペット",
            "その他",
        ],
    },
    Category {
        name: "占い",
        sub_categories: &[
            "恋愛・結婚",
            "自己分析・資質・適性",
            "仕事",
            "対人関係",
            "人生総合",
            "その他",
        ],
    },
];

/// Render the taxonomy as the prompt expects it: one line per category,
/// sub-categories joined with full-width slashes in parentheses.
pub fn format_category_master() -> String {
    CATEGORY_MASTER
        .iter()
        .map(|cat| format!("{}（{}）", cat.name, cat.sub_categories.join("／")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seventeen_top_categories() {
        assert_eq!(CATEGORY_MASTER.len(), 17);
    }

    #[test]
    fn test_every_category_ends_with_catch_all() {
        for cat in CATEGORY_MASTER {
            assert_eq!(
                cat.sub_categories.last().copied(),
                Some("その他"),
                "category {} lacks catch-all",
                cat.name
            );
        }
    }

    #[test]
    fn test_format_one_line_per_category() {
        let master = format_category_master();
        assert_eq!(master.lines().count(), 17);
        assert!(master.starts_with("イラスト・マンガ（SNSアイコン／イラスト／マンガ／その他）"));
        assert!(master.contains("占い（恋愛・結婚／"));
    }
}
