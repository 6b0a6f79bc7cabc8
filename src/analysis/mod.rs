//! Heuristic post-processing of the website-analysis webhook output
//!
//! The n8n workflow answers with free-form Japanese prose. These functions
//! derive a numeric score plus strength/improvement lists from that text.
//! All lengths are counted in characters, not bytes.

use regex::Regex;
use std::sync::OnceLock;

const POSITIVE_KEYWORDS: [&str; 5] = ["素晴らしい", "良好", "優秀", "適切", "強み"];

const NEGATIVE_KEYWORDS: [&str; 6] = ["問題", "改善", "課題", "ヤバい", "惜しい", "もったいない"];

/// Canned strengths surfaced when their trigger keyword appears in the analysis
const STRENGTH_KEYWORDS: [(&str, &str); 7] = [
    ("かっこいい", "スタイリッシュなデザイン要素があります"),
    ("カッコいい", "デザインにユニークな要素があります"),
    ("ブランドカラー", "ブランドカラーが設定されています"),
    ("サイドバー", "ナビゲーション構造が実装されています"),
    ("ダークモード", "モダンなダークテーマを採用しています"),
    ("アニメーション", "インタラクティブな要素が含まれています"),
    ("レスポンシブ", "レスポンシブデザインが実装されています"),
];

const DEFAULT_STRENGTHS: [&str; 3] = [
    "サイトの基本構造が確認できています",
    "技術的な実装が行われています",
    "ブランディング要素が含まれています",
];

const BASE_SCORE: i32 = 70;
const MIN_SCORE: i32 = 40;
const MAX_SCORE: i32 = 95;

const MAX_STRENGTHS: usize = 5;
const MAX_IMPROVEMENTS: usize = 8;
const IMPROVEMENT_TRUNCATE_CHARS: usize = 150;

/// Strengths and improvements extracted from an analysis text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedReport {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

fn numbered_item_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)\s*[.)\-]\s*(.+)$").unwrap())
}

fn section_start_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\)").unwrap())
}

fn ruler_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[-─═]+").unwrap())
}

/// Derive a score from keyword sentiment: base 70, +3 per positive hit,
/// -2 per negative hit, clamped to [40, 95].
pub fn extract_score(text: &str) -> u32 {
    let positive: i32 = POSITIVE_KEYWORDS
        .iter()
        .map(|kw| text.matches(kw).count() as i32)
        .sum();
    let negative: i32 = NEGATIVE_KEYWORDS
        .iter()
        .map(|kw| text.matches(kw).count() as i32)
        .sum();

    (BASE_SCORE + positive * 3 - negative * 2).clamp(MIN_SCORE, MAX_SCORE) as u32
}

/// Extract strength and improvement lists from an analysis text
pub fn parse_report(text: &str) -> ExtractedReport {
    ExtractedReport {
        strengths: extract_strengths(text),
        improvements: extract_improvements(text),
    }
}

fn extract_improvements(text: &str) -> Vec<String> {
    let mut improvements = Vec::new();
    let mut in_recommendation_section = false;

    for line in text.lines() {
        if line.contains("推奨事項")
            || line.contains("アイデア")
            || line.contains("改善")
            || section_start_re().is_match(line)
        {
            in_recommendation_section = true;
        }

        if !in_recommendation_section {
            continue;
        }

        let Some(captures) = numbered_item_re().captures(line) else {
            continue;
        };
        let recommendation = captures[2].trim();
        if recommendation.chars().count() <= 15 {
            continue;
        }

        let cleaned = ruler_re().replace_all(recommendation, "");
        let cleaned = cleaned.trim();
        if cleaned.chars().count() > 20 {
            improvements.push(truncate_chars(cleaned, IMPROVEMENT_TRUNCATE_CHARS));
        }

        if improvements.len() >= MAX_IMPROVEMENTS {
            break;
        }
    }

    improvements
}

fn extract_strengths(text: &str) -> Vec<String> {
    let mut strengths: Vec<String> = Vec::new();

    for (keyword, strength) in STRENGTH_KEYWORDS {
        if text.contains(keyword) && !strengths.iter().any(|s| s == strength) {
            strengths.push(strength.to_string());
        }
    }

    // Pad thin results so the UI always has something to show
    for default in DEFAULT_STRENGTHS {
        if strengths.len() >= 3 {
            break;
        }
        strengths.push(default.to_string());
    }

    strengths.truncate(MAX_STRENGTHS);
    strengths
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_base_for_neutral_text() {
        assert_eq!(extract_score("このサイトについての分析です。"), 70);
    }

    #[test]
    fn score_rewards_positive_keywords() {
        // Two positives, no negatives: 70 + 2*3
        assert_eq!(extract_score("素晴らしいデザインで、構成も適切です。"), 76);
    }

    #[test]
    fn score_counts_repeated_keywords() {
        // Same keyword twice counts twice
        assert_eq!(extract_score("良好です。とても良好です。"), 76);
    }

    #[test]
    fn score_is_clamped_to_upper_bound() {
        let text = "素晴らしい".repeat(20);
        assert_eq!(extract_score(&text), 95);
    }

    #[test]
    fn score_is_clamped_to_lower_bound() {
        let text = "問題".repeat(30);
        assert_eq!(extract_score(&text), 40);
    }

    #[test]
    fn improvements_require_recommendation_section() {
        // Numbered lines before any section marker are ignored
        let text = "1) この行は推奨セクションの前にあるので長くても無視されるはずです";
        // The line itself matches ^\d+\) so it opens the section and is collected
        let report = parse_report(text);
        assert_eq!(report.improvements.len(), 1);

        let text = "これは前置きです\nとても長い説明文がここに続きますが番号がありません";
        let report = parse_report(text);
        assert!(report.improvements.is_empty());
    }

    #[test]
    fn improvements_extracted_from_numbered_items() {
        let text = "推奨事項\n\
                    1) トップページの読み込み速度を改善し、画像を圧縮して表示を高速化しましょう\n\
                    2. お問い合わせフォームへの導線をわかりやすくして離脱を減らしましょう\n\
                    3) 短い項目";
        let report = parse_report(text);
        assert_eq!(report.improvements.len(), 2);
        assert!(report.improvements[0].contains("読み込み速度"));
    }

    #[test]
    fn improvements_strip_ruler_characters() {
        let text = "改善\n1) ──────ナビゲーションメニューの構成を見直して主要ページへ誘導しましょう──────";
        let report = parse_report(text);
        assert_eq!(report.improvements.len(), 1);
        assert!(!report.improvements[0].contains('─'));
    }

    #[test]
    fn improvements_truncated_at_150_chars() {
        let long_item = "あ".repeat(200);
        let text = format!("改善\n1) {}", long_item);
        let report = parse_report(&text);
        assert_eq!(report.improvements.len(), 1);
        assert_eq!(report.improvements[0].chars().count(), 153); // 150 + "..."
        assert!(report.improvements[0].ends_with("..."));
    }

    #[test]
    fn improvements_capped_at_eight() {
        let mut text = String::from("推奨事項\n");
        for i in 1..=12 {
            text.push_str(&format!(
                "{}) 改善提案その{}としてコンテンツの見直しと導線の最適化を行いましょう\n",
                i, i
            ));
        }
        let report = parse_report(&text);
        assert_eq!(report.improvements.len(), 8);
    }

    #[test]
    fn strengths_mapped_from_keywords() {
        let text = "ダークモードを採用したかっこいいサイトで、レスポンシブ対応もされています";
        let report = parse_report(text);
        assert!(report
            .strengths
            .contains(&"モダンなダークテーマを採用しています".to_string()));
        assert!(report
            .strengths
            .contains(&"レスポンシブデザインが実装されています".to_string()));
    }

    #[test]
    fn strengths_padded_to_three() {
        let report = parse_report("特筆すべき内容のない文章です");
        assert_eq!(report.strengths.len(), 3);
        assert_eq!(report.strengths[0], "サイトの基本構造が確認できています");
    }

    #[test]
    fn strengths_capped_at_five() {
        let text = "かっこいい カッコいい ブランドカラー サイドバー ダークモード アニメーション レスポンシブ";
        let report = parse_report(text);
        assert_eq!(report.strengths.len(), 5);
    }
}
