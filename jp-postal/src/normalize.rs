//! 郵便番号文字列の正規化
//!
//! 利用者が入力した郵便番号を、検索キーとして使う半角数字7桁の文字列に変換します。

use crate::address::POSTAL_CODE_LEN;

/// 郵便マーク
const POSTAL_MARK: char = '〒';

/// 区切り文字として除去するハイフン類
const HYPHENS: &[char] = &[
    '-',        // HYPHEN-MINUS
    '\u{2010}', // HYPHEN
    '\u{2011}', // NON-BREAKING HYPHEN
    '\u{2012}', // FIGURE DASH
    '\u{2013}', // EN DASH
    '\u{2014}', // EM DASH
    '\u{2015}', // HORIZONTAL BAR
    '\u{2212}', // MINUS SIGN
    '\u{30FC}', // KATAKANA-HIRAGANA PROLONGED SOUND MARK
    '\u{FF0D}', // FULLWIDTH HYPHEN-MINUS
    '\u{FF70}', // HALFWIDTH KATAKANA-HIRAGANA PROLONGED SOUND MARK
];

/// 全角数字と半角数字のコードポイントの差
const FULLWIDTH_DIGIT_OFFSET: u32 = 0xFEE0;

/// 郵便番号を正規化します。
///
/// 以下の順に処理します。
///
/// 1. 前後の空白を除去
/// 2. `〒` を除去
/// 3. ハイフン類を除去
/// 4. 全角数字を半角数字に変換
/// 5. 前後の空白を再度除去
///
/// # 戻り値
///
/// 正規化された半角数字7桁の郵便番号。形式が不正な場合は `None`。
///
/// # 例
///
/// ```
/// use jp_postal::normalize_postal_code;
///
/// assert_eq!(normalize_postal_code("〒150-0001").as_deref(), Some("1500001"));
/// assert_eq!(normalize_postal_code("１５０ー０００１").as_deref(), Some("1500001"));
/// assert_eq!(normalize_postal_code("150"), None);
/// ```
pub fn normalize_postal_code(input: &str) -> Option<String> {
    let stripped: String = input
        .trim()
        .chars()
        .filter(|&c| c != POSTAL_MARK && !HYPHENS.contains(&c))
        .map(to_halfwidth_digit)
        .collect();
    let code = stripped.trim();

    if code.len() == POSTAL_CODE_LEN && code.bytes().all(|b| b.is_ascii_digit()) {
        Some(code.to_string())
    } else {
        None
    }
}

#[inline(always)]
fn to_halfwidth_digit(c: char) -> char {
    if ('０'..='９').contains(&c) {
        char::from_u32(c as u32 - FULLWIDTH_DIGIT_OFFSET).unwrap_or(c)
    } else {
        c
    }
}
