//! チャンク内の行フォーマット
//!
//! 1件の [`Address`] をカンマ区切りの1行に変換し、またその逆を行います。
//! 先頭フィールドは種別タグ（`k` または `j`）で、残りは各種別ごとに固定された順序で並びます。
//!
//! ```text
//! k,郵便番号,旧郵便番号,JIS,都道府県,都道府県カナ,市区町村,市区町村カナ,町域,町域カナ,複数番号,小字,丁目,複数町域
//! j,郵便番号,旧郵便番号,JIS,都道府県,市区町村,町域,番地,事業所名,事業所名カナ,取扱局,種別
//! ```
//!
//! フィールド値にカンマが含まれないことはビルド時に保証されているため、
//! 引用符によるエスケープは行わず、位置だけで分割します。

use std::fmt::Write;

use crate::address::{Address, CodeType, OfficeAddress, RegistryAddress};

/// 標準郵便番号データ行のタグ
pub const REGISTRY_TAG: &str = "k";

/// 事業所個別郵便番号データ行のタグ
pub const OFFICE_TAG: &str = "j";

/// フィールド区切り文字
pub const FIELD_SEPARATOR: char = ',';

const REGISTRY_FIELDS: usize = 14;
const OFFICE_FIELDS: usize = 12;

#[inline(always)]
const fn flag(b: bool) -> char {
    if b { '1' } else { '0' }
}

#[inline(always)]
fn parse_flag(field: &str) -> bool {
    field == "1"
}

/// 住所レコードを1行に変換し、`buf` の末尾に追加します。
///
/// 行末の改行は追加しません。
pub fn write_row(buf: &mut String, address: &Address) {
    let mut push = |field: &str| {
        buf.push_str(field);
        buf.push(FIELD_SEPARATOR);
    };
    match address {
        Address::Registry(a) => {
            push(REGISTRY_TAG);
            push(&a.postal_code);
            push(&a.old_postal_code);
            push(&a.jis_code);
            push(&a.prefecture);
            push(&a.prefecture_kana);
            push(&a.city);
            push(&a.city_kana);
            push(&a.town);
            push(&a.town_kana);
            // 書き込み先は String なので失敗しない
            let _ = write!(
                buf,
                "{},{},{},{}",
                flag(a.multi_postal_code),
                flag(a.koaza_banchi),
                flag(a.chome),
                flag(a.multi_town),
            );
        }
        Address::Office(a) => {
            push(OFFICE_TAG);
            push(&a.postal_code);
            push(&a.old_postal_code);
            push(&a.jis_code);
            push(&a.prefecture);
            push(&a.city);
            push(&a.town);
            push(&a.street_address);
            push(&a.company_name);
            push(&a.company_name_kana);
            push(&a.post_office);
            let _ = write!(buf, "{}", a.code_type.as_u8());
        }
    }
}

/// 住所レコードを1行の文字列に変換します。
///
/// # 例
///
/// ```
/// use jp_postal::address::{Address, RegistryAddress};
/// use jp_postal::codec::encode_row;
///
/// let addr = Address::Registry(RegistryAddress {
///     postal_code: "1500001".into(),
///     old_postal_code: "150".into(),
///     jis_code: "13113".into(),
///     prefecture: "東京都".into(),
///     prefecture_kana: "トウキョウト".into(),
///     city: "渋谷区".into(),
///     city_kana: "シブヤク".into(),
///     town: "神宮前".into(),
///     town_kana: "ジングウマエ".into(),
///     chome: true,
///     ..Default::default()
/// });
/// assert_eq!(
///     encode_row(&addr),
///     "k,1500001,150,13113,東京都,トウキョウト,渋谷区,シブヤク,神宮前,ジングウマエ,0,0,1,0",
/// );
/// ```
pub fn encode_row(address: &Address) -> String {
    let mut buf = String::new();
    write_row(&mut buf, address);
    buf
}

/// 1行を住所レコードに変換します。
///
/// 未知のタグやフィールド数の不一致は `None` を返し、その行は読み飛ばされます。
pub fn decode_row(line: &str) -> Option<Address> {
    let cols: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    match cols.first().copied()? {
        REGISTRY_TAG if cols.len() == REGISTRY_FIELDS => {
            Some(Address::Registry(RegistryAddress {
                postal_code: cols[1].to_string(),
                old_postal_code: cols[2].to_string(),
                jis_code: cols[3].to_string(),
                prefecture: cols[4].to_string(),
                prefecture_kana: cols[5].to_string(),
                city: cols[6].to_string(),
                city_kana: cols[7].to_string(),
                town: cols[8].to_string(),
                town_kana: cols[9].to_string(),
                multi_postal_code: parse_flag(cols[10]),
                koaza_banchi: parse_flag(cols[11]),
                chome: parse_flag(cols[12]),
                multi_town: parse_flag(cols[13]),
            }))
        }
        OFFICE_TAG if cols.len() == OFFICE_FIELDS => Some(Address::Office(OfficeAddress {
            postal_code: cols[1].to_string(),
            old_postal_code: cols[2].to_string(),
            jis_code: cols[3].to_string(),
            prefecture: cols[4].to_string(),
            city: cols[5].to_string(),
            town: cols[6].to_string(),
            street_address: cols[7].to_string(),
            company_name: cols[8].to_string(),
            company_name_kana: cols[9].to_string(),
            post_office: cols[10].to_string(),
            code_type: CodeType::from_field(cols[11]),
        })),
        _ => None,
    }
}
