//! 住所レコードの型定義
//!
//! 郵便番号データは2種類の元データから構築されます。
//!
//! - 全国の標準郵便番号データ（`utf_ken_all.csv`）由来の [`RegistryAddress`]
//! - 事業所の個別郵便番号データ（`JIGYOSYO.CSV`）由来の [`OfficeAddress`]
//!
//! 両者は [`Address`] 列挙型としてまとめて扱います。
//! 同じ郵便番号が両方に存在する場合は事業所データが優先されます。

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 郵便番号の桁数
pub const POSTAL_CODE_LEN: usize = 7;

/// チャンクのキーとなる郵便番号の上位桁数
pub const PREFIX_LEN: usize = 3;

/// 住所レコードの元データの種類
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressSource {
    /// 標準郵便番号データ（ken_all）
    Registry,
    /// 事業所個別郵便番号データ（jigyosyo）
    Office,
}

/// 郵便番号に対応する住所レコード
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "source"))]
pub enum Address {
    /// 標準郵便番号データ由来のレコード
    #[cfg_attr(feature = "serde", serde(rename = "ken_all"))]
    Registry(RegistryAddress),
    /// 事業所個別郵便番号データ由来のレコード
    #[cfg_attr(feature = "serde", serde(rename = "jigyosyo"))]
    Office(OfficeAddress),
}

/// 標準郵便番号データ（`utf_ken_all.csv`）の1件
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RegistryAddress {
    /// 郵便番号（7桁）
    pub postal_code: String,
    /// 旧郵便番号（5桁、空白埋めのことがある）
    pub old_postal_code: String,
    /// 全国地方公共団体コード
    pub jis_code: String,
    /// 都道府県名
    pub prefecture: String,
    /// 都道府県名（カナ）
    pub prefecture_kana: String,
    /// 市区町村名
    pub city: String,
    /// 市区町村名（カナ）
    pub city_kana: String,
    /// 町域名
    pub town: String,
    /// 町域名（カナ）
    pub town_kana: String,
    /// 一町域が二以上の郵便番号で表される
    pub multi_postal_code: bool,
    /// 小字毎に番地が起番されている
    pub koaza_banchi: bool,
    /// 丁目を有する町域
    pub chome: bool,
    /// 一つの郵便番号で二以上の町域を表す
    pub multi_town: bool,
}

/// 事業所個別郵便番号データ（`JIGYOSYO.CSV`）の1件
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OfficeAddress {
    /// 郵便番号（7桁）
    pub postal_code: String,
    /// 旧郵便番号
    pub old_postal_code: String,
    /// 全国地方公共団体コード
    pub jis_code: String,
    /// 都道府県名
    pub prefecture: String,
    /// 市区町村名
    pub city: String,
    /// 町域名
    pub town: String,
    /// 小字名、丁目、番地等
    pub street_address: String,
    /// 大口事業所名
    pub company_name: String,
    /// 大口事業所名（カナ）
    pub company_name_kana: String,
    /// 取扱局
    pub post_office: String,
    /// 個別番号の種別
    pub code_type: CodeType,
}

/// 事業所の個別番号の種別
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u8", from = "u8"))]
pub enum CodeType {
    /// 通常の個別番号（`0`）
    #[default]
    Normal,
    /// 大口受取向けの個別番号（`1`、私書箱など）
    LargeVolume,
}

impl CodeType {
    /// 数値表現（`0` または `1`）を返します。
    #[inline(always)]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::LargeVolume => 1,
        }
    }

    /// 元データおよびチャンク行のフィールドから変換します。
    ///
    /// `"1"` のみを [`CodeType::LargeVolume`] とみなし、それ以外はすべて
    /// [`CodeType::Normal`] になります。
    #[inline(always)]
    pub fn from_field(field: &str) -> Self {
        if field == "1" {
            Self::LargeVolume
        } else {
            Self::Normal
        }
    }
}

impl From<CodeType> for u8 {
    fn from(code_type: CodeType) -> Self {
        code_type.as_u8()
    }
}

impl From<u8> for CodeType {
    fn from(v: u8) -> Self {
        if v == 1 {
            Self::LargeVolume
        } else {
            Self::Normal
        }
    }
}

impl Address {
    /// 元データの種類を返します。
    #[inline(always)]
    pub const fn source(&self) -> AddressSource {
        match self {
            Self::Registry(_) => AddressSource::Registry,
            Self::Office(_) => AddressSource::Office,
        }
    }

    /// 郵便番号（7桁）
    #[inline(always)]
    pub fn postal_code(&self) -> &str {
        match self {
            Self::Registry(a) => &a.postal_code,
            Self::Office(a) => &a.postal_code,
        }
    }

    /// 都道府県名
    #[inline(always)]
    pub fn prefecture(&self) -> &str {
        match self {
            Self::Registry(a) => &a.prefecture,
            Self::Office(a) => &a.prefecture,
        }
    }

    /// 市区町村名
    #[inline(always)]
    pub fn city(&self) -> &str {
        match self {
            Self::Registry(a) => &a.city,
            Self::Office(a) => &a.city,
        }
    }

    /// 町域名
    #[inline(always)]
    pub fn town(&self) -> &str {
        match self {
            Self::Registry(a) => &a.town,
            Self::Office(a) => &a.town,
        }
    }

    /// 郵便番号の上位3桁（チャンクのキー）
    ///
    /// 郵便番号が3文字に満たない場合は郵便番号全体を返します。
    pub fn prefix(&self) -> &str {
        let code = self.postal_code();
        match code.char_indices().nth(PREFIX_LEN) {
            Some((end, _)) => &code[..end],
            None => code,
        }
    }

    /// 事業所データの場合は [`OfficeAddress`] への参照を返します。
    pub const fn as_office(&self) -> Option<&OfficeAddress> {
        match self {
            Self::Office(a) => Some(a),
            Self::Registry(_) => None,
        }
    }

    /// 標準データの場合は [`RegistryAddress`] への参照を返します。
    pub const fn as_registry(&self) -> Option<&RegistryAddress> {
        match self {
            Self::Registry(a) => Some(a),
            Self::Office(_) => None,
        }
    }
}

impl From<RegistryAddress> for Address {
    fn from(a: RegistryAddress) -> Self {
        Self::Registry(a)
    }
}

impl From<OfficeAddress> for Address {
    fn from(a: OfficeAddress) -> Self {
        Self::Office(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let addr = Address::from(RegistryAddress {
            postal_code: "1500001".into(),
            prefecture: "東京都".into(),
            city: "渋谷区".into(),
            town: "神宮前".into(),
            ..Default::default()
        });
        assert_eq!(addr.source(), AddressSource::Registry);
        assert_eq!(addr.postal_code(), "1500001");
        assert_eq!(addr.prefix(), "150");
        assert_eq!(addr.prefecture(), "東京都");
        assert_eq!(addr.city(), "渋谷区");
        assert_eq!(addr.town(), "神宮前");
        assert!(addr.as_office().is_none());
    }

    #[test]
    fn test_code_type_from_field() {
        assert_eq!(CodeType::from_field("1"), CodeType::LargeVolume);
        assert_eq!(CodeType::from_field("0"), CodeType::Normal);
        assert_eq!(CodeType::from_field(""), CodeType::Normal);
        assert_eq!(CodeType::from_field("2"), CodeType::Normal);
        assert_eq!(u8::from(CodeType::LargeVolume), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape() {
        let addr = Address::from(OfficeAddress {
            postal_code: "0608588".into(),
            company_name: "北海道庁".into(),
            code_type: CodeType::LargeVolume,
            ..Default::default()
        });
        let v = serde_json::to_value(&addr).unwrap();
        assert_eq!(v["source"], "jigyosyo");
        assert_eq!(v["postalCode"], "0608588");
        assert_eq!(v["companyName"], "北海道庁");
        assert_eq!(v["codeType"], 1);

        let back: Address = serde_json::from_value(v).unwrap();
        assert_eq!(back, addr);
    }
}
