//! # jp-postal
//!
//! 日本の郵便番号（7桁）から住所を検索するライブラリです。
//!
//! ## 概要
//!
//! 日本郵便が配布する標準郵便番号データ（`utf_ken_all.csv`）と
//! 事業所個別郵便番号データ（`JIGYOSYO.CSV`）を郵便番号の上位3桁ごとに分割し、
//! raw deflate で圧縮したテーブルとしてライブラリに埋め込みます。
//! 検索時には必要な上位3桁のチャンクだけを展開し、結果をキャッシュします。
//!
//! ## 主な機能
//!
//! - **入力の正規化**: `〒`、各種ハイフン、全角数字、前後の空白を含む入力を受け付けます
//! - **遅延展開**: チャンクは初めて参照されたときに一度だけ展開されます
//! - **スレッドセーフ**: 検索とキャッシュは複数スレッドから共有できます
//! - **テーブルの構築**: 元データからチャンクテーブルを生成するビルダーを提供します
//!
//! ## 使用例
//!
//! ```
//! use jp_postal::{get_address, Address};
//!
//! let addr = get_address("〒150-0001").unwrap();
//! assert_eq!(addr.postal_code(), "1500001");
//! assert_eq!(addr.prefecture(), "東京都");
//! assert_eq!(addr.city(), "渋谷区");
//! assert_eq!(addr.town(), "神宮前");
//! assert!(matches!(addr, Address::Registry(_)));
//!
//! let office = get_address("0608588").unwrap();
//! assert_eq!(office.as_office().unwrap().company_name, "北海道庁");
//!
//! assert!(get_address("000-0000").is_none());
//! assert!(get_address("150").is_none());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

/// 住所レコードの型定義
pub mod address;

/// チャンクテーブルのビルダー
pub mod builder;

/// チャンクの符号化とキャッシュ
pub mod chunk;

/// チャンク内の行フォーマット
pub mod codec;

/// エラー型の定義
pub mod errors;

/// 郵便番号検索
pub mod lookup;

/// 郵便番号の正規化
pub mod normalize;

/// 元データのCSV解析
pub mod utils;

/// 同梱のチャンクテーブル
#[cfg(feature = "embedded")]
mod generated {
    include!("generated/chunks.rs");
}

#[cfg(test)]
mod tests;

// Re-exports
pub use address::{Address, AddressSource, CodeType, OfficeAddress, RegistryAddress};
pub use builder::{ChunkTable, ChunkTableBuilder};
pub use chunk::{ChunkSource, ChunkStore, EmbeddedChunks};
#[cfg(feature = "embedded")]
pub use lookup::get_address;
pub use lookup::PostalLookup;
pub use normalize::normalize_postal_code;

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
