//! エラー型の定義
//!
//! このモジュールは、jp-postalで使用されるすべてのエラー型を定義します。
//! 実行時の検索は不正な入力に対してエラーを返さず、`None`のみを返します。
//! エラーが発生するのはオフラインのビルド処理と、チャンクの復号処理だけです。

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// jp-postal専用のResult型
///
/// エラー型としてデフォルトで[`PostalError`]を使用します。
pub type Result<T, E = PostalError> = std::result::Result<T, E>;

/// jp-postalのエラー型
///
/// このライブラリで発生する可能性のあるすべてのエラーを表現します。
#[derive(Debug, thiserror::Error)]
pub enum PostalError {
    /// 無効な引数エラー
    ///
    /// [`InvalidArgumentError`]のエラーバリアント。
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// 無効なフォーマットエラー
    ///
    /// [`InvalidFormatError`]のエラーバリアント。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// 入力ファイルが存在しないエラー
    ///
    /// ビルドに必要な元データが見つからない場合に発生します。
    /// ビルドは中断され、出力ファイルは書き込まれません。
    #[error("File not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// ディレクトリが指定されたエラー
    ///
    /// ファイルが期待される場所にディレクトリが指定された場合に発生します。
    #[error("The path '{}' is a directory, but a file was expected.", .0.display())]
    PathIsDirectory(PathBuf),

    /// UTF-8エンコーディングエラー
    ///
    /// [`std::string::FromUtf8Error`]のエラーバリアント。
    #[error(transparent)]
    FromUtf8(std::string::FromUtf8Error),

    /// base64デコードエラー
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),

    /// I/Oエラー
    ///
    /// [`std::io::Error`]のエラーバリアント。
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// 一時ファイルの永続化エラー
    ///
    /// [`tempfile::PersistError`]のエラーバリアント。
    #[error(transparent)]
    PathPersist(#[from] tempfile::PersistError),
}

impl PostalError {
    /// 無効な引数エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数の名前
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - フォーマット名
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }
}

/// 引数が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 引数の名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// フォーマットの名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}

impl From<std::string::FromUtf8Error> for PostalError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        Self::FromUtf8(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_names_path() {
        let e = PostalError::SourceNotFound(PathBuf::from("raw/utf_ken_all.csv"));
        assert_eq!(e.to_string(), "File not found: raw/utf_ken_all.csv");
    }

    #[test]
    fn test_invalid_argument_display() {
        let e = PostalError::invalid_argument("level", "must be 0..=9");
        assert_eq!(e.to_string(), "InvalidArgumentError: level: must be 0..=9");
    }
}
