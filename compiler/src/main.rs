//! 郵便番号チャンクテーブルのコンパイラ
//!
//! 日本郵便の郵便番号データから、ライブラリに埋め込むチャンクテーブルを
//! 生成・検証するためのCLIツールです。

mod build;
mod verify;

use clap::Parser;
use thiserror::Error;

use crate::{build::BuildError, verify::VerifyError};

/// コマンドライン引数の構造体
///
/// `clap`を使用してコマンドライン引数をパースします。
#[derive(Parser, Debug)]
#[clap(name = "compile", version)]
struct Cli {
    /// 実行するサブコマンド
    #[clap(subcommand)]
    command: Command,
}

/// 利用可能なサブコマンド
#[derive(Parser, Debug)]
enum Command {
    /// 元データからチャンクテーブルを構築します
    ///
    /// `utf_ken_all.csv` と `JIGYOSYO.CSV` をマージし、上位3桁ごとに圧縮した
    /// テーブルを Rust ソースとして出力します。
    Build(build::Args),

    /// 元データから構築したテーブルを展開して検証します
    ///
    /// ファイルは出力せず、すべての郵便番号が展開後も同じ住所に解決されることを確認します。
    Verify(verify::Args),
}

/// コンパイラの実行中に発生する可能性のあるエラー
///
/// 各サブコマンドで発生したエラーをラップします。
#[derive(Debug, Error)]
pub enum CompileError {
    /// テーブル構築中のエラー
    #[error(transparent)]
    BuildError(#[from] BuildError),
    /// 検証中のエラー
    #[error(transparent)]
    VerifyError(#[from] VerifyError),
}

/// メイン関数
///
/// コマンドライン引数をパースし、指定されたサブコマンドを実行します。
///
/// # エラー
///
/// 各サブコマンドの実行中にエラーが発生した場合、そのエラーが返されます。
fn main() -> Result<(), CompileError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Build(args) => Ok(build::run(args)?),
        Command::Verify(args) => Ok(verify::run(args)?),
    }
}
