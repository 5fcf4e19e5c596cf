//! チャンクテーブルのビルドモジュール
//!
//! このモジュールは、郵便番号データ（`utf_ken_all.csv` と `JIGYOSYO.CSV`）から
//! 上位3桁ごとに圧縮したチャンクテーブルを構築し、
//! ライブラリに埋め込む Rust ソースとして書き出す機能を提供します。

use std::path::PathBuf;

use jp_postal::builder::{BuildStats, DEFAULT_COMPRESSION_LEVEL};
use jp_postal::errors::PostalError;
use jp_postal::{ChunkTable, ChunkTableBuilder};

use clap::Parser;

/// 元データの指定
///
/// `build` と `verify` の両方で使います。
#[derive(Parser, Debug)]
pub struct SourceArgs {
    /// Registry source file (utf_ken_all.csv).
    #[clap(short = 'k', long)]
    pub ken_all: PathBuf,

    /// Office source file (JIGYOSYO.CSV).
    #[clap(short = 'j', long)]
    pub jigyosyo: PathBuf,

    /// Deflate compression level (0-9).
    #[clap(long, default_value_t = DEFAULT_COMPRESSION_LEVEL)]
    pub level: u32,
}

/// ビルドコマンドの引数
#[derive(Parser, Debug)]
#[clap(
    name = "build",
    about = "A program to build the embedded postal code chunk table."
)]
pub struct Args {
    #[clap(flatten)]
    source: SourceArgs,

    /// File to which the generated Rust source is output (chunks.rs).
    #[clap(short = 'o', long)]
    chunks_out: PathBuf,
}

/// ビルド処理中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// チャンクテーブルの構築エラー
    #[error("Chunk table building failed: {0}")]
    Postal(#[from] PostalError),
}

/// 元データからチャンクテーブルを構築する
///
/// CLIに依存しないコアのビルドロジックです。
///
/// # エラー
///
/// 元データが存在しない場合や読み込みに失敗した場合、`BuildError`を返します。
pub fn build_table(source: &SourceArgs) -> Result<ChunkTable, BuildError> {
    let table = ChunkTableBuilder::new()
        .compression_level(source.level)?
        .from_paths(&source.ken_all, &source.jigyosyo)?;
    Ok(table)
}

/// 統計情報を表示する
pub fn print_stats(table: &ChunkTable) {
    let BuildStats {
        registry_entries,
        office_entries,
        merged_entries,
        csv_bytes,
        compressed_bytes,
        encoded_bytes,
    } = *table.stats();

    println!("  ken_all entries:  {registry_entries}");
    println!("  jigyosyo entries: {office_entries}");
    println!("  merged entries:   {merged_entries}");
    println!("  chunks:           {}", table.len());
    println!("  raw size:         {csv_bytes} bytes");
    println!("  compressed size:  {compressed_bytes} bytes");
    println!("  base64 size:      {encoded_bytes} bytes");
    if csv_bytes > 0 {
        println!(
            "  ratio:            {:.1}%",
            compressed_bytes as f64 / csv_bytes as f64 * 100.0
        );
    }
}

/// ビルドコマンドを実行する
///
/// 元データからチャンクテーブルを構築し、Rust ソースとして出力します。
///
/// # エラー
///
/// ファイルの読み書きやテーブル構築に失敗した場合、`BuildError`を返します。
pub fn run(args: Args) -> Result<(), BuildError> {
    println!("Compiling the chunk table...");
    let table = build_table(&args.source)?;
    print_stats(&table);

    println!("Writing the chunk table...");
    table.write_to_path(&args.chunks_out)?;

    println!("Successfully built the chunk table to {}", args.chunks_out.display());
    Ok(())
}
