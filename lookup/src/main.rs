//! 郵便番号から住所を検索するユーティリティ
//!
//! このバイナリは、標準入力から1行に1つずつ郵便番号を読み込み、
//! 同梱のテーブルから検索した住所を指定された出力形式（text、json）で出力します。

use std::error::Error;
use std::io::{BufRead, BufWriter, IsTerminal, Write};
use std::str::FromStr;

use jp_postal::{Address, PostalLookup};

use clap::Parser;

/// 出力モード
#[derive(Clone, Debug)]
enum OutputMode {
    Text,
    Json,
}

impl FromStr for OutputMode {
    type Err = &'static str;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err("Could not parse a mode"),
        }
    }
}

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "lookup", about = "Looks up Japanese addresses by postal code")]
struct Args {
    /// Output mode. Choices are text and json.
    #[clap(short = 'O', long, default_value = "text")]
    output_mode: OutputMode,

    /// Prints the number of decompressed chunks to stderr on exit.
    #[clap(long)]
    stats: bool,
}

/// 住所を1行のテキストとして書き出す
///
/// タブ区切りで郵便番号、種別、都道府県、市区町村、町域を出力し、
/// 事業所データの場合は番地と事業所名を続けます。
fn write_text<W: Write>(out: &mut W, address: &Address) -> std::io::Result<()> {
    match address {
        Address::Registry(a) => writeln!(
            out,
            "{}\tken_all\t{}\t{}\t{}",
            a.postal_code, a.prefecture, a.city, a.town,
        ),
        Address::Office(a) => writeln!(
            out,
            "{}\tjigyosyo\t{}\t{}\t{}\t{}\t{}",
            a.postal_code, a.prefecture, a.city, a.town, a.street_address, a.company_name,
        ),
    }
}

/// メイン関数
///
/// 標準入力から読み込んだ郵便番号を検索し、結果を標準出力に出力します。
/// 見つからない場合は text モードでは `NOT FOUND`、json モードでは `null` を出力します。
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let lookup = PostalLookup::embedded();
    eprintln!("Ready to look up ({} chunks)", lookup.store().source().len());

    let is_tty = std::io::stdout().is_terminal();

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());
    let lines = std::io::stdin().lock().lines();
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let address = lookup.get(&line);
        match args.output_mode {
            OutputMode::Text => match &address {
                Some(address) => write_text(&mut out, address)?,
                None => writeln!(out, "{}\tNOT FOUND", line.trim())?,
            },
            OutputMode::Json => {
                serde_json::to_writer(&mut out, &address)?;
                out.write_all(b"\n")?;
            }
        }
        if is_tty {
            out.flush()?;
        }
    }
    out.flush()?;

    if args.stats {
        eprintln!(
            "Decompressed {} chunks",
            lookup.store().decompression_count()
        );
    }
    Ok(())
}
