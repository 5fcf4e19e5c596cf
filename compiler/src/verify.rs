//! チャンクテーブルの検証モジュール
//!
//! 元データからテーブルをメモリ上に構築し、すべてのチャンクを展開して
//! マージ後のすべての郵便番号が同じ住所に解決されることを確認します。

use std::collections::{BTreeMap, BTreeSet};

use jp_postal::builder::{self, ChunkTable};
use jp_postal::chunk::decode_chunk;
use jp_postal::errors::PostalError;
use jp_postal::{Address, ChunkTableBuilder};

use clap::Parser;

use crate::build::{SourceArgs, print_stats};

/// 検証コマンドの引数
#[derive(Parser, Debug)]
#[clap(
    name = "verify",
    about = "A program to verify that every source entry survives the chunk encoding."
)]
pub struct Args {
    #[clap(flatten)]
    source: SourceArgs,
}

/// 検証中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// チャンクテーブルの構築または展開のエラー
    #[error("Chunk table verification failed: {0}")]
    Postal(#[from] PostalError),

    /// 展開結果がマージ結果と一致しない
    #[error("{mismatches} of {total} entries did not round-trip")]
    Mismatch {
        /// 一致しなかった郵便番号の数
        mismatches: usize,
        /// 検証した郵便番号の数
        total: usize,
    },
}

/// 構築済みのテーブルを展開し、マージ結果と比較する
///
/// # 戻り値
///
/// 欠落、内容の不一致、別のチャンクへの混入のいずれかがあった郵便番号
///
/// # エラー
///
/// チャンクの展開に失敗した場合、`VerifyError`を返します。
pub fn verify_table(
    table: &ChunkTable,
    expected: &BTreeMap<String, Address>,
) -> Result<BTreeSet<String>, VerifyError> {
    let mut mismatches = BTreeSet::new();
    let mut seen = 0;

    for (prefix, encoded) in table.iter() {
        for (code, address) in decode_chunk(encoded)? {
            seen += 1;
            if !code.starts_with(prefix) || expected.get(&code) != Some(&address) {
                mismatches.insert(code);
            }
        }
    }
    if seen != expected.len() {
        for (prefix, codes) in group_by_prefix(expected) {
            let decoded = match table.get(prefix) {
                Some(encoded) => decode_chunk(encoded)?,
                None => Default::default(),
            };
            mismatches.extend(
                codes
                    .into_iter()
                    .filter(|code| !decoded.contains_key(*code))
                    .map(str::to_string),
            );
        }
    }
    Ok(mismatches)
}

fn group_by_prefix(expected: &BTreeMap<String, Address>) -> BTreeMap<&str, Vec<&str>> {
    let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (code, address) in expected {
        groups.entry(address.prefix()).or_default().push(code);
    }
    groups
}

/// 検証コマンドを実行する
///
/// # エラー
///
/// 元データの読み込みに失敗した場合や、展開結果が一致しない場合に`VerifyError`を返します。
pub fn run(args: Args) -> Result<(), VerifyError> {
    let source = &args.source;

    println!("Loading the source files...");
    let (registry, office) = builder::load_sources(&source.ken_all, &source.jigyosyo)?;
    let expected = builder::merge(registry.clone(), office.clone());

    println!("Compiling the chunk table...");
    let table = ChunkTableBuilder::new()
        .compression_level(source.level)?
        .build(registry, office)?;
    print_stats(&table);

    println!("Verifying {} entries...", expected.len());
    let mismatches = verify_table(&table, &expected)?;
    for code in mismatches.iter().take(10) {
        eprintln!("Mismatch: {code}");
    }
    if !mismatches.is_empty() {
        return Err(VerifyError::Mismatch {
            mismatches: mismatches.len(),
            total: expected.len(),
        });
    }

    println!("All {} entries round-tripped", expected.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use jp_postal::{RegistryAddress, address::OfficeAddress};

    fn expected() -> BTreeMap<String, Address> {
        let mut map = BTreeMap::new();
        for code in ["1500001", "1500002", "0608588"] {
            map.insert(
                code.to_string(),
                Address::Registry(RegistryAddress {
                    postal_code: code.to_string(),
                    town: "町域".to_string(),
                    ..Default::default()
                }),
            );
        }
        map
    }

    fn build(map: &BTreeMap<String, Address>) -> ChunkTable {
        let registry = map
            .iter()
            .filter_map(|(code, a)| Some((code.clone(), a.as_registry()?.clone())))
            .collect();
        ChunkTableBuilder::new()
            .build(registry, Default::default())
            .unwrap()
    }

    #[test]
    fn test_verify_ok() {
        let expected = expected();
        let table = build(&expected);
        assert!(verify_table(&table, &expected).unwrap().is_empty());
    }

    #[test]
    fn test_verify_detects_missing_and_changed() {
        let expected = expected();
        let mut built = expected.clone();
        built.remove("1500002");
        let table = build(&built);

        let mut changed = expected.clone();
        changed.insert(
            "0608588".to_string(),
            Address::Office(OfficeAddress {
                postal_code: "0608588".to_string(),
                ..Default::default()
            }),
        );

        let mismatches = verify_table(&table, &changed).unwrap();
        assert_eq!(
            mismatches.into_iter().collect::<Vec<_>>(),
            ["0608588", "1500002"]
        );
    }
}
