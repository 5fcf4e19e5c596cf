//! チャンクテーブルのビルダー
//!
//! このモジュールは、日本郵便の郵便番号データ（`utf_ken_all.csv` と `JIGYOSYO.CSV`）から
//! [`ChunkTable`] を構築します。
//!
//! 1. 2つのCSVを解析し、郵便番号ごとのレコードに変換
//! 2. 標準データを先に、事業所データを後から適用してマージ（事業所データ優先）
//! 3. 郵便番号の上位3桁ごとに分割
//! 4. 各チャンクを行フォーマットに変換し、raw deflate で圧縮して base64 化
//!
//! 構築したテーブルは [`ChunkTable::write_to_path`] で Rust ソースとして書き出し、
//! ライブラリに埋め込みます。

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use flate2::Compression;
use hashbrown::HashMap;

use crate::address::{Address, CodeType, OfficeAddress, POSTAL_CODE_LEN, RegistryAddress};
use crate::chunk::encode_chunk;
use crate::errors::{PostalError, Result};
use crate::utils::CsvRecords;

/// 標準郵便番号データのファイル名
pub const REGISTRY_FILE_NAME: &str = "utf_ken_all.csv";

/// 事業所個別郵便番号データのファイル名
pub const OFFICE_FILE_NAME: &str = "JIGYOSYO.CSV";

/// デフォルトの圧縮レベル
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// `utf_ken_all.csv` の列番号
mod registry_col {
    pub const JIS_CODE: usize = 0;
    pub const OLD_POSTAL_CODE: usize = 1;
    pub const POSTAL_CODE: usize = 2;
    pub const PREFECTURE_KANA: usize = 3;
    pub const CITY_KANA: usize = 4;
    pub const TOWN_KANA: usize = 5;
    pub const PREFECTURE: usize = 6;
    pub const CITY: usize = 7;
    pub const TOWN: usize = 8;
    pub const MULTI_POSTAL_CODE: usize = 9;
    pub const KOAZA_BANCHI: usize = 10;
    pub const CHOME: usize = 11;
    pub const MULTI_TOWN: usize = 12;

    pub const MIN_COLUMNS: usize = MULTI_TOWN + 1;
}

/// `JIGYOSYO.CSV` の列番号
mod office_col {
    pub const JIS_CODE: usize = 0;
    pub const COMPANY_NAME_KANA: usize = 1;
    pub const COMPANY_NAME: usize = 2;
    pub const PREFECTURE: usize = 3;
    pub const CITY: usize = 4;
    pub const TOWN: usize = 5;
    pub const STREET_ADDRESS: usize = 6;
    pub const POSTAL_CODE: usize = 7;
    pub const OLD_POSTAL_CODE: usize = 8;
    pub const POST_OFFICE: usize = 9;
    pub const CODE_TYPE: usize = 10;

    pub const MIN_COLUMNS: usize = CODE_TYPE + 1;
}

/// 元データの1レコードから取り出したフィールド
struct RawRecord(Vec<String>);

impl RawRecord {
    /// チャンク行に入れられない文字を置き換えて取り出します。
    ///
    /// 半角カンマは全角カンマに、フィールド内の改行は除去します。
    fn take(&mut self, idx: usize) -> String {
        let field = std::mem::take(&mut self.0[idx]);
        if field.contains([',', '\r', '\n']) {
            field
                .chars()
                .filter(|c| !matches!(c, '\r' | '\n'))
                .map(|c| if c == ',' { '，' } else { c })
                .collect()
        } else {
            field
        }
    }

    fn flag(&self, idx: usize) -> bool {
        self.0[idx] == "1"
    }

    /// 郵便番号の列が7文字であるかを確認します。
    fn has_valid_postal_code(&self, idx: usize) -> bool {
        self.0
            .get(idx)
            .is_some_and(|code| code.chars().count() == POSTAL_CODE_LEN)
    }
}

/// `utf_ken_all.csv` を解析します。
///
/// 同じ郵便番号が複数行に現れる場合は、最初の行を採用します。
/// 郵便番号が7文字でない行や列が不足している行は読み飛ばします。
pub fn parse_registry(bytes: &[u8]) -> Result<HashMap<String, RegistryAddress>> {
    use registry_col::*;

    let mut map = HashMap::new();
    let mut skipped = 0usize;

    for record in CsvRecords::new(bytes, REGISTRY_FILE_NAME) {
        let mut rec = RawRecord(record?);
        if rec.0.len() < MIN_COLUMNS || !rec.has_valid_postal_code(POSTAL_CODE) {
            skipped += 1;
            continue;
        }
        let postal_code = rec.take(POSTAL_CODE);
        if map.contains_key(&postal_code) {
            continue;
        }
        let entry = RegistryAddress {
            postal_code,
            old_postal_code: rec.take(OLD_POSTAL_CODE),
            jis_code: rec.take(JIS_CODE),
            prefecture: rec.take(PREFECTURE),
            prefecture_kana: rec.take(PREFECTURE_KANA),
            city: rec.take(CITY),
            city_kana: rec.take(CITY_KANA),
            town: rec.take(TOWN),
            town_kana: rec.take(TOWN_KANA),
            multi_postal_code: rec.flag(MULTI_POSTAL_CODE),
            koaza_banchi: rec.flag(KOAZA_BANCHI),
            chome: rec.flag(CHOME),
            multi_town: rec.flag(MULTI_TOWN),
        };
        map.insert(entry.postal_code.clone(), entry);
    }

    if skipped > 0 {
        log::debug!("[jp-postal] skipped {skipped} malformed rows in {REGISTRY_FILE_NAME}");
    }
    log::info!("[jp-postal] loaded {} entries from {REGISTRY_FILE_NAME}", map.len());
    Ok(map)
}

/// `JIGYOSYO.CSV` を解析します。
///
/// 同じ郵便番号が複数行に現れる場合は、後の行で上書きします。
/// 郵便番号が7文字でない行や列が不足している行は読み飛ばします。
pub fn parse_office(bytes: &[u8]) -> Result<HashMap<String, OfficeAddress>> {
    use office_col::*;

    let mut map = HashMap::new();
    let mut skipped = 0usize;

    for record in CsvRecords::new(bytes, OFFICE_FILE_NAME) {
        let mut rec = RawRecord(record?);
        if rec.0.len() < MIN_COLUMNS || !rec.has_valid_postal_code(POSTAL_CODE) {
            skipped += 1;
            continue;
        }
        let entry = OfficeAddress {
            postal_code: rec.take(POSTAL_CODE),
            old_postal_code: rec.take(OLD_POSTAL_CODE),
            jis_code: rec.take(JIS_CODE),
            prefecture: rec.take(PREFECTURE),
            city: rec.take(CITY),
            town: rec.take(TOWN),
            street_address: rec.take(STREET_ADDRESS),
            company_name: rec.take(COMPANY_NAME),
            company_name_kana: rec.take(COMPANY_NAME_KANA),
            post_office: rec.take(POST_OFFICE),
            code_type: CodeType::from_field(&rec.0[CODE_TYPE]),
        };
        map.insert(entry.postal_code.clone(), entry);
    }

    if skipped > 0 {
        log::debug!("[jp-postal] skipped {skipped} malformed rows in {OFFICE_FILE_NAME}");
    }
    log::info!("[jp-postal] loaded {} entries from {OFFICE_FILE_NAME}", map.len());
    Ok(map)
}

/// 2つの元データをマージします。
///
/// 標準データを先に適用し、事業所データで上書きします。
/// 戻り値は郵便番号順に並びます。
pub fn merge(
    registry: HashMap<String, RegistryAddress>,
    office: HashMap<String, OfficeAddress>,
) -> BTreeMap<String, Address> {
    let mut merged = BTreeMap::new();
    for (code, entry) in registry {
        merged.insert(code, Address::Registry(entry));
    }
    for (code, entry) in office {
        merged.insert(code, Address::Office(entry));
    }
    merged
}

/// ビルド結果の統計情報
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// 標準データから読み込んだ郵便番号の数
    pub registry_entries: usize,
    /// 事業所データから読み込んだ郵便番号の数
    pub office_entries: usize,
    /// マージ後の郵便番号の数
    pub merged_entries: usize,
    /// 圧縮前の行データの合計バイト数
    pub csv_bytes: usize,
    /// 圧縮後の合計バイト数
    pub compressed_bytes: usize,
    /// base64 化後の合計バイト数
    pub encoded_bytes: usize,
}

/// 上位3桁ごとの圧縮済みチャンクの表
///
/// キーは郵便番号の上位3桁、値は base64 化された raw deflate 圧縮済みの行データです。
#[derive(Clone, Debug, Default)]
pub struct ChunkTable {
    chunks: BTreeMap<String, String>,
    stats: BuildStats,
}

impl ChunkTable {
    /// チャンクの数
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// チャンクが1つもない場合は `true`
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// 指定した上位3桁のチャンクを返します。
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.chunks.get(prefix).map(String::as_str)
    }

    /// 上位3桁の昇順でチャンクを列挙します。
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.chunks.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// ビルドの統計情報
    pub const fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// 埋め込み用の Rust ソースを書き出します。
    ///
    /// 出力は `(上位3桁, base64)` の組を上位3桁の昇順に並べた静的スライスです。
    ///
    /// # エラー
    ///
    /// 書き込みに失敗した場合にエラーを返します。
    pub fn write_rust_source<W>(&self, mut wtr: W) -> Result<()>
    where
        W: Write,
    {
        writeln!(wtr, "// Generated file - do not edit")?;
        writeln!(
            wtr,
            "// {} chunks, {} entries",
            self.len(),
            self.stats.merged_entries
        )?;
        writeln!(wtr)?;
        writeln!(wtr, "pub(crate) static CHUNKS: &[(&str, &str)] = &[")?;
        for (prefix, encoded) in self.iter() {
            writeln!(wtr, "    ({prefix:?}, {encoded:?}),")?;
        }
        writeln!(wtr, "];")?;
        Ok(())
    }

    /// 埋め込み用の Rust ソースをファイルに書き出します。
    ///
    /// 同じディレクトリの一時ファイルに書き込んでから置き換えるため、
    /// 失敗した場合に途中までのファイルが残ることはありません。
    ///
    /// # エラー
    ///
    /// 書き込みやファイルの置き換えに失敗した場合にエラーを返します。
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(PostalError::PathIsDirectory(path.to_path_buf()));
        }
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut temp_file = tempfile::NamedTempFile::new_in(dir)?;
        {
            let mut wtr = std::io::BufWriter::new(temp_file.as_file_mut());
            self.write_rust_source(&mut wtr)?;
            wtr.flush()?;
        }
        temp_file.as_file().sync_all()?;
        temp_file.persist(path)?;
        Ok(())
    }
}

/// 元データから [`ChunkTable`] を構築するビルダー
#[derive(Clone, Debug)]
pub struct ChunkTableBuilder {
    level: u32,
}

impl Default for ChunkTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkTableBuilder {
    /// デフォルトの圧縮レベルでビルダーを作成します。
    pub const fn new() -> Self {
        Self {
            level: DEFAULT_COMPRESSION_LEVEL,
        }
    }

    /// deflate の圧縮レベル（0〜9）を設定します。
    ///
    /// # エラー
    ///
    /// `level` が 9 を超える場合にエラーを返します。
    pub fn compression_level(mut self, level: u32) -> Result<Self> {
        if level > 9 {
            return Err(PostalError::invalid_argument(
                "level",
                format!("compression level must be in 0..=9, got {level}"),
            ));
        }
        self.level = level;
        Ok(self)
    }

    /// パース済みの元データからテーブルを構築します。
    ///
    /// # エラー
    ///
    /// チャンクの圧縮に失敗した場合にエラーを返します。
    pub fn build(
        &self,
        registry: HashMap<String, RegistryAddress>,
        office: HashMap<String, OfficeAddress>,
    ) -> Result<ChunkTable> {
        let mut stats = BuildStats {
            registry_entries: registry.len(),
            office_entries: office.len(),
            ..Default::default()
        };

        let merged = merge(registry, office);
        stats.merged_entries = merged.len();
        log::info!("[jp-postal] total merged entries: {}", merged.len());

        let mut partitions: BTreeMap<&str, Vec<&Address>> = BTreeMap::new();
        for entry in merged.values() {
            partitions.entry(entry.prefix()).or_default().push(entry);
        }

        let level = Compression::new(self.level);
        let mut chunks = BTreeMap::new();
        for (prefix, rows) in partitions {
            let chunk = encode_chunk(rows, level)?;
            stats.csv_bytes += chunk.csv_bytes;
            stats.compressed_bytes += chunk.compressed_bytes;
            stats.encoded_bytes += chunk.encoded.len();
            chunks.insert(prefix.to_string(), chunk.encoded);
        }

        Ok(ChunkTable { chunks, stats })
    }

    /// リーダーから元データを読み込んでテーブルを構築します。
    ///
    /// # 引数
    ///
    ///  - `registry_rdr`: `utf_ken_all.csv` のリーダー
    ///  - `office_rdr`: `JIGYOSYO.CSV` のリーダー
    ///
    /// # エラー
    ///
    /// 読み込みに失敗した場合や、入力が UTF-8 でない場合にエラーを返します。
    pub fn from_readers<R, O>(&self, mut registry_rdr: R, mut office_rdr: O) -> Result<ChunkTable>
    where
        R: Read,
        O: Read,
    {
        let mut registry_buf = vec![];
        registry_rdr.read_to_end(&mut registry_buf)?;
        let registry = parse_registry(&registry_buf)?;

        let mut office_buf = vec![];
        office_rdr.read_to_end(&mut office_buf)?;
        let office = parse_office(&office_buf)?;

        self.build(registry, office)
    }

    /// ファイルパスから元データを読み込んでテーブルを構築します。
    ///
    /// # エラー
    ///
    /// どちらかのファイルが存在しない場合は [`PostalError::SourceNotFound`] を返し、
    /// ビルドは行われません。
    pub fn from_paths<P, Q>(&self, registry: P, office: Q) -> Result<ChunkTable>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let (registry, office) = load_sources(registry, office)?;
        self.build(registry, office)
    }
}

/// 2つの元データファイルを読み込んで解析します。
///
/// # エラー
///
/// どちらかのファイルが存在しない場合は [`PostalError::SourceNotFound`] を返します。
/// 存在の確認は読み込みの前に両方について行います。
pub fn load_sources<P, Q>(
    registry: P,
    office: Q,
) -> Result<(HashMap<String, RegistryAddress>, HashMap<String, OfficeAddress>)>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut registry_file = open_source(registry.as_ref())?;
    let mut office_file = open_source(office.as_ref())?;

    let mut buf = vec![];
    registry_file.read_to_end(&mut buf)?;
    let registry = parse_registry(&buf)?;

    buf.clear();
    office_file.read_to_end(&mut buf)?;
    let office = parse_office(&buf)?;

    Ok((registry, office))
}

fn open_source(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(PostalError::SourceNotFound(path.to_path_buf()));
    }
    if path.is_dir() {
        return Err(PostalError::PathIsDirectory(path.to_path_buf()));
    }
    Ok(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::address::AddressSource;
    use crate::codec::{decode_row, encode_row};

    const KEN_ALL: &str = "\
13113,\"150  \",\"1500001\",\"トウキョウト\",\"シブヤク\",\"ジングウマエ\",\"東京都\",\"渋谷区\",\"神宮前\",0,0,1,0,0,0\r
01224,\"066  \",\"0660005\",\"ホッカイドウ\",\"チトセシ\",\"キョウワ\",\"北海道\",\"千歳市\",\"協和（８８－２、２７１－１０、\",1,0,0,0,0,0\r
01224,\"066  \",\"0660005\",\"ホッカイドウ\",\"チトセシ\",\"キョウワ\",\"北海道\",\"千歳市\",\"４３１－１２、４４３－６）\",1,0,0,0,0,0\r
13101,\"100  \",\"100001\",\"トウキョウト\",\"チヨダク\",\"チヨダ\",\"東京都\",\"千代田区\",\"千代田\",0,0,0,0,0,0\r
13101,\"100  \",\"1000001\",\"トウキョウト\"\r
";

    const JIGYOSYO: &str = "\
01101,\"ﾎﾂｶｲﾄﾞｳﾁﾖｳ\",\"北海道庁\",\"北海道\",\"札幌市中央区\",\"北三条西\",\"６丁目\",\"0608588\",\"060  \",\"札幌中央\",0,0,0\r
13113,\"ｼﾞﾝｸﾞｳﾏｴｼﾖｳｼﾞ\",\"神宮前商事, 株式会社\",\"東京都\",\"渋谷区\",\"神宮前\",\"１－１\",\"1500001\",\"150  \",\"渋谷\",0,0,0\r
01101,\"ﾎﾂｶｲﾄﾞｳﾁﾖｳ\",\"北海道庁（新）\",\"北海道\",\"札幌市中央区\",\"北三条西\",\"６丁目\",\"0608588\",\"060  \",\"札幌中央\",1,0,0\r
";

    #[test]
    fn test_parse_registry_first_row_wins() {
        let map = parse_registry(KEN_ALL.as_bytes()).unwrap();
        assert_eq!(map.len(), 2);
        let a = &map["0660005"];
        assert_eq!(a.town, "協和（８８－２、２７１－１０、");
        assert!(a.multi_postal_code);
        assert_eq!(a.old_postal_code, "066  ");
        assert_eq!(a.jis_code, "01224");
        assert_eq!(a.prefecture_kana, "ホッカイドウ");
    }

    #[test]
    fn test_parse_registry_skips_malformed() {
        let map = parse_registry(KEN_ALL.as_bytes()).unwrap();
        // 6桁の郵便番号と列不足の行
        assert!(!map.contains_key("100001"));
        assert!(!map.contains_key("1000001"));
    }

    #[test]
    fn test_parse_office_last_row_wins() {
        let map = parse_office(JIGYOSYO.as_bytes()).unwrap();
        assert_eq!(map.len(), 2);
        let a = &map["0608588"];
        assert_eq!(a.company_name, "北海道庁（新）");
        assert_eq!(a.code_type, CodeType::LargeVolume);
        assert_eq!(a.company_name_kana, "ﾎﾂｶｲﾄﾞｳﾁﾖｳ");
        assert_eq!(a.street_address, "６丁目");
        assert_eq!(a.post_office, "札幌中央");
    }

    #[test]
    fn test_parse_office_replaces_ascii_comma() {
        let map = parse_office(JIGYOSYO.as_bytes()).unwrap();
        assert_eq!(map["1500001"].company_name, "神宮前商事， 株式会社");
    }

    #[test]
    fn test_parse_office_removes_line_breaks_in_fields() {
        let data = "\
01101,\"ﾎﾂｶｲﾄﾞｳﾁﾖｳ\",\"北海道\r庁\",\"北海道\",\"札幌市中央区\",\"北三条西\",\"６丁目\r\",\"0608588\",\"060  \",\"札幌中央\",0,0,0\r
13113,\"ｼﾌﾞﾔｻﾝﾌﾟﾙ\",\"渋谷\r
サンプル\",\"東京都\",\"渋谷区\",\"神南\",\"２－２－１\",\"1508001\",\"150  \",\"渋谷\",0,0,0\r
27128,\"ｵｵｻｶｻﾝﾌﾟﾙ\",\"大阪サンプル\",\"大阪府\",\"大阪市中央区\",\"北浜\",\"３－１－１\",\"5408610\",\"540  \",\"東\",0,0,0\r
";
        let map = parse_office(data.as_bytes()).unwrap();

        // 改行で分断された行は列が足りずに読み飛ばされ、前後の行には影響しない
        assert!(!map.contains_key("1508001"));
        assert!(map.contains_key("5408610"));

        let a = &map["0608588"];
        assert_eq!(a.company_name, "北海道庁");
        assert_eq!(a.street_address, "６丁目");
        for entry in map.values() {
            assert!(!entry.company_name.contains(['\r', '\n']));
            assert!(!entry.street_address.contains(['\r', '\n']));
        }

        let addr = Address::Office(a.clone());
        assert_eq!(decode_row(&encode_row(&addr)), Some(addr));
    }

    #[test]
    fn test_parse_registry_unbalanced_quote_skips_only_that_line() {
        let data = "\
13113,\"150  \",\"1500002\",\"トウキョウト\",\"シブヤク\",\"シブヤ\",\"東京都\",\"渋谷区\",\"渋谷,0,0,1,0,0,0\r
13113,\"150  \",\"1500001\",\"トウキョウト\",\"シブヤク\",\"ジングウマエ\",\"東京都\",\"渋谷区\",\"神宮前\",0,0,1,0,0,0\r
13113,\"150  \",\"1500043\",\"トウキョウト\",\"シブヤク\",\"ドウゲンザカ\",\"東京都\",\"渋谷区\",\"道玄坂\",0,0,1,0,0,0\r
";
        let map = parse_registry(data.as_bytes()).unwrap();
        let mut codes: Vec<_> = map.keys().map(String::as_str).collect();
        codes.sort_unstable();
        assert_eq!(codes, ["1500001", "1500043"]);
        assert_eq!(map["1500001"].town, "神宮前");
    }

    #[test]
    fn test_merge_office_wins() {
        let registry = parse_registry(KEN_ALL.as_bytes()).unwrap();
        let office = parse_office(JIGYOSYO.as_bytes()).unwrap();
        let merged = merge(registry, office);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged["1500001"].source(), AddressSource::Office);
        assert_eq!(merged["0660005"].source(), AddressSource::Registry);
        let codes: Vec<_> = merged.keys().map(String::as_str).collect();
        assert_eq!(codes, ["0608588", "0660005", "1500001"]);
    }

    #[test]
    fn test_build_partitions_by_prefix() {
        let table = ChunkTableBuilder::new()
            .from_readers(KEN_ALL.as_bytes(), JIGYOSYO.as_bytes())
            .unwrap();
        let prefixes: Vec<_> = table.iter().map(|(p, _)| p).collect();
        assert_eq!(prefixes, ["060", "066", "150"]);
        assert!(table.get("100").is_none());

        let stats = table.stats();
        assert_eq!(stats.registry_entries, 2);
        assert_eq!(stats.office_entries, 2);
        assert_eq!(stats.merged_entries, 3);
        assert!(stats.csv_bytes > 0);
        assert!(stats.compressed_bytes > 0);
    }

    #[test]
    fn test_invalid_compression_level() {
        assert!(ChunkTableBuilder::new().compression_level(10).is_err());
        assert!(ChunkTableBuilder::new().compression_level(0).is_ok());
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let office = dir.path().join(OFFICE_FILE_NAME);
        std::fs::write(&office, JIGYOSYO).unwrap();
        let registry = dir.path().join(REGISTRY_FILE_NAME);

        let err = ChunkTableBuilder::new()
            .from_paths(&registry, &office)
            .unwrap_err();
        assert!(matches!(&err, PostalError::SourceNotFound(p) if p == &registry));
        assert!(err.to_string().contains(REGISTRY_FILE_NAME));
    }

    #[test]
    fn test_write_rust_source() {
        let table = ChunkTableBuilder::new()
            .from_readers(KEN_ALL.as_bytes(), JIGYOSYO.as_bytes())
            .unwrap();
        let mut out = vec![];
        table.write_rust_source(&mut out).unwrap();
        let src = String::from_utf8(out).unwrap();
        assert!(src.starts_with("// Generated file - do not edit\n"));
        assert!(src.contains("pub(crate) static CHUNKS: &[(&str, &str)] = &[\n"));
        assert!(src.contains(&format!("    (\"060\", \"{}\"),\n", table.get("060").unwrap())));
        assert!(src.ends_with("];\n"));
    }

    #[test]
    fn test_write_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("chunks.rs");
        let table = ChunkTableBuilder::new()
            .from_readers(KEN_ALL.as_bytes(), JIGYOSYO.as_bytes())
            .unwrap();
        table.write_to_path(&out).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        let mut expected = vec![];
        table.write_rust_source(&mut expected).unwrap();
        assert_eq!(written.as_bytes(), expected.as_slice());

        assert!(matches!(
            table.write_to_path(dir.path()),
            Err(PostalError::PathIsDirectory(_))
        ));
    }
}
