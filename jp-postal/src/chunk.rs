//! 圧縮済みチャンクの符号化と、展開結果のキャッシュ
//!
//! チャンクは郵便番号の上位3桁が共通するレコードの集まりで、次の形式で保持されます。
//!
//! ```text
//! 行フォーマット（改行区切り） → UTF-8 → raw deflate → base64（標準アルファベット）
//! ```
//!
//! raw deflate にはヘッダ（zlib / gzip）を付けません。
//! [`encode_chunk`] と [`decode_chunk`] は互いに逆変換であり、
//! ビルド時と実行時で共有する唯一のフォーマットです。
//!
//! [`ChunkStore`] は必要になった上位3桁のチャンクだけを展開し、
//! 結果をプロセスの生存期間中キャッシュします。

use std::io::{Read, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use flate2::Compression;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use hashbrown::HashMap;

use crate::address::{Address, PREFIX_LEN};
use crate::builder::ChunkTable;
use crate::codec::{decode_row, write_row};
use crate::errors::Result;

/// 展開済みのチャンク（郵便番号 → 住所）
pub type Chunk = HashMap<String, Address>;

/// 上位3桁から圧縮済みチャンクを引く表
///
/// 実行時に埋め込まれた静的テーブルと、ビルダーが生成した [`ChunkTable`] の両方が実装します。
pub trait ChunkSource: Send + Sync {
    /// 上位3桁に対応する base64 文字列を返します。存在しない場合は `None`。
    fn encoded_chunk(&self, prefix: &str) -> Option<&str>;
}

impl ChunkSource for ChunkTable {
    #[inline(always)]
    fn encoded_chunk(&self, prefix: &str) -> Option<&str> {
        self.get(prefix)
    }
}

/// バイナリに埋め込まれた静的なチャンクテーブル
///
/// テーブルは上位3桁の昇順に並んでいる必要があります。
#[derive(Clone, Copy, Debug)]
pub struct EmbeddedChunks {
    table: &'static [(&'static str, &'static str)],
}

impl EmbeddedChunks {
    /// 上位3桁の昇順に並んだテーブルから作成します。
    pub const fn new(table: &'static [(&'static str, &'static str)]) -> Self {
        Self { table }
    }

    /// クレートに同梱されたテーブルを返します。
    #[cfg(feature = "embedded")]
    #[cfg_attr(docsrs, doc(cfg(feature = "embedded")))]
    pub fn bundled() -> Self {
        Self::new(crate::generated::CHUNKS)
    }

    /// チャンクの数
    pub const fn len(&self) -> usize {
        self.table.len()
    }

    /// チャンクが1つもない場合は `true`
    pub const fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// 収録されている上位3桁を昇順に列挙します。
    pub fn prefixes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.iter().map(|&(prefix, _)| prefix)
    }
}

impl ChunkSource for EmbeddedChunks {
    #[inline(always)]
    fn encoded_chunk(&self, prefix: &str) -> Option<&str> {
        self.table
            .binary_search_by(|&(p, _)| p.cmp(prefix))
            .ok()
            .map(|i| self.table[i].1)
    }
}

/// [`encode_chunk`] の結果
#[derive(Clone, Debug)]
pub struct EncodedChunk {
    /// base64 化された圧縮済みデータ
    pub encoded: String,
    /// 圧縮前の行データのバイト数
    pub csv_bytes: usize,
    /// 圧縮後のバイト数
    pub compressed_bytes: usize,
}

/// 住所レコードの列を1つのチャンクに符号化します。
///
/// 各レコードを行フォーマットに変換して改行で連結し、raw deflate で圧縮して base64 化します。
///
/// # エラー
///
/// 圧縮に失敗した場合にエラーを返します。
pub fn encode_chunk<'a, I>(rows: I, level: Compression) -> Result<EncodedChunk>
where
    I: IntoIterator<Item = &'a Address>,
{
    let mut csv = String::new();
    for (i, address) in rows.into_iter().enumerate() {
        if i != 0 {
            csv.push('\n');
        }
        write_row(&mut csv, address);
    }

    let mut encoder = DeflateEncoder::new(Vec::new(), level);
    encoder.write_all(csv.as_bytes())?;
    let compressed = encoder.finish()?;

    Ok(EncodedChunk {
        encoded: STANDARD.encode(&compressed),
        csv_bytes: csv.len(),
        compressed_bytes: compressed.len(),
    })
}

/// base64 文字列を展開して郵便番号 → 住所の対応表にします。
///
/// 認識できない行は読み飛ばします。
///
/// # エラー
///
/// base64 として不正な場合、deflate ストリームが壊れている場合、
/// 展開結果が UTF-8 でない場合にエラーを返します。
pub fn decode_chunk(encoded: &str) -> Result<Chunk> {
    let compressed = STANDARD.decode(encoded)?;

    let mut bytes = vec![];
    DeflateDecoder::new(compressed.as_slice()).read_to_end(&mut bytes)?;
    let csv = String::from_utf8(bytes)?;

    let mut chunk = Chunk::new();
    for line in csv.split('\n') {
        if line.is_empty() {
            continue;
        }
        if let Some(address) = decode_row(line) {
            chunk.insert(address.postal_code().to_string(), address);
        }
    }
    Ok(chunk)
}

/// 上位3桁の形式（半角数字3桁）であるかを確認します。
#[inline(always)]
fn is_valid_prefix(prefix: &str) -> bool {
    prefix.len() == PREFIX_LEN && prefix.bytes().all(|b| b.is_ascii_digit())
}

type Slot = Arc<OnceLock<Option<Arc<Chunk>>>>;

/// 展開済みチャンクのキャッシュ
///
/// 上位3桁ごとに一度だけ展開し、その結果（存在しないことも含む）を保持し続けます。
/// 複数スレッドから共有でき、同じ上位3桁の初回展開は1つのスレッドだけが行います。
pub struct ChunkStore<S> {
    source: S,
    slots: RwLock<HashMap<String, Slot>>,
    decompressions: AtomicUsize,
}

impl<S> ChunkStore<S>
where
    S: ChunkSource,
{
    /// 新しいキャッシュを作成します。
    pub fn new(source: S) -> Self {
        Self {
            source,
            slots: RwLock::new(HashMap::new()),
            decompressions: AtomicUsize::new(0),
        }
    }

    /// 元になるチャンクテーブル
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// 上位3桁のチャンクを返します。
    ///
    /// 初回はテーブルから展開し、以降はキャッシュを返します。
    /// テーブルに存在しない上位3桁や、半角数字3桁でない文字列には `None` を返します。
    pub fn load(&self, prefix: &str) -> Option<Arc<Chunk>> {
        if !is_valid_prefix(prefix) {
            return None;
        }
        self.slot(prefix)
            .get_or_init(|| self.populate(prefix))
            .clone()
    }

    /// これまでに展開したチャンクの数
    pub fn decompression_count(&self) -> usize {
        self.decompressions.load(Ordering::Relaxed)
    }

    /// キャッシュされている上位3桁の数（存在しないと判明したものを含む）
    pub fn cached_len(&self) -> usize {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    fn slot(&self, prefix: &str) -> Slot {
        if let Some(slot) = self
            .slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(prefix)
        {
            return Arc::clone(slot);
        }
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(prefix.to_string()).or_default())
    }

    fn populate(&self, prefix: &str) -> Option<Arc<Chunk>> {
        let Some(encoded) = self.source.encoded_chunk(prefix) else {
            log::debug!("[jp-postal] no chunk for prefix {prefix}");
            return None;
        };
        self.decompressions.fetch_add(1, Ordering::Relaxed);
        match decode_chunk(encoded) {
            Ok(chunk) => {
                log::debug!("[jp-postal] loaded chunk {prefix} ({} entries)", chunk.len());
                Some(Arc::new(chunk))
            }
            Err(e) => {
                log::error!("[jp-postal] failed to decode chunk {prefix}: {e}");
                None
            }
        }
    }
}
