//! 郵便番号から住所を検索する
//!
//! [`PostalLookup`] は入力を正規化し、上位3桁のチャンクを [`ChunkStore`] から取り出して
//! 該当する住所を返します。

use crate::address::{Address, PREFIX_LEN};
use crate::chunk::{ChunkSource, ChunkStore};
use crate::normalize::normalize_postal_code;

#[cfg(feature = "embedded")]
use crate::chunk::EmbeddedChunks;

/// 郵便番号検索
///
/// # 例
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use jp_postal::{ChunkTableBuilder, PostalLookup};
///
/// let ken_all = "13113,\"150  \",\"1500001\",\"トウキョウト\",\"シブヤク\",\"ジングウマエ\",\"東京都\",\"渋谷区\",\"神宮前\",0,0,1,0,0,0\n";
/// let table = ChunkTableBuilder::new().from_readers(ken_all.as_bytes(), "".as_bytes())?;
///
/// let lookup = PostalLookup::new(table);
/// let addr = lookup.get("〒150-0001").unwrap();
/// assert_eq!(addr.town(), "神宮前");
/// assert!(lookup.get("150-0002").is_none());
/// # Ok(())
/// # }
/// ```
pub struct PostalLookup<S> {
    store: ChunkStore<S>,
}

impl<S> PostalLookup<S>
where
    S: ChunkSource,
{
    /// チャンクテーブルから作成します。
    pub fn new(source: S) -> Self {
        Self {
            store: ChunkStore::new(source),
        }
    }

    /// 郵便番号に対応する住所を返します。
    ///
    /// 入力は [`normalize_postal_code`] で正規化されます。
    /// 形式が不正な場合や、該当する住所がない場合は `None` を返します。
    pub fn get(&self, input: &str) -> Option<Address> {
        let code = normalize_postal_code(input)?;
        let chunk = self.store.load(&code[..PREFIX_LEN])?;
        chunk.get(&code).cloned()
    }

    /// 内部のチャンクキャッシュ
    pub const fn store(&self) -> &ChunkStore<S> {
        &self.store
    }
}

#[cfg(feature = "embedded")]
#[cfg_attr(docsrs, doc(cfg(feature = "embedded")))]
impl PostalLookup<EmbeddedChunks> {
    /// クレートに同梱されたテーブルを使う検索を作成します。
    pub fn embedded() -> Self {
        Self::new(EmbeddedChunks::bundled())
    }
}

#[cfg(feature = "embedded")]
impl Default for PostalLookup<EmbeddedChunks> {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(feature = "embedded")]
static GLOBAL: std::sync::LazyLock<PostalLookup<EmbeddedChunks>> =
    std::sync::LazyLock::new(PostalLookup::embedded);

/// 同梱されたテーブルから郵便番号に対応する住所を返します。
///
/// チャンクのキャッシュはプロセス全体で共有されます。
///
/// # 例
///
/// ```
/// let addr = jp_postal::get_address("150-0001").unwrap();
/// assert_eq!(addr.prefecture(), "東京都");
/// assert_eq!(addr.city(), "渋谷区");
/// assert!(jp_postal::get_address("abc").is_none());
/// ```
#[cfg(feature = "embedded")]
#[cfg_attr(docsrs, doc(cfg(feature = "embedded")))]
pub fn get_address(input: &str) -> Option<Address> {
    GLOBAL.get(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::address::AddressSource;
    use crate::builder::ChunkTableBuilder;

    const KEN_ALL: &str = "\
01101,\"060  \",\"0600000\",\"ホッカイドウ\",\"サッポロシチュウオウク\",\"イカニケイサイガナイバアイ\",\"北海道\",\"札幌市中央区\",\"以下に掲載がない場合\",0,0,0,0,0,0
13113,\"150  \",\"1500001\",\"トウキョウト\",\"シブヤク\",\"ジングウマエ\",\"東京都\",\"渋谷区\",\"神宮前\",0,0,1,0,0,0
";

    const JIGYOSYO: &str = "\
01101,\"ﾎﾂｶｲﾄﾞｳﾁﾖｳ\",\"北海道庁\",\"北海道\",\"札幌市中央区\",\"北三条西\",\"６丁目\",\"0608588\",\"060  \",\"札幌中央\",0,0,0
";

    fn lookup() -> PostalLookup<crate::builder::ChunkTable> {
        let table = ChunkTableBuilder::new()
            .from_readers(KEN_ALL.as_bytes(), JIGYOSYO.as_bytes())
            .unwrap();
        PostalLookup::new(table)
    }

    #[test]
    fn test_get_registry_and_office() {
        let lookup = lookup();
        let a = lookup.get("060-0000").unwrap();
        assert_eq!(a.source(), AddressSource::Registry);
        assert_eq!(a.town(), "以下に掲載がない場合");

        let b = lookup.get("０６０８５８８").unwrap();
        assert_eq!(b.source(), AddressSource::Office);
        assert_eq!(b.as_office().unwrap().company_name, "北海道庁");
    }

    #[test]
    fn test_invalid_input_does_not_touch_store() {
        let lookup = lookup();
        assert!(lookup.get("").is_none());
        assert!(lookup.get("15-0001").is_none());
        assert!(lookup.get("abcdefg").is_none());
        assert_eq!(lookup.store().cached_len(), 0);
        assert_eq!(lookup.store().decompression_count(), 0);
    }

    #[test]
    fn test_absent_code_in_present_chunk() {
        let lookup = lookup();
        assert!(lookup.get("1500002").is_none());
        assert!(lookup.get("1500001").is_some());
        assert_eq!(lookup.store().decompression_count(), 1);
    }

    #[test]
    fn test_absent_prefix() {
        let lookup = lookup();
        assert!(lookup.get("9990000").is_none());
        assert!(lookup.get("9990001").is_none());
        assert_eq!(lookup.store().decompression_count(), 0);
        assert_eq!(lookup.store().cached_len(), 1);
    }
}
