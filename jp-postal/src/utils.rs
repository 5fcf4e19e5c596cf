//! 元データのCSV解析
//!
//! 日本郵便が配布するCSVファイルは、ダブルクォートで囲まれたフィールドを含みます。
//! このモジュールはバッファを行に分け、各行を `csv-core` で1レコードとして解析します。
//!
//! - 1行が1レコード（改行は LF と CRLF の両方を受け付ける）
//! - フィールド先頭の `"` で囲まれた範囲のカンマは区切りとみなさない
//! - 囲まれたフィールド内の `""` はリテラルの `"` に変換する
//! - 空行は読み飛ばす
//!
//! 閉じられていない `"` があっても、その影響はその行の中だけにとどまります。

use csv_core::ReadFieldResult;

use crate::errors::{PostalError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSVバッファをレコード単位で返すイテレータ
///
/// # 例
///
/// ```
/// use jp_postal::utils::CsvRecords;
///
/// let data = "13113,\"150  \",\"1500001\"\r\n\"a,b\",\"say \"\"hi\"\"\"\n";
/// let records: Vec<Vec<String>> = CsvRecords::new(data.as_bytes(), "test")
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(records[0], vec!["13113", "150  ", "1500001"]);
/// assert_eq!(records[1], vec!["a,b", "say \"hi\""]);
/// ```
pub struct CsvRecords<'a> {
    rdr: csv_core::Reader,
    lines: std::slice::Split<'a, u8, fn(&u8) -> bool>,
    name: &'static str,
    line_no: usize,
}

impl<'a> CsvRecords<'a> {
    /// 新しいイテレータを作成します。
    ///
    /// # 引数
    ///
    /// * `bytes` - CSVファイル全体のバイト列
    /// * `name` - エラーメッセージに使うファイル名
    pub fn new(bytes: &'a [u8], name: &'static str) -> Self {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let is_newline: fn(&u8) -> bool = |&b| b == b'\n';
        Self {
            rdr: csv_core::Reader::new(),
            lines: bytes.split(is_newline),
            name,
            line_no: 0,
        }
    }

    /// 1行を1レコードとして解析します。
    fn parse_line(&mut self, mut line: &[u8]) -> Result<Vec<String>> {
        self.rdr.reset();

        let mut fields = vec![];
        let mut field = vec![];
        let mut output = [0; 4096];

        loop {
            let (result, nin, nout) = self.rdr.read_field(line, &mut output);
            line = &line[nin..];
            field.extend_from_slice(&output[..nout]);

            match result {
                // 入力を使い切った。次の呼び出しで空の入力を渡すと行末として扱われる。
                ReadFieldResult::InputEmpty | ReadFieldResult::OutputFull => {}
                ReadFieldResult::Field { record_end } => {
                    let value = String::from_utf8(std::mem::take(&mut field)).map_err(|e| {
                        PostalError::invalid_format(
                            self.name,
                            format!("line {} is not valid UTF-8: {}", self.line_no, e),
                        )
                    })?;
                    fields.push(value);
                    if record_end {
                        return Ok(fields);
                    }
                }
                ReadFieldResult::End => return Ok(fields),
            }
        }
    }
}

impl Iterator for CsvRecords<'_> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(line) = self.lines.next() {
            self.line_no += 1;
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            return Some(self.parse_line(line));
        }
        None
    }
}
