//! クレート全体のテストモジュール群
//!
//! ビルダーからチャンクキャッシュ、検索までを通した動作と、
//! 同梱テーブルに対する検索結果を検証します。
