// Kindle の "My Clippings.txt" の解析
//
// 端末が追記していくログで，1 レコードは
//   タイトル行 / メタデータ行 / 空行 / 本文 (0 行以上) / 区切り行 "=========="
// という形をとる．メタデータ行の書式はファームウェアの世代によって異なるため，
// 既知の書式に当てはまらないものも本文は捨てずに残す．

pub mod error;
pub mod grouper;
pub mod metadata;
pub mod parser;
pub mod reader;
pub mod reporter;
pub mod splitter;
pub mod writer;
