use crate::clippings::metadata::{parse_metadata_line, MetadataLine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub book_title: String,
    pub metadata: MetadataLine,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    // 栞など，本文のないもの
    EmptyHighlight { book_title: String },
    // メタデータ行がないもの
    MalformedRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedRecord {
    Highlight(Highlight),
    Skipped(SkipReason),
}

/// Counts of what happened to each record, for the final summary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParseTally {
    pub records: usize,
    pub highlights: usize,
    pub unparseable_metadata: usize,
    pub empty_highlights: usize,
    pub malformed_records: usize,
}

impl ParseTally {
    pub fn count(&mut self, parsed: &ParsedRecord) {
        self.records += 1;
        match parsed {
            ParsedRecord::Highlight(highlight) => {
                self.highlights += 1;
                if let MetadataLine::Unknown(_) = highlight.metadata {
                    self.unparseable_metadata += 1;
                }
            }
            ParsedRecord::Skipped(SkipReason::EmptyHighlight { .. }) => self.empty_highlights += 1,
            ParsedRecord::Skipped(SkipReason::MalformedRecord) => self.malformed_records += 1,
        }
    }

    // 栞は数えない
    pub fn parse_errors(&self) -> usize {
        self.unparseable_metadata + self.malformed_records
    }
}

// 1 レコード:
//   タイトル行 (著者が括弧で付くことがある)
//   メタデータ行
//   空行
//   本文 (0 行以上)
pub fn parse_record(record: &str) -> ParsedRecord {
    let mut lines = record.lines().skip_while(|line| line.trim().is_empty());

    let book_title = match lines.next() {
        Some(line) => normalize_title(line),
        None => return ParsedRecord::Skipped(SkipReason::MalformedRecord),
    };

    let metadata = match lines.next() {
        Some(line) if !line.trim().is_empty() => parse_metadata_line(line),
        _ => return ParsedRecord::Skipped(SkipReason::MalformedRecord),
    };

    // メタデータ行の後の空行は無いこともある
    // 出力は 1 行 1 ハイライトなので，複数行の本文は 1 行に纏める
    let text = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() {
        return ParsedRecord::Skipped(SkipReason::EmptyHighlight { book_title });
    }

    ParsedRecord::Highlight(Highlight {
        book_title,
        metadata,
        text,
    })
}

// 端末によってはレコードごとに BOM が入る
fn normalize_title(line: &str) -> String {
    line.trim().trim_start_matches('\u{feff}').trim().to_owned()
}
