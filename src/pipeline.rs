use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::clippings::{
    error::ClippingsError,
    grouper::BookGroups,
    metadata::MetadataLine,
    parser::{parse_record, ParseTally, ParsedRecord},
    reader::read_clippings,
    splitter::split_records,
    writer::{write_book_groups, WriteReport},
};

pub const DEFAULT_INPUT_FILE: &str = "My Clippings.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "Highlights_by_Book";

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub tally: ParseTally,
    pub report: WriteReport,
}

pub fn parse_clippings(txt: &str) -> Result<(BookGroups, ParseTally)> {
    let mut groups = BookGroups::new();
    let mut tally = ParseTally::default();

    for (i, record) in split_records(txt)?.enumerate() {
        let parsed = parse_record(record);
        tally.count(&parsed);

        match parsed {
            ParsedRecord::Highlight(highlight) => {
                let book = &highlight.book_title;
                match &highlight.metadata {
                    MetadataLine::Known(metadata) => {
                        debug!(record = i, %book, ?metadata, "parsed");
                    }
                    MetadataLine::Unknown(line) => {
                        warn!(record = i, %book, "unrecognized metadata line: {:?}", line);
                    }
                }
                groups.push(highlight);
            }
            ParsedRecord::Skipped(reason) => debug!(record = i, ?reason, "skipped"),
        }
    }

    // 構造が壊れたレコードしか無いものも認識できないファイルとする
    if tally.highlights + tally.empty_highlights == 0 {
        let reason = if tally.records == 0 {
            "no records found".to_owned()
        } else {
            format!("none of {} record(s) could be recognized", tally.records)
        };
        return Err(ClippingsError::EmptyOrUnrecognizedFile(reason).into());
    }

    Ok((groups, tally))
}

// 入力に問題があれば出力ディレクトリを作る前に止める
pub fn run(config: &Config) -> Result<RunSummary> {
    let txt = read_clippings(&config.input)?;

    let (groups, tally) = parse_clippings(&txt)
        .with_context(|| format!("Failed to parse {}", config.input.display()))?;

    // 栞しか無いときは何も書かない
    let report = if groups.is_empty() {
        WriteReport::default()
    } else {
        write_book_groups(&groups, &config.output_dir)?
    };

    Ok(RunSummary { tally, report })
}
