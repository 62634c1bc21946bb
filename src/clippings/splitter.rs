use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::clippings::error::ClippingsError;

// Kindle は "==========" を使う
static REGEX_EQUALS_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^={10,}[ \t]*\r?$").unwrap());

// 手で編集されたものには長いハイフンが使われていることがある
// "=" の区切り行が一つも無いときだけ使う (本文中のハイフン行で切らない)
static REGEX_HYPHEN_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^-{10,}[ \t]*\r?$").unwrap());

fn delimiter_for(txt: &str) -> Option<&'static Regex> {
    [&*REGEX_EQUALS_DELIMITER, &*REGEX_HYPHEN_DELIMITER]
        .into_iter()
        .find(|regex| regex.is_match(txt))
}

// 区切り行でレコードに分割する
// 空のもの (末尾の区切り行の後など) は捨てる
pub fn split_records(txt: &str) -> Result<impl Iterator<Item = &str>> {
    if txt.trim().is_empty() {
        return Err(
            ClippingsError::EmptyOrUnrecognizedFile("input file is empty".to_owned()).into(),
        );
    }

    let Some(delimiter) = delimiter_for(txt) else {
        return Err(ClippingsError::EmptyOrUnrecognizedFile(
            "no record delimiter found".to_owned(),
        )
        .into());
    };

    Ok(delimiter
        .split(txt)
        .filter(|record| !record.trim().is_empty()))
}
