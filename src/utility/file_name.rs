use std::collections::HashSet;

const MAX_STEM_BYTES: usize = 200;
const EXTENSION: &str = "txt";

// Windows のデバイス名
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

fn is_illegal(c: char) -> bool {
    matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*') || c.is_control()
}

/// Turns a book title into a stem that is safe on Windows, macOS and Linux.
pub fn sanitize_file_stem(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| if is_illegal(c) { '_' } else { c })
        .collect();

    let mut stem = truncate_at_char_boundary(replaced.trim(), MAX_STEM_BYTES)
        .trim_end_matches(|c: char| c == '.' || c.is_whitespace())
        .to_owned();

    if stem.is_empty() {
        stem = "Untitled".to_owned();
    }

    let device_name = stem.split('.').next().unwrap_or_default();
    if RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(device_name))
    {
        stem.insert(0, '_');
    }

    stem
}

pub fn sanitize_file_name(title: &str) -> String {
    format!("{}.{}", sanitize_file_stem(title), EXTENSION)
}

fn truncate_at_char_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Assigns one file name per title, in order.
///
/// Titles that sanitize to the same name get " (2)", " (3)", ... appended.
/// Names are compared case-insensitively so that the result is also
/// collision-free on case-insensitive filesystems.
pub fn assign_file_names<'a>(titles: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut taken = HashSet::new();
    let mut names = Vec::new();

    for title in titles {
        let stem = sanitize_file_stem(title);

        let mut candidate = format!("{}.{}", stem, EXTENSION);
        let mut n = 2;
        while !taken.insert(candidate.to_lowercase()) {
            candidate = format!("{} ({}).{}", stem, n, EXTENSION);
            n += 1;
        }

        names.push(candidate);
    }

    names
}
