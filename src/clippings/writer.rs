use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use indicatif::ProgressIterator;
use tracing::{debug, warn};

use crate::{
    clippings::grouper::{BookGroup, BookGroups},
    utility::{file_name::assign_file_names, progress::create_progress_bar},
};

#[derive(Debug)]
pub struct WrittenBook {
    pub book_title: String,
    pub path: PathBuf,
    pub highlight_count: usize,
}

#[derive(Debug)]
pub struct WriteFailure {
    pub book_title: String,
    pub path: PathBuf,
    pub error: anyhow::Error,
}

#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<WrittenBook>,
    pub failures: Vec<WriteFailure>,
}

pub fn render_book(group: &BookGroup) -> String {
    let mut content = String::new();
    for highlight in &group.highlights {
        content.push_str(highlight);
        content.push('\n');
    }
    content
}

// 1 冊の書き込みに失敗しても残りは書き込む
pub fn write_book_groups(groups: &BookGroups, output_dir: &Path) -> Result<WriteReport> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let file_names = assign_file_names(groups.iter().map(|g| g.book_title.as_str()));

    let mut report = WriteReport::default();

    let pb = create_progress_bar(groups.len() as u64);
    for (group, file_name) in groups.iter().zip(file_names).progress_with(pb) {
        let path = output_dir.join(&file_name);

        match fs::write(&path, render_book(group))
            .with_context(|| format!("Failed to write {}", path.display()))
        {
            Ok(()) => {
                debug!(book = %group.book_title, path = %path.display(), "written");
                report.written.push(WrittenBook {
                    book_title: group.book_title.clone(),
                    path,
                    highlight_count: group.highlights.len(),
                });
            }
            Err(error) => {
                warn!(book = %group.book_title, "{:#}", error);
                report.failures.push(WriteFailure {
                    book_title: group.book_title.clone(),
                    path,
                    error,
                });
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clippings::{metadata::MetadataLine, parser::Highlight};

    fn groups(items: &[(&str, &str)]) -> BookGroups {
        items
            .iter()
            .map(|(title, text)| Highlight {
                book_title: title.to_string(),
                metadata: MetadataLine::Unknown(String::new()),
                text: text.to_string(),
            })
            .collect()
    }

    #[test]
    fn renders_one_highlight_per_line() {
        let groups = groups(&[("Book A", "Hello world."), ("Book A", "Second highlight.")]);
        let group = groups.iter().next().unwrap();
        assert_eq!(render_book(group), "Hello world.\nSecond highlight.\n");
    }

    #[test]
    fn writes_files_and_creates_directory() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let out = dir.path().join("nested/out");

        let report = write_book_groups(&groups(&[("A: One", "x"), ("B", "y")]), &out)?;

        assert!(report.failures.is_empty());
        assert_eq!(report.written.len(), 2);
        assert_eq!(fs::read_to_string(out.join("A_ One.txt"))?, "x\n");
        assert_eq!(fs::read_to_string(out.join("B.txt"))?, "y\n");
        Ok(())
    }

    #[test]
    fn existing_directory_and_files_are_overwritten() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        fs::write(dir.path().join("B.txt"), "stale\nstale\nstale\n")?;

        write_book_groups(&groups(&[("B", "fresh")]), dir.path())?;

        assert_eq!(fs::read_to_string(dir.path().join("B.txt"))?, "fresh\n");
        Ok(())
    }

    #[test]
    fn a_failing_book_does_not_stop_the_others() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        // 同名のディレクトリがあると書き込めない
        fs::create_dir(dir.path().join("Blocked.txt"))?;

        let report = write_book_groups(&groups(&[("Blocked", "x"), ("Fine", "y")]), dir.path())?;

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].book_title, "Blocked");
        assert_eq!(report.written.len(), 1);
        assert_eq!(fs::read_to_string(dir.path().join("Fine.txt"))?, "y\n");
        Ok(())
    }
}
