use crate::clippings::{parser::ParseTally, writer::WriteReport};

pub fn render_summary(tally: &ParseTally, report: &WriteReport) -> String {
    let mut out = String::new();

    if report.written.is_empty() && report.failures.is_empty() {
        out.push_str("No highlights found.\n");
    }

    for book in &report.written {
        out.push_str(&format!("{}: {}\n", book.book_title, book.highlight_count));
    }

    let total: usize = report.written.iter().map(|b| b.highlight_count).sum();
    out.push_str(&format!("Total: {}\n", total));
    out.push_str(&format!("Parse errors: {}\n", tally.parse_errors()));

    if tally.empty_highlights > 0 {
        out.push_str(&format!("Bookmarks skipped: {}\n", tally.empty_highlights));
    }

    if !report.failures.is_empty() {
        out.push_str(&format!("Failed to write {} book(s):\n", report.failures.len()));
        for failure in &report.failures {
            out.push_str(&format!(
                "  {} ({}): {:#}\n",
                failure.book_title,
                failure.path.display(),
                failure.error
            ));
        }
    }

    out
}
