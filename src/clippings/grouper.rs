use std::collections::HashMap;

use crate::clippings::parser::Highlight;

#[derive(Debug, Default)]
pub struct BookGroup {
    pub book_title: String,
    pub highlights: Vec<String>,
}

/// Highlights keyed by book title, in the order books first appear.
#[derive(Debug, Default)]
pub struct BookGroups {
    groups: Vec<BookGroup>,
    index_by_title: HashMap<String, usize>,
}

impl BookGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, highlight: Highlight) {
        let Highlight {
            book_title, text, ..
        } = highlight;

        match self.index_by_title.get(&book_title) {
            Some(&i) => self.groups[i].highlights.push(text),
            None => {
                self.index_by_title
                    .insert(book_title.clone(), self.groups.len());
                self.groups.push(BookGroup {
                    book_title,
                    highlights: vec![text],
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn highlight_count(&self) -> usize {
        self.groups.iter().map(|g| g.highlights.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookGroup> {
        self.groups.iter()
    }
}

impl FromIterator<Highlight> for BookGroups {
    fn from_iter<I: IntoIterator<Item = Highlight>>(iter: I) -> Self {
        let mut groups = Self::new();
        for highlight in iter {
            groups.push(highlight);
        }
        groups
    }
}
