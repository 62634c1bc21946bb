use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    Highlight,
    Note,
    Bookmark,
    Clip, // 記事の切り抜き
}

impl AnnotationKind {
    pub fn of(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "highlight" => Some(Self::Highlight),
            "note" => Some(Self::Note),
            "bookmark" => Some(Self::Bookmark),
            "clip" => Some(Self::Clip),
            _ => None,
        }
    }
}

/// Metadata line syntaxes, in the order they are tried.
///
/// Firmware releases changed the wording of the second line of a record.
/// Each variant owns the pattern for one of those wordings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataFormat {
    /// `- Your Highlight on page 12 | Location 150-152 | Added on ...`
    PageAndLocation,
    /// `- Your Highlight on Location 150-152 | Added on ...`
    Location,
    /// `- Your Highlight at location 150-152 | Added on ...`
    AtLocation,
    /// `- Highlight on Page 12 | Loc. 150-52 | Added on ...`
    LegacyPageAndLoc,
    /// `- Highlight Loc. 150-52 | Added on ...`
    LegacyLoc,
    /// `- Your Highlight on page 12 | Added on ...`
    Page,
}

const KIND: &str = r"(?P<kind>Highlight|Note|Bookmark|Clip)";
const ADDED_ON: &str = r"(?:\s*\|\s*Added on\s+(?P<added>.+?))?";

impl MetadataFormat {
    pub const ALL: [MetadataFormat; 6] = [
        Self::PageAndLocation,
        Self::Location,
        Self::AtLocation,
        Self::LegacyPageAndLoc,
        Self::LegacyLoc,
        Self::Page,
    ];

    fn pattern(&self) -> String {
        let body = match self {
            Self::PageAndLocation => format!(
                r"Your\s+{KIND}\s+on\s+page\s+(?P<page>\S+)\s*\|\s*Location\s+(?P<location>\S+)"
            ),
            Self::Location => format!(r"Your\s+{KIND}\s+on\s+Location\s+(?P<location>\S+)"),
            Self::AtLocation => format!(r"Your\s+{KIND}\s+at\s+location\s+(?P<location>\S+)"),
            Self::LegacyPageAndLoc => format!(
                r"{KIND}\s+on\s+Page\s+(?P<page>\S+)\s*\|\s*Loc\.\s*(?P<location>\S+)"
            ),
            Self::LegacyLoc => format!(r"{KIND}\s+Loc\.\s*(?P<location>\S+)"),
            Self::Page => format!(r"Your\s+{KIND}\s+on\s+page\s+(?P<page>\S+)"),
        };

        format!(r"(?i)^-\s*{body}{ADDED_ON}\s*$")
    }

    fn regex(&self) -> &'static Regex {
        static REGEXES: Lazy<Vec<(MetadataFormat, Regex)>> = Lazy::new(|| {
            MetadataFormat::ALL
                .iter()
                .map(|format| (*format, Regex::new(&format.pattern()).unwrap()))
                .collect()
        });

        REGEXES
            .iter()
            .find(|(format, _)| format == self)
            .map(|(_, regex)| regex)
            .unwrap()
    }

    pub fn parse(&self, line: &str) -> Option<Metadata> {
        let captures = self.regex().captures(line.trim())?;

        let kind = AnnotationKind::of(&captures["kind"])?;
        let group = |name: &str| captures.name(name).map(|m| m.as_str().to_owned());

        Some(Metadata {
            format: *self,
            kind,
            page: group("page"),
            location: group("location"),
            added_on: group("added"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub format: MetadataFormat,
    pub kind: AnnotationKind,
    pub page: Option<String>,
    pub location: Option<String>,
    pub added_on: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataLine {
    Known(Metadata),
    Unknown(String),
}

// 先に当てはまった書式を採用する
pub fn parse_metadata_line(line: &str) -> MetadataLine {
    MetadataFormat::ALL
        .iter()
        .find_map(|format| format.parse(line))
        .map(MetadataLine::Known)
        .unwrap_or_else(|| MetadataLine::Unknown(line.trim().to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(line: &str) -> Metadata {
        match parse_metadata_line(line) {
            MetadataLine::Known(metadata) => metadata,
            MetadataLine::Unknown(line) => panic!("not recognized: {line:?}"),
        }
    }

    #[test]
    fn page_and_location() {
        let m = known("- Your Highlight on page 12 | Location 150-152 | Added on Sunday, 7 January 2018 21:20:41");
        assert_eq!(m.format, MetadataFormat::PageAndLocation);
        assert_eq!(m.kind, AnnotationKind::Highlight);
        assert_eq!(m.page.as_deref(), Some("12"));
        assert_eq!(m.location.as_deref(), Some("150-152"));
        assert_eq!(m.added_on.as_deref(), Some("Sunday, 7 January 2018 21:20:41"));
    }

    #[test]
    fn location_only() {
        let m = known("- Your Note on Location 1,204 | Added on Friday, March 3, 2017 8:01:12 PM");
        assert_eq!(m.format, MetadataFormat::Location);
        assert_eq!(m.kind, AnnotationKind::Note);
        assert_eq!(m.page, None);
        assert_eq!(m.location.as_deref(), Some("1,204"));
    }

    #[test]
    fn at_location() {
        let m = known("- Your Highlight at location 88-90 | Added on Tuesday, 2 May 2017 07:00:00");
        assert_eq!(m.format, MetadataFormat::AtLocation);
        assert_eq!(m.location.as_deref(), Some("88-90"));
    }

    #[test]
    fn legacy_page_and_loc() {
        let m = known("- Highlight on Page 7 | Loc. 101-03 | Added on Saturday, April 14, 2012, 10:15 AM");
        assert_eq!(m.format, MetadataFormat::LegacyPageAndLoc);
        assert_eq!(m.page.as_deref(), Some("7"));
        assert_eq!(m.location.as_deref(), Some("101-03"));
        assert_eq!(m.added_on.as_deref(), Some("Saturday, April 14, 2012, 10:15 AM"));
    }

    #[test]
    fn legacy_loc() {
        let m = known("- Bookmark Loc. 523 | Added on Monday, June 4, 2012, 11:40 PM");
        assert_eq!(m.format, MetadataFormat::LegacyLoc);
        assert_eq!(m.kind, AnnotationKind::Bookmark);
        assert_eq!(m.location.as_deref(), Some("523"));
    }

    #[test]
    fn page_only() {
        let m = known("- Your Highlight on page 33 | Added on Wednesday, 9 August 2023 12:00:00");
        assert_eq!(m.format, MetadataFormat::Page);
        assert_eq!(m.page.as_deref(), Some("33"));
        assert_eq!(m.location, None);
    }

    #[test]
    fn added_on_is_optional() {
        let m = known("- Highlight Loc. 12-13");
        assert_eq!(m.format, MetadataFormat::LegacyLoc);
        assert_eq!(m.added_on, None);
    }

    #[test]
    fn case_and_surrounding_whitespace_are_ignored() {
        let m = known("  - your CLIP on location 5 | added on today \r");
        assert_eq!(m.kind, AnnotationKind::Clip);
        assert_eq!(m.location.as_deref(), Some("5"));
        assert_eq!(m.added_on.as_deref(), Some("today"));
    }

    #[test]
    fn unknown_syntax_is_kept_raw() {
        assert_eq!(
            parse_metadata_line("- Votre surlignement sur la page 4 "),
            MetadataLine::Unknown("- Votre surlignement sur la page 4".to_owned())
        );
    }
}
