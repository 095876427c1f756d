pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod segment;

use error::GuideError;
use extraction::PdfExtractor;
use model::{DayRecord, GuideDocument};

/// Main API entry point: parse a 28-day guide PDF into a structured document.
///
/// Extracts per-page text, concatenates it, and hands the flat text to
/// `parse_text`. Each page contributes its text plus a trailing newline, so
/// an empty page adds only a page break.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<GuideDocument, GuideError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let text = concat_pages(&pages);
    parse_text(&text)
}

/// Parse flat document text into a guide: segment into days on
/// `Week n | Day m:` markers, then split each segment into
/// title/date/sections.
///
/// Fails with `InsufficientDayMarkers` when fewer than 28 markers are found;
/// no partial document is produced. Missing titles, dates, or sections
/// within a segment are valid empty results, not errors.
pub fn parse_text(text: &str) -> Result<GuideDocument, GuideError> {
    let segments = segment::segment_days(text)?;

    let mut doc = GuideDocument::new();
    for seg in segments {
        let (title, date, sections) = parsing::split_day(&seg.raw);
        doc.insert(DayRecord {
            day: seg.day,
            date,
            title,
            sections,
            raw: seg.raw,
        });
    }

    Ok(doc)
}

/// Concatenate extracted pages into one document text.
pub fn concat_pages(pages: &[extraction::PageText]) -> String {
    let mut text = String::new();
    for page in pages {
        text.push_str(&page.text);
        text.push('\n');
    }
    text
}
