use crate::error::GuideError;
use regex::Regex;
use std::sync::LazyLock;

/// Number of day markers a complete guide must contain.
pub const REQUIRED_DAYS: usize = 28;

/// Day boundary pattern: "Week <n> | Day <m>:". Only the day number is
/// captured; the week number is discarded.
static DAY_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)week\s*\d+\s*\|\s*day\s*(\d+)\s*:\s*").expect("day marker pattern")
});

/// A located day boundary marker.
///
/// `day` is parsed from the marker text itself, not inferred from position.
/// Markers are ordered by text position; their day numbers are not
/// guaranteed unique, contiguous, or sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayMarker {
    pub day: u32,
    pub start: usize,
    pub end: usize,
}

/// The cleaned text span between one day marker and the next.
#[derive(Debug, Clone)]
pub struct DaySegment {
    pub day: u32,
    pub raw: String,
}

/// Find every day marker in the document, in text order.
pub fn find_day_markers(text: &str) -> Vec<DayMarker> {
    DAY_MARKER
        .captures_iter(text)
        .filter_map(|caps| {
            let m = caps.get(0)?;
            let day: u32 = caps.get(1)?.as_str().parse().ok()?;
            Some(DayMarker {
                day,
                start: m.start(),
                end: m.end(),
            })
        })
        .collect()
}

/// Slice the document into one segment per day marker.
///
/// Segment i spans from the end of marker i to the start of marker i+1;
/// the last segment extends to the end of the document. Fails when fewer
/// than REQUIRED_DAYS markers are found, since downstream consumers assume
/// a complete 28-day set.
pub fn segment_days(text: &str) -> Result<Vec<DaySegment>, GuideError> {
    let markers = find_day_markers(text);

    if markers.len() < REQUIRED_DAYS {
        return Err(GuideError::InsufficientDayMarkers {
            found: markers.len(),
        });
    }

    let segments = markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let start = marker.end;
            let end = markers.get(i + 1).map(|next| next.start).unwrap_or(text.len());
            DaySegment {
                day: marker.day,
                raw: clean_segment(&text[start..end]),
            }
        })
        .collect();

    Ok(segments)
}

/// Strip NUL and other control characters that PDF text extraction can leave
/// behind, keeping line structure (the first line carries the day title),
/// then trim surrounding whitespace.
pub fn clean_segment(raw: &str) -> String {
    raw.chars()
        .filter(|&c| !c.is_control() || c == '\n' || c == '\r' || c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}
