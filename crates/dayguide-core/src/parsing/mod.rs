pub mod date;

use crate::model::SectionMap;

/// The fixed section vocabulary, in canonical guide order.
///
/// Labels are matched as literal substrings. A label occurring inside
/// unrelated content would be picked up as an anchor; accepted limitation
/// of the marker vocabulary.
pub const SECTION_LABELS: [&str; 8] = [
    "아침 의식",
    "핵심 실천",
    "왜 효과가 있을까?",
    "예상되는 저항",
    "돌파 전략",
    "저녁 의식",
    "오늘의 질문",
    "메모",
];

/// Split one cleaned day segment into (title, date, sections).
///
/// Title is the first non-blank line. The date is the first Korean date
/// expression anywhere in the segment. Sections are derived by locating the
/// first occurrence of each known label, sorting the found anchors by
/// offset, and slicing the text between consecutive anchors.
pub fn split_day(segment: &str) -> (String, Option<String>, SectionMap) {
    let title = segment
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string();

    let date = date::extract_date(segment);

    // Anchor list: first occurrence of each label, sorted by offset.
    // Stable sort keeps vocabulary order on (malformed) equal offsets.
    let mut anchors: Vec<(usize, &str)> = SECTION_LABELS
        .iter()
        .filter_map(|&label| segment.find(label).map(|offset| (offset, label)))
        .collect();
    anchors.sort_by_key(|&(offset, _)| offset);

    let mut sections = SectionMap::new();
    for (i, &(offset, label)) in anchors.iter().enumerate() {
        let content_start = offset + label.len();
        let content_end = anchors
            .get(i + 1)
            .map(|&(next, _)| next)
            .unwrap_or(segment.len());
        // A found label always gets a key, even with nothing after it.
        let content = if content_start < content_end {
            segment[content_start..content_end].trim()
        } else {
            ""
        };
        sections.insert(label, content);
    }

    (title, date, sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_first_non_blank_line() {
        let (title, _, _) = split_day("\n   \nMorning Title\nbody");
        assert_eq!(title, "Morning Title");
    }

    #[test]
    fn test_empty_segment_gives_empty_title() {
        let (title, date, sections) = split_day("");
        assert_eq!(title, "");
        assert_eq!(date, None);
        assert!(sections.is_empty());
    }

    #[test]
    fn test_basic_sections() {
        let seg = "Morning Title\n아침 의식 Get up early\n핵심 실천 Do the thing";
        let (title, _, sections) = split_day(seg);
        assert_eq!(title, "Morning Title");
        assert_eq!(sections.get("아침 의식"), Some("Get up early"));
        assert_eq!(sections.get("핵심 실천"), Some("Do the thing"));
    }

    #[test]
    fn test_sections_keyed_in_offset_order() {
        // Vocabulary order differs from text order here
        let seg = "title\n메모 note\n아침 의식 wake";
        let (_, _, sections) = split_day(seg);
        let keys: Vec<&str> = sections.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["메모", "아침 의식"]);
    }

    #[test]
    fn test_label_with_empty_content_still_present() {
        let seg = "title\n오늘의 질문 What matters?\n메모";
        let (_, _, sections) = split_day(seg);
        assert!(sections.contains_key("메모"));
        assert_eq!(sections.get("메모"), Some(""));
        assert_eq!(sections.get("오늘의 질문"), Some("What matters?"));
    }

    #[test]
    fn test_whitespace_only_content_becomes_empty() {
        let seg = "title\n돌파 전략   \n\n";
        let (_, _, sections) = split_day(seg);
        assert_eq!(sections.get("돌파 전략"), Some(""));
    }

    #[test]
    fn test_absent_label_has_no_key() {
        let seg = "title\n아침 의식 wake";
        let (_, _, sections) = split_day(seg);
        assert!(!sections.contains_key("저녁 의식"));
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_no_labels_is_valid_degenerate_result() {
        let seg = "Just a title\nand some prose with no markers";
        let (title, date, sections) = split_day(seg);
        assert_eq!(title, "Just a title");
        assert_eq!(date, None);
        assert!(sections.is_empty());
    }

    #[test]
    fn test_date_read_from_full_segment_not_title() {
        let seg = "Morning Title\n시작일: 2024년 3월 5일\n아침 의식 wake";
        let (_, date, _) = split_day(seg);
        assert_eq!(date, Some("2024-03-05".into()));
    }

    #[test]
    fn test_first_occurrence_wins() {
        // "메모" inside earlier content is found first; known limitation
        // of literal-substring anchors.
        let seg = "title\n핵심 실천 메모를 쓰세요\n메모 real note";
        let (_, _, sections) = split_day(seg);
        assert_eq!(
            sections.get("핵심 실천"),
            Some(""),
            "core-practice content is cut at the embedded 메모 occurrence"
        );
        assert_eq!(sections.get("메모"), Some("를 쓰세요\n메모 real note"));
    }

    #[test]
    fn test_split_idempotent_on_trimmed_segment() {
        let seg = "Morning Title\n아침 의식 wake\n저녁 의식 wind down";
        let first = split_day(seg);
        let second = split_day(seg.trim());
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_eight_labels() {
        let seg = "Day title\n\
            아침 의식 a\n핵심 실천 b\n왜 효과가 있을까? c\n예상되는 저항 d\n\
            돌파 전략 e\n저녁 의식 f\n오늘의 질문 g\n메모 h";
        let (_, _, sections) = split_day(seg);
        assert_eq!(sections.len(), 8);
        for label in SECTION_LABELS {
            assert!(sections.contains_key(label), "missing {label}");
        }
        assert_eq!(sections.get("왜 효과가 있을까?"), Some("c"));
        assert_eq!(sections.get("메모"), Some("h"));
    }
}
