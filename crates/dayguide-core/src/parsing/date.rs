use regex::Regex;
use std::sync::LazyLock;

/// Korean date expression: "<yyyy>년 <m>월 <d>일", with optional whitespace
/// around the unit words.
static KOREAN_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})\s*년\s*(\d{1,2})\s*월\s*(\d{1,2})\s*일").expect("date pattern")
});

/// Extract the first Korean date expression from `text` as `YYYY-MM-DD`.
///
/// Purely syntactic: month/day are zero-padded but not calendar-validated.
/// Returns None when no date expression is present.
pub fn extract_date(text: &str) -> Option<String> {
    let caps = KOREAN_DATE.captures(text)?;
    let year: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    Some(format!("{year:04}-{month:02}-{day:02}"))
}
