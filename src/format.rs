//! Display helpers shared by the CLI and the review templates.

use chrono::{DateTime, Utc};

/// Color used for languages missing from the palette.
pub const DEFAULT_LANGUAGE_COLOR: &str = "#8b949e";

/// `Jan 5, 2024`
#[must_use]
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `1/5/2024`, the short numeric form used inside prompts and reviews.
#[must_use]
pub fn format_short_date(date: DateTime<Utc>) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Compact count: `999`, `1.5k`, `2.3M`.
#[must_use]
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}k", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Hex color GitHub-style UIs use for a language.
#[must_use]
pub fn language_color(language: &str) -> &'static str {
    match language {
        "JavaScript" => "#f1e05a",
        "TypeScript" => "#2b7489",
        "Python" => "#3572A5",
        "Java" => "#b07219",
        "C++" => "#f34b7d",
        "C#" => "#239120",
        "PHP" => "#4F5D95",
        "Ruby" => "#701516",
        "Go" => "#00ADD8",
        "Rust" => "#dea584",
        "Swift" => "#ffac45",
        "Kotlin" => "#F18E33",
        "Dart" => "#00B4AB",
        "HTML" => "#e34c26",
        "CSS" => "#1572B6",
        "Shell" => "#89e051",
        "Dockerfile" => "#384d54",
        "Vue" => "#2c3e50",
        "React" => "#61dafb",
        _ => DEFAULT_LANGUAGE_COLOR,
    }
}

/// Cut `text` to at most `max_chars` characters, appending `...` when cut.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Whole days elapsed between `from` and `now`, never negative.
#[must_use]
pub fn days_between(from: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - from).num_days().max(0)
}

/// Whole 365-day years elapsed between `from` and `now`, never negative.
#[must_use]
pub fn years_between(from: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    days_between(from, now) / 365
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 13, 0, 0).unwrap();
        assert_eq!(format_date(date), "Jan 5, 2024");
        assert_eq!(format_short_date(date), "1/5/2024");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1.0k");
        assert_eq!(format_number(1_540), "1.5k");
        assert_eq!(format_number(2_300_000), "2.3M");
    }

    #[test]
    fn test_language_color() {
        assert_eq!(language_color("Rust"), "#dea584");
        assert_eq!(language_color("COBOL"), DEFAULT_LANGUAGE_COLOR);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_text("a longer description", 8), "a longer...");
        assert_eq!(truncate_text("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_text("", 3), "");
    }

    #[test]
    fn test_elapsed_helpers() {
        let from = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2022, 1, 2, 0, 0, 0).unwrap();

        assert_eq!(days_between(from, now), 732);
        assert_eq!(years_between(from, now), 2);
        assert_eq!(days_between(now, from), 0);
    }
}
