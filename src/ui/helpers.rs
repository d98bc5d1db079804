//! Shared rendering utilities.
//!
//! Search match highlighting, padding and truncation. Everything works on
//! character indices, never byte indices, so notes with multi-byte text render
//! correctly.

use crate::query::filter::fold_case;
use crate::ui::theme::Theme;
use std::fmt::{self, Write};

/// Finds non-overlapping, case-insensitive occurrences of `term` in `text`.
///
/// # Returns
///
/// `(start, end)` character index ranges, exclusive end. Empty when the
/// term is blank.
///
/// # Example
///
/// ```rust
/// use mood_journal::ui::helpers::find_match_ranges;
///
/// assert_eq!(find_match_ranges("Work then work", "WORK"), vec![(0, 4), (10, 14)]);
/// ```
#[must_use]
pub fn find_match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = fold_case(term.trim()).chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    // Folded characters, each tagged with the index of the source character.
    let (haystack, origin): (Vec<char>, Vec<usize>) = text
        .chars()
        .enumerate()
        .flat_map(|(i, c)| c.to_lowercase().map(move |lower| (lower, i)))
        .unzip();

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut pos = 0;

    while pos + needle.len() <= haystack.len() {
        if haystack[pos..pos + needle.len()] == needle[..] {
            let start = origin[pos];
            let end = origin[pos + needle.len() - 1] + 1;
            match ranges.last_mut() {
                Some(last) if last.1 > start => last.1 = end,
                _ => ranges.push((start, end)),
            }
            pos += needle.len();
        } else {
            pos += 1;
        }
    }

    ranges
}

/// Writes text with highlighted character ranges.
///
/// Highlighted sections use the match highlight colors and restore
/// `base_fg` afterwards so the rest of the line keeps its color.
///
/// # Errors
///
/// Propagates formatter errors from `out`.
pub fn write_highlighted_text<W: Write>(
    out: &mut W,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base_fg: &str,
) -> fmt::Result {
    if ranges.is_empty() {
        return out.write_str(text);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        out.write_str(&normal_section)?;

        let highlighted_section: String = chars[start..end].iter().collect();
        write!(
            out,
            "{}{}{highlighted_section}{}{}",
            theme.fg(&theme.colors.match_highlight_fg),
            theme.bg(&theme.colors.match_highlight_bg),
            theme.reset(),
            theme.fg(base_fg),
        )?;

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        out.write_str(&remaining)?;
    }

    Ok(())
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Truncates to `max` characters, ending in `...` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if char_len(text) <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str("...");
    cut
}

/// Left padding that centers `text` within `cols`.
#[must_use]
pub fn center_padding(text: &str, cols: usize) -> usize {
    cols.saturating_sub(char_len(text)) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeMode;

    #[test]
    fn match_ranges_are_case_insensitive_and_non_overlapping() {
        assert_eq!(find_match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert_eq!(find_match_ranges("Café CAFÉ", "café"), vec![(0, 4), (5, 9)]);
        assert!(find_match_ranges("anything", "  ").is_empty());
        assert!(find_match_ranges("ab", "abc").is_empty());
    }

    #[test]
    fn highlights_follow_search_folding() {
        use crate::domain::{Mood, MoodEntry};
        use crate::query::filter::{matches_search, normalize_search};

        let entry = MoodEntry {
            id: 1,
            mood: Mood::Good,
            note: "İzmir trip".to_string(),
            tags: vec![],
            timestamp: chrono::Utc::now(),
        };
        let term = normalize_search("i").unwrap();

        assert!(matches_search(&entry, &term));
        assert_eq!(find_match_ranges(&entry.note, "i"), vec![(0, 1), (3, 4), (8, 9)]);

        let sigma = normalize_search("ΟΔΟΣ").unwrap();
        assert_eq!(sigma, "οδοσ");
        assert_eq!(find_match_ranges("ΟΔΟΣ", "ΟΔΟΣ"), vec![(0, 4)]);
    }

    #[test]
    fn highlighting_without_color_keeps_text() {
        let theme = Theme::for_mode(ThemeMode::Light).unwrap().with_color(false);
        let mut out = String::new();
        write_highlighted_text(&mut out, "gym then gym", &[(0, 3), (9, 12)], &theme, "#000000").unwrap();
        assert_eq!(out, "gym then gym");
    }

    #[test]
    fn highlighting_wraps_matches_in_escapes() {
        let theme = Theme::for_mode(ThemeMode::Dark).unwrap();
        let mut out = String::new();
        write_highlighted_text(&mut out, "a run", &[(2, 5)], &theme, &theme.colors.text_normal).unwrap();
        assert!(out.starts_with("a "));
        assert!(out.contains(&format!("{}run{}", theme.bg(&theme.colors.match_highlight_bg), theme.reset())));
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ééééééééé", 6), "ééé...");
    }
}
