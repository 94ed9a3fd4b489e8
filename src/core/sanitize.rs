// src/core/sanitize.rs

/// Collapse whitespace runs to one space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Canonical column name: whitespace-normalized, title case.
/// `" home TEAM "` -> `"Home Team"`. A letter is capitalized when the
/// previous char is not a letter, so `"o'neil"` -> `"O'Neil"`.
pub fn normalize_header(s: &str) -> String {
    let s = normalize_ws(s.trim_start_matches('\u{feff}'));
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha { out.extend(ch.to_lowercase()); }
            else { out.extend(ch.to_uppercase()); }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Split a sequence into display lines of `size` items joined by ", ".
pub fn batch_lines<S: AsRef<str>>(items: &[S], size: usize) -> Vec<String> {
    items
        .chunks(size.max(1))
        .map(|chunk| chunk.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_case_and_spacing() {
        assert_eq!(normalize_header("  home   TEAM "), "Home Team");
        assert_eq!(normalize_header("date"), "Date");
        assert_eq!(normalize_header("AWAY_TEAM"), "Away_Team");
        assert_eq!(normalize_header("\u{feff}Date"), "Date");
    }

    #[test]
    fn batches_of_three() {
        let teams = ["A", "B", "C", "D"];
        assert_eq!(batch_lines(&teams, 3), vec!["A, B, C", "D"]);
        assert!(batch_lines::<&str>(&[], 3).is_empty());
    }
}
