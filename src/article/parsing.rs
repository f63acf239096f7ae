/// Converts a numbered or bulleted list response into one trimmed entry per line.
///
/// Digits and ASCII punctuation are dropped wherever they appear, which removes list markers
/// such as `1.` or `-` but also strips them from inside an item ("e.g." becomes "eg").
/// Vulgar fractions and Roman numerals are not digits and survive.
/// Lines that are empty after filtering produce no entry.
pub fn response_to_list(response: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut buffer = String::new();

    for ch in response.chars() {
        if !is_digit(ch) && !ch.is_ascii_punctuation() {
            buffer.push(ch);
        }
        if ch == '\n' {
            push_trimmed(&mut items, &mut buffer);
        }
    }
    push_trimmed(&mut items, &mut buffer);

    items
}

/// Decimal digits in any script plus super/subscript digits. `char::is_numeric` alone would
/// also match the fraction and Roman-numeral characters of the Latin-1 and Number Forms
/// blocks, which read as text inside a header.
fn is_digit(ch: char) -> bool {
    ch.is_numeric() && !matches!(ch, '\u{00BC}'..='\u{00BE}' | '\u{2150}'..='\u{218B}')
}

fn push_trimmed(items: &mut Vec<String>, buffer: &mut String) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        items.push(trimmed.to_string());
        buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_numbered_markers() {
        assert_eq!(
            response_to_list("1. Introduction\n2. History\n"),
            vec!["Introduction", "History"]
        );
    }

    #[test]
    fn strips_bullets_and_skips_blank_lines() {
        let response = "\n\n- Unit tests\n\n\n* Integration tests\n   \n";
        assert_eq!(
            response_to_list(response),
            vec!["Unit tests", "Integration tests"]
        );
    }

    #[test]
    fn single_line_without_newline_is_trimmed_input() {
        assert_eq!(response_to_list("  Why testing matters  "), vec!["Why testing matters"]);
    }

    #[test]
    fn keeps_last_item_without_trailing_newline() {
        assert_eq!(
            response_to_list("1) Setup\n2) Teardown"),
            vec!["Setup", "Teardown"]
        );
    }

    #[test]
    fn punctuation_inside_items_is_dropped() {
        assert_eq!(
            response_to_list("1. Tools, e.g. mocks\n2. The team's habits\n"),
            vec!["Tools eg mocks", "The teams habits"]
        );
    }

    #[test]
    fn marker_only_lines_produce_nothing() {
        assert_eq!(response_to_list("1.\n2.\n3."), Vec::<String>::new());
        assert!(response_to_list("").is_empty());
    }

    #[test]
    fn trailing_whitespace_never_yields_empty_item() {
        let items = response_to_list("Header A\n   \t");
        assert_eq!(items, vec!["Header A"]);
        assert!(items.iter().all(|item| !item.trim().is_empty()));
    }

    #[test]
    fn handles_windows_line_endings() {
        assert_eq!(
            response_to_list("1. Alpha\r\n2. Beta\r\n"),
            vec!["Alpha", "Beta"]
        );
    }

    #[test]
    fn fractions_and_roman_numerals_are_not_digits() {
        assert_eq!(
            response_to_list("1. Step ½ of Part Ⅳ\n2. Intro"),
            vec!["Step ½ of Part Ⅳ", "Intro"]
        );
    }

    #[test]
    fn non_ascii_digits_are_stripped() {
        assert_eq!(response_to_list("١. Overview\n². Notes"), vec!["Overview", "Notes"]);
    }

    #[test]
    fn keeps_non_ascii_letters() {
        assert_eq!(response_to_list("1. Überblick\n2. Détails"), vec!["Überblick", "Détails"]);
    }
}
