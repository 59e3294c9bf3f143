/// CSV parsing for the knowledge corpus.
///
/// Handles quoted fields with embedded commas, newlines, and doubled-quote
/// escapes. Ragged rows are tolerated: short rows are padded with empty
/// fields, and fields past the header are dropped with a warning.
use tracing::warn;

use crate::model::Row;

/// Parse CSV text into header-keyed rows.
///
/// The first line is the header; blank lines are skipped. Header-only or
/// empty input yields no rows.
pub fn parse_rows(text: &str) -> Vec<Row> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let lines = parse_lines(text);
    if lines.len() < 2 {
        return Vec::new();
    }

    let headers = &lines[0];
    let mut rows = Vec::with_capacity(lines.len() - 1);
    for fields in &lines[1..] {
        if fields.is_empty() || (fields.len() == 1 && fields[0].is_empty()) {
            continue;
        }
        if fields.len() > headers.len() {
            warn!(
                expected = headers.len(),
                got = fields.len(),
                "csv row has more fields than headers, extras dropped"
            );
        }
        let mut row = Row::with_capacity(headers.len());
        for (j, header) in headers.iter().enumerate() {
            row.insert(header.clone(), fields.get(j).cloned().unwrap_or_default());
        }
        rows.push(row);
    }
    rows
}

/// Split CSV text into lines of fields, respecting quoting.
fn parse_lines(text: &str) -> Vec<Vec<String>> {
    let mut result: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => current.push(std::mem::take(&mut field)),
                '\n' | '\r' => {
                    current.push(std::mem::take(&mut field));
                    if ch == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    result.push(std::mem::take(&mut current));
                }
                _ => field.push(ch),
            }
        }
    }

    // Flush the last field and line when the text does not end in a newline.
    if !field.is_empty() || !current.is_empty() {
        current.push(field);
        result.push(current);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_rows() {
        let rows = parse_rows("Name,Color\nSky,Blue\nGrass,Green\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Name"], "Sky");
        assert_eq!(rows[1]["Color"], "Green");
    }

    #[test]
    fn quoted_field_keeps_commas() {
        let rows = parse_rows("Name,Notes\nCard,\"soft shadow, rounded corners\"\n");
        assert_eq!(rows[0]["Notes"], "soft shadow, rounded corners");
    }

    #[test]
    fn doubled_quotes_escape() {
        let rows = parse_rows("Key,Value\nrule,\"say \"\"no\"\" to clutter\"\n");
        assert_eq!(rows[0]["Value"], "say \"no\" to clutter");
    }

    #[test]
    fn quoted_field_spans_lines() {
        let rows = parse_rows("Name,Checklist\nGlass,\"1. Blur\n2. Border\"\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Checklist"], "1. Blur\n2. Border");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let rows = parse_rows("A,B\n1,2\n\n3,4\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["A"], "3");
    }

    #[test]
    fn short_rows_pad_missing_fields() {
        let rows = parse_rows("A,B,C\n1,2\n");
        assert_eq!(rows[0]["B"], "2");
        assert_eq!(rows[0]["C"], "");
    }

    #[test]
    fn long_rows_drop_extra_fields() {
        let rows = parse_rows("A,B\n1,2,3\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
    }

    #[test]
    fn header_only_yields_no_rows() {
        assert!(parse_rows("A,B,C\n").is_empty());
        assert!(parse_rows("").is_empty());
        assert!(parse_rows("   \n").is_empty());
    }

    #[test]
    fn handles_crlf_line_endings() {
        let rows = parse_rows("A,B\r\n1,2\r\n3,4\r\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["B"], "2");
        assert_eq!(rows[1]["A"], "3");
    }

    #[test]
    fn trailing_comma_yields_empty_last_field() {
        let rows = parse_rows("A,B\n1,\n");
        assert_eq!(rows[0]["B"], "");
    }
}
