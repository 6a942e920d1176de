//! Line cleaning and tokenization for the text table formats.
//!
//! All of the GTA text tables share the same lexical conventions: trailing
//! comments introduced by a per-format marker character, and rows split on
//! whitespace or commas with double-quoted spans kept intact.

/// Cut `line` at the first occurrence of any comment marker and trim
/// surrounding whitespace.
///
/// The marker set varies per format: IPL uses `#`, IDE adds `%`, the `.dat`
/// tables use `#` and `;`.
pub fn strip_comment<'a>(line: &'a str, markers: &[char]) -> &'a str {
    let mut cut = line.len();
    for &marker in markers {
        if let Some(pos) = line.find(marker) {
            cut = cut.min(pos);
        }
    }
    line[..cut].trim()
}

/// Split a cleaned line into tokens.
///
/// Tokens are separated by whitespace or commas; a double-quoted span counts
/// as a single token with the quotes stripped. A quote that is never closed
/// extends to the end of the line.
pub fn split_tokens(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() || c == ',' {
            chars.next();
            continue;
        }
        if c == '"' {
            chars.next();
            let content_start = start + c.len_utf8();
            let mut content_end = line.len();
            for (i, q) in chars.by_ref() {
                if q == '"' {
                    content_end = i;
                    break;
                }
            }
            tokens.push(line[content_start..content_end.min(line.len())].to_string());
            continue;
        }
        let mut end = line.len();
        while let Some(&(i, n)) = chars.peek() {
            if n.is_whitespace() || n == ',' {
                end = i;
                break;
            }
            chars.next();
        }
        if end == line.len() {
            // Consumed to the end of the line above.
            tokens.push(line[start..].to_string());
            break;
        }
        tokens.push(line[start..end].to_string());
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_first_marker() {
        assert_eq!(strip_comment("data # comment", &['#']), "data");
        assert_eq!(strip_comment("a ; b # c", &['#', ';']), "a");
        assert_eq!(strip_comment("  plain  ", &['#']), "plain");
        assert_eq!(strip_comment("# whole line", &['#']), "");
    }

    #[test]
    fn splits_on_whitespace_and_commas() {
        assert_eq!(split_tokens("1, infernus ,0"), ["1", "infernus", "0"]);
        assert_eq!(split_tokens("a\tb  c"), ["a", "b", "c"]);
        assert_eq!(split_tokens(""), Vec::<String>::new());
    }

    #[test]
    fn quoted_spans_stay_single_tokens() {
        assert_eq!(
            split_tokens(r#"12 "beach hut" 3"#),
            ["12", "beach hut", "3"]
        );
        assert_eq!(split_tokens(r#""only""#), ["only"]);
    }

    #[test]
    fn unterminated_quote_runs_to_end() {
        assert_eq!(split_tokens(r#"1 "open ended"#), ["1", "open ended"]);
    }
}
