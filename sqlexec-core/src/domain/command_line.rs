// sqlexec-core/src/domain/command_line.rs
//
// Quoting rules of the sqlcmd command line.
// Inside a double-quoted token, `""` stands for one literal quote.

/// Flag whose value is masked in anything meant for humans.
pub const PASSWORD_FLAG: &str = "-P";

const MASK: &str = "****";

/// Doubles every `"` so the text survives being wrapped in quotes.
pub fn escape_query(text: &str) -> String {
    text.replace('"', "\"\"")
}

/// Wraps a value in double quotes, untouched.
pub fn quote(value: &str) -> String {
    format!("\"{}\"", value)
}

/// Joins tokens with single spaces.
pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Same as [`join`] with the value following `-P` masked.
pub fn join_redacted<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    let mut mask_next = false;
    for token in tokens {
        let token = token.as_ref();
        if mask_next {
            out.push(MASK);
            mask_next = false;
        } else {
            out.push(token);
            mask_next = token == PASSWORD_FLAG;
        }
    }
    out.join(" ")
}

/// Splits a command line back into argv using the sqlcmd quoting convention.
///
/// Whitespace outside quotes separates tokens, `"` opens or closes a quoted
/// run and `""` inside a quoted run yields a literal `"`. A bare `""` is an
/// empty token.
pub fn split(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut started = false;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            '"' => {
                in_quotes = !in_quotes;
                started = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if started {
                    tokens.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            c => {
                current.push(c);
                started = true;
            }
        }
    }

    if started {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_without_quotes_is_noop() {
        assert_eq!(escape_query("SELECT 1"), "SELECT 1");
        assert_eq!(escape_query(""), "");
    }

    #[test]
    fn test_escape_doubles_quotes() {
        assert_eq!(escape_query("SELECT \"x\""), "SELECT \"\"x\"\"");
        assert_eq!(escape_query("\""), "\"\"");
    }

    #[test]
    fn test_join_uses_single_spaces() {
        assert_eq!(join(&["-S", "S1", "-E"]), "-S S1 -E");
        assert_eq!(join::<&str>(&[]), "");
    }

    #[test]
    fn test_join_redacted_masks_password() {
        let tokens = ["-S", "S1", "-U", "sa", "-P", "hunter2", "-Q", "\"SELECT 1\""];
        assert_eq!(
            join_redacted(&tokens),
            "-S S1 -U sa -P **** -Q \"SELECT 1\""
        );
        assert_eq!(join_redacted(&["-S", "S1", "-E"]), "-S S1 -E");
    }

    #[test]
    fn test_split_plain_tokens() {
        assert_eq!(split("-S S1  -E"), vec!["-S", "S1", "-E"]);
        assert!(split("   ").is_empty());
    }

    #[test]
    fn test_split_quoted_query_unescapes() {
        let line = format!("-S S1 -E -Q {}", quote(&escape_query("SELECT \"x\" FROM t")));
        assert_eq!(
            split(&line),
            vec!["-S", "S1", "-E", "-Q", "SELECT \"x\" FROM t"]
        );
    }

    #[test]
    fn test_split_keeps_backslashes_and_spaces_in_paths() {
        assert_eq!(
            split("-i \"C:\\My Scripts\\q.sql\""),
            vec!["-i", "C:\\My Scripts\\q.sql"]
        );
    }

    #[test]
    fn test_split_empty_quoted_token() {
        assert_eq!(split("-Q \"\""), vec!["-Q", ""]);
    }
}
