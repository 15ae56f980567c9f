use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unterminated {0} quote")]
    UnterminatedQuote(char),
}

/// Split a command line into words.
///
/// Whitespace separates words; single or double quotes group text, spaces
/// included, into one word. Backslashes are literal so Windows paths pass
/// through untouched.
pub fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '\'' || c == '"' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(ParseError::UnterminatedQuote(q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words() {
        assert_eq!(
            tokenize("  copy a.txt   b.txt ").ok(),
            Some(vec!["copy".to_string(), "a.txt".to_string(), "b.txt".to_string()])
        );
    }

    #[test]
    fn test_quotes_group_words() {
        assert_eq!(
            tokenize(r#"del 'a (1).txt' "my dir"/x"#).ok(),
            Some(vec![
                "del".to_string(),
                "a (1).txt".to_string(),
                "my dir/x".to_string()
            ])
        );
    }

    #[test]
    fn test_empty_quotes_make_empty_word() {
        assert_eq!(
            tokenize("cd ''").ok(),
            Some(vec!["cd".to_string(), String::new()])
        );
    }

    #[test]
    fn test_backslashes_are_literal() {
        assert_eq!(
            tokenize(r"cd C:\Users\me").ok(),
            Some(vec!["cd".to_string(), r"C:\Users\me".to_string()])
        );
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(tokenize("open \"x"), Err(ParseError::UnterminatedQuote('"')));
    }
}
