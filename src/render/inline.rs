//! Inline code spans inside prose.
//!
//! A span opens with a run of backticks and closes at the next run of
//! the same length, so ``` ``a`b`` ``` is the code `` a`b ``. A run with
//! no partner is literal text. One space of padding on each side is
//! dropped, which lets a span start or end with a backtick.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Text(&'a str),
    Code(&'a str),
}

pub fn spans(text: &str) -> Vec<Span<'_>> {
    let bytes = text.as_bytes();
    let mut out   = Vec::new();
    let mut start = 0;
    let mut i     = 0;

    while i < bytes.len() {
        if bytes[i] != b'`' {
            i += 1;
            continue;
        }

        let run  = run_len(bytes, i);
        let body = i + run;
        match find_run(bytes, body, run) {
            Some(close) => {
                if i > start {
                    out.push(Span::Text(&text[start..i]));
                }
                out.push(Span::Code(trim_padding(&text[body..close])));
                i     = close + run;
                start = i;
            }
            None => i = body,
        }
    }

    if start < text.len() {
        out.push(Span::Text(&text[start..]));
    }
    out
}

fn run_len(bytes: &[u8], at: usize) -> usize {
    bytes[at..].iter().take_while(|b| **b == b'`').count()
}

/// Position of the next backtick run of exactly `len`, starting at `from`
fn find_run(bytes: &[u8], from: usize, len: usize) -> Option<usize> {
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] == b'`' {
            let n = run_len(bytes, i);
            if n == len {
                return Some(i);
            }
            i += n;
        } else {
            i += 1;
        }
    }
    None
}

fn trim_padding(code: &str) -> &str {
    let padded = code.len() >= 2 && code.starts_with(' ') && code.ends_with(' ');
    if padded && !code.bytes().all(|b| b == b' ') {
        &code[1..code.len() - 1]
    } else {
        code
    }
}

/// Prose with the backticks removed, for plain-text output
pub fn strip_code_marks(text: &str) -> String {
    spans(text)
        .into_iter()
        .map(|s| match s {
            Span::Text(t) | Span::Code(t) => t,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_code_spans() {
        assert_eq!(
            spans("use `WHERE` before `GROUP BY`"),
            vec![
                Span::Text("use "),
                Span::Code("WHERE"),
                Span::Text(" before "),
                Span::Code("GROUP BY"),
            ]
        );
    }

    #[test]
    fn test_unmatched_backtick_is_text() {
        assert_eq!(spans("a ` b"), vec![Span::Text("a ` b")]);
    }

    #[test]
    fn test_double_backticks_enclose_a_single_backtick() {
        assert_eq!(
            spans("quote with ``a`b`` here"),
            vec![Span::Text("quote with "), Span::Code("a`b"), Span::Text(" here")]
        );
    }

    #[test]
    fn test_padding_lets_code_be_a_backtick() {
        assert_eq!(spans("`` ` ``"), vec![Span::Code("`")]);
        assert_eq!(spans("`  `"), vec![Span::Code("  ")]);
    }

    #[test]
    fn test_runs_of_different_length_do_not_pair() {
        assert_eq!(spans("```x`` y"), vec![Span::Text("```x`` y")]);
        assert_eq!(
            spans("``a` `b``"),
            vec![Span::Code("a` `b")]
        );
    }

    #[test]
    fn test_strip_code_marks() {
        assert_eq!(strip_code_marks("`%` is any run"), "% is any run");
    }
}
