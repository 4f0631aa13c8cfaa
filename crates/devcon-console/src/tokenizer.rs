// ---------------------------------------------------------------------------
// Tokenizer: whitespace separation, double quotes, and brace literals.
// ---------------------------------------------------------------------------

/// Split a command line into argument tokens.
///
/// - Unquoted whitespace separates tokens; runs of it never produce empty
///   tokens.
/// - A double-quoted span becomes one token without its quotes.
/// - A `{` at the start of the line or right after whitespace opens a brace
///   literal. Everything up to the matching `}` (nested braces counted,
///   `\{` and `\}` skipped) is kept verbatim, braces included, as one token.
///
/// Never fails: an unclosed quote or literal is returned as the trailing
/// token. The first token is the command prefix.
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_quote = false;
    let mut depth = 0usize;
    let mut escaped = false;
    let mut last_was_space = false;

    for (i, ch) in line.char_indices() {
        let next = i + ch.len_utf8();

        if depth > 0 {
            if escaped {
                escaped = false;
                continue;
            }
            match ch {
                '\\' => escaped = true,
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        push_token(&mut tokens, &line[start..next]);
                        start = next;
                    }
                },
                _ => {},
            }
            continue;
        }

        match ch {
            '{' if !in_quote && (i == 0 || last_was_space) => {
                depth = 1;
                start = i;
                last_was_space = false;
            },
            '"' => {
                push_token(&mut tokens, &line[start..i]);
                in_quote = !in_quote;
                start = next;
                last_was_space = false;
            },
            c if c.is_whitespace() && !in_quote => {
                push_token(&mut tokens, &line[start..i]);
                start = next;
                last_was_space = true;
            },
            _ => last_was_space = false,
        }
    }

    push_token(&mut tokens, &line[start..]);
    tokens
}

fn push_token<'a>(tokens: &mut Vec<&'a str>, token: &'a str) {
    if !token.is_empty() {
        tokens.push(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_words() {
        assert_eq!(tokenize("hello world"), ["hello", "world"]);
    }

    #[test]
    fn leading_quoted_word() {
        assert_eq!(tokenize("\"hello\" world"), ["hello", "world"]);
    }

    #[test]
    fn trailing_quoted_word() {
        assert_eq!(tokenize("hello \"world\""), ["hello", "world"]);
    }

    #[test]
    fn both_words_quoted() {
        assert_eq!(tokenize("\"hello\" \"world\""), ["hello", "world"]);
    }

    #[test]
    fn adjacent_quoted_words() {
        assert_eq!(tokenize("\"hello\"\"world\""), ["hello", "world"]);
    }

    #[test]
    fn quoted_span_keeps_spaces() {
        assert_eq!(tokenize("\"hello world\""), ["hello world"]);
    }

    #[test]
    fn empty_quotes_emit_nothing() {
        assert_eq!(tokenize("/say \"\" done"), ["/say", "done"]);
    }

    #[test]
    fn text_before_quote_is_its_own_token() {
        assert_eq!(tokenize("ab\"cd\""), ["ab", "cd"]);
    }

    #[test]
    fn json_literal_is_one_token() {
        let line = "{\"name\":\"a\",\"age\":20}";
        assert_eq!(tokenize(line), [line]);
    }

    #[test]
    fn json_literal_with_inner_space() {
        let line = "{\"name\":\"first last\",\"age\":20}";
        assert_eq!(tokenize(line), [line]);
    }

    #[test]
    fn two_json_literals() {
        assert_eq!(
            tokenize("{\"a\":\"b c\"} {\"d\":\"e\"}"),
            ["{\"a\":\"b c\"}", "{\"d\":\"e\"}"]
        );
    }

    #[test]
    fn command_with_json_literal() {
        assert_eq!(
            tokenize("/parse {\"a\":\"b c\"}"),
            ["/parse", "{\"a\":\"b c\"}"]
        );
    }

    #[test]
    fn nested_literal_closes_at_matching_brace() {
        assert_eq!(
            tokenize("/set {\"a\":{\"b\":1}} tail"),
            ["/set", "{\"a\":{\"b\":1}}", "tail"]
        );
    }

    #[test]
    fn escaped_brace_does_not_close_literal() {
        assert_eq!(tokenize(r"{a \} b} c"), [r"{a \} b}", "c"]);
    }

    #[test]
    fn brace_mid_word_is_plain_text() {
        assert_eq!(tokenize("a{b c}"), ["a{b", "c}"]);
    }

    #[test]
    fn brace_inside_quotes_is_plain_text() {
        assert_eq!(tokenize("x \"{a b}\""), ["x", "{a b}"]);
    }

    #[test]
    fn unclosed_quote_becomes_trailing_token() {
        assert_eq!(tokenize("/say \"hello there"), ["/say", "hello there"]);
    }

    #[test]
    fn unclosed_literal_becomes_trailing_token() {
        assert_eq!(tokenize("/parse {\"a\": 1"), ["/parse", "{\"a\": 1"]);
    }

    #[test]
    fn stray_closing_brace_is_plain_text() {
        assert_eq!(tokenize("a } b"), ["a", "}", "b"]);
    }

    #[test]
    fn tabs_and_runs_of_spaces() {
        assert_eq!(tokenize("  /go \t  north   "), ["/go", "north"]);
    }

    #[test]
    fn empty_and_blank_lines() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn multibyte_characters_survive() {
        assert_eq!(tokenize("/say héllo wörld"), ["/say", "héllo", "wörld"]);
    }

    #[test]
    fn tokens_borrow_from_input() {
        let line = String::from("/a b");
        let tokens = tokenize(&line);
        let base = line.as_ptr() as usize;
        assert_eq!(tokens[1].as_ptr() as usize - base, 3);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn matches_split_whitespace_without_delimiters(line in "[a-z0-9/ \t._-]{0,64}") {
                let expected: Vec<&str> = line.split_whitespace().collect();
                prop_assert_eq!(tokenize(&line), expected);
            }

            #[test]
            fn never_emits_empty_tokens(line in "[a-z {}\"\\\\]{0,64}") {
                prop_assert!(tokenize(&line).iter().all(|t| !t.is_empty()));
            }

            #[test]
            fn literal_survives_verbatim(
                cmd in "/[a-z]{1,8}",
                body in "[a-z :,\"]{0,24}",
            ) {
                let literal = format!("{{{body}}}");
                let line = format!("{cmd} {literal}");
                let tokens = tokenize(&line);
                prop_assert_eq!(tokens, vec![cmd.as_str(), literal.as_str()]);
            }
        }
    }
}
