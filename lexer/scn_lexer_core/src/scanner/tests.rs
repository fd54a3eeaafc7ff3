use super::*;
use pretty_assertions::assert_eq;

/// Helper: scan `source` with `options` and collect `(kind, text)` pairs.
fn scan_with(source: &[u8], options: ScanOptions<'_>, max_len: usize) -> Vec<(TokenKind, Vec<u8>)> {
    let mut scanner = Scanner::new(Cursor::new(source), options);
    let mut out = TokenBuf::new(max_len);
    let mut tokens = Vec::new();
    while let Some(tok) = scanner.next_token(&mut out) {
        tokens.push((tok.kind, out.as_bytes().to_vec()));
    }
    tokens
}

/// Helper: scene options, 1024-byte tokens, text only.
fn texts(source: &str) -> Vec<String> {
    scan_with(source.as_bytes(), ScanOptions::default(), 1024)
        .into_iter()
        .map(|(_, t)| String::from_utf8(t).expect("test tokens are UTF-8"))
        .collect()
}

// ─── Basic token classes ───────────────────────────────────────────

#[test]
fn words_separated_by_whitespace() {
    assert_eq!(texts("  foo bar\n"), vec!["foo", "bar"]);
}

#[test]
fn quoted_string_and_breaks() {
    let tokens = scan_with(b"{ \"hello world\" }", ScanOptions::default(), 1024);
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Break, b"{".to_vec()),
            (TokenKind::Quoted { terminated: true }, b"hello world".to_vec()),
            (TokenKind::Break, b"}".to_vec()),
        ]
    );
}

#[test]
fn word_without_trailing_whitespace() {
    assert_eq!(texts("wordwithnoend"), vec!["wordwithnoend"]);
}

#[test]
fn break_character_ends_word_without_being_consumed() {
    assert_eq!(texts("key:value"), vec!["key", ":", "value"]);
    assert_eq!(texts("f(x)"), vec!["f", "(", "x", ")"]);
}

#[test]
fn adjacent_breaks_are_separate_tokens() {
    assert_eq!(texts("{}()"), vec!["{", "}", "(", ")"]);
}

#[test]
fn empty_quoted_string_is_a_token() {
    let tokens = scan_with(b"\"\" x", ScanOptions::default(), 1024);
    assert_eq!(tokens[0], (TokenKind::Quoted { terminated: true }, Vec::new()));
    assert_eq!(tokens.len(), 2);
}

#[test]
fn high_bytes_belong_to_words() {
    let tokens = scan_with(b"\xC3\xA9t\xC3\xA9 x", ScanOptions::default(), 1024);
    assert_eq!(tokens[0].1, b"\xC3\xA9t\xC3\xA9".to_vec());
    assert_eq!(tokens.len(), 2);
}

#[test]
fn control_bytes_are_whitespace() {
    assert_eq!(texts("\x01a\x1Fb\tc\r\n"), vec!["a", "b", "c"]);
}

// ─── Comments ──────────────────────────────────────────────────────

#[test]
fn line_comment_skipped() {
    assert_eq!(texts("abc // comment\ndef"), vec!["abc", "def"]);
}

#[test]
fn line_comment_at_end_of_input() {
    assert_eq!(texts("abc // trailing"), vec!["abc"]);
}

#[test]
fn block_comment_spanning_lines() {
    assert_eq!(texts("/* skip \n this */tail"), vec!["tail"]);
}

#[test]
fn unterminated_block_comment_ends_input() {
    assert_eq!(texts("a /* never closed"), vec!["a"]);
}

#[test]
fn block_end_needs_two_bytes_after_opener() {
    // "/*/" does not close itself.
    assert_eq!(texts("/*/ x */y"), vec!["y"]);
}

#[test]
fn comment_markers_inside_words_are_literal() {
    assert_eq!(texts("a//b c/*d"), vec!["a//b", "c/*d"]);
}

#[test]
fn semicolon_and_hash_are_words_for_scene_options() {
    assert_eq!(texts("; x # y"), vec![";", "x", "#", "y"]);
}

#[test]
fn semicolon_and_hash_comments_when_enabled() {
    let options = ScanOptions::new(BreakSet::scene(), CommentStyles::all());
    let tokens = scan_with(b"a ; gone\nb # gone\nc", options, 1024);
    let texts: Vec<_> = tokens.into_iter().map(|(_, t)| t).collect();
    assert_eq!(texts, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
}

#[test]
fn no_comment_styles_keeps_slashes() {
    let options = ScanOptions::new(BreakSet::command(), CommentStyles::empty());
    let tokens = scan_with(b"say // hi", options, 1024);
    let texts: Vec<_> = tokens.into_iter().map(|(_, t)| t).collect();
    assert_eq!(texts, vec![b"say".to_vec(), b"//".to_vec(), b"hi".to_vec()]);
}

// ─── Quoted strings ────────────────────────────────────────────────

#[test]
fn quotes_disable_comments_and_breaks() {
    let tokens = scan_with(b"\"a // b /* c { : }\"", ScanOptions::default(), 1024);
    assert_eq!(
        tokens,
        vec![(TokenKind::Quoted { terminated: true }, b"a // b /* c { : }".to_vec())]
    );
}

#[test]
fn unterminated_quote_runs_to_end() {
    let tokens = scan_with(b"\"open ended\n text", ScanOptions::default(), 1024);
    assert_eq!(
        tokens,
        vec![(TokenKind::Quoted { terminated: false }, b"open ended\n text".to_vec())]
    );
}

#[test]
fn quote_right_after_word_starts_new_token() {
    assert_eq!(texts("ab\"cd\""), vec!["ab\"cd\""]);
    assert_eq!(texts("ab \"cd\"ef"), vec!["ab", "cd", "ef"]);
}

// ─── Terminator & offsets ──────────────────────────────────────────

#[test]
fn nul_ends_input() {
    assert_eq!(texts("a b\0c d"), vec!["a", "b"]);
}

#[test]
fn empty_and_blank_input() {
    assert!(texts("").is_empty());
    assert!(texts(" \t\r\n ").is_empty());
}

#[test]
fn repeated_end_of_input_does_not_move() {
    let mut scanner = Scanner::new(Cursor::new(b"x  "), ScanOptions::default());
    let mut out = TokenBuf::new(16);
    assert!(scanner.next_token(&mut out).is_some());
    for _ in 0..3 {
        assert_eq!(scanner.next_token(&mut out), None);
        assert!(out.is_empty());
        assert_eq!(scanner.pos(), 3);
    }
}

#[test]
fn scan_next_reports_offsets() {
    let mut out = TokenBuf::new(1024);
    let input = b"  foo \"bar\" :";
    let first = scan_next(input, 0, ScanOptions::default(), &mut out).expect("foo");
    assert_eq!((first.start, first.end), (2, 5));
    let second = scan_next(input, first.end, ScanOptions::default(), &mut out).expect("bar");
    assert_eq!((second.start, second.end), (6, 11));
    assert_eq!(out.as_bytes(), b"bar");
    let third = scan_next(input, second.end, ScanOptions::default(), &mut out).expect(":");
    assert_eq!(third.kind, TokenKind::Break);
    assert_eq!(scan_next(input, third.end, ScanOptions::default(), &mut out), None);
}

#[test]
fn scan_next_past_end_is_end_of_input() {
    let mut out = TokenBuf::new(8);
    assert_eq!(scan_next(b"abc", 50, ScanOptions::default(), &mut out), None);
}

// ─── Truncation ────────────────────────────────────────────────────

#[test]
fn word_truncated_but_fully_consumed() {
    let mut out = TokenBuf::new(4);
    let tok = scan_next(b"toolong next", 0, ScanOptions::default(), &mut out).expect("token");
    assert_eq!(out.as_bytes(), b"too");
    assert_eq!(out.as_bytes_with_nul(), b"too\0");
    assert!(tok.truncated);
    assert_eq!(tok.end, 7);
}

#[test]
fn quoted_truncated_but_fully_consumed() {
    let mut out = TokenBuf::new(3);
    let tok = scan_next(b"\"abcdef\" z", 0, ScanOptions::default(), &mut out).expect("token");
    assert_eq!(out.as_bytes(), b"ab");
    assert_eq!(tok.end, 8);
    assert!(tok.truncated);
}

#[test]
fn break_token_with_capacity_one_is_empty_but_advances() {
    let mut out = TokenBuf::new(1);
    let tok = scan_next(b"{", 0, ScanOptions::default(), &mut out).expect("token");
    assert!(out.is_empty());
    assert!(tok.truncated);
    assert_eq!(tok.end, 1);
}

// ─── Lookahead ─────────────────────────────────────────────────────

#[test]
fn token_available_newline_first() {
    assert!(!token_available(b"  \n next", 0));
}

#[test]
fn token_available_comment_markers() {
    assert!(!token_available(b"  ; comment", 0));
    assert!(!token_available(b"  # comment", 0));
    assert!(!token_available(b"  // comment", 0));
}

#[test]
fn token_available_plain_token() {
    assert!(token_available(b"  next", 0));
    assert!(token_available(b"/x", 0));
    assert!(token_available(b"\"quoted\"", 0));
}

#[test]
fn token_available_at_end() {
    assert!(!token_available(b"   ", 0));
    assert!(!token_available(b"", 0));
    assert!(!token_available(b"abc", 3));
}

#[test]
fn token_available_does_not_see_block_comments() {
    assert!(token_available(b" /* c */", 0));
}

// ─── Properties ────────────────────────────────────────────────────

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_scanner {
    use super::*;
    use proptest::prelude::*;

    fn scan_all(input: &[u8], max_len: usize) -> Vec<(ScannedToken, Vec<u8>)> {
        let mut out = TokenBuf::new(max_len);
        let mut pos = 0;
        let mut tokens = Vec::new();
        while let Some(tok) = scan_next(input, pos, ScanOptions::default(), &mut out) {
            tokens.push((tok, out.as_bytes().to_vec()));
            pos = tok.end;
            assert!(tokens.len() <= input.len(), "scanner failed to terminate");
        }
        tokens
    }

    proptest! {
        #[test]
        fn terminates_and_advances(input in proptest::collection::vec(any::<u8>(), 0..256)) {
            let mut last_end = 0;
            for (tok, _) in scan_all(&input, 1024) {
                prop_assert!(tok.start >= last_end);
                prop_assert!(tok.end > tok.start);
                last_end = tok.end;
            }
        }

        #[test]
        fn tokens_never_overflow(
            input in proptest::collection::vec(any::<u8>(), 0..256),
            max_len in 2usize..16,
        ) {
            for (_, text) in scan_all(&input, max_len) {
                prop_assert!(text.len() <= max_len - 1);
            }
        }

        #[test]
        fn words_and_breaks_are_source_bytes(input in "[ a-z{}():'\n]{0,64}") {
            for (tok, text) in scan_all(input.as_bytes(), 1024) {
                if tok.kind != (TokenKind::Quoted { terminated: true }) {
                    prop_assert_eq!(&input.as_bytes()[tok.start..tok.end], text.as_slice());
                }
            }
        }

        #[test]
        fn quote_transparency(body in "[^\"\\x00]{0,64}", max_len in 2usize..80) {
            let input = format!("\"{body}\"");
            let tokens = scan_all(input.as_bytes(), max_len);
            prop_assert_eq!(tokens.len(), 1);
            let keep = body.len().min(max_len - 1);
            prop_assert_eq!(tokens[0].1.as_slice(), &body.as_bytes()[..keep]);
            prop_assert_eq!(tokens[0].0.end, input.len());
        }
    }
}
