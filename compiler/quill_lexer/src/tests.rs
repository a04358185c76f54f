use pretty_assertions::assert_eq;
use proptest::prelude::*;
use quill_ir::TokenKind;

use super::*;

#[test]
fn lex_program() {
    use TokenKind::*;
    let output = lex("var five = 5;\nvar add = fn(x, y) { x + y; };\nadd(five, 10);");
    assert!(!output.has_errors());
    assert_eq!(
        output.tokens.kinds(),
        vec![
            Var, Ident, Assign, Int, Semicolon, Var, Ident, Assign, Fn, LParen, Ident, Comma,
            Ident, RParen, LBrace, Ident, Plus, Ident, Semicolon, RBrace, Semicolon, Ident,
            LParen, Ident, Comma, Int, RParen, Semicolon, Eof,
        ]
    );
}

#[test]
fn lex_collections() {
    use TokenKind::*;
    let output = lex(r#"[1, "two"]; {"k": true}"#);
    assert_eq!(
        output.tokens.kinds(),
        vec![
            LBracket, Int, Comma, Str, RBracket, Semicolon, LBrace, Str, Colon, True, RBrace, Eof,
        ]
    );
}

#[test]
fn empty_source_is_single_eof() {
    let output = lex("");
    assert_eq!(output.tokens.kinds(), vec![TokenKind::Eof]);
    assert!(output.tokens.is_empty());
}

#[test]
fn unterminated_string_is_reported() {
    let output = lex("var s = \"open");
    assert!(output.has_errors());
    assert_eq!(output.errors[0].to_string(), "unterminated string literal");
    assert_eq!(output.tokens[3].literal, "open");
}

proptest! {
    #[test]
    fn always_exactly_one_eof(source in any::<String>()) {
        let output = lex(&source);
        let eofs = output.tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(output.tokens[output.tokens.len() - 1].kind, TokenKind::Eof);
    }

    #[test]
    fn lexing_is_deterministic(source in any::<String>()) {
        prop_assert_eq!(lex(&source), lex(&source));
    }

    #[test]
    fn spans_are_ordered_and_in_bounds(source in any::<String>()) {
        let output = lex(&source);
        let mut last_end = 0u32;
        for token in &output.tokens {
            prop_assert!(token.span.start >= last_end);
            prop_assert!(token.span.start <= token.span.end);
            prop_assert!(token.span.end as usize <= source.len());
            last_end = token.span.end;
        }
    }

    #[test]
    fn integers_keep_their_digits(n in 0u64..u64::MAX) {
        let text = n.to_string();
        let output = lex(&text);
        prop_assert_eq!(output.tokens.len(), 2);
        prop_assert_eq!(output.tokens[0].kind, TokenKind::Int);
        prop_assert_eq!(&output.tokens[0].literal, &text);
    }

    #[test]
    fn identifiers_round_trip(word in "[a-zA-Z_][a-zA-Z0-9_]{0,12}") {
        let output = lex(&word);
        let expected = TokenKind::keyword(&word).unwrap_or(TokenKind::Ident);
        prop_assert_eq!(output.tokens[0].kind, expected);
        prop_assert_eq!(&output.tokens[0].literal, &word);
    }
}
