use nscharp::{
    error::LexError,
    interpreter::lexer::{Token, TokenKind},
    tokenize,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).expect("source lexes")
                    .into_iter()
                    .map(|token| token.kind)
                    .collect()
}

#[test]
fn one_token_per_lexeme_plus_eof() {
    let tokens = tokenize("let x = 1 + 2\nprint(x)").unwrap();

    assert_eq!(tokens,
               vec![Token::new(TokenKind::Let, 1),
                    Token::new(TokenKind::Ident("x".to_string()), 1),
                    Token::new(TokenKind::Eq, 1),
                    Token::new(TokenKind::Number(1), 1),
                    Token::new(TokenKind::Op("+".to_string()), 1),
                    Token::new(TokenKind::Number(2), 1),
                    Token::new(TokenKind::Print, 2),
                    Token::new(TokenKind::LParen, 2),
                    Token::new(TokenKind::Ident("x".to_string()), 2),
                    Token::new(TokenKind::RParen, 2),
                    Token::new(TokenKind::Eof, 2)]);
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("  \n\t\r\n"), vec![TokenKind::Eof]);
}

#[test]
fn keywords_need_an_exact_match() {
    assert_eq!(kinds("letter iffy whiles print"),
               vec![TokenKind::Ident("letter".to_string()),
                    TokenKind::Ident("iffy".to_string()),
                    TokenKind::Ident("whiles".to_string()),
                    TokenKind::Print,
                    TokenKind::Eof]);
}

#[test]
fn multi_character_operators() {
    assert_eq!(kinds("a ** b // c <= d >= e != f == g"),
               vec![TokenKind::Ident("a".to_string()),
                    TokenKind::Op("**".to_string()),
                    TokenKind::Ident("b".to_string()),
                    TokenKind::Op("//".to_string()),
                    TokenKind::Ident("c".to_string()),
                    TokenKind::Op("<=".to_string()),
                    TokenKind::Ident("d".to_string()),
                    TokenKind::Op(">=".to_string()),
                    TokenKind::Ident("e".to_string()),
                    TokenKind::Op("!=".to_string()),
                    TokenKind::Ident("f".to_string()),
                    TokenKind::EqEq,
                    TokenKind::Ident("g".to_string()),
                    TokenKind::Eof]);
}

#[test]
fn strings_keep_their_contents() {
    assert_eq!(kinds("\"hello world\" \"\""),
               vec![TokenKind::Str("hello world".to_string()),
                    TokenKind::Str(String::new()),
                    TokenKind::Eof]);
}

#[test]
fn strings_spanning_lines_advance_the_line_counter() {
    let tokens = tokenize("\"a\nb\"\nx").unwrap();

    assert_eq!(tokens[0], Token::new(TokenKind::Str("a\nb".to_string()), 1));
    assert_eq!(tokens[1], Token::new(TokenKind::Ident("x".to_string()), 3));
}

#[test]
fn unexpected_character_reports_its_line() {
    assert_eq!(tokenize("let a = 1\nlet b = $"),
               Err(LexError::UnexpectedCharacter { character: '$',
                                                   line:      2, }));
}

#[test]
fn unterminated_string() {
    assert_eq!(tokenize("print(1)\nprint(\"oops)"),
               Err(LexError::UnterminatedString { line: 2 }));
}

#[test]
fn literal_too_large() {
    assert!(matches!(tokenize("99999999999999999999"),
                     Err(LexError::LiteralTooLarge { line: 1, .. })));
}

#[test]
fn crlf_line_endings() {
    let tokens = tokenize("let a = 1\r\nprint(a)\r\n").unwrap();
    assert_eq!(tokens[4], Token::new(TokenKind::Print, 2));
}
