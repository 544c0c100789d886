use glossgen::glossary::format::tokenizer::{is_separator, SEPARATORS};
use glossgen::{next_token, GlossaryError, TokenKind, Tokens};
use proptest::prelude::*;

fn texts(text: &str) -> Vec<&str> {
    Tokens::new(text).map(|t| t.text).collect()
}

#[test]
fn splits_words_and_separator_runs() {
    assert_eq!(texts("A fruit."), ["A", " ", "fruit", "."]);
    assert_eq!(
        texts("Hello, world!? yes--no\n\tend"),
        ["Hello", ", ", "world", "!? ", "yes", "--", "no", "\n\t", "end"]
    );
}

#[test]
fn token_class_is_fixed_by_first_character() {
    let token = next_token("...word", 0).expect("token at 0");
    assert_eq!(token.kind, TokenKind::Separator);
    assert_eq!(token.text, "...");

    let token = next_token("...word", 3).expect("token at 3");
    assert_eq!(token.kind, TokenKind::Word);
    assert_eq!(token.text, "word");
    assert_eq!(token.offset, 3);
}

#[test]
fn single_character_text_is_one_token() {
    assert_eq!(texts("x"), ["x"]);
    assert_eq!(texts("-"), ["-"]);
}

#[test]
fn other_punctuation_belongs_to_words() {
    assert_eq!(texts("(see: x;y)"), ["(see:", " ", "x;y)"]);
}

#[test]
fn multibyte_text_is_split_on_character_boundaries() {
    assert_eq!(texts("café, naïve"), ["café", ", ", "naïve"]);
    let token = next_token("é.", 0).expect("token");
    assert_eq!(token.len(), 2);
}

#[test]
fn out_of_range_position_is_rejected() {
    match next_token("abc", 3) {
        Err(GlossaryError::InvalidPosition { position, len }) => {
            assert_eq!((position, len), (3, 3));
        }
        other => panic!("expected InvalidPosition, got {:?}", other),
    }
    assert!(next_token("", 0).is_err());
    assert!(next_token("é", 1).is_err(), "mid-character position must be rejected");
}

#[test]
fn empty_text_has_no_tokens() {
    assert_eq!(Tokens::new("").count(), 0);
}

#[test]
fn separator_set_is_exact() {
    for c in SEPARATORS {
        assert!(is_separator(c), "{:?} should be a separator", c);
    }
    for c in [';', ':', '\'', '"', '(', '\r', '_', 'a', '0'] {
        assert!(!is_separator(c), "{:?} should not be a separator", c);
    }
}

fn glossary_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::sample::select(SEPARATORS.to_vec()),
            proptest::char::range('a', 'z'),
            Just('é'),
            Just(';'),
        ],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>())
}

proptest! {
    #[test]
    fn tokens_reconstruct_the_text(text in glossary_text()) {
        let rebuilt: String = Tokens::new(&text).map(|t| t.text).collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn tokens_are_class_pure_and_maximal(text in glossary_text()) {
        let tokens: Vec<_> = Tokens::new(&text).collect();
        for token in &tokens {
            prop_assert!(!token.is_empty());
            let separator = token.kind == TokenKind::Separator;
            prop_assert!(token.text.chars().all(|c| is_separator(c) == separator));
        }
        for pair in tokens.windows(2) {
            prop_assert_ne!(pair[0].kind, pair[1].kind);
            prop_assert_eq!(pair[0].offset + pair[0].len(), pair[1].offset);
        }
    }

    #[test]
    fn any_char_boundary_yields_a_token(text in glossary_text()) {
        for (position, _) in text.char_indices() {
            let token = next_token(&text, position).expect("boundary position");
            prop_assert!(text[position..].starts_with(token.text));
        }
    }
}
