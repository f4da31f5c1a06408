use commented_json::{error::Kind, parse};

fn kind(data: &str) -> Kind {
    parse(data).unwrap_err().kind
}

mod lexical {
    use super::kind;
    use commented_json::{error::Kind, parse};

    #[test]
    fn unterminated_string() {
        assert_eq!(kind(r#""abc"#), Kind::UnterminatedString);
        assert_eq!(kind(r#"{"a": "b}"#), Kind::UnterminatedString);
        // Escape character with nothing after it
        assert_eq!(kind(r#""abc\"#), Kind::UnterminatedString);
        assert_eq!(kind(r#""abc\""#), Kind::UnterminatedString);
    }

    #[test]
    fn unterminated_block_comment() {
        assert_eq!(kind("/* abc"), Kind::UnterminatedBlockComment);
        assert_eq!(kind("[1] /*/"), Kind::UnterminatedBlockComment);
        assert_eq!(kind("{\"a\": 1 /* } */"), Kind::MissingObjectBracket);
    }

    #[test]
    fn malformed_number() {
        assert_eq!(kind("1."), Kind::MalformedNumber("1.".into()));
        assert_eq!(kind("[-1.]"), Kind::MalformedNumber("-1.".into()));
        assert_eq!(kind("-"), Kind::MalformedNumber("-".into()));
        assert_eq!(kind("-."), Kind::MalformedNumber("-.".into()));
    }

    #[test]
    fn unexpected_character() {
        assert_eq!(kind("@"), Kind::UnexpectedCharacter('@'));
        assert_eq!(kind(".5"), Kind::UnexpectedCharacter('.'));
        assert_eq!(kind("1.2.3"), Kind::UnexpectedCharacter('.'));
        assert_eq!(kind("{'a': 1}"), Kind::UnexpectedCharacter('\''));
        assert_eq!(kind("[1] / 2"), Kind::UnexpectedCharacter('/'));
        assert_eq!(kind("\u{a0}1"), Kind::UnexpectedCharacter('\u{a0}'));
    }

    #[test]
    fn location() {
        let error = parse("{\n  \"a\": @}").unwrap_err();

        assert_eq!(error.start.offset, 9);
        assert_eq!((error.start.line, error.start.col), (2, 8));
        assert_eq!((error.end.line, error.end.col), (2, 9));
        assert!(error.is_lexical());
        assert!(!error.is_syntactic());
    }

    #[test]
    fn lexical_errors_win_over_syntax() {
        // The whole text is tokenized before any tree is built
        assert_eq!(kind("{,} @"), Kind::UnexpectedCharacter('@'));
    }
}

mod syntactic {
    use super::kind;
    use commented_json::{error::Kind, parse};

    #[test]
    fn missing_colon() {
        assert_eq!(kind(r#"{"a" 1}"#), Kind::MissingSeparator);
        assert_eq!(kind(r#"{"a"}"#), Kind::MissingSeparator);
        assert_eq!(kind(r#"{"a""#), Kind::MissingSeparator);
    }

    #[test]
    fn comma_without_complete_entry() {
        assert_eq!(kind("{,}"), Kind::MissingSeparator);
        assert_eq!(kind(r#"{"a",}"#), Kind::MissingSeparator);
        assert_eq!(kind(r#"{"a":,}"#), Kind::MissingSeparator);
        assert_eq!(kind(r#"{"a":1,,}"#), Kind::MissingSeparator);
        assert_eq!(kind("[,1]"), Kind::MissingSeparator);
        assert_eq!(kind("[1,,2]"), Kind::MissingSeparator);
    }

    #[test]
    fn missing_comma() {
        assert_eq!(kind("[1 2]"), Kind::MissingComma);
        assert_eq!(kind(r#"{"a":1 "b":2}"#), Kind::MissingComma);
        assert_eq!(kind(r#"["a" /* no comma */ "b"]"#), Kind::MissingComma);
    }

    #[test]
    fn missing_value() {
        assert_eq!(kind(r#"{"a":}"#), Kind::MissingValue);
        assert_eq!(kind(r#"{"a":"#), Kind::MissingValue);
        assert_eq!(kind(""), Kind::MissingValue);
        assert_eq!(kind(" \n\t "), Kind::MissingValue);
    }

    #[test]
    fn unexpected_token() {
        assert_eq!(kind("{:1}"), Kind::UnexpectedToken(":".into()));
        assert_eq!(kind("{1: 2}"), Kind::UnexpectedToken("1".into()));
        assert_eq!(kind("nul"), Kind::UnexpectedToken("nul".into()));
        assert_eq!(kind("True"), Kind::UnexpectedToken("True".into()));
        assert_eq!(kind("]"), Kind::UnexpectedToken("]".into()));
        assert_eq!(kind("[}"), Kind::UnexpectedToken("}".into()));
    }

    #[test]
    fn no_exponent_notation() {
        assert_eq!(kind("1e10"), Kind::UnexpectedToken("e".into()));
        assert_eq!(kind("[1E5]"), Kind::MissingComma);
    }

    #[test]
    fn content_after_root() {
        assert_eq!(kind(r#"{"a":1}}"#), Kind::UnexpectedToken("}".into()));
        assert_eq!(kind("1 2"), Kind::UnexpectedToken("2".into()));
        assert_eq!(kind("[] // ok\n[]"), Kind::UnexpectedToken("[".into()));
    }

    #[test]
    fn unclosed_containers() {
        assert_eq!(kind("{"), Kind::MissingObjectBracket);
        assert_eq!(kind(r#"{"a":1"#), Kind::MissingObjectBracket);
        assert_eq!(kind(r#"{"a":1,"#), Kind::MissingObjectBracket);
        assert_eq!(kind("["), Kind::MissingArrayBracket);
        assert_eq!(kind("[1"), Kind::MissingArrayBracket);
        assert_eq!(kind("[1, // open\n"), Kind::MissingArrayBracket);
    }

    #[test]
    fn location() {
        let data = "{\n  \"a\": 1,\n  \"b\" 2\n}";

        let error = parse(data).unwrap_err();

        assert_eq!(error.kind, Kind::MissingSeparator);
        assert_eq!((error.start.line, error.start.col), (3, 7));
        assert_eq!((error.end.line, error.end.col), (3, 8));
        assert!(error.is_syntactic());
    }

    #[test]
    fn location_after_carriage_return() {
        let error = parse("{\r\"a\" 1}").unwrap_err();

        assert_eq!(error.kind, Kind::MissingSeparator);
        assert_eq!((error.start.line, error.start.col), (2, 5));
    }

    #[test]
    fn location_at_end_of_input() {
        let error = parse("[1,\n 2").unwrap_err();

        assert_eq!(error.kind, Kind::MissingArrayBracket);
        assert_eq!(error.start.offset, 6);
        assert_eq!((error.start.line, error.start.col), (2, 3));
    }
}

#[test]
fn display() {
    let error = parse(r#"{"a":1 "b":2}"#).unwrap_err();

    assert_eq!(error.to_string(), "expected ',' at line 1, column 8");

    let error = parse("[\n  @]").unwrap_err();

    assert_eq!(
        error.to_string(),
        "unexpected character '@' at line 2, column 3"
    );

    let error = parse("[,1]").unwrap_err();

    assert_eq!(error.to_string(), "expected ':' or a value at line 1, column 2");

    let error = parse(r#"{"a":,}"#).unwrap_err();

    assert_eq!(error.to_string(), "expected ':' or a value at line 1, column 6");

    let error = parse(r#"{"a" 1}"#).unwrap_err();

    assert_eq!(error.to_string(), "expected ':' or a value at line 1, column 6");
}
