use std::fmt;

use logos::{Logos, Skip, SpannedIter};
use num_bigint::BigInt;

#[derive(Default, Debug, Clone, PartialEq)]
pub enum LexicalError {
    #[default]
    InvalidToken,
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Comments run from `--` to the end of the line or to the next `--`.
fn skip_comment(lex: &mut logos::Lexer<Token>) -> Skip {
    let rest = lex.remainder();
    let line_end = rest.find(['\n', '\r']).unwrap_or(rest.len());
    let line = &rest[..line_end];
    let consumed = match line.find("--") {
        // A closing `--` trailed by nothing but dashes is a rule line like `-----`.
        Some(close) if line[close..].trim_end().bytes().all(|b| b == b'-') => line_end,
        Some(close) => close + 2,
        None => line_end,
    };
    lex.bump(consumed);
    Skip
}

/// `EXPORTS` lists are an ASN.1 leftover without meaning for SMI.
fn skip_exports(lex: &mut logos::Lexer<Token>) -> Skip {
    let rest = lex.remainder();
    let consumed = rest.find(';').map(|i| i + 1).unwrap_or(rest.len());
    lex.bump(consumed);
    Skip
}

/// Consume a macro body up to and including its closing `END`.
fn skip_macro_body(lex: &mut logos::Lexer<Token>) -> Option<()> {
    let rest = lex.remainder();
    let bytes = rest.as_bytes();
    let is_word = |b: u8| b.is_ascii_alphanumeric() || b == b'-' || b == b'_';
    let end = rest.match_indices("END").map(|(i, _)| i).find(|&i| {
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 3).copied();
        !before.is_some_and(is_word) && !after.is_some_and(is_word)
    })?;
    lex.bump(end + 3);
    Some(())
}

fn quoted_inner(lex: &mut logos::Lexer<Token>, suffix: usize) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1 - suffix].to_owned()
}

#[derive(Logos, Clone, Debug, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+", error = LexicalError)]
pub enum Token {
    #[token("--", skip_comment)]
    #[token("EXPORTS", skip_exports)]
    Ignored,

    // Module structure
    //
    //
    #[token("DEFINITIONS")]
    Definitions,
    #[token("BEGIN")]
    Begin,
    #[token("END")]
    End,
    #[token("IMPORTS")]
    Imports,
    #[token("FROM")]
    From,
    #[token("MACRO", skip_macro_body)]
    Macro,

    // Type keywords
    //
    //
    #[token("OBJECT")]
    Object,
    #[token("IDENTIFIER")]
    Identifier,
    #[token("OCTET")]
    Octet,
    #[token("STRING")]
    String,
    #[token("INTEGER")]
    Integer,
    #[token("BITS")]
    Bits,
    #[token("SEQUENCE")]
    Sequence,
    #[token("OF")]
    Of,
    #[token("CHOICE")]
    Choice,
    #[token("SIZE")]
    Size,
    #[token("MIN")]
    Min,
    #[token("MAX")]
    Max,
    #[token("APPLICATION")]
    Application,
    #[token("IMPLICIT")]
    Implicit,

    // Macro invocations
    //
    //
    #[token("OBJECT-TYPE")]
    ObjectType,
    #[token("OBJECT-IDENTITY")]
    ObjectIdentity,
    #[token("MODULE-IDENTITY")]
    ModuleIdentity,
    #[token("NOTIFICATION-TYPE")]
    NotificationType,
    #[token("TRAP-TYPE")]
    TrapType,
    #[token("TEXTUAL-CONVENTION")]
    TextualConvention,
    #[token("OBJECT-GROUP")]
    ObjectGroup,
    #[token("NOTIFICATION-GROUP")]
    NotificationGroup,
    #[token("MODULE-COMPLIANCE")]
    ModuleCompliance,
    #[token("AGENT-CAPABILITIES")]
    AgentCapabilities,

    // Clause keywords
    //
    //
    #[token("SYNTAX")]
    Syntax,
    #[token("WRITE-SYNTAX")]
    WriteSyntax,
    #[token("UNITS")]
    Units,
    #[token("MAX-ACCESS")]
    MaxAccess,
    #[token("ACCESS")]
    Access,
    #[token("MIN-ACCESS")]
    MinAccess,
    #[token("STATUS")]
    Status,
    #[token("DESCRIPTION")]
    Description,
    #[token("REFERENCE")]
    Reference,
    #[token("INDEX")]
    Index,
    #[token("IMPLIED")]
    Implied,
    #[token("AUGMENTS")]
    Augments,
    #[token("DEFVAL")]
    Defval,
    #[token("DISPLAY-HINT")]
    DisplayHint,
    #[token("LAST-UPDATED")]
    LastUpdated,
    #[token("ORGANIZATION")]
    Organization,
    #[token("CONTACT-INFO")]
    ContactInfo,
    #[token("REVISION")]
    Revision,
    #[token("OBJECTS")]
    Objects,
    #[token("NOTIFICATIONS")]
    Notifications,
    #[token("ENTERPRISE")]
    Enterprise,
    #[token("VARIABLES")]
    Variables,
    #[token("MODULE")]
    Module,
    #[token("MANDATORY-GROUPS")]
    MandatoryGroups,
    #[token("GROUP")]
    Group,
    #[token("PRODUCT-RELEASE")]
    ProductRelease,
    #[token("SUPPORTS")]
    Supports,
    #[token("INCLUDES")]
    Includes,
    #[token("VARIATION")]
    Variation,
    #[token("CREATION-REQUIRES")]
    CreationRequires,

    // Punctuation
    //
    //
    #[token("::=")]
    Assign,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("..")]
    DotDot,
    #[token(".")]
    Dot,
    #[token("|")]
    Pipe,

    // Identifiers
    //
    // Hyphens are allowed inside identifiers but never doubled or trailing,
    // so `foo--bar` is `foo` followed by a comment.
    #[regex(r"[A-Z](-?[A-Za-z0-9_])*", |lex| lex.slice().to_owned())]
    UpperIdent(String),
    #[regex(r"[a-z](-?[A-Za-z0-9_])*", |lex| lex.slice().to_owned())]
    LowerIdent(String),

    // Literals
    //
    //
    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<BigInt>().ok())]
    Number(BigInt),
    /// Quoted text may span lines. The content is kept byte for byte.
    #[regex(r#""[^"]*""#, |lex| quoted_inner(lex, 0))]
    QuotedText(String),
    #[regex(r"'[0-9a-fA-F]*'[hH]", |lex| quoted_inner(lex, 1))]
    HexString(String),
    #[regex(r"'[01]*'[bB]", |lex| quoted_inner(lex, 1))]
    BinaryString(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::UpperIdent(s) | Token::LowerIdent(s) => write!(f, "identifier `{s}`"),
            Token::Number(n) => write!(f, "number {n}"),
            Token::QuotedText(_) => write!(f, "quoted text"),
            Token::HexString(_) => write!(f, "hex string"),
            Token::BinaryString(_) => write!(f, "binary string"),
            other => write!(f, "{:?}", other),
        }
    }
}

pub type Spanned<Tok, Loc, Error> = Result<(Loc, Tok, Loc), Error>;

pub struct Lexer<'input> {
    // instead of an iterator over characters, we have a token iterator
    token_stream: SpannedIter<'input, Token>,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Self { token_stream: Token::lexer(input).spanned() }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Spanned<Token, usize, (usize, LexicalError, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.token_stream.next().map(|(token, span)| match token {
            Ok(token) => Ok((span.start, token, span.end)),
            Err(err) => Err((span.start, err, span.end)),
        })
    }
}

#[cfg(test)]
mod lexer_tests {
    use num_bigint::BigInt;

    use super::{LexicalError, Lexer, Token};

    fn tokens(s: &str) -> Vec<Token> {
        Lexer::new(s).map(|t| t.unwrap().1).collect()
    }

    #[test]
    fn keywords_beat_identifiers() {
        assert_eq!(
            tokens("OBJECT-TYPE OBJECTS OBJECT-TYPEs"),
            vec![Token::ObjectType, Token::Objects, Token::UpperIdent("OBJECT-TYPEs".to_owned())]
        );
    }

    #[test]
    fn hyphenated_identifier() {
        assert_eq!(
            tokens("test-object Test-Textual-Convention"),
            vec![
                Token::LowerIdent("test-object".to_owned()),
                Token::UpperIdent("Test-Textual-Convention".to_owned())
            ]
        );
    }

    #[test]
    fn comment_to_end_of_line() {
        assert_eq!(tokens("BEGIN -- a comment\nEND"), vec![Token::Begin, Token::End]);
    }

    #[test]
    fn comment_closed_inline() {
        assert_eq!(tokens("BEGIN -- inline -- END"), vec![Token::Begin, Token::End]);
    }

    #[test]
    fn rule_line_is_one_comment() {
        assert_eq!(tokens("BEGIN\n-----\n---------\nEND"), vec![Token::Begin, Token::End]);
    }

    #[test]
    fn identifier_stops_before_comment() {
        assert_eq!(tokens("foo--bar\n"), vec![Token::LowerIdent("foo".to_owned())]);
    }

    #[test]
    fn quoted_text_keeps_raw_bytes() {
        let str = "\"\\ntest\nvalue\\\"";
        assert_eq!(tokens(str), vec![Token::QuotedText("\\ntest\nvalue\\".to_owned())]);
    }

    #[test]
    fn hex_and_binary_strings() {
        assert_eq!(
            tokens("'abCD0e'H '0101'b ''H ''B"),
            vec![
                Token::HexString("abCD0e".to_owned()),
                Token::BinaryString("0101".to_owned()),
                Token::HexString(String::new()),
                Token::BinaryString(String::new()),
            ]
        );
    }

    #[test]
    fn numbers_and_ranges() {
        assert_eq!(
            tokens("(-2..255)"),
            vec![
                Token::LParen,
                Token::Number(BigInt::from(-2)),
                Token::DotDot,
                Token::Number(BigInt::from(255)),
                Token::RParen
            ]
        );
    }

    #[test]
    fn exports_are_skipped() {
        assert_eq!(tokens("BEGIN EXPORTS a, b; END"), vec![Token::Begin, Token::End]);
    }

    #[test]
    fn macro_body_is_skipped() {
        let src = "OBJECT-TYPE MACRO ::= BEGIN TYPE NOTATION ::= \"SYNTAX\" \
                   VALUE NOTATION ::= value END ObjectName";
        assert_eq!(
            tokens(src),
            vec![Token::ObjectType, Token::Macro, Token::UpperIdent("ObjectName".to_owned())]
        );
    }

    #[test]
    fn unterminated_macro_is_an_error() {
        let result: Vec<_> = Lexer::new("FOO MACRO ::= BEGIN").collect();
        assert!(result.iter().any(|t| matches!(t, Err((_, LexicalError::InvalidToken, _)))));
    }

    #[test]
    fn stray_character_is_an_error() {
        let result: Vec<_> = Lexer::new("BEGIN @").collect();
        assert_eq!(result.last(), Some(&Err((6, LexicalError::InvalidToken, 7))));
    }
}
