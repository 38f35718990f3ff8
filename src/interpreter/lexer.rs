use logos::Logos;

use crate::{
    ast::{NodeKind, Token},
    error::TokenizeError,
    interpreter::registry::Registry,
};

/// The spelling of the constant π in source code.
pub const PI_LITERAL: &str = "M_PI";

/// The flat lexemes a line is scanned into before brackets and strings are
/// resolved into a token tree.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Lexeme {
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `[`
    #[token("[")]
    OpenBracket,
    /// `]`
    #[token("]")]
    CloseBracket,
    /// A complete string literal including both quotes.
    #[regex(r#""[^"]*""#)]
    Quoted,
    /// One of the single-character separators `+ - * / , : =`.
    #[regex(r"[+\-*/,:=]")]
    Separator,
    /// Everything up to the next separator, bracket, quote or whitespace.
    #[regex(r#"[^ \t\r\n\f()\[\]+\-*/,:="]+"#)]
    Word,
}

/// A lexeme together with its text and absolute position in the line.
#[derive(Debug, Clone, Copy)]
struct Lexed<'s> {
    lexeme:   Lexeme,
    text:     &'s str,
    position: usize,
}

/// Removes a trailing `//` comment and surrounding whitespace from a line.
///
/// Slashes inside string literals do not start a comment.
///
/// # Example
/// ```
/// use hydra::interpreter::lexer::clean_line;
///
/// assert_eq!(clean_line("  var a = 1.0 // the radius"), "var a = 1.0");
/// assert_eq!(clean_line("print(message: \"a//b\")"), "print(message: \"a//b\")");
/// assert_eq!(clean_line("// only a comment"), "");
/// ```
#[must_use]
pub fn clean_line(line: &str) -> &str {
    clean_line_with_offset(line).0
}

fn clean_line_with_offset(line: &str) -> (&str, usize) {
    let mut in_string = false;
    let mut end = line.len();

    for (index, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '/' if !in_string && line[index + 1..].starts_with('/') => {
                end = index;
                break;
            },
            _ => {},
        }
    }

    let code = &line[..end];
    let trimmed = code.trim_start();
    (trimmed.trim_end(), code.len() - trimmed.len())
}

/// Splits a source line into a tree of tokens.
///
/// The line is cleaned with [`clean_line`] first. Brackets are resolved
/// recursively: the contents of `[...]` become the children of a `Range`
/// marker token, the contents of `(...)` become the children of an
/// `Expression` marker token, unless the parenthesis directly follows a
/// function or initializer name, which then takes the contents as its own
/// children. String literals become `StringLit` tokens; if they contain
/// `\(...)` interpolations, their children alternate between literal runs and
/// `StringEscape` tokens holding the tokenized embedded expression.
///
/// # Errors
/// Returns a [`TokenizeError`] if a bracket has no partner, a string literal
/// is not closed, or an interpolation escape is not closed.
///
/// # Example
/// ```
/// use hydra::{ast::NodeKind, interpreter::{lexer::tokenize, registry::Registry}};
///
/// let registry = Registry::new();
/// let tokens = tokenize("var p = Pol(r: 1.0, phi: M_PI)", &registry).unwrap();
///
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[3].kind, NodeKind::Initialization);
/// assert_eq!(tokens[3].children.len(), 7);
///
/// assert!(tokenize("line(from: a, to: b", &registry).is_err());
/// ```
pub fn tokenize(line: &str, registry: &Registry) -> Result<Vec<Token>, TokenizeError> {
    let (cleaned, offset) = clean_line_with_offset(line);
    tokenize_at(cleaned, offset, registry)
}

fn tokenize_at(source: &str,
               offset: usize,
               registry: &Registry)
               -> Result<Vec<Token>, TokenizeError> {
    let lexemes = scan(source, offset)?;
    build_tokens(&lexemes, registry)
}

fn scan(source: &str, offset: usize) -> Result<Vec<Lexed<'_>>, TokenizeError> {
    let mut lexer = Lexeme::lexer(source);
    let mut lexemes = Vec::new();

    while let Some(result) = lexer.next() {
        let position = offset + lexer.span().start;
        match result {
            Ok(lexeme) => lexemes.push(Lexed { lexeme,
                                               text: lexer.slice(),
                                               position }),
            Err(()) => return Err(TokenizeError::UnterminatedString { position }),
        }
    }

    Ok(lexemes)
}

fn build_tokens(lexemes: &[Lexed<'_>], registry: &Registry) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut index = 0;

    while index < lexemes.len() {
        let current = lexemes[index];

        match current.lexeme {
            Lexeme::OpenParen | Lexeme::OpenBracket => {
                let closing = matching_bracket(lexemes, index).ok_or_else(|| {
                                  unmatched(current)
                              })?;
                let children = build_tokens(&lexemes[index + 1..closing], registry)?;
                push_bracketed(&mut tokens, current.lexeme, children);
                index = closing;
            },
            Lexeme::CloseParen | Lexeme::CloseBracket => return Err(unmatched(current)),
            Lexeme::Quoted => tokens.push(string_token(current, registry)?),
            Lexeme::Separator | Lexeme::Word => {
                tokens.push(Token::new(current.text, classify_word(current.text, registry)));
            },
        }

        index += 1;
    }

    Ok(tokens)
}

fn unmatched(lexed: Lexed<'_>) -> TokenizeError {
    TokenizeError::UnmatchedBracket { bracket:  lexed.text.chars().next().unwrap_or('('),
                                      position: lexed.position, }
}

/// Finds the index of the bracket closing the one at `open`, counting only
/// brackets of the same kind.
fn matching_bracket(lexemes: &[Lexed<'_>], open: usize) -> Option<usize> {
    let opener = lexemes[open].lexeme;
    let closer = if opener == Lexeme::OpenParen {
        Lexeme::CloseParen
    } else {
        Lexeme::CloseBracket
    };

    let mut depth = 0_usize;
    for (index, lexed) in lexemes.iter().enumerate().skip(open) {
        if lexed.lexeme == opener {
            depth += 1;
        } else if lexed.lexeme == closer {
            depth -= 1;
            if depth == 0 {
                return Some(index);
            }
        }
    }

    None
}

fn push_bracketed(tokens: &mut Vec<Token>, opener: Lexeme, children: Vec<Token>) {
    if opener == Lexeme::OpenBracket {
        tokens.push(Token::with_children("[", NodeKind::Range, children));
        return;
    }

    match tokens.last_mut() {
        Some(last)
            if matches!(last.kind, NodeKind::Function | NodeKind::Initialization)
               && last.children.is_empty() =>
        {
            last.children = children;
        },
        _ => tokens.push(Token::with_children("(", NodeKind::Expression, children)),
    }
}

/// Builds the token for a quoted string, resolving escapes and interpolations.
fn string_token(lexed: Lexed<'_>, registry: &Registry) -> Result<Token, TokenizeError> {
    let content = &lexed.text[1..lexed.text.len() - 1];
    let content_offset = lexed.position + 1;

    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut interpolated = false;
    let mut cursor = 0;

    while let Some(found) = content[cursor..].find('\\') {
        let at = cursor + found;
        literal.push_str(&content[cursor..at]);

        match content[at + 1..].chars().next() {
            Some('(') => {
                let open = at + 1;
                let close =
                    matching_paren(content, open).ok_or(TokenizeError::MalformedEscape { position:
                                                                                             content_offset + at })?;

                if !literal.is_empty() {
                    parts.push(Token::new(std::mem::take(&mut literal), NodeKind::StringLit));
                }

                let inner = &content[open + 1..close];
                let children = tokenize_at(inner, content_offset + open + 1, registry)?;
                parts.push(Token::with_children(inner.trim(), NodeKind::StringEscape, children));

                interpolated = true;
                cursor = close + 1;
            },
            Some('n') => {
                literal.push('\n');
                cursor = at + 2;
            },
            Some('\\') => {
                literal.push('\\');
                cursor = at + 2;
            },
            _ => {
                literal.push('\\');
                cursor = at + 1;
            },
        }
    }
    literal.push_str(&content[cursor..]);

    if !interpolated {
        return Ok(Token::new(literal, NodeKind::StringLit));
    }

    if !literal.is_empty() {
        parts.push(Token::new(literal, NodeKind::StringLit));
    }
    Ok(Token::with_children(content, NodeKind::StringLit, parts))
}

/// Finds the `)` closing the `(` at byte index `open` of `text`.
fn matching_paren(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0_usize;
    for (index, c) in text[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + index);
                }
            },
            _ => {},
        }
    }
    None
}

/// Classifies a single word: keywords first, then numeric literals, and
/// everything else is a candidate variable name.
///
/// # Example
/// ```
/// use hydra::{
///     ast::NodeKind,
///     interpreter::{lexer::classify_word, registry::Registry},
/// };
///
/// let registry = Registry::new();
/// assert_eq!(classify_word("for", &registry), NodeKind::Loop);
/// assert_eq!(classify_word("2.5", &registry), NodeKind::Number);
/// assert_eq!(classify_word("M_PI", &registry), NodeKind::Number);
/// assert_eq!(classify_word("inf", &registry), NodeKind::Variable);
/// ```
#[must_use]
pub fn classify_word(word: &str, registry: &Registry) -> NodeKind {
    if let Some(kind) = registry.kind_of_keyword(word) {
        return kind;
    }

    if word == PI_LITERAL || is_numeric_literal(word) {
        NodeKind::Number
    } else {
        NodeKind::Variable
    }
}

fn is_numeric_literal(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_digit() || c == '.') && word.parse::<f64>().is_ok()
}
