use lachs::Span;

#[lachs::token]
pub enum Token {
    #[terminal("(")]
    LParen,
    #[terminal(")")]
    RParen,
    #[terminal("{")]
    LBrace,
    #[terminal("}")]
    RBrace,
    #[terminal("[")]
    LBracket,
    #[terminal("]")]
    RBracket,
    #[terminal(",")]
    Comma,
    #[terminal(";")]
    Semicolon,
    #[terminal("=")]
    Equals,
    #[terminal("=>")]
    Arrow,
    #[terminal(":")]
    Colon,
    #[terminal("@")]
    At,
    #[literal("[A-Z0-9][a-zA-Z0-9_]*")]
    Atom,
    #[literal("[a-z_][a-zA-Z0-9_]*")]
    Ident,
    #[literal(r#"'([^'\\\n\r]|\\.)*'"#)]
    QuotedAtom,
    #[literal(r#""([^"\\\n\r]|\\.)*""#)]
    StringLiteral,
}

impl Token {
    pub fn pos(&self) -> Span {
        match self {
            Token::LParen(inner) => inner.position.clone(),
            Token::RParen(inner) => inner.position.clone(),
            Token::LBrace(inner) => inner.position.clone(),
            Token::RBrace(inner) => inner.position.clone(),
            Token::LBracket(inner) => inner.position.clone(),
            Token::RBracket(inner) => inner.position.clone(),
            Token::Comma(inner) => inner.position.clone(),
            Token::Semicolon(inner) => inner.position.clone(),
            Token::Equals(inner) => inner.position.clone(),
            Token::Arrow(inner) => inner.position.clone(),
            Token::Colon(inner) => inner.position.clone(),
            Token::At(inner) => inner.position.clone(),
            Token::Atom(inner) => inner.position.clone(),
            Token::Ident(inner) => inner.position.clone(),
            Token::QuotedAtom(inner) => inner.position.clone(),
            Token::StringLiteral(inner) => inner.position.clone(),
        }
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self {
            Token::LParen(_) => "'('".to_string(),
            Token::RParen(_) => "')'".to_string(),
            Token::LBrace(_) => "'{'".to_string(),
            Token::RBrace(_) => "'}'".to_string(),
            Token::LBracket(_) => "'['".to_string(),
            Token::RBracket(_) => "']'".to_string(),
            Token::Comma(_) => "','".to_string(),
            Token::Semicolon(_) => "';'".to_string(),
            Token::Equals(_) => "'='".to_string(),
            Token::Arrow(_) => "'=>'".to_string(),
            Token::Colon(_) => "':'".to_string(),
            Token::At(_) => "'@'".to_string(),
            Token::Atom(inner) => format!("atom '{}'", inner.value),
            Token::Ident(inner) if is_keyword(&inner.value) => format!("'{}'", inner.value),
            Token::Ident(inner) => format!("identifier '{}'", inner.value),
            Token::QuotedAtom(inner) => format!("quoted atom {}", inner.value),
            Token::StringLiteral(inner) => format!("string {}", inner.value),
        }
    }

    /// True if this token is the identifier-shaped keyword `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Token::Ident(inner) if inner.value == keyword)
    }
}

/// Words that lex as identifiers but are reserved by the grammar.
pub const KEYWORDS: [&str; 4] = ["fn", "let", "match", "_"];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Strip `//` line comments from source text.
///
/// The newline ending each comment is kept so token positions still point at
/// the right line. Comment markers inside string literals and quoted atoms are
/// left alone.
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                out.push(c);
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if c == q || c == '\n' || c == '\r' {
                    quote = None;
                }
            }
            None if c == '/' && chars.peek() == Some(&'/') => {
                while let Some(&next) = chars.peek() {
                    if next == '\n' || next == '\r' {
                        break;
                    }
                    chars.next();
                }
            }
            None => {
                if c == '"' || c == '\'' {
                    quote = Some(c);
                }
                out.push(c);
            }
        }
    }

    out
}

/// Strip comments and tokenize `source`.
///
/// [`LexError`] is generated by `#[lachs::token]` alongside [`Token`].
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Token::lex(&strip_comments(source))
}
