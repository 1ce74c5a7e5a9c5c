//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span covering a lexeme at the lexer cursor
//!
//! These macros reduce boilerplate in the lexer handlers.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string payload
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span starting at the lexer cursor and covering `$len` bytes.
///
/// # Example
///
/// ```ignore
/// let span = MK_SPAN!(lexer, lexeme.len());
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($lexer:expr, $len:expr) => {
        Span {
            start: $lexer.pos,
            end: $lexer.pos + $len,
        }
    };
}
