//! The lexer: a single-lookahead cursor over the input text, along with the
//! primitive scan operations used by the parser to read individual tokens.
//!
//! The cursor state is entirely local to each [Lexer] instance, so independent
//! documents can be parsed concurrently without any shared state. There is no
//! backtracking; one code unit of lookahead is sufficient for the grammar.
use crate::coords::Coords;
use crate::errors::{ParserErrorDetails, ParserResult};
use crate::lexer_error;
use crate::numbers::Number;

/// Number of positions unconditionally consumed for a `null` literal
const NULL_LITERAL_LENGTH: usize = 4;

/// Check for the subset of whitespace skipped between tokens: space, tab,
/// carriage return and line feed
#[inline]
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// A cursor over a stream of input characters, exposing one code unit of
/// lookahead via [Lexer::current]
pub struct Lexer<'a> {
    /// The underlying source of characters
    chars: &'a mut dyn Iterator<Item = char>,
    /// The character at the cursor, [None] once the input is exhausted
    current: Option<char>,
    /// The [Coords] of the character at the cursor
    coords: Coords,
}

impl<'a> Lexer<'a> {
    /// Construct a new [Lexer], priming the lookahead from the given source
    pub fn new(chars: &'a mut dyn Iterator<Item = char>) -> Self {
        let current = chars.next();
        Lexer {
            chars,
            current,
            coords: Coords::default(),
        }
    }

    /// The character at the cursor, or [None] past the end of the input
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// The [Coords] of the character currently at the cursor
    pub fn coords(&self) -> Coords {
        self.coords
    }

    /// True iff the character at the cursor is exactly `c`
    pub fn matches(&self, c: char) -> bool {
        self.current == Some(c)
    }

    /// Advance past `c` if it's at the cursor, otherwise fail with the
    /// expected character, the actual character and the cursor position
    pub fn require(&mut self, c: char) -> ParserResult<()> {
        if self.matches(c) {
            self.advance();
            Ok(())
        } else {
            lexer_error!(
                ParserErrorDetails::UnexpectedCharacter {
                    expected: c,
                    actual: self.current,
                },
                self.coords
            )
        }
    }

    /// Move the cursor one code unit forward, keeping the line and column
    /// coordinates in step
    pub fn advance(&mut self) {
        if let Some(c) = self.current {
            self.coords.absolute += 1;
            if c == '\n' {
                self.coords.line += 1;
                self.coords.column = 1;
            } else {
                self.coords.column += 1;
            }
        }
        self.current = self.chars.next();
    }

    /// Advance past any run of blank characters
    pub fn skip_blank(&mut self) {
        while matches!(self.current, Some(c) if is_blank(c)) {
            self.advance();
        }
    }

    /// Read a double-quoted string token, decoding any escape sequences into
    /// their literal characters. Reaching the end of the input before the
    /// closing quote is a fatal error
    pub fn read_string(&mut self) -> ParserResult<String> {
        self.require('"')?;
        let mut ret = String::new();
        loop {
            match self.current {
                None => return lexer_error!(ParserErrorDetails::UnterminatedString, self.coords),
                Some('"') => break,
                Some('\\') => {
                    self.advance();
                    self.read_escape_sequence(&mut ret)?;
                }
                Some(c) => {
                    ret.push(c);
                    self.advance();
                }
            }
        }
        self.advance();
        Ok(ret)
    }

    /// Decode a single escape sequence, the leading backslash already having
    /// been consumed, and push the resulting character onto the buffer
    fn read_escape_sequence(&mut self, buffer: &mut String) -> ParserResult<()> {
        match self.current {
            None => lexer_error!(ParserErrorDetails::UnterminatedString, self.coords),
            Some('u') => {
                self.advance();
                let decoded = self.read_unicode_escape()?;
                buffer.push(decoded);
                Ok(())
            }
            Some(c) => {
                let decoded = match c {
                    '\\' => '\\',
                    '"' => '"',
                    '/' => '/',
                    'b' => '\u{0008}',
                    'f' => '\u{000c}',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    _ => {
                        return lexer_error!(
                            ParserErrorDetails::InvalidEscapeSequence(format!("\\{}", c)),
                            self.coords
                        );
                    }
                };
                buffer.push(decoded);
                self.advance();
                Ok(())
            }
        }
    }

    /// Decode a `\uXXXX` escape into a single character, the `\u` prefix
    /// already having been consumed. A high surrogate must be followed by a
    /// second `\uXXXX` low surrogate; the pair is reassembled into one code
    /// point above U+FFFF
    fn read_unicode_escape(&mut self) -> ParserResult<char> {
        let start = self.coords;
        let high = self.read_hex_quad()?;
        let code_point = match high {
            0xd800..=0xdbff => {
                self.require('\\')?;
                self.require('u')?;
                let low = self.read_hex_quad()?;
                if !(0xdc00..=0xdfff).contains(&low) {
                    return lexer_error!(
                        ParserErrorDetails::InvalidUnicodeEscapeSequence(format!(
                            "\\u{:04x}\\u{:04x}",
                            high, low
                        )),
                        start
                    );
                }
                0x10000 + ((high - 0xd800) << 10) + (low - 0xdc00)
            }
            0xdc00..=0xdfff => {
                return lexer_error!(
                    ParserErrorDetails::InvalidUnicodeEscapeSequence(format!("\\u{:04x}", high)),
                    start
                );
            }
            _ => high,
        };
        match char::from_u32(code_point) {
            Some(c) => Ok(c),
            None => lexer_error!(
                ParserErrorDetails::InvalidUnicodeEscapeSequence(format!("\\u{{{:x}}}", code_point)),
                start
            ),
        }
    }

    /// Consume exactly 4 hexadecimal digits and return their value
    fn read_hex_quad(&mut self) -> ParserResult<u32> {
        let mut value = 0u32;
        for _ in 0..4 {
            match self.current.and_then(|c| c.to_digit(16)) {
                Some(digit) => {
                    value = value * 16 + digit;
                    self.advance();
                }
                None => {
                    return lexer_error!(
                        ParserErrorDetails::InvalidUnicodeEscapeSequence(match self.current {
                            Some(c) => format!("non-hex digit '{}'", c),
                            None => String::from("end of input"),
                        }),
                        self.coords
                    );
                }
            }
        }
        Ok(value)
    }

    /// Read a numeric token: an optional minus, one or more integer digits,
    /// and an optional fractional part. The digit text is retained verbatim
    /// within the returned [Number] for lossless re-formatting
    pub fn read_number(&mut self) -> ParserResult<Number> {
        let start = self.coords;
        let negative = self.matches('-');
        if negative {
            self.advance();
        }

        let mut digits = String::new();
        while let Some(c) = self.current {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.advance();
        }
        if digits.is_empty() {
            return lexer_error!(ParserErrorDetails::MalformedNumber, start);
        }

        let mut float = false;
        if self.matches('.') {
            let period = self.coords;
            self.advance();
            if !matches!(self.current, Some(c) if c.is_ascii_digit()) {
                return lexer_error!(ParserErrorDetails::MalformedNumber, period);
            }
            float = true;
            digits.push('.');
            while let Some(c) = self.current {
                if !c.is_ascii_digit() {
                    break;
                }
                digits.push(c);
                self.advance();
            }
        }

        Ok(Number::new(digits, negative, float))
    }

    /// Read a boolean token leniently: collect a maximal run of characters up
    /// to the next delimiter and compare it against the literal `true`.
    /// Anything else, including malformed runs such as `true1`, yields false
    /// rather than an error
    pub fn read_boolean(&mut self) -> bool {
        let mut run = String::new();
        while let Some(c) = self.current {
            if c == ',' || c == '}' || c == ']' || is_blank(c) {
                break;
            }
            run.push(c);
            self.advance();
        }
        run == "true"
    }

    /// Consume a `null` literal by unconditionally advancing 4 positions. The
    /// characters themselves aren't verified
    pub fn read_null(&mut self) {
        for _ in 0..NULL_LITERAL_LENGTH {
            self.advance();
        }
    }
}
