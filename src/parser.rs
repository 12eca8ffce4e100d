//! The DOM parser: a recursive-descent consumer of the [Lexer] which builds a
//! complete [JsonValue] tree from the input.
//!
//! Only objects and arrays are accepted at the document root. Each call to one
//! of the parse entry points owns its own cursor state and returns an
//! independent tree, so a single [Parser] can be reused across documents.
use std::io::BufReader;

use crate::decoders::{DecoderSelector, Encoding};
use crate::errors::{ParserErrorDetails, ParserResult};
use crate::lexer::Lexer;
use crate::parser_error;
use crate::JsonValue;

/// Maximum supported nesting depth for objects and arrays. Parsing recurses
/// once per nesting level, so unbounded depth would exhaust the call stack on
/// adversarial input
pub const MAX_PARSE_DEPTH: usize = 128;

/// Main JSON parser struct
pub struct Parser {
    decoders: DecoderSelector,
    encoding: Encoding,
}

impl Default for Parser {
    /// The default encoding is Utf-8
    fn default() -> Self {
        Self {
            decoders: Default::default(),
            encoding: Default::default(),
        }
    }
}

impl Parser {
    /// Create a new instance of the parser using a specific [Encoding]
    pub fn with_encoding(encoding: Encoding) -> Self {
        Self {
            decoders: Default::default(),
            encoding,
        }
    }

    /// Parse a JSON document held in a byte buffer, decoding it with the
    /// configured [Encoding]
    pub fn parse_bytes(&self, bytes: &[u8]) -> ParserResult<JsonValue> {
        let mut reader = BufReader::new(bytes);
        let mut chars = self.decoders.new_decoder(&mut reader, self.encoding);
        self.parse(&mut chars)
    }

    /// Parse a JSON document held in a string slice
    pub fn parse_str(&self, str: &str) -> ParserResult<JsonValue> {
        let mut reader = BufReader::new(str.as_bytes());
        let mut chars = self.decoders.default_decoder(&mut reader);
        self.parse(&mut chars)
    }

    /// Parse a JSON document from a stream of input characters. The document
    /// root must be an object or an array; any non-blank content after the
    /// root value is an error
    pub fn parse(&self, chars: &mut impl Iterator<Item = char>) -> ParserResult<JsonValue> {
        let mut lexer = Lexer::new(chars);
        lexer.skip_blank();
        let value = match lexer.current() {
            Some('{') => self.parse_object(&mut lexer, 0)?,
            Some('[') => self.parse_array(&mut lexer, 0)?,
            Some(_) => {
                return parser_error!(ParserErrorDetails::InvalidRootValue, lexer.coords());
            }
            None => return parser_error!(ParserErrorDetails::EndOfInput, lexer.coords()),
        };
        lexer.skip_blank();
        if lexer.current().is_some() {
            return parser_error!(ParserErrorDetails::TrailingContent, lexer.coords());
        }
        Ok(value)
    }

    /// Dispatch on the current lookahead character to the appropriate token
    /// reader. Anything which doesn't look like one of the other six value
    /// kinds is consumed as a `null` literal
    fn parse_value(&self, lexer: &mut Lexer, depth: usize) -> ParserResult<JsonValue> {
        match lexer.current() {
            Some('"') => Ok(JsonValue::String(lexer.read_string()?)),
            Some(c) if c.is_ascii_digit() || c == '-' => {
                Ok(JsonValue::Number(lexer.read_number()?))
            }
            Some('t') | Some('f') => Ok(JsonValue::Boolean(lexer.read_boolean())),
            Some('{') => self.parse_object(lexer, depth),
            Some('[') => self.parse_array(lexer, depth),
            _ => {
                lexer.read_null();
                Ok(JsonValue::Null)
            }
        }
    }

    /// An object is just a list of comma separated KV pairs between braces.
    /// Pair order is preserved; a duplicate key replaces the earlier value in
    /// place
    fn parse_object(&self, lexer: &mut Lexer, depth: usize) -> ParserResult<JsonValue> {
        if depth >= MAX_PARSE_DEPTH {
            return parser_error!(
                ParserErrorDetails::MaxDepthExceeded(MAX_PARSE_DEPTH),
                lexer.coords()
            );
        }
        lexer.require('{')?;
        lexer.skip_blank();
        let mut pairs: Vec<(String, JsonValue)> = vec![];
        if lexer.matches('}') {
            lexer.advance();
            return Ok(JsonValue::Object(pairs));
        }
        loop {
            let (name, value) = self.parse_pair(lexer, depth + 1)?;
            insert_pair(&mut pairs, name, value);
            lexer.skip_blank();
            if !lexer.matches(',') {
                break;
            }
            lexer.advance();
            lexer.skip_blank();
        }
        lexer.require('}')?;
        Ok(JsonValue::Object(pairs))
    }

    /// An array is just a list of comma separated values between brackets
    fn parse_array(&self, lexer: &mut Lexer, depth: usize) -> ParserResult<JsonValue> {
        if depth >= MAX_PARSE_DEPTH {
            return parser_error!(
                ParserErrorDetails::MaxDepthExceeded(MAX_PARSE_DEPTH),
                lexer.coords()
            );
        }
        lexer.require('[')?;
        lexer.skip_blank();
        let mut values: Vec<JsonValue> = vec![];
        if lexer.matches(']') {
            lexer.advance();
            return Ok(JsonValue::Array(values));
        }
        loop {
            values.push(self.parse_value(lexer, depth + 1)?);
            lexer.skip_blank();
            if !lexer.matches(',') {
                break;
            }
            lexer.advance();
            lexer.skip_blank();
        }
        lexer.require(']')?;
        Ok(JsonValue::Array(values))
    }

    /// A pair is a string key, a colon and a value
    fn parse_pair(&self, lexer: &mut Lexer, depth: usize) -> ParserResult<(String, JsonValue)> {
        let name = lexer.read_string()?;
        lexer.skip_blank();
        lexer.require(':')?;
        lexer.skip_blank();
        let value = self.parse_value(lexer, depth)?;
        Ok((name, value))
    }
}

/// Append a pair, replacing in place when the key already exists so that the
/// last occurrence wins without disturbing key order
fn insert_pair(pairs: &mut Vec<(String, JsonValue)>, name: String, value: JsonValue) {
    match pairs.iter_mut().find(|(existing, _)| *existing == name) {
        Some(pair) => pair.1 = value,
        None => pairs.push((name, value)),
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::ParserErrorDetails;
    use crate::parser::{Parser, MAX_PARSE_DEPTH};
    use crate::JsonValue;

    #[test]
    fn should_parse_char_iterators_directly() {
        let source = r#"{
            "test" : 1232.0,
            "some other" : "thasdasd",
            "a bool" : true,
            "an array" : [1,2,3,4,5.8,6,7.2,7,8,10]
        }"#;
        let parser = Parser::default();
        let parsed = parser.parse(&mut source.chars());
        assert!(parsed.is_ok());
    }

    #[test]
    fn should_parse_byte_buffers() {
        let parser = Parser::default();
        let parsed = parser.parse_bytes(br#"{"a": [1, 2, 3]}"#);
        assert!(parsed.is_ok());
    }

    #[test]
    fn should_parse_ascii_byte_buffers() {
        let parser = Parser::with_encoding(crate::Encoding::Ascii);
        let parsed = parser.parse_bytes(br#"{"a": "plain ascii"}"#).unwrap();
        assert_eq!(parsed.get("a").unwrap().as_str(), Some("plain ascii"));
    }

    #[test]
    fn should_parse_empty_containers() {
        let parser = Parser::default();
        assert_eq!(parser.parse_str("{}").unwrap(), JsonValue::Object(vec![]));
        assert_eq!(parser.parse_str("[]").unwrap(), JsonValue::Array(vec![]));
        assert_eq!(
            parser.parse_str("{\"a\": []}").unwrap().get("a"),
            Some(&JsonValue::Array(vec![]))
        );
    }

    #[test]
    fn should_reject_scalar_roots() {
        let parser = Parser::default();
        let parsed = parser.parse_str("\"bare string\"");
        assert_eq!(
            parsed.unwrap_err().details,
            ParserErrorDetails::InvalidRootValue
        );
    }

    #[test]
    fn should_reject_blank_input() {
        let parser = Parser::default();
        assert_eq!(
            parser.parse_str("  \n ").unwrap_err().details,
            ParserErrorDetails::EndOfInput
        );
    }

    #[test]
    fn should_reject_trailing_content() {
        let parser = Parser::default();
        let parsed = parser.parse_str("{\"a\":1} x");
        assert_eq!(
            parsed.unwrap_err().details,
            ParserErrorDetails::TrailingContent
        );
    }

    #[test]
    fn should_allow_trailing_blanks() {
        let parser = Parser::default();
        assert!(parser.parse_str("{\"a\":1, \"b\": 2} \n").is_ok());
    }

    #[test]
    fn should_guard_against_deep_nesting() {
        let mut source = String::new();
        for _ in 0..=MAX_PARSE_DEPTH {
            source.push('[');
        }
        let parser = Parser::default();
        let parsed = parser.parse_str(&source);
        assert_eq!(
            parsed.unwrap_err().details,
            ParserErrorDetails::MaxDepthExceeded(MAX_PARSE_DEPTH)
        );
    }

    #[test]
    fn should_replace_duplicate_keys_in_place() {
        let parser = Parser::default();
        let parsed = parser.parse_str("{\"a\":1,\"b\":2,\"a\":3}").unwrap();
        let pairs = parsed.as_object().unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "a");
        assert_eq!(pairs[0].1.as_number().unwrap().as_i64(), 3);
        assert_eq!(pairs[1].0, "b");
    }

    #[test]
    fn should_report_missing_colon() {
        let parser = Parser::default();
        let err = parser.parse_str("{\"a\" 1}").unwrap_err();
        assert_eq!(
            err.details,
            ParserErrorDetails::UnexpectedCharacter {
                expected: ':',
                actual: Some('1'),
            }
        );
        assert_eq!(err.coords.unwrap().absolute, 5);
    }
}
