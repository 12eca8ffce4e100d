//! The formatter: serializes a [JsonValue] tree back to JSON text.
//!
//! Objects are rendered with each pair on its own line, indented with one tab
//! per nesting level; arrays are rendered compactly with no added whitespace.
//! Numbers are written back at the precision of the original literal, and
//! strings are written verbatim with no re-escaping.
use crate::numbers::Number;
use crate::JsonValue;

/// Serializer for [JsonValue] trees, tracking the current indentation level
/// in an internal buffer
pub struct Formatter {
    /// Current indentation depth, in tabs
    tabs: usize,
    /// The output accumulated so far
    buffer: String,
}

impl Formatter {
    /// Serialize a [JsonValue] tree to JSON text
    pub fn format(value: &JsonValue) -> String {
        let mut formatter = Formatter {
            tabs: 0,
            buffer: String::new(),
        };
        formatter.format_value(value);
        formatter.buffer
    }

    /// Start a fresh line at the current indentation level
    fn newline(&mut self) {
        self.buffer.push('\n');
        for _ in 0..self.tabs {
            self.buffer.push('\t');
        }
    }

    fn format_value(&mut self, value: &JsonValue) {
        match value {
            JsonValue::Object(pairs) => self.format_object(pairs),
            JsonValue::Array(values) => self.format_array(values),
            JsonValue::String(s) => {
                self.buffer.push('"');
                self.buffer.push_str(s);
                self.buffer.push('"');
            }
            JsonValue::Number(num) => self.format_number(num),
            JsonValue::Boolean(b) => self.buffer.push_str(if *b { "true" } else { "false" }),
            JsonValue::Null => self.buffer.push_str("null"),
        }
    }

    /// Each pair goes on its own indented line; the closing brace lands on a
    /// dedented line of its own. Pair order is the object's insertion order
    fn format_object(&mut self, pairs: &[(String, JsonValue)]) {
        self.buffer.push('{');
        self.tabs += 1;
        for (index, (name, value)) in pairs.iter().enumerate() {
            if index > 0 {
                self.buffer.push(',');
            }
            self.newline();
            self.format_pair(name, value);
        }
        self.tabs -= 1;
        self.newline();
        self.buffer.push('}');
    }

    fn format_array(&mut self, values: &[JsonValue]) {
        self.buffer.push('[');
        for (index, value) in values.iter().enumerate() {
            if index > 0 {
                self.buffer.push(',');
            }
            self.format_value(value);
        }
        self.buffer.push(']');
    }

    /// Integers render as signed decimals; floats render in fixed-point form
    /// with exactly as many fractional digits as the source literal carried
    fn format_number(&mut self, num: &Number) {
        if num.is_float() {
            self.buffer
                .push_str(&format!("{:.*}", num.precision(), num.as_f64()));
        } else {
            self.buffer.push_str(&num.as_i64().to_string());
        }
    }

    fn format_pair(&mut self, name: &str, value: &JsonValue) {
        self.buffer.push('"');
        self.buffer.push_str(name);
        self.buffer.push_str("\": ");
        self.format_value(value);
    }
}

#[cfg(test)]
mod tests {
    use crate::formatter::Formatter;
    use crate::numbers::Number;
    use crate::JsonValue;

    #[test]
    fn should_format_objects_one_pair_per_line() {
        let value = JsonValue::Object(vec![(
            "a".to_string(),
            JsonValue::Number(Number::new("149", false, false)),
        )]);
        assert_eq!(Formatter::format(&value), "{\n\t\"a\": 149\n}");
    }

    #[test]
    fn should_indent_nested_objects() {
        let inner = JsonValue::Object(vec![(
            "hello".to_string(),
            JsonValue::String("world".to_string()),
        )]);
        let value = JsonValue::Object(vec![("e".to_string(), inner)]);
        assert_eq!(
            Formatter::format(&value),
            "{\n\t\"e\": {\n\t\t\"hello\": \"world\"\n\t}\n}"
        );
    }

    #[test]
    fn should_format_arrays_compactly() {
        let value = JsonValue::Array(vec![
            JsonValue::Number(Number::new("1", false, false)),
            JsonValue::Number(Number::new("2", false, false)),
            JsonValue::String("foo".to_string()),
            JsonValue::Boolean(true),
            JsonValue::Null,
        ]);
        assert_eq!(Formatter::format(&value), "[1,2,\"foo\",true,null]");
    }

    #[test]
    fn should_preserve_float_precision() {
        let value = JsonValue::Array(vec![
            JsonValue::Number(Number::new("123.456", true, true)),
            JsonValue::Number(Number::new("0.50", false, true)),
        ]);
        assert_eq!(Formatter::format(&value), "[-123.456,0.50]");
    }

    #[test]
    fn should_format_empty_containers() {
        assert_eq!(Formatter::format(&JsonValue::Array(vec![])), "[]");
        assert_eq!(Formatter::format(&JsonValue::Object(vec![])), "{\n}");
    }

    #[test]
    fn should_render_via_display() {
        let value = JsonValue::Array(vec![JsonValue::Boolean(false)]);
        assert_eq!(value.to_string(), "[false]");
    }
}
