/// A low-level, append-only writer producing indented JSON text.
///
/// The writer does not validate structure; the [Encoder] drives it and is
/// responsible for placing values, separators and braces in a valid order.
///
/// [Encoder]: crate::json::Encoder
#[derive(Debug)]
pub(crate) struct JsonWriter {
    buf: String,
    indent: usize,
}

impl JsonWriter {
    const INDENT: &'static str = "  ";

    pub fn new() -> JsonWriter {
        Self {
            buf: String::new(),
            indent: 0,
        }
    }

    /// Appends a fragment verbatim, without quoting or escaping.
    pub fn raw(&mut self, fragment: &str) {
        self.buf.push_str(fragment);
    }

    /// Appends a quoted, escaped JSON string.
    pub fn string(&mut self, value: &str) {
        self.buf.push('"');
        escape_into(&mut self.buf, value);
        self.buf.push('"');
    }

    pub fn bool(&mut self, value: bool) {
        self.buf.push_str(if value { "true" } else { "false" });
    }

    pub fn null(&mut self) {
        self.buf.push_str("null");
    }

    /// Appends a quoted key followed by `: `.
    pub fn key(&mut self, name: &str) {
        self.string(name);
        self.buf.push_str(": ");
    }

    pub fn open(&mut self, bracket: char) {
        self.buf.push(bracket);
        self.indent += 1;
    }

    /// Closes a bracket that received no items, on the same line.
    pub fn close_empty(&mut self, bracket: char) {
        self.indent -= 1;
        self.buf.push(bracket);
    }

    /// Closes a bracket on a fresh line at the enclosing indentation.
    pub fn close(&mut self, bracket: char) {
        self.indent -= 1;
        self.newline_indent();
        self.buf.push(bracket);
    }

    pub fn separator(&mut self) {
        self.buf.push(',');
    }

    pub fn newline_indent(&mut self) {
        self.buf.push('\n');
        for _ in 0..self.indent {
            self.buf.push_str(Self::INDENT);
        }
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

fn escape_into(buf: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            c if c < '\u{20}' => buf.push_str(&format!("\\u{:04x}", c as u32)),
            c => buf.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_an_indented_object() {
        let mut writer = JsonWriter::new();

        writer.open('{');
        writer.newline_indent();
        writer.key("title");
        writer.string("Temperature");
        writer.separator();
        writer.newline_indent();
        writer.key("visible");
        writer.bool(true);
        writer.close('}');

        let expected = "{\n  \"title\": \"Temperature\",\n  \"visible\": true\n}";
        assert_eq!(expected, writer.into_string());
    }

    #[test]
    fn escapes_quotes_and_control_characters() {
        let mut writer = JsonWriter::new();

        writer.string("a \"b\"\nc\\d\u{1}");

        assert_eq!(r#""a \"b\"\nc\\d\u0001""#, writer.into_string());
    }

    #[test]
    fn closes_an_empty_object_on_the_same_line() {
        let mut writer = JsonWriter::new();

        writer.open('{');
        writer.close_empty('}');

        assert_eq!("{}", writer.into_string());
    }
}
