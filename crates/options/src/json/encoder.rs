use crate::error::EncodeError;
use crate::error::Result;
use crate::json::Encode;
use crate::json::JsonRenderer;
use crate::json::Leaf;
use crate::json::write::JsonWriter;

/// The encoding context for one [JsonRenderer::to_json] call.
///
/// The encoder tracks the field path of the value currently being written so
/// that encoding failures can name the offending field, and dispatches leaf
/// values to the renderer's rule table.
pub struct Encoder<'r> {
    writer: JsonWriter,
    renderer: &'r JsonRenderer,
    path: Vec<Segment>,
}

#[derive(Debug)]
enum Segment {
    Field(String),
    Index(usize),
}

impl<'r> Encoder<'r> {
    pub(crate) fn new(renderer: &'r JsonRenderer) -> Encoder<'r> {
        Self {
            writer: JsonWriter::new(),
            renderer,
            path: Vec::new(),
        }
    }

    /// Returns the path of the value currently being encoded,
    /// for example `$.series[0].data[2]`.
    pub fn path(&self) -> String {
        let mut path = String::from("$");

        for segment in &self.path {
            match segment {
                Segment::Field(name) => {
                    path.push('.');
                    path.push_str(name);
                }
                Segment::Index(index) => {
                    path.push('[');
                    path.push_str(&index.to_string());
                    path.push(']');
                }
            }
        }

        path
    }

    /// Dispatches a leaf value to the encoding rule registered for its kind.
    pub fn leaf(&mut self, leaf: Leaf<'_>) -> Result<()> {
        let renderer = self.renderer;

        match renderer.rule(leaf.kind()) {
            Some(rule) => rule(&leaf, self),
            None => Err(EncodeError::MissingRule {
                path: self.path(),
                kind: leaf.kind(),
            }),
        }
    }

    /// Writes a fragment verbatim at the current value position.
    ///
    /// The fragment is not required to be valid JSON; this is how inline
    /// JavaScript expressions reach the output.
    pub fn raw(&mut self, fragment: &str) {
        self.writer.raw(fragment);
    }

    /// Writes a quoted, escaped JSON string.
    pub fn string(&mut self, value: &str) {
        self.writer.string(value);
    }

    pub fn bool(&mut self, value: bool) {
        self.writer.bool(value);
    }

    pub fn null(&mut self) {
        self.writer.null();
    }

    /// Writes a floating point number, failing on NaN and infinities.
    pub fn number_f64(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(EncodeError::NonFiniteNumber { path: self.path() });
        }

        self.writer.raw(&value.to_string());
        Ok(())
    }

    pub fn number_i64(&mut self, value: i64) {
        self.writer.raw(&value.to_string());
    }

    /// Starts a JSON object at the current value position.
    pub fn object(&mut self) -> ObjectEncoder<'_, 'r> {
        self.writer.open('{');
        ObjectEncoder {
            encoder: self,
            fields: 0,
        }
    }

    /// Starts a JSON array at the current value position.
    pub fn array(&mut self) -> ArrayEncoder<'_, 'r> {
        self.writer.open('[');
        ArrayEncoder {
            encoder: self,
            elements: 0,
        }
    }

    pub(crate) fn into_string(self) -> String {
        self.writer.into_string()
    }
}

/// Writes the fields of one JSON object.
///
/// Unset fields are omitted entirely; an object that receives no fields is
/// written as `{}`.
pub struct ObjectEncoder<'a, 'r> {
    encoder: &'a mut Encoder<'r>,
    fields: usize,
}

impl ObjectEncoder<'_, '_> {
    /// Writes a field if it holds a value and omits it otherwise.
    pub fn field<T: Encode>(&mut self, name: &str, value: &Option<T>) -> Result<()> {
        match value {
            Some(value) => self.field_required(name, value),
            None => Ok(()),
        }
    }

    /// Writes a field unconditionally.
    pub fn field_required<T: Encode + ?Sized>(&mut self, name: &str, value: &T) -> Result<()> {
        if self.fields > 0 {
            self.encoder.writer.separator();
        }
        self.fields += 1;

        self.encoder.writer.newline_indent();
        self.encoder.writer.key(name);

        self.encoder.path.push(Segment::Field(name.to_owned()));
        let result = value.encode(self.encoder);
        self.encoder.path.pop();

        result
    }

    /// Writes a list field, omitting it when the list is empty.
    pub fn field_list<T: Encode>(&mut self, name: &str, values: &[T]) -> Result<()> {
        if values.is_empty() {
            return Ok(());
        }

        self.field_required(name, values)
    }

    pub fn finish(self) -> Result<()> {
        if self.fields == 0 {
            self.encoder.writer.close_empty('}');
        } else {
            self.encoder.writer.close('}');
        }

        Ok(())
    }
}

/// Writes the elements of one JSON array.
pub struct ArrayEncoder<'a, 'r> {
    encoder: &'a mut Encoder<'r>,
    elements: usize,
}

impl ArrayEncoder<'_, '_> {
    pub fn element<T: Encode + ?Sized>(&mut self, value: &T) -> Result<()> {
        if self.elements > 0 {
            self.encoder.writer.separator();
        }

        self.encoder.writer.newline_indent();

        self.encoder.path.push(Segment::Index(self.elements));
        let result = value.encode(self.encoder);
        self.encoder.path.pop();

        self.elements += 1;
        result
    }

    pub fn finish(self) -> Result<()> {
        if self.elements == 0 {
            self.encoder.writer.close_empty(']');
        } else {
            self.encoder.writer.close(']');
        }

        Ok(())
    }
}
