//! chartson's option model and JSON encoding library.
//!
//! This crate models the configuration of one chart as a typed tree
//! ([Options]) and encodes it into the JSON configuration document expected
//! by the Highcharts browser library. Encoding is the rich direction:
//! colors, coordinate tuples, inline functions and enumeration tokens each
//! have their own textual shape, driven by a replaceable rule table
//! ([json::JsonRenderer]). Decoding exists only for the small event payloads
//! a rendered chart sends back.
//!
//! [Options]: crate::options::Options

pub mod axis;
pub mod color;
pub mod error;
pub mod id;
pub mod json;
pub mod lookup;
pub mod options;
pub mod scripts;
pub mod series;
pub mod value;

pub use crate::json::JsonRenderer;
pub use crate::options::Options;
