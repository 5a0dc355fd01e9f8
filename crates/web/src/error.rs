//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use chartson_options::error::DecodeError;
use chartson_options::error::EncodeError;
use tinytemplate::error::Error as TinyTemplateError;

/// The result type that uses [WebError] as the error type.
pub type Result<T> = std::result::Result<T, WebError>;

/// The error type for preparing a chart for a server-rendered page.
#[derive(Debug)]
pub enum WebError {
    /// An [EncodeError] encountered while encoding options into JSON.
    Encode(EncodeError),

    /// A [DecodeError] encountered while decoding an inbound event payload.
    Decode(DecodeError),

    /// A [tinytemplate::error::Error] encountered while rendering a page
    /// fragment template.
    Template(TinyTemplateError),

    /// The options tree has no render target, so there is no DOM element
    /// to mount the chart into.
    MissingRenderTarget,
}

impl Display for WebError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let web_error = "web error:";

        match self {
            WebError::Encode(error) => write!(f, "{web_error} {error}"),
            WebError::Decode(error) => write!(f, "{web_error} {error}"),
            WebError::Template(error) => write!(f, "{web_error} template error: {error}"),
            WebError::MissingRenderTarget => write!(
                f,
                "{web_error} the options tree has no renderTo target to mount the chart into"
            ),
        }
    }
}

impl Error for WebError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WebError::Encode(error) => Some(error),
            WebError::Decode(error) => Some(error),
            WebError::Template(error) => Some(error),
            WebError::MissingRenderTarget => None,
        }
    }
}

impl From<EncodeError> for WebError {
    fn from(error: EncodeError) -> Self {
        WebError::Encode(error)
    }
}

impl From<DecodeError> for WebError {
    fn from(error: DecodeError) -> Self {
        WebError::Decode(error)
    }
}

impl From<TinyTemplateError> for WebError {
    fn from(error: TinyTemplateError) -> Self {
        WebError::Template(error)
    }
}
