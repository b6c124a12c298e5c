//! Render error types.

use crate::converter::ConvertError;

/// Error rendering a block tag.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The markdown converter failed.
    #[error(transparent)]
    Convert(#[from] ConvertError),
    /// Accordion rendered without a header under [`MissingHeader::Error`](crate::MissingHeader::Error).
    #[error("accordion tag requires a header")]
    MissingHeader,
    /// Tag name is not one of the registered block tags.
    #[error("unknown block tag: {0}")]
    UnknownTag(String),
}
