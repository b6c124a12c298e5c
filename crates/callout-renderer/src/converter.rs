//! Markdown conversion capability.
//!
//! Block tags never parse markdown themselves. The host hands them a
//! [`MarkdownConverter`] for the duration of one render call.

use std::error::Error as StdError;

use pulldown_cmark::{Options, Parser, html};

/// Error returned by a [`MarkdownConverter`].
#[derive(Debug, thiserror::Error)]
#[error("markdown conversion failed: {message}")]
pub struct ConvertError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl ConvertError {
    /// Create an error from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create an error wrapping the converter's own error.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Error message without the source chain.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Converts markdown text to an HTML fragment.
///
/// Implemented for any `Fn(&str) -> Result<String, ConvertError>`, so hosts
/// can pass a closure over their own pipeline.
///
/// # Example
///
/// ```
/// use callout_renderer::{BlockTagKind, ConvertError, render};
///
/// let upper = |md: &str| -> Result<String, ConvertError> { Ok(md.to_uppercase()) };
/// let html = render(BlockTagKind::Tip, None, "psst", &upper).unwrap();
/// assert!(html.contains("PSST"));
/// ```
pub trait MarkdownConverter {
    /// Convert `markdown` to HTML.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError`] if the converter cannot process the input.
    fn convert(&self, markdown: &str) -> Result<String, ConvertError>;
}

impl<F> MarkdownConverter for F
where
    F: Fn(&str) -> Result<String, ConvertError>,
{
    fn convert(&self, markdown: &str) -> Result<String, ConvertError> {
        self(markdown)
    }
}

/// Markdown converter backed by pulldown-cmark.
///
/// Holds only parser options, so a single instance can be shared across
/// threads rendering different pages.
#[derive(Clone, Copy, Debug)]
pub struct PulldownConverter {
    options: Options,
}

impl Default for PulldownConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl PulldownConverter {
    /// Create a converter with tables, footnotes, strikethrough and task
    /// lists enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_FOOTNOTES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS,
        }
    }

    /// Create a converter from raw pulldown-cmark options.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Enable or disable GFM tables.
    #[must_use]
    pub fn with_tables(self, enabled: bool) -> Self {
        self.with_flag(Options::ENABLE_TABLES, enabled)
    }

    /// Enable or disable footnotes.
    #[must_use]
    pub fn with_footnotes(self, enabled: bool) -> Self {
        self.with_flag(Options::ENABLE_FOOTNOTES, enabled)
    }

    /// Enable or disable `~~strikethrough~~`.
    #[must_use]
    pub fn with_strikethrough(self, enabled: bool) -> Self {
        self.with_flag(Options::ENABLE_STRIKETHROUGH, enabled)
    }

    /// Enable or disable `- [ ]` task lists.
    #[must_use]
    pub fn with_tasklists(self, enabled: bool) -> Self {
        self.with_flag(Options::ENABLE_TASKLISTS, enabled)
    }

    /// Enable or disable smart quotes and dashes.
    #[must_use]
    pub fn with_smart_punctuation(self, enabled: bool) -> Self {
        self.with_flag(Options::ENABLE_SMART_PUNCTUATION, enabled)
    }

    /// Enable or disable `# Heading {#id .class}` attributes.
    #[must_use]
    pub fn with_heading_attributes(self, enabled: bool) -> Self {
        self.with_flag(Options::ENABLE_HEADING_ATTRIBUTES, enabled)
    }

    /// Parser options in use.
    #[must_use]
    pub fn options(self) -> Options {
        self.options
    }

    fn with_flag(mut self, flag: Options, enabled: bool) -> Self {
        self.options.set(flag, enabled);
        self
    }
}

impl MarkdownConverter for PulldownConverter {
    fn convert(&self, markdown: &str) -> Result<String, ConvertError> {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;

    assert_impl_all!(PulldownConverter: Send, Sync, Copy);
    assert_impl_all!(ConvertError: Send, Sync, StdError);

    #[test]
    fn test_pulldown_paragraph() {
        let html = PulldownConverter::new().convert("hello **world**").unwrap();
        assert_eq!(html, "<p>hello <strong>world</strong></p>\n");
    }

    #[test]
    fn test_pulldown_empty_input() {
        let html = PulldownConverter::new().convert("").unwrap();
        assert_eq!(html, "");
    }

    #[test]
    fn test_pulldown_tables_enabled_by_default() {
        let html = PulldownConverter::new()
            .convert("| a | b |\n|---|---|\n| 1 | 2 |\n")
            .unwrap();
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_pulldown_tables_disabled() {
        let html = PulldownConverter::new()
            .with_tables(false)
            .convert("| a | b |\n|---|---|\n| 1 | 2 |\n")
            .unwrap();
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_pulldown_strikethrough() {
        let html = PulldownConverter::new().convert("~~gone~~").unwrap();
        assert!(html.contains("<del>gone</del>"));

        let html = PulldownConverter::new()
            .with_strikethrough(false)
            .convert("~~gone~~")
            .unwrap();
        assert!(!html.contains("<del>"));
    }

    #[test]
    fn test_pulldown_smart_punctuation_off_by_default() {
        let converter = PulldownConverter::new();
        assert!(!converter.options().contains(Options::ENABLE_SMART_PUNCTUATION));

        let converter = converter.with_smart_punctuation(true);
        assert!(converter.options().contains(Options::ENABLE_SMART_PUNCTUATION));
    }

    #[test]
    fn test_with_options() {
        let converter = PulldownConverter::with_options(Options::empty());
        assert!(converter.options().is_empty());
    }

    #[test]
    fn test_closure_converter() {
        let converter = |md: &str| -> Result<String, ConvertError> { Ok(format!("<p>{md}</p>")) };
        assert_eq!(converter.convert("x").unwrap(), "<p>x</p>");
    }

    #[test]
    fn test_convert_error_display() {
        let err = ConvertError::new("bad input");
        assert_eq!(err.to_string(), "markdown conversion failed: bad input");
        assert_eq!(err.message(), "bad input");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_convert_error_with_source() {
        let io = std::io::Error::other("disk on fire");
        let err = ConvertError::with_source("include failed", io);
        assert_eq!(err.source().unwrap().to_string(), "disk on fire");
    }
}
