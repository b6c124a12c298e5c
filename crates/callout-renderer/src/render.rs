//! Block-tag rendering.
//!
//! One linear pass per tag: convert the body with the injected converter,
//! then interpolate the HTML into the fixed template for the tag kind.

use crate::converter::MarkdownConverter;
use crate::error::RenderError;
use crate::kind::{AdmonitionStyle, BlockTagKind};

/// What to do when an accordion has no header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingHeader {
    /// Render an empty bold summary and log a warning.
    #[default]
    Degrade,
    /// Fail with [`RenderError::MissingHeader`].
    Error,
}

/// Render options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Handling of a missing or blank accordion header.
    pub missing_header: MissingHeader,
}

/// A single block tag as handed over by the template engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagInvocation<'a> {
    /// Tag kind.
    pub kind: BlockTagKind,
    /// Summary header (accordion only).
    pub header: Option<&'a str>,
    /// Raw body between the opening and closing tags.
    pub body: &'a str,
}

impl<'a> TagInvocation<'a> {
    /// Build an invocation from a tag name, the markup following it, and the
    /// captured body.
    ///
    /// For `accordion` the markup, stripped of surrounding whitespace, is the
    /// header. Admonitions ignore their markup.
    ///
    /// # Example
    ///
    /// ```
    /// use callout_renderer::{BlockTagKind, TagInvocation};
    ///
    /// let tag = TagInvocation::parse("accordion", "  Show more ", "hidden").unwrap();
    /// assert_eq!(tag.kind, BlockTagKind::Accordion);
    /// assert_eq!(tag.header, Some("Show more"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnknownTag`] if `tag_name` is not a registered tag.
    pub fn parse(tag_name: &str, markup: &'a str, body: &'a str) -> Result<Self, RenderError> {
        let kind = BlockTagKind::from_tag_name(tag_name)
            .ok_or_else(|| RenderError::UnknownTag(tag_name.to_owned()))?;
        let header = kind.takes_header().then(|| markup.trim());
        Ok(Self { kind, header, body })
    }
}

/// Renders block tags through a borrowed markdown converter.
///
/// The renderer owns no state beyond its options; it can be rebuilt per page
/// or kept for a whole site build.
pub struct BlockTagRenderer<'c> {
    converter: &'c dyn MarkdownConverter,
    options: RenderOptions,
}

impl<'c> BlockTagRenderer<'c> {
    /// Create a renderer with default options.
    #[must_use]
    pub fn new(converter: &'c dyn MarkdownConverter) -> Self {
        Self {
            converter,
            options: RenderOptions::default(),
        }
    }

    /// Set render options.
    #[must_use]
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Render a tag invocation to an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Convert`] if the converter fails, or
    /// [`RenderError::MissingHeader`] for a headerless accordion under
    /// [`MissingHeader::Error`].
    pub fn render(&self, tag: &TagInvocation<'_>) -> Result<String, RenderError> {
        let out = match tag.kind.admonition() {
            Some(style) => admonition(style, &self.converter.convert(tag.body)?),
            None => {
                let header = self.accordion_header(tag.header)?;
                accordion(header, &self.converter.convert(tag.body)?)
            }
        };

        tracing::debug!(
            kind = %tag.kind,
            body_len = tag.body.len(),
            html_len = out.len(),
            "Rendered block tag"
        );

        Ok(out)
    }

    fn accordion_header<'h>(&self, header: Option<&'h str>) -> Result<&'h str, RenderError> {
        match header {
            Some(h) if !h.trim().is_empty() => Ok(h),
            _ => match self.options.missing_header {
                MissingHeader::Error => Err(RenderError::MissingHeader),
                MissingHeader::Degrade => {
                    tracing::warn!("Accordion tag has no header, rendering empty summary");
                    Ok(header.unwrap_or_default())
                }
            },
        }
    }
}

/// Render one block tag with default options.
///
/// `header` is used only for [`BlockTagKind::Accordion`].
///
/// # Example
///
/// ```
/// use callout_renderer::{BlockTagKind, PulldownConverter, render};
///
/// let html = render(
///     BlockTagKind::Accordion,
///     Some("Details"),
///     "content",
///     &PulldownConverter::new(),
/// )
/// .unwrap();
/// assert!(html.starts_with("<details"));
/// assert!(html.contains("<strong>Details</strong>"));
/// assert!(html.contains("<p>content</p>"));
/// ```
///
/// # Errors
///
/// Returns [`RenderError::Convert`] if the converter fails.
pub fn render(
    kind: BlockTagKind,
    header: Option<&str>,
    body: &str,
    converter: &dyn MarkdownConverter,
) -> Result<String, RenderError> {
    BlockTagRenderer::new(converter).render(&TagInvocation { kind, header, body })
}

fn accordion(header: &str, html: &str) -> String {
    format!(
        r#"<details style="border: 1px dashed rgba(155, 155, 155, 0.8); padding: 6px;">
  <summary>
    <strong>{header}</strong>
  </summary>
  <div style="padding-top: 12px;">
    {html}
  </div>
</details>
"#
    )
}

// The bold label is markdown; `markdown="1"` makes the host re-process it.
fn admonition(style: AdmonitionStyle, html: &str) -> String {
    let AdmonitionStyle { class, icon, label } = style;
    format!(
        r#"<div markdown="1" class="alert alert-{class}" role="alert">
  <i class="{icon}"></i> **{label}**
  {html}
</div>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::{ConvertError, PulldownConverter};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn identity(md: &str) -> Result<String, ConvertError> {
        Ok(md.to_owned())
    }

    fn emphasize_world(md: &str) -> Result<String, ConvertError> {
        Ok(md.replace("**world**", "<em>world</em>"))
    }

    #[test]
    fn test_accordion_full_output() {
        let html = render(BlockTagKind::Accordion, Some("Details"), "content", &identity).unwrap();
        assert_eq!(
            html,
            r#"<details style="border: 1px dashed rgba(155, 155, 155, 0.8); padding: 6px;">
  <summary>
    <strong>Details</strong>
  </summary>
  <div style="padding-top: 12px;">
    content
  </div>
</details>
"#
        );
    }

    #[test]
    fn test_info_full_output() {
        let html = render(BlockTagKind::Info, None, "hello **world**", &emphasize_world).unwrap();
        assert_eq!(
            html,
            r#"<div markdown="1" class="alert alert-info" role="alert">
  <i class="fa fa-info-circle"></i> **Info**
  hello <em>world</em>
</div>
"#
        );
    }

    #[test]
    fn test_each_admonition_has_its_class_and_body() {
        let cases = [
            (BlockTagKind::Info, "alert-info", "fa-info-circle", "**Info**"),
            (BlockTagKind::Tip, "alert-success", "fa-lightbulb", "**Tip**"),
            (
                BlockTagKind::Warning,
                "alert-warning",
                "fa-exclamation-triangle",
                "**Warning**",
            ),
            (
                BlockTagKind::Danger,
                "alert-danger",
                "fa-exclamation-circle",
                "**Danger**",
            ),
        ];

        for (kind, class, icon, label) in cases {
            let html = render(kind, None, "body text", &identity).unwrap();
            assert!(html.contains(&format!(r#"class="alert {class}""#)), "{kind}: {html}");
            assert!(html.contains(icon), "{kind}: {html}");
            assert!(html.contains(label), "{kind}: {html}");
            assert!(html.contains("body text"), "{kind}: {html}");
        }
    }

    #[test]
    fn test_admonition_ignores_header() {
        let with = render(BlockTagKind::Warning, Some("ignored"), "x", &identity).unwrap();
        let without = render(BlockTagKind::Warning, None, "x", &identity).unwrap();
        assert_eq!(with, without);
        assert!(!with.contains("ignored"));
    }

    #[test]
    fn test_accordion_contains_header_and_converted_body() {
        let converter = PulldownConverter::new();
        let html = render(
            BlockTagKind::Accordion,
            Some("Why?"),
            "Because *reasons*.",
            &converter,
        )
        .unwrap();
        assert!(html.contains("<strong>Why?</strong>"));
        assert!(html.contains("<p>Because <em>reasons</em>.</p>"));
    }

    #[test]
    fn test_header_is_interpolated_verbatim() {
        let html = render(
            BlockTagKind::Accordion,
            Some("<code>cfg</code> & more"),
            "",
            &identity,
        )
        .unwrap();
        assert!(html.contains("<strong><code>cfg</code> & more</strong>"));
    }

    #[test]
    fn test_conversion_is_repeatable() {
        let converter = PulldownConverter::new();
        let body = "- one\n- two\n\n> quoted";
        let first = render(BlockTagKind::Tip, None, body, &converter).unwrap();
        let second = render(BlockTagKind::Tip, None, body, &converter).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_body_calls_converter_with_empty_string() {
        let calls = RefCell::new(Vec::new());
        let recording = |md: &str| -> Result<String, ConvertError> {
            calls.borrow_mut().push(md.to_owned());
            Ok(String::new())
        };

        let html = render(BlockTagKind::Danger, None, "", &recording).unwrap();

        assert_eq!(*calls.borrow(), vec![String::new()]);
        assert!(html.starts_with(r#"<div markdown="1" class="alert alert-danger""#));
        assert!(html.ends_with("</div>\n"));
    }

    #[test]
    fn test_converter_called_once_with_raw_body() {
        let calls = RefCell::new(Vec::new());
        let recording = |md: &str| -> Result<String, ConvertError> {
            calls.borrow_mut().push(md.to_owned());
            Ok(md.to_owned())
        };

        let body = "  {% raw %}nested{% endraw %}\n";
        render(BlockTagKind::Accordion, Some("h"), body, &recording).unwrap();

        assert_eq!(*calls.borrow(), vec![body.to_owned()]);
    }

    #[test]
    fn test_converter_error_propagates() {
        let failing = |_: &str| -> Result<String, ConvertError> { Err(ConvertError::new("boom")) };

        let err = render(BlockTagKind::Info, None, "x", &failing).unwrap_err();

        match err {
            RenderError::Convert(inner) => assert_eq!(inner.message(), "boom"),
            other => panic!("expected Convert, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_header_degrades_by_default() {
        let html = render(BlockTagKind::Accordion, None, "body", &identity).unwrap();
        assert!(html.contains("<strong></strong>"));
        assert!(html.contains("body"));
    }

    #[test]
    fn test_missing_header_error_policy() {
        let calls = RefCell::new(0);
        let counting = |md: &str| -> Result<String, ConvertError> {
            *calls.borrow_mut() += 1;
            Ok(md.to_owned())
        };
        let renderer = BlockTagRenderer::new(&counting).with_options(RenderOptions {
            missing_header: MissingHeader::Error,
        });

        let missing = TagInvocation {
            kind: BlockTagKind::Accordion,
            header: None,
            body: "body",
        };
        assert!(matches!(
            renderer.render(&missing),
            Err(RenderError::MissingHeader)
        ));

        let blank = TagInvocation {
            header: Some("   "),
            ..missing
        };
        assert!(matches!(
            renderer.render(&blank),
            Err(RenderError::MissingHeader)
        ));

        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_error_policy_does_not_affect_admonitions() {
        let renderer = BlockTagRenderer::new(&identity).with_options(RenderOptions {
            missing_header: MissingHeader::Error,
        });
        let tag = TagInvocation {
            kind: BlockTagKind::Tip,
            header: None,
            body: "fine",
        };
        assert!(renderer.render(&tag).unwrap().contains("fine"));
    }

    #[test]
    fn test_parse_accordion_trims_markup() {
        let tag = TagInvocation::parse("accordion", " \tMore info \n", "body").unwrap();
        assert_eq!(
            tag,
            TagInvocation {
                kind: BlockTagKind::Accordion,
                header: Some("More info"),
                body: "body",
            }
        );
    }

    #[test]
    fn test_parse_admonition_drops_markup() {
        let tag = TagInvocation::parse("danger", "stray words", "body").unwrap();
        assert_eq!(tag.kind, BlockTagKind::Danger);
        assert_eq!(tag.header, None);
    }

    #[test]
    fn test_parse_unknown_tag() {
        let err = TagInvocation::parse("caution", "", "body").unwrap_err();
        assert!(matches!(&err, RenderError::UnknownTag(name) if name == "caution"));
        assert_eq!(err.to_string(), "unknown block tag: caution");
    }

    #[test]
    fn test_parse_then_render_with_empty_markup() {
        let tag = TagInvocation::parse("accordion", "", "text").unwrap();
        assert_eq!(tag.header, Some(""));
        let html = BlockTagRenderer::new(&identity).render(&tag).unwrap();
        assert!(html.contains("<strong></strong>"));
    }
}
