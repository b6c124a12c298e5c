//! Block tags for static-site templates: accordions and admonitions.
//!
//! Each tag wraps a block of markdown in a styled HTML container. The body is
//! converted by a host-supplied [`MarkdownConverter`] and interpolated into a
//! fixed template for the tag kind.
//!
//! | Tag         | Container                   |
//! |-------------|-----------------------------|
//! | `accordion` | collapsible `<details>`     |
//! | `info`      | `div.alert.alert-info`      |
//! | `tip`       | `div.alert.alert-success`   |
//! | `warning`   | `div.alert.alert-warning`   |
//! | `danger`    | `div.alert.alert-danger`    |
//!
//! # Example
//!
//! ```
//! use callout_renderer::{BlockTagKind, PulldownConverter, render};
//!
//! let converter = PulldownConverter::new();
//! let html = render(BlockTagKind::Info, None, "Read the **docs**.", &converter).unwrap();
//! assert!(html.contains(r#"class="alert alert-info""#));
//! assert!(html.contains("<strong>docs</strong>"));
//! ```

mod converter;
mod error;
mod kind;
mod render;

pub use converter::{ConvertError, MarkdownConverter, PulldownConverter};
pub use error::RenderError;
pub use kind::{AdmonitionStyle, BlockTagKind};
pub use render::{BlockTagRenderer, MissingHeader, RenderOptions, TagInvocation, render};
