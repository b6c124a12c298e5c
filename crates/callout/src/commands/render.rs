//! `callout render` command implementation.

use std::io::Read;
use std::path::{Path, PathBuf};

use callout_config::{CliSettings, Config, MarkdownConfig, MissingHeaderPolicy};
use callout_renderer::{
    BlockTagRenderer, MissingHeader, PulldownConverter, RenderOptions, TagInvocation,
};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Tag name: accordion, info, tip, warning or danger.
    tag: String,

    /// Tag markup. For accordion this is the summary header.
    markup: Vec<String>,

    /// File containing the tag body (default: read stdin).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover callout.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fail when an accordion has no header (overrides config).
    #[arg(long)]
    strict_headers: bool,

    /// Render an accordion without a header as an empty summary (overrides config).
    #[arg(long, conflicts_with = "strict_headers")]
    no_strict_headers: bool,

    /// Enable verbose output (debug logs on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, reading the body, or rendering fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            strict_headers: self.resolve_strict_headers(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::debug!(path = %path.display(), "Loaded config");
        }

        let body = read_body(self.input.as_deref())?;
        let html = render_tag(&self.tag, &self.markup.join(" "), &body, &config)?;

        Output::new().write(&html)?;
        Ok(())
    }

    /// Resolve `strict_headers` from --strict-headers/--no-strict-headers flags.
    fn resolve_strict_headers(&self) -> Option<bool> {
        if self.strict_headers {
            Some(true)
        } else {
            self.no_strict_headers.then_some(false)
        }
    }
}

/// Read the tag body from a file, or from stdin when no path is given.
fn read_body(input: Option<&Path>) -> Result<String, CliError> {
    if let Some(path) = input {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut body = String::new();
    std::io::stdin().read_to_string(&mut body)?;
    Ok(body)
}

/// Render one tag with the converter and options described by `config`.
fn render_tag(tag: &str, markup: &str, body: &str, config: &Config) -> Result<String, CliError> {
    let converter = converter_from_config(&config.markdown);
    let invocation = TagInvocation::parse(tag, markup, body)?;
    let html = BlockTagRenderer::new(&converter)
        .with_options(render_options_from_config(config))
        .render(&invocation)?;
    Ok(html)
}

/// Build the pulldown-cmark converter from `[markdown]` settings.
fn converter_from_config(markdown: &MarkdownConfig) -> PulldownConverter {
    PulldownConverter::new()
        .with_tables(markdown.tables)
        .with_footnotes(markdown.footnotes)
        .with_strikethrough(markdown.strikethrough)
        .with_tasklists(markdown.tasklists)
        .with_smart_punctuation(markdown.smart_punctuation)
        .with_heading_attributes(markdown.heading_attributes)
}

fn render_options_from_config(config: &Config) -> RenderOptions {
    RenderOptions {
        missing_header: match config.accordion.missing_header {
            MissingHeaderPolicy::Degrade => MissingHeader::Degrade,
            MissingHeaderPolicy::Error => MissingHeader::Error,
        },
    }
}
