//! `callout tags` command implementation.

use callout_renderer::BlockTagKind;

use crate::error::CliError;
use crate::output::Output;

/// Print every registered block tag with its closing tag.
pub(crate) fn execute() -> Result<(), CliError> {
    let output = Output::new();
    for kind in BlockTagKind::ALL {
        output.row(kind.tag_name(), &describe(kind))?;
    }
    Ok(())
}

fn describe(kind: BlockTagKind) -> String {
    let usage = if kind.takes_header() { " <header>" } else { "" };
    let container = match kind.admonition() {
        Some(style) => format!("div.alert.alert-{}", style.class),
        None => "details".to_owned(),
    };
    format!(
        "{{% {}{usage} %}} ... {{% {} %}}  ->  {container}",
        kind.tag_name(),
        kind.end_tag_name()
    )
}
