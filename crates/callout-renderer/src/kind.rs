//! Tag kinds and the admonition style table.

/// Kind of block tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockTagKind {
    /// Collapsible `<details>` block with a bold summary header.
    Accordion,
    /// Informational callout.
    Info,
    /// Helpful hint.
    Tip,
    /// Something the reader should be careful about.
    Warning,
    /// Something that can break things or lose data.
    Danger,
}

/// Fixed presentation of an admonition kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdmonitionStyle {
    /// Modifier appended to `alert-` in the container class.
    pub class: &'static str,
    /// Icon element class list.
    pub icon: &'static str,
    /// Bold label shown before the body.
    pub label: &'static str,
}

const INFO: AdmonitionStyle = AdmonitionStyle {
    class: "info",
    icon: "fa fa-info-circle",
    label: "Info",
};

const TIP: AdmonitionStyle = AdmonitionStyle {
    class: "success",
    icon: "fa fa-lightbulb",
    label: "Tip",
};

const WARNING: AdmonitionStyle = AdmonitionStyle {
    class: "warning",
    icon: "fa fa-exclamation-triangle",
    label: "Warning",
};

const DANGER: AdmonitionStyle = AdmonitionStyle {
    class: "danger",
    icon: "fa fa-exclamation-circle",
    label: "Danger",
};

impl BlockTagKind {
    /// All kinds, in registration order.
    pub const ALL: [Self; 5] = [
        Self::Accordion,
        Self::Info,
        Self::Tip,
        Self::Warning,
        Self::Danger,
    ];

    /// Look up a kind by its registered tag name (`accordion`, `info`, ...).
    ///
    /// # Example
    ///
    /// ```
    /// use callout_renderer::BlockTagKind;
    ///
    /// assert_eq!(BlockTagKind::from_tag_name("tip"), Some(BlockTagKind::Tip));
    /// assert_eq!(BlockTagKind::from_tag_name("note"), None);
    /// ```
    #[must_use]
    pub fn from_tag_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag_name() == name)
    }

    /// Name of the opening tag.
    #[must_use]
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::Accordion => "accordion",
            Self::Info => "info",
            Self::Tip => "tip",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// Name of the closing tag.
    #[must_use]
    pub const fn end_tag_name(self) -> &'static str {
        match self {
            Self::Accordion => "endaccordion",
            Self::Info => "endinfo",
            Self::Tip => "endtip",
            Self::Warning => "endwarning",
            Self::Danger => "enddanger",
        }
    }

    /// Whether the tag takes a header from its markup.
    #[must_use]
    pub const fn takes_header(self) -> bool {
        matches!(self, Self::Accordion)
    }

    /// Style of an admonition kind, or `None` for [`Accordion`](Self::Accordion).
    #[must_use]
    pub const fn admonition(self) -> Option<AdmonitionStyle> {
        match self {
            Self::Accordion => None,
            Self::Info => Some(INFO),
            Self::Tip => Some(TIP),
            Self::Warning => Some(WARNING),
            Self::Danger => Some(DANGER),
        }
    }
}

impl std::fmt::Display for BlockTagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag_name())
    }
}
