//! Nodes produced by role handlers.

use std::fmt::Write;

use super::RoleOptions;
use crate::html::{escape_attr, escape_html};

/// A renderable element returned for one role occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Hyperlink to an external target.
    Reference(Reference),
    /// Placeholder for an occurrence that could not be resolved.
    Problematic(Problematic),
}

/// External hyperlink node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    /// Original occurrence, kept for diagnostics.
    pub raw_text: String,
    /// Link text.
    pub text: String,
    /// Target URI.
    pub refuri: String,
    /// Options passed through from the role occurrence.
    pub options: RoleOptions,
}

/// Placeholder rendered in place of a failed occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problematic {
    /// Original occurrence, rendered verbatim.
    pub raw_text: String,
    /// Message explaining why the occurrence was rejected.
    pub message: String,
}

impl Node {
    /// Create a reference node.
    #[must_use]
    pub fn reference(
        raw_text: impl Into<String>,
        text: impl Into<String>,
        refuri: impl Into<String>,
        options: RoleOptions,
    ) -> Self {
        Self::Reference(Reference {
            raw_text: raw_text.into(),
            text: text.into(),
            refuri: refuri.into(),
            options,
        })
    }

    /// Create a problematic node.
    #[must_use]
    pub fn problematic(raw_text: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Problematic(Problematic {
            raw_text: raw_text.into(),
            message: message.into(),
        })
    }

    /// Render the node as inline HTML.
    ///
    /// # Example
    ///
    /// ```
    /// use apiref_renderer::role::{Node, RoleOptions};
    ///
    /// let node = Node::reference(":r[x]", "x", "https://example.com/x", RoleOptions::parse(".api"));
    /// assert_eq!(
    ///     node.to_html(),
    ///     r#"<a class="reference external api" href="https://example.com/x">x</a>"#
    /// );
    /// ```
    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            Self::Reference(reference) => reference.to_html(),
            Self::Problematic(problematic) => problematic.to_html(),
        }
    }
}

impl Reference {
    fn to_html(&self) -> String {
        let mut html = String::with_capacity(self.refuri.len() + self.text.len() + 64);
        html.push_str("<a");

        if let Some(id) = &self.options.id {
            let _ = write!(html, r#" id="{}""#, escape_attr(id));
        }

        html.push_str(r#" class="reference external"#);
        for class in &self.options.classes {
            html.push(' ');
            html.push_str(&escape_attr(class));
        }
        html.push('"');

        let _ = write!(html, r#" href="{}""#, escape_attr(&self.refuri));

        for (key, value) in &self.options.attrs {
            if key == "href" || key == "id" {
                continue;
            }
            let _ = write!(html, r#" {}="{}""#, escape_attr(key), escape_attr(value));
        }

        let _ = write!(html, ">{}</a>", escape_html(&self.text));
        html
    }
}

impl Problematic {
    fn to_html(&self) -> String {
        format!(
            r#"<span class="problematic" title="{}">{}</span>"#,
            escape_attr(&self.message),
            escape_html(&self.raw_text)
        )
    }
}
