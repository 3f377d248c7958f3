//! Links class names in documentation to ApiGen API reference pages.
//!
//! The crate provides the `apiclass` inline role. Written as
//! `:apiclass[CSVelte\Reader]` in a markdown document, it renders as a link
//! titled `class CSVelte.Reader` pointing at
//! `<apigen_docs_uri>/class-CSVelte.Reader.html`.
//!
//! - [`resolve`], [`normalize_class_name`], [`build_url`]: the resolution steps
//!   as plain functions
//! - [`ApiClassRole`]: the role handler, registered explicitly on an
//!   [`apiref_renderer::role::RoleProcessor`]
//!
//! A token that normalizes to an empty class name is reported and rendered as
//! a problematic placeholder. A missing `apigen_docs_uri` stops the document
//! with an error instead of producing broken links.

mod resolver;
mod role;

pub use resolver::{
    CONFIG_KEY, ResolutionError, ResolvedLink, TYPE_TAG, build_url, display_text,
    normalize_class_name, resolve,
};
pub use role::{ApiClassRole, ROLE_NAME};
