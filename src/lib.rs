#![doc(html_root_url = "https://docs.rs/mdc-dom/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod base;
#[cfg(test)]
mod capture;
pub mod checkbox;
pub mod dialog;
pub mod dom;
pub mod drawer;
pub mod elem;
pub mod error;
pub mod list;
pub mod mdc;
pub mod node;

pub use base::Props;
pub use dom::Mount;
pub use error::{MdcError, MdcResult};
pub use node::{Applyer, Callback, Component, ComponentRef, Element, Markup, Namespace, Node, PropertyValue};
