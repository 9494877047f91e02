//! Behaviour shared by every widget: identity, user markup and the optional ripple.

use crate::{
	error::MdcResult,
	mdc::{ripple::Ripple, MdcWidget},
	node::{Element, Markup},
};
use tracing::{instrument, warn};

/// Widget-independent configuration.
#[derive(Debug, Clone, Default)]
pub struct Props {
	/// Rendered as the root's `id` attribute.
	pub id: Option<String>,
	/// Attach an `MDCRipple` to the root while mounted.
	pub ripple: bool,
	/// Extra classes, attributes, properties and listeners for the root.
	pub markup: Markup,
}

/// Composed into each widget. Owns the ripple handle.
#[derive(Debug, Default)]
pub struct WidgetBase {
	props: Props,
	ripple: Option<Ripple>,
}
impl WidgetBase {
	#[must_use]
	pub fn new(props: Props) -> Self {
		Self { props, ripple: None }
	}

	#[must_use]
	pub fn props(&self) -> &Props {
		&self.props
	}

	pub fn props_mut(&mut self) -> &mut Props {
		&mut self.props
	}

	/// Applies identity and user markup to a widget's root element.
	#[must_use]
	pub fn render(&self, mut root: Element) -> Element {
		if let Some(id) = &self.props.id {
			root.set_attribute("id", id.as_str());
		}
		self.props.markup.apply(&mut root);
		root
	}

	/// Starts the ripple on `root` if enabled. Re-mounting replaces a previous ripple.
	#[instrument(skip(self, root), fields(ripple = self.props.ripple))]
	pub fn mount(&mut self, root: &web_sys::Element) -> MdcResult<()> {
		if !self.props.ripple {
			return Ok(());
		}
		self.unmount();
		let mut ripple = Ripple::new();
		ripple.start(root)?;
		self.ripple = Some(ripple);
		Ok(())
	}

	#[instrument(skip(self))]
	pub fn unmount(&mut self) {
		if let Some(mut ripple) = self.ripple.take() {
			if let Err(error) = ripple.stop() {
				warn!("Failed to stop ripple: {}", error)
			}
		}
	}

	#[must_use]
	pub fn has_ripple(&self) -> bool {
		self.ripple.as_ref().map_or(false, MdcWidget::is_started)
	}

	/// A base with the same props and no live ripple, for [`Component::copy`](`crate::Component::copy`).
	#[must_use]
	pub fn copy(&self) -> Self {
		Self::new(self.props.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::elem;

	#[test]
	fn render_applies_id_then_markup() {
		let base = WidgetBase::new(Props {
			id: Some("nav".to_owned()),
			ripple: true,
			markup: Markup::new().class("extra").attr("id", "overridden"),
		});
		let root = base.render(elem::div().class("mdc-thing"));
		assert_eq!(root.classes(), &["mdc-thing", "extra"]);
		assert_eq!(root.attribute("id"), Some("overridden"));
		assert!(!base.has_ripple());
	}

	#[test]
	fn copy_keeps_props() {
		let base = WidgetBase::new(Props {
			id: Some("a".to_owned()),
			..Props::default()
		});
		assert_eq!(base.copy().props().id.as_deref(), Some("a"));
	}
}
