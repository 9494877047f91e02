//! MDC checkbox component.

use crate::{
	base::{Props, WidgetBase},
	elem::{self, svg},
	error::MdcResult,
	mdc::{self, MdcWidget, StateMap, StateMapper},
	node::{Component, ComponentRef, Node, PropertyValue},
};
use std::{
	cell::{Ref, RefCell, RefMut},
	rc::Rc,
};
use tracing::{instrument, trace_span, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckboxState {
	pub checked: bool,
	pub indeterminate: bool,
	pub disabled: bool,
	pub value: String,
}

#[derive(Debug)]
struct CheckboxInner {
	base: WidgetBase,
	state: CheckboxState,
	widget: mdc::checkbox::Checkbox,
}

/// An MDC checkbox. Cloning yields another handle to the same checkbox.
#[derive(Debug, Clone)]
pub struct Checkbox(Rc<RefCell<CheckboxInner>>);
impl Checkbox {
	#[must_use]
	pub fn new(props: Props, state: CheckboxState) -> Self {
		Self(Rc::new(RefCell::new(CheckboxInner {
			base: WidgetBase::new(props),
			state,
			widget: mdc::checkbox::Checkbox::new(),
		})))
	}

	#[must_use]
	pub fn state(&self) -> Ref<'_, CheckboxState> {
		Ref::map(self.0.borrow(), |inner| &inner.state)
	}

	/// Changes only take effect in MDC-Web when the checkbox is (re)started.
	pub fn state_mut(&self) -> RefMut<'_, CheckboxState> {
		RefMut::map(self.0.borrow_mut(), |inner| &mut inner.state)
	}

	#[must_use]
	pub fn is_started(&self) -> bool {
		self.0.borrow().widget.is_started()
	}

	/// Binds the MDC checkbox to `root`, initialised from the current state.
	///
	/// A checkbox that is still started is stopped first.
	#[instrument(skip(self, root))]
	pub fn start(&self, root: &web_sys::Element) -> MdcResult<()> {
		let mut inner = self.0.borrow_mut();
		if inner.widget.is_started() {
			warn!("Checkbox started twice. Restarting it.");
			inner.widget.stop()?;
		}
		let CheckboxState {
			checked,
			indeterminate,
			disabled,
			value,
		} = inner.state.clone();
		let widget = &mut inner.widget;
		widget.checked = checked;
		widget.indeterminate = indeterminate;
		widget.disabled = disabled;
		widget.value = value;
		widget.start(root)
	}

	#[instrument(skip(self))]
	pub fn stop(&self) -> MdcResult<()> {
		self.0.borrow_mut().widget.stop()
	}

	/// Copies the live checkbox state back into [`Checkbox::state`].
	#[instrument(skip(self))]
	pub fn pull_state(&self) -> MdcResult<()> {
		let mut inner = self.0.borrow_mut();
		inner.widget.pull_state()?;
		let widget = &inner.widget;
		let pulled = CheckboxState {
			checked: widget.checked,
			indeterminate: widget.indeterminate,
			disabled: widget.disabled,
			value: widget.value.clone(),
		};
		inner.state = pulled;
		Ok(())
	}

	#[must_use]
	pub fn copy_checkbox(&self) -> Self {
		let inner = self.0.borrow();
		Self::new(inner.base.props().clone(), inner.state.clone())
	}
}
impl StateMapper for Checkbox {
	fn state_map(&self) -> StateMap {
		let state = self.state();
		StateMap::new()
			.with("checked", state.checked)
			.with("indeterminate", state.indeterminate)
			.with("disabled", state.disabled)
			.with("value", state.value.as_str())
	}
}
impl Component for Checkbox {
	fn render(&self) -> Node {
		let inner = self.0.borrow();
		let state = &inner.state;
		let span = trace_span!("Rendering checkbox", checked = state.checked, indeterminate = state.indeterminate, disabled = state.disabled);
		let _enter = span.enter();

		let mut input = elem::input()
			.attr("type", "checkbox")
			.class("mdc-checkbox__native-control")
			.property("checked", PropertyValue::Bool(state.checked))
			.property("indeterminate", PropertyValue::Bool(state.indeterminate));
		if state.disabled {
			input.set_attribute("disabled", "");
		}
		if !state.value.is_empty() {
			input.set_attribute("value", state.value.as_str());
		}

		let background = elem::div()
			.class("mdc-checkbox__background")
			.child(
				svg::svg().class("mdc-checkbox__checkmark").attr("viewBox", "0 0 24 24").child(
					svg::path()
						.class("mdc-checkbox__checkmark-path")
						.attr("fill", "none")
						.attr("stroke", "white")
						.attr("d", "M1.73,12.91 8.1,19.28 22.79,4.59"),
				),
			)
			.child(elem::div().class("mdc-checkbox__mixedmark"));

		let root = elem::div()
			.class("mdc-checkbox")
			.class_if(state.disabled, "mdc-checkbox--disabled")
			.child(input)
			.child(background);
		inner.base.render(root).into()
	}

	fn mount(&self, root: &web_sys::Element) -> MdcResult<()> {
		self.0.borrow_mut().base.mount(root)?;
		self.start(root)
	}

	fn unmount(&self) {
		if let Err(error) = self.stop() {
			warn!("Failed to stop checkbox: {}", error)
		}
		self.0.borrow_mut().base.unmount()
	}

	fn copy(&self) -> Option<ComponentRef> {
		Some(Rc::new(self.copy_checkbox()))
	}

	fn kind(&self) -> &'static str {
		"checkbox"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{mdc::StateValue, node::Element, Namespace};

	fn render_element(checkbox: &Checkbox) -> Element {
		match checkbox.render() {
			Node::Element(element) => element,
			other => panic!("expected an element, got {:?}", other),
		}
	}

	#[test]
	fn markup() {
		let checkbox = Checkbox::new(
			Props::default(),
			CheckboxState {
				checked: true,
				disabled: true,
				value: "newsletter".to_owned(),
				..CheckboxState::default()
			},
		);
		let root = render_element(&checkbox);
		assert!(root.has_class("mdc-checkbox"));
		assert!(root.has_class("mdc-checkbox--disabled"));

		let input = root.children()[0].as_element().unwrap();
		assert_eq!(input.tag(), "input");
		assert_eq!(input.attribute("type"), Some("checkbox"));
		assert_eq!(input.attribute("value"), Some("newsletter"));
		assert!(input.attribute("disabled").is_some());
		assert!(input.properties().iter().any(|(name, value)| name == "checked" && *value == PropertyValue::Bool(true)));

		let background = root.children()[1].as_element().unwrap();
		let checkmark = background.children()[0].as_element().unwrap();
		assert_eq!(checkmark.namespace(), Namespace::Svg);
		assert_eq!(checkmark.children()[0].as_element().unwrap().namespace(), Namespace::Svg);
	}

	#[test]
	fn state_map_follows_state() {
		let checkbox = Checkbox::new(Props::default(), CheckboxState::default());
		checkbox.state_mut().indeterminate = true;
		let state = checkbox.state_map();
		assert_eq!(state.get("indeterminate"), Some(&StateValue::Bool(true)));
		assert_eq!(state.get("checked"), Some(&StateValue::Bool(false)));
		assert_eq!(state.len(), 4);
	}

	#[test]
	fn stop_without_start() {
		let checkbox = Checkbox::new(Props::default(), CheckboxState::default());
		assert_eq!(checkbox.stop(), Ok(()));
		assert!(!checkbox.is_started());
	}
}
