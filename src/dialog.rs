//! MDC dialog component.

use crate::{
	base::{Props, WidgetBase},
	elem,
	error::MdcResult,
	mdc::{self, MdcWidget},
	node::{Component, ComponentRef, Element, Node},
};
use std::{
	cell::{Ref, RefCell, RefMut},
	rc::Rc,
};
use tracing::{instrument, trace_span, warn};

#[derive(Debug, Clone, Default)]
pub struct DialogState {
	/// Shown as soon as the dialog is mounted.
	pub open: bool,
	pub title: Option<Node>,
	pub body: Option<Node>,
	pub scrollable: bool,
	/// Label of the accept button. No button is rendered if `None`.
	pub accept: Option<Node>,
	/// Label of the cancel button. No button is rendered if `None`.
	pub cancel: Option<Node>,
}

#[derive(Debug)]
struct DialogInner {
	base: WidgetBase,
	state: DialogState,
	widget: mdc::dialog::Dialog,
}

/// An MDC dialog. Cloning yields another handle to the same dialog.
#[derive(Debug, Clone)]
pub struct Dialog(Rc<RefCell<DialogInner>>);
impl Dialog {
	#[must_use]
	pub fn new(props: Props, state: DialogState) -> Self {
		Self(Rc::new(RefCell::new(DialogInner {
			base: WidgetBase::new(props),
			state,
			widget: mdc::dialog::Dialog::new(),
		})))
	}

	#[must_use]
	pub fn state(&self) -> Ref<'_, DialogState> {
		Ref::map(self.0.borrow(), |inner| &inner.state)
	}

	pub fn state_mut(&self) -> RefMut<'_, DialogState> {
		RefMut::map(self.0.borrow_mut(), |inner| &mut inner.state)
	}

	#[must_use]
	pub fn is_started(&self) -> bool {
		self.0.borrow().widget.is_started()
	}

	/// Whether MDC-Web currently shows the dialog, falling back to the stored state while unmounted.
	#[must_use]
	pub fn is_open(&self) -> bool {
		let inner = self.0.borrow();
		if inner.widget.is_started() {
			inner.widget.is_open()
		} else {
			inner.state.open
		}
	}

	/// # Errors
	///
	/// [`MdcError::NotStarted`](`crate::MdcError::NotStarted`) while unmounted,
	/// [`MdcError::Exception`](`crate::MdcError::Exception`) if MDC-Web throws.
	#[instrument(skip(self))]
	pub fn open(&self) -> MdcResult<()> {
		let mut inner = self.0.borrow_mut();
		inner.widget.open()?;
		inner.state.open = true;
		Ok(())
	}

	/// # Errors
	///
	/// As for [`Dialog::open`].
	#[instrument(skip(self))]
	pub fn close(&self) -> MdcResult<()> {
		let mut inner = self.0.borrow_mut();
		inner.widget.close()?;
		inner.state.open = false;
		Ok(())
	}

	#[must_use]
	pub fn copy_dialog(&self) -> Self {
		let inner = self.0.borrow();
		Self::new(inner.base.props().clone(), inner.state.clone())
	}

	fn label_ids(&self) -> Option<(String, String)> {
		let inner = self.0.borrow();
		inner.base.props().id.as_ref().map(|id| (format!("{}-label", id), format!("{}-description", id)))
	}
}

fn footer_button(label: &Node, modifier: &'static str) -> Element {
	elem::button()
		.attr("type", "button")
		.class("mdc-button")
		.class("mdc-dialog__footer__button")
		.class(modifier)
		.child(label.clone())
}

impl Component for Dialog {
	fn render(&self) -> Node {
		let ids = self.label_ids();
		let inner = self.0.borrow();
		let state = &inner.state;
		let span = trace_span!("Rendering dialog", open = state.open);
		let _enter = span.enter();

		let mut surface = elem::div().class("mdc-dialog__surface");

		if let Some(title) = &state.title {
			let mut heading = elem::heading2().class("mdc-dialog__header__title").child(title.clone());
			if let Some((label, _)) = &ids {
				heading.set_attribute("id", label.as_str());
			}
			surface.push_child(elem::header().class("mdc-dialog__header").child(heading));
		}

		if let Some(body) = &state.body {
			let mut section = elem::section()
				.class("mdc-dialog__body")
				.class_if(state.scrollable, "mdc-dialog__body--scrollable")
				.child(body.clone());
			if let Some((_, description)) = &ids {
				section.set_attribute("id", description.as_str());
			}
			surface.push_child(section);
		}

		if state.cancel.is_some() || state.accept.is_some() {
			let footer = elem::footer()
				.class("mdc-dialog__footer")
				.optional_child(state.cancel.as_ref().map(|label| footer_button(label, "mdc-dialog__footer__button--cancel")))
				.optional_child(state.accept.as_ref().map(|label| footer_button(label, "mdc-dialog__footer__button--accept")));
			surface.push_child(footer);
		}

		let mut root = elem::aside()
			.class("mdc-dialog")
			.attr("role", "alertdialog")
			.child(surface)
			.child(elem::div().class("mdc-dialog__backdrop"));
		if let Some((label, description)) = ids {
			if state.title.is_some() {
				root.set_attribute("aria-labelledby", label);
			}
			if state.body.is_some() {
				root.set_attribute("aria-describedby", description);
			}
		}
		inner.base.render(root).into()
	}

	fn mount(&self, root: &web_sys::Element) -> MdcResult<()> {
		let mut inner = self.0.borrow_mut();
		inner.base.mount(root)?;
		if inner.widget.is_started() {
			warn!("Dialog mounted twice. Restarting it.");
			inner.widget.stop()?;
		}
		let open = inner.state.open;
		inner.widget.open = open;
		inner.widget.start(root)
	}

	fn unmount(&self) {
		let mut inner = self.0.borrow_mut();
		if let Err(error) = inner.widget.stop() {
			warn!("Failed to stop dialog: {}", error)
		}
		inner.base.unmount()
	}

	fn copy(&self) -> Option<ComponentRef> {
		Some(Rc::new(self.copy_dialog()))
	}

	fn kind(&self) -> &'static str {
		"dialog"
	}
}
