//! MDC navigation drawers.

use crate::{
	base::{Props, WidgetBase},
	elem,
	error::MdcResult,
	mdc::{self, MdcWidget},
	node::{Component, ComponentRef, Element, Markup, Node},
};
use std::{
	cell::{Ref, RefCell, RefMut},
	rc::Rc,
};
use tracing::{instrument, trace, trace_span, warn};

/// The three mutually exclusive drawer variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawerType {
	Temporary,
	Persistent,
	Permanent,
}
impl Default for DrawerType {
	fn default() -> Self {
		Self::Temporary
	}
}
impl DrawerType {
	#[must_use]
	pub fn class(self) -> &'static str {
		match self {
			DrawerType::Temporary => "mdc-drawer--temporary",
			DrawerType::Persistent => "mdc-drawer--persistent",
			DrawerType::Permanent => "mdc-drawer--permanent",
		}
	}

	/// The scripted MDC class, if this variant has one.
	#[must_use]
	pub fn component_type(self) -> Option<mdc::ComponentType> {
		match self {
			DrawerType::Temporary => Some(mdc::drawer::TEMPORARY),
			DrawerType::Persistent => Some(mdc::drawer::PERSISTENT),
			DrawerType::Permanent => None,
		}
	}
}

/// Replaces or extends the built-in root element.
#[derive(Debug, Clone)]
pub enum DrawerRoot {
	/// Applied to the built-in root.
	Markup(Markup),
	/// Rendered inside a plain `<div>` instead of the whole built-in structure. No classes, no widget.
	Element(Node),
}

#[derive(Debug, Clone, Default)]
pub struct DrawerState {
	pub root: Option<DrawerRoot>,
	pub kind: DrawerType,
	pub open: bool,
	pub toolbar_spacer: Option<Element>,
	/// Gets `mdc-drawer__header-content` on first render, and is then kept in that form.
	pub header: Option<Element>,
	pub content: Option<Node>,
}

#[derive(Debug)]
struct DrawerInner {
	base: WidgetBase,
	state: DrawerState,
	widget: Option<mdc::drawer::Drawer>,
}
impl DrawerInner {
	/// Lazily creates the widget handle and sets the variant classes on the built-in root.
	fn apply(&mut self, root: &mut Element) {
		let kind = self.state.kind;

		if let Some(widget) = &self.widget {
			if Some(widget.component().kind()) != kind.component_type() {
				trace!("Drawer type changed to {:?}. Dropping the old widget handle.", kind);
				self.drop_widget();
			}
		}

		if self.widget.is_none() {
			let widget = match kind {
				DrawerType::Permanent => None,
				DrawerType::Temporary => Some(mdc::drawer::Drawer::temporary()),
				DrawerType::Persistent => Some(mdc::drawer::Drawer::persistent()),
			};
			let open = self.state.open;
			self.widget = widget.map(|mut widget| {
				trace!(open, "Created {:?} drawer widget handle.", kind);
				widget.open = open;
				widget
			});
		}

		root.add_class("mdc-drawer");
		if self.state.open {
			root.add_class("mdc-drawer--open");
		}
		root.add_class(kind.class());
	}

	/// Stops the widget handle if it is live, then forgets it.
	fn drop_widget(&mut self) {
		if let Some(mut widget) = self.widget.take() {
			if let Err(error) = widget.stop() {
				warn!("Failed to stop dropped drawer widget: {}", error)
			}
		}
	}

	/// Toolbar spacer, header and content, each only if present, in that order.
	fn render_body(&mut self) -> Vec<Node> {
		let mut body: Vec<Node> = Vec::with_capacity(3);

		if let Some(spacer) = &self.state.toolbar_spacer {
			body.push(
				elem::div()
					.class("mdc-drawer__toolbar-spacer")
					.child(spacer.clone().class("mdc-drawer__toolbar-spacer"))
					.into(),
			);
		}

		if let Some(header) = self.state.header.take() {
			let header = header.class("mdc-drawer__header-content");
			body.push(elem::header().class("mdc-drawer__header").child(header.clone()).into());
			self.state.header = Some(header);
		}

		if let Some(content) = &self.state.content {
			body.push(elem::navigation().class("mdc-drawer__content").child(content.clone()).into());
		}

		body
	}
}

/// An MDC drawer. Cloning yields another handle to the same drawer.
#[derive(Debug, Clone)]
pub struct Drawer(Rc<RefCell<DrawerInner>>);
impl Drawer {
	#[must_use]
	pub fn new(props: Props, state: DrawerState) -> Self {
		Self(Rc::new(RefCell::new(DrawerInner {
			base: WidgetBase::new(props),
			state,
			widget: None,
		})))
	}

	#[must_use]
	pub fn state(&self) -> Ref<'_, DrawerState> {
		Ref::map(self.0.borrow(), |inner| &inner.state)
	}

	pub fn state_mut(&self) -> RefMut<'_, DrawerState> {
		RefMut::map(self.0.borrow_mut(), |inner| &mut inner.state)
	}

	/// Whether a widget handle exists. Only after the first render of a temporary or persistent drawer.
	#[must_use]
	pub fn has_widget(&self) -> bool {
		self.0.borrow().widget.is_some()
	}

	#[must_use]
	pub fn is_started(&self) -> bool {
		self.0.borrow().widget.as_ref().map_or(false, MdcWidget::is_started)
	}

	/// The widget handle's own open state, if there is a handle.
	#[must_use]
	pub fn widget_open(&self) -> Option<bool> {
		self.0.borrow().widget.as_ref().map(|widget| widget.open)
	}

	/// Sets `open` and pushes it to the widget handle, live or not.
	#[instrument(skip(self))]
	pub fn set_open(&self, open: bool) -> MdcResult<()> {
		let mut inner = self.0.borrow_mut();
		inner.state.open = open;
		match &mut inner.widget {
			Some(widget) => widget.set_open(open),
			None => Ok(()),
		}
	}

	pub fn open(&self) -> MdcResult<()> {
		self.set_open(true)
	}

	pub fn close(&self) -> MdcResult<()> {
		self.set_open(false)
	}

	#[must_use]
	pub fn copy_drawer(&self) -> Self {
		let inner = self.0.borrow();
		Self(Rc::new(RefCell::new(DrawerInner {
			base: inner.base.copy(),
			state: inner.state.clone(),
			widget: None,
		})))
	}
}
impl Component for Drawer {
	fn render(&self) -> Node {
		let mut inner = self.0.borrow_mut();
		let span = trace_span!("Rendering drawer", kind = ?inner.state.kind, open = inner.state.open);
		let _enter = span.enter();

		if let Some(DrawerRoot::Element(user_root)) = &inner.state.root {
			trace!("User-supplied root element. Skipping the built-in structure.");
			let user_root = user_root.clone();
			inner.drop_widget();
			return elem::div().child(user_root).into();
		}

		let body = inner.render_body();
		let mut root = match inner.state.kind {
			DrawerType::Permanent => elem::navigation().children_from(body),
			DrawerType::Temporary | DrawerType::Persistent => elem::aside().child(elem::navigation().class("mdc-drawer__drawer").children_from(body)),
		};

		inner.apply(&mut root);
		if let Some(DrawerRoot::Markup(markup)) = &inner.state.root {
			markup.apply(&mut root);
		}
		inner.base.render(root).into()
	}

	#[instrument(skip(self, root))]
	fn mount(&self, root: &web_sys::Element) -> MdcResult<()> {
		let mut inner = self.0.borrow_mut();
		inner.base.mount(root)?;
		match &mut inner.widget {
			None => Ok(()),
			Some(widget) => {
				if widget.is_started() {
					warn!("Drawer mounted while its widget was still started. Restarting it.");
					widget.stop()?;
				}
				widget.start(root)
			}
		}
	}

	fn unmount(&self) {
		let mut inner = self.0.borrow_mut();
		if let Some(widget) = &mut inner.widget {
			if let Err(error) = widget.stop() {
				warn!("Failed to stop drawer widget: {}", error)
			}
		}
		inner.base.unmount()
	}

	fn copy(&self) -> Option<ComponentRef> {
		Some(Rc::new(self.copy_drawer()))
	}

	fn kind(&self) -> &'static str {
		"drawer"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn drawer(kind: DrawerType) -> Drawer {
		Drawer::new(
			Props::default(),
			DrawerState {
				kind,
				content: Some(elem::anchor().attr("href", "#").child("Inbox").into()),
				..DrawerState::default()
			},
		)
	}

	fn render_element(drawer: &Drawer) -> Element {
		match drawer.render() {
			Node::Element(element) => element,
			other => panic!("expected an element, got {:?}", other),
		}
	}

	const TYPE_CLASSES: [&str; 3] = ["mdc-drawer--temporary", "mdc-drawer--persistent", "mdc-drawer--permanent"];

	#[test]
	fn permanent_has_a_single_root() {
		let drawer = drawer(DrawerType::Permanent);
		let root = render_element(&drawer);
		assert_eq!(root.tag(), "nav");
		assert!(root.has_class("mdc-drawer"));
		assert_eq!(TYPE_CLASSES.iter().filter(|class| root.has_class(class)).count(), 1);
		assert!(root.has_class("mdc-drawer--permanent"));

		let content = root.children()[0].as_element().unwrap();
		assert!(content.has_class("mdc-drawer__content"));
		assert!(!drawer.has_widget());
	}

	#[test]
	fn temporary_and_persistent_nest_the_drawer() {
		for &(kind, class) in &[(DrawerType::Temporary, "mdc-drawer--temporary"), (DrawerType::Persistent, "mdc-drawer--persistent")] {
			let drawer = drawer(kind);
			let root = render_element(&drawer);
			assert_eq!(root.tag(), "aside");
			assert_eq!(TYPE_CLASSES.iter().filter(|class| root.has_class(class)).count(), 1);
			assert!(root.has_class(class));

			assert_eq!(root.children().len(), 1);
			let inner = root.children()[0].as_element().unwrap();
			assert_eq!(inner.tag(), "nav");
			assert!(inner.has_class("mdc-drawer__drawer"));
			assert!(drawer.has_widget());
		}
	}

	#[test]
	fn open_class_follows_state() {
		let drawer = drawer(DrawerType::Temporary);
		assert!(!render_element(&drawer).has_class("mdc-drawer--open"));
		drawer.state_mut().open = true;
		assert!(render_element(&drawer).has_class("mdc-drawer--open"));
	}

	#[test]
	fn widget_is_seeded_only_on_creation() {
		let drawer = drawer(DrawerType::Persistent);
		drawer.state_mut().open = true;
		render_element(&drawer);
		assert_eq!(drawer.widget_open(), Some(true));

		drawer.state_mut().open = false;
		render_element(&drawer);
		render_element(&drawer);
		assert_eq!(drawer.widget_open(), Some(true));

		drawer.set_open(false).unwrap();
		assert_eq!(drawer.widget_open(), Some(false));
		assert!(!drawer.is_started());
	}

	#[test]
	fn widget_survives_repeated_renders() {
		let drawer = drawer(DrawerType::Temporary);
		drawer.state_mut().open = true;
		render_element(&drawer);

		// A recreated handle would be seeded with `open` again.
		drawer.0.borrow_mut().widget.as_mut().unwrap().open = false;
		for _ in 0..3 {
			render_element(&drawer);
			assert_eq!(drawer.widget_open(), Some(false));
		}
		assert!(drawer.state().open);
	}

	#[test]
	fn changing_type_replaces_the_widget() {
		let drawer = drawer(DrawerType::Temporary);
		render_element(&drawer);
		assert!(drawer.has_widget());

		drawer.state_mut().kind = DrawerType::Permanent;
		render_element(&drawer);
		assert!(!drawer.has_widget());
	}

	#[test]
	fn body_order_and_header_snapshot() {
		let drawer = Drawer::new(
			Props::default(),
			DrawerState {
				toolbar_spacer: Some(elem::div()),
				header: Some(elem::div().child("Account")),
				content: Some(elem::navigation().into()),
				..DrawerState::default()
			},
		);
		let root = render_element(&drawer);
		let body = root.children()[0].as_element().unwrap().children();
		assert_eq!(body.len(), 3);

		let spacer = body[0].as_element().unwrap();
		assert!(spacer.has_class("mdc-drawer__toolbar-spacer"));
		assert!(spacer.children()[0].as_element().unwrap().has_class("mdc-drawer__toolbar-spacer"));

		let header = body[1].as_element().unwrap();
		assert_eq!(header.tag(), "header");
		assert!(header.has_class("mdc-drawer__header"));
		assert!(header.children()[0].as_element().unwrap().has_class("mdc-drawer__header-content"));

		assert!(body[2].as_element().unwrap().has_class("mdc-drawer__content"));

		assert!(drawer.state().header.as_ref().unwrap().has_class("mdc-drawer__header-content"));
	}

	#[test]
	fn absent_parts_are_skipped() {
		let drawer = Drawer::new(Props::default(), DrawerState::default());
		let root = render_element(&drawer);
		assert!(root.children()[0].as_element().unwrap().children().is_empty());
	}

	#[test]
	fn user_root_element_bypasses_everything() {
		let drawer = Drawer::new(
			Props::default(),
			DrawerState {
				root: Some(DrawerRoot::Element(elem::section().class("custom").into())),
				open: true,
				..DrawerState::default()
			},
		);
		let root = render_element(&drawer);
		assert_eq!(root.tag(), "div");
		assert!(root.classes().is_empty());
		assert!(root.children()[0].as_element().unwrap().has_class("custom"));
		assert!(!drawer.has_widget());
	}

	#[test]
	fn switching_to_user_root_drops_the_widget() {
		let drawer = Drawer::new(Props::default(), DrawerState::default());
		render_element(&drawer);
		assert!(drawer.has_widget());

		drawer.state_mut().root = Some(DrawerRoot::Element(elem::section().into()));
		let root = render_element(&drawer);
		assert_eq!(root.tag(), "div");
		assert!(!drawer.has_widget());
		assert!(!drawer.is_started());

		drawer.state_mut().root = None;
		render_element(&drawer);
		assert!(drawer.has_widget());
	}

	#[test]
	fn root_markup_is_merged() {
		let drawer = Drawer::new(
			Props::default(),
			DrawerState {
				root: Some(DrawerRoot::Markup(Markup::new().class("app-drawer").attr("aria-label", "Main"))),
				..DrawerState::default()
			},
		);
		let root = render_element(&drawer);
		assert!(root.has_class("app-drawer"));
		assert!(root.has_class("mdc-drawer"));
		assert_eq!(root.attribute("aria-label"), Some("Main"));
	}

	#[test]
	fn copy_has_no_widget() {
		let drawer = drawer(DrawerType::Temporary);
		render_element(&drawer);
		let copy = drawer.copy_drawer();
		assert!(!copy.has_widget());
		assert_eq!(copy.state().kind, DrawerType::Temporary);
	}
}
