//! Turns [`Node`] trees into live DOM and runs component lifecycle hooks.

use crate::{
	error::{MdcError, MdcResult},
	node::{ComponentRef, Element, EventListener, Node, PropertyValue},
};
use core::fmt::{self, Debug, Formatter};
use js_sys::Reflect;
use std::borrow::Cow;
use tracing::{error, instrument, trace, trace_span, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

struct BoundListener {
	target: web_sys::Element,
	name: Cow<'static, str>,
	closure: Closure<dyn Fn(web_sys::Event)>,
}

/// Owns the DOM created for one [`Node`] tree below a parent element.
///
/// Event listener closures live as long as the [`Mount`]. Dropping it has the same effect as [`Mount::unmount`].
///
/// # Lifecycle
///
/// [`Component::mount`](`crate::Component::mount`) runs once a component's rendered root element exists,
/// so nested components are mounted before the components that contain them.
/// [`Component::unmount`](`crate::Component::unmount`) runs in the same order, children before parents,
/// and before any node is removed.
pub struct Mount {
	parent: web_sys::Element,
	document: web_sys::Document,
	nodes: Vec<web_sys::Node>,
	components: Vec<ComponentRef>,
	listeners: Vec<BoundListener>,
}
impl Debug for Mount {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Mount")
			.field("parent", &self.parent)
			.field("nodes", &self.nodes.len())
			.field("components", &self.components.iter().map(|component| component.kind()).collect::<Vec<_>>())
			.field("listeners", &self.listeners.len())
			.finish()
	}
}
impl Mount {
	/// Appends the DOM for `node` to `parent`'s child nodes.
	///
	/// # Errors
	///
	/// If creating any part of the DOM or any component mount hook fails, the whole tree is still built first.
	/// It is then unmounted again and the first error is returned.
	#[instrument(skip(parent, node))]
	pub fn new(parent: web_sys::Element, node: Node) -> MdcResult<Self> {
		let document = parent.owner_document().ok_or(MdcError::Dom {
			operation: "ownerDocument",
			message: "parent element is not part of a document".to_owned(),
		})?;
		let mut mount = Self {
			parent,
			document,
			nodes: Vec::new(),
			components: Vec::new(),
			listeners: Vec::new(),
		};
		mount.build(&node)?;
		Ok(mount)
	}

	#[must_use]
	pub fn parent(&self) -> &web_sys::Element {
		&self.parent
	}

	/// The DOM nodes created directly below [`Mount::parent`].
	#[must_use]
	pub fn nodes(&self) -> &[web_sys::Node] {
		&self.nodes
	}

	/// Runs unmount hooks, then removes the created nodes and listeners.
	#[instrument(skip(self))]
	pub fn unmount(mut self) {
		self.teardown()
	}

	/// Replaces the mounted tree with `node`.
	///
	/// # Errors
	///
	/// As for [`Mount::new`]. The mount is left empty on error.
	#[instrument(skip(self, node))]
	pub fn remount(&mut self, node: Node) -> MdcResult<()> {
		self.teardown();
		self.build(&node)
	}

	fn build(&mut self, node: &Node) -> MdcResult<()> {
		let mut first_error = None;
		let parent: web_sys::Node = self.parent.clone().into();
		self.create(node, &parent, true, &mut first_error);
		match first_error {
			None => Ok(()),
			Some(error) => {
				self.teardown();
				Err(error)
			}
		}
	}

	/// Returns the first element created for `node`, which is what a component's mount hook receives.
	fn create(&mut self, node: &Node, parent: &web_sys::Node, top_level: bool, first_error: &mut Option<MdcError>) -> Option<web_sys::Element> {
		match node {
			Node::Element(element) => {
				let span = trace_span!("Creating element", tag = element.tag(), namespace = ?element.namespace(), classes = element.classes().len());
				let _enter = span.enter();

				let dom_element = match self.create_element(element) {
					Ok(dom_element) => dom_element,
					Err(error) => {
						error!("Failed to create <{}>: {}", element.tag(), error);
						first_error.get_or_insert(error);
						return None;
					}
				};
				if let Err(error) = self.append(parent, dom_element.as_ref(), top_level) {
					error!("Failed to insert <{}>: {}", element.tag(), error);
					first_error.get_or_insert(error);
					return None;
				}

				let dom_parent: web_sys::Node = dom_element.clone().into();
				for child in element.children() {
					self.create(child, &dom_parent, false, first_error);
				}
				Some(dom_element)
			}

			Node::Text(text) => {
				let span = if cfg!(feature = "dangerous-logging") {
					trace_span!("Creating text node", text = text.as_ref())
				} else {
					trace_span!("Creating text node", len = text.len())
				};
				let _enter = span.enter();

				let dom_text = self.document.create_text_node(text);
				if let Err(error) = self.append(parent, dom_text.as_ref(), top_level) {
					error!("Failed to insert text node: {}", error);
					first_error.get_or_insert(error);
				}
				None
			}

			Node::Component(component) => {
				let span = trace_span!("Creating component", kind = component.kind());
				let _enter = span.enter();

				let rendered = component.render();
				let root = self.create(&rendered, parent, top_level, first_error);
				match &root {
					Some(root) => {
						if let Err(error) = component.mount(root) {
							error!("Failed to mount {}: {}", component.kind(), error);
							first_error.get_or_insert(error);
						}
						self.components.push(component.clone());
					}
					None => warn!("{} rendered no element. Skipping its mount hook.", component.kind()),
				}
				root
			}

			Node::Fragment(nodes) => {
				let span = trace_span!("Creating fragment", len = nodes.len());
				let _enter = span.enter();

				let mut first = None;
				for node in nodes {
					let created = self.create(node, parent, top_level, first_error);
					if first.is_none() {
						first = created;
					}
				}
				first
			}
		}
	}

	fn create_element(&mut self, element: &Element) -> MdcResult<web_sys::Element> {
		let dom_element = match element.namespace().uri() {
			None => self.document.create_element(element.tag()),
			Some(uri) => self.document.create_element_ns(Some(uri), element.tag()),
		}
		.map_err(|thrown| MdcError::dom("createElement", &thrown))?;

		for class in element.classes() {
			dom_element.class_list().add_1(class).map_err(|thrown| MdcError::dom("classList.add", &thrown))?;
		}

		for (name, value) in element.attributes() {
			if cfg!(feature = "dangerous-logging") {
				trace!(name = name.as_ref(), value = value.as_str(), "Setting attribute.");
			}
			dom_element.set_attribute(name, value).map_err(|thrown| MdcError::dom("setAttribute", &thrown))?;
		}

		for (name, value) in element.properties() {
			let value = match value {
				PropertyValue::Bool(value) => JsValue::from_bool(*value),
				PropertyValue::Text(value) => JsValue::from_str(value),
				PropertyValue::Number(value) => JsValue::from_f64(*value),
			};
			Reflect::set(&dom_element, &JsValue::from_str(name), &value).map_err(|thrown| MdcError::dom("set property", &thrown))?;
		}

		for EventListener { name, callback } in element.listeners() {
			let callback = callback.clone();
			let closure = Closure::wrap(Box::new(move |event: web_sys::Event| callback(&event)) as Box<dyn Fn(web_sys::Event)>);
			dom_element
				.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
				.map_err(|thrown| MdcError::dom("addEventListener", &thrown))?;
			self.listeners.push(BoundListener {
				target: dom_element.clone(),
				name: name.clone(),
				closure,
			});
		}

		Ok(dom_element)
	}

	fn append(&mut self, parent: &web_sys::Node, child: &web_sys::Node, top_level: bool) -> MdcResult<()> {
		parent.append_child(child).map_err(|thrown| MdcError::dom("appendChild", &thrown))?;
		if top_level {
			self.nodes.push(child.clone());
		}
		Ok(())
	}

	fn teardown(&mut self) {
		for component in self.components.drain(..) {
			let span = trace_span!("Unmounting component", kind = component.kind());
			let _enter = span.enter();
			component.unmount()
		}

		for BoundListener { target, name, closure } in self.listeners.drain(..) {
			if let Err(error) = target.remove_event_listener_with_callback(&name, closure.as_ref().unchecked_ref()) {
				error!("Failed to remove {:?} listener: {:?}", name, error)
			}
		}

		for node in self.nodes.drain(..) {
			match node.parent_node() {
				Some(parent) => {
					if let Err(error) = parent.remove_child(&node) {
						error!("Failed to remove the node: {:?}", error)
					}
				}
				None => error!("Could not find parent node of node to remove. Ignoring."),
			}
		}
	}
}
impl Drop for Mount {
	fn drop(&mut self) {
		self.teardown()
	}
}
