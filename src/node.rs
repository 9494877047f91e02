//! The owned markup tree that components render into.

use crate::error::MdcResult;
use core::fmt::{self, Debug, Formatter};
use std::{borrow::Cow, rc::Rc};
use tracing::trace;

/// A shared, type-erased component as stored in markup.
pub type ComponentRef = Rc<dyn Component>;

/// An event callback bound to an element. It receives the raw DOM event.
pub type Callback = Rc<dyn Fn(&web_sys::Event)>;

/// A renderable widget.
///
/// `render` must be pure with regard to the DOM. The hosting [`Mount`](`crate::dom::Mount`)
/// calls [`Component::mount`] once the rendered root exists and [`Component::unmount`] right before removing it.
pub trait Component {
	/// Builds this component's markup from its current state.
	fn render(&self) -> Node;

	/// Post-mount hook, called with the DOM element created for the rendered root.
	fn mount(&self, _root: &web_sys::Element) -> MdcResult<()> {
		Ok(())
	}

	/// Pre-removal hook.
	fn unmount(&self) {}

	/// A deep copy with the same configuration and no live widget handles.
	fn copy(&self) -> Option<ComponentRef> {
		None
	}

	/// Short name used in logs.
	fn kind(&self) -> &'static str {
		"component"
	}
}

/// A markup node. Immutable once handed to the host.
#[derive(Clone)]
pub enum Node {
	Element(Element),
	Text(Cow<'static, str>),
	Component(ComponentRef),
	/// An ordered sequence of sibling nodes without a DOM representation of its own.
	Fragment(Vec<Node>),
}
impl Node {
	#[must_use]
	pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(text.into())
	}

	#[must_use]
	pub fn component(component: impl Component + 'static) -> Self {
		Self::Component(Rc::new(component))
	}

	/// The element this node is, if any.
	#[must_use]
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Node::Element(element) => Some(element),
			_ => None,
		}
	}

	/// Resolves a component node by rendering it, repeatedly, until something else comes out.
	///
	/// Used where the root tag of a child decides how it is laid out.
	#[must_use]
	pub fn resolve(&self) -> Node {
		let mut node = self.clone();
		while let Node::Component(component) = node {
			trace!(kind = component.kind(), "Resolving component child.");
			node = component.render();
		}
		node
	}
}
impl Debug for Node {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Node::Element(element) => element.fmt(f),
			Node::Text(text) => f.debug_tuple("Text").field(text).finish(),
			Node::Component(component) => f.debug_tuple("Component").field(&component.kind()).finish(),
			Node::Fragment(nodes) => f.debug_tuple("Fragment").field(nodes).finish(),
		}
	}
}
impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Self::Element(element)
	}
}
impl From<&'static str> for Node {
	fn from(text: &'static str) -> Self {
		Self::Text(text.into())
	}
}
impl From<String> for Node {
	fn from(text: String) -> Self {
		Self::Text(text.into())
	}
}
impl From<Vec<Node>> for Node {
	fn from(nodes: Vec<Node>) -> Self {
		Self::Fragment(nodes)
	}
}
impl From<ComponentRef> for Node {
	fn from(component: ComponentRef) -> Self {
		Self::Component(component)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
	Html,
	Svg,
}
impl Namespace {
	#[must_use]
	pub fn uri(self) -> Option<&'static str> {
		match self {
			Namespace::Html => None,
			Namespace::Svg => Some("http://www.w3.org/2000/svg"),
		}
	}
}

/// A property value assigned directly on the DOM object instead of as an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
	Bool(bool),
	Text(String),
	Number(f64),
}

#[derive(Clone)]
pub struct EventListener {
	pub name: Cow<'static, str>,
	pub callback: Callback,
}
impl Debug for EventListener {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("EventListener").field("name", &self.name).finish_non_exhaustive()
	}
}

/// An element description: tag, classes, attributes, properties, listeners and children.
#[derive(Debug, Clone)]
pub struct Element {
	namespace: Namespace,
	tag: Cow<'static, str>,
	classes: Vec<Cow<'static, str>>,
	attributes: Vec<(Cow<'static, str>, String)>,
	properties: Vec<(Cow<'static, str>, PropertyValue)>,
	listeners: Vec<EventListener>,
	children: Vec<Node>,
}
impl Element {
	#[must_use]
	pub fn new(namespace: Namespace, tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			namespace,
			tag: tag.into(),
			classes: Vec::new(),
			attributes: Vec::new(),
			properties: Vec::new(),
			listeners: Vec::new(),
			children: Vec::new(),
		}
	}

	#[must_use]
	pub fn html(tag: impl Into<Cow<'static, str>>) -> Self {
		Self::new(Namespace::Html, tag)
	}

	#[must_use]
	pub fn namespace(&self) -> Namespace {
		self.namespace
	}

	#[must_use]
	pub fn tag(&self) -> &str {
		&self.tag
	}

	#[must_use]
	pub fn classes(&self) -> &[Cow<'static, str>] {
		&self.classes
	}

	#[must_use]
	pub fn has_class(&self, class: &str) -> bool {
		self.classes.iter().any(|c| c == class)
	}

	#[must_use]
	pub fn attributes(&self) -> &[(Cow<'static, str>, String)] {
		&self.attributes
	}

	#[must_use]
	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
	}

	#[must_use]
	pub fn properties(&self) -> &[(Cow<'static, str>, PropertyValue)] {
		&self.properties
	}

	#[must_use]
	pub fn listeners(&self) -> &[EventListener] {
		&self.listeners
	}

	#[must_use]
	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// Adds a class unless already present.
	pub fn add_class(&mut self, class: impl Into<Cow<'static, str>>) {
		let class = class.into();
		if !self.has_class(&class) {
			self.classes.push(class)
		}
	}

	pub fn remove_class(&mut self, class: &str) {
		self.classes.retain(|c| c != class)
	}

	/// Sets an attribute, replacing an earlier value of the same name in place.
	pub fn set_attribute(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) {
		let name = name.into();
		let value: String = value.into();
		match self.attributes.iter_mut().find(|(n, _)| *n == name) {
			Some(existing) => existing.1 = value,
			None => self.attributes.push((name, value)),
		}
	}

	pub fn set_property(&mut self, name: impl Into<Cow<'static, str>>, value: PropertyValue) {
		let name = name.into();
		match self.properties.iter_mut().find(|(n, _)| *n == name) {
			Some(existing) => existing.1 = value,
			None => self.properties.push((name, value)),
		}
	}

	pub fn add_listener(&mut self, name: impl Into<Cow<'static, str>>, callback: Callback) {
		self.listeners.push(EventListener { name: name.into(), callback })
	}

	pub fn push_child(&mut self, child: impl Into<Node>) {
		self.children.push(child.into())
	}

	#[must_use]
	pub fn class(mut self, class: impl Into<Cow<'static, str>>) -> Self {
		self.add_class(class);
		self
	}

	#[must_use]
	pub fn class_if(self, condition: bool, class: impl Into<Cow<'static, str>>) -> Self {
		if condition {
			self.class(class)
		} else {
			self
		}
	}

	#[must_use]
	pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
		self.set_attribute(name, value);
		self
	}

	#[must_use]
	pub fn property(mut self, name: impl Into<Cow<'static, str>>, value: PropertyValue) -> Self {
		self.set_property(name, value);
		self
	}

	#[must_use]
	pub fn on(mut self, name: impl Into<Cow<'static, str>>, callback: impl 'static + Fn(&web_sys::Event)) -> Self {
		self.add_listener(name, Rc::new(callback));
		self
	}

	#[must_use]
	pub fn child(mut self, child: impl Into<Node>) -> Self {
		self.push_child(child);
		self
	}

	/// Appends `child` if it is present.
	#[must_use]
	pub fn optional_child(self, child: Option<impl Into<Node>>) -> Self {
		match child {
			Some(child) => self.child(child),
			None => self,
		}
	}

	#[must_use]
	pub fn children_from(mut self, children: impl IntoIterator<Item = impl Into<Node>>) -> Self {
		self.children.extend(children.into_iter().map(Into::into));
		self
	}

	#[must_use]
	pub fn with(mut self, markup: &Markup) -> Self {
		markup.apply(&mut self);
		self
	}
}

/// One markup modification.
#[derive(Debug, Clone)]
pub enum Applyer {
	Class(Cow<'static, str>),
	Attribute(Cow<'static, str>, String),
	Property(Cow<'static, str>, PropertyValue),
	Listener(EventListener),
}
impl Applyer {
	pub fn apply(&self, element: &mut Element) {
		match self {
			Applyer::Class(class) => element.add_class(class.clone()),
			Applyer::Attribute(name, value) => element.set_attribute(name.clone(), value.clone()),
			Applyer::Property(name, value) => element.set_property(name.clone(), value.clone()),
			Applyer::Listener(listener) => element.listeners.push(listener.clone()),
		}
	}
}

/// An ordered list of [`Applyer`]s, usually user-supplied extra markup for a widget's root.
#[derive(Debug, Clone, Default)]
pub struct Markup(Vec<Applyer>);
impl Markup {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn class(mut self, class: impl Into<Cow<'static, str>>) -> Self {
		self.0.push(Applyer::Class(class.into()));
		self
	}

	#[must_use]
	pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
		self.0.push(Applyer::Attribute(name.into(), value.into()));
		self
	}

	#[must_use]
	pub fn property(mut self, name: impl Into<Cow<'static, str>>, value: PropertyValue) -> Self {
		self.0.push(Applyer::Property(name.into(), value));
		self
	}

	#[must_use]
	pub fn on(mut self, name: impl Into<Cow<'static, str>>, callback: impl 'static + Fn(&web_sys::Event)) -> Self {
		self.0.push(Applyer::Listener(EventListener {
			name: name.into(),
			callback: Rc::new(callback),
		}));
		self
	}

	/// Appends `other`'s applyers only if `condition` holds.
	#[must_use]
	pub fn when(mut self, condition: bool, other: Markup) -> Self {
		if condition {
			self.0.extend(other.0)
		}
		self
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn applyers(&self) -> &[Applyer] {
		&self.0
	}

	pub fn apply(&self, element: &mut Element) {
		for applyer in &self.0 {
			applyer.apply(element)
		}
	}
}
