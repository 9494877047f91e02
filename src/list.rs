//! MDC lists: [`List`], [`Item`] and [`Group`], plus the divider helpers.
//!
//! A list passes its click handler down to every item that doesn't have one of its own.
//! The item's own handler always wins.

use crate::{
	base::{Props, WidgetBase},
	elem,
	error::MdcResult,
	node::{Component, ComponentRef, Element, Node},
};
use core::fmt::{self, Debug, Formatter};
use std::{
	cell::{Ref, RefCell, RefMut},
	rc::{Rc, Weak},
};
use tracing::{instrument, trace, trace_span, warn};

/// Called with the owning list, the clicked item and the DOM event, in that order.
pub type ListClickHandler = Rc<dyn Fn(&List, &Item, &web_sys::Event)>;

/// Called with the clicked item and the DOM event.
pub type ItemClickHandler = Rc<dyn Fn(&Item, &web_sys::Event)>;

/// A child of a [`List`].
#[derive(Debug, Clone)]
pub enum ListEntry {
	Item(Item),
	/// Anything else, usually an [`item_divider`].
	Markup(Node),
}
impl From<Item> for ListEntry {
	fn from(item: Item) -> Self {
		Self::Item(item)
	}
}
impl From<Element> for ListEntry {
	fn from(element: Element) -> Self {
		Self::Markup(element.into())
	}
}

#[derive(Clone, Default)]
pub struct ListState {
	pub items: Vec<ListEntry>,
	pub dense: bool,
	pub avatar: bool,
	pub non_interactive: bool,
	pub click_handler: Option<ListClickHandler>,
	/// Shown above this list when it is part of a [`Group`].
	pub group_subheader: Option<String>,
}
impl Debug for ListState {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("ListState")
			.field("items", &self.items)
			.field("dense", &self.dense)
			.field("avatar", &self.avatar)
			.field("non_interactive", &self.non_interactive)
			.field("click_handler", &self.click_handler.is_some())
			.field("group_subheader", &self.group_subheader)
			.finish()
	}
}

#[derive(Debug)]
struct ListInner {
	base: WidgetBase,
	state: ListState,
}

/// An MDC list. Cloning yields another handle to the same list.
#[derive(Debug, Clone)]
pub struct List(Rc<RefCell<ListInner>>);
impl List {
	#[must_use]
	pub fn new(props: Props, state: ListState) -> Self {
		Self(Rc::new(RefCell::new(ListInner {
			base: WidgetBase::new(props),
			state,
		})))
	}

	#[must_use]
	pub fn state(&self) -> Ref<'_, ListState> {
		Ref::map(self.0.borrow(), |inner| &inner.state)
	}

	/// Don't hold on to this across a render or a click dispatch.
	pub fn state_mut(&self) -> RefMut<'_, ListState> {
		RefMut::map(self.0.borrow_mut(), |inner| &mut inner.state)
	}

	#[must_use]
	pub fn props(&self) -> Ref<'_, Props> {
		Ref::map(self.0.borrow(), |inner| inner.base.props())
	}

	/// Whether any item currently has secondary text. Recomputed on every call.
	#[must_use]
	pub fn is_two_line(&self) -> bool {
		self.state().items.iter().any(|entry| match entry {
			ListEntry::Item(item) => item.has_secondary(),
			ListEntry::Markup(_) => false,
		})
	}

	/// Two handles are the same list.
	#[must_use]
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}

	/// The handler assigned to items without their own. Holds the list weakly.
	fn inherited_handler(&self) -> ItemClickHandler {
		let list = Rc::downgrade(&self.0);
		Rc::new(move |item: &Item, event: &web_sys::Event| {
			let list = match list.upgrade() {
				Some(inner) => List(inner),
				None => return warn!("Item clicked after its list was dropped."),
			};
			let handler = list.state().click_handler.clone();
			if let Some(handler) = handler {
				handler(&list, item, event)
			}
		})
	}

	#[must_use]
	pub fn copy_list(&self) -> Self {
		let inner = self.0.borrow();
		let mut state = inner.state.clone();
		for entry in &mut state.items {
			if let ListEntry::Item(item) = entry {
				*item = item.copy_item();
			}
		}
		Self(Rc::new(RefCell::new(ListInner { base: inner.base.copy(), state })))
	}
}
impl Component for List {
	fn render(&self) -> Node {
		let two_line = self.is_two_line();
		let span = trace_span!("Rendering list", two_line);
		let _enter = span.enter();

		let inherited = self.state().click_handler.as_ref().map(|_| self.inherited_handler());

		let inner = self.0.borrow();
		let state = &inner.state;
		let root = elem::unordered_list()
			.class("mdc-list")
			.class_if(two_line, "mdc-list--two-line")
			.class_if(state.dense, "mdc-list--dense")
			.class_if(state.avatar, "mdc-list--avatar-list")
			.class_if(state.non_interactive, "mdc-list--non-interactive");

		let items = state.items.iter().map(|entry| match entry {
			ListEntry::Item(item) => {
				item.set_inherited_handler(inherited.clone());
				Node::Component(Rc::new(item.clone()))
			}
			ListEntry::Markup(node) => node.clone(),
		});
		inner.base.render(root.children_from(items)).into()
	}

	fn mount(&self, root: &web_sys::Element) -> MdcResult<()> {
		self.0.borrow_mut().base.mount(root)
	}

	fn unmount(&self) {
		self.0.borrow_mut().base.unmount()
	}

	fn copy(&self) -> Option<ComponentRef> {
		Some(Rc::new(self.copy_list()))
	}

	fn kind(&self) -> &'static str {
		"list"
	}
}

#[derive(Clone, Default)]
pub struct ItemState {
	pub primary: Option<Node>,
	/// Present and non-empty makes the item, and its list, two-line.
	pub secondary: Option<Node>,
	pub graphic: Option<Node>,
	pub meta: Option<Node>,
	pub selected: bool,
	pub activated: bool,
	pub click_handler: Option<ItemClickHandler>,
	/// Renders the item as `<a>` instead of `<li>`, unless empty.
	pub href: Option<String>,
}
impl ItemState {
	fn secondary(&self) -> Option<&Node> {
		match &self.secondary {
			Some(Node::Text(text)) if text.is_empty() => None,
			Some(Node::Fragment(nodes)) if nodes.is_empty() => None,
			secondary => secondary.as_ref(),
		}
	}
}
impl Debug for ItemState {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("ItemState")
			.field("primary", &self.primary)
			.field("secondary", &self.secondary)
			.field("graphic", &self.graphic)
			.field("meta", &self.meta)
			.field("selected", &self.selected)
			.field("activated", &self.activated)
			.field("click_handler", &self.click_handler.is_some())
			.field("href", &self.href)
			.finish()
	}
}

struct ItemInner {
	base: WidgetBase,
	state: ItemState,
	/// Assigned by the owning list on each render. Separate from the user's handler so that one always wins.
	inherited_handler: Option<ItemClickHandler>,
}
impl Debug for ItemInner {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("ItemInner")
			.field("base", &self.base)
			.field("state", &self.state)
			.field("inherited_handler", &self.inherited_handler.is_some())
			.finish()
	}
}

/// An MDC list item. Cloning yields another handle to the same item.
#[derive(Debug, Clone)]
pub struct Item(Rc<RefCell<ItemInner>>);
impl Item {
	#[must_use]
	pub fn new(props: Props, state: ItemState) -> Self {
		Self(Rc::new(RefCell::new(ItemInner {
			base: WidgetBase::new(props),
			state,
			inherited_handler: None,
		})))
	}

	#[must_use]
	pub fn state(&self) -> Ref<'_, ItemState> {
		Ref::map(self.0.borrow(), |inner| &inner.state)
	}

	/// Don't hold on to this across a render or a click dispatch.
	pub fn state_mut(&self) -> RefMut<'_, ItemState> {
		RefMut::map(self.0.borrow_mut(), |inner| &mut inner.state)
	}

	#[must_use]
	pub fn has_secondary(&self) -> bool {
		self.state().secondary().is_some()
	}

	#[must_use]
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}

	fn set_inherited_handler(&self, handler: Option<ItemClickHandler>) {
		self.0.borrow_mut().inherited_handler = handler
	}

	fn effective_handler(&self) -> Option<ItemClickHandler> {
		let inner = self.0.borrow();
		inner.state.click_handler.clone().or_else(|| inner.inherited_handler.clone())
	}

	/// Dispatches a click as if it came from the DOM: the item's own handler if set, otherwise the list's.
	#[instrument(skip(self, event))]
	pub fn click(&self, event: &web_sys::Event) {
		match self.effective_handler() {
			Some(handler) => handler(self, event),
			None => trace!("Item clicked without a handler."),
		}
	}

	#[must_use]
	pub fn copy_item(&self) -> Self {
		let inner = self.0.borrow();
		Self(Rc::new(RefCell::new(ItemInner {
			base: inner.base.copy(),
			state: inner.state.clone(),
			inherited_handler: None,
		})))
	}
}
impl Component for Item {
	fn render(&self) -> Node {
		let has_handler = self.effective_handler().is_some();
		let inner = self.0.borrow();
		let state = &inner.state;
		let secondary = state.secondary();

		let href = state.href.as_deref().filter(|href| !href.is_empty());

		let span = trace_span!("Rendering list item", anchor = href.is_some(), two_line = secondary.is_some(), has_handler);
		let _enter = span.enter();

		let mut root = match href {
			Some(href) => elem::anchor().attr("href", href),
			None => elem::list_item(),
		}
		.class("mdc-list-item")
		.class_if(state.selected, "mdc-list-item--selected")
		.class_if(state.activated, "mdc-list-item--activated");

		if has_handler {
			let item = Rc::downgrade(&self.0);
			root = root.on("click", move |event| click_weak(&item, event));
		}

		let root = root.optional_child(state.graphic.as_ref().map(|graphic| graphic_or_meta(graphic, "mdc-list-item__graphic")));
		let root = match secondary {
			None => root.optional_child(state.primary.clone()),
			Some(secondary) => root.child(
				elem::span()
					.class("mdc-list-item__text")
					.optional_child(state.primary.clone())
					.child(elem::span().class("mdc-list-item__secondary-text").child(secondary.clone())),
			),
		};
		let root = root.optional_child(state.meta.as_ref().map(|meta| graphic_or_meta(meta, "mdc-list-item__meta")));

		inner.base.render(root).into()
	}

	fn mount(&self, root: &web_sys::Element) -> MdcResult<()> {
		self.0.borrow_mut().base.mount(root)
	}

	fn unmount(&self) {
		self.0.borrow_mut().base.unmount()
	}

	fn copy(&self) -> Option<ComponentRef> {
		Some(Rc::new(self.copy_item()))
	}

	fn kind(&self) -> &'static str {
		"list item"
	}
}

fn click_weak(item: &Weak<RefCell<ItemInner>>, event: &web_sys::Event) {
	match item.upgrade() {
		Some(inner) => Item(inner).click(event),
		None => warn!("Click on a list item that was dropped."),
	}
}

/// Graphic and meta content must be an element with the given class and `role="presentation"`.
///
/// `<img>` is used as is. Anything else is wrapped in a `<span>`, as MDC's CSS expects.
fn graphic_or_meta(content: &Node, class: &'static str) -> Element {
	let element = match content.resolve() {
		Node::Element(element) if element.tag().eq_ignore_ascii_case("img") => element,
		other => elem::span().child(other),
	};
	element.class(class).attr("role", "presentation")
}

/// A child of a [`Group`].
#[derive(Debug, Clone)]
pub enum GroupEntry {
	List(List),
	/// Anything else, usually a [`list_divider`].
	Markup(Node),
}
impl From<List> for GroupEntry {
	fn from(list: List) -> Self {
		Self::List(list)
	}
}
impl From<Element> for GroupEntry {
	fn from(element: Element) -> Self {
		Self::Markup(element.into())
	}
}

#[derive(Debug, Clone, Default)]
pub struct GroupState {
	pub lists: Vec<GroupEntry>,
}

#[derive(Debug)]
struct GroupInner {
	base: WidgetBase,
	state: GroupState,
}

/// An MDC list group. Each list's subheader is rendered right before it.
#[derive(Debug, Clone)]
pub struct Group(Rc<RefCell<GroupInner>>);
impl Group {
	#[must_use]
	pub fn new(props: Props, state: GroupState) -> Self {
		Self(Rc::new(RefCell::new(GroupInner {
			base: WidgetBase::new(props),
			state,
		})))
	}

	#[must_use]
	pub fn state(&self) -> Ref<'_, GroupState> {
		Ref::map(self.0.borrow(), |inner| &inner.state)
	}

	pub fn state_mut(&self) -> RefMut<'_, GroupState> {
		RefMut::map(self.0.borrow_mut(), |inner| &mut inner.state)
	}

	#[must_use]
	pub fn copy_group(&self) -> Self {
		let inner = self.0.borrow();
		let mut state = inner.state.clone();
		for entry in &mut state.lists {
			if let GroupEntry::List(list) = entry {
				*list = list.copy_list();
			}
		}
		Self(Rc::new(RefCell::new(GroupInner { base: inner.base.copy(), state })))
	}
}
impl Component for Group {
	fn render(&self) -> Node {
		let inner = self.0.borrow();
		let span = trace_span!("Rendering list group", "lists.len()" = inner.state.lists.len());
		let _enter = span.enter();

		let mut children: Vec<Node> = Vec::with_capacity(inner.state.lists.len() * 2);
		for entry in &inner.state.lists {
			match entry {
				GroupEntry::List(list) => {
					if let Some(subheader) = list.state().group_subheader.as_ref().filter(|subheader| !subheader.is_empty()) {
						children.push(elem::heading3().class("mdc-list-group__subheader").child(subheader.clone()).into());
					}
					children.push(Node::Component(Rc::new(list.clone())));
				}
				GroupEntry::Markup(node) => children.push(node.clone()),
			}
		}

		inner.base.render(elem::div().class("mdc-list-group").children_from(children)).into()
	}

	fn mount(&self, root: &web_sys::Element) -> MdcResult<()> {
		self.0.borrow_mut().base.mount(root)
	}

	fn unmount(&self) {
		self.0.borrow_mut().base.unmount()
	}

	fn copy(&self) -> Option<ComponentRef> {
		Some(Rc::new(self.copy_group()))
	}

	fn kind(&self) -> &'static str {
		"list group"
	}
}

/// `<hr class="mdc-list-divider">`, between lists of a [`Group`].
#[must_use]
pub fn list_divider() -> Element {
	elem::horizontal_rule().class("mdc-list-divider")
}

#[must_use]
pub fn list_divider_inset() -> Element {
	list_divider().class("mdc-list-divider--inset")
}

/// `<li class="mdc-list-divider" role="separator">`, between items of a [`List`].
#[must_use]
pub fn item_divider() -> Element {
	elem::list_item().class("mdc-list-divider").attr("role", "separator")
}

#[must_use]
pub fn item_divider_inset() -> Element {
	item_divider().class("mdc-list-divider--inset")
}
