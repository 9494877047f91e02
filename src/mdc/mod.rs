//! Handles on MDC-Web JavaScript objects.
//!
//! Every MDC class is reached through a global namespace object (`mdc` by default),
//! for example `mdc.checkbox.MDCCheckbox`. An [`MdcComponent`] owns at most one live instance of such a class
//! and is the only place in this crate that calls into MDC-Web directly.
//!
//! All exceptions thrown across the boundary are caught and returned as [`MdcError`].

pub mod checkbox;
pub mod dialog;
pub mod drawer;
pub mod ripple;

use crate::error::{MdcError, MdcResult};
use core::fmt::{self, Debug, Formatter};
use hashbrown::HashMap;
use js_sys::{Array, Function, Object, Reflect};
use std::{borrow::Cow, cell::RefCell};
use tracing::{instrument, trace, warn};
use wasm_bindgen::{JsCast, JsValue};

thread_local! {
	static NAMESPACE: RefCell<Cow<'static, str>> = RefCell::new(Cow::Borrowed("mdc"));
}

/// The name of the global object MDC classes are looked up on.
#[must_use]
pub fn namespace() -> Cow<'static, str> {
	NAMESPACE.with(|namespace| namespace.borrow().clone())
}

/// Changes the global MDC namespace name for this thread. Affects only handles started afterwards.
pub fn set_namespace(name: impl Into<Cow<'static, str>>) {
	let name = name.into();
	trace!("MDC namespace set to {:?}.", name);
	NAMESPACE.with(move |namespace| *namespace.borrow_mut() = name)
}

/// Names one MDC class, as `<namespace>.<module>.<class_name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentType {
	/// For example `"MDCCheckbox"`.
	pub class_name: &'static str,
	/// The camel-case module the class lives in, for example `"checkbox"`.
	pub module: &'static str,
}

/// A single value pushed into a live MDC object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateValue {
	Bool(bool),
	Text(String),
}
impl StateValue {
	#[must_use]
	pub fn to_js(&self) -> JsValue {
		match self {
			StateValue::Bool(value) => JsValue::from_bool(*value),
			StateValue::Text(value) => JsValue::from_str(value),
		}
	}

	#[must_use]
	pub fn as_bool(&self) -> Option<bool> {
		match *self {
			StateValue::Bool(value) => Some(value),
			StateValue::Text(_) => None,
		}
	}
}
impl From<bool> for StateValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}
impl From<String> for StateValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}
impl From<&str> for StateValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}

/// Named properties used to (re)initialise an MDC object whenever it is started.
///
/// This is the only state synchronisation path towards MDC-Web.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateMap(HashMap<&'static str, StateValue>);
impl StateMap {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with(mut self, name: &'static str, value: impl Into<StateValue>) -> Self {
		self.insert(name, value);
		self
	}

	pub fn insert(&mut self, name: &'static str, value: impl Into<StateValue>) {
		self.0.insert(name, value.into());
	}

	#[must_use]
	pub fn get(&self, name: &str) -> Option<&StateValue> {
		self.0.get(name)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StateValue)> {
		self.0.iter().map(|(&name, value)| (name, value))
	}
}

/// Produces the [`StateMap`] a widget is started with.
pub trait StateMapper {
	fn state_map(&self) -> StateMap;
}

/// A material-layer widget that can be bound to and released from a DOM element.
pub trait MdcWidget: StateMapper {
	/// Binds to `root`, instantiating the MDC class and pushing [`StateMapper::state_map`] into it.
	///
	/// Only valid on a new widget or after [`MdcWidget::stop`].
	fn start(&mut self, root: &web_sys::Element) -> MdcResult<()>;

	/// Releases the binding and MDC's event listeners. A no-op if not started.
	fn stop(&mut self) -> MdcResult<()>;

	fn is_started(&self) -> bool;
}

/// The widget handle: one optional live MDC object of a fixed [`ComponentType`].
pub struct MdcComponent {
	kind: ComponentType,
	object: Option<Object>,
}
impl Debug for MdcComponent {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("MdcComponent")
			.field("kind", &self.kind)
			.field("started", &self.object.is_some())
			.finish()
	}
}
impl MdcComponent {
	#[must_use]
	pub fn new(kind: ComponentType) -> Self {
		Self { kind, object: None }
	}

	#[must_use]
	pub fn kind(&self) -> ComponentType {
		self.kind
	}

	#[must_use]
	pub fn is_started(&self) -> bool {
		self.object.is_some()
	}

	/// The live MDC object, if started.
	#[must_use]
	pub fn object(&self) -> Option<&Object> {
		self.object.as_ref()
	}

	#[instrument(skip(root, state))]
	pub fn start(&mut self, root: &web_sys::Element, state: &StateMap) -> MdcResult<()> {
		if self.object.is_some() {
			return Err(MdcError::AlreadyStarted { class: self.kind.class_name });
		}

		let constructor = self.constructor()?;
		let object = Reflect::construct(&constructor, &Array::of1(root))
			.map_err(|thrown| MdcError::exception(format!("new {}", self.kind.class_name), &thrown))?;
		let object: Object = object.dyn_into().map_err(|value| MdcError::Exception {
			operation: format!("new {}", self.kind.class_name),
			message: format!("constructor returned a non-object: {:?}", value),
		})?;
		trace!("Created {}.", self.kind.class_name);

		for (name, value) in state.iter() {
			if let Err(error) = Self::set_on(&object, self.kind, name, &value.to_js()) {
				// Don't leak the half-initialised object.
				if let Err(destroy_error) = Self::destroy(&object, self.kind) {
					warn!("Failed to destroy {} after failed initialisation: {}", self.kind.class_name, destroy_error);
				}
				return Err(error);
			}
		}

		self.object = Some(object);
		Ok(())
	}

	/// Calls `destroy()` and forgets the object. The object is forgotten even if `destroy()` throws.
	#[instrument]
	pub fn stop(&mut self) -> MdcResult<()> {
		match self.object.take() {
			None => {
				trace!("{} not started; nothing to stop.", self.kind.class_name);
				Ok(())
			}
			Some(object) => {
				let result = Self::destroy(&object, self.kind);
				trace!("Destroyed {}.", self.kind.class_name);
				result
			}
		}
	}

	/// Calls a zero-argument method on the live object.
	#[instrument]
	pub fn call(&self, method: &str) -> MdcResult<JsValue> {
		let object = self.live()?;
		Self::call_on(object, self.kind, method)
	}

	#[instrument]
	pub fn get(&self, property: &str) -> MdcResult<JsValue> {
		let object = self.live()?;
		Reflect::get(object, &JsValue::from_str(property)).map_err(|thrown| MdcError::exception(format!("{}.{}", self.kind.class_name, property), &thrown))
	}

	#[instrument(skip(value))]
	pub fn set(&self, property: &str, value: &StateValue) -> MdcResult<()> {
		let object = self.live()?;
		Self::set_on(object, self.kind, property, &value.to_js())
	}

	fn live(&self) -> MdcResult<&Object> {
		self.object.as_ref().ok_or(MdcError::NotStarted { class: self.kind.class_name })
	}

	fn constructor(&self) -> MdcResult<Function> {
		let namespace = namespace();
		let path = format!("{}.{}.{}", namespace, self.kind.module, self.kind.class_name);
		let missing = || MdcError::MissingNamespace { path: path.clone() };

		let mut value: JsValue = js_sys::global().into();
		for key in &[namespace.as_ref(), self.kind.module, self.kind.class_name] {
			value = Reflect::get(&value, &JsValue::from_str(key)).map_err(|_| missing())?;
			if value.is_undefined() || value.is_null() {
				return Err(missing());
			}
		}
		value.dyn_into::<Function>().map_err(|_| missing())
	}

	fn set_on(object: &Object, kind: ComponentType, property: &str, value: &JsValue) -> MdcResult<()> {
		Reflect::set(object, &JsValue::from_str(property), value)
			.map(|_| ())
			.map_err(|thrown| MdcError::exception(format!("{}.{} =", kind.class_name, property), &thrown))
	}

	fn call_on(object: &Object, kind: ComponentType, method: &str) -> MdcResult<JsValue> {
		let operation = || format!("{}.{}()", kind.class_name, method);
		let function = Reflect::get(object, &JsValue::from_str(method)).map_err(|thrown| MdcError::exception(operation(), &thrown))?;
		let function: Function = function.dyn_into().map_err(|_| MdcError::Exception {
			operation: operation(),
			message: "not a function".to_owned(),
		})?;
		function.call0(object).map_err(|thrown| MdcError::exception(operation(), &thrown))
	}

	fn destroy(object: &Object, kind: ComponentType) -> MdcResult<()> {
		Self::call_on(object, kind, "destroy").map(|_| ())
	}
}
impl Drop for MdcComponent {
	fn drop(&mut self) {
		if self.object.is_some() {
			warn!("{} dropped while started. Stopping it now.", self.kind.class_name);
			if let Err(error) = self.stop() {
				warn!("Failed to stop dropped {}: {}", self.kind.class_name, error)
			}
		}
	}
}
