//! Errors raised at the JavaScript and DOM boundaries.

use js_sys::{Object, Reflect};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Result type for widget lifecycle and MDC calls.
pub type MdcResult<T> = Result<T, MdcError>;

/// Everything that can go wrong while talking to MDC-Web or the DOM.
///
/// Markup construction never fails. Only the operations that cross into
/// [***JavaScript***](https://developer.mozilla.org/en-US/docs/Web/JavaScript) return this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MdcError {
	/// The MDC namespace object, or one of the classes below it, is not loaded.
	#[error("MDC class not found at `{path}`. Is the MDC-Web bundle loaded?")]
	MissingNamespace { path: String },

	/// An exception thrown by MDC-Web, caught at the boundary.
	#[error("{operation} threw: {message}")]
	Exception { operation: String, message: String },

	/// `start` was called on a handle that already owns a live object.
	#[error("{class} is already started; stop it first")]
	AlreadyStarted { class: &'static str },

	/// An imperative call was made on a handle without a live object.
	#[error("{class} is not started")]
	NotStarted { class: &'static str },

	/// A DOM call failed while mounting markup.
	#[error("DOM {operation} failed: {message}")]
	Dom { operation: &'static str, message: String },
}

impl MdcError {
	pub(crate) fn exception(operation: impl Into<String>, thrown: &JsValue) -> Self {
		Self::Exception {
			operation: operation.into(),
			message: describe(thrown),
		}
	}

	pub(crate) fn dom(operation: &'static str, thrown: &JsValue) -> Self {
		Self::Dom {
			operation,
			message: describe(thrown),
		}
	}
}

/// Turns a thrown JavaScript value into readable text.
///
/// Tries `message`, then `toString()`, then falls back to the debug representation.
pub(crate) fn describe(thrown: &JsValue) -> String {
	if let Some(text) = thrown.as_string() {
		return text;
	}
	if thrown.is_object() {
		if let Ok(message) = Reflect::get(thrown, &JsValue::from_str("message")) {
			if let Some(message) = message.as_string() {
				return message;
			}
		}
		if let Some(object) = thrown.dyn_ref::<Object>() {
			if let Some(text) = object.to_string().as_string() {
				return text;
			}
		}
	}
	format!("{:?}", thrown)
}
