//! A stand-in for the MDC-Web bundle that records constructor and method calls.

#![cfg(target_arch = "wasm32")]
#![allow(dead_code)]

use js_sys::{Array, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlBodyElement};

static mut LOG_INITIALIZED: bool = false;

const FAKE_MDC: &str = r#"
(function () {
	var log = [];
	globalThis.__mdcLog = log;
	globalThis.__mdcThrowOnClose = false;
	globalThis.__mdcLast = {};
	function fake(name) {
		return class {
			constructor(root) {
				this.root = root;
				log.push("new " + name);
				globalThis.__mdcLast[name] = this;
			}
			destroy() { log.push("destroy " + name); }
			show() { this.open = true; log.push("show " + name); }
			close() {
				if (globalThis.__mdcThrowOnClose) { throw new Error("close failed"); }
				this.open = false;
				log.push("close " + name);
			}
		};
	}
	globalThis.mdc = {
		checkbox: { MDCCheckbox: fake("MDCCheckbox") },
		dialog: { MDCDialog: fake("MDCDialog") },
		drawer: {
			MDCTemporaryDrawer: fake("MDCTemporaryDrawer"),
			MDCPersistentDrawer: fake("MDCPersistentDrawer"),
		},
		ripple: { MDCRipple: fake("MDCRipple") },
	};
})();
"#;

/// Installs logging once and a fresh fake `mdc` namespace.
pub fn init() {
	unsafe {
		if !LOG_INITIALIZED {
			tracing_wasm::set_as_global_default();
			LOG_INITIALIZED = true;
		}
	}
	js_sys::eval(FAKE_MDC).unwrap();
}

pub fn body() -> web_sys::Element {
	window().unwrap().document().unwrap().body().unwrap().dyn_into::<HtmlBodyElement>().unwrap().into()
}

/// Every recorded call so far, like `"new MDCDialog"` or `"destroy MDCDialog"`.
pub fn calls() -> Vec<String> {
	let log: Array = Reflect::get(&js_sys::global(), &"__mdcLog".into()).unwrap().dyn_into().unwrap();
	log.iter().map(|entry| entry.as_string().unwrap()).collect()
}

/// The most recently constructed instance of `class_name`.
pub fn last(class_name: &str) -> JsValue {
	let last = Reflect::get(&js_sys::global(), &"__mdcLast".into()).unwrap();
	Reflect::get(&last, &class_name.into()).unwrap()
}

pub fn property(object: &JsValue, name: &str) -> JsValue {
	Reflect::get(object, &name.into()).unwrap()
}

pub fn throw_on_close(throw: bool) {
	Reflect::set(&js_sys::global(), &"__mdcThrowOnClose".into(), &JsValue::from_bool(throw)).unwrap();
}
