//! `mdc.checkbox.MDCCheckbox`.

use super::{ComponentType, MdcComponent, MdcWidget, StateMap, StateMapper};
use crate::error::MdcResult;
use tracing::instrument;

pub const TYPE: ComponentType = ComponentType {
	class_name: "MDCCheckbox",
	module: "checkbox",
};

#[derive(Debug)]
pub struct Checkbox {
	mdc: MdcComponent,
	pub checked: bool,
	pub indeterminate: bool,
	pub disabled: bool,
	pub value: String,
}
impl Default for Checkbox {
	fn default() -> Self {
		Self::new()
	}
}
impl Checkbox {
	#[must_use]
	pub fn new() -> Self {
		Self {
			mdc: MdcComponent::new(TYPE),
			checked: false,
			indeterminate: false,
			disabled: false,
			value: String::new(),
		}
	}

	#[must_use]
	pub fn component(&self) -> &MdcComponent {
		&self.mdc
	}

	/// Reads the current state back from the live object into this struct.
	///
	/// Useful after user interaction, since changes are not mirrored automatically.
	#[instrument(skip(self))]
	pub fn pull_state(&mut self) -> MdcResult<()> {
		self.checked = self.mdc.get("checked")?.as_bool().unwrap_or(self.checked);
		self.indeterminate = self.mdc.get("indeterminate")?.as_bool().unwrap_or(self.indeterminate);
		self.disabled = self.mdc.get("disabled")?.as_bool().unwrap_or(self.disabled);
		if let Some(value) = self.mdc.get("value")?.as_string() {
			self.value = value
		}
		Ok(())
	}
}
impl StateMapper for Checkbox {
	fn state_map(&self) -> StateMap {
		StateMap::new()
			.with("checked", self.checked)
			.with("indeterminate", self.indeterminate)
			.with("disabled", self.disabled)
			.with("value", self.value.as_str())
	}
}
impl MdcWidget for Checkbox {
	fn start(&mut self, root: &web_sys::Element) -> MdcResult<()> {
		let state = self.state_map();
		self.mdc.start(root, &state)
	}

	fn stop(&mut self) -> MdcResult<()> {
		self.mdc.stop()
	}

	fn is_started(&self) -> bool {
		self.mdc.is_started()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::mdc::StateValue;

	#[test]
	fn state_map_has_all_four_fields() {
		let mut checkbox = Checkbox::new();
		checkbox.checked = true;
		checkbox.value = "subscribe".to_owned();
		let state = checkbox.state_map();
		assert_eq!(state.len(), 4);
		assert_eq!(state.get("checked"), Some(&StateValue::Bool(true)));
		assert_eq!(state.get("indeterminate"), Some(&StateValue::Bool(false)));
		assert_eq!(state.get("disabled"), Some(&StateValue::Bool(false)));
		assert_eq!(state.get("value"), Some(&StateValue::Text("subscribe".to_owned())));
	}

	#[test]
	fn stop_without_start_is_a_no_op() {
		let mut checkbox = Checkbox::new();
		assert!(checkbox.stop().is_ok());
		assert!(!checkbox.is_started());
	}
}
