//! `mdc.ripple.MDCRipple`.

use super::{ComponentType, MdcComponent, MdcWidget, StateMap, StateMapper};
use crate::error::MdcResult;

pub const TYPE: ComponentType = ComponentType {
	class_name: "MDCRipple",
	module: "ripple",
};

#[derive(Debug)]
pub struct Ripple {
	mdc: MdcComponent,
	pub unbounded: bool,
	pub disabled: bool,
}
impl Default for Ripple {
	fn default() -> Self {
		Self::new()
	}
}
impl Ripple {
	#[must_use]
	pub fn new() -> Self {
		Self {
			mdc: MdcComponent::new(TYPE),
			unbounded: false,
			disabled: false,
		}
	}
}
impl StateMapper for Ripple {
	fn state_map(&self) -> StateMap {
		StateMap::new().with("unbounded", self.unbounded).with("disabled", self.disabled)
	}
}
impl MdcWidget for Ripple {
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
