//! `mdc.drawer.MDCTemporaryDrawer` and `mdc.drawer.MDCPersistentDrawer`.
//!
//! Permanent drawers are pure CSS and have no class here.

use super::{ComponentType, MdcComponent, MdcWidget, StateMap, StateMapper, StateValue};
use crate::error::MdcResult;
use tracing::instrument;

pub const TEMPORARY: ComponentType = ComponentType {
	class_name: "MDCTemporaryDrawer",
	module: "drawer",
};

pub const PERSISTENT: ComponentType = ComponentType {
	class_name: "MDCPersistentDrawer",
	module: "drawer",
};

/// Either of the two scripted drawer classes. They share the same surface.
#[derive(Debug)]
pub struct Drawer {
	mdc: MdcComponent,
	/// Open state, pushed on [`MdcWidget::start`] and by [`Drawer::set_open`].
	pub open: bool,
}
impl Drawer {
	#[must_use]
	pub fn temporary() -> Self {
		Self::with_type(TEMPORARY)
	}

	#[must_use]
	pub fn persistent() -> Self {
		Self::with_type(PERSISTENT)
	}

	fn with_type(kind: ComponentType) -> Self {
		Self {
			mdc: MdcComponent::new(kind),
			open: false,
		}
	}

	#[must_use]
	pub fn component(&self) -> &MdcComponent {
		&self.mdc
	}

	/// Updates the stored state and, while started, the live object.
	#[instrument]
	pub fn set_open(&mut self, open: bool) -> MdcResult<()> {
		if self.mdc.is_started() {
			self.mdc.set("open", &StateValue::Bool(open))?;
		}
		self.open = open;
		Ok(())
	}
}
impl StateMapper for Drawer {
	fn state_map(&self) -> StateMap {
		StateMap::new().with("open", self.open)
	}
}
impl MdcWidget for Drawer {
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
