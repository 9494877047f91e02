//! `mdc.dialog.MDCDialog`.

use super::{ComponentType, MdcComponent, MdcWidget, StateMap, StateMapper};
use crate::error::MdcResult;
use tracing::instrument;

pub const TYPE: ComponentType = ComponentType {
	class_name: "MDCDialog",
	module: "dialog",
};

#[derive(Debug)]
pub struct Dialog {
	mdc: MdcComponent,
	/// Initial open state, pushed on [`MdcWidget::start`].
	pub open: bool,
}
impl Default for Dialog {
	fn default() -> Self {
		Self::new()
	}
}
impl Dialog {
	#[must_use]
	pub fn new() -> Self {
		Self {
			mdc: MdcComponent::new(TYPE),
			open: false,
		}
	}

	#[must_use]
	pub fn component(&self) -> &MdcComponent {
		&self.mdc
	}

	/// Shows the dialog. If it is already open, MDC-Web treats this as a no-op.
	#[instrument]
	pub fn open(&mut self) -> MdcResult<()> {
		self.mdc.call("show")?;
		self.open = true;
		Ok(())
	}

	/// Removes the dialog from view. If it is already closed, MDC-Web treats this as a no-op.
	#[instrument]
	pub fn close(&mut self) -> MdcResult<()> {
		self.mdc.call("close")?;
		self.open = false;
		Ok(())
	}

	/// The live `open` property while started, otherwise the stored field.
	#[must_use]
	pub fn is_open(&self) -> bool {
		if self.mdc.is_started() {
			if let Ok(open) = self.mdc.get("open") {
				return open.as_bool().unwrap_or(self.open);
			}
		}
		self.open
	}
}
impl StateMapper for Dialog {
	fn state_map(&self) -> StateMap {
		StateMap::new().with("open", self.open)
	}
}
impl MdcWidget for Dialog {
	fn start(&mut self, root: &web_sys::Element) -> MdcResult<()> {
		let state = self.state_map();
		self.mdc.start(root, &state)?;
		// `open` is read-only on some MDC-Web versions.
		if self.open {
			self.mdc.call("show")?;
		}
		Ok(())
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
	use crate::error::MdcError;

	#[test]
	fn imperative_calls_need_a_live_object() {
		let mut dialog = Dialog::new();
		assert_eq!(dialog.open(), Err(MdcError::NotStarted { class: "MDCDialog" }));
		assert_eq!(dialog.close(), Err(MdcError::NotStarted { class: "MDCDialog" }));
		assert!(!dialog.is_open());
	}

	#[test]
	fn state_map_is_open_only() {
		let mut dialog = Dialog::new();
		dialog.open = true;
		assert_eq!(dialog.state_map(), StateMap::new().with("open", true));
	}
}
