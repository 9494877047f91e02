//! Records span and event text for tests that check what reaches a subscriber.

use core::fmt::{Debug, Write as _};
use std::sync::{
	atomic::{AtomicU64, Ordering},
	Arc, Mutex,
};
use tracing::{
	field::{Field, Visit},
	span, Event, Metadata, Subscriber,
};

struct Writer<'a>(&'a mut String);
impl Visit for Writer<'_> {
	fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
		let _ = write!(self.0, " {}={:?}", field.name(), value);
	}
}

#[derive(Default)]
struct Capture {
	text: Arc<Mutex<String>>,
	next_id: AtomicU64,
}
impl Capture {
	fn push(&self, line: impl FnOnce(&mut String)) {
		if let Ok(mut text) = self.text.lock() {
			line(&mut text);
			text.push('\n');
		}
	}
}
impl Subscriber for Capture {
	fn enabled(&self, _: &Metadata<'_>) -> bool {
		true
	}

	fn new_span(&self, span: &span::Attributes<'_>) -> span::Id {
		self.push(|text| {
			text.push_str(span.metadata().name());
			span.record(&mut Writer(text));
		});
		span::Id::from_u64(self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
	}

	fn record(&self, _: &span::Id, values: &span::Record<'_>) {
		self.push(|text| values.record(&mut Writer(text)));
	}

	fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}

	fn event(&self, event: &Event<'_>) {
		self.push(|text| event.record(&mut Writer(text)));
	}

	fn enter(&self, _: &span::Id) {}

	fn exit(&self, _: &span::Id) {}
}

/// Runs `f` with a subscriber that records every span and event, and returns what it recorded.
pub fn capture(f: impl FnOnce()) -> String {
	let capture = Capture::default();
	let text = capture.text.clone();
	tracing::subscriber::with_default(capture, f);
	let text = text.lock().map(|text| text.clone());
	text.unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::capture;
	use crate::{
		base::{Props, WidgetBase},
		checkbox::{Checkbox, CheckboxState},
		dialog::{Dialog, DialogState},
		drawer::{Drawer, DrawerState},
		Markup, Node,
	};

	const SECRET: &str = "jane.doe@example.com";

	fn props() -> Props {
		Props {
			id: Some("account".to_owned()),
			markup: Markup::new().attr("data-email", SECRET),
			..Props::default()
		}
	}

	#[test]
	fn records_event_fields() {
		let text = capture(|| tracing::trace!(answer = 42, "Checking."));
		assert!(text.contains("answer=42"), "{}", text);
	}

	#[cfg(not(feature = "dangerous-logging"))]
	#[test]
	fn widget_entry_points_keep_content_out_of_spans() {
		let dialog = Dialog::new(
			props(),
			DialogState {
				title: Some(Node::text(SECRET)),
				body: Some(Node::text(SECRET)),
				..DialogState::default()
			},
		);
		let checkbox = Checkbox::new(
			props(),
			CheckboxState {
				value: SECRET.to_owned(),
				..CheckboxState::default()
			},
		);
		let drawer = Drawer::new(
			props(),
			DrawerState {
				content: Some(Node::text(SECRET)),
				..DrawerState::default()
			},
		);
		let mut base = WidgetBase::new(props());

		let text = capture(|| {
			assert!(dialog.open().is_err());
			assert!(dialog.close().is_err());
			assert_eq!(checkbox.stop(), Ok(()));
			let _ = checkbox.pull_state();
			let _ = drawer.set_open(true);
			base.unmount();
		});

		for name in &["open", "close", "stop", "pull_state", "set_open", "unmount"] {
			assert!(text.lines().any(|line| line.split(' ').next() == Some(*name)), "missing span {:?} in:\n{}", name, text);
		}
		assert!(!text.contains(SECRET), "{}", text);
	}
}
