//! One constructor per standard HTML element, plus [`tag`] for everything else.
//!
//! The set of supported elements is the [`TAGS`] table. Each row also becomes a function of the same name here,
//! so `elem::unordered_list()` and `elem::tag("ul")` build the same element.

use crate::node::{Element, Namespace};
use std::borrow::Cow;
use tracing::warn;

macro_rules! elements {
	($($name:ident => $tag:literal),*$(,)?) => {
		/// Every supported HTML element as `(constructor name, tag name)`.
		pub const TAGS: &[(&str, &str)] = &[$((stringify!($name), $tag)),*];

		$(
			#[doc = concat!("`<", $tag, ">`")]
			#[must_use]
			pub fn $name() -> Element {
				Element::html($tag)
			}
		)*
	};
}

elements! {
	anchor => "a",
	abbreviation => "abbr",
	address => "address",
	area => "area",
	article => "article",
	aside => "aside",
	audio => "audio",
	bold => "b",
	base => "base",
	bidirectional_isolation => "bdi",
	bidirectional_override => "bdo",
	block_quote => "blockquote",
	body => "body",
	line_break => "br",
	button => "button",
	canvas => "canvas",
	caption => "caption",
	citation => "cite",
	code => "code",
	column => "col",
	column_group => "colgroup",
	data => "data",
	data_list => "datalist",
	description => "dd",
	deleted_text => "del",
	details => "details",
	definition => "dfn",
	dialog => "dialog",
	div => "div",
	description_list => "dl",
	definition_term => "dt",
	emphasis => "em",
	embed => "embed",
	field_set => "fieldset",
	figure_caption => "figcaption",
	figure => "figure",
	footer => "footer",
	form => "form",
	heading1 => "h1",
	heading2 => "h2",
	heading3 => "h3",
	heading4 => "h4",
	heading5 => "h5",
	heading6 => "h6",
	header => "header",
	headings_group => "hgroup",
	horizontal_rule => "hr",
	italic => "i",
	inline_frame => "iframe",
	image => "img",
	input => "input",
	inserted_text => "ins",
	keyboard_input => "kbd",
	label => "label",
	legend => "legend",
	list_item => "li",
	link => "link",
	main => "main",
	map => "map",
	mark => "mark",
	menu => "menu",
	menu_item => "menuitem",
	meta => "meta",
	meter => "meter",
	navigation => "nav",
	no_frames => "noframes",
	no_script => "noscript",
	object => "object",
	ordered_list => "ol",
	options_group => "optgroup",
	option => "option",
	output => "output",
	paragraph => "p",
	parameter => "param",
	picture => "picture",
	preformatted => "pre",
	progress => "progress",
	quote => "q",
	ruby_parenthesis => "rp",
	ruby_text => "rt",
	ruby_text_container => "rtc",
	ruby => "ruby",
	strikethrough => "s",
	sample => "samp",
	script => "script",
	section => "section",
	select => "select",
	slot => "slot",
	small => "small",
	source => "source",
	span => "span",
	strong => "strong",
	style => "style",
	subscript => "sub",
	summary => "summary",
	superscript => "sup",
	table => "table",
	table_body => "tbody",
	table_data => "td",
	template => "template",
	text_area => "textarea",
	table_foot => "tfoot",
	table_header => "th",
	table_head => "thead",
	time => "time",
	title => "title",
	table_row => "tr",
	track => "track",
	underline => "u",
	unordered_list => "ul",
	variable => "var",
	video => "video",
	word_break_opportunity => "wbr",
}

/// Whether `name` is in [`TAGS`].
#[must_use]
pub fn is_known(name: &str) -> bool {
	TAGS.iter().any(|&(_, tag)| tag == name)
}

/// Builds an HTML element by tag name.
///
/// Unknown names still produce an element (custom elements are legitimate), but are logged.
#[must_use]
pub fn tag(name: impl Into<Cow<'static, str>>) -> Element {
	let name = name.into();
	if !is_known(&name) && !name.contains('-') {
		warn!("Building unknown HTML element <{}>.", name);
	}
	Element::html(name)
}

/// The few SVG elements used by the bundled widgets.
pub mod svg {
	use super::{Element, Namespace};

	#[must_use]
	pub fn svg() -> Element {
		Element::new(Namespace::Svg, "svg")
	}

	#[must_use]
	pub fn path() -> Element {
		Element::new(Namespace::Svg, "path")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn constructors_match_table() {
		assert_eq!(anchor().tag(), "a");
		assert_eq!(unordered_list().tag(), "ul");
		assert_eq!(heading3().tag(), "h3");
		assert_eq!(line_break().tag(), "br");
		assert_eq!(word_break_opportunity().tag(), "wbr");
		assert_eq!(TAGS.len(), 113);
	}

	#[test]
	fn table_has_no_duplicate_tags() {
		let mut tags: Vec<_> = TAGS.iter().map(|&(_, tag)| tag).collect();
		tags.sort_unstable();
		tags.dedup();
		assert_eq!(tags.len(), TAGS.len());
	}

	#[test]
	fn generic_constructor() {
		assert!(is_known("nav"));
		assert!(!is_known("navigation"));
		let element = tag("mdc-custom");
		assert_eq!(element.tag(), "mdc-custom");
		assert_eq!(element.namespace(), Namespace::Html);
	}

	#[test]
	fn svg_namespace() {
		assert_eq!(svg::path().namespace(), Namespace::Svg);
	}
}
