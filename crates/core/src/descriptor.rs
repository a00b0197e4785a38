//! Synthesized control descriptors.

use uxmenu_spec::{FieldKey, FieldType};

/// One synthesized editable control: what the widget layer renders.
///
/// Pure shape data; the live value and change listeners belong to the
/// bound [`DataField`](crate::view::DataField).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
	/// Storage key resolving to exactly one writable location on the
	/// owning object.
	pub key: FieldKey,
	/// Display label.
	pub label: &'static str,
	/// Kind of control to render.
	pub ty: FieldType,
	/// Whether the widget layer must lock the control.
	pub read_only: bool,
}

impl FieldDescriptor {
	/// Canonical data key; compound keys render as `member::entry`.
	pub fn data_key(&self) -> String {
		self.key.to_string()
	}
}
