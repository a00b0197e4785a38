//! Values carried between controls and object storage.

/// Kind of value a control edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
	/// Boolean toggle.
	Bool,
	/// Integer input.
	Int,
	/// Floating-point input.
	Float,
	/// Text input.
	Text,
}

impl FieldType {
	/// Short lowercase name for messages.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Float => "float",
			Self::Text => "text",
		}
	}
}

impl core::fmt::Display for FieldType {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.name())
	}
}

/// Current value of one editable control.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
	/// Boolean value (true/false).
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// Floating-point value.
	Float(f64),
	/// Text value.
	Text(String),
}

impl FieldValue {
	/// Kind of this value.
	pub fn kind(&self) -> FieldType {
		match self {
			Self::Bool(_) => FieldType::Bool,
			Self::Int(_) => FieldType::Int,
			Self::Float(_) => FieldType::Float,
			Self::Text(_) => FieldType::Text,
		}
	}

	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Self::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the float value if this is a `Float` variant.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			Self::Float(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the text value if this is a `Text` variant.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(v) => Some(v),
			_ => None,
		}
	}
}
