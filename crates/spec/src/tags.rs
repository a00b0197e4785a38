//! Metadata tags controlling a member's presence in the edit view.

/// Exposes a normally hidden member, optionally renaming or locking it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForceInclude {
	/// Display label override. `None` keeps the member's own name.
	pub name: Option<&'static str>,
	/// Locks the control even if the member has a setter.
	pub read_only: bool,
}

impl ForceInclude {
	/// Tag with no overrides: the member keeps its name and stays editable.
	pub const fn new() -> Self {
		Self {
			name: None,
			read_only: false,
		}
	}

	/// Tag overriding the display label.
	pub const fn named(name: &'static str) -> Self {
		Self {
			name: Some(name),
			read_only: false,
		}
	}

	/// Marks the control read-only.
	pub const fn locked(self) -> Self {
		Self {
			name: self.name,
			read_only: true,
		}
	}
}

/// Marker metadata attached to one member of an editable type.
///
/// `exclude` always wins: an excluded member never becomes a control,
/// regardless of `force_include`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldTags {
	/// Member never becomes a control.
	pub exclude: bool,
	/// Exposes a member the visibility rule would otherwise hide.
	pub force_include: Option<ForceInclude>,
}

impl FieldTags {
	/// No tags; inclusion follows the visibility rule alone.
	pub const NONE: Self = Self {
		exclude: false,
		force_include: None,
	};

	/// Excluded member.
	pub const EXCLUDE: Self = Self {
		exclude: true,
		force_include: None,
	};

	/// Force-included member.
	pub const fn force_include(tag: ForceInclude) -> Self {
		Self {
			exclude: false,
			force_include: Some(tag),
		}
	}
}
