//! Per-type field tables: bound accessors replacing name lookup at edit
//! time.
//!
//! Each editable type registers one static [`TypeSpec`] listing its
//! members with pre-bound getter/setter pairs. Walking the table happens
//! once per type when its view is synthesized; routing a change is a
//! table lookup plus a bound write, never a by-name member search on the
//! live object.

use std::any::Any;

use crate::tags::FieldTags;
use crate::value::{FieldType, FieldValue};

/// Why a bound setter refused a write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WriteError {
	/// Value kind does not match the member's declared kind.
	#[error("value type mismatch: expected {expected}, got {got}")]
	TypeMismatch {
		expected: FieldType,
		got: FieldType,
	},
	/// The routed object is not the type this accessor was bound for.
	#[error("target object is not a {expected}")]
	WrongTarget { expected: &'static str },
}

/// Bound getter for a plain value member.
pub type ValueGetter = fn(&dyn Any) -> Option<FieldValue>;
/// Bound setter for a plain value member.
pub type ValueSetter = fn(&mut dyn Any, FieldValue) -> Result<(), WriteError>;
/// Bound getter for one entry of a mapping member.
pub type EntryGetter = fn(&dyn Any, &str) -> Option<FieldValue>;
/// Bound setter for one entry of a mapping member.
pub type EntrySetter = fn(&mut dyn Any, &str, FieldValue) -> Result<(), WriteError>;

/// Whether a member is part of the type's public surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVisibility {
	Public,
	Private,
}

/// Bound storage access for one declared member.
#[derive(Debug, Clone, Copy)]
pub enum FieldAccess {
	/// Plain value slot. `set: None` means the member has no setter and
	/// its control is read-only.
	Value {
		ty: FieldType,
		get: ValueGetter,
		set: Option<ValueSetter>,
	},
	/// Keyed mapping edited one entry at a time; `entries` lists the
	/// sub-keys that become controls. One nesting level only.
	Map {
		ty: FieldType,
		get: EntryGetter,
		set: EntrySetter,
		entries: &'static [&'static str],
	},
	/// Member whose value type has no control representation. Synthesis
	/// skips it silently.
	Unsupported,
}

/// One declared member of an editable type.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
	/// Member name; doubles as the storage key's member segment.
	pub name: &'static str,
	pub visibility: FieldVisibility,
	pub tags: FieldTags,
	pub access: FieldAccess,
}

/// Registered description of an editable type's members.
///
/// Immutable for the process lifetime; the view cache relies on that.
#[derive(Debug)]
pub struct TypeSpec {
	/// Bare type name the menu title is derived from.
	pub type_name: &'static str,
	/// Declared members, in view order.
	pub fields: &'static [FieldSpec],
}

impl TypeSpec {
	/// Looks up a declared member by name.
	pub fn field(&self, name: &str) -> Option<&FieldSpec> {
		self.fields.iter().find(|field| field.name == name)
	}
}

/// An object whose type can produce an edit view of itself.
///
/// Implemented via [`impl_editable!`](crate::impl_editable); the trait
/// only hands out the static type description and `Any` views of the
/// instance for the bound accessors to downcast.
pub trait Editable: Any {
	/// Static description of this type's editable members.
	fn type_spec(&self) -> &'static TypeSpec;
	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
}
