//! Field tables and metadata for synthesized edit views.
//!
//! An editable type registers a static description of its members once;
//! the `uxmenu` runtime walks that description to synthesize a view of
//! labeled controls and to route control changes back into storage.
//! This crate provides:
//! - Metadata tags ([`FieldTags`], [`ForceInclude`])
//! - Control values ([`FieldValue`], [`FieldType`])
//! - Storage keys ([`FieldKey`], [`split_key`])
//! - Per-type field tables ([`FieldSpec`], [`TypeSpec`], [`Editable`])
//! - Registration macros ([`value_field!`], [`map_field!`], [`impl_editable!`])

pub mod field;
pub mod key;
mod macros;
pub mod tags;
pub mod title;
pub mod value;

pub use field::{
	Editable, EntryGetter, EntrySetter, FieldAccess, FieldSpec, FieldVisibility, TypeSpec,
	ValueGetter, ValueSetter, WriteError,
};
pub use key::{FieldKey, KEY_SEPARATOR, split_key};
pub use tags::{FieldTags, ForceInclude};
pub use title::menu_title;
pub use value::{FieldType, FieldValue};
