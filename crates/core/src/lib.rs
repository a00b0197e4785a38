//! Synthesized edit views for component-like objects.
//!
//! Any type that registers a field table (via
//! [`impl_editable!`](uxmenu_spec::impl_editable)) gets a generated
//! editing form without hand-written form code. This crate provides:
//! - Field and view synthesis ([`synth`]) driven by the inclusion rules
//! - A process-wide template cache ([`cache`]), one synthesis per type
//! - Per-instance binding ([`bind`]) attaching change routing callbacks
//! - The change router ([`route`]) for outbound writes and explicit pulls
//! - The live widget-facing surface ([`view`])
//!
//! Templates are cached per type and carry no instance state; bindings
//! are created per editing session and never cached.

pub mod bind;
pub mod cache;
pub mod descriptor;
pub mod menu;
pub mod route;
pub mod synth;
pub mod template;
pub mod view;

pub use bind::{SUB_VALUE_CHANGED, VALUE_CHANGED, bind};
pub use cache::get_or_build;
pub use descriptor::FieldDescriptor;
pub use menu::{edit_view, open_editor};
pub use route::{RouteError, apply, pull_field_value, read};
pub use synth::{TemplateBuilder, ViewBuilder, build_template, build_view, synthesize_field};
pub use template::ViewTemplate;
// Re-export the definition layer so depending on this crate alone is enough.
pub use uxmenu_spec::{
	Editable, FieldAccess, FieldKey, FieldSpec, FieldTags, FieldType, FieldValue, FieldVisibility,
	ForceInclude, KEY_SEPARATOR, TypeSpec, WriteError, impl_editable, map_field, menu_title,
	split_key, unsupported_field, value_field,
};
pub use view::{ChangeListener, DataField, View};
