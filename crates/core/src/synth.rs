//! Field and view synthesis.
//!
//! Walks a type's registered field table exactly once, deciding per
//! member whether it becomes a control and how it is labeled. The
//! result is an immutable [`ViewTemplate`] assembled through the
//! [`ViewBuilder`] seam so an external widget library can intercept
//! construction.

use tracing::{debug, trace};
use uxmenu_spec::{FieldAccess, FieldKey, FieldSpec, FieldVisibility, TypeSpec};

use crate::descriptor::FieldDescriptor;
use crate::template::ViewTemplate;

/// Assembly seam for the widget layer. [`TemplateBuilder`] is the
/// default implementation.
pub trait ViewBuilder {
	/// Appends one synthesized control.
	fn add_field(&mut self, field: FieldDescriptor);
	/// Finalizes the template.
	fn build(self: Box<Self>) -> ViewTemplate;
}

/// Default builder producing a plain [`ViewTemplate`].
pub struct TemplateBuilder {
	title: String,
	fields: Vec<FieldDescriptor>,
}

impl TemplateBuilder {
	pub fn new(title: &str) -> Self {
		Self {
			title: title.to_string(),
			fields: Vec::new(),
		}
	}
}

impl ViewBuilder for TemplateBuilder {
	fn add_field(&mut self, field: FieldDescriptor) {
		self.fields.push(field);
	}

	fn build(self: Box<Self>) -> ViewTemplate {
		ViewTemplate::new(&self.title, self.fields)
	}
}

/// Decides inclusion for one member and produces its control descriptor.
///
/// `entry` addresses one mapping entry when the member holds a keyed
/// mapping; the entry name then labels the control. Rule order: an
/// `exclude` tag always wins; otherwise public members and force-included
/// members proceed; everything else yields nothing. Members without a
/// control representation are skipped silently. Never errors.
pub fn synthesize_field(
	spec: &FieldSpec,
	entry: Option<&'static str>,
) -> Option<FieldDescriptor> {
	if spec.tags.exclude {
		return None;
	}
	let force = spec.tags.force_include;
	if spec.visibility != FieldVisibility::Public && force.is_none() {
		return None;
	}
	let (ty, writable) = match spec.access {
		FieldAccess::Value { ty, set, .. } => (ty, set.is_some()),
		FieldAccess::Map { ty, .. } => (ty, true),
		FieldAccess::Unsupported => {
			trace!(member = spec.name, "member has no control representation");
			return None;
		}
	};
	let read_only = match force {
		Some(tag) => tag.read_only,
		None => !writable,
	};
	let (key, label) = match entry {
		Some(sub) => (FieldKey::entry(spec.name, sub), sub),
		None => (
			FieldKey::simple(spec.name),
			force.and_then(|tag| tag.name).unwrap_or(spec.name),
		),
	};
	Some(FieldDescriptor {
		key,
		label,
		ty,
		read_only,
	})
}

/// Walks every declared member of `spec` through the field synthesizer,
/// appending produced descriptors via `builder`. Mapping members are
/// synthesized once per declared entry, everything else once.
pub fn build_view(spec: &TypeSpec, mut builder: Box<dyn ViewBuilder>) -> ViewTemplate {
	for field in spec.fields {
		match field.access {
			FieldAccess::Map { entries, .. } => {
				for &entry in entries {
					if let Some(descriptor) = synthesize_field(field, Some(entry)) {
						builder.add_field(descriptor);
					}
				}
			}
			_ => {
				if let Some(descriptor) = synthesize_field(field, None) {
					builder.add_field(descriptor);
				}
			}
		}
	}
	let template = builder.build();
	debug!(
		title = template.title(),
		fields = template.len(),
		"synthesized view template"
	);
	template
}

/// Builds the view template for `spec` with the default builder.
pub fn build_template(title: &str, spec: &TypeSpec) -> ViewTemplate {
	build_view(spec, Box::new(TemplateBuilder::new(title)))
}

#[cfg(test)]
mod tests {
	use uxmenu_spec::{
		FieldTags, FieldType, ForceInclude, TypeSpec, map_field, unsupported_field, value_field,
	};

	use super::*;

	struct Probe {
		hp: i64,
		secret: String,
		stats: std::collections::HashMap<String, i64>,
	}

	fn probe_spec() -> &'static TypeSpec {
		static FIELDS: &[FieldSpec] = &[
			value_field!(Probe, hp: Int {
				get: |p| p.hp,
				set: |p, v| p.hp = v,
			}),
			value_field!(Probe, secret: Text {
				get: |p| p.secret.clone(),
				set: |p, v| p.secret = v,
				visibility: FieldVisibility::Private,
			}),
			value_field!(Probe, hidden_forced: Text {
				get: |p| p.secret.clone(),
				visibility: FieldVisibility::Private,
				tags: FieldTags::force_include(ForceInclude::named("Secret")),
			}),
			value_field!(Probe, shadowed: Int {
				get: |p| p.hp,
				set: |p, v| p.hp = v,
				tags: FieldTags::EXCLUDE,
			}),
			map_field!(Probe, stats: Int {
				entries: ["strength", "agility"],
				get: |p, key| p.stats.get(key).copied(),
				set: |p, key, v| { p.stats.insert(key.to_string(), v); },
			}),
			unsupported_field!(blob),
		];
		static SPEC: TypeSpec = TypeSpec {
			type_name: "Probe",
			fields: FIELDS,
		};
		&SPEC
	}

	#[test]
	fn public_member_becomes_control() {
		let spec = probe_spec();
		let field = synthesize_field(spec.field("hp").expect("hp should be declared"), None)
			.expect("public member should synthesize");
		assert_eq!(field.label, "hp");
		assert_eq!(field.ty, FieldType::Int);
		assert!(!field.read_only);
	}

	#[test]
	fn private_untagged_member_is_skipped() {
		let spec = probe_spec();
		let field = spec.field("secret").expect("secret should be declared");
		assert!(synthesize_field(field, None).is_none());
	}

	#[test]
	fn force_include_overrides_visibility_and_label() {
		let spec = probe_spec();
		let field = spec
			.field("hidden_forced")
			.expect("hidden_forced should be declared");
		let control = synthesize_field(field, None).expect("forced member should synthesize");
		assert_eq!(control.label, "Secret");
		// read_only defaults to unlocked when the tag is present
		assert!(!control.read_only);
	}

	#[test]
	fn force_include_without_a_name_keeps_the_member_name() {
		let spec = probe_spec();
		let field = spec.field("secret").expect("secret should be declared");
		let forced = FieldSpec {
			tags: FieldTags::force_include(ForceInclude::new()),
			..*field
		};
		let control = synthesize_field(&forced, None).expect("forced member should synthesize");
		assert_eq!(control.label, "secret");
		assert!(!control.read_only);
	}

	#[test]
	fn exclude_always_wins() {
		let spec = probe_spec();
		let field = spec.field("shadowed").expect("shadowed should be declared");
		assert!(synthesize_field(field, None).is_none());

		let both = FieldSpec {
			tags: FieldTags {
				exclude: true,
				force_include: Some(ForceInclude::named("Never")),
			},
			..*field
		};
		assert!(synthesize_field(&both, None).is_none());
	}

	#[test]
	fn setterless_member_is_read_only() {
		let spec = probe_spec();
		let forced = spec
			.field("hidden_forced")
			.expect("hidden_forced should be declared");
		let untagged = FieldSpec {
			visibility: FieldVisibility::Public,
			tags: FieldTags::NONE,
			..*forced
		};
		let control = synthesize_field(&untagged, None).expect("public member should synthesize");
		assert!(control.read_only);
	}

	#[test]
	fn mapping_member_yields_one_control_per_entry() {
		let template = build_template("Probe", probe_spec());
		let keys: Vec<String> = template
			.fields()
			.iter()
			.map(FieldDescriptor::data_key)
			.collect();
		assert_eq!(
			keys,
			["hp", "hidden_forced", "stats::strength", "stats::agility"].map(String::from)
		);
	}

	#[test]
	fn entry_controls_are_labeled_by_entry_name() {
		let template = build_template("Probe", probe_spec());
		let strength = template
			.field("stats::strength")
			.expect("entry control should exist");
		assert_eq!(strength.label, "strength");
		assert!(!strength.read_only);
	}
}
