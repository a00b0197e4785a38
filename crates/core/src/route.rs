//! Routes control changes to storage locations on live objects.
//!
//! Outbound: [`apply`] writes a control value to the member (or mapping
//! entry) its storage key names. Inbound: [`pull_field_value`] pulls one
//! field's current value out of a view and routes it the same way.
//! Resolution goes through the type's registered field table, so a write
//! never searches the live object by name; an unresolvable key fails
//! before anything is touched.

use thiserror::Error;
use uxmenu_spec::{Editable, FieldAccess, FieldKey, FieldValue, WriteError, split_key};

use crate::view::View;

/// Failure to resolve or write a storage key. The target object is never
/// mutated when routing fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
	#[error("{type_name} has no member {member:?}")]
	UnknownMember {
		type_name: &'static str,
		member: String,
	},
	#[error("member {member:?} of {type_name} is not writable")]
	NotWritable {
		type_name: &'static str,
		member: &'static str,
	},
	#[error("member {member:?} of {type_name} is not a keyed mapping")]
	NotAMapping {
		type_name: &'static str,
		member: &'static str,
	},
	#[error("member {member:?} of {type_name} is a keyed mapping; the key needs an entry segment")]
	MissingEntryKey {
		type_name: &'static str,
		member: &'static str,
	},
	#[error("member {member:?} of {type_name} cannot hold a control value")]
	Unsupported {
		type_name: &'static str,
		member: &'static str,
	},
	#[error("write to member {member:?} of {type_name} rejected: {source}")]
	Rejected {
		type_name: &'static str,
		member: &'static str,
		source: WriteError,
	},
}

/// Writes `value` to the storage location named by `raw_key` on
/// `object`.
///
/// A compound key (`member::entry`) addresses one entry of the keyed
/// mapping held by the member; a simple key addresses the member
/// itself.
pub fn apply(
	object: &mut dyn Editable,
	raw_key: &str,
	value: FieldValue,
) -> Result<(), RouteError> {
	let spec = object.type_spec();
	let type_name = spec.type_name;
	let (member, entry) = split_key(raw_key);
	let field = spec
		.field(member)
		.ok_or_else(|| RouteError::UnknownMember {
			type_name,
			member: member.to_string(),
		})?;
	let member = field.name;
	match (field.access, entry) {
		(FieldAccess::Value { set: Some(set), .. }, None) => set(object.as_any_mut(), value)
			.map_err(|source| RouteError::Rejected {
				type_name,
				member,
				source,
			}),
		(FieldAccess::Value { set: None, .. }, None) => Err(RouteError::NotWritable {
			type_name,
			member,
		}),
		(FieldAccess::Value { .. }, Some(_)) => Err(RouteError::NotAMapping {
			type_name,
			member,
		}),
		(FieldAccess::Map { set, .. }, Some(entry)) => set(object.as_any_mut(), entry, value)
			.map_err(|source| RouteError::Rejected {
				type_name,
				member,
				source,
			}),
		(FieldAccess::Map { .. }, None) => Err(RouteError::MissingEntryKey {
			type_name,
			member,
		}),
		(FieldAccess::Unsupported, _) => Err(RouteError::Unsupported {
			type_name,
			member,
		}),
	}
}

/// Reads the current value at `key` on `object`, if the key resolves.
pub fn read(object: &dyn Editable, key: &FieldKey) -> Option<FieldValue> {
	let field = object.type_spec().field(key.member)?;
	match (field.access, key.entry) {
		(FieldAccess::Value { get, .. }, None) => get(object.as_any()),
		(FieldAccess::Map { get, .. }, Some(entry)) => get(object.as_any(), entry),
		_ => None,
	}
}

/// Pulls one field's current value out of `view` and routes it into
/// `object` exactly as [`apply`] does.
///
/// A field key naming no field in the view is a quiet no-op, as is a
/// field holding no value yet. With no field key supplied this does
/// nothing: only the documented single-field refresh exists; there is
/// deliberately no "refresh from the whole view" path.
pub fn pull_field_value(
	object: &mut dyn Editable,
	view: &View,
	field_key: Option<&str>,
) -> Result<(), RouteError> {
	let Some(key) = field_key else {
		return Ok(());
	};
	let Some(field) = view.field(key) else {
		return Ok(());
	};
	let Some(value) = field.value() else {
		return Ok(());
	};
	apply(object, key, value)
}

#[cfg(test)]
mod tests {
	use uxmenu_spec::{impl_editable, unsupported_field, value_field};

	use super::*;

	struct Gauge {
		level: i64,
		samples: Vec<i64>,
	}

	impl_editable!(Gauge, [
		value_field!(Gauge, level: Int {
			get: |g| g.level,
		}),
		unsupported_field!(samples),
	]);

	fn sample_gauge() -> Gauge {
		Gauge {
			level: 4,
			samples: vec![1],
		}
	}

	#[test]
	fn setterless_member_rejects_writes() {
		let mut gauge = sample_gauge();
		let err = apply(&mut gauge, "level", FieldValue::Int(9))
			.expect_err("setter-less member should reject writes");
		assert!(matches!(err, RouteError::NotWritable { .. }));
		assert_eq!(gauge.level, 4);
	}

	#[test]
	fn unsupported_member_rejects_routing() {
		let mut gauge = sample_gauge();
		let err = apply(&mut gauge, "samples", FieldValue::Int(9))
			.expect_err("unsupported member should reject routing");
		assert!(matches!(err, RouteError::Unsupported { .. }));
		assert_eq!(gauge.samples, vec![1]);

		let err = apply(&mut gauge, "samples::first", FieldValue::Int(9))
			.expect_err("unsupported member should reject compound keys too");
		assert!(matches!(err, RouteError::Unsupported { .. }));
		assert_eq!(gauge.samples, vec![1]);
	}

	#[test]
	fn setterless_member_still_reads() {
		let gauge = sample_gauge();
		let value = read(&gauge, &FieldKey::simple("level"));
		assert_eq!(value, Some(FieldValue::Int(4)));
	}
}
