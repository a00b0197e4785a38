//! Storage keys addressing member slots on an editable object.

/// Separator between the member segment and the entry segment of a
/// compound key.
pub const KEY_SEPARATOR: &str = "::";

/// Storage key of one control: a named member, optionally addressing one
/// entry of a keyed mapping held by that member (one nesting level).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldKey {
	/// Member name on the owning type.
	pub member: &'static str,
	/// Entry key within the member's mapping, for compound keys.
	pub entry: Option<&'static str>,
}

impl FieldKey {
	/// Key addressing a member directly.
	pub const fn simple(member: &'static str) -> Self {
		Self {
			member,
			entry: None,
		}
	}

	/// Key addressing one entry of a mapping member.
	pub const fn entry(member: &'static str, entry: &'static str) -> Self {
		Self {
			member,
			entry: Some(entry),
		}
	}

	/// Whether this key has an entry segment.
	pub const fn is_compound(&self) -> bool {
		self.entry.is_some()
	}
}

impl core::fmt::Display for FieldKey {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self.entry {
			Some(entry) => write!(f, "{}{KEY_SEPARATOR}{}", self.member, entry),
			None => f.write_str(self.member),
		}
	}
}

/// Splits a raw routing key on the first separator.
///
/// One nesting level only: everything after the first separator is the
/// entry key, verbatim.
pub fn split_key(raw: &str) -> (&str, Option<&str>) {
	match raw.split_once(KEY_SEPARATOR) {
		Some((member, entry)) => (member, Some(entry)),
		None => (raw, None),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn simple_key_renders_member_name() {
		assert_eq!(FieldKey::simple("health").to_string(), "health");
	}

	#[test]
	fn compound_key_renders_with_separator() {
		assert_eq!(
			FieldKey::entry("stats", "strength").to_string(),
			"stats::strength"
		);
	}

	#[test]
	fn split_simple() {
		assert_eq!(split_key("health"), ("health", None));
	}

	#[test]
	fn split_compound() {
		assert_eq!(split_key("stats::strength"), ("stats", Some("strength")));
	}

	#[test]
	fn split_keeps_extra_separators_in_entry() {
		assert_eq!(split_key("a::b::c"), ("a", Some("b::c")));
	}
}
