//! Cached per-type view shapes.

use crate::descriptor::FieldDescriptor;

/// Immutable view shape for one editable type: a title plus its control
/// descriptors in declaration order.
///
/// A template carries no instance binding, which is what makes it safe
/// to cache process-wide and share between editing sessions; see
/// [`crate::bind`].
#[derive(Debug, Clone)]
pub struct ViewTemplate {
	title: Box<str>,
	fields: Vec<FieldDescriptor>,
}

impl ViewTemplate {
	pub(crate) fn new(title: &str, fields: Vec<FieldDescriptor>) -> Self {
		Self {
			title: Box::from(title),
			fields,
		}
	}

	/// Menu title derived from the owning type's name.
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Control descriptors in declaration order.
	pub fn fields(&self) -> &[FieldDescriptor] {
		&self.fields
	}

	/// Looks up a descriptor by its rendered data key.
	pub fn field(&self, data_key: &str) -> Option<&FieldDescriptor> {
		self.fields
			.iter()
			.find(|field| field.data_key() == data_key)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}
