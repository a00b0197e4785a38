//! Live widget-facing view surface.
//!
//! A [`View`] is one editing session's set of controls. Each
//! [`DataField`] holds the control's current value and its change
//! listeners; the widget layer calls [`DataField::set_value`] after a
//! user edit, which fires the routing listener installed at bind time.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap as HashMap;
use uxmenu_spec::FieldValue;

use crate::descriptor::FieldDescriptor;

/// Change notification callback; receives the field that was edited.
pub type ChangeListener = Rc<dyn Fn(&DataField)>;

struct Listener {
	id: &'static str,
	notify: ChangeListener,
}

/// One live control: descriptor plus current value and change listeners.
pub struct DataField {
	descriptor: FieldDescriptor,
	value: RefCell<Option<FieldValue>>,
	listeners: RefCell<Vec<Listener>>,
}

impl DataField {
	pub fn new(descriptor: FieldDescriptor) -> Self {
		Self {
			descriptor,
			value: RefCell::new(None),
			listeners: RefCell::new(Vec::new()),
		}
	}

	pub fn descriptor(&self) -> &FieldDescriptor {
		&self.descriptor
	}

	/// Rendered storage key of this control.
	pub fn data_key(&self) -> String {
		self.descriptor.data_key()
	}

	/// Current control value, if any.
	pub fn value(&self) -> Option<FieldValue> {
		self.value.borrow().clone()
	}

	/// Stores `value` without notifying listeners. Used to seed a
	/// freshly bound view from the instance's current state.
	pub fn prime(&self, value: FieldValue) {
		*self.value.borrow_mut() = Some(value);
	}

	/// Stores `value` and fires every registered listener. This is the
	/// widget layer's entry point after a user edit.
	///
	/// The listener set is snapshotted before notification, so a
	/// listener may (re-)register listeners on this field; changes take
	/// effect from the next edit.
	pub fn set_value(&self, value: FieldValue) {
		*self.value.borrow_mut() = Some(value);
		let snapshot: Vec<ChangeListener> = self
			.listeners
			.borrow()
			.iter()
			.map(|listener| Rc::clone(&listener.notify))
			.collect();
		for notify in snapshot {
			notify(self);
		}
	}

	/// Registers a change listener, replacing any existing listener with
	/// the same id. A control therefore carries at most one route per id.
	pub fn add_change_listener(&self, id: &'static str, notify: impl Fn(&DataField) + 'static) {
		let mut listeners = self.listeners.borrow_mut();
		let listener = Listener {
			id,
			notify: Rc::new(notify),
		};
		match listeners.iter_mut().find(|existing| existing.id == id) {
			Some(existing) => *existing = listener,
			None => listeners.push(listener),
		}
	}

	#[cfg(test)]
	pub(crate) fn listener_count(&self) -> usize {
		self.listeners.borrow().len()
	}
}

impl fmt::Debug for DataField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DataField")
			.field("key", &self.descriptor.data_key())
			.field("value", &self.value.borrow())
			.field("listeners", &self.listeners.borrow().len())
			.finish()
	}
}

/// Ordered collection of live controls plus a title.
pub struct View {
	title: Box<str>,
	fields: Vec<Rc<DataField>>,
	by_key: HashMap<Box<str>, usize>,
}

impl View {
	pub(crate) fn new(title: &str, fields: Vec<Rc<DataField>>) -> Self {
		let by_key = fields
			.iter()
			.enumerate()
			.map(|(index, field)| (Box::from(field.data_key()), index))
			.collect();
		Self {
			title: Box::from(title),
			fields,
			by_key,
		}
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	/// Controls in declaration order.
	pub fn fields(&self) -> &[Rc<DataField>] {
		&self.fields
	}

	/// Looks up a control by its rendered data key.
	pub fn field(&self, data_key: &str) -> Option<&Rc<DataField>> {
		self.by_key.get(data_key).map(|&index| &self.fields[index])
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

impl fmt::Debug for View {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("View")
			.field("title", &self.title)
			.field("fields", &self.fields.len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use uxmenu_spec::{FieldKey, FieldType};

	use super::*;

	fn probe_field(key: FieldKey) -> DataField {
		DataField::new(FieldDescriptor {
			key,
			label: "probe",
			ty: FieldType::Int,
			read_only: false,
		})
	}

	#[test]
	fn prime_does_not_fire_listeners() {
		let field = probe_field(FieldKey::simple("hp"));
		let fired = Rc::new(Cell::new(0));
		let counter = Rc::clone(&fired);
		field.add_change_listener("probe", move |_| counter.set(counter.get() + 1));

		field.prime(FieldValue::Int(1));
		assert_eq!(fired.get(), 0);

		field.set_value(FieldValue::Int(2));
		assert_eq!(fired.get(), 1);
	}

	#[test]
	fn same_listener_id_replaces() {
		let field = probe_field(FieldKey::simple("hp"));
		field.add_change_listener("probe", |_| {});
		field.add_change_listener("probe", |_| {});
		assert_eq!(field.listener_count(), 1);
	}

	#[test]
	fn distinct_listener_ids_accumulate() {
		let field = probe_field(FieldKey::simple("hp"));
		field.add_change_listener("one", |_| {});
		field.add_change_listener("two", |_| {});
		assert_eq!(field.listener_count(), 2);
	}

	#[test]
	fn listener_may_reregister_during_notification() {
		let field = Rc::new(probe_field(FieldKey::simple("hp")));
		let fired = Rc::new(Cell::new(0));

		let handle = Rc::clone(&field);
		let counter = Rc::clone(&fired);
		field.add_change_listener("probe", move |_| {
			counter.set(counter.get() + 1);
			let replacement = Rc::clone(&counter);
			handle.add_change_listener("probe", move |_| {
				replacement.set(replacement.get() + 100);
			});
		});

		// replacement from inside a notification must not panic and
		// takes effect from the next edit
		field.set_value(FieldValue::Int(1));
		assert_eq!(fired.get(), 1);

		field.set_value(FieldValue::Int(2));
		assert_eq!(fired.get(), 101);
	}

	#[test]
	fn view_lookup_uses_rendered_keys() {
		let fields = vec![
			Rc::new(probe_field(FieldKey::simple("hp"))),
			Rc::new(probe_field(FieldKey::entry("stats", "strength"))),
		];
		let view = View::new("Probe", fields);
		assert_eq!(view.len(), 2);
		assert!(view.field("hp").is_some());
		assert!(view.field("stats::strength").is_some());
		assert!(view.field("stats").is_none());
	}
}
