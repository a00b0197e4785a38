//! Per-instance binding of cached view templates.
//!
//! The template is shared per type; the binding is created per editing
//! session. Two instances of one type edited at the same time each get
//! their own [`View`] whose listeners close over their own instance, so
//! edits can never leak across sessions.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;
use uxmenu_spec::Editable;

use crate::route;
use crate::template::ViewTemplate;
use crate::view::{DataField, View};

/// Listener id for controls backed by a directly named member.
pub const VALUE_CHANGED: &str = "edit-menu-value-changed";
/// Listener id for controls addressing one entry of a keyed mapping.
pub const SUB_VALUE_CHANGED: &str = "edit-menu-sub-value-changed";

/// Binds `template` to a live instance, producing a fresh view whose
/// fields are seeded from the instance and route edits back into it.
///
/// Exactly one change listener is registered per control. Routing
/// failures inside a listener are logged and absorbed; the widget layer
/// has no error channel.
pub fn bind(template: &ViewTemplate, target: Rc<RefCell<dyn Editable>>) -> View {
	let mut fields = Vec::with_capacity(template.fields().len());
	for descriptor in template.fields() {
		let field = Rc::new(DataField::new(*descriptor));
		if let Some(current) = route::read(&*target.borrow(), &descriptor.key) {
			field.prime(current);
		}
		let id = if descriptor.key.is_compound() {
			SUB_VALUE_CHANGED
		} else {
			VALUE_CHANGED
		};
		let target = Rc::clone(&target);
		field.add_change_listener(id, move |updated: &DataField| {
			let Some(value) = updated.value() else {
				return;
			};
			let key = updated.data_key();
			if let Err(err) = route::apply(&mut *target.borrow_mut(), &key, value) {
				warn!(field = %key, %err, "edit menu change not applied");
			}
		});
		fields.push(field);
	}
	View::new(template.title(), fields)
}
