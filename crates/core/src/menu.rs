//! Entry points for obtaining an object's edit menu.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use uxmenu_spec::{Editable, menu_title};

use crate::template::ViewTemplate;
use crate::view::View;
use crate::{bind, cache, synth};

/// Returns the view template for `object`'s type, synthesizing it on
/// first request.
///
/// The first request per type walks the registered field table; later
/// requests for any instance of the type hit the process-wide cache.
pub fn edit_view(object: &dyn Editable) -> Arc<ViewTemplate> {
	let spec = object.type_spec();
	let title = menu_title(spec.type_name);
	cache::get_or_build(&title, || synth::build_template(&title, spec))
}

/// Opens an editing session: fetches the (cached) template for the
/// target's type and binds it to the target instance.
pub fn open_editor(target: &Rc<RefCell<dyn Editable>>) -> View {
	let template = edit_view(&*target.borrow());
	bind::bind(&template, Rc::clone(target))
}
