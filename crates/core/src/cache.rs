//! Process-wide cache of synthesized view templates.
//!
//! Keyed by derived menu title. The cache starts empty, fills lazily,
//! and is never cleared: type descriptions are immutable for the process
//! lifetime, so a cached template cannot go stale.

use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;
use tracing::debug;

use crate::template::ViewTemplate;

static COMPILED_VIEWS: LazyLock<RwLock<HashMap<Box<str>, Arc<ViewTemplate>>>> =
	LazyLock::new(|| RwLock::new(HashMap::default()));

/// Returns the cached template for `title`, synthesizing it with `build`
/// on first request.
///
/// Idempotent: later calls with the same title return the identical
/// `Arc` without invoking `build`, which runs at most once per distinct
/// title across the process lifetime.
pub fn get_or_build(title: &str, build: impl FnOnce() -> ViewTemplate) -> Arc<ViewTemplate> {
	if let Some(found) = COMPILED_VIEWS.read().get(title) {
		return Arc::clone(found);
	}
	let mut views = COMPILED_VIEWS.write();
	// checked again under the write lock; a racing caller may have built it
	if let Some(found) = views.get(title) {
		return Arc::clone(found);
	}
	debug!(title, "compiling edit view template");
	let view = Arc::new(build());
	views.insert(Box::from(title), Arc::clone(&view));
	view
}

/// Whether a template for `title` has already been compiled.
pub fn is_cached(title: &str) -> bool {
	COMPILED_VIEWS.read().contains_key(title)
}
