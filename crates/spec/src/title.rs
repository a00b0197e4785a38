//! Menu title derivation from type names.

/// Derives a human-readable menu title from a camel-cased type name by
/// inserting a space before each internal word boundary.
///
/// A boundary sits before an uppercase letter that follows a lowercase
/// letter, or that precedes one, never at the start. Non-letter
/// characters pass through untouched. `HealthRegenComponent` becomes
/// `"Health Regen Component"`; acronym runs stay intact, so
/// `HTTPServer` becomes `"HTTP Server"`.
pub fn menu_title(type_name: &str) -> String {
	let chars: Vec<char> = type_name.chars().collect();
	let mut title = String::with_capacity(type_name.len() + 4);
	for (i, &c) in chars.iter().enumerate() {
		let starts_word = i > 0
			&& c.is_uppercase()
			&& (chars[i - 1].is_lowercase() || chars.get(i + 1).is_some_and(|n| n.is_lowercase()));
		if starts_word {
			title.push(' ');
		}
		title.push(c);
	}
	title
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn two_words() {
		assert_eq!(menu_title("HealthComponent"), "Health Component");
	}

	#[test]
	fn three_words() {
		assert_eq!(menu_title("HealthRegenComponent"), "Health Regen Component");
	}

	#[test]
	fn single_word_unchanged() {
		assert_eq!(menu_title("Health"), "Health");
	}

	#[test]
	fn acronym_run_stays_together() {
		assert_eq!(menu_title("HTTPServer"), "HTTP Server");
	}

	#[test]
	fn digits_pass_through() {
		assert_eq!(menu_title("Vec3Editor"), "Vec3 Editor");
	}

	#[test]
	fn no_leading_space() {
		assert_eq!(menu_title("Component"), "Component");
		assert_eq!(menu_title(""), "");
	}
}
