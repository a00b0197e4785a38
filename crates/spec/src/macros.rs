//! Field table registration macros.

/// Helper macro for optional values with defaults.
#[doc(hidden)]
#[macro_export]
macro_rules! __field_opt {
	({$val:expr}, $default:expr) => {
		$val
	};
	(, $default:expr) => {
		$default
	};
}

/// Declares a plain value member of an editable type.
///
/// The getter body produces the member's raw value; the setter body
/// stores an unwrapped value of the declared kind. Omit `set:` for a
/// member without a setter (its control becomes read-only). Visibility
/// defaults to public and tags default to none.
///
/// # Example
///
/// ```ignore
/// value_field!(HealthComponent, health: Int {
///     get: |c| c.health,
///     set: |c, v| c.health = v,
/// })
/// ```
#[macro_export]
macro_rules! value_field {
	($ty:ty, $name:ident: $kind:ident {
		get: |$g:pat_param| $get:expr,
		set: |$s:pat_param, $v:pat_param| $set:expr
		$(, visibility: $vis:expr)?
		$(, tags: $tags:expr)?
		$(,)?
	}) => {
		$crate::FieldSpec {
			name: stringify!($name),
			visibility: $crate::__field_opt!($({$vis})?, $crate::FieldVisibility::Public),
			tags: $crate::__field_opt!($({$tags})?, $crate::FieldTags::NONE),
			access: $crate::FieldAccess::Value {
				ty: $crate::FieldType::$kind,
				get: |obj: &dyn ::core::any::Any| {
					let $g = obj.downcast_ref::<$ty>()?;
					::core::option::Option::Some($crate::FieldValue::$kind($get))
				},
				set: ::core::option::Option::Some(
					|obj: &mut dyn ::core::any::Any, value: $crate::FieldValue| {
						let ::core::option::Option::Some($s) = obj.downcast_mut::<$ty>() else {
							return ::core::result::Result::Err($crate::WriteError::WrongTarget {
								expected: ::core::any::type_name::<$ty>(),
							});
						};
						match value {
							$crate::FieldValue::$kind($v) => {
								$set;
								::core::result::Result::Ok(())
							}
							other => ::core::result::Result::Err($crate::WriteError::TypeMismatch {
								expected: $crate::FieldType::$kind,
								got: other.kind(),
							}),
						}
					},
				),
			},
		}
	};
	($ty:ty, $name:ident: $kind:ident {
		get: |$g:pat_param| $get:expr
		$(, visibility: $vis:expr)?
		$(, tags: $tags:expr)?
		$(,)?
	}) => {
		$crate::FieldSpec {
			name: stringify!($name),
			visibility: $crate::__field_opt!($({$vis})?, $crate::FieldVisibility::Public),
			tags: $crate::__field_opt!($({$tags})?, $crate::FieldTags::NONE),
			access: $crate::FieldAccess::Value {
				ty: $crate::FieldType::$kind,
				get: |obj: &dyn ::core::any::Any| {
					let $g = obj.downcast_ref::<$ty>()?;
					::core::option::Option::Some($crate::FieldValue::$kind($get))
				},
				set: ::core::option::Option::None,
			},
		}
	};
}

/// Declares a keyed-mapping member of an editable type.
///
/// `entries` lists the sub-keys that become controls, each addressed by
/// the compound key `member::entry`. The getter body produces an
/// `Option` of the raw entry value; the setter body stores an unwrapped
/// value under the given entry key.
///
/// # Example
///
/// ```ignore
/// map_field!(HealthComponent, stats: Int {
///     entries: ["strength", "agility"],
///     get: |c, key| c.stats.get(key).copied(),
///     set: |c, key, v| { c.stats.insert(key.to_string(), v); },
/// })
/// ```
#[macro_export]
macro_rules! map_field {
	($ty:ty, $name:ident: $kind:ident {
		entries: [$($entry:literal),* $(,)?],
		get: |$g:pat_param, $gk:pat_param| $get:expr,
		set: |$s:pat_param, $sk:pat_param, $v:pat_param| $set:expr
		$(, visibility: $vis:expr)?
		$(, tags: $tags:expr)?
		$(,)?
	}) => {
		$crate::FieldSpec {
			name: stringify!($name),
			visibility: $crate::__field_opt!($({$vis})?, $crate::FieldVisibility::Public),
			tags: $crate::__field_opt!($({$tags})?, $crate::FieldTags::NONE),
			access: $crate::FieldAccess::Map {
				ty: $crate::FieldType::$kind,
				get: |obj: &dyn ::core::any::Any, entry: &str| {
					let $g = obj.downcast_ref::<$ty>()?;
					let $gk = entry;
					($get).map($crate::FieldValue::$kind)
				},
				set: |obj: &mut dyn ::core::any::Any, entry: &str, value: $crate::FieldValue| {
					let ::core::option::Option::Some($s) = obj.downcast_mut::<$ty>() else {
						return ::core::result::Result::Err($crate::WriteError::WrongTarget {
							expected: ::core::any::type_name::<$ty>(),
						});
					};
					match value {
						$crate::FieldValue::$kind($v) => {
							let $sk = entry;
							$set;
							::core::result::Result::Ok(())
						}
						other => ::core::result::Result::Err($crate::WriteError::TypeMismatch {
							expected: $crate::FieldType::$kind,
							got: other.kind(),
						}),
					}
				},
				entries: &[$($entry),*],
			},
		}
	};
}

/// Declares a member whose value type has no control representation.
/// Synthesis skips it; routing to it fails.
#[macro_export]
macro_rules! unsupported_field {
	($name:ident $(, visibility: $vis:expr)? $(, tags: $tags:expr)? $(,)?) => {
		$crate::FieldSpec {
			name: stringify!($name),
			visibility: $crate::__field_opt!($({$vis})?, $crate::FieldVisibility::Public),
			tags: $crate::__field_opt!($({$tags})?, $crate::FieldTags::NONE),
			access: $crate::FieldAccess::Unsupported,
		}
	};
}

/// Implements [`Editable`](crate::Editable) for a type from its field
/// table.
///
/// # Example
///
/// ```ignore
/// impl_editable!(HealthComponent, [
///     value_field!(HealthComponent, health: Int {
///         get: |c| c.health,
///         set: |c, v| c.health = v,
///     }),
/// ]);
/// ```
#[macro_export]
macro_rules! impl_editable {
	($ty:ident, [$($field:expr),* $(,)?]) => {
		impl $crate::Editable for $ty {
			fn type_spec(&self) -> &'static $crate::TypeSpec {
				static FIELDS: &[$crate::FieldSpec] = &[$($field),*];
				static SPEC: $crate::TypeSpec = $crate::TypeSpec {
					type_name: stringify!($ty),
					fields: FIELDS,
				};
				&SPEC
			}

			fn as_any(&self) -> &dyn ::core::any::Any {
				self
			}

			fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
				self
			}
		}
	};
}
