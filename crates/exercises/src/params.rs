/// Declares a slider-bound parameter struct and implements [`Params`] for it.
///
/// Every field is an `f64` with a default value and a slider range:
///
/// ```ignore
/// params! {
///     /// Weights of a line.
///     pub struct LineParams {
///         slope = 1.0 in -5.0..=5.0,
///         intercept = 0.0 in -10.0..=10.0,
///     }
/// }
/// ```
///
/// Field names double as the keys accepted by [`Store::set`] and by
/// serialized configs.
///
/// [`Params`]: slate_core::Params
/// [`Store::set`]: slate_core::Store::set
macro_rules! params {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident = $default:literal in $min:literal ..= $max:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde-derive", serde(default, deny_unknown_fields))]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: f64,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        impl slate_core::Params for $name {
            fn fields() -> &'static [slate_core::Field] {
                const FIELDS: &[slate_core::Field] = &[
                    $(
                        slate_core::Field {
                            name: stringify!($field),
                            min: $min,
                            max: $max,
                        },
                    )*
                ];
                FIELDS
            }

            fn get(&self, field: &str) -> Option<f64> {
                match field {
                    $( stringify!($field) => Some(self.$field), )*
                    _ => None,
                }
            }

            fn set(&mut self, field: &str, value: f64) -> Option<f64> {
                match field {
                    $( stringify!($field) => Some(std::mem::replace(&mut self.$field, value)), )*
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use params;
