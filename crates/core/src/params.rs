use std::ops::RangeInclusive;

/// Describes one slider-bound parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    /// The key used with [`Store::set`](crate::Store::set).
    pub name: &'static str,

    /// Lower end of the slider range.
    pub min: f64,

    /// Upper end of the slider range.
    pub max: f64,
}

impl Field {
    /// Returns the slider range as an inclusive range.
    #[must_use]
    pub fn range(&self) -> RangeInclusive<f64> {
        self.min..=self.max
    }
}

/// A typed parameter set whose fields can be addressed by name.
///
/// Each exercise declares exactly the fields its watcher reads. Name-based
/// access exists so sliders and serialized configs can target a field without
/// knowing the concrete type.
pub trait Params {
    /// Returns the declared fields in display order.
    fn fields() -> &'static [Field];

    /// Returns the current value of `field`, or `None` if it is not declared.
    fn get(&self, field: &str) -> Option<f64>;

    /// Sets `field` to `value` and returns the previous value.
    ///
    /// Returns `None`, leaving the parameters untouched, if `field` is not
    /// declared.
    fn set(&mut self, field: &str, value: f64) -> Option<f64>;
}
