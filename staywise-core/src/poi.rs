//! Points of interest as consumed by the engine.
//!
//! The engine only ever reads a POI's name. Everything else a host attaches
//! (ratings, categories, coordinates) travels through untouched.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Anything the engine can place on a day: it only needs a display name.
///
/// Hosts with their own POI records implement this trait instead of
/// converting into [`PointOfInterest`].
///
/// # Examples
/// ```
/// use staywise_core::Attraction;
///
/// #[derive(Clone)]
/// struct Stop(&'static str);
///
/// impl Attraction for Stop {
///     fn name(&self) -> &str {
///         self.0
///     }
/// }
///
/// assert_eq!(Stop("Generalife").name(), "Generalife");
/// ```
pub trait Attraction {
    /// The attraction name used for group and neighborhood lookups.
    fn name(&self) -> &str;
}

/// A location worth visiting within a city.
///
/// Unknown JSON fields are kept in [`PointOfInterest::attributes`] and
/// written back unchanged on serialization.
///
/// # Examples
/// ```
/// use staywise_core::{Attraction, PointOfInterest};
///
/// let poi: PointOfInterest =
///     serde_json::from_str(r#"{"name":"Alhambra","city":"Granada","rating":4.9}"#)
///         .expect("valid POI");
///
/// assert_eq!(poi.name(), "Alhambra");
/// assert_eq!(poi.attributes.get("rating"), Some(&serde_json::json!(4.9)));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Display name; empty when the source record had none or `null`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// City the POI belongs to.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    /// Every other field of the source record.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl PointOfInterest {
    /// Construct a POI with no extra attributes.
    ///
    /// # Examples
    /// ```
    /// use staywise_core::PointOfInterest;
    ///
    /// let poi = PointOfInterest::new("Generalife", "Granada");
    /// assert_eq!(poi.city, "Granada");
    /// assert!(poi.attributes.is_empty());
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            attributes: Map::new(),
        }
    }

    /// Attach a pass-through attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Attraction for PointOfInterest {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Attraction for str {
    fn name(&self) -> &str {
        self
    }
}

impl Attraction for String {
    fn name(&self) -> &str {
        self
    }
}

impl<T: Attraction + ?Sized> Attraction for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}
