//! Named attributes and comparators for collection filtering.
//!
//! Filtering by symbolic property name works without reflection: an entity
//! implements [`Filterable`] and maps each name it exposes to an
//! [`AttributeValue`]. A [`Comparator`] then decides whether that value
//! matches the filter operand.
//!
//! # Comparison rules
//!
//! - Numbers compare numerically across `Int` and `Float`.
//! - Ordering is defined between numbers, between strings, and between
//!   bools. Any other pairing never matches an ordering comparator.
//! - `has` / `not has` look inside the property, which must be a `List`;
//!   anything else counts as an empty sequence.
//! - `in` / `not in` look inside the operand, with the same rule.
//! - A name the entity does not expose evaluates as [`AttributeValue::Null`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

/// A dynamically typed attribute value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AttributeValue {
    /// Absent or unset.
    #[default]
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Text.
    Str(String),
    /// Sequence of values.
    List(Vec<AttributeValue>),
}

impl AttributeValue {
    /// Equality used by filters: numeric variants compare by value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => *a as f64 == *b,
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loose_eq(y))
            }
            _ => self == other,
        }
    }

    /// Orders two values, or returns `None` when they are not comparable.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::Int(a), Self::Float(b)) => (*a as f64).partial_cmp(b),
            (Self::Float(a), Self::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Str(a), Self::Str(b)) => Some(a.cmp(b)),
            (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Returns `true` if this is a `List` containing `needle`.
    #[must_use]
    pub fn contains(&self, needle: &Self) -> bool {
        match self {
            Self::List(items) => items.iter().any(|item| item.loose_eq(needle)),
            _ => false,
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for AttributeValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for AttributeValue {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl<T: Into<AttributeValue>> From<Vec<T>> for AttributeValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// An entity whose properties can be looked up by name.
pub trait Filterable {
    /// Returns the value of the named attribute, or `None` if the entity
    /// does not expose it.
    fn attribute(&self, name: &str) -> Option<AttributeValue>;
}

impl<T: Filterable + ?Sized> Filterable for &T {
    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        (**self).attribute(name)
    }
}

/// A filter comparator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `has`: the property sequence contains the operand.
    Has,
    /// `not has`
    NotHas,
    /// `in`: the operand sequence contains the property.
    In,
    /// `not in`
    NotIn,
}

impl Comparator {
    /// All comparators, in token order.
    pub const ALL: [Self; 10] = [
        Self::Eq,
        Self::Ne,
        Self::Gt,
        Self::Ge,
        Self::Lt,
        Self::Le,
        Self::Has,
        Self::NotHas,
        Self::In,
        Self::NotIn,
    ];

    /// Returns the textual token for this comparator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Has => "has",
            Self::NotHas => "not has",
            Self::In => "in",
            Self::NotIn => "not in",
        }
    }

    /// Tests `property <self> operand`.
    #[must_use]
    pub fn evaluate(self, property: &AttributeValue, operand: &AttributeValue) -> bool {
        match self {
            Self::Eq => property.loose_eq(operand),
            Self::Ne => !property.loose_eq(operand),
            Self::Gt => property.compare(operand) == Some(Ordering::Greater),
            Self::Ge => matches!(
                property.compare(operand),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Self::Lt => property.compare(operand) == Some(Ordering::Less),
            Self::Le => matches!(
                property.compare(operand),
                Some(Ordering::Less | Ordering::Equal)
            ),
            Self::Has => property.contains(operand),
            Self::NotHas => !property.contains(operand),
            Self::In => operand.contains(property),
            Self::NotIn => !operand.contains(property),
        }
    }
}

impl FromStr for Comparator {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| GridError::UnsupportedComparator {
                token: s.to_owned(),
            })
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn int(v: i64) -> AttributeValue {
        AttributeValue::Int(v)
    }

    mod comparator_parsing {
        use super::*;

        #[test]
        fn parses_every_token() {
            for comparator in Comparator::ALL {
                assert_eq!(comparator.as_str().parse::<Comparator>(), Ok(comparator));
            }
        }

        #[test]
        fn rejects_unknown_token() {
            assert_eq!(
                "like".parse::<Comparator>(),
                Err(GridError::UnsupportedComparator {
                    token: "like".into()
                })
            );
        }

        #[test]
        fn tokens_are_case_and_space_sensitive() {
            assert!("HAS".parse::<Comparator>().is_err());
            assert!("nothas".parse::<Comparator>().is_err());
            assert!(" =".parse::<Comparator>().is_err());
        }
    }

    mod evaluation {
        use super::*;

        #[test]
        fn numeric_equality_crosses_int_and_float() {
            assert!(Comparator::Eq.evaluate(&int(5), &AttributeValue::Float(5.0)));
            assert!(Comparator::Ne.evaluate(&int(5), &AttributeValue::Float(5.5)));
        }

        #[test]
        fn ordering_comparators() {
            assert!(Comparator::Gt.evaluate(&int(6), &int(5)));
            assert!(!Comparator::Gt.evaluate(&int(5), &int(5)));
            assert!(Comparator::Ge.evaluate(&int(5), &int(5)));
            assert!(Comparator::Lt.evaluate(&int(4), &AttributeValue::Float(4.5)));
            assert!(Comparator::Le.evaluate(&"abc".into(), &"abd".into()));
        }

        #[test]
        fn incomparable_values_never_order() {
            let s: AttributeValue = "5".into();
            assert!(!Comparator::Gt.evaluate(&s, &int(1)));
            assert!(!Comparator::Lt.evaluate(&s, &int(9)));
            assert!(!Comparator::Ge.evaluate(&AttributeValue::Null, &int(0)));
        }

        #[test]
        fn has_looks_inside_property() {
            let tags: AttributeValue = vec!["red", "blue"].into();
            assert!(Comparator::Has.evaluate(&tags, &"red".into()));
            assert!(!Comparator::Has.evaluate(&tags, &"green".into()));
            assert!(Comparator::NotHas.evaluate(&tags, &"green".into()));
        }

        #[test]
        fn has_on_scalar_property_is_empty_sequence() {
            assert!(!Comparator::Has.evaluate(&int(1), &int(1)));
            assert!(Comparator::NotHas.evaluate(&int(1), &int(1)));
        }

        #[test]
        fn in_looks_inside_operand() {
            let allowed: AttributeValue = vec![1_i64, 2, 3].into();
            assert!(Comparator::In.evaluate(&int(2), &allowed));
            assert!(!Comparator::In.evaluate(&int(4), &allowed));
            assert!(Comparator::NotIn.evaluate(&int(4), &allowed));
            assert!(!Comparator::In.evaluate(&int(4), &int(4)));
        }

        #[test]
        fn missing_attribute_is_null() {
            let missing: AttributeValue = None::<i64>.into();
            assert_eq!(missing, AttributeValue::Null);
            assert!(Comparator::Eq.evaluate(&missing, &AttributeValue::Null));
            assert!(Comparator::Ne.evaluate(&missing, &int(0)));
        }
    }

    proptest! {
        #[test]
        fn negated_comparators_are_complements(a in -50i64..50, b in -50i64..50) {
            let (a, b) = (int(a), int(b));
            prop_assert_ne!(Comparator::Eq.evaluate(&a, &b), Comparator::Ne.evaluate(&a, &b));
            prop_assert_ne!(Comparator::Gt.evaluate(&a, &b), Comparator::Le.evaluate(&a, &b));
            prop_assert_ne!(Comparator::Lt.evaluate(&a, &b), Comparator::Ge.evaluate(&a, &b));
        }
    }
}
