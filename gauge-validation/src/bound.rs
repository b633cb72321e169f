// Fixed and deferred numeric bounds

use crate::{BoundError, BoxError, Numeric, Subject};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

type BoundFn = Arc<dyn Fn(&dyn Subject, &str) -> Result<Numeric, BoxError> + Send + Sync>;

fn boxed<F>(compute: F) -> BoundFn
where
    F: Fn(&dyn Subject, &str) -> Result<Numeric, BoxError> + Send + Sync + 'static,
{
    Arc::new(compute)
}

/// A `min`/`max` bound: either a literal or computed per validation call
/// from the subject and field being validated.
#[derive(Clone)]
pub enum Bound {
    Fixed(Numeric),
    Deferred(BoundFn),
}

impl Bound {
    pub fn fixed(value: impl Into<Numeric>) -> Self {
        Bound::Fixed(value.into())
    }

    /// A bound computed from the subject at validation time.
    ///
    /// ```
    /// use gauge_validation::{Bound, Subject};
    ///
    /// // Never allow more than is in stock.
    /// let max = Bound::deferred(|subject: &dyn Subject, _field: &str| {
    ///     subject.value("stock").to_number().unwrap_or(0.0)
    /// });
    /// assert!(max.is_deferred());
    /// ```
    pub fn deferred<F, N>(compute: F) -> Self
    where
        F: Fn(&dyn Subject, &str) -> N + Send + Sync + 'static,
        N: Into<Numeric>,
    {
        Bound::Deferred(boxed(move |subject, field| Ok(compute(subject, field).into())))
    }

    /// A deferred bound whose computation can fail. The failure aborts the
    /// validation call with [`BoundError::Resolution`].
    pub fn try_deferred<F, N, E>(compute: F) -> Self
    where
        F: Fn(&dyn Subject, &str) -> Result<N, E> + Send + Sync + 'static,
        N: Into<Numeric>,
        E: Into<BoxError>,
    {
        Bound::Deferred(boxed(move |subject, field| {
            compute(subject, field).map(Into::into).map_err(Into::into)
        }))
    }

    /// Fixed bound from a numeric string such as `"10"`.
    pub fn parse(s: &str) -> Option<Self> {
        Numeric::parse(s).map(Bound::Fixed)
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Bound::Deferred(_))
    }

    pub fn as_fixed(&self) -> Option<Numeric> {
        match self {
            Bound::Fixed(value) => Some(*value),
            Bound::Deferred(_) => None,
        }
    }

    /// Resolve to a concrete number. `name` ("min"/"max") is only used for
    /// error context and logging.
    pub fn resolve(
        &self,
        name: &'static str,
        subject: &dyn Subject,
        field: &str,
    ) -> Result<Numeric, BoundError> {
        match self {
            Bound::Fixed(value) => Ok(*value),
            Bound::Deferred(compute) => {
                let value = compute(subject, field).map_err(|source| BoundError::Resolution {
                    field: field.to_string(),
                    bound: name,
                    source,
                })?;
                if !value.is_finite() {
                    return Err(BoundError::Resolution {
                        field: field.to_string(),
                        bound: name,
                        source: format!("computed bound {} is not finite", value).into(),
                    });
                }
                debug!(field, bound = name, %value, "resolved deferred bound");
                Ok(value)
            }
        }
    }
}

impl fmt::Debug for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Bound::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<Numeric> for Bound {
    fn from(value: Numeric) -> Self {
        Bound::Fixed(value)
    }
}

impl From<i64> for Bound {
    fn from(value: i64) -> Self {
        Bound::Fixed(value.into())
    }
}

impl From<i32> for Bound {
    fn from(value: i32) -> Self {
        Bound::Fixed(value.into())
    }
}

impl From<u32> for Bound {
    fn from(value: u32) -> Self {
        Bound::Fixed(value.into())
    }
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        Bound::Fixed(value.into())
    }
}

impl<'de> Deserialize<'de> for Bound {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Numeric::deserialize(deserializer).map(Bound::Fixed)
    }
}

/// Bounds resolved for one validation call. Never written back into the
/// validator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolvedBounds {
    pub min: Option<Numeric>,
    pub max: Option<Numeric>,
}
