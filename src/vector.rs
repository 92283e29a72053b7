//! Sparse vector type over a named axis domain

use std::collections::HashMap;
use std::fmt;

use crate::scalar::Scalar;

/// Vector represented as a function from named axes to numeric components
///
/// A `Vector` pairs an ordered `domain` of axis labels with a sparse
/// `values` map. Only explicitly set components are materialized in the
/// map; any other label reads as the additive identity of `T`. The two
/// states are distinct and observable: [`lookup`](Vector::lookup) reports a
/// stored zero as `(0, true)` and an absent label as `(0, false)`.
///
/// The domain records which axes the vector is conceptually defined over.
/// Its order is preserved for display, but no operation requires the map's
/// keys to be a subset of it, and duplicate labels are accepted as given.
///
/// Both fields are public, so a vector can be built directly when the
/// support is known up front:
///
/// ```
/// use std::collections::HashMap;
/// use ejes::Vector;
///
/// let v = Vector {
///     domain: vec!["A".to_string()],
///     values: HashMap::from([("A".to_string(), 1i64)]),
/// };
///
/// assert_eq!(v.lookup("A"), (1, true));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T: Scalar> {
    /// Ordered axis labels this vector is defined over.
    pub domain: Vec<String>,
    /// Materialized components, keyed by axis label.
    pub values: HashMap<String, T>,
}

impl<T: Scalar> Vector<T> {
    /// Create the zero vector over the given domain
    ///
    /// Every label is accepted as-is; the sequence may be empty or contain
    /// duplicates. No component is materialized, so looking up any label on
    /// the result yields the additive identity together with `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ejes::Vector;
    ///
    /// let z = Vector::<i64>::zero(["A", "B"]);
    /// assert_eq!(z.lookup("A"), (0, false));
    /// assert_eq!(z.domain, vec!["A", "B"]);
    /// ```
    pub fn zero<I, S>(domain: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domain: domain.into_iter().map(Into::into).collect(),
            values: HashMap::new(),
        }
    }

    /// Read the component stored under `key`
    ///
    /// Returns `(stored value, true)` when the key is materialized and
    /// `(T::zero(), false)` otherwise. Absence is a normal result, not a
    /// failure; any key is accepted, whether or not it appears in the
    /// domain.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use ejes::Vector;
    ///
    /// let v = Vector {
    ///     domain: vec!["A".to_string()],
    ///     values: HashMap::from([("A".to_string(), 1i64)]),
    /// };
    /// assert_eq!(v.lookup("A"), (1, true));
    ///
    /// let z = Vector::<i64>::zero(["A", "B"]);
    /// assert_eq!(z.lookup("A"), (0, false));
    /// ```
    pub fn lookup(&self, key: &str) -> (T, bool) {
        match self.values.get(key) {
            Some(&value) => (value, true),
            None => (T::zero(), false),
        }
    }

    /// Multiply every materialized component by `alpha`
    ///
    /// Returns a new `Vector<f64>` whose map holds `alpha * component as
    /// f64` for each materialized entry; the receiver is never modified.
    /// The result is double-precision regardless of `T`, so scaling an
    /// integer vector promotes it to floating point.
    ///
    /// Labels without a materialized component stay absent in the result.
    /// Scaling by `0.0` does not remove entries: previously present
    /// components become stored `0.0` values, which `lookup` still reports
    /// as found.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use ejes::Vector;
    ///
    /// let v = Vector {
    ///     domain: vec!["A".to_string(), "B".to_string()],
    ///     values: HashMap::from([("A".to_string(), 2i64), ("B".to_string(), 3i64)]),
    /// };
    ///
    /// let doubled = v.scalar_mul(2.0);
    /// assert_eq!(doubled.lookup("A"), (4.0, true));
    /// assert_eq!(doubled.lookup("B"), (6.0, true));
    /// ```
    pub fn scalar_mul(&self, alpha: f64) -> Vector<f64> {
        let values = self
            .values
            .iter()
            .map(|(key, &value)| (key.clone(), alpha * value.as_()))
            .collect();

        Vector {
            domain: self.domain.clone(),
            values,
        }
    }

    /// Number of materialized components (the size of the support, not the
    /// domain length)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether no component is materialized
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Renders the domain followed by the materialized components in domain
/// order, e.g. `[A B] {A: 2, B: 3}`. Components stored under a label that
/// does not appear in the domain are not rendered.
impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, label) in self.domain.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", label)?;
        }
        write!(f, "] {{")?;

        let mut sep = "";
        for label in &self.domain {
            if let Some(value) = self.values.get(label) {
                write!(f, "{}{}: {}", sep, label, value)?;
                sep = ", ";
            }
        }
        write!(f, "}}")
    }
}
