use std::fmt::{self, Debug, Display};

/// Marker for absent positions in a derived series.
///
/// Year-aligned views keep the axis of their source even where no value can
/// be produced, such as the warm-up span of a trailing window or years
/// without a significant anomaly. Those gaps are `NA`, not `f64::NAN`, so
/// absence stays visible in the type.
#[derive(Clone, Copy)]
pub enum NA<T> {
    /// A present value
    Value(T),
    /// An absent position
    NA,
}

impl<T> NA<T> {
    /// Check if the position is absent
    pub fn is_na(&self) -> bool {
        matches!(self, NA::NA)
    }

    /// Check if a value is present
    pub fn is_value(&self) -> bool {
        !self.is_na()
    }

    /// Get a reference to the value, if present
    pub fn value(&self) -> Option<&T> {
        match self {
            NA::Value(v) => Some(v),
            NA::NA => None,
        }
    }

    /// Get the value, or `default` when absent
    pub fn value_or(self, default: T) -> T {
        match self {
            NA::Value(v) => v,
            NA::NA => default,
        }
    }

    /// Transform the value, keeping absent positions absent
    pub fn map<U, F>(self, f: F) -> NA<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            NA::Value(v) => NA::Value(f(v)),
            NA::NA => NA::NA,
        }
    }
}

impl<T> From<T> for NA<T> {
    fn from(value: T) -> Self {
        NA::Value(value)
    }
}

impl<T> From<Option<T>> for NA<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => NA::Value(v),
            None => NA::NA,
        }
    }
}

impl<T> From<NA<T>> for Option<T> {
    fn from(na: NA<T>) -> Self {
        match na {
            NA::Value(v) => Some(v),
            NA::NA => None,
        }
    }
}

impl<T: Debug> Debug for NA<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NA::Value(v) => write!(f, "{:?}", v),
            NA::NA => write!(f, "NA"),
        }
    }
}

impl<T: Display> Display for NA<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NA::Value(v) => write!(f, "{}", v),
            NA::NA => write!(f, "NA"),
        }
    }
}

impl<T: PartialEq> PartialEq for NA<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NA::Value(a), NA::Value(b)) => a == b,
            (NA::NA, NA::NA) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_na_predicates() {
        let present: NA<f64> = NA::Value(1.5);
        let absent: NA<f64> = NA::NA;

        assert!(present.is_value());
        assert!(!present.is_na());
        assert!(absent.is_na());
        assert!(!absent.is_value());
    }

    #[test]
    fn test_na_accessors() {
        let present: NA<f64> = NA::Value(2.5);
        let absent: NA<f64> = NA::NA;

        assert_eq!(present.value(), Some(&2.5));
        assert_eq!(absent.value(), None);
        assert_eq!(present.value_or(0.0), 2.5);
        assert_eq!(absent.value_or(0.0), 0.0);
    }

    #[test]
    fn test_na_map() {
        let doubled = NA::Value(3.0).map(|v| v * 2.0);
        assert_eq!(doubled, NA::Value(6.0));

        let still_absent: NA<f64> = NA::<f64>::NA.map(|v| v * 2.0);
        assert!(still_absent.is_na());
    }

    #[test]
    fn test_na_conversions() {
        assert_eq!(NA::from(4.0), NA::Value(4.0));
        assert_eq!(NA::<f64>::from(None), NA::<f64>::NA);
        assert_eq!(NA::from(Some(4.0)), NA::Value(4.0));
        assert_eq!(Option::<f64>::from(NA::Value(4.0)), Some(4.0));
        assert_eq!(Option::<f64>::from(NA::<f64>::NA), None);
    }

    #[test]
    fn test_na_display() {
        assert_eq!(format!("{}", NA::Value(1.25)), "1.25");
        assert_eq!(format!("{}", NA::<f64>::NA), "NA");
    }
}
