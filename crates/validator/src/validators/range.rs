//! Numeric bound rules
//!
//! Generic over any `PartialOrd + Display + Copy` type, so the same rule works
//! for `i32`, `u64`, `f64`, ...
//!
//! Bounds are checked as `input >= min` and `input <= max`, so a value that
//! compares unordered (`f64::NAN`) fails every rule here.

use std::fmt::Display;

use crate::foundation::RuleError;

crate::rule! {
    /// Validates that a value is at least `min`. `NaN` is rejected.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        RuleError::new("min", "value below minimum")
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(min: T);
}

crate::rule! {
    /// Validates that a value is at most `max`. `NaN` is rejected.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        RuleError::new("max", "value above maximum")
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn max(max: T);
}

crate::rule! {
    /// Validates that a value lies in the inclusive range `min..=max`.
    /// `NaN` is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldguard_validator::validators::between;
    /// use fieldguard_validator::foundation::Rule;
    ///
    /// let age = between(18, 65);
    /// assert!(age.check(&30).is_ok());
    /// assert!(age.check(&17).is_err());
    /// assert!(age.check(&66).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Between<T: PartialOrd + Display + Copy> { min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) {
        RuleError::new("between", "value out of range")
            .with_param("min", self.min.to_string())
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn between(min: T, max: T);
}
