use std::ops::{Range, RangeInclusive};

/// Status codes a call accepts as success, `200..300` by default.
///
/// Anything outside ends in [`ApiClientError::UnexpectedStatusCode`](crate::ApiClientError::UnexpectedStatusCode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedStatusCodes {
    ranges: Vec<StatusCodeRange>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum StatusCodeRange {
    Single(u16),
    Inclusive(RangeInclusive<u16>),
    Exclusive(Range<u16>),
}

impl ExpectedStatusCodes {
    /// Accepts the `2xx` family.
    pub fn new() -> Self {
        Self {
            ranges: vec![StatusCodeRange::Exclusive(200..300)],
        }
    }

    /// Accepts only `status`.
    pub fn from_single(status: u16) -> Self {
        Self {
            ranges: vec![StatusCodeRange::Single(status)],
        }
    }

    /// Accepts the inclusive range.
    pub fn from_inclusive_range(range: RangeInclusive<u16>) -> Self {
        Self {
            ranges: vec![StatusCodeRange::Inclusive(range)],
        }
    }

    /// Also accepts `status`.
    #[must_use]
    pub fn add_single(mut self, status: u16) -> Self {
        self.ranges.push(StatusCodeRange::Single(status));
        self
    }

    /// Also accepts the inclusive range.
    #[must_use]
    pub fn add_inclusive_range(mut self, range: RangeInclusive<u16>) -> Self {
        self.ranges.push(StatusCodeRange::Inclusive(range));
        self
    }

    /// Also accepts the exclusive range.
    #[must_use]
    pub fn add_exclusive_range(mut self, range: Range<u16>) -> Self {
        self.ranges.push(StatusCodeRange::Exclusive(range));
        self
    }

    /// `true` when `status` is accepted.
    pub fn contains(&self, status: u16) -> bool {
        self.ranges.iter().any(|range| match range {
            StatusCodeRange::Single(expected) => *expected == status,
            StatusCodeRange::Inclusive(range) => range.contains(&status),
            StatusCodeRange::Exclusive(range) => range.contains(&status),
        })
    }
}

impl Default for ExpectedStatusCodes {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(200, true)]
    #[case(202, true)]
    #[case(204, true)]
    #[case(299, true)]
    #[case(199, false)]
    #[case(300, false)]
    #[case(404, false)]
    #[case(500, false)]
    fn should_accept_success_by_default(#[case] status: u16, #[case] expected: bool) {
        assert_eq!(ExpectedStatusCodes::default().contains(status), expected);
    }

    #[test]
    fn should_combine_ranges() {
        let codes = ExpectedStatusCodes::from_single(200)
            .add_inclusive_range(202..=204)
            .add_exclusive_range(400..402);

        assert!(codes.contains(200));
        assert!(!codes.contains(201));
        assert!(codes.contains(204));
        assert!(codes.contains(401));
        assert!(!codes.contains(402));
    }
}
