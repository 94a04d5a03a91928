use crate::error::{TimelineError, TimelineResult};

/// Linear mapping from a value domain to a pixel (or time) range.
///
/// Outputs are rounded to whole units when built with `rounded`. A degenerate
/// domain (`start == end`) maps every input to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    round: bool,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> TimelineResult<Self> {
        for value in [domain.0, domain.1, range.0, range.1] {
            if !value.is_finite() {
                return Err(TimelineError::InvalidData(
                    "scale domain and range must be finite".to_owned(),
                ));
            }
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
            round: false,
        })
    }

    /// Same as [`LinearScale::new`] with outputs rounded to the nearest integer.
    pub fn rounded(domain: (f64, f64), range: (f64, f64)) -> TimelineResult<Self> {
        let mut scale = Self::new(domain, range)?;
        scale.round = true;
        Ok(scale)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (value - self.domain_start) / span
        };
        let mapped = self.range_start + normalized * (self.range_end - self.range_start);
        if self.round { mapped.round() } else { mapped }
    }

    /// Clamps `value` into the domain before mapping.
    #[must_use]
    pub fn map_clamped(self, value: f64) -> f64 {
        let (low, high) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };
        self.map(value.clamp(low, high))
    }
}
