use crate::PERCENTAGE_FACTOR;

const HALF_PERCENT: i128 = (PERCENTAGE_FACTOR / 2) as i128;

/// Percentage arithmetic over basis points with half-up rounding
pub trait PercentageMath<T: Into<i128>> {
    /// Returns `self * percentage / PERCENTAGE_FACTOR` rounded half up
    fn percent_mul(self, percentage: T) -> Option<i128>;
}

impl<T: Into<i128>, V: Into<i128>> PercentageMath<T> for V {
    fn percent_mul(self, percentage: T) -> Option<i128> {
        let value: i128 = self.into();
        let percentage: i128 = percentage.into();
        if value == 0 || percentage == 0 {
            return Some(0);
        }

        value
            .checked_mul(percentage)?
            .checked_add(HALF_PERCENT)?
            .checked_div(PERCENTAGE_FACTOR as i128)
    }

}
