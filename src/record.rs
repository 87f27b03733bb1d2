use serde::Serialize;

use crate::{
    layout::{Cell, Layout},
    quantity::{energy::KilowattHours, percentage::Percentage},
};

/// Energy accounting line of a single factory.
///
/// Deviations are derived once in [`FactoryRecord::new`] and the record is immutable afterwards.
#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct FactoryRecord {
    name: String,
    planned: KilowattHours,
    actual: KilowattHours,
    deviation: KilowattHours,
    percentage_deviation: Percentage,
}

impl FactoryRecord {
    /// Range checks are the caller's business: the figures are taken as they are.
    pub fn new(name: impl Into<String>, planned: KilowattHours, actual: KilowattHours) -> Self {
        let deviation = planned - actual;
        Self {
            name: name.into(),
            planned,
            actual,
            deviation,
            percentage_deviation: deviation.percentage_of(planned),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn planned(&self) -> KilowattHours {
        self.planned
    }

    #[must_use]
    pub const fn actual(&self) -> KilowattHours {
        self.actual
    }

    /// Planned minus actual: negative when the factory consumed over plan.
    #[must_use]
    pub const fn deviation(&self) -> KilowattHours {
        self.deviation
    }

    /// Deviation relative to the planned consumption, zero when nothing was planned.
    #[must_use]
    pub const fn percentage_deviation(&self) -> Percentage {
        self.percentage_deviation
    }

    #[must_use]
    pub fn render_row(&self, layout: &Layout) -> String {
        layout.row(
            &self.name,
            [
                Cell::Number(self.planned.0),
                Cell::Number(self.actual.0),
                Cell::Number(self.deviation.0),
            ],
            Cell::Number(self.percentage_deviation.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_under_plan() {
        let record = FactoryRecord::new("Alpha", KilowattHours(100.0), KilowattHours(80.0));
        assert_abs_diff_eq!(record.deviation().0, 20.0);
        assert_abs_diff_eq!(record.percentage_deviation().0, 20.0);
    }

    #[test]
    fn test_nothing_planned() {
        let record = FactoryRecord::new("Beta", KilowattHours::ZERO, KilowattHours(50.0));
        assert_abs_diff_eq!(record.deviation().0, -50.0);
        assert_abs_diff_eq!(record.percentage_deviation().0, 0.0);

        let record = FactoryRecord::new("Idle", KilowattHours::ZERO, KilowattHours::ZERO);
        assert_abs_diff_eq!(record.deviation().0, 0.0);
        assert_abs_diff_eq!(record.percentage_deviation().0, 0.0);
    }

    #[test]
    fn test_over_plan() {
        let record = FactoryRecord::new("Gamma", KilowattHours(200.0), KilowattHours(210.0));
        assert_abs_diff_eq!(record.deviation().0, -10.0);
        assert_abs_diff_eq!(record.percentage_deviation().0, -5.0);
    }

    #[test]
    fn test_percentage_formula() {
        for (planned, actual) in [(3.0, 1.0), (0.7, 2.9), (1e6, 123_456.789)] {
            let record = FactoryRecord::new("", KilowattHours(planned), KilowattHours(actual));
            assert_abs_diff_eq!(
                record.percentage_deviation().0,
                (planned - actual) * 100.0 / planned,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_render_row() {
        let record = FactoryRecord::new("Alpha", KilowattHours(100.0), KilowattHours(80.0));
        assert_eq!(
            record.render_row(&Layout::default()),
            "| Alpha      |          100.00 |           80.00 |           20.00 |      20.00 |"
        );
    }

    #[test]
    fn test_render_row_negative_deviation() {
        let record = FactoryRecord::new("Beta", KilowattHours::ZERO, KilowattHours(50.0));
        assert_eq!(
            record.render_row(&Layout::default()),
            "| Beta       |            0.00 |           50.00 |          -50.00 |       0.00 |"
        );
    }
}
