use std::iter;

use bon::Builder;
use itertools::Itertools;

/// Single cell of a numeric column.
#[derive(Copy, Clone)]
pub enum Cell<'a> {
    /// Right-aligned text, for column titles and placeholders.
    Text(&'a str),

    /// Right-aligned number, rounded to the layout precision.
    Number(f64),
}

/// Fixed-width layout shared by the header, record rows and the totals row.
///
/// A row is rendered as `| label | quantity | quantity | quantity | percentage |`.
#[must_use]
#[derive(Copy, Clone, Builder)]
pub struct Layout {
    /// Width of the left-aligned label column.
    #[builder(default = 10)]
    pub label_width: usize,

    /// Width of each of the three consumption columns.
    #[builder(default = 15)]
    pub quantity_width: usize,

    /// Width of the percentage deviation column.
    #[builder(default = 10)]
    pub percentage_width: usize,

    /// Number of decimal places of numeric cells.
    #[builder(default = 2)]
    pub precision: usize,

    /// Length of the horizontal rule between the table sections.
    #[builder(default = 80)]
    pub rule_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Layout {
    #[must_use]
    pub fn row(&self, label: &str, quantities: [Cell<'_>; 3], percentage: Cell<'_>) -> String {
        let cells = iter::once(format!("{label:<width$}", width = self.label_width))
            .chain(quantities.into_iter().map(|cell| self.cell(cell, self.quantity_width)))
            .chain(iter::once(self.cell(percentage, self.percentage_width)));
        format!("| {} |", cells.format(" | "))
    }

    #[must_use]
    pub fn rule(&self) -> String {
        "-".repeat(self.rule_width)
    }

    fn cell(&self, cell: Cell<'_>, width: usize) -> String {
        match cell {
            Cell::Text(text) => format!("{text:>width$}"),
            Cell::Number(value) => format!("{value:>width$.precision$}", precision = self.precision),
        }
    }
}
