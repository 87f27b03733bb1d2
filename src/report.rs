use std::io::{self, Write};

use serde::Serialize;

use crate::{
    layout::{Cell, Layout},
    prelude::*,
    quantity::energy::KilowattHours,
    record::FactoryRecord,
};

const HEADER_LABEL: &str = "Factory";
const HEADER_QUANTITIES: [&str; 3] = ["Planned, kWh", "Actual, kWh", "Deviation, kWh"];
const HEADER_PERCENTAGE: &str = "Dev., %";
const TOTALS_LABEL: &str = "Total";

/// Percentage deviation has no meaningful aggregate.
const TOTALS_PLACEHOLDER: &str = "-";

/// Column sums over all the records of a report.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Totals {
    pub planned: KilowattHours,
    pub actual: KilowattHours,
    pub deviation: KilowattHours,
}

/// Serializable snapshot of a report: the records followed by their totals.
#[must_use]
#[derive(Serialize)]
pub struct Summary<'a> {
    pub records: &'a [FactoryRecord],
    pub totals: Totals,
}

/// Append-only list of factory records, kept in the entry order.
#[must_use]
#[derive(Default)]
pub struct EnergyReport {
    layout: Layout,
    records: Vec<FactoryRecord>,
}

impl EnergyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: FactoryRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn records(&self) -> &[FactoryRecord] {
        &self.records
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Sum up the records. Always computed from scratch.
    pub fn totals(&self) -> Totals {
        Totals {
            planned: self.sum_by(FactoryRecord::planned),
            actual: self.sum_by(FactoryRecord::actual),
            deviation: self.sum_by(FactoryRecord::deviation),
        }
    }

    pub fn summary(&self) -> Summary<'_> {
        Summary { records: &self.records, totals: self.totals() }
    }

    fn sum_by(&self, field: fn(&FactoryRecord) -> KilowattHours) -> KilowattHours {
        self.records.iter().map(field).sum()
    }

    pub fn write_all_records(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer)?;
        writeln!(
            writer,
            "{}",
            self.layout.row(
                HEADER_LABEL,
                HEADER_QUANTITIES.map(Cell::Text),
                Cell::Text(HEADER_PERCENTAGE),
            ),
        )?;
        writeln!(writer, "{}", self.layout.rule())?;
        for record in &self.records {
            writeln!(writer, "{}", record.render_row(&self.layout))?;
        }
        writer.flush()
    }

    pub fn write_totals(&self, writer: &mut impl Write) -> io::Result<()> {
        let totals = self.totals();
        debug!(
            planned = ?totals.planned,
            actual = ?totals.actual,
            deviation = ?totals.deviation,
            "computed totals",
        );
        writeln!(writer, "{}", self.layout.rule())?;
        writeln!(
            writer,
            "{}",
            self.layout.row(
                TOTALS_LABEL,
                [
                    Cell::Number(totals.planned.0),
                    Cell::Number(totals.actual.0),
                    Cell::Number(totals.deviation.0),
                ],
                Cell::Text(TOTALS_PLACEHOLDER),
            ),
        )?;
        writer.flush()
    }
}
