use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{quantity::energy::KilowattHours, report::EnergyReport};

#[must_use]
pub fn build_report_table(report: &EnergyReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Factory", "Planned", "Actual", "Deviation", "Deviation, %"]);
    for record in report.records() {
        let color = deviation_color(record.deviation());
        table.add_row(vec![
            Cell::new(record.name()),
            Cell::new(format!("{:.2}", record.planned())).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", record.actual())).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", record.deviation()))
                .set_alignment(CellAlignment::Right)
                .fg(color),
            Cell::new(format!("{:.2}", record.percentage_deviation()))
                .set_alignment(CellAlignment::Right)
                .fg(color),
        ]);
    }

    let totals = report.totals();
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", totals.planned))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", totals.actual))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", totals.deviation))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
            .fg(deviation_color(totals.deviation)),
        Cell::new("-").set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
    ]);
    table
}

/// Green when the factory stayed within the plan, red when it consumed over it.
fn deviation_color(deviation: KilowattHours) -> Color {
    if deviation >= KilowattHours::ZERO { Color::Green } else { Color::Red }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FactoryRecord;

    #[test]
    fn test_build_report_table() {
        let mut report = EnergyReport::new();
        report.add_record(FactoryRecord::new("Alpha", KilowattHours(100.0), KilowattHours(80.0)));
        report.add_record(FactoryRecord::new("Beta", KilowattHours::ZERO, KilowattHours(50.0)));

        let table = build_report_table(&report);
        assert_eq!(table.row_count(), 3);

        let rendered = table.to_string();
        assert!(rendered.contains("100.00 kWh"));
        assert!(rendered.contains("20.00 %"));
        assert!(rendered.contains("-50.00 kWh"));
        assert!(rendered.contains("Total"));
    }

    #[test]
    fn test_deviation_color() {
        assert_eq!(deviation_color(KilowattHours(20.0)), Color::Green);
        assert_eq!(deviation_color(KilowattHours::ZERO), Color::Green);
        assert_eq!(deviation_color(KilowattHours(-0.01)), Color::Red);
    }
}
