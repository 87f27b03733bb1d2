#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod console;
mod input;
mod layout;
mod prelude;
mod quantity;
mod record;
mod report;
mod tables;

use std::io::{self, Write};

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Format},
    console::Console,
    prelude::*,
    report::EnergyReport,
    tables::build_report_table,
};

fn main() -> Result {
    tracing_subscriber::fmt().without_time().compact().with_writer(io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let report = Console::new(io::stdin().lock(), io::stdout()).collect_report()?;
    info!(n_records = report.len(), "collected");

    write_report(&report, args.format, &mut io::stdout().lock())?;

    info!("done!");
    Ok(())
}

/// Print the collected report once, in the requested format.
fn write_report(report: &EnergyReport, format: Format, writer: &mut impl Write) -> Result {
    match format {
        Format::Plain => {
            report.write_all_records(writer).context("failed to print the records")?;
            report.write_totals(writer).context("failed to print the totals")?;
        }
        Format::Table => {
            writeln!(writer, "{}", build_report_table(report))?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *writer, &report.summary())
                .context("failed to serialize the report")?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{quantity::energy::KilowattHours, record::FactoryRecord};

    fn report() -> EnergyReport {
        let mut report = EnergyReport::new();
        report.add_record(FactoryRecord::new("A", KilowattHours(100.0), KilowattHours(90.0)));
        report.add_record(FactoryRecord::new("B", KilowattHours(200.0), KilowattHours(210.0)));
        report
    }

    fn render(format: Format) -> String {
        let mut buffer = Vec::new();
        write_report(&report(), format, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_plain_report() {
        let rule = "-".repeat(80);
        let expected = [
            "",
            "| Factory    |    Planned, kWh |     Actual, kWh |  Deviation, kWh |    Dev., % |",
            rule.as_str(),
            "| A          |          100.00 |           90.00 |           10.00 |      10.00 |",
            "| B          |          200.00 |          210.00 |          -10.00 |      -5.00 |",
            rule.as_str(),
            "| Total      |          300.00 |          300.00 |            0.00 |          - |",
            "",
        ]
        .join("\n");
        assert_eq!(render(Format::Plain), expected);
    }

    #[test]
    fn test_json_report() {
        let value: serde_json::Value = serde_json::from_str(&render(Format::Json)).unwrap();
        assert_eq!(value["records"].as_array().unwrap().len(), 2);
        assert_eq!(value["records"][1]["name"], "B");
        assert_eq!(value["totals"]["deviation"], 0.0);
    }

    #[test]
    fn test_table_report() {
        let output = render(Format::Table);
        assert!(output.contains("300.00 kWh"));
        assert_eq!(output.matches("Total").count(), 1);
    }
}
