use std::{
    fmt::Display,
    io::{BufRead, Write},
};

use crate::{
    input::{Consumption, InputError, parse_consumption, parse_record_count},
    prelude::*,
    quantity::energy::KilowattHours,
    record::FactoryRecord,
    report::EnergyReport,
};

/// Line-oriented interactive session over an input and an output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the prompt and read the next line without its line terminator.
    ///
    /// End of input is an error: there is nobody left to answer.
    /// Invalid UTF-8 sequences are replaced with `U+FFFD`.
    pub fn read_line(&mut self, prompt: impl Display) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        let n_bytes =
            self.input.read_until(b'\n', &mut bytes).context("failed to read the input")?;
        ensure!(n_bytes != 0, "unexpected end of input");

        let line = bytes.strip_suffix(b"\n").unwrap_or(&bytes);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        Ok(String::from_utf8_lossy(line).into_owned())
    }

    /// Keep asking until `parse` accepts the answer.
    pub fn read_until_valid<T>(
        &mut self,
        prompt: impl Display,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T> {
        loop {
            let line = self.read_line(&prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(error) => {
                    debug!(input = ?line, %error, "rejected");
                    writeln!(self.output, "Error: {error}")?;
                }
            }
        }
    }

    fn read_consumption(&mut self, kind: Consumption, name: &str) -> Result<KilowattHours> {
        self.read_until_valid(format!("Enter {kind} consumption for {name}: "), |input| {
            parse_consumption(input, kind)
        })
    }

    /// Ask for the number of records and then for each record in turn.
    #[instrument(skip_all)]
    pub fn collect_report(&mut self) -> Result<EnergyReport> {
        let n_records = self.read_until_valid("Enter number of records: ", parse_record_count)?;
        debug!(n_records, "collecting…");

        let mut report = EnergyReport::new();
        for index in 1..=n_records {
            let name = self.read_line(format!("Enter factory name for record {index}: "))?;
            let planned = self.read_consumption(Consumption::Planned, &name)?;
            let actual = self.read_consumption(Consumption::Actual, &name)?;
            let record = FactoryRecord::new(name, planned, actual);
            debug!(
                index,
                name = record.name(),
                deviation = ?record.deviation(),
                percentage_deviation = ?record.percentage_deviation(),
                "added",
            );
            report.add_record(record);
        }
        Ok(report)
    }
}
