use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// How to print the final report.
    #[clap(long, value_enum, default_value_t = Format::Plain)]
    pub format: Format,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Fixed-width text table.
    #[default]
    Plain,

    /// Rounded Unicode table with coloured deviations.
    Table,

    /// Pretty-printed JSON document.
    Json,
}
