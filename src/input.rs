use std::str::FromStr;

use derive_more::{Display, Error};

use crate::quantity::energy::KilowattHours;

/// Reason to reject a line of user input.
#[derive(Copy, Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum InputError {
    #[display("enter a valid integer.")]
    InvalidInteger,

    #[display("enter a valid number.")]
    InvalidNumber,

    /// The input parsed fine but violates a range constraint.
    #[display("{constraint}")]
    OutOfRange { constraint: &'static str },
}

/// Which of the two consumption figures is being entered.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Consumption {
    #[display("planned")]
    Planned,

    #[display("actual")]
    Actual,
}

impl Consumption {
    const fn negative_constraint(self) -> &'static str {
        match self {
            Self::Planned => "planned consumption cannot be negative!",
            Self::Actual => "actual consumption cannot be negative!",
        }
    }
}

/// Parse the trimmed input and check it against `validate`.
///
/// Parse failures are reported as `parse_error`, whatever the underlying parser says.
pub fn parse_and_validate<T: FromStr>(
    input: &str,
    parse_error: InputError,
    validate: impl FnOnce(&T) -> Result<(), InputError>,
) -> Result<T, InputError> {
    let value = input.trim().parse::<T>().map_err(|_| parse_error)?;
    validate(&value)?;
    Ok(value)
}

/// Number of records to enter: a positive integer.
pub fn parse_record_count(input: &str) -> Result<usize, InputError> {
    let count = parse_and_validate::<i64>(input, InputError::InvalidInteger, |count| {
        if *count > 0 {
            Ok(())
        } else {
            Err(InputError::OutOfRange {
                constraint: "number of records must be greater than zero!",
            })
        }
    })?;
    usize::try_from(count).map_err(|_| InputError::InvalidInteger)
}

/// Consumption figure: a finite non-negative number of kilowatt-hours.
pub fn parse_consumption(input: &str, kind: Consumption) -> Result<KilowattHours, InputError> {
    parse_and_validate::<KilowattHours>(input, InputError::InvalidNumber, |value| {
        if !value.is_finite() {
            Err(InputError::InvalidNumber)
        } else if *value < KilowattHours::ZERO {
            Err(InputError::OutOfRange { constraint: kind.negative_constraint() })
        } else {
            Ok(())
        }
    })
}
