//! The three bulk-upload formats: employee onboarding, additional pay and variable pay.

pub mod additional_pay;
pub mod employee;
pub mod variable_pay;

use std::{fmt, str::FromStr};

use crate::{errors::RuleError, readers::ImportConfig, schema::Schema, validator::Importer};

pub const BUSINESS_UNITS: &[&str] = &["JNET", "Telecom"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Employee,
    AdditionalPay,
    VariablePay,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Employee, Domain::AdditionalPay, Domain::VariablePay];

    pub fn slug(&self) -> &'static str {
        match self {
            Domain::Employee => "employee",
            Domain::AdditionalPay => "additional-pay",
            Domain::VariablePay => "variable-pay",
        }
    }

    pub fn schema(&self) -> Result<Schema, RuleError> {
        match self {
            Domain::Employee => employee::schema(),
            Domain::AdditionalPay => additional_pay::schema(),
            Domain::VariablePay => variable_pay::schema(),
        }
    }

    /// Example rows shipped in the downloadable template, some deliberately invalid.
    pub fn template_rows(&self) -> &'static [&'static [&'static str]] {
        match self {
            Domain::Employee => employee::TEMPLATE_ROWS,
            Domain::AdditionalPay => additional_pay::TEMPLATE_ROWS,
            Domain::VariablePay => variable_pay::TEMPLATE_ROWS,
        }
    }

    /// Canned rows that can stand in for an upload.
    pub fn demo_rows(&self) -> &'static [&'static [&'static str]] {
        match self {
            Domain::Employee => employee::DEMO_ROWS,
            Domain::AdditionalPay => additional_pay::DEMO_ROWS,
            Domain::VariablePay => variable_pay::DEMO_ROWS,
        }
    }

    pub fn importer(&self, config: ImportConfig) -> Result<Importer, RuleError> {
        Ok(Importer::new(self.schema()?, config))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Domain {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "employee" | "employees" => Ok(Domain::Employee),
            "additional-pay" => Ok(Domain::AdditionalPay),
            "variable-pay" => Ok(Domain::VariablePay),
            _ => Err(RuleError::UnknownDomain(s.to_string())),
        }
    }
}
