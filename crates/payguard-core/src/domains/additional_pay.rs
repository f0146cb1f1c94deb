use crate::{
    columns::{
        date_builder::DateColumnBuilder, flag_builder::FlagColumnBuilder,
        numeric_builder::NumericColumnBuilder, text_builder::TextColumnBuilder,
    },
    domains::BUSINESS_UNITS,
    errors::RuleError,
    schema::{Schema, SchemaBuilder},
};

pub const ADJUSTMENT_TYPES: &[&str] = &["Earning", "Deduction"];
pub const STATUSES: &[&str] = &["Finalized", "Draft", "Pending"];

pub fn schema() -> Result<Schema, RuleError> {
    let mut employee_id = TextColumnBuilder::new("employee_id", "Employee ID");
    employee_id.is_required();

    let employee_name = TextColumnBuilder::new("employee_name", "Employee Name");

    let mut business_unit = TextColumnBuilder::new("business_unit", "Business Unit");
    business_unit.is_in(BUSINESS_UNITS);

    let mut adjustment_type = TextColumnBuilder::new("adjustment_type", "Adjustment Type");
    adjustment_type.is_in(ADJUSTMENT_TYPES);

    let component = TextColumnBuilder::new("component", "Pay Component");

    let mut units = NumericColumnBuilder::<f64>::new("units", "Units");
    units.is_non_negative();

    let mut amount = NumericColumnBuilder::<f64>::new("amount", "Amount");
    amount.is_non_negative();

    let taxable = FlagColumnBuilder::new("taxable", "Taxable");

    let mut reason = TextColumnBuilder::new("reason", "Reason");
    reason.is_required();

    let mut approver = TextColumnBuilder::new("approver", "Approver");
    approver.is_required();

    let mut created_date = DateColumnBuilder::new("created_date", "Created Date");
    created_date.is_required();

    let mut status = TextColumnBuilder::new("status", "Status");
    status.is_in(STATUSES);

    SchemaBuilder::new("additional-pay")
        .column(employee_id)
        .column(employee_name)
        .column(business_unit)
        .column(adjustment_type)
        .column(component)
        .column(units)
        .column(amount)
        .column(taxable)
        .column(reason)
        .column(approver)
        .column(created_date)
        .column(status)
        .build()
}

pub const TEMPLATE_ROWS: &[&[&str]] = &[
    &["EMP001", "John Smith", "JNET", "Earning", "Overtime", "12", "6000", "true", "Weekend release support", "Anita Rao", "2024-03-01", "Finalized"],
    &["EMP002", "Jane Doe", "Telecom", "Deduction", "Notice Pay Recovery", "1", "15000", "false", "Short notice period", "Anita Rao", "2024-03-02", "Draft"],
    &["EMP003", "Raj Kumar", "JNET", "Bonus", "Spot Award", "1", "5000", "true", "Quarter-end delivery", "Karan Shah", "2024-03-03", "Pending"],
    &["EMP004", "Priya Sharma", "Telecom", "Earning", "Night Shift Allowance", "-2", "4000", "true", "", "Karan Shah", "2024-03-04", "Finalized"],
    &["", "Amit Patel", "IT", "Earning", "Arrears", "1", "-500", "true", "Salary revision arrears", "", "2024-03-05", "Approved"],
];

pub const DEMO_ROWS: &[&[&str]] = &[
    &["EMP001", "John Smith", "JNET", "Earning", "Overtime", "12", "6000", "true", "Weekend release support", "Anita Rao", "2024-03-01", "Finalized"],
    &["EMP002", "Jane Doe", "Telecom", "Deduction", "Notice Pay Recovery", "1", "15000", "false", "Short notice period", "Anita Rao", "2024-03-02", "Draft"],
    &["EMP005", "Ananya Iyer", "Telecom", "Earning", "Referral Bonus", "1", "25000", "true", "Referral hired", "Karan Shah", "2024-03-05", "Pending"],
    &["EMP006", "Vikram Singh", "JNET", "Earning", "On-call Allowance", "8", "8000", "true", "Production on-call", "Anita Rao", "2024-03-06", "Finalized"],
    &["EMP003", "Raj Kumar", "JNET", "Bonus", "Spot Award", "1", "5000", "true", "Quarter-end delivery", "Karan Shah", "2024-03-03", "Pending"],
    &["EMP007", "Meera Nair", "JNET", "Deduction", "Canteen", "22", "1100", "false", "Monthly canteen charges", "Anita Rao", "2024-03-07", "Finalized"],
    &["EMP004", "Priya Sharma", "Telecom", "Earning", "Night Shift Allowance", "-2", "4000", "true", "", "Karan Shah", "2024-03-04", "Finalized"],
    &["EMP008", "Sahil Mehta", "Telecom", "Earning", "Travel Reimbursement", "3", "7200", "false", "Site visits", "Karan Shah", "2024-03-08", "Draft"],
    &["", "Amit Patel", "IT", "Earning", "Arrears", "1", "-500", "true", "Salary revision arrears", "", "2024-03-05", "Approved"],
    &["EMP009", "Kavya Reddy", "JNET", "Deduction", "Loan EMI", "1", "3500", "false", "Salary advance recovery", "Anita Rao", "03/09/2024", "Finalized"],
];
