use crate::{
    columns::{
        flag_builder::FlagColumnBuilder, numeric_builder::NumericColumnBuilder,
        text_builder::TextColumnBuilder,
    },
    domains::BUSINESS_UNITS,
    errors::RuleError,
    schema::{Schema, SchemaBuilder},
};

pub const PERFORMANCE_RATINGS: &[&str] = &[
    "Outstanding",
    "Exceeded Expectations",
    "Met Expectations",
    "Below Expectations",
];

pub fn schema() -> Result<Schema, RuleError> {
    let mut employee_id = TextColumnBuilder::new("employee_id", "Employee ID");
    employee_id.is_required();

    let mut employee_name = TextColumnBuilder::new("employee_name", "Employee Name");
    employee_name.is_required();

    let mut business_unit = TextColumnBuilder::new("business_unit", "Business Unit");
    business_unit.is_in(BUSINESS_UNITS);

    let department = TextColumnBuilder::new("department", "Department");

    let mut gross_ctc = NumericColumnBuilder::<i64>::new("gross_ctc", "Gross CTC");
    gross_ctc
        .min(300_000)
        .with_message("Gross CTC must be at least ₹300,000");

    let mut variable_pay = NumericColumnBuilder::<f64>::new("variable_pay_percent", "Variable Pay %");
    variable_pay.between(0., 20.);

    let mut rating = TextColumnBuilder::new("performance_rating", "Performance Rating");
    rating.is_in(PERFORMANCE_RATINGS);

    let mut payable = NumericColumnBuilder::<f64>::new("payable_percent", "Payable %");
    payable.between(0., 100.);

    let eligible = FlagColumnBuilder::new("eligible", "Eligible");

    SchemaBuilder::new("variable-pay")
        .column(employee_id)
        .column(employee_name)
        .column(business_unit)
        .column(department)
        .column(gross_ctc)
        .column(variable_pay)
        .column(rating)
        .column(payable)
        .column(eligible)
        .build()
}

pub const TEMPLATE_ROWS: &[&[&str]] = &[
    &["EMP001", "John Smith", "JNET", "Technology", "1200000", "10", "Exceeded Expectations", "100", "true"],
    &["EMP002", "Jane Doe", "Telecom", "Sales", "800000", "15", "Met Expectations", "80", "true"],
    &["EMP003", "Raj Kumar", "JNET", "Finance", "950000", "25", "Outstanding", "100", "true"],
    &["EMP004", "Priya Sharma", "Telecom", "Marketing", "1100000", "12", "Good", "120", "false"],
    &["EMP005", "Amit Patel", "IT", "Operations", "250000", "8", "Below Expectations", "50", "true"],
];

pub const DEMO_ROWS: &[&[&str]] = &[
    &["EMP001", "John Smith", "JNET", "Technology", "1200000", "10", "Exceeded Expectations", "100", "true"],
    &["EMP002", "Jane Doe", "Telecom", "Sales", "800000", "15", "Met Expectations", "80", "true"],
    &["EMP006", "Vikram Singh", "JNET", "Technology", "2400000", "20", "Outstanding", "100", "true"],
    &["EMP003", "Raj Kumar", "JNET", "Finance", "950000", "25", "Outstanding", "100", "true"],
    &["EMP007", "Meera Nair", "JNET", "Finance", "540000", "5", "Met Expectations", "60", "false"],
    &["EMP004", "Priya Sharma", "Telecom", "Marketing", "1100000", "12", "Good", "120", "false"],
    &["EMP008", "Sahil Mehta", "Telecom", "Operations", "480000", "7.5", "Below Expectations", "25", "true"],
    &["EMP005", "Amit Patel", "IT", "Operations", "250000", "8", "Below Expectations", "50", "true"],
    &["", "Kavya Reddy", "JNET", "Technology", "720000", "10", "Met Expectations", "75", "true"],
];
