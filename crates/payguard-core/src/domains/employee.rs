use crate::{
    columns::{
        date_builder::DateColumnBuilder, numeric_builder::NumericColumnBuilder,
        text_builder::TextColumnBuilder,
    },
    domains::BUSINESS_UNITS,
    errors::RuleError,
    schema::{Schema, SchemaBuilder},
};

pub const MIN_ANNUAL_SALARY: i64 = 300_000;

pub fn schema() -> Result<Schema, RuleError> {
    let mut name = TextColumnBuilder::new("name", "Name");
    name.is_required();

    let mut email = TextColumnBuilder::new("email", "Email");
    email.is_email()?;

    let mut phone = TextColumnBuilder::new("phone", "Phone");
    phone.is_phone_number("+91", 10);

    let mut department = TextColumnBuilder::new("department", "Department");
    department.is_required();

    let mut designation = TextColumnBuilder::new("designation", "Designation");
    designation.is_required();

    let mut business_unit = TextColumnBuilder::new("business_unit", "Business Unit");
    business_unit.is_in(BUSINESS_UNITS);

    let mut joining_date = DateColumnBuilder::new("joining_date", "Joining Date");
    joining_date.is_not_in_future();

    let mut salary = NumericColumnBuilder::<i64>::new("salary", "Salary");
    salary
        .min(MIN_ANNUAL_SALARY)
        .with_message("Salary must be at least ₹300,000 per annum");

    SchemaBuilder::new("employee")
        .column(name)
        .column(email)
        .column(phone)
        .column(department)
        .column(designation)
        .column(business_unit)
        .column(joining_date)
        .column(salary)
        .build()
}

pub const TEMPLATE_ROWS: &[&[&str]] = &[
    &["John Smith", "john.smith@company.com", "+91 9876543210", "Technology", "Software Engineer", "JNET", "2024-01-15", "1200000"],
    &["Jane Doe", "invalid-email", "+91 9876543211", "Sales", "Sales Executive", "Telecom", "2024-02-01", "800000"],
    &["Raj Kumar", "raj.kumar@company.com", "9876543212", "Finance", "Financial Analyst", "JNET", "2024-03-10", "950000"],
    &["Priya Sharma", "priya.sharma@company.com", "+91 9876543213", "Marketing", "Marketing Manager", "IT", "2024-01-20", "1100000"],
    &["Amit Patel", "amit.patel@company.com", "+91 9876543214", "Operations", "Operations Associate", "Telecom", "2024-02-15", "250000"],
];

pub const DEMO_ROWS: &[&[&str]] = &[
    &["John Smith", "john.smith@company.com", "+91 9876543210", "Technology", "Software Engineer", "JNET", "2024-01-15", "1200000"],
    &["Ananya Iyer", "ananya.iyer@company.com", "+91 9812345670", "Human Resources", "HR Business Partner", "Telecom", "2023-11-06", "950000"],
    &["Vikram Singh", "vikram.singh@company.com", "+91 9898989898", "Technology", "Engineering Manager", "JNET", "2022-07-18", "2400000"],
    &["Jane Doe", "invalid-email", "+91 9876543211", "Sales", "Sales Executive", "Telecom", "2024-02-01", "800000"],
    &["Meera Nair", "meera.nair@company.com", "+91 9123456780", "Finance", "Accounts Executive", "JNET", "2024-04-01", "540000"],
    &["Raj Kumar", "raj.kumar@company.com", "9876543212", "Finance", "Financial Analyst", "JNET", "2024-03-10", "950000"],
    &["Sahil Mehta", "sahil.mehta@company.com", "+91 9988776655", "Operations", "Field Engineer", "Telecom", "2023-09-25", "480000"],
    &["Priya Sharma", "priya.sharma@company.com", "+91 9876543213", "Marketing", "Marketing Manager", "IT", "2024-01-20", "1100000"],
    &["Kavya Reddy", "kavya.reddy@company.com", "+91 9001122334", "Technology", "QA Engineer", "JNET", "2024-05-13", "720000"],
    &["Amit Patel", "amit.patel@company.com", "+91 9876543214", "Operations", "Operations Associate", "Telecom", "2024-02-15", "250000"],
    &["Rohan Das", "rohan.das@company.com", "+91 98765 4321", "", "Network Engineer", "Telecom", "2099-01-01", "650000"],
    &["Neha Gupta", "neha.gupta@company.com", "+91 9345678901", "Legal", "Legal Counsel", "JNET", "2021-12-01", "1800000"],
];
