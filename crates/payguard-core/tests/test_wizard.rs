use chrono::NaiveDate;
use payguard_core::{
    Domain, Filter, ImportConfigBuilder, ImportWizard, MemorySink, Record, RecordSink, Schema,
    SinkError, WizardError, WizardStep,
};

fn wizard(domain: Domain) -> ImportWizard {
    let config = ImportConfigBuilder::new()
        .with_today(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        .build();
    ImportWizard::new(domain, config).unwrap()
}

struct FailingSink;

impl RecordSink for FailingSink {
    fn accept(&mut self, _schema: &Schema, _records: &[&Record]) -> Result<usize, SinkError> {
        Err(SinkError::Rejected("backend unavailable".to_string()))
    }
}

#[test]
fn test_linear_steps() {
    let mut wizard = wizard(Domain::Employee);
    assert_eq!(wizard.step(), WizardStep::TemplateDownload);
    assert!(matches!(
        wizard.back(),
        Err(WizardError::InvalidTransition { .. })
    ));

    assert_eq!(wizard.next().unwrap(), WizardStep::FileUpload);
    // Cannot skip ahead without a dataset
    assert!(matches!(wizard.next(), Err(WizardError::NoDataset)));
    assert_eq!(wizard.back().unwrap(), WizardStep::TemplateDownload);
}

#[test]
fn test_upload_requires_file_upload_step() {
    let mut wizard = wizard(Domain::Employee);
    assert!(matches!(
        wizard.upload("Name\nJohn"),
        Err(WizardError::InvalidTransition { .. })
    ));
    assert!(matches!(
        wizard.current_page(),
        Err(WizardError::InvalidTransition { .. })
    ));
}

#[test]
fn test_template_available() {
    let wizard = wizard(Domain::AdditionalPay);
    let text = wizard.template().unwrap();
    assert!(text.starts_with("Employee ID,Employee Name,Business Unit"));
    assert_eq!(wizard.template_filename(), "additional-pay_template.csv");
}

#[test]
fn test_demo_data_jumps_to_preview() {
    let mut wizard = wizard(Domain::Employee);
    wizard.next().unwrap();
    let dataset = wizard.load_demo().unwrap();
    assert_eq!(dataset.len(), Domain::Employee.demo_rows().len());
    assert_eq!(wizard.step(), WizardStep::PreviewAndConfirm);

    let page = wizard.current_page().unwrap();
    assert_eq!(page.index, 1);
    assert_eq!(page.total_items, 12);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.records.len(), 10);
}

#[test]
fn test_filter_resets_page() {
    let mut wizard = wizard(Domain::Employee);
    wizard.next().unwrap();
    wizard.load_demo().unwrap();

    assert_eq!(wizard.set_page(2).unwrap(), 2);
    wizard.set_filter(Filter::Error);
    assert_eq!(wizard.page(), 1);

    let page = wizard.current_page().unwrap();
    assert_eq!(page.filter, Filter::Error);
    assert!(page.records.iter().all(|r| !r.is_valid()));
    assert_eq!(page.total_pages, 1);

    // Clamped to the pages that exist
    assert_eq!(wizard.set_page(7).unwrap(), 1);
    assert_eq!(wizard.set_page(0).unwrap(), 1);
}

#[test]
fn test_reupload_replaces_dataset() {
    let mut wizard = wizard(Domain::Employee);
    wizard.next().unwrap();
    wizard.load_demo().unwrap();
    wizard.set_page(2).unwrap();

    wizard.back().unwrap();
    let dataset = wizard
        .upload("Name,Email,Phone,Department,Designation,Business Unit,Joining Date,Salary\nJohn Smith,john.smith@company.com,+91 9876543210,Technology,Software Engineer,JNET,2024-01-15,1200000\n")
        .unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(wizard.page(), 1);
    assert_eq!(wizard.step(), WizardStep::PreviewAndConfirm);
}

#[test]
fn test_summary_and_error_export() {
    let mut wizard = wizard(Domain::VariablePay);
    wizard.next().unwrap();
    wizard.load_demo().unwrap();

    let summary = wizard.summary().unwrap();
    assert_eq!(summary.total, Domain::VariablePay.demo_rows().len());
    assert_eq!(summary.valid + summary.invalid, summary.total);
    assert!(summary.invalid > 0);

    let text = wizard.export_errors().unwrap().unwrap();
    assert_eq!(text.lines().count(), summary.invalid + 1);
}

#[test]
fn test_save_valid_closes_wizard() {
    let mut wizard = wizard(Domain::Employee);
    wizard.next().unwrap();
    let valid = wizard.load_demo().unwrap().valid_count();

    let mut sink = MemorySink::new();
    assert_eq!(wizard.save_valid(&mut sink).unwrap(), valid);
    assert_eq!(sink.len(), valid);
    assert_eq!(sink.headers()[0], "Name");

    // Reopening starts over with no data
    assert_eq!(wizard.step(), WizardStep::TemplateDownload);
    assert!(wizard.dataset().is_none());
    assert_eq!(wizard.filter(), Filter::All);
}

#[test]
fn test_failed_save_keeps_wizard_open() {
    let mut wizard = wizard(Domain::AdditionalPay);
    wizard.next().unwrap();
    wizard.load_demo().unwrap();

    let result = wizard.save_valid(&mut FailingSink);
    assert!(matches!(result, Err(WizardError::Sink(_))));
    assert_eq!(wizard.step(), WizardStep::PreviewAndConfirm);
    assert!(wizard.dataset().is_some());

    let mut sink = MemorySink::new();
    assert!(wizard.save_valid(&mut sink).unwrap() > 0);
}

#[test]
fn test_close_discards_everything() {
    let mut wizard = wizard(Domain::Employee);
    wizard.next().unwrap();
    wizard.load_demo().unwrap();
    wizard.set_filter(Filter::Valid);
    wizard.close();

    assert_eq!(wizard.step(), WizardStep::TemplateDownload);
    assert!(wizard.dataset().is_none());
    assert_eq!(wizard.filter(), Filter::All);
    assert_eq!(wizard.page(), 1);
}
