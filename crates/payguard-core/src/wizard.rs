//! Three-step import flow: download the template, upload a file, preview and confirm.

use std::fmt;

use tracing::{debug, info, warn};

use crate::{
    domains::Domain,
    errors::{RuleError, WizardError},
    export,
    readers::ImportConfig,
    record::{Dataset, Record},
    results::ImportSummary,
    sink::RecordSink,
    validator::Importer,
    view::{paginate, total_pages, Filter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    TemplateDownload,
    FileUpload,
    PreviewAndConfirm,
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WizardStep::TemplateDownload => "template download",
            WizardStep::FileUpload => "file upload",
            WizardStep::PreviewAndConfirm => "preview and confirm",
        };
        f.write_str(s)
    }
}

/// One page of the preview table.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPage<'a> {
    pub records: Vec<&'a Record>,
    pub filter: Filter,
    pub index: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Owns the dataset of one import session.
///
/// Steps only move one at a time, except that loading demo data or uploading
/// a file jumps straight from `FileUpload` to `PreviewAndConfirm`. Closing
/// the wizard discards everything and restarts at `TemplateDownload`.
pub struct ImportWizard {
    domain: Domain,
    importer: Importer,
    step: WizardStep,
    dataset: Option<Dataset>,
    filter: Filter,
    page: usize,
}

impl ImportWizard {
    pub fn new(domain: Domain, config: ImportConfig) -> Result<Self, RuleError> {
        Ok(Self {
            domain,
            importer: domain.importer(config)?,
            step: WizardStep::default(),
            dataset: None,
            filter: Filter::default(),
            page: 1,
        })
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn importer(&self) -> &Importer {
        &self.importer
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Template CSV for this domain. Available at any step.
    pub fn template(&self) -> Result<String, RuleError> {
        export::export_template(self.importer.schema(), self.domain.template_rows())
    }

    pub fn template_filename(&self) -> String {
        export::template_filename(self.importer.schema())
    }

    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        self.step = match self.step {
            WizardStep::TemplateDownload => WizardStep::FileUpload,
            WizardStep::FileUpload if self.dataset.is_some() => WizardStep::PreviewAndConfirm,
            WizardStep::FileUpload => return Err(WizardError::NoDataset),
            WizardStep::PreviewAndConfirm => return Err(self.invalid("move forward")),
        };
        debug!(step = %self.step, "Wizard moved forward");
        Ok(self.step)
    }

    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        self.step = match self.step {
            WizardStep::TemplateDownload => return Err(self.invalid("move back")),
            WizardStep::FileUpload => WizardStep::TemplateDownload,
            WizardStep::PreviewAndConfirm => WizardStep::FileUpload,
        };
        debug!(step = %self.step, "Wizard moved back");
        Ok(self.step)
    }

    /// Parse and validate uploaded text, replacing any previous dataset.
    pub fn upload(&mut self, text: &str) -> Result<&Dataset, WizardError> {
        self.expect_step(WizardStep::FileUpload, "upload a file")?;
        let dataset = self.importer.import(text);
        Ok(self.load(dataset))
    }

    /// Use the canned demo rows instead of an upload.
    pub fn load_demo(&mut self) -> Result<&Dataset, WizardError> {
        self.expect_step(WizardStep::FileUpload, "load demo data")?;
        let dataset = self.importer.import_rows(self.domain.demo_rows());
        Ok(self.load(dataset))
    }

    fn load(&mut self, dataset: Dataset) -> &Dataset {
        info!(
            domain = %self.domain,
            total = dataset.len(),
            invalid = dataset.invalid_count(),
            "Dataset loaded"
        );
        self.page = 1;
        self.step = WizardStep::PreviewAndConfirm;
        self.dataset.insert(dataset)
    }

    /// Change the preview filter. The page goes back to 1.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.page = 1;
    }

    /// Select a preview page, clamped to the pages that exist.
    pub fn set_page(&mut self, index: usize) -> Result<usize, WizardError> {
        let dataset = self.preview_dataset("change page")?;
        let pages = total_pages(dataset.filter(self.filter).len(), self.page_size());
        self.page = index.clamp(1, pages);
        Ok(self.page)
    }

    pub fn current_page(&self) -> Result<PreviewPage<'_>, WizardError> {
        let dataset = self.preview_dataset("show the preview")?;
        let view = dataset.filter(self.filter);
        let page = paginate(&view, self.page, self.page_size());
        Ok(PreviewPage {
            records: page.items.to_vec(),
            filter: self.filter,
            index: page.index,
            total_pages: page.total_pages,
            total_items: page.total_items,
        })
    }

    pub fn summary(&self) -> Result<ImportSummary, WizardError> {
        let dataset = self.preview_dataset("summarise the import")?;
        Ok(ImportSummary::from_dataset(dataset))
    }

    /// Error report for the invalid records, or `None` when all are valid.
    pub fn export_errors(&self) -> Result<Option<String>, WizardError> {
        let dataset = self.preview_dataset("export errors")?;
        Ok(export::export_errors(dataset)?)
    }

    /// Hand the valid records to `sink` and close the wizard.
    ///
    /// The wizard stays open if the sink fails so the save can be retried.
    pub fn save_valid(&mut self, sink: &mut dyn RecordSink) -> Result<usize, WizardError> {
        let dataset = self.preview_dataset("save records")?;
        let valid = dataset.filter(Filter::Valid);
        let saved = sink.accept(dataset.schema(), &valid).inspect_err(|e| {
            warn!(domain = %self.domain, error = %e, "Saving valid records failed");
        })?;
        info!(domain = %self.domain, saved, "Saved valid records");
        self.close();
        Ok(saved)
    }

    /// Discard the dataset and return to the first step.
    pub fn close(&mut self) {
        self.step = WizardStep::default();
        self.dataset = None;
        self.filter = Filter::default();
        self.page = 1;
        debug!(domain = %self.domain, "Wizard closed");
    }

    fn page_size(&self) -> usize {
        self.importer.config().page_size()
    }

    fn preview_dataset(&self, action: &str) -> Result<&Dataset, WizardError> {
        self.expect_step(WizardStep::PreviewAndConfirm, action)?;
        self.dataset.as_ref().ok_or(WizardError::NoDataset)
    }

    fn expect_step(&self, step: WizardStep, action: &str) -> Result<(), WizardError> {
        if self.step == step {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: &str) -> WizardError {
        WizardError::InvalidTransition {
            action: action.to_string(),
            step: self.step.to_string(),
        }
    }
}
