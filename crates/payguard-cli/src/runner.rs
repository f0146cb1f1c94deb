use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use notify::{event::ModifyKind, Event, EventKind, RecursiveMode, Watcher};
use payguard_core::{error_report_filename, Domain, ImportConfig, ImportWizard};
use payguard_reports::{JsonFormatter, JsonLinesSink, Reporter, StdOutFormatter};
use tracing::{debug, info, warn};

use crate::{
    errors::CliError, parser::parse_config, rules_doc::print_rules_documentation,
    writer::{write_file, write_staged},
    Args, Command, OutputFormat, PreviewArgs,
};

/// Returns `Ok(false)` when the import contains invalid records.
pub fn run(args: Args) -> Result<bool> {
    let config = parse_config(args.config.as_deref())?;
    let session = Session {
        import_config: config
            .import_config()
            .context("Invalid [import] section in config file")?,
        output_dir: config.output.dir,
        format: args.output,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    match args.command {
        Command::Template { domain, out } => session.template(domain.into(), out.as_deref()),
        Command::Validate {
            domain,
            file,
            preview,
        } => session.validate(domain.into(), &file, &preview),
        Command::Demo { domain, preview } => session.demo(domain.into(), &preview),
        Command::Watch {
            domain,
            file,
            preview,
        } => session.watch(domain.into(), &file, &preview),
        Command::Rules { domain } => session.rules(domain.into()),
    }
}

struct Session {
    import_config: ImportConfig,
    output_dir: Option<String>,
    format: OutputFormat,
    version: String,
}

impl Session {
    fn wizard(&self, domain: Domain) -> Result<ImportWizard> {
        ImportWizard::new(domain, self.import_config.clone())
            .with_context(|| format!("Failed to build the '{}' schema", domain))
    }

    fn template(&self, domain: Domain, out: Option<&str>) -> Result<bool> {
        let wizard = self.wizard(domain)?;
        let text = wizard.template()?;
        let path = write_file(
            out.or(self.output_dir.as_deref()),
            &wizard.template_filename(),
            &text,
        )?;
        self.notice(&format!("Template written to {}", path.display()));
        Ok(true)
    }

    fn validate(&self, domain: Domain, file: &str, args: &PreviewArgs) -> Result<bool> {
        let text = read_upload(file)?;
        let mut wizard = self.wizard(domain)?;
        wizard.next()?;
        wizard
            .upload(&text)
            .with_context(|| format!("Failed to import '{}'", file))?;
        self.preview(&mut wizard, file, args)
    }

    fn demo(&self, domain: Domain, args: &PreviewArgs) -> Result<bool> {
        let mut wizard = self.wizard(domain)?;
        wizard.next()?;
        wizard.load_demo()?;
        self.preview(&mut wizard, "demo data", args)
    }

    fn preview(&self, wizard: &mut ImportWizard, source: &str, args: &PreviewArgs) -> Result<bool> {
        wizard.set_filter(args.filter);
        wizard.set_page(args.page)?;
        let summary = wizard.summary()?;

        match self.format {
            OutputFormat::Stdout => {
                let mut formatter = StdOutFormatter::new(self.version.clone());
                formatter.on_start();
                let page = wizard.current_page()?;
                formatter.on_page(wizard.importer().schema(), &page);
                formatter.on_import_result(source, &summary);
            }
            OutputFormat::Json => {
                let mut formatter = JsonFormatter::new(self.version.clone());
                formatter.on_import_result(source, &summary);
                let json = formatter
                    .to_json()
                    .context("Failed to serialise the import report")?;
                println!("{}", json);
            }
        }

        if args.export_errors {
            self.export_errors(wizard, args.out.as_deref())?;
        }
        if let Some(path) = &args.save {
            self.save(wizard, path)?;
        }
        Ok(summary.is_passed())
    }

    fn export_errors(&self, wizard: &ImportWizard, out: Option<&str>) -> Result<()> {
        let Some(text) = wizard.export_errors()? else {
            self.notice("No invalid records to export");
            return Ok(());
        };
        let filename = error_report_filename(wizard.importer().schema(), self.import_config.today());
        let path = write_file(out.or(self.output_dir.as_deref()), &filename, &text)?;
        self.notice(&format!("Error report written to {}", path.display()));
        Ok(())
    }

    fn save(&self, wizard: &mut ImportWizard, path: &str) -> Result<()> {
        let saved = write_staged(Path::new(path), |writer| {
            wizard
                .save_valid(&mut JsonLinesSink::new(writer))
                .with_context(|| format!("Failed to save valid records to {}", path))
        })?;
        self.notice(&format!("Saved {} valid records to {}", saved, path));
        Ok(())
    }

    fn watch(&self, domain: Domain, file: &str, args: &PreviewArgs) -> Result<bool> {
        let path = PathBuf::from(file);
        let (dir, file_name) = watch_target(&path).ok_or_else(|| CliError::WatchTarget {
            path: file.to_string(),
        })?;

        let mut passed = self.validate(domain, file, args)?;

        let (tx, rx) = std::sync::mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)?;
        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch directory: {}", dir.display()))?;
        self.waiting();

        for res in rx {
            match res {
                Ok(event) if is_upload_change(&event, file_name) => {
                    debug!(kind = ?event.kind, "Upload changed");
                    match self.validate(domain, file, args) {
                        Ok(p) => passed = p,
                        // The file may be mid-write; the next event retries
                        Err(e) => warn!(error = %format!("{:#}", e), "Validation failed"),
                    }
                    self.waiting();
                }
                Ok(_) => {}
                Err(e) => warn!(error = %e, "Watch error"),
            }
        }
        Ok(passed)
    }

    fn rules(&self, domain: Domain) -> Result<bool> {
        let schema = domain
            .schema()
            .with_context(|| format!("Failed to build the '{}' schema", domain))?;
        let formatter = StdOutFormatter::new(self.version.clone());
        print_rules_documentation(&schema, &formatter);
        Ok(true)
    }

    fn waiting(&self) {
        if let OutputFormat::Stdout = self.format {
            StdOutFormatter::new(self.version.clone()).on_waiting();
        }
    }

    // Keeps stdout machine-readable in JSON mode
    fn notice(&self, message: &str) {
        match self.format {
            OutputFormat::Stdout => println!("{}", message),
            OutputFormat::Json => info!("{}", message),
        }
    }
}

fn read_upload(file: &str) -> Result<String> {
    if !Path::new(file).is_file() {
        return Err(CliError::FileNotFound {
            path: file.to_string(),
        }
        .into());
    }
    std::fs::read_to_string(file).with_context(|| format!("Failed to read upload: {}", file))
}

fn watch_target(path: &Path) -> Option<(&Path, &OsStr)> {
    let file_name = path.file_name()?;
    let dir = match path.parent()? {
        p if p.as_os_str().is_empty() => Path::new("."),
        p => p,
    };
    Some((dir, file_name))
}

fn is_upload_change(event: &Event, file_name: &OsStr) -> bool {
    let relevant = matches!(
        event.kind,
        EventKind::Create(_)
            | EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Name(_) | ModifyKind::Any)
    );
    relevant && event.paths.iter().any(|p| p.file_name() == Some(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, DataChange};
    use payguard_core::Filter;
    use std::fs;
    use tempfile::TempDir;

    fn session(dir: &TempDir) -> Session {
        Session {
            import_config: ImportConfig::default(),
            output_dir: dir.path().to_str().map(String::from),
            format: OutputFormat::Stdout,
            version: "0.1.0".to_string(),
        }
    }

    fn preview_args() -> PreviewArgs {
        PreviewArgs {
            filter: Filter::All,
            page: 1,
            export_errors: true,
            out: None,
            save: None,
        }
    }

    #[test]
    fn test_template_written_to_output_dir() {
        let dir = TempDir::new().unwrap();
        let passed = session(&dir).template(Domain::Employee, None).unwrap();
        assert!(passed);
        let text = fs::read_to_string(dir.path().join("employee_template.csv")).unwrap();
        assert!(text.starts_with("Name,Email,Phone"));
    }

    #[test]
    fn test_validate_exports_errors_and_saves_valid_rows() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);
        let upload = dir.path().join("upload.csv");
        session.template(Domain::Employee, upload.to_str()).unwrap();

        let save = dir.path().join("valid.jsonl");
        let mut args = preview_args();
        args.save = save.to_str().map(String::from);

        let passed = session
            .validate(Domain::Employee, upload.to_str().unwrap(), &args)
            .unwrap();
        assert!(!passed);

        let report = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .find(|e| e.file_name().to_string_lossy().starts_with("employee_errors_"))
            .expect("error report written");
        let text = fs::read_to_string(report.path()).unwrap();
        assert_eq!(text.lines().count(), 5);

        let saved = fs::read_to_string(save).unwrap();
        assert_eq!(saved.lines().count(), 1);
        assert!(saved.contains("John Smith"));
    }

    #[test]
    fn test_failed_save_leaves_target_untouched() {
        let dir = TempDir::new().unwrap();
        let save = dir.path().join("valid.jsonl");
        fs::write(&save, "previous\n").unwrap();

        // Nothing uploaded yet, so the wizard refuses to save
        let mut wizard = ImportWizard::new(Domain::Employee, ImportConfig::default()).unwrap();
        let err = session(&dir).save(&mut wizard, save.to_str().unwrap());

        assert!(err.is_err());
        assert_eq!(fs::read_to_string(&save).unwrap(), "previous\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_validate_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = session(&dir)
            .validate(Domain::Employee, "/no/such/upload.csv", &preview_args())
            .unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_demo_reports_invalid_rows() {
        let dir = TempDir::new().unwrap();
        let mut args = preview_args();
        args.filter = Filter::Valid;
        assert!(!session(&dir).demo(Domain::VariablePay, &args).unwrap());
        assert!(fs::read_dir(dir.path()).unwrap().any(|e| e
            .unwrap()
            .file_name()
            .to_string_lossy()
            .starts_with("variable-pay_errors_")));
    }

    #[test]
    fn test_watch_target() {
        let (dir, name) = watch_target(Path::new("upload.csv")).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "upload.csv");

        let (dir, _) = watch_target(Path::new("data/upload.csv")).unwrap();
        assert_eq!(dir, Path::new("data"));

        assert!(watch_target(Path::new("/")).is_none());
    }

    #[test]
    fn test_is_upload_change() {
        let name = OsStr::new("upload.csv");
        let modified = Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Content)))
            .add_path(PathBuf::from("/tmp/upload.csv"));
        assert!(is_upload_change(&modified, name));

        let created =
            Event::new(EventKind::Create(CreateKind::File)).add_path(PathBuf::from("upload.csv"));
        assert!(is_upload_change(&created, name));

        let other = Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Content)))
            .add_path(PathBuf::from("/tmp/other.csv"));
        assert!(!is_upload_change(&other, name));

        let opened = Event::new(EventKind::Access(AccessKind::Any))
            .add_path(PathBuf::from("/tmp/upload.csv"));
        assert!(!is_upload_change(&opened, name));
    }
}
