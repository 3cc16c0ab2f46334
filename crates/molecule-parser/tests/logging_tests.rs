use std::sync::{Mutex, MutexGuard, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};
use molecule_parser::parse_formula;

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();
// Tests in this file share the global logger; run them one at a time.
static SERIAL: Mutex<()> = Mutex::new(());

fn capture() -> MutexGuard<'static, ()> {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("logger already set");
        log::set_max_level(LevelFilter::Info);
    });
    let guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    LOGGER.records.lock().unwrap().clear();
    guard
}

fn logged(level: Level) -> Vec<String> {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, _)| *l == level)
        .map(|(_, message)| message.clone())
        .collect()
}

#[test]
fn test_info_logging_for_happy_path() {
    let _guard = capture();
    parse_formula("H2O").unwrap();

    let info = logged(Level::Info);
    assert_eq!(
        info,
        vec![
            "Validating formula 'H2O'...",
            "Successfully validated formula 'H2O'",
            "Parsing formula 'H2O'...",
            "Successfully parsed formula 'H2O'",
        ]
    );
    assert!(logged(Level::Error).is_empty());
}

#[test]
fn test_error_logging_for_failed_validation() {
    let _guard = capture();
    assert!(parse_formula("(H2O").is_err());

    assert_eq!(
        logged(Level::Error),
        vec!["Validation failed for formula '(H2O': delimiter mismatch"]
    );
    // Parsing never starts.
    assert!(!logged(Level::Info).iter().any(|m| m.starts_with("Parsing")));
}

#[test]
fn test_error_logging_for_failed_parse() {
    let _guard = capture();
    assert!(parse_formula("H2-O").is_err());

    let errors = logged(Level::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Parsing failed for formula 'H2-O': bad character '-'"));
}
