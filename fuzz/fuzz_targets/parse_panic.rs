#![no_main]
use libfuzzer_sys::fuzz_target;
use molecule_parser::parse_formula;

fuzz_target!(|data: &[u8]| {
    // Panic freedom only; errors are expected for most inputs.
    let s = String::from_utf8_lossy(data);
    if let Ok(atoms) = parse_formula(&s) {
        // Every successful parse must also pass bracket validation.
        assert!(molecule_parser::validator::validate_brackets(&s).is_ok());
        let _ = atoms.total_atoms();
    }
});
