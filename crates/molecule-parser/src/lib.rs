//! # Molecule Parser
//!
//! Parses chemical formulas such as `"Mg(OH)2"` into per-element atom counts.
//!
//! ## Overview
//!
//! A formula is a sequence of element symbols (`H`, `Mg`) with optional
//! counts, and bracket groups (`()`, `[]`, `{}`) with optional trailing
//! multipliers that scale everything inside them:
//!
//! ```text
//! K4[ON(SO3)2]2  =>  K: 4, O: 14, N: 2, S: 4
//! ```
//!
//! Element symbols are not checked against the periodic table. `"Xx"` is
//! accepted. Counts are arbitrary-precision [`BigUint`]s.
//!
//! ## Architecture
//!
//! [`parse_formula`] runs two passes over the input:
//!
//! 1. [`validator::validate_brackets`] checks bracket balance and pairing only
//! 2. [`interpreter::interpret`] tokenizes with [`lexer::Lexer`] and folds the
//!    tokens through a stack of per-depth accumulators
//!
//! Because validation runs first, a bracket problem is always reported as
//! [`ErrorKind::DelimiterMismatch`], even when the formula also contains a
//! bad character.
//!
//! ## Examples
//!
//! ```
//! use molecule_parser::{BigUint, ErrorKind, parse_formula};
//!
//! let atoms = parse_formula("K4[ON(SO3)2]2")?;
//! assert_eq!(atoms.get("O"), Some(&BigUint::from(14u32)));
//!
//! let err = parse_formula("(NO").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::DelimiterMismatch);
//! assert!(err.to_string().contains("delimiter mismatch"));
//!
//! let err = parse_formula("-").unwrap_err();
//! assert!(err.to_string().contains("bad character '-'"));
//! # Ok::<(), molecule_parser::ParseError>(())
//! ```

/// Per-element count mapping.
pub mod composition;
/// Error types.
pub mod error;
/// Formula interpretation over a scope stack.
pub mod interpreter;
/// Formula tokenization.
pub mod lexer;
/// Bracket balance validation.
pub mod validator;


pub use composition::Composition;
pub use error::{ErrorKind, InterpretError, ParseError, ValidationError};
pub use num_bigint::BigUint;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parses `formula` into per-element atom counts.
///
/// Brackets are validated before interpretation starts. Any failure is
/// returned as a [`ParseError`]; no partial counts are ever produced.
pub fn parse_formula(formula: &str) -> Result<Composition, ParseError> {
    log::info!("Validating formula '{formula}'...");
    if let Err(err) = validator::validate_brackets(formula) {
        log::error!("Validation failed for formula '{formula}': {err}");
        return Err(err.into());
    }
    log::info!("Successfully validated formula '{formula}'");

    log::info!("Parsing formula '{formula}'...");
    match interpreter::interpret(formula) {
        Ok(atoms) => {
            log::info!("Successfully parsed formula '{formula}'");
            log::debug!("Parsed {} distinct element(s) from '{formula}'", atoms.len());
            Ok(atoms)
        }
        Err(err) => {
            log::error!("Parsing failed for formula '{formula}': {err}");
            Err(err.into())
        }
    }
}
