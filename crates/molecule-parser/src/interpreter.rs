//! Stack-based interpretation of a formula into atom counts.
//!
//! Every open bracket pushes a fresh accumulator. Every close bracket pops the
//! innermost accumulator and adds its counts, times the group multiplier, into
//! the accumulator beneath. The bottom accumulator is the result.

use std::collections::BTreeMap;

use num_bigint::BigUint;

use crate::composition::Composition;
use crate::error::InterpretError;
use crate::lexer::{Lexer, TokenKind};

type Scope = BTreeMap<String, BigUint>;

/// Stack of per-depth accumulators. Never empty.
struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    fn new() -> Self {
        Self {
            scopes: vec![Scope::new()],
        }
    }

    fn depth(&self) -> usize {
        self.scopes.len()
    }

    fn innermost(&mut self) -> &mut Scope {
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }

    /// Overwrites the count of `symbol` in the innermost scope.
    fn set(&mut self, symbol: &str, count: BigUint) {
        self.innermost().insert(symbol.to_string(), count);
    }

    fn open(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Pops the innermost scope and folds it, scaled by `multiplier`, into
    /// the scope beneath.
    fn close(&mut self, multiplier: &BigUint, position: usize) -> Result<(), InterpretError> {
        if self.scopes.len() < 2 {
            return Err(InterpretError::UnexpectedClose { position });
        }
        let group = self.scopes.pop().unwrap_or_default();
        let outer = self.innermost();

        for (symbol, count) in group {
            *outer.entry(symbol).or_default() += count * multiplier;
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Composition, InterpretError> {
        if self.scopes.len() != 1 {
            return Err(InterpretError::UnclosedGroup);
        }
        Ok(Composition::from(self.scopes.pop().unwrap_or_default()))
    }
}

/// Interprets `formula` into per-element atom counts.
///
/// The formula is expected to have passed
/// [`validate_brackets`](crate::validator::validate_brackets). Called on an
/// unvalidated formula, a stray close fails with
/// [`InterpretError::UnexpectedClose`] and a missing close with
/// [`InterpretError::UnclosedGroup`]. Bracket *types* are not re-checked.
///
/// A bare atom *sets* its count in the current scope, so `"H2H3"` gives
/// `{H: 3}`. Group contributions are *added*, so `"(H2)(H3)"` gives `{H: 5}`.
///
/// ```
/// use molecule_parser::BigUint;
/// use molecule_parser::interpreter::interpret;
///
/// let atoms = interpret("Mg(OH)2").unwrap();
/// assert_eq!(atoms.get("Mg"), Some(&BigUint::from(1u32)));
/// assert_eq!(atoms.get("O"), Some(&BigUint::from(2u32)));
/// assert_eq!(atoms.get("H"), Some(&BigUint::from(2u32)));
/// ```
pub fn interpret(formula: &str) -> Result<Composition, InterpretError> {
    let mut stack = ScopeStack::new();

    for token in Lexer::new(formula) {
        let token = token?;
        log::trace!(
            "token {:?} at {} (depth {})",
            token.text,
            token.offset,
            stack.depth()
        );
        match token.kind {
            TokenKind::Atom { symbol, count } => stack.set(symbol, count),
            TokenKind::Open => stack.open(),
            TokenKind::Close { count } => stack.close(&count, token.offset)?,
        }
    }

    stack.finish()
}
