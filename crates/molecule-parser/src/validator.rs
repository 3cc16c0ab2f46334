use crate::error::ValidationError;
use crate::lexer::Bracket;

/// Validates bracket matching in a chemical formula.
///
/// ## Algorithm
///
/// A **stack-based** scan that checks brackets are balanced and correctly
/// paired:
///
/// 1. **Opening brackets** (`(`, `[`, `{`) are pushed onto a stack
/// 2. **Closing brackets** (`)`, `]`, `}`) pop from the stack and the popped
///    opener must be their partner
/// 3. At the end, any opener left on the stack is unclosed
///
/// Every other character is skipped. Element syntax and stray characters are
/// left to the [interpreter](crate::interpreter).
///
/// ## Error Reporting
///
/// Validation stops at the first problem. Wrong partners, a close with
/// nothing open, and unclosed openers all report the same
/// [`ValidationError::DelimiterMismatch`].
///
/// ## Examples
///
/// ```
/// use molecule_parser::validator::validate_brackets;
///
/// assert!(validate_brackets("K4[ON(SO3)2]2").is_ok());
/// assert!(validate_brackets("{NO)3").is_err());
/// assert!(validate_brackets("H2-O").is_ok()); // stray characters are not checked here
/// ```
pub fn validate_brackets(formula: &str) -> Result<(), ValidationError> {
    let mut stack: Vec<Bracket> = Vec::new();

    for c in formula.chars() {
        if let Some(open) = Bracket::opening(c) {
            stack.push(open);
        } else if let Some(close) = Bracket::closing(c) {
            match stack.pop() {
                Some(open) if open == close => {}
                _ => return Err(ValidationError::DelimiterMismatch),
            }
        }
    }

    if stack.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::DelimiterMismatch)
    }
}
