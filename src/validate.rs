//! Validation and normalization of raw expressions
//!
//! These are best-effort checks on user input: they decide whether an
//! expression is worth handing to the parser, and rewrite its operator
//! spellings into the canonical form the grammar understands. None of them
//! can fail; they return verdicts or rewritten strings.

use log::debug;

/// Characters that may appear in a raw expression besides whitespace
///
/// Variables, parentheses and every character of every operator spelling.
const ALLOWED: &[char] = &[
    'p', 'q', 'r', '(', ')', '¬', '!', '∧', '&', '∨', '|', '→', '=', '>', '↔', '<',
];

/// Operator rewrites, applied in order
///
/// The ASCII biconditional `<=>` contains the ASCII conditional `=>`, so it
/// must be rewritten first or it would turn into `<` followed by a
/// conditional.
const REWRITES: &[(&str, &str)] = &[
    ("<=>", " == "),
    ("=>", " <= "),
    ("¬", " not "),
    ("!", " not "),
    ("∧", " and "),
    ("&", " and "),
    ("∨", " or "),
    ("|", " or "),
    ("→", " <= "),
    ("↔", " == "),
];

/// Check that an expression only uses the allowed characters
///
/// Returns `true` iff every character of the trimmed expression is a variable
/// (`p`, `q`, `r`), whitespace, a parenthesis, or part of an operator spelling
/// (`¬ ! ∧ & ∨ | → = > ↔ <`). This is a character-class check only: `p q`
/// passes even though it is not a formula.
///
/// # Examples
///
/// ```
/// use truth_table::validate;
///
/// assert!(validate("(p ∨ q) → r"));
/// assert!(validate("p <=> !q"));
/// assert!(!validate("p ∧ x"));
/// ```
pub fn validate(expression: &str) -> bool {
    expression
        .trim()
        .chars()
        .all(|c| c.is_whitespace() || ALLOWED.contains(&c))
}

/// Check that opening and closing parentheses are equally many
///
/// # Examples
///
/// ```
/// use truth_table::parentheses_balanced;
///
/// assert!(parentheses_balanced("(p ∧ q) ∨ (q ∧ r)"));
/// assert!(!parentheses_balanced("(p ∧ q"));
/// ```
pub fn parentheses_balanced(expression: &str) -> bool {
    let opening = expression.chars().filter(|&c| c == '(').count();
    let closing = expression.chars().filter(|&c| c == ')').count();
    opening == closing
}

/// Rewrite operator spellings into the canonical operator form
///
/// | Spellings     | Canonical |
/// |---------------|-----------|
/// | `¬`, `!`      | `not`     |
/// | `∧`, `&`      | `and`     |
/// | `∨`, `\|`     | `or`      |
/// | `→`, `=>`     | `<=`      |
/// | `↔`, `<=>`    | `==`      |
///
/// Rewritten tokens are padded with spaces so neighbouring tokens never fuse.
/// Anything else is left untouched for the parser to accept or reject.
///
/// # Examples
///
/// ```
/// use truth_table::normalize;
///
/// let canonical = normalize("p <=> q");
/// assert_eq!(canonical.split_whitespace().collect::<Vec<_>>(), ["p", "==", "q"]);
/// ```
pub fn normalize(expression: &str) -> String {
    let normalized = REWRITES
        .iter()
        .fold(expression.to_string(), |acc, (from, to)| acc.replace(from, to));
    debug!("normalized {:?} to {:?}", expression, normalized);
    normalized
}
