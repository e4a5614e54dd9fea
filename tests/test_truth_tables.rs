//! End-to-end tests for generate_table

use truth_table::{
    generate_table, Assignment, Classification, EvaluationError, ValidationError, Variable,
};

fn results(expression: &str) -> Vec<u8> {
    generate_table(expression)
        .unwrap()
        .rows()
        .iter()
        .map(|row| row.result_bit())
        .collect()
}

#[test]
fn test_conjunction_scenario() {
    let result = generate_table("p ∧ q").unwrap();
    assert_eq!(result.variables(), [Variable::P, Variable::Q]);
    assert_eq!(result.rows().len(), 4);
    assert_eq!(results("p ∧ q"), [1, 0, 0, 0]);
    assert_eq!(result.classification(), Classification::Contingency);
    assert_eq!(result.classification().label(), "CONTINGÊNCIA");
}

#[test]
fn test_excluded_middle_scenario() {
    let result = generate_table("p ∨ ¬p").unwrap();
    assert_eq!(result.variables(), [Variable::P]);
    assert_eq!(result.rows().len(), 2);
    assert_eq!(results("p ∨ ¬p"), [1, 1]);
    assert_eq!(result.classification().label(), "TAUTOLOGIA");
}

#[test]
fn test_contradiction_scenario() {
    let result = generate_table("p ∧ ¬p").unwrap();
    assert_eq!(result.variables(), [Variable::P]);
    assert_eq!(results("p ∧ ¬p"), [0, 0]);
    assert_eq!(result.classification().label(), "CONTRADIÇÃO");
}

#[test]
fn test_disjunction_implies_r() {
    let result = generate_table("(p ∨ q) → r").unwrap();
    let assignment: Assignment = [
        (Variable::P, true),
        (Variable::Q, false),
        (Variable::R, false),
    ]
    .into_iter()
    .collect();
    assert_eq!(result.table().result_for(&assignment), Some(false));
}

#[test]
fn test_conditional_truth_table() {
    // Rows: (1,1) (1,0) (0,1) (0,0)
    assert_eq!(results("p → q"), [1, 0, 1, 1]);
}

#[test]
fn test_biconditional_identity() {
    assert_eq!(results("p ↔ p"), [1, 1]);
    assert_eq!(
        generate_table("p ↔ p").unwrap().classification(),
        Classification::Tautology
    );
}

#[test]
fn test_row_counts() {
    for (expression, rows) in [("q", 2), ("p ∧ r", 4), ("p ∧ q ∧ r", 8), ("¬(r ∨ r)", 2)] {
        assert_eq!(generate_table(expression).unwrap().rows().len(), rows);
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let expression = "¬p ↔ (q ∧ r)";
    assert_eq!(
        generate_table(expression).unwrap(),
        generate_table(expression).unwrap()
    );
}

#[test]
fn test_classification_follows_results() {
    for expression in ["p → p", "(p → q) ↔ (¬q → ¬p)", "p ∧ ¬p ∧ q", "p ∨ q", "p ↔ ¬q"] {
        let result = generate_table(expression).unwrap();
        let column: Vec<bool> = result.rows().iter().map(|row| row.result()).collect();
        let expected = if column.iter().all(|&v| v) {
            Classification::Tautology
        } else if column.iter().all(|&v| !v) {
            Classification::Contradiction
        } else {
            Classification::Contingency
        };
        assert_eq!(result.classification(), expected, "{}", expression);
    }
}

#[test]
fn test_classic_laws_are_tautologies() {
    for law in [
        "(p → q) ↔ (¬q → ¬p)",
        "¬(p ∧ q) ↔ (¬p ∨ ¬q)",
        "((p → q) ∧ (q → r)) → (p → r)",
        "(p ∧ (p → q)) → q",
        "p ∨ ¬p",
    ] {
        assert_eq!(
            generate_table(law).unwrap().classification(),
            Classification::Tautology,
            "{}",
            law
        );
    }
}

#[test]
fn test_unbalanced_parentheses_checked_first() {
    assert_eq!(
        generate_table("(p ∧ q"),
        Err(ValidationError::UnbalancedParentheses)
    );
    assert_eq!(
        generate_table("p ∧ q))"),
        Err(ValidationError::UnbalancedParentheses)
    );
}

#[test]
fn test_invalid_symbol() {
    assert_eq!(
        generate_table("p ∧ x"),
        Err(ValidationError::InvalidCharacterSet)
    );
    assert_eq!(
        generate_table("p ⊕ q"),
        Err(ValidationError::InvalidCharacterSet)
    );
}

#[test]
fn test_valid_characters_but_not_a_formula() {
    for expression in ["p q", "p ∧", "→ p", "p > q", ")p(", "()"] {
        assert!(
            matches!(
                generate_table(expression),
                Err(ValidationError::EvaluationFailure(
                    EvaluationError::InvalidSyntax { .. }
                ))
            ),
            "{:?}",
            expression
        );
    }
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    assert_eq!(
        generate_table("  p ∧ q \n").unwrap(),
        generate_table("p ∧ q").unwrap()
    );
}

#[test]
fn test_rendering() {
    let rendered = generate_table("p ∧ q").unwrap().to_string();
    let expected = "\
p | q | Resultado
-----------------
1 | 1 | 1
1 | 0 | 0
0 | 1 | 0
0 | 0 | 0
A proposição é uma CONTINGÊNCIA.";
    assert_eq!(rendered, expected);
}
