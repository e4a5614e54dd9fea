use truth_table::{generate_table, normalize, Formula};

fn same_table(glyphs: &str, ascii: &str) {
    assert_eq!(
        generate_table(glyphs).unwrap(),
        generate_table(ascii).unwrap(),
        "{} vs {}",
        glyphs,
        ascii
    );
}

#[test]
fn test_negation_notations() {
    same_table("¬p", "!p");
    same_table("¬¬q", "!!q");
}

#[test]
fn test_conjunction_notations() {
    same_table("p ∧ q", "p & q");
}

#[test]
fn test_disjunction_notations() {
    same_table("p ∨ q", "p | q");
}

#[test]
fn test_conditional_notations() {
    same_table("p → q", "p => q");
}

#[test]
fn test_biconditional_notations() {
    same_table("p ↔ q", "p <=> q");
}

#[test]
fn test_mixed_notations() {
    same_table("¬p ↔ (q ∧ r)", "!p <=> (q & r)");
    same_table("(p ∨ q) → r", "(p | q) => r");
    same_table("¬p ∧ q ∨ r", "!p&q|r");
}

#[test]
fn test_ascii_biconditional_is_not_a_conditional() {
    // A corrupted rewrite would read p <=> q as p < (p -> q)
    let biconditional = Formula::parse(&normalize("p <=> q")).unwrap();
    assert_eq!(biconditional.to_string(), "p ↔ q");

    let results: Vec<u8> = generate_table("p <=> q")
        .unwrap()
        .rows()
        .iter()
        .map(|row| row.result_bit())
        .collect();
    assert_eq!(results, [1, 0, 0, 1]);
}

#[test]
fn test_compact_ascii_without_spaces() {
    same_table("p → (q ↔ r)", "p=>(q<=>r)");
}
