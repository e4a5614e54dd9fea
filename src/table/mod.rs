//! Truth tables and their classification
//!
//! A [`TruthTable`] pairs every assignment of the variables an expression
//! mentions with the value of the expression under it. Rows come in the order
//! fixed by [`enumerate_assignments`]: all variables true first, all false
//! last.
//!
//! # Examples
//!
//! ```
//! use truth_table::{Classification, TruthTable, Variable};
//!
//! # fn main() -> Result<(), truth_table::EvaluationError> {
//! let table = TruthTable::generate("p ∧ q")?;
//!
//! assert_eq!(table.variables(), [Variable::P, Variable::Q]);
//! assert_eq!(table.results(), [true, false, false, false]);
//! assert_eq!(table.classify()?, Classification::Contingency);
//! # Ok(())
//! # }
//! ```

mod assignments;
mod classification;
mod display;

pub use assignments::{enumerate_assignments, extract_variables, Assignments};
pub use classification::{classify, Classification};

use crate::expression::{Assignment, EvaluationError, Formula, Variable};
use crate::validate::normalize;
use log::{debug, trace};

/// One line of a truth table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    values: Vec<bool>,
    result: bool,
}

impl Row {
    /// The assigned values, one per table variable, in column order
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// The value of the formula under this row's assignment
    pub fn result(&self) -> bool {
        self.result
    }

    /// The assigned values encoded as `0`/`1`
    pub fn value_bits(&self) -> Vec<u8> {
        self.values.iter().map(|&v| u8::from(v)).collect()
    }

    /// The result encoded as `0`/`1`
    pub fn result_bit(&self) -> u8 {
        u8::from(self.result)
    }
}

/// Every assignment of a formula's variables with the formula's value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<Variable>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Build the truth table of an expression
    ///
    /// The expression is taken in surface syntax (any operator spelling); it
    /// is normalized and parsed here. Columns are the variables the expression
    /// mentions, see [`extract_variables`].
    ///
    /// # Errors
    ///
    /// Any [`EvaluationError`] raised while parsing or evaluating.
    pub fn generate(expression: &str) -> Result<Self, EvaluationError> {
        let variables = extract_variables(expression);
        let formula = Formula::parse(&normalize(expression))?;
        Self::with_variables(&formula, variables)
    }

    /// Build the truth table of an already parsed formula
    pub fn from_formula(formula: &Formula) -> Result<Self, EvaluationError> {
        let variables = formula.collect_variables().into_iter().collect();
        Self::with_variables(formula, variables)
    }

    fn with_variables(
        formula: &Formula,
        variables: Vec<Variable>,
    ) -> Result<Self, EvaluationError> {
        debug!(
            "tabulating {} over {} variable(s)",
            formula,
            variables.len()
        );

        let rows = enumerate_assignments(&variables)
            .map(|values| {
                let assignment: Assignment =
                    variables.iter().copied().zip(values.iter().copied()).collect();
                let result = formula.evaluate(&assignment)?;
                trace!("{:?} => {}", assignment, result);
                Ok(Row { values, result })
            })
            .collect::<Result<Vec<_>, EvaluationError>>()?;

        Ok(TruthTable { variables, rows })
    }

    /// The table's variables, in column order
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The table's rows, all-true assignment first
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The result column, in row order
    pub fn results(&self) -> Vec<bool> {
        self.rows.iter().map(Row::result).collect()
    }

    /// Look up the result for an assignment
    ///
    /// Bindings for variables outside the table are ignored. Returns `None`
    /// if the assignment leaves one of the table's variables unbound.
    pub fn result_for(&self, assignment: &Assignment) -> Option<bool> {
        let values = self
            .variables
            .iter()
            .map(|var| assignment.get(var).copied())
            .collect::<Option<Vec<bool>>>()?;
        self.rows
            .iter()
            .find(|row| row.values == values)
            .map(Row::result)
    }

    /// Classify the result column, see [`classify`]
    pub fn classify(&self) -> Result<Classification, EvaluationError> {
        classify(&self.results())
    }
}

/// A classified truth table, the answer to one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableResult {
    table: TruthTable,
    classification: Classification,
}

impl TableResult {
    /// Classify a table and keep both together
    pub fn from_table(table: TruthTable) -> Result<Self, EvaluationError> {
        let classification = table.classify()?;
        Ok(TableResult {
            table,
            classification,
        })
    }

    /// The variables, in column order
    pub fn variables(&self) -> &[Variable] {
        self.table.variables()
    }

    /// The rows, all-true assignment first
    pub fn rows(&self) -> &[Row] {
        self.table.rows()
    }

    /// The underlying table
    pub fn table(&self) -> &TruthTable {
        &self.table
    }

    /// The classification of the result column
    pub fn classification(&self) -> Classification {
        self.classification
    }
}
