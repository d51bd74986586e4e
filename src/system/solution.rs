/// Candidate unknowns for a system.
///
/// The empty vector is the 2x2 solver's "no unique solution" answer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolutionVector {
    pub components: Vec<f64>,
}

impl SolutionVector {
    pub fn new(components: Vec<f64>) -> Self {
        SolutionVector { components }
    }

    pub fn empty() -> Self {
        SolutionVector { components: vec![] }
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }
}

impl From<Vec<f64>> for SolutionVector {
    fn from(components: Vec<f64>) -> Self {
        SolutionVector { components }
    }
}

/// One equation's residual check. `index` is 0-based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquationCheck {
    pub index: usize,
    pub lhs: f64,
    pub rhs: f64,
    pub residual: f64,
    pub matches: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Satisfied,
    Unsatisfied,
    SizeMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub outcome: ValidationOutcome,
    /// Empty on a size mismatch.
    pub checks: Vec<EquationCheck>,
}

impl Validation {
    pub fn is_satisfied(&self) -> bool {
        self.outcome == ValidationOutcome::Satisfied
    }
}
