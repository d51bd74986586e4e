use crate::error::{SystemError, SystemResult};
use crate::io::input::NumericInputSource;
use crate::io::render::{RenderStyle, Renderer, Rendering};
use crate::matrix::matrix_2d::Matrix2D;
use crate::settings::Settings;
use crate::system::solution::{EquationCheck, SolutionVector, Validation, ValidationOutcome};
use crate::system::system_2x2::System2;
use crate::system::system_3x3::System3;
use itertools::Itertools;

/// Concrete identity of a system seen through `&dyn LinearSystem`.
#[derive(Debug, Clone, Copy)]
pub enum Variant<'a> {
    Two(&'a System2),
    Three(&'a System3),
}

/// Shared capability of the sized systems.
///
/// `set_coefficients`, `render` and `validate` are resolved on the runtime
/// type. Only `render` has a default, every variant provides its own
/// `set_coefficients` and `validate`. Anything a variant defines as an
/// inherent method instead (such as `System2::render`) is only reachable
/// through the concrete type.
///
/// The coefficients are only written through `set_coefficients`, so the size
/// chosen at construction stays:
///
/// ```compile_fail
/// use linsys_dispatch::{LinearSystem, Matrix2D, System2};
///
/// let mut system = System2::new();
/// let base: &mut dyn LinearSystem = &mut system;
/// base.base_mut().matrix = Matrix2D::new(1);
/// ```
pub trait LinearSystem {
    fn variant(&self) -> Variant<'_>;
    fn size(&self) -> usize;
    fn matrix(&self) -> &Matrix2D<f64>;

    fn set_coefficients(
        &mut self,
        source: &mut dyn NumericInputSource,
        sink: &mut dyn Renderer,
    ) -> SystemResult<()>;

    fn read_vector(
        &self,
        source: &mut dyn NumericInputSource,
        sink: &mut dyn Renderer,
    ) -> SystemResult<SolutionVector>;

    fn render_standard(&self) -> Rendering;

    fn render(&self) -> Rendering {
        self.render_standard()
    }

    fn validate(&self, candidate: &SolutionVector, sink: &mut dyn Renderer) -> Validation;
}

/// State and default behavior common to every size.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareSystem {
    matrix: Matrix2D<f64>,
    settings: Settings,
}

impl SquareSystem {
    pub fn new(size: usize, settings: Settings) -> SquareSystem {
        SquareSystem {
            matrix: Matrix2D::new(size),
            settings,
        }
    }

    pub fn from_matrix(matrix: Matrix2D<f64>, settings: Settings) -> SquareSystem {
        SquareSystem { matrix, settings }
    }

    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    pub fn matrix(&self) -> &Matrix2D<f64> {
        &self.matrix
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_coefficients(
        &mut self,
        source: &mut dyn NumericInputSource,
        sink: &mut dyn Renderer,
    ) -> SystemResult<()> {
        let n = self.size();
        sink.line(&format!("Enter the coefficients of the {}x{} system:", n, n));
        for i in 0..n {
            for j in 0..n {
                let value = request(source, format!("a[{},{}] = ", i + 1, j + 1))?;
                self.matrix.set(i, j, value);
            }
            let value = request(source, format!("b[{}] = ", i + 1))?;
            self.matrix.set_constant(i, value);
        }
        log::debug!("{}x{} coefficients set: {:?}", n, n, self.matrix);
        Ok(())
    }

    pub fn read_vector(
        &self,
        source: &mut dyn NumericInputSource,
        sink: &mut dyn Renderer,
    ) -> SystemResult<SolutionVector> {
        sink.line(&format!(
            "Enter the components of a vector of size {}:",
            self.size()
        ));
        let components = (0..self.size())
            .map(|i| request(source, format!("x{} = ", i + 1)))
            .collect::<SystemResult<Vec<f64>>>()?;
        log::debug!("candidate vector read: {:?}", components);
        Ok(SolutionVector::new(components))
    }

    pub fn render_standard(&self) -> Rendering {
        let s = &self.settings;
        let lines = self
            .matrix
            .rows()
            .zip(self.matrix.constants().iter())
            .map(|(row, b)| {
                let lhs = row
                    .iter()
                    .enumerate()
                    .map(|(j, a)| format!("{}*x{}", s.fixed(*a), j + 1))
                    .join(" + ");
                format!("{} = {}", lhs, s.fixed(*b))
            })
            .collect();

        Rendering {
            style: RenderStyle::Standard,
            lines,
        }
    }

    /// Residual check shared by every variant's `validate`.
    pub fn check_vector(&self, candidate: &SolutionVector, sink: &mut dyn Renderer) -> Validation {
        let n = self.size();
        if candidate.len() != n {
            log::warn!("candidate of length {} for a {}x{} system", candidate.len(), n, n);
            sink.line(&format!(
                "Vector length {} does not match system size {}.",
                candidate.len(),
                n
            ));
            return Validation {
                outcome: ValidationOutcome::SizeMismatch {
                    expected: n,
                    actual: candidate.len(),
                },
                checks: vec![],
            };
        }

        let s = &self.settings;
        let checks: Vec<EquationCheck> = (0..n)
            .map(|i| {
                let lhs = self.matrix.row_dot(i, &candidate.components);
                let rhs = self.matrix.constant(i);
                let residual = (lhs - rhs).abs();
                EquationCheck {
                    index: i,
                    lhs,
                    rhs,
                    residual,
                    matches: residual <= s.epsilon,
                }
            })
            .collect();

        for check in &checks {
            log::debug!("equation {}: residual {:e}", check.index + 1, check.residual);
            sink.line(&format!(
                "Equation {}: {} ≈ {} (residual {:.2e}) {}",
                check.index + 1,
                s.fixed(check.lhs),
                s.fixed(check.rhs),
                check.residual,
                if check.matches { "matches" } else { "differs" }
            ));
        }

        let satisfied = checks.iter().all(|c| c.matches);
        sink.line(if satisfied {
            "The vector satisfies the system."
        } else {
            "The vector does not satisfy the system."
        });

        Validation {
            outcome: if satisfied {
                ValidationOutcome::Satisfied
            } else {
                ValidationOutcome::Unsatisfied
            },
            checks,
        }
    }
}

fn request(source: &mut dyn NumericInputSource, prompt: String) -> SystemResult<f64> {
    source
        .next_float(&prompt)
        .map_err(|_| SystemError::InputAborted { prompt })
}

pub fn system_for_size(size: usize) -> SystemResult<Box<dyn LinearSystem>> {
    match size {
        2 => Ok(Box::new(System2::new())),
        3 => Ok(Box::new(System3::new())),
        n => Err(SystemError::UnsupportedSize(n)),
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
