use crate::error::SystemResult;
use crate::io::input::NumericInputSource;
use crate::io::render::{RenderStyle, Renderer, Rendering};
use crate::matrix::matrix_2d::Matrix2D;
use crate::settings::Settings;
use crate::system::solution::{SolutionVector, Validation};
use crate::system::system::{LinearSystem, SquareSystem, Variant};

#[derive(Debug, Clone, PartialEq)]
pub struct System2 {
    base: SquareSystem,
}

impl Default for System2 {
    fn default() -> Self {
        Self::new()
    }
}

impl System2 {
    pub fn new() -> System2 {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> System2 {
        System2 {
            base: SquareSystem::new(2, settings),
        }
    }

    pub fn from_rows(rows: [[f64; 2]; 2], constants: [f64; 2]) -> System2 {
        let matrix = Matrix2D::from_rows(
            rows.iter().map(|row| row.to_vec()).collect(),
            constants.to_vec(),
        );
        System2 {
            base: SquareSystem::from_matrix(matrix, Settings::default()),
        }
    }

    /// Compact bracketed form.
    ///
    /// This is not `LinearSystem::render`: through a `&dyn LinearSystem` a
    /// `System2` still renders the standard equation form.
    pub fn render(&self) -> Rendering {
        let m = self.base.matrix();
        let s = self.base.settings();
        let lines = (0..2)
            .map(|i| {
                format!(
                    "[ {}  {} ] [ x{} ] = [ {} ]",
                    s.aligned(m.get(i, 0)),
                    s.aligned(m.get(i, 1)),
                    i + 1,
                    s.aligned(m.constant(i))
                )
            })
            .collect();

        Rendering {
            style: RenderStyle::Bracketed,
            lines,
        }
    }

    pub fn determinant(&self) -> f64 {
        let m = self.base.matrix();
        m.get(0, 0) * m.get(1, 1) - m.get(0, 1) * m.get(1, 0)
    }

    /// Cramer's rule. A near-zero determinant yields the empty vector.
    pub fn solve(&self, sink: &mut dyn Renderer) -> SolutionVector {
        let m = self.base.matrix();
        let s = self.base.settings();
        let det = self.determinant();
        log::debug!("2x2 determinant: {}", det);

        if det.abs() < s.epsilon {
            log::warn!("degenerate 2x2 system, determinant {:e}", det);
            sink.line("The determinant is zero: the system has no unique solution.");
            return SolutionVector::empty();
        }

        let (b0, b1) = (m.constant(0), m.constant(1));
        let det_x0 = b0 * m.get(1, 1) - m.get(0, 1) * b1;
        let det_x1 = m.get(0, 0) * b1 - b0 * m.get(1, 0);
        let x = vec![det_x0 / det, det_x1 / det];

        sink.line(&format!(
            "Solution: x1 = {}, x2 = {}",
            s.fixed(x[0]),
            s.fixed(x[1])
        ));
        SolutionVector::new(x)
    }
}

impl LinearSystem for System2 {
    fn variant(&self) -> Variant<'_> {
        Variant::Two(self)
    }

    fn size(&self) -> usize {
        self.base.size()
    }

    fn matrix(&self) -> &Matrix2D<f64> {
        self.base.matrix()
    }

    fn set_coefficients(
        &mut self,
        source: &mut dyn NumericInputSource,
        sink: &mut dyn Renderer,
    ) -> SystemResult<()> {
        sink.line("Setting up the 2x2 system:");
        self.base.set_coefficients(source, sink)
    }

    fn read_vector(
        &self,
        source: &mut dyn NumericInputSource,
        sink: &mut dyn Renderer,
    ) -> SystemResult<SolutionVector> {
        self.base.read_vector(source, sink)
    }

    fn render_standard(&self) -> Rendering {
        self.base.render_standard()
    }

    fn validate(&self, candidate: &SolutionVector, sink: &mut dyn Renderer) -> Validation {
        sink.line("Checking the solution of the 2x2 system:");
        self.base.check_vector(candidate, sink)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
