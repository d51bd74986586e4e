use crate::error::SystemResult;
use crate::io::input::NumericInputSource;
use crate::io::render::{RenderStyle, Renderer, Rendering};
use crate::matrix::matrix_2d::Matrix2D;
use crate::settings::Settings;
use crate::system::solution::{SolutionVector, Validation};
use crate::system::system::{LinearSystem, SquareSystem, Variant};
use itertools::Itertools;

/// 3x3 system. There is no solver: candidates always come from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct System3 {
    base: SquareSystem,
}

impl Default for System3 {
    fn default() -> Self {
        Self::new()
    }
}

impl System3 {
    pub fn new() -> System3 {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> System3 {
        System3 {
            base: SquareSystem::new(3, settings),
        }
    }

    pub fn from_rows(rows: [[f64; 3]; 3], constants: [f64; 3]) -> System3 {
        let matrix = Matrix2D::from_rows(
            rows.iter().map(|row| row.to_vec()).collect(),
            constants.to_vec(),
        );
        System3 {
            base: SquareSystem::from_matrix(matrix, Settings::default()),
        }
    }
}

impl LinearSystem for System3 {
    fn variant(&self) -> Variant<'_> {
        Variant::Three(self)
    }

    // augmented matrix form, whatever the reference type
    fn render(&self) -> Rendering {
        let s = self.base.settings();
        let lines = self
            .base
            .matrix()
            .rows()
            .zip(self.base.matrix().constants().iter())
            .map(|(row, b)| {
                format!(
                    "| {} | {} |",
                    row.iter().map(|a| s.aligned(*a)).join(" "),
                    s.aligned(*b)
                )
            })
            .collect();

        Rendering {
            style: RenderStyle::Augmented,
            lines,
        }
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
        sink.line("Setting up the 3x3 system:");
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
        sink.line("Checking the solution of the 3x3 system:");
        self.base.check_vector(candidate, sink)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
