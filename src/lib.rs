pub mod io {
    pub mod input;
    pub mod render;
}
pub mod matrix {
    pub mod matrix_2d;
}
pub mod system {
    pub mod solution;
    pub mod system;
    pub mod system_2x2;
    pub mod system_3x3;
}

pub mod dispatch;
pub mod error;
pub mod settings;

#[cfg(feature = "python")]
pub mod python;

pub use dispatch::{CandidateOrigin, DispatchDemonstrator, DispatchReport, DispatchRule};
pub use error::{SystemError, SystemResult};
pub use io::input::{Aborted, LineInput, NumericInputSource, ScriptedInput};
pub use io::render::{LogRenderer, RenderStyle, Renderer, Rendering, WriteRenderer};
pub use matrix::matrix_2d::Matrix2D;
pub use settings::{Settings, EPSILON};
pub use system::solution::{EquationCheck, SolutionVector, Validation, ValidationOutcome};
pub use system::system::{system_for_size, LinearSystem, SquareSystem, Variant};
pub use system::system_2x2::System2;
pub use system::system_3x3::System3;
