use crate::error::SystemResult;
use crate::io::input::NumericInputSource;
use crate::io::render::{RenderStyle, Renderer};
use crate::system::solution::{SolutionVector, Validation};
use crate::system::system::{LinearSystem, Variant};

/// How `render` was resolved for the demonstrated system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchRule {
    /// The declared type picked the implementation.
    Shadowed,
    /// The runtime type picked the implementation.
    Overridden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOrigin {
    Solved,
    /// The solver found no unique solution, validation was skipped.
    Degenerate,
    Input,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DispatchReport {
    /// Style produced by `render` through `&dyn LinearSystem`.
    pub base_render: RenderStyle,
    /// Style produced by `render` on the concrete type.
    pub concrete_render: RenderStyle,
    pub candidate: CandidateOrigin,
    pub validation: Option<Validation>,
}

impl DispatchReport {
    pub fn render_rule(&self) -> DispatchRule {
        if self.base_render == self.concrete_render {
            DispatchRule::Overridden
        } else {
            DispatchRule::Shadowed
        }
    }
}

/// Drives a system through its base capability only.
pub struct DispatchDemonstrator<'a> {
    input: &'a mut dyn NumericInputSource,
    sink: &'a mut dyn Renderer,
}

impl<'a> DispatchDemonstrator<'a> {
    pub fn new(input: &'a mut dyn NumericInputSource, sink: &'a mut dyn Renderer) -> Self {
        DispatchDemonstrator { input, sink }
    }

    pub fn demonstrate(&mut self, sys: &dyn LinearSystem) -> SystemResult<DispatchReport> {
        let rendering = sys.render();
        rendering.emit(self.sink);

        let concrete_render = match sys.variant() {
            Variant::Two(s) => s.render().style,
            Variant::Three(s) => s.render().style,
        };
        log::debug!(
            "{}x{} render: base {:?}, concrete {:?}",
            sys.size(),
            sys.size(),
            rendering.style,
            concrete_render
        );

        let (candidate, origin) = match sys.variant() {
            Variant::Two(s) => {
                let x = s.solve(self.sink);
                if x.is_empty() {
                    (None, CandidateOrigin::Degenerate)
                } else {
                    (Some(x), CandidateOrigin::Solved)
                }
            }
            Variant::Three(_) => (
                Some(sys.read_vector(self.input, self.sink)?),
                CandidateOrigin::Input,
            ),
        };

        let validation = candidate.map(|x: SolutionVector| sys.validate(&x, self.sink));

        Ok(DispatchReport {
            base_render: rendering.style,
            concrete_render,
            candidate: origin,
            validation,
        })
    }

    /// Configure the system from the input source, then demonstrate it.
    pub fn session(&mut self, sys: &mut dyn LinearSystem) -> SystemResult<DispatchReport> {
        sys.set_coefficients(self.input, self.sink)?;
        self.demonstrate(sys)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SystemError;
    use crate::io::input::ScriptedInput;
    use crate::system::system::system_for_size;
    use crate::system::system_2x2::System2;
    use crate::system::system_3x3::System3;

    #[test]
    fn test_demonstrate_system2() {
        let system = System2::from_rows([[1.0, 1.0], [1.0, -1.0]], [3.0, 1.0]);
        let mut input = ScriptedInput::default();
        let mut sink: Vec<String> = vec![];

        let report = DispatchDemonstrator::new(&mut input, &mut sink)
            .demonstrate(&system)
            .unwrap();

        assert_eq!(report.base_render, RenderStyle::Standard);
        assert_eq!(report.concrete_render, RenderStyle::Bracketed);
        assert_eq!(report.render_rule(), DispatchRule::Shadowed);
        assert_eq!(report.candidate, CandidateOrigin::Solved);
        assert!(report.validation.unwrap().is_satisfied());
        assert!(input.prompts.is_empty());

        assert_eq!(
            sink,
            vec![
                "1.0000*x1 + 1.0000*x2 = 3.0000",
                "1.0000*x1 + -1.0000*x2 = 1.0000",
                "Solution: x1 = 2.0000, x2 = 1.0000",
                "Checking the solution of the 2x2 system:",
                "Equation 1: 3.0000 ≈ 3.0000 (residual 0.00e0) matches",
                "Equation 2: 1.0000 ≈ 1.0000 (residual 0.00e0) matches",
                "The vector satisfies the system.",
            ]
        );
    }

    #[test]
    fn test_demonstrate_degenerate() {
        let system = System2::from_rows([[1.0, 2.0], [2.0, 4.0]], [3.0, 6.0]);
        let mut input = ScriptedInput::new([1.0, 1.0]);
        let mut sink: Vec<String> = vec![];

        let report = DispatchDemonstrator::new(&mut input, &mut sink)
            .demonstrate(&system)
            .unwrap();

        assert_eq!(report.candidate, CandidateOrigin::Degenerate);
        assert_eq!(report.validation, None);
        assert_eq!(input.remaining(), 2);
        assert!(sink.iter().all(|l| !l.starts_with("Checking")));
    }

    #[test]
    fn test_demonstrate_system3() {
        let system = System3::from_rows(
            [[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 4.0]],
            [1.0, 2.0, 4.0],
        );
        let mut input = ScriptedInput::new([1.0, 1.0, 0.5]);
        let mut sink: Vec<String> = vec![];

        let report = DispatchDemonstrator::new(&mut input, &mut sink)
            .demonstrate(&system)
            .unwrap();

        assert_eq!(report.base_render, RenderStyle::Augmented);
        assert_eq!(report.render_rule(), DispatchRule::Overridden);
        assert_eq!(report.candidate, CandidateOrigin::Input);
        let validation = report.validation.unwrap();
        assert!(!validation.is_satisfied());
        assert_eq!(
            validation.checks.iter().map(|c| c.matches).collect::<Vec<_>>(),
            vec![true, true, false]
        );
        assert_eq!(sink[..3], system.render().lines[..]);
        assert_eq!(sink[3], "Enter the components of a vector of size 3:");
        assert_eq!(sink[4], "Checking the solution of the 3x3 system:");
    }

    #[test]
    fn test_demonstrate_aborted_input() {
        let system = System3::new();
        let mut input = ScriptedInput::new([1.0]);
        let mut sink: Vec<String> = vec![];

        let result = DispatchDemonstrator::new(&mut input, &mut sink).demonstrate(&system);
        assert_eq!(
            result,
            Err(SystemError::InputAborted {
                prompt: "x2 = ".into()
            })
        );
    }

    #[test]
    fn test_session() {
        let mut input = ScriptedInput::new([
            1.0, 1.0, 3.0, 1.0, -1.0, 1.0, // 2x2
            1.0, 1.0, 1.0, 6.0, 0.0, 1.0, 1.0, 5.0, 0.0, 0.0, 1.0, 3.0, // 3x3
            1.0, 2.0, 3.0, // candidate
        ]);
        let mut sink: Vec<String> = vec![];
        let mut demonstrator = DispatchDemonstrator::new(&mut input, &mut sink);

        let mut sys2 = system_for_size(2).unwrap();
        let report = demonstrator.session(sys2.as_mut()).unwrap();
        assert_eq!(report.render_rule(), DispatchRule::Shadowed);
        assert_eq!(report.candidate, CandidateOrigin::Solved);

        let mut sys3 = system_for_size(3).unwrap();
        let report = demonstrator.session(sys3.as_mut()).unwrap();
        assert_eq!(report.render_rule(), DispatchRule::Overridden);
        assert!(report.validation.unwrap().is_satisfied());

        drop(demonstrator);
        assert_eq!(input.remaining(), 0);
        assert_eq!(sink[0], "Setting up the 2x2 system:");
        assert_eq!(sink[1], "Enter the coefficients of the 2x2 system:");
        let at = sink.iter().position(|l| l == "Setting up the 3x3 system:").unwrap();
        assert_eq!(sink[at + 1], "Enter the coefficients of the 3x3 system:");
    }
}
