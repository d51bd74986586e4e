use crate::io::input::ScriptedInput;
use crate::io::render::LogRenderer;
use crate::system::system::LinearSystem;
use crate::system::system_2x2::System2;
use crate::system::system_3x3::System3;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

#[pyclass(name = "System2")]
#[derive(Debug, Clone, Default)]
pub struct PySystem2 {
    pub inner: System2,
}

#[pyclass(name = "System3")]
#[derive(Debug, Clone, Default)]
pub struct PySystem3 {
    pub inner: System3,
}

// Methods shared by every system class; extra class-specific methods are
// spliced into the same block (a class gets a single #[pymethods]).
macro_rules! impl_system_pymethods {
    ($type:ty, $inner:ty, { $($extra:tt)* }) => {
        #[pymethods]
        impl $type {
            #[new]
            pub fn new() -> Self {
                Self {
                    inner: <$inner>::new(),
                }
            }

            #[getter]
            pub fn size(&self) -> usize {
                LinearSystem::size(&self.inner)
            }

            /// Row by row: the coefficients of a row followed by its constant.
            pub fn set_coefficients(&mut self, values: Vec<f64>) -> PyResult<()> {
                let mut source = ScriptedInput::new(values);
                if let Err(error) = self.inner.set_coefficients(&mut source, &mut LogRenderer) {
                    return Err(PyValueError::new_err(error.to_string()));
                }
                if source.remaining() > 0 {
                    return Err(PyValueError::new_err(format!(
                        "{} values left over",
                        source.remaining()
                    )));
                }
                Ok(())
            }

            pub fn render(&self) -> Vec<String> {
                self.inner.render().lines
            }

            pub fn render_base(&self) -> Vec<String> {
                let base: &dyn LinearSystem = &self.inner;
                base.render().lines
            }

            pub fn validate(&self, components: Vec<f64>) -> (bool, Vec<String>) {
                let mut lines: Vec<String> = vec![];
                let validation = self.inner.validate(&components.into(), &mut lines);
                (validation.is_satisfied(), lines)
            }

            $($extra)*
        }
    };
}

impl_system_pymethods!(PySystem2, System2, {
    /// `None` when the system has no unique solution.
    pub fn solve(&self) -> Option<Vec<f64>> {
        let x = self.inner.solve(&mut LogRenderer);
        if x.is_empty() {
            None
        } else {
            Some(x.components)
        }
    }
});

impl_system_pymethods!(PySystem3, System3, {});

/// A Python module implemented in Rust.
#[pymodule]
fn linsys_dispatch(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySystem2>()?;
    m.add_class::<PySystem3>()?;
    Ok(())
}
