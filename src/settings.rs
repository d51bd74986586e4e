/// Residual tolerance used by validation and by the 2x2 determinant test.
pub const EPSILON: f64 = 1e-6;

/// Numeric and layout settings carried by every system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub epsilon: f64,
    /// Decimal digits shown for every number.
    pub precision: usize,
    /// Right-alignment width of the matrix renderings.
    pub column_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            epsilon: EPSILON,
            precision: 4,
            column_width: 10,
        }
    }
}

impl Settings {
    pub fn fixed(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }

    pub fn aligned(&self, value: f64) -> String {
        format!("{:>width$.prec$}", value, width = self.column_width, prec = self.precision)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
