/// Construction-time options of an operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MultiplyConstConfig {
    /// Bind the vectorized kernel when the sample type has one.
    ///
    /// When `false` every type runs the scalar kernel and no output multiple
    /// is exported.
    pub accelerate: bool,
}

impl Default for MultiplyConstConfig {
    fn default() -> Self {
        Self { accelerate: true }
    }
}

impl MultiplyConstConfig {
    pub fn with_accelerate(mut self, accelerate: bool) -> Self {
        self.accelerate = accelerate;
        self
    }
}
