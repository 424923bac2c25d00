#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub seed: bool,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl StoreOptions {
    /// Defines whether a fresh store starts with the seed record
    pub fn set_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self { seed: true }
    }
}

#[cfg(test)]
impl StoreOptions {
    pub fn new_test() -> Self {
        StoreOptions::default().set_seed(false)
    }
}
