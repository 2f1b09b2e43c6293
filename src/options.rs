pub const DEFAULT_CAPACITY: usize = 4096;

#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Total budget for one logical entry: accumulated name + value bytes
    /// plus the incoming physical line must stay below this.
    pub capacity: usize,
    /// When false, malformed entries are skipped instead of aborting the
    /// stream; skipped line numbers are reported in the parse report.
    pub strict: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            strict: true,
        }
    }
}
