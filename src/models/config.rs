use crate::filters::SearchExpr;

/// Default for both the look-back and the window length
pub const DEFAULT_DURATION: &str = "5y";

/// Immutable search parameters shared by every file in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub expression: SearchExpr,
    /// How far back from now the window starts (e.g. `6m`)
    pub from: String,
    /// How long the window lasts, counted forward from its start
    pub window: String,
    /// Print every line of a record on its first match
    pub multiline: bool,
    /// Suppress per-file headers
    pub terse: bool,
    /// Lines of context around each match, 0 to disable
    pub context: usize,
}

impl SearchConfig {
    pub fn new(expression: &str) -> Self {
        Self {
            expression: SearchExpr::parse(expression),
            from: DEFAULT_DURATION.to_string(),
            window: DEFAULT_DURATION.to_string(),
            multiline: false,
            terse: false,
            context: 0,
        }
    }

    pub fn with_from(mut self, from: &str) -> Self {
        self.from = from.to_string();
        self
    }

    pub fn with_window(mut self, window: &str) -> Self {
        self.window = window.to_string();
        self
    }

    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    pub fn with_terse(mut self, terse: bool) -> Self {
        self.terse = terse;
        self
    }

    pub fn with_context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }
}
