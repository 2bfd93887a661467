//! Search configuration for the path finder.

/// Fixed layover allowance added to every one-stop path, in hours.
pub const CONNECTION_BUFFER_HOURS: f64 = 2.0;

/// How to order paths whose total durations are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Keep discovery order (direct path first, then one-stop paths in
    /// catalog order).
    #[default]
    None,
    /// Cheaper paths first.
    Price,
}

/// Configuration parameters for path search.
///
/// The defaults reproduce the basic search exactly. The other settings are
/// opt-in variations.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Layover allowance added to one-stop paths (hours).
    pub connection_buffer_hours: f64,

    /// Secondary ordering for equal durations.
    pub tie_break: TieBreak,

    /// Maximum number of paths to return. `None` returns all of them.
    pub max_results: Option<usize>,

    /// Drop one-stop paths whose connection is the origin or the
    /// destination itself.
    pub exclude_origin_revisits: bool,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        connection_buffer_hours: f64,
        tie_break: TieBreak,
        max_results: Option<usize>,
        exclude_origin_revisits: bool,
    ) -> Self {
        Self {
            connection_buffer_hours,
            tie_break,
            max_results,
            exclude_origin_revisits,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            connection_buffer_hours: CONNECTION_BUFFER_HOURS,
            tie_break: TieBreak::None,
            max_results: None,
            exclude_origin_revisits: false,
        }
    }
}
