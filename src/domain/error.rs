use thiserror::Error;

/// Everything the simulation core can refuse to do.
///
/// Steady-state ticks never fail; these surface from construction and from
/// configuration updates between ticks.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("{name} must be {expected}, got {value}")]
    InvalidParameter {
        name: &'static str,
        expected: &'static str,
        value: f64,
    },

    #[error("field dimensions must be non-zero, got {width}x{height}")]
    EmptyField { width: u32, height: u32 },

    #[error("agent count must be at least 1")]
    NoAgents,

    #[error("species palette must hold 1..={max} colours, got {count}")]
    SpeciesCount { count: usize, max: usize },

    #[error("species {index} out of range for a palette of {count}")]
    UnknownSpecies { index: usize, count: usize },

    #[error("agent {index} out of range for a store of {count}")]
    UnknownAgent { index: usize, count: usize },

    #[error("{what} is fixed after initialization ({current} -> {requested}); re-initialize the simulation instead")]
    Frozen {
        what: &'static str,
        current: u64,
        requested: u64,
    },

    #[error("failed to allocate {what} ({bytes} bytes)")]
    Allocation { what: &'static str, bytes: usize },

    #[error("invalid config json: {0}")]
    Json(String),
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let e = SimError::InvalidParameter { name: "reduceAmount", expected: "in [0, 1]", value: -0.5 };
        assert_eq!(e.to_string(), "reduceAmount must be in [0, 1], got -0.5");

        let e = SimError::Frozen { what: "agent count", current: 10, requested: 20 };
        assert!(e.to_string().contains("re-initialize"));
    }
}
