use serde::Serialize;

/// Result of one request: body length on success, or a failure of any cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success { bytes: u64 },
    Failure,
}

impl Outcome {
    #[must_use]
    pub const fn success(bytes: u64) -> Self {
        Self::Success { bytes }
    }

    #[must_use]
    pub const fn bytes(self) -> Option<u64> {
        match self {
            Self::Success { bytes } => Some(bytes),
            Self::Failure => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Warmup,
    Measurement,
}

impl Phase {
    /// Row label used in text reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warmup => "Warmup",
            Self::Measurement => "Measure",
        }
    }
}
