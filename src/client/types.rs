//! Analysis Data Types
//!
//! Wire and in-memory types exchanged with the analysis backend.

use serde::{Deserialize, Serialize};

/// Backend-assigned record name (e.g. "1001")
pub type RecordId = String;

/// A location in the complex plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComplexPoint {
    pub re: f64,
    pub im: f64,
}

impl ComplexPoint {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Distance from the origin
    pub fn magnitude(&self) -> f64 {
        self.re.hypot(self.im)
    }
}

/// Zeros and poles of a filter's transfer function, replaced as a unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCoefficients {
    #[serde(default)]
    pub zeros: Vec<ComplexPoint>,
    #[serde(default)]
    pub poles: Vec<ComplexPoint>,
}

impl FilterCoefficients {
    pub fn new(zeros: Vec<ComplexPoint>, poles: Vec<ComplexPoint>) -> Self {
        Self { zeros, poles }
    }

    pub fn is_empty(&self) -> bool {
        self.zeros.is_empty() && self.poles.is_empty()
    }

    /// True when every pole lies strictly inside the unit circle
    pub fn is_stable(&self) -> bool {
        self.poles.iter().all(|p| p.magnitude() < 1.0)
    }
}

/// Response body of `POST /analysis/process-signal`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedSignal {
    pub original_data: Vec<f64>,
    pub filtered_data: Vec<f64>,
    #[serde(default)]
    pub zeros: Vec<ComplexPoint>,
    #[serde(default)]
    pub poles: Vec<ComplexPoint>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ProcessedSignal {
    /// Split into (original, filtered, coefficients)
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, FilterCoefficients) {
        (
            self.original_data,
            self.filtered_data,
            FilterCoefficients::new(self.zeros, self.poles),
        )
    }
}
