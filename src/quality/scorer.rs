//! Weighted scoring over the five quality dimensions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{HardocError, Result};
use crate::quality::metrics::clamp;

/// Accepted range for the sum of a replacement weight map.
const WEIGHT_SUM_TOLERANCE: (f32, f32) = (0.99, 1.01);

/// The closed set of quality dimensions.
///
/// Weight maps and score maps are validated against this set; there is no
/// dynamic field access by string name anywhere in the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    PartNumber,
    Manufacturer,
    Datasheet,
    Alternatives,
    Cost,
}

impl Dimension {
    /// All dimensions, in canonical order.
    pub const ALL: [Self; 5] = [
        Self::PartNumber,
        Self::Manufacturer,
        Self::Datasheet,
        Self::Alternatives,
        Self::Cost,
    ];

    /// Stable name used in weight maps and reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PartNumber => "part_number",
            Self::Manufacturer => "manufacturer",
            Self::Datasheet => "datasheet",
            Self::Alternatives => "alternatives",
            Self::Cost => "cost",
        }
    }

    /// Parse a dimension from its stable name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Minimum score this dimension must reach for a BOM to pass the
    /// minimum-requirements check.
    #[must_use]
    pub const fn minimum_floor(self) -> f32 {
        match self {
            Self::PartNumber => 0.6,
            Self::Manufacturer => 0.5,
            Self::Datasheet => 0.7,
            Self::Alternatives => 0.3,
            Self::Cost => 0.4,
        }
    }
}

/// Per-dimension weights, summing to 1.0 within tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub part_number: f32,
    pub manufacturer: f32,
    pub datasheet: f32,
    pub alternatives: f32,
    pub cost: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            part_number: 0.30,
            manufacturer: 0.20,
            datasheet: 0.20,
            alternatives: 0.15,
            cost: 0.15,
        }
    }
}

impl ScoreWeights {
    /// Weight assigned to one dimension.
    #[must_use]
    pub const fn get(&self, dimension: Dimension) -> f32 {
        match dimension {
            Dimension::PartNumber => self.part_number,
            Dimension::Manufacturer => self.manufacturer,
            Dimension::Datasheet => self.datasheet,
            Dimension::Alternatives => self.alternatives,
            Dimension::Cost => self.cost,
        }
    }

    /// Sum of all five weights.
    #[must_use]
    pub fn total(&self) -> f32 {
        Dimension::ALL.into_iter().map(|d| self.get(d)).sum()
    }

    /// Whether the total falls in the accepted tolerance band.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let total = self.total();
        (WEIGHT_SUM_TOLERANCE.0..=WEIGHT_SUM_TOLERANCE.1).contains(&total)
    }
}

/// Quality band for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Excellent,
    Good,
    Fair,
    Poor,
    Inadequate,
}

impl ScoreCategory {
    /// Band for a score in [0, 1]. Bands partition the range at
    /// 0.25 / 0.50 / 0.75 / 0.90.
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        if score >= 0.90 {
            Self::Excellent
        } else if score >= 0.75 {
            Self::Good
        } else if score >= 0.50 {
            Self::Fair
        } else if score >= 0.25 {
            Self::Poor
        } else {
            Self::Inadequate
        }
    }

    /// Lowercase label used in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::Inadequate => "inadequate",
        }
    }
}

/// Priority tier for an improvement item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Tier for a potential gain: high above 0.15, medium above 0.05.
    #[must_use]
    pub fn from_gain(gain: f32) -> Self {
        if gain > 0.15 {
            Self::High
        } else if gain > 0.05 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// One entry in the improvement ranking. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementItem {
    pub dimension: Dimension,
    pub current_score: f32,
    pub potential_gain: f32,
    pub priority: Priority,
}

/// Aggregates dimension scores into overall scores, categories,
/// minimum-requirement checks and improvement rankings.
///
/// The engine owns its weights. Shared use across threads is read-only;
/// callers wanting to mutate weights mid-run must serialize access
/// themselves.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    weights: ScoreWeights,
}

impl ScoringEngine {
    /// Engine with the default weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with caller-supplied weights, validated against the sum
    /// tolerance.
    pub fn with_weights(weights: ScoreWeights) -> Result<Self> {
        if !weights.is_valid() {
            return Err(HardocError::invalid_weights(format!(
                "weights sum to {:.3}, expected 1.0 ±0.01",
                weights.total()
            )));
        }
        Ok(Self { weights })
    }

    /// Current weights.
    #[must_use]
    pub const fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Weighted mean of the supplied dimension scores, renormalized over
    /// the weights of the dimensions actually present, rounded to two
    /// decimals. Returns 0.0 for an empty input.
    #[must_use]
    pub fn overall_score(&self, scores: &[(Dimension, f32)]) -> f32 {
        let mut weighted = 0.0f32;
        let mut weight_total = 0.0f32;
        for &(dimension, score) in scores {
            let weight = self.weights.get(dimension);
            weighted += clamp(score) * weight;
            weight_total += weight;
        }
        if weight_total <= 0.0 {
            return 0.0;
        }
        clamp(round2(weighted / weight_total))
    }

    /// Whether every supplied dimension meets its fixed minimum floor.
    /// Dimensions absent from `scores` are treated as 0.0 and fail.
    #[must_use]
    pub fn meets_minimum_requirements(&self, scores: &[(Dimension, f32)]) -> bool {
        Dimension::ALL.into_iter().all(|dimension| {
            let score = scores
                .iter()
                .find(|(d, _)| *d == dimension)
                .map_or(0.0, |&(_, s)| s);
            score >= dimension.minimum_floor()
        })
    }

    /// Rank dimensions by how much overall score is recoverable from each:
    /// gain = (1 - score) x weight. Sorted descending by gain, stable on
    /// ties.
    #[must_use]
    pub fn improvement_potential(&self, scores: &[(Dimension, f32)]) -> Vec<ImprovementItem> {
        let mut items: Vec<ImprovementItem> = scores
            .iter()
            .map(|&(dimension, score)| {
                let score = clamp(score);
                let gain = (1.0 - score) * self.weights.get(dimension);
                ImprovementItem {
                    dimension,
                    current_score: score,
                    potential_gain: gain,
                    priority: Priority::from_gain(gain),
                }
            })
            .collect();
        items.sort_by(|a, b| {
            b.potential_gain
                .partial_cmp(&a.potential_gain)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        items
    }

    /// Replace all five weights from a name-keyed map.
    ///
    /// Rejects maps containing an unrecognized key, missing a dimension,
    /// or summing outside [0.99, 1.01]; on failure the current weights are
    /// untouched.
    pub fn adjust_weights(&mut self, map: &HashMap<String, f32>) -> Result<()> {
        for key in map.keys() {
            if Dimension::from_name(key).is_none() {
                return Err(HardocError::invalid_weights(format!(
                    "unrecognized dimension {key:?}"
                )));
            }
        }
        let mut replacement = self.weights;
        for dimension in Dimension::ALL {
            let Some(&value) = map.get(dimension.name()) else {
                return Err(HardocError::invalid_weights(format!(
                    "missing dimension {:?}",
                    dimension.name()
                )));
            };
            match dimension {
                Dimension::PartNumber => replacement.part_number = value,
                Dimension::Manufacturer => replacement.manufacturer = value,
                Dimension::Datasheet => replacement.datasheet = value,
                Dimension::Alternatives => replacement.alternatives = value,
                Dimension::Cost => replacement.cost = value,
            }
        }
        if !replacement.is_valid() {
            return Err(HardocError::invalid_weights(format!(
                "weights sum to {:.3}, expected 1.0 ±0.01",
                replacement.total()
            )));
        }
        self.weights = replacement;
        Ok(())
    }
}

/// Round to two decimal places.
fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
