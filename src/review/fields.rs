//! Field vocabulary for review drafts: star ratings, fit assessments, and
//! body measurements.

use std::fmt;
use std::num::NonZeroU8;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Highest selectable star rating.
pub const MAX_STARS: u8 = 5;

/// A chosen star rating between 1 and [`MAX_STARS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StarRating(NonZeroU8);

impl StarRating {
    /// Creates a rating when `stars` lies within `1..=5`.
    ///
    /// Zero is the "unset" rating and is therefore not representable.
    #[must_use]
    pub fn new(stars: u8) -> Option<Self> {
        if stars > MAX_STARS {
            return None;
        }
        NonZeroU8::new(stars).map(Self)
    }

    /// Returns the number of stars.
    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} out of {MAX_STARS} stars", self.stars())
    }
}

/// A reviewer's judgement of how accurately a garment is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FitAssessment {
    /// The garment is smaller than its labelled size.
    RunsSmall,
    /// The garment matches its labelled size.
    TrueToSize,
    /// The garment is larger than its labelled size.
    RunsLarge,
}

impl FitAssessment {
    /// All options in display order.
    pub const ALL: [Self; 3] = [Self::RunsSmall, Self::TrueToSize, Self::RunsLarge];

    /// Human-readable option label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RunsSmall => "Runs Small",
            Self::TrueToSize => "True to Size",
            Self::RunsLarge => "Runs Large",
        }
    }

    /// Returns the option after `self`, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::RunsSmall => Self::TrueToSize,
            Self::TrueToSize => Self::RunsLarge,
            Self::RunsLarge => Self::RunsSmall,
        }
    }

    /// Returns the option before `self`, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::RunsSmall => Self::RunsLarge,
            Self::TrueToSize => Self::RunsSmall,
            Self::RunsLarge => Self::TrueToSize,
        }
    }
}

/// Body measurements collected alongside a review, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Measurement {
    /// Waist circumference.
    Waist,
    /// Bust circumference.
    Bust,
    /// Hip circumference.
    Hips,
}

impl Measurement {
    /// All measurements in form order.
    pub const ALL: [Self; 3] = [Self::Waist, Self::Bust, Self::Hips];

    /// Capitalised field label used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Waist => "Waist",
            Self::Bust => "Bust",
            Self::Hips => "Hips",
        }
    }

    /// Inclusive valid range in centimetres.
    #[must_use]
    pub const fn range(self) -> RangeInclusive<u16> {
        match self {
            Self::Waist => 50..=150,
            Self::Bust => 60..=150,
            Self::Hips => 60..=160,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
