//! Hot/cold proximity labels.

use std::fmt;

use crate::distance::Distance;

/// How close a seeker is to the hidden cell, from found to cold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeedbackLabel {
    Found,
    Burning,
    Hot,
    Warm,
    Cool,
    Cold,
}

/// Inclusive upper bound of each bucket, checked in ascending order; the
/// first bound not below the distance wins. Anything beyond the last bound,
/// and every unreachable distance, is [`FeedbackLabel::Cold`].
pub const THRESHOLDS: [(u32, FeedbackLabel); 5] = [
    (0, FeedbackLabel::Found),
    (2, FeedbackLabel::Burning),
    (4, FeedbackLabel::Hot),
    (6, FeedbackLabel::Warm),
    (10, FeedbackLabel::Cool),
];

/// Map a distance to its feedback label.
pub fn feedback_label(distance: Distance) -> FeedbackLabel {
    let Distance::Steps(n) = distance else {
        return FeedbackLabel::Cold;
    };
    THRESHOLDS
        .iter()
        .find(|(max, _)| n <= *max)
        .map_or(FeedbackLabel::Cold, |&(_, label)| label)
}

impl From<Distance> for FeedbackLabel {
    fn from(d: Distance) -> Self {
        feedback_label(d)
    }
}

impl FeedbackLabel {
    /// Every label, nearest first.
    pub const ALL: [FeedbackLabel; 6] = [
        FeedbackLabel::Found,
        FeedbackLabel::Burning,
        FeedbackLabel::Hot,
        FeedbackLabel::Warm,
        FeedbackLabel::Cool,
        FeedbackLabel::Cold,
    ];

    /// The inclusive range of step counts that produce this label. The upper
    /// bound is `None` for [`Cold`](Self::Cold), which also covers
    /// unreachable distances.
    pub fn distance_bounds(self) -> (u32, Option<u32>) {
        let mut lo = 0;
        for (max, label) in THRESHOLDS {
            if label == self {
                return (lo, Some(max));
            }
            lo = max + 1;
        }
        (lo, None)
    }

    /// Whether a seeker at distance `d` would be told this label.
    pub fn admits(self, d: Distance) -> bool {
        feedback_label(d) == self
    }

    /// Short message shown to a human seeker.
    pub fn message(self) -> &'static str {
        match self {
            FeedbackLabel::Found => "found!",
            FeedbackLabel::Burning => "burning!",
            FeedbackLabel::Hot => "hot",
            FeedbackLabel::Warm => "warm",
            FeedbackLabel::Cool => "cool",
            FeedbackLabel::Cold => "cold",
        }
    }
}

impl fmt::Display for FeedbackLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        let cases = [
            (0, FeedbackLabel::Found),
            (1, FeedbackLabel::Burning),
            (2, FeedbackLabel::Burning),
            (3, FeedbackLabel::Hot),
            (4, FeedbackLabel::Hot),
            (5, FeedbackLabel::Warm),
            (6, FeedbackLabel::Warm),
            (7, FeedbackLabel::Cool),
            (10, FeedbackLabel::Cool),
            (11, FeedbackLabel::Cold),
            (u32::MAX, FeedbackLabel::Cold),
        ];
        for (n, want) in cases {
            assert_eq!(feedback_label(Distance::Steps(n)), want, "distance {n}");
        }
        assert_eq!(feedback_label(Distance::Unreachable), FeedbackLabel::Cold);
    }

    #[test]
    fn labels_never_get_closer_as_distance_grows() {
        let mut prev = FeedbackLabel::Found;
        for n in 0..30 {
            let l = FeedbackLabel::from(Distance::Steps(n));
            assert!(l >= prev);
            prev = l;
        }
    }

    #[test]
    fn bounds_agree_with_labels() {
        assert_eq!(FeedbackLabel::Found.distance_bounds(), (0, Some(0)));
        assert_eq!(FeedbackLabel::Burning.distance_bounds(), (1, Some(2)));
        assert_eq!(FeedbackLabel::Cool.distance_bounds(), (7, Some(10)));
        assert_eq!(FeedbackLabel::Cold.distance_bounds(), (11, None));
        for label in FeedbackLabel::ALL {
            let (lo, hi) = label.distance_bounds();
            assert!(label.admits(Distance::Steps(lo)));
            if let Some(hi) = hi {
                assert!(label.admits(Distance::Steps(hi)));
                assert!(!label.admits(Distance::Steps(hi + 1)));
            }
        }
        assert!(FeedbackLabel::Cold.admits(Distance::Unreachable));
    }
}
