//! Round phases and the transitions allowed between them.

use crate::error::GameError;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The seeker with this index stepped onto the hidden cell.
    Found { seeker: usize },
    /// The step budget ran out.
    HiderEscaped,
}

/// Where a session is in its round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Menu,
    Hiding,
    Seeking,
    GameOver(Outcome),
}

/// A [`Phase`] without its payload, used in the transition table and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhaseTag {
    Menu,
    Hiding,
    Seeking,
    GameOver,
}

/// Every permitted (from, to) pair.
pub const TRANSITIONS: [(PhaseTag, PhaseTag); 5] = [
    (PhaseTag::Menu, PhaseTag::Hiding),
    (PhaseTag::Menu, PhaseTag::Seeking),
    (PhaseTag::Hiding, PhaseTag::Seeking),
    (PhaseTag::Seeking, PhaseTag::GameOver),
    (PhaseTag::GameOver, PhaseTag::Menu),
];

impl Phase {
    pub fn tag(self) -> PhaseTag {
        match self {
            Phase::Menu => PhaseTag::Menu,
            Phase::Hiding => PhaseTag::Hiding,
            Phase::Seeking => PhaseTag::Seeking,
            Phase::GameOver(_) => PhaseTag::GameOver,
        }
    }

    /// Whether the table allows moving from `self` to `to`.
    pub fn can_transition(self, to: Phase) -> bool {
        TRANSITIONS.contains(&(self.tag(), to.tag()))
    }

    /// Move to `to`, or fail without changing anything.
    pub fn transition(&mut self, to: Phase) -> Result<(), GameError> {
        if !self.can_transition(to) {
            return Err(GameError::InvalidTransition {
                from: self.tag(),
                to: to.tag(),
            });
        }
        log::debug!("phase {:?} -> {:?}", self.tag(), to.tag());
        *self = to;
        Ok(())
    }

    /// Fail unless the phase is `expected`.
    pub fn expect(self, expected: PhaseTag) -> Result<(), GameError> {
        if self.tag() == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.tag(),
            })
        }
    }

    /// The outcome, once the round is over.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Phase::GameOver(o) => Some(o),
            _ => None,
        }
    }
}
