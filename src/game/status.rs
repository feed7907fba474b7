//! file: status.rs
//! author: Jacob Xie
//! date: 2025/12/20 21:24:31 Saturday
//! brief: turn phases and round outcomes

/// Where the turn is. Anything but `Idle` locks input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Revealing { position: usize },
    Concealing { targets: Vec<usize>, reason: ConcealReason },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConcealReason {
    /// The two open cards did not match.
    Mismatch,
    /// Cards of the finished round still showing their face.
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Won => "complete!!",
            Outcome::Lost => "failed...",
        }
    }
}
