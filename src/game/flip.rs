//! file: flip.rs
//! author: Jacob Xie
//! date: 2025/12/20 21:31:12 Saturday
//! brief: flip requests handed to the animation player
//!
//! The player runs the transition, calls `MatchGame::flip_halfway` once the
//! card is edge-on and `MatchGame::flip_complete` when it finishes.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipKind {
    Reveal,
    Conceal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flip {
    pub kind: FlipKind,
    pub targets: Vec<usize>,
}

impl Flip {
    pub fn reveal(position: usize) -> Self {
        Self {
            kind: FlipKind::Reveal,
            targets: vec![position],
        }
    }

    pub fn conceal(targets: Vec<usize>) -> Self {
        Self {
            kind: FlipKind::Conceal,
            targets,
        }
    }

    pub fn contains(&self, position: usize) -> bool {
        self.targets.contains(&position)
    }
}
