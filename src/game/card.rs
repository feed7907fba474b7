//! file: card.rs
//! author: Jacob Xie
//! date: 2025/12/20 21:10:42 Saturday
//! brief: card identities and per-card state

/// The value that decides whether two cards match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Identity {
    pub label: &'static str,
    pub color: u32,
    pub name: &'static str,
}

pub const IDENTITIES: [Identity; 8] = [
    Identity {
        label: "赤",
        color: 0xeb0d0d,
        name: "red",
    },
    Identity {
        label: "青",
        color: 0x0879ff,
        name: "blue",
    },
    Identity {
        label: "黄",
        color: 0xccdd09,
        name: "yellow",
    },
    Identity {
        label: "緑",
        color: 0x00c926,
        name: "green",
    },
    Identity {
        label: "橙",
        color: 0xee861a,
        name: "orange",
    },
    Identity {
        label: "紫",
        color: 0xb514e6,
        name: "purple",
    },
    Identity {
        label: "茶",
        color: 0x8c6604,
        name: "brown",
    },
    Identity {
        label: "黒",
        color: 0x000000,
        name: "black",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardStatus {
    Hidden,
    Open,
    Matched,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub identity: Identity,
    pub position: usize,
    pub status: CardStatus,
    /// What is painted on the card right now; `None` while the back shows.
    /// Lags `status` by half a flip.
    pub face: Option<Identity>,
}

impl Card {
    pub fn new(identity: Identity, position: usize) -> Self {
        Self {
            identity,
            position,
            status: CardStatus::Hidden,
            face: None,
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.status == CardStatus::Hidden
    }

    pub fn matches(&self, other: &Card) -> bool {
        self.identity == other.identity
    }
}
