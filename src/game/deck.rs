//! file: deck.rs
//! author: Jacob Xie
//! date: 2025/12/20 21:18:05 Saturday
//! brief: the shuffled pair deck

use rand::{Rng, seq::SliceRandom};

use super::{Card, CardStatus, IDENTITIES, Identity};

pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Two of every identity, shuffled.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let identities = IDENTITIES.iter().chain(IDENTITIES.iter()).copied();
        let mut deck = Self {
            cards: identities
                .enumerate()
                .map(|(position, identity)| Card::new(identity, position))
                .collect(),
        };
        deck.reshuffle(rng);
        deck
    }

    /// Reshuffles the labelled deck of the previous round and turns every card
    /// back to hidden. Faces are left alone so a conceal can still play over them.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut identities: Vec<Identity> = self.cards.iter().map(|card| card.identity).collect();
        identities.shuffle(rng);

        for (position, (card, identity)) in self.cards.iter_mut().zip(identities).enumerate() {
            card.identity = identity;
            card.position = position;
            card.status = CardStatus::Hidden;
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Card> {
        self.cards.get_mut(position)
    }

    pub fn cover_all(&mut self) {
        for card in &mut self.cards {
            card.face = None;
        }
    }

    pub fn face_up_positions(&self) -> Vec<usize> {
        self.cards
            .iter()
            .filter(|card| card.face.is_some())
            .map(|card| card.position)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn identity_counts(deck: &Deck) -> HashMap<&'static str, usize> {
        let mut counts = HashMap::new();
        for card in deck.cards() {
            *counts.entry(card.identity.label).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn new_deck_holds_every_identity_twice() {
        let mut rng = StdRng::seed_from_u64(7);
        let deck = Deck::new(&mut rng);

        assert_eq!(deck.len(), 16);
        let counts = identity_counts(&deck);
        assert_eq!(counts.len(), IDENTITIES.len());
        assert!(counts.values().all(|&count| count == 2));
    }

    #[test]
    fn positions_follow_deck_order() {
        let mut rng = StdRng::seed_from_u64(11);
        let deck = Deck::new(&mut rng);

        for (index, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.position, index);
            assert_eq!(card.status, CardStatus::Hidden);
            assert_eq!(card.face, None);
        }
    }

    #[test]
    fn reshuffle_keeps_pairs_and_faces() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut deck = Deck::new(&mut rng);
        for position in 0..4 {
            let card = deck.get_mut(position).unwrap();
            card.status = CardStatus::Matched;
            card.face = Some(card.identity);
        }

        deck.reshuffle(&mut rng);

        assert!(identity_counts(&deck).values().all(|&count| count == 2));
        assert!(deck.cards().iter().all(|card| card.status == CardStatus::Hidden));
        assert_eq!(deck.face_up_positions(), vec![0, 1, 2, 3]);

        deck.cover_all();
        assert!(deck.face_up_positions().is_empty());
    }
}
