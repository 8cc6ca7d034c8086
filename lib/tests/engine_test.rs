#[macro_use]
extern crate assert_matches;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_wordle_game::*;

struct FixedPicker(usize);

impl IndexPicker for FixedPicker {
    fn pick_index(&mut self, _len: usize) -> usize {
        self.0
    }
}

#[test]
fn choose_secret_single_word() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(vec!["apple"]);
    let mut picker = RngPicker(StdRng::seed_from_u64(42));

    for _ in 0..10 {
        assert_eq!(&*choose_secret(&bank, &mut picker)?, "APPLE");
    }
    Ok(())
}

#[test]
fn choose_secret_same_seed_same_word() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(vec!["apple", "crane", "stomp", "robot", "booth"]);

    let first = choose_secret(&bank, &mut RngPicker(StdRng::seed_from_u64(3)))?;
    let second = choose_secret(&bank, &mut RngPicker(StdRng::seed_from_u64(3)))?;

    assert_eq!(first, second);
    assert!(bank.contains(&first));
    Ok(())
}

#[test]
fn choose_secret_reaches_every_word() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(vec!["apple", "crane", "stomp"]);
    let mut picker = RngPicker(StdRng::seed_from_u64(11));
    let mut seen = std::collections::HashSet::new();

    for _ in 0..200 {
        seen.insert(choose_secret(&bank, &mut picker)?);
    }

    assert_eq!(seen.len(), 3);
    Ok(())
}

#[test]
fn choose_secret_fixed_picker() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(vec!["apple", "crane", "stomp"]);

    assert_eq!(&*choose_secret(&bank, &mut FixedPicker(2))?, "STOMP");
    Ok(())
}

#[test]
fn choose_secret_empty_dictionary() {
    let bank = WordBank::from_iterator(Vec::<String>::new());

    assert_matches!(
        choose_secret(&bank, &mut FixedPicker(0)),
        Err(WordleError::EmptyDictionary)
    );
}
