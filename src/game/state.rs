//! Game state and the host's reveal rule.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{draw_index, Door, GameError, RandomSource, Result, DOOR_COUNT};

/// Door indices the host may open. Never more than `DOOR_COUNT`.
pub type EligibleDoors = SmallVec<[usize; DOOR_COUNT]>;

/// One round of the puzzle: three doors, exactly one of them the winner.
///
/// The door array is fixed at construction. Only door flags change
/// afterwards, and only through the methods below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    doors: [Door; DOOR_COUNT],
}

impl Game {
    /// Place the prize behind a uniformly random door.
    pub fn new<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let winner = draw_index(rng, DOOR_COUNT);
        let doors = std::array::from_fn(|i| Door::new(i == winner));
        debug!(winner, "new game");
        Self { doors }
    }

    /// Place the prize behind a known door.
    pub fn with_winner(winner: usize) -> Result<Self> {
        check_index(winner)?;
        Ok(Self {
            doors: std::array::from_fn(|i| Door::new(i == winner)),
        })
    }

    /// All three doors in index order.
    #[must_use]
    pub fn doors(&self) -> &[Door; DOOR_COUNT] {
        &self.doors
    }

    /// A single door.
    pub fn door(&self, index: usize) -> Result<&Door> {
        check_index(index)?;
        Ok(&self.doors[index])
    }

    /// Index of the prize door.
    #[must_use]
    pub fn winning_door(&self) -> usize {
        // Both constructors place exactly one winner and nothing clears it.
        self.doors
            .iter()
            .position(Door::is_winner)
            .unwrap_or_default()
    }

    /// Index of the contestant's current pick, if any.
    #[must_use]
    pub fn selected_door(&self) -> Option<usize> {
        self.doors.iter().position(Door::is_selected)
    }

    /// Indices of every revealed door.
    pub fn open_doors(&self) -> impl Iterator<Item = usize> + '_ {
        self.doors
            .iter()
            .enumerate()
            .filter(|(_, door)| door.is_open())
            .map(|(i, _)| i)
    }

    /// Make `index` the only selected door.
    ///
    /// Selecting the already-selected door is a no-op. An out-of-range
    /// index leaves the game untouched.
    pub fn select_door(&mut self, index: usize) -> Result<()> {
        check_index(index)?;
        for door in &mut self.doors {
            door.is_selected = false;
        }
        self.doors[index].is_selected = true;
        debug!(index, "door selected");
        Ok(())
    }

    /// Reveal a door, whatever it hides.
    ///
    /// This is the raw reveal; it does not apply the host rule.
    pub fn open_door(&mut self, index: usize) -> Result<()> {
        check_index(index)?;
        self.doors[index].is_open = true;
        debug!(index, winner = self.doors[index].is_winner, "door opened");
        Ok(())
    }

    /// Doors that are neither the prize nor the current pick.
    #[must_use]
    pub fn eligible_host_doors(&self) -> EligibleDoors {
        self.doors
            .iter()
            .enumerate()
            .filter(|(_, door)| door.is_host_eligible())
            .map(|(i, _)| i)
            .collect()
    }

    /// The host reveals a losing door the contestant did not pick.
    ///
    /// Samples uniformly from [`Game::eligible_host_doors`], opens that door,
    /// and returns its index. With the winner picked there are two
    /// candidates; otherwise exactly one.
    pub fn open_non_winning_door<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<usize> {
        let eligible = self.eligible_host_doors();
        if eligible.is_empty() {
            return Err(GameError::NoEligibleDoor);
        }
        let index = eligible[draw_index(rng, eligible.len())];
        self.doors[index].is_open = true;
        debug!(index, candidates = eligible.len(), "host opened door");
        Ok(index)
    }

    /// The one door that is neither selected nor open.
    ///
    /// After a pick and a host reveal this is where a switching contestant
    /// moves. Returns `None` unless exactly one such door exists.
    #[must_use]
    pub fn switch_target(&self) -> Option<usize> {
        let mut candidates = self
            .doors
            .iter()
            .enumerate()
            .filter(|(_, door)| !door.is_selected() && !door.is_open())
            .map(|(i, _)| i);
        match (candidates.next(), candidates.next()) {
            (Some(index), None) => Some(index),
            _ => None,
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, door) in self.doors.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", i, door)?;
        }
        Ok(())
    }
}

fn check_index(index: usize) -> Result<()> {
    if index < DOOR_COUNT {
        Ok(())
    } else {
        Err(GameError::IndexOutOfRange {
            index,
            door_count: DOOR_COUNT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, SequenceSource};

    fn count(game: &Game, flag: fn(&Door) -> bool) -> usize {
        game.doors().iter().filter(|d| flag(d)).count()
    }

    #[test]
    fn test_new_game_has_one_winner() {
        let mut rng = GameRng::new(42);
        for _ in 0..50 {
            let game = Game::new(&mut rng);
            assert_eq!(count(&game, Door::is_winner), 1);
            assert_eq!(count(&game, Door::is_selected), 0);
            assert_eq!(count(&game, Door::is_open), 0);
        }
    }

    #[test]
    fn test_new_game_uses_injected_source() {
        let mut source = SequenceSource::new(vec![2]);
        let game = Game::new(&mut source);
        assert_eq!(game.winning_door(), 2);
        assert_eq!(source.draws(), 1);
    }

    /// Breaks the source contract by ignoring the bound.
    struct AlwaysThree;

    impl RandomSource for AlwaysThree {
        fn next_index(&mut self, _bound: usize) -> usize {
            3
        }
    }

    #[test]
    fn test_out_of_contract_source_keeps_one_winner() {
        let game = Game::new(&mut AlwaysThree);
        assert_eq!(count(&game, Door::is_winner), 1);
        assert_eq!(game.winning_door(), 0);
    }

    #[test]
    fn test_out_of_contract_source_host_stays_in_range() {
        // Winner picked: 3 % 2 selects the second candidate.
        let mut game = Game::with_winner(1).unwrap();
        game.select_door(1).unwrap();
        assert_eq!(game.open_non_winning_door(&mut AlwaysThree), Ok(2));

        // Loser picked: the single candidate is forced.
        let mut game = Game::with_winner(2).unwrap();
        game.select_door(0).unwrap();
        assert_eq!(game.open_non_winning_door(&mut AlwaysThree), Ok(1));
    }

    #[test]
    fn test_with_winner() {
        let game = Game::with_winner(1).unwrap();
        assert!(game.door(1).unwrap().is_winner());
        assert_eq!(
            Game::with_winner(3),
            Err(GameError::IndexOutOfRange { index: 3, door_count: 3 })
        );
    }

    #[test]
    fn test_select_door() {
        let mut game = Game::with_winner(0).unwrap();
        game.select_door(2).unwrap();
        assert!(game.doors()[2].is_selected());
        assert_eq!(count(&game, Door::is_selected), 1);
        assert_eq!(game.selected_door(), Some(2));
    }

    #[test]
    fn test_switching_selection() {
        let mut game = Game::with_winner(2).unwrap();
        game.select_door(0).unwrap();
        game.select_door(1).unwrap();
        assert!(!game.doors()[0].is_selected());
        assert!(game.doors()[1].is_selected());
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut once = Game::with_winner(1).unwrap();
        once.select_door(0).unwrap();
        let mut twice = once.clone();
        twice.select_door(0).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_select_out_of_range_leaves_state() {
        let mut game = Game::with_winner(1).unwrap();
        game.select_door(0).unwrap();
        let before = game.clone();

        let err = game.select_door(5).unwrap_err();
        assert_eq!(err, GameError::IndexOutOfRange { index: 5, door_count: 3 });
        assert_eq!(game, before);
    }

    #[test]
    fn test_open_door_any_door() {
        let mut game = Game::with_winner(0).unwrap();
        game.select_door(0).unwrap();
        game.open_door(0).unwrap();
        assert!(game.doors()[0].is_open());
        assert!(game.doors()[0].is_winner());
        assert!(game.open_door(3).is_err());
    }

    #[test]
    fn test_open_is_monotonic() {
        let mut game = Game::with_winner(0).unwrap();
        game.open_door(1).unwrap();
        game.select_door(1).unwrap();
        game.select_door(2).unwrap();
        assert!(game.doors()[1].is_open());
        assert_eq!(game.open_doors().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_host_when_pick_is_loser() {
        // Winner 2, pick 0: only door 1 qualifies regardless of the draw.
        for draw in 0..3 {
            let mut game = Game::with_winner(2).unwrap();
            game.select_door(0).unwrap();
            let mut source = SequenceSource::new(vec![draw]);
            assert_eq!(game.open_non_winning_door(&mut source), Ok(1));
        }
    }

    #[test]
    fn test_host_when_pick_is_winner() {
        let mut game = Game::with_winner(1).unwrap();
        game.select_door(1).unwrap();
        assert_eq!(game.eligible_host_doors().as_slice(), &[0, 2]);

        let mut first = game.clone();
        assert_eq!(first.open_non_winning_door(&mut SequenceSource::new(vec![0])), Ok(0));
        let mut second = game.clone();
        assert_eq!(second.open_non_winning_door(&mut SequenceSource::new(vec![1])), Ok(2));
    }

    #[test]
    fn test_host_without_selection() {
        let mut game = Game::with_winner(0).unwrap();
        assert_eq!(game.eligible_host_doors().as_slice(), &[1, 2]);
        let opened = game.open_non_winning_door(&mut GameRng::new(3)).unwrap();
        assert_ne!(opened, 0);
    }

    #[test]
    fn test_host_result_is_losing_and_unselected() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            let mut game = Game::new(&mut rng);
            game.select_door(0).unwrap();
            let opened = game.open_non_winning_door(&mut rng).unwrap();
            let door = game.doors()[opened];
            assert!(!door.is_winner());
            assert!(!door.is_selected());
            assert_eq!(count(&game, Door::is_open), 1);
        }
    }

    #[test]
    fn test_host_with_no_eligible_door() {
        let mut game = Game::with_winner(0).unwrap();
        game.select_door(1).unwrap();
        // Only reachable by bypassing select_door.
        game.doors[2].is_selected = true;
        let before = game.clone();
        assert_eq!(
            game.open_non_winning_door(&mut GameRng::new(1)),
            Err(GameError::NoEligibleDoor)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_switch_target() {
        let mut game = Game::with_winner(1).unwrap();
        assert_eq!(game.switch_target(), None);

        game.select_door(0).unwrap();
        assert_eq!(game.switch_target(), None);

        let opened = game.open_non_winning_door(&mut GameRng::new(9)).unwrap();
        assert_eq!(opened, 2);
        assert_eq!(game.switch_target(), Some(1));
    }

    #[test]
    fn test_display() {
        let mut game = Game::with_winner(2).unwrap();
        game.select_door(0).unwrap();
        game.open_door(1).unwrap();
        assert_eq!(game.to_string(), "0:[closed] 1:goat 2:closed");
    }

    #[test]
    fn test_serde() {
        let mut game = Game::with_winner(2).unwrap();
        game.select_door(1).unwrap();
        let json = serde_json::to_string(&game).unwrap();
        let restored: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(game, restored);
    }
}
