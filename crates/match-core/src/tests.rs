//! Session Scenario Tests
//!
//! Plays whole levels through `GameSession::apply` with seeded sessions.

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::catalog::Category;
    use crate::config::{GameConfig, LevelSpec};
    use crate::rules::{Constraint, LossReason, Resource};
    use crate::session::{GameEvent, GameSession, Outcome, Phase};
    use proptest::prelude::*;

    fn single_level(category: Category, item_count: usize, constraint: Constraint, ready: bool) -> GameConfig {
        GameConfig {
            levels: vec![LevelSpec {
                category,
                item_count,
                prompt: "test".to_string(),
                ready_prompt: ready.then(|| "ready?".to_string()),
                constraint,
            }],
        }
    }

    /// Select two slots and let the animation finish
    fn swap(session: &mut GameSession, first: usize, second: usize) -> Outcome {
        assert_eq!(session.apply(GameEvent::Select(first)).unwrap(), Outcome::Selected(first));
        assert!(matches!(
            session.apply(GameEvent::Select(second)).unwrap(),
            Outcome::SwapStarted(_)
        ));
        session.apply(GameEvent::SwapCompleted).unwrap()
    }

    /// A move that puts the correct item into its slot: (from, to)
    fn correct_move(board: &Board) -> (usize, usize) {
        let to = (0..board.len()).find(|&i| !board.is_correct_at(i)).unwrap();
        let from = (0..board.len())
            .find(|&j| board.working()[j] == board.target()[to])
            .unwrap();
        (from, to)
    }

    /// A move whose destination stays wrong
    fn wrong_move(board: &Board) -> (usize, usize) {
        for from in 0..board.len() {
            for to in 0..board.len() {
                if from != to
                    && board.working()[from] != board.target()[to]
                    && !board.is_correct_at(from)
                {
                    return (from, to);
                }
            }
        }
        panic!("no wrong move on {:?}", board);
    }

    fn manual_matches(board: &Board) -> usize {
        (0..board.len())
            .filter(|&i| board.working()[i] == board.target()[i])
            .count()
    }

    #[test]
    fn test_level_one_win_exactly_when_solved() {
        let mut session = GameSession::new(GameConfig::default(), 11).unwrap();
        loop {
            let (from, to) = correct_move(session.board());
            let outcome = swap(&mut session, from, to);
            if session.board().is_solved() {
                assert_eq!(outcome, Outcome::Won);
                assert_eq!(session.phase(), Phase::Won);
                break;
            }
            assert!(matches!(outcome, Outcome::Swapped { .. }));
            assert_eq!(session.phase(), Phase::InProgress);
        }
    }

    #[test]
    fn test_tapping_selection_again_deselects() {
        let mut session = GameSession::new(GameConfig::default(), 2).unwrap();
        session.apply(GameEvent::Select(1)).unwrap();
        assert_eq!(session.apply(GameEvent::Select(1)).unwrap(), Outcome::Deselected);
        assert_eq!(session.selection(), None);
        assert_eq!(session.apply(GameEvent::SwapCompleted).unwrap(), Outcome::Ignored);
    }

    #[test]
    fn test_input_locked_while_swap_in_flight() {
        let mut session = GameSession::new(GameConfig::default(), 5).unwrap();
        let before = session.board().working().to_vec();
        session.apply(GameEvent::Select(0)).unwrap();
        session.apply(GameEvent::Select(2)).unwrap();
        assert!(!session.accepts_input());
        assert_eq!(session.apply(GameEvent::Select(3)).unwrap(), Outcome::Ignored);
        assert_eq!(session.board().working(), before.as_slice());

        session.apply(GameEvent::SwapCompleted).unwrap();
        assert_eq!(session.board().working()[0], before[2]);
        assert_eq!(session.board().working()[2], before[0]);
        assert!(session.accepts_input());
    }

    #[test]
    fn test_select_out_of_range() {
        let mut session = GameSession::new(GameConfig::default(), 5).unwrap();
        assert!(session.apply(GameEvent::Select(4)).is_err());
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn test_swap_budget_loses_exactly_at_zero() {
        let config = single_level(Category::Bottles, 5, Constraint::SwapBudget { swaps: 15 }, false);
        let mut session = GameSession::new(config, 8).unwrap();
        for used in 1..=15u32 {
            // Swapping two wrong slots back and forth never solves a 5-item board
            let outcome = swap(&mut session, 0, 1);
            assert!(session.board().match_count() < 5);
            if used < 15 {
                assert!(matches!(outcome, Outcome::Swapped { .. }), "lost early after {}", used);
                assert_eq!(session.resource(), Resource::Swaps { left: 15 - used });
            } else {
                assert_eq!(outcome, Outcome::Lost(LossReason::OutOfSwaps));
                assert_eq!(session.phase(), Phase::Lost(LossReason::OutOfSwaps));
            }
        }
    }

    /// Correct moves needed to solve a board
    fn moves_to_solve(board: &Board) -> u32 {
        let mut board = board.clone();
        let mut moves = 0;
        while !board.is_solved() {
            let (from, to) = correct_move(&board);
            board.swap(from, to).unwrap();
            moves += 1;
        }
        moves
    }

    #[test]
    fn test_swap_budget_win_on_last_swap() {
        // Dealing depends only on the seed and the row, so the budget can be sized to the board
        let seed = 21;
        let unlimited = single_level(Category::Bottles, 5, Constraint::Unlimited, false);
        let needed = moves_to_solve(GameSession::new(unlimited, seed).unwrap().board());
        assert!((1..=4).contains(&needed));

        let config = single_level(Category::Bottles, 5, Constraint::SwapBudget { swaps: needed }, false);
        let mut session = GameSession::new(config, seed).unwrap();
        for _ in 1..needed {
            let (from, to) = correct_move(session.board());
            assert!(matches!(swap(&mut session, from, to), Outcome::Swapped { .. }));
        }
        let (from, to) = correct_move(session.board());
        assert_eq!(swap(&mut session, from, to), Outcome::Won);
        assert_eq!(session.resource(), Resource::Swaps { left: 0 });
    }

    #[test]
    fn test_countdown_waits_for_begin() {
        let config = single_level(Category::CerealBoxes, 6, Constraint::Countdown { seconds: 45 }, true);
        let mut session = GameSession::new(config, 4).unwrap();
        let attempt = session.attempt();
        assert_eq!(session.phase(), Phase::NotStarted);
        assert_eq!(session.ticking_attempt(), None);
        assert_eq!(session.apply(GameEvent::Tick { attempt }).unwrap(), Outcome::Ignored);
        assert_eq!(session.apply(GameEvent::Select(0)).unwrap(), Outcome::Ignored);

        assert_eq!(session.apply(GameEvent::Begin).unwrap(), Outcome::Started);
        assert_eq!(session.ticking_attempt(), Some(attempt));
        assert_eq!(session.apply(GameEvent::Begin).unwrap(), Outcome::Ignored);
    }

    #[test]
    fn test_countdown_loses_exactly_at_zero() {
        let config = single_level(Category::CerealBoxes, 6, Constraint::Countdown { seconds: 45 }, true);
        let mut session = GameSession::new(config, 4).unwrap();
        session.apply(GameEvent::Begin).unwrap();
        let attempt = session.attempt();

        for second in 1..45u32 {
            assert_eq!(
                session.apply(GameEvent::Tick { attempt }).unwrap(),
                Outcome::Ticked { seconds_left: 45 - second }
            );
        }
        assert_eq!(
            session.apply(GameEvent::Tick { attempt }).unwrap(),
            Outcome::Lost(LossReason::OutOfTime)
        );
        assert_eq!(session.apply(GameEvent::Tick { attempt }).unwrap(), Outcome::Ignored);
        assert_eq!(session.ticking_attempt(), None);
    }

    #[test]
    fn test_timeout_mid_animation_drops_swap() {
        let config = single_level(Category::CerealBoxes, 6, Constraint::Countdown { seconds: 1 }, true);
        let mut session = GameSession::new(config, 4).unwrap();
        session.apply(GameEvent::Begin).unwrap();
        let before = session.board().working().to_vec();
        session.apply(GameEvent::Select(0)).unwrap();
        session.apply(GameEvent::Select(1)).unwrap();

        let attempt = session.attempt();
        assert_eq!(
            session.apply(GameEvent::Tick { attempt }).unwrap(),
            Outcome::Lost(LossReason::OutOfTime)
        );
        assert_eq!(session.apply(GameEvent::SwapCompleted).unwrap(), Outcome::Ignored);
        assert_eq!(session.board().working(), before.as_slice());
    }

    #[test]
    fn test_win_stops_countdown() {
        let config = single_level(Category::CerealBoxes, 6, Constraint::Countdown { seconds: 45 }, true);
        let mut session = GameSession::new(config, 6).unwrap();
        session.apply(GameEvent::Begin).unwrap();
        let attempt = session.attempt();
        while session.phase() == Phase::InProgress {
            let (from, to) = correct_move(session.board());
            swap(&mut session, from, to);
            session.apply(GameEvent::Tick { attempt }).unwrap();
        }
        assert_eq!(session.phase(), Phase::Won);
        assert_eq!(session.apply(GameEvent::Tick { attempt }).unwrap(), Outcome::Ignored);
    }

    #[test]
    fn test_stale_tick_is_ignored_after_restart() {
        let config = single_level(Category::CerealBoxes, 6, Constraint::Countdown { seconds: 1 }, false);
        let mut session = GameSession::new(config, 4).unwrap();
        let old = session.attempt();
        session.apply(GameEvent::Tick { attempt: old }).unwrap();
        assert!(matches!(session.phase(), Phase::Lost(_)));

        session.apply(GameEvent::Continue).unwrap();
        assert_eq!(session.attempt(), old + 1);
        assert_eq!(session.apply(GameEvent::Tick { attempt: old }).unwrap(), Outcome::Ignored);
        assert_eq!(session.resource(), Resource::Seconds { left: 1 });
    }

    #[test]
    fn test_points_scoring_and_depletion() {
        let constraint = Constraint::Points { start: 6, bonus: 2, penalty: 1 };
        let config = single_level(Category::CupNoodles, 6, constraint, false);
        let mut session = GameSession::new(config, 13).unwrap();

        let (from, to) = correct_move(session.board());
        let outcome = swap(&mut session, from, to);
        let matches = manual_matches(session.board());
        assert!(matches >= 1);
        assert_eq!(outcome, Outcome::Swapped { matches, delta: Some(2) });
        assert_eq!(session.resource(), Resource::Points { points: 8, correct: 1 });

        let mut losses = 0;
        while session.phase() == Phase::InProgress {
            let (from, to) = wrong_move(session.board());
            let outcome = swap(&mut session, from, to);
            assert_eq!(session.last_delta(), Some(-1));
            losses += 1;
            if let Resource::Points { points, .. } = session.resource() {
                if points > 0 {
                    assert!(matches!(outcome, Outcome::Swapped { .. }));
                } else {
                    assert_eq!(outcome, Outcome::Lost(LossReason::OutOfPoints));
                }
            }
        }
        assert_eq!(losses, 8);
        assert_eq!(session.phase(), Phase::Lost(LossReason::OutOfPoints));
    }

    #[test]
    fn test_points_level_can_be_won() {
        let constraint = Constraint::Points { start: 6, bonus: 2, penalty: 1 };
        let config = single_level(Category::CupNoodles, 6, constraint, false);
        let mut session = GameSession::new(config, 17).unwrap();
        let mut moves = 0;
        while session.phase() == Phase::InProgress {
            let (from, to) = correct_move(session.board());
            swap(&mut session, from, to);
            moves += 1;
        }
        assert_eq!(session.phase(), Phase::Won);
        assert_eq!(session.resource(), Resource::Points { points: 6 + 2 * moves, correct: moves as u32 });
    }

    #[test]
    fn test_campaign_progression() {
        let mut session = GameSession::new(GameConfig::default(), 99).unwrap();
        let mut entered = vec![session.level_number()];
        for _ in 0..4 {
            if session.phase() == Phase::NotStarted {
                session.apply(GameEvent::Begin).unwrap();
            }
            while session.phase() == Phase::InProgress {
                let (from, to) = correct_move(session.board());
                swap(&mut session, from, to);
            }
            assert_eq!(session.phase(), Phase::Won);
            let outcome = session.apply(GameEvent::Continue).unwrap();
            assert!(matches!(outcome, Outcome::EnteredLevel { .. }));
            entered.push(session.level_number());
        }
        // Level 3 waits on its ready prompt; the final win wraps to level 1
        assert_eq!(entered, vec![1, 2, 3, 4, 1]);
        assert_eq!(session.phase(), Phase::InProgress);
    }

    #[test]
    fn test_level_three_entered_not_started() {
        let mut session = GameSession::new(GameConfig::default(), 99).unwrap();
        for _ in 0..2 {
            while session.phase() == Phase::InProgress {
                let (from, to) = correct_move(session.board());
                swap(&mut session, from, to);
            }
            session.apply(GameEvent::Continue).unwrap();
        }
        assert_eq!(session.level_number(), 3);
        assert_eq!(session.phase(), Phase::NotStarted);
        assert_eq!(session.resource(), Resource::Seconds { left: 45 });
    }

    #[test]
    fn test_loss_restarts_from_level_one() {
        let mut session = GameSession::new(GameConfig::default(), 31).unwrap();
        while session.phase() == Phase::InProgress {
            let (from, to) = correct_move(session.board());
            swap(&mut session, from, to);
        }
        session.apply(GameEvent::Continue).unwrap();
        assert_eq!(session.level_number(), 2);
        while session.phase() == Phase::InProgress {
            swap(&mut session, 0, 1);
        }
        assert_eq!(session.phase(), Phase::Lost(LossReason::OutOfSwaps));
        assert_eq!(session.apply(GameEvent::Select(0)).unwrap(), Outcome::Ignored);

        assert_eq!(
            session.apply(GameEvent::Continue).unwrap(),
            Outcome::EnteredLevel { level: 1 }
        );
        assert_eq!(session.board().match_count(), 0);
    }

    #[test]
    fn test_continue_ignored_while_playing() {
        let mut session = GameSession::new(GameConfig::default(), 1).unwrap();
        let attempt = session.attempt();
        assert_eq!(session.apply(GameEvent::Continue).unwrap(), Outcome::Ignored);
        assert_eq!(session.attempt(), attempt);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Match count never drifts from a full recount, and Won tracks solved.
        #[test]
        fn prop_match_count_tracks_board(
            seed in any::<u64>(),
            taps in proptest::collection::vec((0..4usize, 0..4usize), 1..40),
        ) {
            let mut session = GameSession::new(GameConfig::default(), seed).unwrap();
            for (a, b) in taps {
                if session.phase() != Phase::InProgress || a == b {
                    continue;
                }
                session.apply(GameEvent::Select(a)).unwrap();
                session.apply(GameEvent::Select(b)).unwrap();
                let outcome = session.apply(GameEvent::SwapCompleted).unwrap();

                let board = session.board();
                prop_assert_eq!(board.match_count(), manual_matches(board));
                prop_assert_eq!(session.phase() == Phase::Won, manual_matches(board) == board.len());
                if let Outcome::Swapped { matches, .. } = outcome {
                    prop_assert_eq!(matches, manual_matches(board));
                }
            }
        }
    }
}
