//! Tests for the typestate puzzle architecture.

use strictly_hanoi::{
    Attempt, DiskCount, MoveOutcome, MoveRejection, Outcome, PuzzleReady, PuzzleResult, RodIndex,
    Selection, Status,
};

const SOURCE: RodIndex = RodIndex::Source;
const AUX: RodIndex = RodIndex::Auxiliary;
const DEST: RodIndex = RodIndex::Destination;

fn three() -> DiskCount {
    DiskCount::new(3).expect("3 disks is valid")
}

#[test]
fn test_typestate_lifecycle() {
    let puzzle = PuzzleReady::new(three());
    assert_eq!(puzzle.state().status(), Status::InProgress);

    let holding = match puzzle.select_rod(SOURCE) {
        Selection::Holding(h) => h,
        Selection::Empty(_) => panic!("Source rod starts full"),
    };
    assert_eq!(holding.held_disk().size(), 1);
    assert_eq!(holding.state().selected_rod(), Some(SOURCE));

    let turn = holding.attempt_move(DEST);
    assert!(matches!(turn.outcome(), MoveOutcome::Moved(_)));

    let puzzle = match turn.into_result() {
        PuzzleResult::Ready(p) => p,
        PuzzleResult::Finished(_) => panic!("One move doesn't finish three disks"),
    };
    assert_eq!(puzzle.state().moves_remaining(), 6);
    assert_eq!(puzzle.state().selected_rod(), None);
}

#[test]
fn test_empty_rod_selection_is_free() {
    let puzzle = PuzzleReady::new(three());
    let puzzle = match puzzle.select_rod(AUX) {
        Selection::Empty(p) => p,
        Selection::Holding(_) => panic!("Auxiliary rod starts empty"),
    };
    assert_eq!(puzzle.state().lives(), 3);
    assert_eq!(puzzle.state().moves_remaining(), 7);
}

#[test]
fn test_release_puts_disk_back() {
    let holding = match PuzzleReady::new(three()).select_rod(SOURCE) {
        Selection::Holding(h) => h,
        Selection::Empty(_) => panic!("Source rod starts full"),
    };
    let puzzle = holding.release();
    assert_eq!(puzzle.state().selected_rod(), None);
    assert_eq!(puzzle.state().rods().sizes(), [vec![3, 2, 1], vec![], vec![]]);
}

#[test]
fn test_larger_onto_smaller_costs_a_life() {
    let puzzle = match PuzzleReady::new(three())
        .attempt(Attempt::new(SOURCE, AUX))
        .into_result()
    {
        PuzzleResult::Ready(p) => p,
        PuzzleResult::Finished(_) => panic!("Unexpected finish"),
    };

    let turn = puzzle.attempt(Attempt::new(SOURCE, AUX));
    assert!(matches!(
        turn.outcome(),
        MoveOutcome::InvalidMove(MoveRejection::LargerOntoSmaller { .. })
    ));
    assert_eq!(turn.state().lives(), 2);
    assert_eq!(turn.state().rods().sizes(), [vec![3, 2], vec![1], vec![]]);
}

#[test]
fn test_replay_solution() {
    let attempts: Vec<Attempt> = [
        (SOURCE, DEST),
        (SOURCE, AUX),
        (DEST, AUX),
        (SOURCE, DEST),
        (AUX, SOURCE),
        (AUX, DEST),
        (SOURCE, DEST),
    ]
    .into_iter()
    .map(Attempt::from)
    .collect();

    match PuzzleReady::replay(three(), &attempts) {
        PuzzleResult::Finished(finished) => {
            assert_eq!(finished.outcome(), Outcome::Won);
            assert_eq!(finished.state().history().len(), 7);
            assert_eq!(
                finished.state().rods().sizes(),
                [vec![], vec![], vec![3, 2, 1]]
            );
        }
        PuzzleResult::Ready(_) => panic!("Solution should win"),
    }
}

#[test]
fn test_replay_stops_at_terminal() {
    let attempts = vec![Attempt::new(AUX, DEST); 5];
    let result = PuzzleReady::replay(three(), &attempts);
    match result {
        PuzzleResult::Finished(finished) => {
            assert_eq!(finished.outcome(), Outcome::LostLives);
            assert_eq!(finished.state().lives(), 0);
        }
        PuzzleResult::Ready(_) => panic!("Three invalid moves should lose"),
    }
}

#[test]
fn test_restart_after_finish() {
    let one = DiskCount::new(1).expect("1 disk is valid");
    let finished = match PuzzleReady::replay(one, &[Attempt::new(SOURCE, DEST)]) {
        PuzzleResult::Finished(f) => f,
        PuzzleResult::Ready(_) => panic!("One disk is solved in one move"),
    };
    let puzzle = finished.restart();
    assert_eq!(puzzle.state().rods().sizes(), [vec![1], vec![], vec![]]);
    assert_eq!(puzzle.state().moves_remaining(), 1);
    assert_eq!(puzzle.state().lives(), 3);
    assert!(puzzle.state().history().is_empty());
}
