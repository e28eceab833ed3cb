//! Tests for the in-memory session store, including concurrent access.

use drop_token::{MoveError, QuitPolicy, SessionStore, Status};
use std::thread;

fn players() -> [String; 2] {
    ["alice".to_owned(), "bob".to_owned()]
}

#[test]
fn test_ids_ascend_from_one() {
    let store = SessionStore::new();
    assert!(store.ids().is_empty());
    assert_eq!(store.create(players()), 1);
    assert_eq!(store.create(players()), 2);
    assert_eq!(store.create(players()), 3);
    assert_eq!(store.ids(), vec![1, 2, 3]);
}

#[test]
fn test_snapshot_returns_stored_session() {
    let store = SessionStore::new();
    let id = store.create(players());
    let session = store.snapshot(id).expect("session missing");
    assert_eq!(session.current_players(), &players());
    assert!(store.snapshot(99).is_none());
}

#[test]
fn test_apply_move_updates_stored_session() {
    let store = SessionStore::new();
    let id = store.create(players());
    assert_eq!(store.apply_move(id, "alice", 0), Ok(0));
    assert_eq!(store.apply_move(id, "bob", 1), Ok(1));
    let session = store.snapshot(id).expect("session missing");
    assert_eq!(session.moves().len(), 2);
    assert_eq!(*session.turn(), 0);
}

#[test]
fn test_unknown_game_wins_over_bad_column() {
    // The lookup failure is reported even when the move itself would also
    // have been rejected.
    let store = SessionStore::new();
    assert_eq!(store.apply_move(42, "alice", 99), Err(MoveError::NotFound));
    assert_eq!(
        store.apply_quit(42, "alice", QuitPolicy::Forfeit),
        Err(MoveError::NotFound)
    );
}

#[test]
fn test_move_lookup_through_store() {
    let store = SessionStore::new();
    let id = store.create(players());
    store.apply_move(id, "alice", 0).unwrap();
    store.apply_move(id, "bob", 1).unwrap();

    let record = store.move_at(id, 1).expect("move missing");
    assert_eq!(record.player(), "bob");
    assert_eq!(store.move_at(id, 5), Err(MoveError::NotFound));
    assert_eq!(store.move_at(99, 0), Err(MoveError::NotFound));

    let moves = store.moves_range(id, 0, None).expect("window rejected");
    assert_eq!(moves.len(), 2);
    assert_eq!(store.moves_range(99, 0, None), Err(MoveError::NotFound));
    assert_eq!(store.moves_range(id, 0, Some(7)), Err(MoveError::NotFound));
}

#[test]
fn test_quit_through_store() {
    let store = SessionStore::new();
    let id = store.create(players());
    assert_eq!(store.apply_quit(id, "alice", QuitPolicy::Forfeit), Ok(0));
    let session = store.snapshot(id).expect("session missing");
    assert_eq!(
        *session.status(),
        Status::Done {
            winner: Some("bob".to_owned())
        }
    );
}

#[test]
fn test_concurrent_creates_get_unique_ids() {
    let store = SessionStore::new();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || store.create(players()))
        })
        .collect();

    let mut ids: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("create thread panicked"))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);
    assert_eq!(store.ids().len(), 8);
}

#[test]
fn test_concurrent_same_move_applies_once() {
    // Two racing submissions of alice's move: the loser finds the turn
    // already advanced.
    let store = SessionStore::new();
    let id = store.create(players());

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || store.apply_move(id, "alice", 0))
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("move thread panicked"))
        .collect();

    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results.contains(&Err(MoveError::OutOfTurn)));
    let session = store.snapshot(id).expect("session missing");
    assert_eq!(session.moves().len(), 1);
}
