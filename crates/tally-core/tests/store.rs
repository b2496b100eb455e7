//! MemoryStore semantics and per-key atomicity.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicUsize, Ordering};

use tally_core::{Counter, MemoryStore, Store, TallyError};

#[test]
fn store_then_load() {
    let s = MemoryStore::new();
    s.store(Counter { id: "a".into(), value: 3 }).unwrap();

    let c = s.load("a").unwrap();
    assert_eq!(c, Counter { id: "a".into(), value: 3 });
}

#[test]
fn store_existing_keeps_first_value() {
    let s = MemoryStore::new();
    s.store(Counter { id: "a".into(), value: 5 }).unwrap();

    let err = s.store(Counter::new("a")).expect_err("must conflict");
    assert_eq!(err, TallyError::AlreadyExists("a".into()));
    assert_eq!(s.load("a").unwrap().value, 5);
}

#[test]
fn missing_key_is_not_found() {
    let s = MemoryStore::new();
    assert_eq!(s.load("nope"), Err(TallyError::NotFound("nope".into())));
    assert_eq!(s.delete("nope"), Err(TallyError::NotFound("nope".into())));
    assert_eq!(
        s.update("nope", &Counter::inc),
        Err(TallyError::NotFound("nope".into()))
    );
}

#[test]
fn delete_frees_the_id() {
    let s = MemoryStore::new();
    s.store(Counter::new("a")).unwrap();
    s.delete("a").unwrap();

    assert_eq!(s.load("a"), Err(TallyError::NotFound("a".into())));
    s.store(Counter::new("a")).unwrap();
}

#[test]
fn failed_update_leaves_record_unchanged() {
    let s = MemoryStore::new();
    s.store(Counter { id: "a".into(), value: u64::MAX }).unwrap();

    let err = s.update("a", &Counter::inc).expect_err("must overflow");
    assert_eq!(err, TallyError::Overflow("a".into()));
    assert_eq!(s.load("a").unwrap().value, u64::MAX);
}

#[test]
fn concurrent_store_has_one_winner() {
    let s = MemoryStore::new();
    let won = AtomicUsize::new(0);
    let lost = AtomicUsize::new(0);

    std::thread::scope(|scope| {
        for _ in 0..16 {
            scope.spawn(|| match s.store(Counter::new("race")) {
                Ok(()) => {
                    won.fetch_add(1, Ordering::Relaxed);
                }
                Err(TallyError::AlreadyExists(_)) => {
                    lost.fetch_add(1, Ordering::Relaxed);
                }
                Err(e) => panic!("unexpected error: {e}"),
            });
        }
    });

    assert_eq!(won.load(Ordering::Relaxed), 1);
    assert_eq!(lost.load(Ordering::Relaxed), 15);
}

#[test]
fn concurrent_update_loses_nothing() {
    let s = MemoryStore::new();
    s.store(Counter::new("hot")).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..1000 {
                    s.update("hot", &Counter::inc).unwrap();
                }
            });
        }
    });

    assert_eq!(s.load("hot").unwrap().value, 8000);
}
