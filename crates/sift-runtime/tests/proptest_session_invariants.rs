//! Property-based invariant tests for the session store and memo cache.
//!
//! These verify the contracts the rerun model leans on:
//!
//! 1. `get_or_init` returns the default on first access and is idempotent:
//!    any later call returns the stored value, whatever default it passes.
//! 2. A `set` between two `get_or_init` calls wins over the second default.
//! 3. After any interleaving of operations, `get(k)` equals the last value
//!    explicitly written (or the first default if only initialized).
//! 4. A memoized function executes at most once per distinct argument
//!    value, and its result always equals direct recomputation.
//! 5. Memo entry count never exceeds the number of distinct arguments seen.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;
use sift_core::Value;
use sift_runtime::{Memo, SessionStore};

#[derive(Debug, Clone)]
enum Op {
    GetOrInit(u8, i64),
    Set(u8, i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..4, -100i64..100).prop_map(|(k, v)| Op::GetOrInit(k, v)),
        (0u8..4, -100i64..100).prop_map(|(k, v)| Op::Set(k, v)),
    ]
}

fn key(k: u8) -> String {
    format!("key{k}")
}

proptest! {
    #[test]
    fn get_or_init_first_access_returns_default(k in 0u8..4, d in any::<i64>()) {
        let mut store = SessionStore::new();
        prop_assert_eq!(store.get_or_init(&key(k), d), Value::Num(d as f64));
        // Called twice in sequence: both return the original default.
        prop_assert_eq!(store.get_or_init(&key(k), d.wrapping_add(1)), Value::Num(d as f64));
    }

    #[test]
    fn set_between_inits_wins(d in any::<i64>(), w in any::<i64>()) {
        let mut store = SessionStore::new();
        let _ = store.get_or_init("count", d);
        store.set("count", w);
        prop_assert_eq!(store.get_or_init("count", d), Value::Num(w as f64));
    }

    #[test]
    fn store_matches_reference_model(ops in proptest::collection::vec(op_strategy(), 0..50)) {
        let mut store = SessionStore::new();
        let mut model: std::collections::BTreeMap<String, i64> = Default::default();
        for op in ops {
            match op {
                Op::GetOrInit(k, d) => {
                    let got = store.get_or_init(&key(k), d);
                    let expected = *model.entry(key(k)).or_insert(d);
                    prop_assert_eq!(got, Value::Num(expected as f64));
                }
                Op::Set(k, v) => {
                    store.set(&key(k), v);
                    model.insert(key(k), v);
                }
            }
        }
        for (k, v) in &model {
            prop_assert_eq!(store.get(k), Some(&Value::Num(*v as f64)));
        }
        prop_assert_eq!(store.len(), model.len());
    }

    #[test]
    fn memo_runs_at_most_once_per_distinct_argument(args in proptest::collection::vec(-20i64..20, 1..60)) {
        let executions = Rc::new(Cell::new(0u64));
        let executions_clone = Rc::clone(&executions);
        let memo = Memo::new(move |n: &i64| {
            executions_clone.set(executions_clone.get() + 1);
            n * 3 - 1
        });

        let mut distinct = std::collections::BTreeSet::new();
        for a in &args {
            distinct.insert(*a);
            // Always equals direct recomputation.
            prop_assert_eq!(memo.call(a), a * 3 - 1);
        }
        prop_assert_eq!(executions.get(), distinct.len() as u64);
        prop_assert_eq!(memo.calls(), distinct.len() as u64);
        prop_assert_eq!(memo.len(), distinct.len());
    }
}
