//! Property-based tests for the collection and sanitizer.

#[allow(clippy::unwrap_used)]
mod tests {
    use crate::domain::{sanitize, TodoList, MAX_WORD_LEN};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Create(String),
        Toggle(usize),
        Remove(usize),
        ClearCompleted,
        MarkAll(bool),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[a-z ]{0,20}".prop_map(Op::Create),
            any::<usize>().prop_map(Op::Toggle),
            any::<usize>().prop_map(Op::Remove),
            Just(Op::ClearCompleted),
            any::<bool>().prop_map(Op::MarkAll),
        ]
    }

    proptest! {
        #[test]
        fn test_next_order_strictly_increases(titles in prop::collection::vec("\\PC*", 1..40)) {
            let now = Utc.timestamp_opt(0, 0).unwrap();
            let mut list = TodoList::new();
            let mut last = 0;
            for title in &titles {
                let expected = list.next_order().unwrap();
                prop_assert!(expected > last);
                let order = list.create(title, now).unwrap().item().order;
                prop_assert_eq!(order, expected);
                last = order;
            }
            let mut orders: Vec<u32> = list.items().iter().map(|item| item.order).collect();
            orders.dedup();
            prop_assert_eq!(orders.len(), titles.len());
        }

        #[test]
        fn test_counts_partition_total(ops in prop::collection::vec(op(), 0..60)) {
            let now = Utc.timestamp_opt(0, 0).unwrap();
            let mut list = TodoList::new();
            for op in ops {
                match op {
                    Op::Create(title) => { list.create(&title, now).unwrap(); }
                    Op::Toggle(n) if !list.is_empty() => {
                        let id = list.items()[n % list.len()].id;
                        list.toggle(id, now).unwrap();
                    }
                    Op::Remove(n) if !list.is_empty() => {
                        let id = list.items()[n % list.len()].id;
                        list.remove(id).unwrap();
                    }
                    Op::ClearCompleted => { list.clear_completed(); }
                    Op::MarkAll(done) => { list.mark_all(done, now); }
                    _ => {}
                }
                prop_assert_eq!(list.done_count() + list.remaining_count(), list.len());
                let orders: Vec<u32> = list.items().iter().map(|item| item.order).collect();
                prop_assert!(orders.windows(2).all(|w| w[0] < w[1]));
            }
        }

        #[test]
        fn test_sanitize_idempotent(text in "\\PC*") {
            let once = sanitize(&text);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn test_sanitize_word_length_bound(text in "\\PC{0,200}") {
            let out = sanitize(&text);
            prop_assert!(out.split(' ').all(|word| word.chars().count() <= MAX_WORD_LEN));
            prop_assert!(!out.contains("  "));
        }
    }
}
