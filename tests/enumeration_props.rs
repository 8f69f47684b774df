use std::collections::HashSet;

use proptest::prelude::*;
use section_bf::enumerate::TupleGenerator;

proptest! {
    #[test]
    fn visits_every_tuple_exactly_once(len in 0usize..5, radix in 2u64..6) {
        let tuples: Vec<Vec<u64>> = TupleGenerator::new(len, radix).into_tuples().collect();

        let expected = radix.pow(len as u32) as usize;
        prop_assert_eq!(tuples.len(), expected, "wrong number of visits");

        let distinct: HashSet<&Vec<u64>> = tuples.iter().collect();
        prop_assert_eq!(distinct.len(), expected, "duplicate tuple visited");

        for tuple in &tuples {
            prop_assert_eq!(tuple.len(), len);
            prop_assert!(tuple.iter().all(|&d| d < radix), "digit out of range in {:?}", tuple);
        }
        if let Some(first) = tuples.first() {
            prop_assert!(first.iter().all(|&d| d == 0), "first tuple must be all zeros");
        }
    }

    #[test]
    fn successive_tuples_differ_by_one_step(len in 1usize..5, radix in 2u64..6) {
        let tuples: Vec<Vec<u64>> = TupleGenerator::new(len, radix).into_tuples().collect();

        for pair in tuples.windows(2) {
            let diffs: Vec<u64> = pair[0]
                .iter()
                .zip(&pair[1])
                .map(|(a, b)| a.abs_diff(*b))
                .filter(|&d| d != 0)
                .collect();
            prop_assert_eq!(diffs, vec![1], "{:?} -> {:?} is not a single ±1 step", &pair[0], &pair[1]);
        }
    }

    #[test]
    fn early_exit_resumes_where_it_stopped(len in 1usize..4, radix in 2u64..5, stop in 1u64..20) {
        let total = radix.pow(len as u32);
        let mut gen = TupleGenerator::new(len, radix);
        let mut count = 0;
        let first = gen.for_each(|_| {
            count += 1;
            if count == stop {
                std::ops::ControlFlow::Break(())
            } else {
                std::ops::ControlFlow::Continue(())
            }
        });
        let rest = gen.for_each(|_| std::ops::ControlFlow::Continue(()));
        prop_assert_eq!(first, stop.min(total));
        prop_assert_eq!(first + rest, total);
    }
}
