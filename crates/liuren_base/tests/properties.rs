//! Property tests over the whole input domain.

use liuren_base::{
    ALL_ELEMENTS, ALL_POSITIONS, Dominance, Interaction, analyze, hour_to_branch_index,
    interaction, landing_position, step,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn paths_match_counts_and_chain(month in 1u32..=12, day in 1u32..=30, slot in 0u8..12) {
        let steps = step(month, day, slot).unwrap();
        prop_assert_eq!(steps[0].start_index, 0);
        prop_assert_eq!(steps[0].count, month);
        prop_assert_eq!(steps[1].count, day);
        prop_assert_eq!(steps[2].count, u32::from(slot) + 1);
        for s in &steps {
            prop_assert_eq!(s.path.len() as u32, s.count);
            prop_assert_eq!(s.path[0], s.start_index);
            prop_assert_eq!(*s.path.last().unwrap(), s.end_index);
            prop_assert_eq!(
                u32::from(s.end_index),
                (u32::from(s.start_index) + s.count - 1) % 6
            );
            prop_assert!(s.path.iter().all(|&i| i < 6));
            for (i, &p) in s.path.iter().enumerate() {
                prop_assert_eq!(u32::from(p), (u32::from(s.start_index) + i as u32) % 6);
            }
        }
        prop_assert_eq!(steps[1].start_index, steps[0].end_index);
        prop_assert_eq!(steps[2].start_index, steps[1].end_index);
    }

    #[test]
    fn stepping_is_deterministic(month in 1u32..=12, day in 1u32..=30, slot in 0u8..12) {
        let a = step(month, day, slot).unwrap();
        let b = step(month, day, slot).unwrap();
        prop_assert_eq!(&a, &b);
        let pos = landing_position(&a);
        let ra = analyze(month, day, slot, pos, None, None).unwrap();
        let rb = analyze(month, day, slot, pos, None, None).unwrap();
        prop_assert_eq!(ra, rb);
    }

    #[test]
    fn hour_buckets_have_width_two(hour in 1u32..23) {
        let idx = hour_to_branch_index(hour).unwrap();
        prop_assert_eq!(u32::from(idx), (hour + 1) / 2);
        // odd hours open a new bucket, even hours share the previous one
        if hour % 2 == 0 {
            prop_assert_eq!(hour_to_branch_index(hour - 1).unwrap(), idx);
        }
    }

    #[test]
    fn hours_out_of_range_rejected(hour in 24u32..10_000) {
        prop_assert!(hour_to_branch_index(hour).is_err());
    }
}

#[test]
fn hour_mapping_non_decreasing_except_midnight() {
    let mapped: Vec<u8> = (0..24).map(|h| hour_to_branch_index(h).unwrap()).collect();
    assert_eq!(mapped[0], 0);
    assert_eq!(mapped[23], 0);
    for w in mapped[1..23].windows(2) {
        assert!(w[0] <= w[1]);
    }
}

#[test]
fn interaction_antisymmetry() {
    for a in ALL_ELEMENTS {
        assert_eq!(interaction(a, a), Interaction::Same);
        for b in ALL_ELEMENTS {
            match interaction(a, b) {
                Interaction::Generates => assert_eq!(interaction(b, a), Interaction::DrainedBy),
                Interaction::Controls => assert_eq!(interaction(b, a), Interaction::Weakens),
                Interaction::DrainedBy => assert_eq!(interaction(b, a), Interaction::Generates),
                Interaction::Weakens => assert_eq!(interaction(b, a), Interaction::Controls),
                Interaction::Same => assert_eq!(a, b),
            }
        }
    }
}

#[test]
fn dominance_is_total() {
    let labels: Vec<String> = ALL_POSITIONS
        .iter()
        .map(|&p| Dominance::for_position(p).label())
        .collect();
    assert_eq!(labels, vec!["日干", "月份", "時辰", "時辰 + 月份避忌", "日干", "月份"]);
}
