//! Golden-value tests for Six-Ren stepping and the full reading.
//!
//! Pure-table tests (no calendar collaborator needed).

use liuren_base::{
    DominantLevel, EarthlyBranch, MetaphysicalAnalysis, PalmPosition, Sexagenary, Stage, analyze,
    landing_position, replay, shichen_from_hour, step,
};

// ---------------------------------------------------------------------------
// Stepping
// ---------------------------------------------------------------------------

/// Tenth month, seventh day, slot 8: lands on 空亡.
#[test]
fn month10_day7_slot8() {
    let steps = step(10, 7, 8).unwrap();

    assert_eq!(steps[0].path, vec![0, 1, 2, 3, 4, 5, 0, 1, 2, 3]);
    assert_eq!(steps[0].end_index, 3);
    assert_eq!(steps[0].end_position(), PalmPosition::ChiKou);

    assert_eq!(steps[1].start_index, 3);
    assert_eq!(steps[1].count, 7);
    assert_eq!(steps[1].path, vec![3, 4, 5, 0, 1, 2, 3]);
    assert_eq!(steps[1].end_position(), PalmPosition::ChiKou);

    assert_eq!(steps[2].start_index, 3);
    assert_eq!(steps[2].count, 9);
    assert_eq!(steps[2].path, vec![3, 4, 5, 0, 1, 2, 3, 4, 5]);
    assert_eq!(steps[2].end_index, 5);

    let landing = landing_position(&steps);
    assert_eq!(landing, PalmPosition::KongWang);

    let a = analyze(10, 7, 8, landing, None, None).unwrap();
    assert_eq!(a.dominance.level, DominantLevel::Month);
    assert_eq!(a.dominant_level, "月份");
}

/// First month, first day, 子 slot: every stage stays on 大安.
#[test]
fn month1_day1_slot0() {
    let steps = step(1, 1, 0).unwrap();
    for s in &steps {
        assert_eq!(s.start_index, 0);
        assert_eq!(s.end_index, 0);
        assert_eq!(s.end_position(), PalmPosition::DaAn);
        assert_eq!(s.path, vec![0]);
    }
    let a = analyze(1, 1, 0, landing_position(&steps), None, None).unwrap();
    assert_eq!(a.dominance.level, DominantLevel::Day);
}

#[test]
fn stage_order() {
    let steps = step(5, 20, 11).unwrap();
    let stages: Vec<Stage> = steps.iter().map(|s| s.stage).collect();
    assert_eq!(stages, vec![Stage::Month, Stage::Day, Stage::Hour]);
    assert_eq!(steps[2].count, 12);
}

#[test]
fn every_position_is_reachable() {
    let mut seen = [false; 6];
    for month in 1..=12 {
        for day in 1..=30 {
            for slot in 0..12u8 {
                let steps = step(month, day, slot).unwrap();
                seen[landing_position(&steps).index() as usize] = true;
            }
        }
    }
    assert!(seen.iter().all(|&s| s), "unreached positions: {seen:?}");
}

#[test]
fn hour_from_clock_feeds_stepper() {
    // 14:30 → 未 (slot 7), hour stage counts 8
    let slot = shichen_from_hour(14).unwrap();
    assert_eq!(slot, EarthlyBranch::Wei);
    let steps = step(2, 2, slot.index()).unwrap();
    assert_eq!(steps[2].count, 8);
}

#[test]
fn replay_ends_on_landing() {
    let steps = step(7, 15, 3).unwrap();
    let frames: Vec<_> = replay(&steps).collect();
    assert_eq!(frames.len() as u32, steps.iter().map(|s| s.count).sum::<u32>());
    assert_eq!(frames.last().unwrap().position, landing_position(&steps));
}

// ---------------------------------------------------------------------------
// Full reading
// ---------------------------------------------------------------------------

fn reading(month: u32, day: u32, slot: u8, m: &str, d: &str) -> MetaphysicalAnalysis {
    let steps = step(month, day, slot).unwrap();
    analyze(
        month,
        day,
        slot,
        landing_position(&steps),
        Some(Sexagenary::parse(m).unwrap()),
        Some(Sexagenary::parse(d).unwrap()),
    )
    .unwrap()
}

#[test]
fn repeated_runs_identical() {
    let a = reading(10, 7, 8, "丙戌", "己未");
    let b = reading(10, 7, 8, "丙戌", "己未");
    assert_eq!(a, b);
    let ja = serde_json::to_string(&a).unwrap();
    let jb = serde_json::to_string(&b).unwrap();
    assert_eq!(ja, jb);
}

#[test]
fn json_uses_symbol_labels() {
    let a = reading(10, 7, 8, "丙戌", "己未");
    let json = serde_json::to_value(&a).unwrap();
    assert_eq!(json["monthBranch"], "戌");
    assert_eq!(json["dayStem"], "己");
    assert_eq!(json["hourBranch"], "申");
    assert_eq!(json["environment"]["element"], "土");
    assert_eq!(json["environment"]["colorHex"], "#f59e0b");
    assert_eq!(json["dominance"]["level"], "月份");
}

#[test]
fn kongwang_with_earth_month() {
    // 空亡 → month dominant; 戌 earth. day 己 earth (同), hour 申 metal:
    // metal vs earth is 洩 → no advice
    let a = reading(10, 7, 8, "丙戌", "己未");
    assert_eq!(a.leading_direction, "中央");
    assert_eq!(a.leading_color, "黃色");
    assert_eq!(a.supplementary_advice, liuren_base::BALANCED_ADVICE);
    assert!(a.suggestion.starts_with(PalmPosition::KongWang.tip()));
}
