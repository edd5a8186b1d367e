use super::*;

#[test]
fn one_unit_per_position_over_the_longer_string() {
    let mut rng = Rng64::new(1);
    assert_eq!(build_schedule("AB", "ABCD", 40, &mut rng).len(), 4);
    assert_eq!(build_schedule("ABCD", "AB", 40, &mut rng).len(), 4);
    assert_eq!(build_schedule("", "", 40, &mut rng).len(), 0);
}

#[test]
fn windows_are_ordered_and_bounded() {
    let mut rng = Rng64::new(17);
    let long = "X".repeat(200);
    for unit in build_schedule(&long, &long, 40, &mut rng) {
        assert!(unit.start_frame < 40);
        assert!(unit.end_frame >= unit.start_frame);
        assert!(unit.end_frame <= 78); // (W - 1) + (W - 1)
    }
}

#[test]
fn growth_pads_from_with_none() {
    let mut rng = Rng64::new(2);
    let units = build_schedule("AB", "ABCD", 40, &mut rng);
    assert_eq!(units[1].from, Some('B'));
    assert_eq!(units[1].to, Some('B'));
    assert_eq!(units[2].from, None);
    assert_eq!(units[2].to, Some('C'));
}

#[test]
fn shrink_pads_to_with_none() {
    let mut rng = Rng64::new(2);
    let units = build_schedule("ABCD", "AB", 40, &mut rng);
    assert_eq!(units[2].from, Some('C'));
    assert_eq!(units[2].to, None);
    assert_eq!(units[3].from, Some('D'));
    assert_eq!(units[3].to, None);
}

#[test]
fn jitter_width_one_pins_every_window_to_frame_zero() {
    let mut rng = Rng64::new(8);
    for unit in build_schedule("HELLO", "WORLD", 1, &mut rng) {
        assert_eq!(unit.start_frame, 0);
        assert_eq!(unit.end_frame, 0);
        assert!(unit.is_complete(0));
        assert!(!unit.in_window(0));
    }
}

#[test]
fn positions_are_unicode_scalars() {
    let mut rng = Rng64::new(4);
    let units = build_schedule("héé", "ok", 40, &mut rng);
    assert_eq!(units.len(), 3);
    assert_eq!(units[1].from, Some('é'));
    assert_eq!(units[2].from, Some('é'));
    assert_eq!(units[2].to, None);
}
