//! Integration Tests für Menü-Navigation, Menü-Darstellung und Sampler

mod common;

use common::{AXIS_CHANNEL, DrawCall, MockDisplay, PRESSED, RELEASED, Rig};
use zutritt_core::config::{HIGH_THRESHOLD, LOW_THRESHOLD, MAX_MOVES};
use zutritt_core::{Condition, ConditionSet, MenuCursor, Navigation, render_menu};

// ============================================================================
// Tests: MenuCursor::navigate()
// ============================================================================

#[test]
fn test_below_low_threshold_walks_down_then_wraps() {
    for bar in 0..LOW_THRESHOLD {
        let mut cursor = MenuCursor::new();
        for expected_down in 1..=MAX_MOVES {
            assert_eq!(cursor.navigate(bar), Some(Navigation::MovedDown));
            assert_eq!(cursor.moves_down(), expected_down);
        }
        assert_eq!(cursor.navigate(bar), Some(Navigation::WrappedToFirst));
        assert_eq!(cursor.stop(), 0);
        assert_eq!((cursor.moves_down(), cursor.moves_up()), (0, 3));
    }
}

#[test]
fn test_above_high_threshold_walks_up_then_wraps() {
    for bar in (HIGH_THRESHOLD + 1)..=40 {
        let mut cursor = MenuCursor::new();
        // Ganz unten starten
        for _ in 0..MAX_MOVES {
            cursor.navigate(0);
        }
        for expected_up in 1..=MAX_MOVES {
            assert_eq!(cursor.navigate(bar), Some(Navigation::MovedUp));
            assert_eq!(cursor.moves_up(), expected_up);
        }
        assert_eq!(cursor.stop(), 0);
        assert_eq!(cursor.navigate(bar), Some(Navigation::WrappedToLast));
        assert_eq!(cursor.stop(), 3);
        assert_eq!((cursor.moves_down(), cursor.moves_up()), (3, 0));
    }
}

#[test]
fn test_counters_always_sum_to_max_moves() {
    let mut cursor = MenuCursor::new();
    // Einfacher LCG als deterministische Zufallsfolge
    let mut seed: u32 = 0x1234_5678;
    for _ in 0..10_000 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let bar = (seed >> 16) % 41;
        cursor.navigate(bar);
        assert_eq!(cursor.moves_down() + cursor.moves_up(), MAX_MOVES);
        assert_eq!(cursor.offset(), 12 + 8 * i32::from(cursor.moves_down()));
    }
}

#[test]
fn test_selected_condition_follows_stops() {
    let mut cursor = MenuCursor::new();
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(cursor.selected());
        cursor.navigate(0);
    }
    assert_eq!(seen, Condition::ALL.to_vec());
}

// ============================================================================
// Tests: render_menu()
// ============================================================================

#[test]
fn test_render_menu_layout() {
    let mut display = MockDisplay::new();
    render_menu(&mut display, &MenuCursor::new());

    assert_eq!(display.calls[0], DrawCall::Clear);
    assert!(display.calls.contains(&DrawCall::Text {
        text: "Menu".into(),
        x: 52,
        y: 2,
        scale: 1,
    }));
    assert_eq!(display.last_rect(), Some((2, 11, 120, 19)));

    let labels: Vec<(String, i32)> = display
        .calls
        .iter()
        .filter_map(|call| match call {
            DrawCall::Text { text, x: 6, y, .. } => Some((text.clone(), *y)),
            _ => None,
        })
        .collect();
    assert_eq!(
        labels,
        vec![
            ("Geste erkannt".to_string(), 12),
            ("Uhrzeit erlaubt".to_string(), 20),
            ("Tag erlaubt".to_string(), 28),
            ("Portier".to_string(), 36),
        ]
    );
}

#[test]
fn test_render_menu_refreshes_after_each_draw() {
    let mut display = MockDisplay::new();
    render_menu(&mut display, &MenuCursor::new());

    for (i, call) in display.calls.iter().enumerate() {
        if matches!(call, DrawCall::Text { .. } | DrawCall::Rect { .. }) {
            assert_eq!(display.calls[i + 1], DrawCall::Show);
        }
    }
}

#[test]
fn test_render_menu_rect_follows_cursor() {
    let mut cursor = MenuCursor::new();
    cursor.navigate(40); // auf die letzte Zeile springen
    let mut display = MockDisplay::new();

    render_menu(&mut display, &cursor);

    assert_eq!(display.last_rect(), Some((2, 35, 120, 43)));
}

// ============================================================================
// Tests: AxisSampler
// ============================================================================

#[test]
fn test_read_axis_selects_channel_and_settles() {
    let mut rig = Rig::new();
    rig.analog.push(1234);

    assert_eq!(rig.sampler.read_axis(), 1234);
    assert_eq!(*rig.analog.selected.borrow(), vec![AXIS_CHANNEL]);
    assert_eq!(rig.settle_delay.waits(), vec![2_000]);
}

#[test]
fn test_read_axis_clamps_to_12_bit() {
    let mut rig = Rig::new();
    rig.analog.push(9999);
    assert_eq!(rig.sampler.read_axis(), 4095);
}

#[test]
fn test_read_button_returns_raw_level() {
    let mut rig = Rig::new();
    rig.button.push(PRESSED);
    rig.button.push(RELEASED);

    assert!(!rig.sampler.read_button());
    assert!(rig.sampler.read_button());
}

// ============================================================================
// Tests: serde Feature
// ============================================================================

#[test]
fn test_state_types_are_serializable() {
    fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}

    assert_serde::<Condition>();
    assert_serde::<ConditionSet>();
    assert_serde::<MenuCursor>();
}

#[test]
fn test_cursor_json_restores_valid_position() {
    let mut cursor = MenuCursor::new();
    cursor.navigate(0);
    cursor.navigate(0);

    let mut buffer = [0u8; 64];
    let len = serde_json_core::to_slice(&cursor, &mut buffer).unwrap();
    let (restored, _) = serde_json_core::from_slice::<MenuCursor>(&buffer[..len]).unwrap();

    assert_eq!(restored, cursor);
    assert_eq!(restored.selected(), Condition::AllowedDay);
}

#[test]
fn test_cursor_json_rejects_offset_outside_menu() {
    let result =
        serde_json_core::from_str::<MenuCursor>(r#"{"offset":100,"moves_down":3,"moves_up":3}"#);
    assert!(result.is_err());
}

#[test]
fn test_cursor_json_rejects_counters_not_matching_row() {
    let result =
        serde_json_core::from_str::<MenuCursor>(r#"{"offset":20,"moves_down":0,"moves_up":3}"#);
    assert!(result.is_err());
}
