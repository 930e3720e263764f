use gridline::{
    ArithmeticMeasure, Column, MemoryStore, SystemClock, TableConfig, TableLayout, WidthSpec,
};
use gridline_term::{display_width, HeaderBar, PointerEvent, GRIP};

type TermLayout = TableLayout<ArithmeticMeasure, MemoryStore, SystemClock>;

fn layout() -> TermLayout {
    let config = TableConfig::new(vec![
        Column::new("a").adjustable().width(WidthSpec::Px(20)),
        Column::new("b").adjustable().width(WidthSpec::Px(16)),
        Column::new("c").adjustable().width(WidthSpec::Px(6)),
    ])
    .min_col_width(4);

    let mut layout = TableLayout::new(config, ArithmeticMeasure, MemoryStore::default(), SystemClock);
    layout.set_container_width(100);
    layout.refresh();
    layout
}

#[test]
fn test_line_renders_cells_and_grips() {
    let layout = layout();
    let header = HeaderBar::new(0, 0);

    let line = header.line(&layout);
    assert_eq!(display_width(&line), 20 + 1 + 16 + 1 + 6);
    assert_eq!(line.chars().filter(|&c| c == GRIP).count(), 2);
    assert!(line.starts_with("a "));
}

#[test]
fn test_data_line_matches_header_geometry() {
    let layout = layout();
    let header = HeaderBar::new(0, 0);

    let line = header.data_line(&layout, |key| format!("<{key}>"));
    assert_eq!(display_width(&line), display_width(&header.line(&layout)));
    assert!(line.starts_with("<a>"));
}

#[test]
fn test_grip_positions_follow_cumulative_widths() {
    let layout = layout();
    let header = HeaderBar::new(0, 0);

    assert_eq!(header.grip_at(&layout, 20), Some("b".to_string()));
    assert_eq!(header.grip_at(&layout, 37), Some("c".to_string()));
    assert_eq!(header.grip_at(&layout, 5), None);
    assert_eq!(header.grip_at(&layout, 21), None);
}

#[test]
fn test_drag_sequence_commits_through_the_layout() {
    let mut layout = layout();
    let header = HeaderBar::new(0, 0);

    assert!(header.handle(&mut layout, PointerEvent::Down { x: 20, y: 0 }));
    assert!(layout.resizing());
    assert!(header.handle(&mut layout, PointerEvent::Move { x: 26, y: 0 }));
    assert!(header.handle(&mut layout, PointerEvent::Up { x: 26, y: 0 }));

    assert!(!layout.resizing());
    assert_eq!(layout.widths().width_of("a"), Some(26));
    assert_eq!(layout.widths().width_of("b"), Some(10));
    assert_eq!(layout.widths().width_of("c"), Some(6));
}

#[test]
fn test_preview_widths_track_the_drag_without_committing() {
    let mut layout = layout();
    let header = HeaderBar::new(0, 0);

    header.handle(&mut layout, PointerEvent::Down { x: 20, y: 0 });
    header.handle(&mut layout, PointerEvent::Move { x: 26, y: 0 });

    let cells = header.cell_widths(&layout);
    assert_eq!(cells[0], ("a".to_string(), 26));
    assert_eq!(cells[1], ("b".to_string(), 10));

    // The underlying assignment is untouched until release.
    assert_eq!(layout.widths().width_of("a"), Some(20));
    assert_eq!(layout.widths().width_of("b"), Some(16));
}

#[test]
fn test_moving_off_the_header_row_finishes_the_drag() {
    let mut layout = layout();
    let header = HeaderBar::new(0, 0);

    header.handle(&mut layout, PointerEvent::Down { x: 20, y: 0 });
    assert!(header.handle(&mut layout, PointerEvent::Move { x: 30, y: 2 }));

    assert!(!layout.resizing());
    assert_eq!(layout.widths().width_of("a"), Some(30));
    assert_eq!(layout.widths().width_of("b"), Some(6));
}

#[test]
fn test_pointer_down_away_from_grips_is_ignored() {
    let mut layout = layout();
    let header = HeaderBar::new(0, 0);

    assert!(!header.handle(&mut layout, PointerEvent::Down { x: 5, y: 0 }));
    assert!(!header.handle(&mut layout, PointerEvent::Down { x: 20, y: 3 }));
    assert!(!layout.resizing());
}

#[test]
fn test_release_without_drag_is_ignored() {
    let mut layout = layout();
    let header = HeaderBar::new(0, 0);

    assert!(!header.handle(&mut layout, PointerEvent::Up { x: 20, y: 0 }));
    assert!(!header.handle(&mut layout, PointerEvent::Move { x: 22, y: 0 }));
}
