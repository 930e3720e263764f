use gridline::{
    ArithmeticMeasure, Column, ResizeController, TableWidthState, WidthMeasurer, WidthSpec,
};

/// Two adjustable columns at 200 and 150 px, min 100 each, unbounded max.
fn pair() -> (Vec<Column>, TableWidthState) {
    let columns = vec![
        Column::new("a").adjustable().width(WidthSpec::Px(200)),
        Column::new("b").adjustable().width(WidthSpec::Px(150)),
    ];
    (columns.clone(), measure(650, &columns))
}

fn measure(container: i64, columns: &[Column]) -> TableWidthState {
    let refs: Vec<&Column> = columns.iter().collect();
    WidthMeasurer::new(ArithmeticMeasure, 100, 17)
        .run(container, &refs)
        .expect("fresh inputs should produce a new state")
}

// ============================================================================
// Commit and clamping
// ============================================================================

#[test]
fn test_drag_clamps_to_right_min() {
    // Raw +80 would push the right column to 70, below its minimum of 100;
    // the commit caps at +50.
    let (columns, mut state) = pair();
    let refs: Vec<&Column> = columns.iter().collect();
    let mut resize = ResizeController::new();

    assert!(resize.begin("b", 400, &refs, &state));
    assert_eq!(resize.update(480), Some(50));

    let committed = resize.finish(480, &mut state);
    assert_eq!(committed, Some(50));
    assert_eq!(state.width_of("a"), Some(250));
    assert_eq!(state.width_of("b"), Some(100));
    assert!(!resize.dragging());
}

#[test]
fn test_negative_drag_clamps_to_left_min() {
    let (columns, mut state) = pair();
    let refs: Vec<&Column> = columns.iter().collect();
    let mut resize = ResizeController::new();

    assert!(resize.begin("b", 400, &refs, &state));
    assert_eq!(resize.update(200), Some(-100));

    assert_eq!(resize.finish(200, &mut state), Some(-100));
    assert_eq!(state.width_of("a"), Some(100));
    assert_eq!(state.width_of("b"), Some(250));
}

#[test]
fn test_resize_is_zero_sum() {
    let (columns, mut state) = pair();
    let refs: Vec<&Column> = columns.iter().collect();
    let before = state.total_width();
    let mut resize = ResizeController::new();

    resize.begin("b", 400, &refs, &state);
    resize.update(433);
    resize.finish(433, &mut state);

    assert_eq!(state.total_width(), before);
    let a = state.entry("a").unwrap().adjustment;
    let b = state.entry("b").unwrap().adjustment;
    assert_eq!(a + b, 0);
    assert_ne!(a, 0);
}

#[test]
fn test_dead_zone_discards_jitter() {
    let (columns, mut state) = pair();
    let refs: Vec<&Column> = columns.iter().collect();
    let mut resize = ResizeController::new();

    resize.begin("b", 400, &refs, &state);
    assert_eq!(resize.finish(404, &mut state), None);
    assert_eq!(state.width_of("a"), Some(200));
    assert_eq!(state.width_of("b"), Some(150));

    // Exactly at the threshold still discards; one past it commits.
    resize.begin("b", 400, &refs, &state);
    assert_eq!(resize.finish(405, &mut state), None);
    resize.begin("b", 400, &refs, &state);
    assert_eq!(resize.finish(406, &mut state), Some(6));
}

#[test]
fn test_stacked_drags_respect_original_bounds() {
    // After a commit that parks the right column on its minimum, a second
    // drag in the same direction has no room left.
    let (columns, mut state) = pair();
    let refs: Vec<&Column> = columns.iter().collect();
    let mut resize = ResizeController::new();

    resize.begin("b", 400, &refs, &state);
    resize.finish(450, &mut state);
    assert_eq!(state.width_of("b"), Some(100));

    assert!(resize.begin("b", 400, &refs, &state));
    let (_, max_delta) = resize.session().unwrap().limits();
    assert_eq!(max_delta, 0);
    assert_eq!(resize.finish(480, &mut state), None);
    assert_eq!(state.width_of("b"), Some(100));
}

// ============================================================================
// Pair selection
// ============================================================================

#[test]
fn test_left_neighbor_skips_collapsed_columns() {
    let columns = vec![
        Column::new("a").adjustable().width(WidthSpec::Px(200)),
        Column::new("starved")
            .adjustable()
            .min_width(WidthSpec::Px(10_000)),
        Column::new("c").adjustable().width(WidthSpec::Px(150)),
    ];
    let mut state = measure(650, &columns);
    let refs: Vec<&Column> = columns.iter().collect();
    assert!(state.entry("starved").unwrap().is_collapsed());

    let mut resize = ResizeController::new();
    assert!(resize.begin("c", 400, &refs, &state));
    let session = resize.session().unwrap();
    assert_eq!(session.left, "a");
    assert_eq!(session.right, "c");

    resize.finish(430, &mut state);
    assert_eq!(state.width_of("a"), Some(230));
    assert_eq!(state.width_of("c"), Some(120));
}

#[test]
fn test_non_adjustable_column_refuses_drag() {
    let columns = vec![
        Column::new("a").adjustable().width(WidthSpec::Px(200)),
        Column::new("b").width(WidthSpec::Px(150)),
    ];
    let state = measure(650, &columns);
    let refs: Vec<&Column> = columns.iter().collect();

    let mut resize = ResizeController::new();
    assert!(!resize.begin("b", 400, &refs, &state));
    assert!(!resize.dragging());
}

#[test]
fn test_first_column_has_no_left_neighbor() {
    let (columns, state) = pair();
    let refs: Vec<&Column> = columns.iter().collect();

    let mut resize = ResizeController::new();
    assert!(!resize.begin("a", 400, &refs, &state));
}

#[test]
fn test_unknown_key_is_a_noop() {
    let (columns, mut state) = pair();
    let refs: Vec<&Column> = columns.iter().collect();

    let mut resize = ResizeController::new();
    assert!(!resize.begin("nope", 400, &refs, &state));
    assert!(!resize.dragging());
    assert_eq!(resize.update(500), None);
    assert_eq!(resize.finish(500, &mut state), None);
}

// ============================================================================
// Session lifecycle
// ============================================================================

#[test]
fn test_second_begin_while_dragging_is_refused() {
    let (columns, state) = pair();
    let refs: Vec<&Column> = columns.iter().collect();

    let mut resize = ResizeController::new();
    assert!(resize.begin("b", 400, &refs, &state));
    assert!(!resize.begin("b", 410, &refs, &state));
    assert_eq!(resize.session().unwrap().delta(), 0);
}

#[test]
fn test_abort_discards_without_commit() {
    let (columns, mut state) = pair();
    let refs: Vec<&Column> = columns.iter().collect();

    let mut resize = ResizeController::new();
    resize.begin("b", 400, &refs, &state);
    resize.update(450);
    resize.abort();

    assert!(!resize.dragging());
    assert_eq!(resize.finish(450, &mut state), None);
    assert_eq!(state.width_of("a"), Some(200));
}

#[test]
fn test_preview_does_not_mutate_state() {
    let (columns, state) = pair();
    let refs: Vec<&Column> = columns.iter().collect();

    let mut resize = ResizeController::new();
    resize.begin("b", 400, &refs, &state);
    resize.update(440);

    assert_eq!(state.width_of("a"), Some(200));
    assert_eq!(state.width_of("b"), Some(150));
    assert_eq!(resize.session().unwrap().delta(), 40);
}
