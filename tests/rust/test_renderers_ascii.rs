use super::*;

fn make_node(id: &str, label: &str, x: i64, y: i64, w: i64) -> LayoutNode {
    LayoutNode {
        id: id.to_string(),
        label: label.to_string(),
        layer: 0,
        x,
        y,
        width: w,
        height: 3,
    }
}

fn layout(direction: Direction, nodes: Vec<LayoutNode>, edges: &[(&str, &str)]) -> LayoutResult {
    let mut result = LayoutResult::new(direction);
    result.nodes = nodes;
    result.edges = edges
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();
    result
}

#[test]
fn test_render_empty_layout() {
    let renderer = AsciiRenderer::new(true);
    assert!(renderer.render(&LayoutResult::new(Direction::TB)).is_empty());
}

#[test]
fn test_render_single_node_centered_label() {
    let renderer = AsciiRenderer::new(true);
    let result = layout(Direction::LR, vec![make_node("A", "Hi", 0, 0, 8)], &[]);
    assert_eq!(
        renderer.render(&result),
        vec!["┌──────┐", "│  Hi  │", "└──────┘"]
    );
}

#[test]
fn test_label_keeps_minimum_inset() {
    let mut canvas = Canvas::new(10, 3, CharSet::Ascii);
    paint_node(&mut canvas, &make_node("A", "abcdef", 0, 0, 7));
    assert_eq!(canvas.get(1, 1), 'a');
}

#[test]
fn test_render_lr_edge() {
    let renderer = AsciiRenderer::new(true);
    let result = layout(
        Direction::LR,
        vec![
            make_node("A", "Start", 0, 0, 9),
            make_node("B", "End", 15, 0, 7),
        ],
        &[("A", "B")],
    );
    assert_eq!(
        renderer.render(&result),
        vec![
            "┌───────┐      ┌─────┐",
            "│ Start │─────►│ End │",
            "└───────┘      └─────┘",
        ]
    );
}

#[test]
fn test_render_tb_edge_with_bend() {
    let renderer = AsciiRenderer::new(true);
    let result = layout(
        Direction::TB,
        vec![
            make_node("A", "A", 0, 0, 5),
            make_node("B", "B", 0, 6, 5),
            make_node("C", "C", 11, 6, 5),
        ],
        &[("A", "B"), ("A", "C")],
    );
    assert_eq!(
        renderer.render(&result),
        vec![
            "┌───┐",
            "│ A │",
            "└───┘",
            "  │",
            "  ├──────────┐",
            "  ▼          ▼",
            "┌───┐      ┌───┐",
            "│ B │      │ C │",
            "└───┘      └───┘",
        ]
    );
}

#[test]
fn test_render_wide_label_keeps_border_aligned() {
    let renderer = AsciiRenderer::new(true);
    let result = layout(
        Direction::LR,
        vec![
            make_node("A", "日本語", 0, 0, 10),
            make_node("B", "End", 16, 0, 7),
        ],
        &[("A", "B")],
    );
    assert_eq!(
        renderer.render(&result),
        vec![
            "┌────────┐      ┌─────┐",
            "│ 日本語 │─────►│ End │",
            "└────────┘      └─────┘",
        ]
    );
}

#[test]
fn test_skip_layer_edge_keeps_arrowhead_it_crosses() {
    let renderer = AsciiRenderer::new(true);
    let mut nodes = vec![
        make_node("A", "A", 0, 0, 5),
        make_node("B", "B", 0, 6, 5),
        make_node("C", "C", 0, 12, 5),
    ];
    nodes[1].layer = 1;
    nodes[2].layer = 2;
    let result = layout(Direction::TB, nodes, &[("A", "B"), ("A", "C")]);
    assert_eq!(
        renderer.render(&result),
        vec![
            "┌───┐", "│ A │", "└───┘", "  │", "  │", "  ▼", "┌───┐", "│ B │", "└───┘", "  │",
            "  │", "  ▼", "┌───┐", "│ C │", "└───┘",
        ]
    );
}

#[test]
fn test_render_ascii_charset() {
    let renderer = AsciiRenderer::new(false);
    let result = layout(
        Direction::RL,
        vec![make_node("B", "B", 0, 0, 5), make_node("A", "A", 11, 0, 5)],
        &[("A", "B")],
    );
    assert_eq!(
        renderer.render(&result),
        vec!["+---+      +---+", "| B |<-----| A |", "+---+      +---+"]
    );
}

#[test]
fn test_render_bt_arrow_points_up() {
    let renderer = AsciiRenderer::new(true);
    let result = layout(
        Direction::BT,
        vec![make_node("B", "B", 0, 0, 5), make_node("A", "A", 0, 6, 5)],
        &[("A", "B")],
    );
    let rows = renderer.render(&result);
    assert_eq!(rows[3], "  ▲");
    assert_eq!(rows[4], "  │");
    assert_eq!(rows[5], "  │");
}

#[test]
fn test_edge_to_unplaced_node_is_skipped() {
    let renderer = AsciiRenderer::new(true);
    let result = layout(
        Direction::LR,
        vec![make_node("A", "A", 0, 0, 5)],
        &[("A", "ghost"), ("ghost", "A")],
    );
    assert_eq!(renderer.render(&result), vec!["┌───┐", "│ A │", "└───┘"]);
}

#[test]
fn test_edge_route_lr() {
    let a = make_node("A", "Start", 0, 0, 9);
    let b = make_node("B", "End", 15, 6, 7);
    assert_eq!(
        edge_route(Direction::LR, &a, &b),
        [(9, 1), (11, 1), (11, 7), (14, 7)]
    );
}

#[test]
fn test_route_cells_are_contiguous() {
    let cells = route_cells(&[(0, 0), (2, 0), (2, 2), (4, 2)]);
    assert_eq!(cells.len(), 7);
    for pair in cells.windows(2) {
        let (dx, dy) = (pair[1].0 - pair[0].0, pair[1].1 - pair[0].1);
        assert_eq!(dx.abs() + dy.abs(), 1);
    }
}

#[test]
fn test_canvas_dimensions_include_margin() {
    let nodes = vec![make_node("A", "A", 0, 0, 5), make_node("B", "B", 11, 6, 5)];
    assert_eq!(canvas_dimensions(&nodes), (16 + MARGIN as usize, 9 + MARGIN as usize));
}
