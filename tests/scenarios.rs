use std::time::Duration;

use firedecor::interact::DecorationAction;
use firedecor::layout::area::{AreaKind, Capabilities};
use firedecor::types::{Edges, Point, Rectangle, Size};
use firedecor::{
    parse_border, BorderSize, Decoration, InputEvent, ManualScheduler, ThemeConfig, TitleMetrics,
};

fn decoration(layout: &str, border: &str, size: Size) -> (Decoration<ThemeConfig, ManualScheduler>, ManualScheduler) {
    let theme = ThemeConfig::builder()
        .layout(layout)
        .border_size(border)
        .finish()
        .expect("invalid theme");

    let sched = ManualScheduler::new();
    let mut deco = Decoration::new(theme, sched.clone()).expect("invalid theme");
    deco.set_title(TitleMetrics::new(Size::new(60, 14)));
    deco.resize(size);
    (deco, sched)
}

fn click(deco: &mut Decoration<ThemeConfig, ManualScheduler>, x: i32, y: i32) -> DecorationAction {
    deco.handle_event(InputEvent::PointerMotion { x, y });
    deco.handle_event(InputEvent::PointerButton { pressed: true });
    deco.handle_event(InputEvent::PointerButton { pressed: false }).action
}

#[test]
fn border_shorthands() {
    assert_eq!(parse_border("5"), BorderSize::new(5, 5, 5, 5));
    assert_eq!(parse_border("5 10"), BorderSize::new(5, 10, 10, 10));
    assert_eq!(parse_border("5 10 15 20"), BorderSize::new(5, 10, 15, 20));
    assert_eq!(parse_border("5 10 15"), BorderSize::new(5, 5, 5, 5));
    assert_eq!(parse_border("5 x"), BorderSize::zeroed());
    assert_eq!(parse_border(""), BorderSize::zeroed());
}

#[test_log::test]
fn top_segment_scenario() {
    let (deco, _) = decoration("| title | close", "4", Size::new(200, 40));
    let areas = deco.layout().interactive_areas();

    let declared: Vec<_> = areas
        .iter()
        .filter(|a| !matches!(a.kind(), AreaKind::Move | AreaKind::ResizeEdge(_)))
        .collect();
    assert_eq!(declared.len(), 2);
    assert_eq!(declared[0].kind(), AreaKind::Title);
    assert_eq!(declared[0].geometry().point.x, (200 - 60) / 2);
    assert_eq!(declared[1].geometry().point.x, 200 - 18);

    // a 4px border is all grip, leaving no room for move strips
    let grips: Vec<Rectangle> = areas[2..].iter().map(|a| a.geometry()).collect();
    assert_eq!(
        grips,
        vec![
            Rectangle::new(0, 0, 200, 4),
            Rectangle::new(0, 0, 4, 40),
            Rectangle::new(0, 36, 200, 4),
            Rectangle::new(196, 0, 4, 40),
        ]
    );
}

#[test]
fn thick_border_has_all_strips() {
    let (deco, _) = decoration("| title | close - icon - icon - icon", "20", Size::new(200, 100));
    let areas = deco.layout().interactive_areas();

    let moves = areas.iter().filter(|a| a.kind() == AreaKind::Move).count();
    let grips = areas
        .iter()
        .filter(|a| a.kind().has(Capabilities::RESIZABLE))
        .count();
    assert_eq!((moves, grips), (4, 4));

    // declared areas come first, then move strips, then grips
    let first_move = areas.iter().position(|a| a.kind() == AreaKind::Move).unwrap();
    let first_grip = areas
        .iter()
        .position(|a| matches!(a.kind(), AreaKind::ResizeEdge(_)))
        .unwrap();
    assert_eq!(first_move, 5);
    assert_eq!(first_grip, 9);

    // the slack between grip and content moves the window
    let strip = deco.layout().find_area_at(Point::new(10, 50)).unwrap();
    assert_eq!(strip.kind(), AreaKind::Move);
}

#[test_log::test]
fn grips_leave_room_for_content_on_every_edge() {
    let (deco, _) = decoration("| title |", "20", Size::new(200, 100));
    let layout = deco.layout();

    // only the top edge holds anything, yet every grip stops at 20 - 20 -> 7px
    let grips: Vec<Rectangle> = layout
        .interactive_areas()
        .iter()
        .filter(|a| matches!(a.kind(), AreaKind::ResizeEdge(_)))
        .map(|a| a.geometry())
        .collect();
    assert_eq!(
        grips,
        vec![
            Rectangle::new(0, 0, 200, 7),
            Rectangle::new(0, 0, 7, 100),
            Rectangle::new(0, 93, 200, 7),
            Rectangle::new(193, 0, 7, 100),
        ]
    );

    let left = layout.find_area_at(Point::new(10, 50)).unwrap();
    assert_eq!(left.kind(), AreaKind::Move);
    assert_eq!(left.geometry(), Rectangle::new(7, 20, 13, 60));
    assert_eq!(layout.find_area_at(Point::new(3, 50)).unwrap().kind(), AreaKind::ResizeEdge(Edges::LEFT));
}

#[test]
fn oversized_theme_values_do_not_panic() {
    let (mut deco, _) = decoration("P2147483647 P1 title - a P99999 A | icon", "2147483647", Size::new(200, 100));
    assert_eq!(deco.border(), BorderSize::uniform(firedecor::types::MAX_LENGTH));

    deco.handle_event(InputEvent::PointerMotion { x: 10, y: 10 });
    deco.handle_event(InputEvent::PointerButton { pressed: true });
    deco.handle_event(InputEvent::PointerButton { pressed: false });
    let _ = deco.region();

    let (deco, _) = decoration(&"P32768 ".repeat(70_000), "30 4", Size::new(200, 100));
    assert_eq!(deco.layout().background_areas().len(), 4);
}

#[test]
fn rebuilds_are_deterministic() {
    let (mut deco, _) = decoration("a | icon p title | minimize p maximize p close a", "30 4", Size::new(640, 480));
    let first = deco.layout().clone();

    deco.resize(Size::new(640, 480));
    assert_eq!(deco.layout(), &first);
}

#[test]
fn buttons_beat_grips_and_corners_combine() {
    let (deco, _) = decoration("| title | close", "4", Size::new(200, 40));

    let at = Point::new(198, 1);
    assert!(deco.layout().find_area_at(at).unwrap().kind().has(Capabilities::RENDERABLE));
    assert_eq!(
        deco.layout().calculate_resize_edges(at),
        Edges::TOP | Edges::RIGHT
    );
    assert_eq!(
        deco.layout().calculate_resize_edges(Point::new(0, 0)),
        Edges::TOP | Edges::LEFT
    );
}

#[test_log::test]
fn click_move_and_double_click() {
    let (mut deco, sched) = decoration("| title | close", "30 4", Size::new(200, 100));

    assert_eq!(click(&mut deco, 100, 12), DecorationAction::None);
    sched.advance(Duration::from_millis(100));
    assert_eq!(click(&mut deco, 100, 12), DecorationAction::ToggleMaximize);

    sched.advance(Duration::from_secs(1));
    assert_eq!(click(&mut deco, 100, 12), DecorationAction::None);
    sched.advance(Duration::from_millis(400));
    assert_eq!(click(&mut deco, 100, 12), DecorationAction::None);

    sched.advance(Duration::from_secs(1));
    deco.handle_event(InputEvent::PointerButton { pressed: true });
    let moved = deco.handle_event(InputEvent::PointerMotion { x: 104, y: 12 });
    assert_eq!(moved.action, DecorationAction::Move);

    // the drag still opened the double click window
    deco.handle_event(InputEvent::PointerButton { pressed: false });
    sched.advance(Duration::from_millis(100));
    assert_eq!(click(&mut deco, 104, 12), DecorationAction::ToggleMaximize);
}

#[test]
fn button_click_and_cancel() {
    let (mut deco, _) = decoration("| title | close", "30 4", Size::new(200, 100));

    assert_eq!(click(&mut deco, 190, 12), DecorationAction::Close);

    deco.handle_event(InputEvent::PointerMotion { x: 190, y: 12 });
    deco.handle_event(InputEvent::PointerButton { pressed: true });
    deco.handle_event(InputEvent::PointerMotion { x: 100, y: 60 });
    let response = deco.handle_event(InputEvent::PointerButton { pressed: false });
    assert_eq!(response.action, DecorationAction::None);
}

#[test]
fn resize_on_press() {
    let (mut deco, _) = decoration("| title | close", "30 4", Size::new(200, 100));

    deco.handle_event(InputEvent::PointerMotion { x: 199, y: 99 });
    let response = deco.handle_event(InputEvent::PointerButton { pressed: true });

    assert_eq!(response.action, DecorationAction::Resize);
    assert_eq!(response.edges, Edges::BOTTOM | Edges::RIGHT);
    assert_eq!(deco.interaction().cursor().name(), "bottom_right_corner");
}
