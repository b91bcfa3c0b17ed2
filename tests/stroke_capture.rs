use egui::{Pos2, Rect, Vec2};
use signature_pad::{
    InputEvent, InputHandler, PathCommand, Sample, SignatureConfig, SignatureController,
    SignaturePath, Smoothing, curve,
};

fn create_controller() -> SignatureController {
    let mut controller = SignatureController::new(SignatureConfig::default(), |_| {}, || {});
    controller.set_bounds(Rect::from_min_size(Pos2::ZERO, Vec2::new(300.0, 300.0)));
    controller
}

fn move_to(controller: &mut SignatureController, x: f32, y: f32) -> Option<Sample> {
    controller.handle_event(&InputEvent::PointerMove {
        position: Pos2::new(x, y),
    })
}

#[test]
fn test_moves_past_threshold_are_all_recorded() {
    let mut controller = create_controller();

    // Each move lands further from the previous one than the threshold
    let mut x = 0.0;
    for i in 0..40 {
        x += 1.6 + i as f32 * 0.1;
        assert_eq!(move_to(&mut controller, x, 10.0), Some(Sample::Recorded));
    }

    assert_eq!(controller.path().len(), 40);
}

#[test]
fn test_jitter_below_threshold_is_dropped() {
    let mut controller = create_controller();
    move_to(&mut controller, 100.0, 100.0);

    for (dx, dy) in [(0.5, 0.5), (-1.0, 0.0), (0.0, 1.2), (1.0, -1.0)] {
        assert_eq!(
            move_to(&mut controller, 100.0 + dx, 100.0 + dy),
            Some(Sample::Filtered)
        );
    }

    assert_eq!(controller.path().len(), 1);
}

#[test]
fn test_leaving_the_surface_splits_the_stroke() {
    let mut controller = create_controller();
    move_to(&mut controller, 280.0, 50.0);
    move_to(&mut controller, 290.0, 50.0);
    assert_eq!(move_to(&mut controller, 320.0, 50.0), Some(Sample::OutOfBounds));
    assert_eq!(move_to(&mut controller, 330.0, 50.0), Some(Sample::OutOfBounds));
    move_to(&mut controller, 295.0, 60.0);
    move_to(&mut controller, 280.0, 70.0);

    let path = controller.path();
    assert_eq!(path.len(), 4);
    assert_eq!(path.stroke_count(), 2);

    let vector = controller.vector_path();
    assert_eq!(vector.len(), 4);
    assert_eq!(vector.commands()[2], PathCommand::MoveTo(Pos2::new(295.0, 60.0)));
}

#[test]
fn test_curve_formula_for_three_vertices() {
    let mut path = SignaturePath::new();
    for (x, y) in [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)] {
        path.add_vertex(Pos2::new(x, y));
    }

    let vector = curve::build(&path, Smoothing::Quadratic);
    assert_eq!(
        vector.commands(),
        &[
            PathCommand::MoveTo(Pos2::new(0.0, 0.0)),
            PathCommand::QuadTo {
                ctrl: Pos2::new(0.0, 0.0),
                end: Pos2::new(5.0, 0.0),
            },
            PathCommand::QuadTo {
                ctrl: Pos2::new(10.0, 0.0),
                end: Pos2::new(10.0, 5.0),
            },
        ]
    );
}

#[test]
fn test_double_break_yields_single_move() {
    let mut path = SignaturePath::new();
    path.add_vertex(Pos2::new(0.0, 0.0));
    path.add_vertex(Pos2::new(4.0, 0.0));
    path.add_break();
    path.add_break();
    path.add_vertex(Pos2::new(8.0, 8.0));
    path.add_vertex(Pos2::new(12.0, 8.0));

    let vector = curve::build(&path, Smoothing::Quadratic);
    let moves = vector
        .commands()
        .iter()
        .filter(|c| matches!(c, PathCommand::MoveTo(_)))
        .count();

    assert_eq!(vector.len(), path.len());
    assert_eq!(moves, 2);
    assert_eq!(vector.commands()[2], PathCommand::MoveTo(Pos2::new(8.0, 8.0)));
}

#[test]
fn test_input_handler_feeds_controller() {
    let surface = Rect::from_min_size(Pos2::new(20.0, 40.0), Vec2::new(300.0, 300.0));
    let mut input = InputHandler::new(surface);
    let mut controller = create_controller();

    let frames = [
        (Some(Pos2::new(30.0, 50.0)), false),
        (Some(Pos2::new(40.0, 50.0)), false),
        (Some(Pos2::new(40.0, 50.0)), false),
        (None, true),
        (Some(Pos2::new(60.0, 80.0)), false),
        (Some(Pos2::new(70.0, 80.0)), false),
    ];
    for (pos, released) in frames {
        for event in input.process(pos, released) {
            controller.handle_event(&event);
        }
    }

    let path = controller.path();
    assert_eq!(
        path.vertices(),
        &[
            Pos2::new(10.0, 10.0),
            Pos2::new(20.0, 10.0),
            Pos2::new(40.0, 40.0),
            Pos2::new(50.0, 40.0),
        ]
    );
    assert!(path.is_break(2));
    assert_eq!(path.stroke_count(), 2);
}

#[test]
fn test_clear_always_empties() {
    let mut controller = create_controller();
    controller.clear();
    assert!(controller.is_empty());

    move_to(&mut controller, 5.0, 5.0);
    controller.handle_event(&InputEvent::PointerUp);
    move_to(&mut controller, 50.0, 5.0);
    controller.clear();
    assert!(controller.is_empty());
    assert!(controller.path().breaks().is_empty());
}
