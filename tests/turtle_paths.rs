// tests/turtle_paths.rs
use glam::{Quat, Vec3};
use lindenmayer_turtle::{
    LSystemError, Preset, TurtleCommand, TurtleConfig, TurtleInterpreter, TurtleOp,
};

const EPS: f32 = 1e-4;

fn standard(angle_degrees: f32) -> TurtleInterpreter {
    let mut interpreter = TurtleInterpreter::new(TurtleConfig {
        angle: angle_degrees.to_radians(),
        ..Default::default()
    });
    interpreter.populate_standard_symbols();
    interpreter
}

#[test]
fn test_turn_angle_accumulates() {
    let mut interpreter = standard(60.0);
    interpreter.interpret("+++  ").unwrap();

    let pose = interpreter.pose();
    assert_eq!(pose.position, Vec3::ZERO);
    assert!((pose.rotation.angle_between(Quat::IDENTITY) - std::f32::consts::PI).abs() < EPS);
    assert!(pose.up().abs_diff_eq(Vec3::NEG_Y, EPS));
    assert_eq!(interpreter.segments().count(), 0);
}

#[test]
fn test_koch_curve_path() {
    let config = Preset::KochCurve.complete_config();
    let grammar = config.grammar().unwrap();
    let mut interpreter = config.interpreter();

    // F+F-F-F+F at 90°: a square bump, ending three units up.
    let commands = interpreter.render(&grammar.generate(1).unwrap()).unwrap();
    assert_eq!(commands.len(), 9);
    assert_eq!(interpreter.segments().count(), 5);
    assert!(interpreter.pose().position.abs_diff_eq(Vec3::new(0.0, 3.0, 0.0), EPS));

    let (min, max) = interpreter.bounds();
    assert!(min.abs_diff_eq(Vec3::new(-1.0, 0.0, 0.0), EPS));
    assert!(max.abs_diff_eq(Vec3::new(0.0, 3.0, 0.0), EPS));
}

#[test]
fn test_sierpinski_segments_have_unit_length() {
    let config = Preset::SierpinskiTriangle.config();
    let grammar = config.grammar().unwrap();
    let mut interpreter = config.interpreter();
    interpreter.render(&grammar.generate(3).unwrap()).unwrap();

    assert_eq!(interpreter.segments().count(), 27);
    for (start, end) in interpreter.segments() {
        assert!(((end.position - start.position).length() - 1.0).abs() < EPS);
    }
}

#[test]
fn test_dragon_curve_segment_count() {
    let config = Preset::DragonCurve.complete_config();
    let grammar = config.grammar().unwrap();
    let mut interpreter = config.interpreter();
    interpreter.render(&grammar.generate(4).unwrap()).unwrap();
    assert_eq!(interpreter.segments().count(), 16);
}

#[test]
fn test_branch_restores_pose() {
    let mut interpreter = standard(25.0);
    let commands = interpreter.interpret("F[+F]F").unwrap().to_vec();

    assert_eq!(commands.len(), 6);
    assert!(matches!(commands[1], TurtleCommand::Push { depth: 1, .. }));
    assert!(matches!(commands[4], TurtleCommand::Pop { depth: 0, .. }));
    assert!(commands[4].pose().position.abs_diff_eq(Vec3::Y, EPS));

    let pose = interpreter.pose();
    assert!(pose.position.abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), EPS));
    assert!(pose.rotation.abs_diff_eq(Quat::IDENTITY, EPS));
    assert_eq!(interpreter.stack_depth(), 0);
}

#[test]
fn test_plant_stack_is_balanced() {
    let config = Preset::SimplePlant.complete_config();
    let grammar = config.grammar().unwrap();
    let mut interpreter = config.interpreter();
    interpreter.render(&grammar.generate(3).unwrap()).unwrap();

    let pushes = interpreter
        .commands()
        .iter()
        .filter(|c| matches!(c, TurtleCommand::Push { .. }))
        .count();
    let pops = interpreter
        .commands()
        .iter()
        .filter(|c| matches!(c, TurtleCommand::Pop { .. }))
        .count();
    assert!(pushes > 0);
    assert_eq!(pushes, pops);
    assert_eq!(interpreter.stack_depth(), 0);
}

#[test]
fn test_pop_on_empty_stack_halts() {
    let mut interpreter = standard(90.0);
    assert_eq!(
        interpreter.interpret("F]F").unwrap_err(),
        LSystemError::StackUnderflow { index: 1 }
    );
    assert!(interpreter.is_halted());
    assert_eq!(interpreter.commands().len(), 1);
    assert_eq!(
        interpreter.interpret("F").unwrap_err(),
        LSystemError::InterpreterHalted
    );

    interpreter.reset();
    assert!(!interpreter.is_halted());
    assert!(interpreter.commands().is_empty());
    assert_eq!(interpreter.pose().position, Vec3::ZERO);
    assert_eq!(interpreter.interpret("F").unwrap().len(), 1);
}

#[test]
fn test_push_beyond_max_depth() {
    let mut interpreter = TurtleInterpreter::new(TurtleConfig {
        max_stack_depth: 2,
        ..Default::default()
    });
    interpreter.set_op('[', TurtleOp::Push);
    assert_eq!(
        interpreter.interpret("[[[").unwrap_err(),
        LSystemError::StackOverflow { index: 2, depth: 2 }
    );
    assert_eq!(interpreter.stack_depth(), 2);
}

#[test]
fn test_unmapped_symbols_are_ignored() {
    let mut interpreter = standard(90.0);
    assert!(interpreter.interpret("XYZ").unwrap().is_empty());
    assert_eq!(interpreter.op('X'), TurtleOp::Ignore);
    assert_eq!(interpreter.pose().position, Vec3::ZERO);
}

#[test]
fn test_interpret_continues_from_current_pose() {
    let mut interpreter = standard(90.0);
    interpreter.interpret("FF").unwrap();
    let second = interpreter.interpret("F").unwrap();
    assert_eq!(second.len(), 1);
    assert!(second[0].pose().position.abs_diff_eq(Vec3::new(0.0, 3.0, 0.0), EPS));
    assert_eq!(interpreter.commands().len(), 3);

    interpreter.render("F").unwrap();
    assert_eq!(interpreter.commands().len(), 1);
}

#[test]
fn test_scale_shortens_steps() {
    let mut interpreter = standard(90.0);
    interpreter.interpret("!F").unwrap();
    assert!(interpreter.pose().position.abs_diff_eq(Vec3::new(0.0, 0.5, 0.0), EPS));
    assert!(interpreter.pose().scale.abs_diff_eq(Vec3::splat(0.5), EPS));
}

#[test]
fn test_move_does_not_draw() {
    let mut interpreter = standard(90.0);
    interpreter.interpret("fF").unwrap();
    assert_eq!(interpreter.segments().count(), 1);
    let (start, _) = interpreter.segments().next().unwrap();
    assert!(start.position.abs_diff_eq(Vec3::Y, EPS));
}

#[test]
fn test_pitch_and_roll_reorient_local_axes() {
    let mut interpreter = standard(90.0);
    interpreter.interpret("&F").unwrap();

    let pose = *interpreter.pose();
    assert!(pose.up().abs_diff_eq(Vec3::Z, EPS));
    assert!(pose.forward().abs_diff_eq(Vec3::NEG_Y, EPS));
    assert!(pose.right().abs_diff_eq(Vec3::X, EPS));
    assert!(pose.position.abs_diff_eq(Vec3::Z, EPS));

    interpreter.render("\\\\").unwrap();
    let pose = interpreter.pose();
    assert!(pose.up().abs_diff_eq(Vec3::Y, EPS));
    assert!(pose.right().abs_diff_eq(Vec3::NEG_X, EPS));
    assert!(pose.forward().abs_diff_eq(Vec3::NEG_Z, EPS));
}
