use bubbly::{Bubble, BubbleConfig, Mode, NoOpBubbleObserver, PointerEvent, Tick, Vec2};

fn press(id: i32, x: f32, y: f32, t: f32) -> PointerEvent<f32> {
    PointerEvent { pointer_id: id, x, y, time_ms: t }
}

/// Throw the bubble by dragging it 8 px right over one frame, then releasing.
fn throw_right(bubble: &mut Bubble<f32>) {
    let mut obs = NoOpBubbleObserver;
    let p = bubble.position();
    bubble.pointer_down(press(1, p.x, p.y, 0.0), &mut obs);
    bubble.pointer_move(press(1, p.x + 8.0, p.y, 16.0));
    bubble.pointer_up(1, &mut obs);
}

#[test]
fn energy_decay_matches_friction_power() {
    let config = BubbleConfig::new().with_gravity(0.0);
    let mut bubble = Bubble::new_at(config, 2000.0, 600.0, Vec2::new(100.0, 100.0)).unwrap();
    throw_right(&mut bubble);
    assert!((bubble.velocity().x - 8.0).abs() < 1e-4);

    let mut obs = NoOpBubbleObserver;
    for _ in 0..10 {
        bubble.tick(&mut obs);
    }
    // No gravity and no wall contact: |v| = v0 * f^n exactly.
    let expected = 8.0 * 0.98f32.powi(10);
    assert!(
        (bubble.velocity().length() - expected).abs() < 1e-3,
        "speed = {}, expected {}",
        bubble.velocity().length(),
        expected
    );
}

#[test]
fn boundary_containment_over_many_ticks() {
    let mut bubble = Bubble::new_at(
        BubbleConfig::new(),
        400.0,
        300.0,
        Vec2::new(50.0, 50.0),
    )
    .unwrap();
    throw_right(&mut bubble);

    let mut obs = NoOpBubbleObserver;
    let bounds = bubble.bounds();
    for i in 0..500 {
        bubble.tick(&mut obs);
        assert!(
            bounds.contains(bubble.position()),
            "tick {}: position {:?} escaped bounds",
            i,
            bubble.position()
        );
    }
}

#[test]
fn rest_convergence_reaches_idle() {
    let mut bubble = Bubble::new_at(
        BubbleConfig::new(),
        800.0,
        600.0,
        Vec2::new(100.0, 100.0),
    )
    .unwrap();
    throw_right(&mut bubble);

    let mut obs = NoOpBubbleObserver;
    let mut settled_at = None;
    for i in 0..5000 {
        if bubble.tick(&mut obs) == Tick::Settled {
            settled_at = Some(i);
            break;
        }
    }
    assert!(settled_at.is_some(), "bubble never settled");
    assert_eq!(bubble.mode(), Mode::Idle);
    assert_eq!(bubble.velocity(), Vec2::zero());
    assert!(bubble.deformation().is_rest());
    assert!(!bubble.is_active());
}

#[test]
fn idle_tick_is_inert() {
    let mut bubble = Bubble::new(BubbleConfig::new(), 800.0, 600.0).unwrap();
    let before = bubble.position();
    let mut obs = NoOpBubbleObserver;
    assert_eq!(bubble.tick(&mut obs), Tick::Settled);
    assert_eq!(bubble.position(), before);
    assert_eq!(bubble.mode(), Mode::Idle);
}

#[test]
fn degenerate_viewport_pins_bubble() {
    // Viewport smaller than the object plus padding: position pinned at the
    // padding corner, no panic, and ticks keep it there.
    let mut bubble = Bubble::new_at(
        BubbleConfig::new(),
        30.0,
        30.0,
        Vec2::new(200.0, 200.0),
    )
    .unwrap();
    assert_eq!(bubble.position(), Vec2::new(10.0, 10.0));

    throw_right(&mut bubble);
    let mut obs = NoOpBubbleObserver;
    for _ in 0..50 {
        bubble.tick(&mut obs);
        assert_eq!(bubble.position(), Vec2::new(10.0, 10.0));
    }
}

#[test]
fn resize_repairs_position_without_a_tick() {
    let mut bubble = Bubble::new_at(
        BubbleConfig::new(),
        800.0,
        600.0,
        Vec2::new(700.0, 500.0),
    )
    .unwrap();
    // Shrink the viewport: the old position is now out of bounds.
    bubble.set_viewport(400.0, 300.0);
    assert_eq!(bubble.position(), Vec2::new(330.0, 230.0));
    assert_eq!(bubble.mode(), Mode::Idle);
}

#[test]
fn resize_repairs_while_settling() {
    let mut bubble = Bubble::new_at(
        BubbleConfig::new(),
        800.0,
        600.0,
        Vec2::new(700.0, 100.0),
    )
    .unwrap();
    throw_right(&mut bubble);
    assert_eq!(bubble.mode(), Mode::Settling);

    bubble.set_viewport(200.0, 200.0);
    assert!(bubble.bounds().contains(bubble.position()));
    assert_eq!(bubble.mode(), Mode::Settling);
}

#[test]
fn invalid_config_is_rejected() {
    let config: BubbleConfig<f32> = BubbleConfig::new().with_friction(2.0);
    assert!(Bubble::new(config, 800.0, 600.0).is_err());
}
