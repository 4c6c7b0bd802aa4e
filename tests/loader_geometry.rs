use bevy::prelude::*;

use bouncy_balls_loader::loader::animation::{axis_and_travel, bounce_animations, Axis};
use bouncy_balls_loader::loader::geometry::{build_balls, required_width, try_build_balls};
use bouncy_balls_loader::rendering::palette::{
    DEMO_COLORS, SYSTEM_BLUE, SYSTEM_GRAY, SYSTEM_GREEN, SYSTEM_RED, SYSTEM_YELLOW,
};
use bouncy_balls_loader::{BouncyBallsLoader, Direction, Properties, Style};

fn demo_properties(direction: Direction) -> Properties {
    Properties::new(4, 8.0, DEMO_COLORS.to_vec(), direction, 0.5)
}

#[test]
fn four_balls_in_hundred_wide_frame() {
    let props = demo_properties(Direction::Right);
    assert_eq!(required_width(&props, &Style::DEFAULT), 88.0);
    let balls = build_balls(Rect::new(0.0, 0.0, 100.0, 16.0), &props, &Style::DEFAULT);
    let xs: Vec<f32> = balls.iter().map(|b| b.center.x).collect();
    assert_eq!(xs, vec![12.5, 37.5, 62.5, 87.5]);
    assert!(balls.iter().all(|b| b.center.y == 8.0 && b.radius == 8.0));
    let colors: Vec<Color> = balls.iter().map(|b| b.color).collect();
    assert_eq!(colors, vec![SYSTEM_BLUE, SYSTEM_RED, SYSTEM_YELLOW, SYSTEM_GREEN]);
}

#[test]
#[should_panic(expected = "balls overlap")]
fn eighty_wide_frame_fails_fast() {
    let props = demo_properties(Direction::Right);
    let _ = build_balls(Rect::new(0.0, 0.0, 80.0, 16.0), &props, &Style::DEFAULT);
}

#[test]
fn centers_evenly_spaced_for_many_configs() {
    for n in 1..=9usize {
        for r in [1.0f32, 3.5, 10.0] {
            let props = Properties::new(n, r, Vec::new(), Direction::Up, 0.4);
            let width = required_width(&props, &Style::DEFAULT) + 17.0;
            let balls = try_build_balls(Rect::new(0.0, 0.0, width, 2.0 * r), &props, &Style::DEFAULT)
                .expect("feasible");
            assert_eq!(balls.len(), n);
            let slot = width / n as f32;
            for pair in balls.windows(2) {
                let gap = pair[1].center.x - pair[0].center.x;
                assert!((gap - slot).abs() < 1e-3, "n={n} r={r}: gap {gap} != {slot}");
                // no overlap
                assert!(gap >= 2.0 * r);
            }
        }
    }
}

#[test]
fn row_layout_ignores_direction() {
    let bounds = Rect::new(0.0, 0.0, 120.0, 30.0);
    let reference = build_balls(bounds, &demo_properties(Direction::Right), &Style::DEFAULT);
    for direction in Direction::ALL {
        let balls = build_balls(bounds, &demo_properties(direction), &Style::DEFAULT);
        let centers: Vec<Vec2> = balls.iter().map(|b| b.center).collect();
        let expected: Vec<Vec2> = reference.iter().map(|b| b.center).collect();
        assert_eq!(centers, expected, "{direction:?}");
    }
}

#[test]
fn extra_balls_fall_back_to_gray() {
    let props = Properties::new(6, 5.0, vec![SYSTEM_RED, SYSTEM_GREEN], Direction::Down, 0.5);
    let width = required_width(&props, &Style::DEFAULT);
    let balls = build_balls(Rect::new(0.0, 0.0, width, 10.0), &props, &Style::DEFAULT);
    assert_eq!(balls[0].color, SYSTEM_RED);
    assert_eq!(balls[1].color, SYSTEM_GREEN);
    assert!(balls[2..].iter().all(|b| b.color == SYSTEM_GRAY));
}

#[test]
fn optimal_size_has_no_slack() {
    let loader = BouncyBallsLoader::new(demo_properties(Direction::Up));
    assert_eq!(loader.optimal_size(), Vec2::new(88.0, 16.0));
    let single = BouncyBallsLoader::new(Properties::new(1, 3.0, Vec::new(), Direction::Up, 1.0));
    assert_eq!(single.optimal_size(), Vec2::new(6.0, 6.0));
    // the optimal size is itself a feasible frame
    let size = loader.optimal_size();
    assert!(try_build_balls(
        Rect::from_corners(Vec2::ZERO, size),
        loader.properties(),
        loader.style()
    )
    .is_ok());
}

#[test]
fn direction_maps_to_axis_and_sign() {
    let style = Style::DEFAULT;
    assert_eq!(axis_and_travel(Direction::Up, &style), (Axis::Y, -20.0));
    assert_eq!(axis_and_travel(Direction::Down, &style), (Axis::Y, 20.0));
    assert_eq!(axis_and_travel(Direction::Left, &style), (Axis::X, -20.0));
    assert_eq!(axis_and_travel(Direction::Right, &style), (Axis::X, 20.0));
}

#[test]
fn stagger_grows_by_fixed_delay() {
    let props = Properties::new(7, 4.0, Vec::new(), Direction::Left, 0.3);
    let anims = bounce_animations(&props, &Style::DEFAULT);
    assert_eq!(anims.len(), 7);
    for (i, a) in anims.iter().enumerate() {
        let expected = i as f32 * Style::DEFAULT.animation_delay;
        assert!((a.begin_delay - anims[0].begin_delay - expected).abs() < 1e-6);
        assert!(a.autoreverses);
        assert_eq!(a.duration, 0.3);
        assert_eq!(a.axis, Axis::X);
        assert_eq!(a.final_value, -20.0);
    }
}
