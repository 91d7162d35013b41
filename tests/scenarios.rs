use jumper::{
    Bounds, Color, Controller, Direction, Frame, Key, Physics, Player, Rect, VerticalState,
};

const GROUND: f32 = 300.0;

fn player(x: f32, y: f32, speed: f32, jump_strength: f32) -> Player {
    Player::new(x, y, 50.0, 50.0, Color::rgb(0xff, 0, 0), speed, jump_strength).unwrap()
}

#[test]
fn walk_right_then_left() {
    let mut p = player(0.0, 0.0, 5.0, 10.0);

    p.move_right();
    for _ in 0..3 {
        p.advance();
    }
    assert_eq!(p.x(), 15.0);

    p.move_left();
    p.advance();
    assert_eq!(p.direction(), Direction::Left);
    assert_eq!(p.x(), 10.0);
}

#[test]
fn jump_and_land() {
    let floor = GROUND - 50.0;
    let mut p = player(0.0, floor, 5.0, 10.0);

    p.jump();
    assert_eq!(p.velocity_y(), -10.0);
    assert!(p.is_jumping());

    p.apply_gravity(GROUND, 1.0);
    assert_eq!(p.velocity_y(), -9.0);
    assert_eq!(p.y(), floor - 9.0);

    let mut frames = 0;
    while p.is_jumping() {
        p.apply_gravity(GROUND, 1.0);
        frames += 1;
        assert!(frames < 100, "Never landed");
    }

    assert_eq!(p.y(), floor);
    assert_eq!(p.velocity_y(), 0.0);
    assert_eq!(p.state(), VerticalState::Grounded);

    // Grounded again, so the next jump works
    p.jump();
    assert_eq!(p.velocity_y(), -10.0);
}

#[test]
fn fractional_gravity_lands_exactly() {
    let floor = GROUND - 50.0;
    let mut p = player(0.0, floor, 5.0, 7.0);
    p.jump();

    let mut frames = 0;
    while p.is_jumping() {
        p.apply_gravity(GROUND, 0.3);
        frames += 1;
        assert!(frames < 1000, "Never landed");
    }

    assert_eq!(p.y(), floor);
    assert_eq!(p.velocity_y(), 0.0);
}

#[test]
fn edge_adjacent_rects() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(10.0, 0.0, 10.0, 10.0);
    assert!(!a.intersects(&b));

    let b = Rect::new(9.0, 0.0, 10.0, 10.0);
    assert!(a.intersects(&b));
}

#[test]
fn player_against_structural_partner() {
    // Any game object exposing a box can be a collision partner
    struct Crate {
        pos: (f32, f32),
    }

    impl Bounds for Crate {
        fn x(&self) -> f32 {
            self.pos.0
        }

        fn y(&self) -> f32 {
            self.pos.1
        }

        fn width(&self) -> f32 {
            20.0
        }

        fn height(&self) -> f32 {
            20.0
        }
    }

    let p = player(0.0, 0.0, 5.0, 10.0);
    assert!(!p.check_collision(&Crate { pos: (50.0, 0.0) }));
    assert!(!p.check_collision(&Crate { pos: (50.0, 50.0) }));
    assert!(p.check_collision(&Crate { pos: (49.5, 49.5) }));
    assert!(p.check_collision(&Crate { pos: (-19.0, 10.0) }));
}

#[test]
fn keyboard_session() {
    let p = player(100.0, GROUND - 50.0, 2.0, 4.0);
    let mut c = Controller::new(p, Physics::new(GROUND, 1.0));

    c.key_down(Key::from("ArrowRight"));
    c.update();
    c.update();
    assert_eq!(c.player().x(), 104.0);

    // Left overrides right while both are held
    c.key_down(Key::from("ArrowLeft"));
    c.update();
    assert_eq!(c.player().x(), 102.0);

    c.key_up(Key::from("ArrowRight"));
    c.update();
    assert_eq!(c.player().x(), 100.0);

    c.key_up(Key::from("ArrowLeft"));
    c.key_down(Key::from("ArrowUp"));
    c.key_down(Key::from("Space"));
    c.update();
    assert_eq!(c.player().x(), 100.0);
    assert_eq!(c.player().state(), VerticalState::Ascending);

    for _ in 0..20 {
        c.update();
    }
    assert_eq!(c.player().state(), VerticalState::Grounded);
    assert_eq!(c.player().y(), GROUND - 50.0);

    let p = c.into_player();
    assert_eq!(p.direction(), Direction::None);
}

#[test]
fn draw_into_frame() {
    const WIDTH: u32 = 64;
    const HEIGHT: u32 = 64;

    let p = Player::new(8.0, 16.0, 4.0, 2.0, "#00ff00".parse().unwrap(), 1.0, 1.0).unwrap();
    let mut buffer = vec![0; (WIDTH * HEIGHT * 4) as usize];
    let mut frame = Frame::new(&mut buffer, WIDTH, HEIGHT).unwrap();
    frame.clear(Color::rgb(0, 0, 0));
    p.draw(&mut frame);

    let green = [0x00, 0xff, 0x00, 0xff];
    assert_eq!(frame.pixel(8, 16), Some(green));
    assert_eq!(frame.pixel(11, 17), Some(green));
    assert_eq!(frame.pixel(12, 17), Some([0, 0, 0, 0xff]));
    assert_eq!(frame.pixel(8, 18), Some([0, 0, 0, 0xff]));
    assert_eq!(frame.pixel(7, 16), Some([0, 0, 0, 0xff]));
}
