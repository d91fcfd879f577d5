use approx::assert_relative_eq;
use sphere_box::*;

fn make_world(seed: u64) -> World {
    World::new(SimulationConfig::default().with_seed(seed)).expect("default config is valid")
}

fn body(position: Vec3, velocity: Vec3, radius: f32) -> Body {
    Body::new(position, velocity, radius, SurfaceColors::default()).expect("valid radius")
}

#[test]
fn spawned_mass_follows_radius_and_never_changes() {
    let mut world = make_world(1);
    world.populate(25);
    let masses: Vec<f32> = world.bodies().iter().map(Body::mass).collect();
    for b in world.bodies() {
        assert_relative_eq!(
            b.mass(),
            0.3 * b.radius().powi(3) * std::f32::consts::PI,
            max_relative = 1e-6
        );
    }

    for _ in 0..50 {
        world.step(0.02);
    }
    let after: Vec<f32> = world.bodies().iter().map(Body::mass).collect();
    assert_eq!(masses, after);
}

#[test]
fn zero_timestep_is_a_motion_noop() {
    let mut world = make_world(2);
    world.populate(40);
    // Force an overlap and a wall contact to make sure neither reacts to dt = 0.
    world.insert(body(Vec3::new(30.0, 5.0, 0.0), Vec3::new(4.0, 0.0, 0.0), 1.0));
    world.insert(body(Vec3::new(30.5, 5.0, 0.0), Vec3::new(-2.0, 0.0, 0.0), 1.0));
    let before = world.bodies().to_vec();

    world.step(0.0);

    assert_eq!(world.bodies(), before.as_slice());
}

#[test]
fn resting_body_accelerates_downwards() {
    let mut world = make_world(3);
    world.insert(body(Vec3::new(0.0, 20.0, 0.0), Vec3::ZERO, 2.0));

    let mut previous = 0.0_f32;
    for _ in 0..10 {
        world.step(0.01);
        let v = world.body(0).unwrap().velocity;
        assert!(v.y < 0.0, "velocity should point down, got {v:?}");
        assert!(-v.y > previous, "downward speed should grow");
        assert_eq!(v.x, 0.0);
        assert_eq!(v.z, 0.0);
        previous = -v.y;
    }
    // First step: v = -g * dt, drag still zero.
    assert!(previous > 9.8 * 0.01 * 9.0);
}

#[test]
fn wall_contact_flips_only_that_axis() {
    let mut world = make_world(4);
    world.insert(body(Vec3::new(30.0, 10.0, 3.0), Vec3::new(5.0, 0.0, 2.0), 1.0));

    world.step(0.001);

    let v = world.body(0).unwrap().velocity;
    assert!(v.x < 0.0, "x velocity should be reflected, got {}", v.x);
    assert!(v.z > 0.0, "z velocity keeps its sign, got {}", v.z);
    assert!(v.y < 0.0, "gravity still acts on y");
}

#[test]
fn negative_wall_reflects_too() {
    let mut world = make_world(5);
    world.insert(body(Vec3::new(0.0, 10.0, -30.0), Vec3::new(0.0, 0.0, -6.0), 1.0));
    world.step(0.001);
    assert!(world.body(0).unwrap().velocity.z > 0.0);
}

#[test]
fn velocity_is_capped_on_the_overshooting_step() {
    let mut world = make_world(6);
    world.insert(body(Vec3::new(0.0, 10.0, 0.0), Vec3::new(80.0, -80.0, 0.0), 3.0));

    world.step(0.01);

    let v = world.body(0).unwrap().velocity;
    assert_eq!(v.x, 50.0);
    // Only the upper bound is enforced.
    assert!(v.y < -50.0);
}

#[test]
fn settled_body_at_floor_plane_stays_put() {
    let mut world = make_world(7);
    world.insert(body(Vec3::new(4.0, 0.0, -4.0), Vec3::ZERO, 1.0));
    for _ in 0..20 {
        world.step(0.016);
    }
    let b = world.body(0).unwrap();
    assert_eq!(b.position, Vec3::new(4.0, 0.0, -4.0));
    assert_eq!(b.velocity, Vec3::ZERO);
}

#[test]
fn spawn_and_clear_update_count() {
    let mut world = make_world(8);
    assert!(world.is_empty());
    for expected in 1..=5 {
        world.spawn();
        assert_eq!(world.count(), expected);
    }
    world.clear();
    assert_eq!(world.count(), 0);
    world.clear();
    assert_eq!(world.count(), 0);
}

#[test]
fn kinetic_energy_drains_without_walls_or_contacts() {
    let mut config = SimulationConfig::default().with_seed(9);
    config.gravity = 0.0;
    let mut world = World::new(config).unwrap();
    world.insert(body(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 2.0));
    let start = world.total_kinetic_energy();
    for _ in 0..30 {
        world.step(0.01);
    }
    assert!(world.total_kinetic_energy() < start);
}
