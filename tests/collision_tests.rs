use sphere_box::*;

fn body(position: Vec3, velocity: Vec3, radius: f32) -> Body {
    Body::new(position, velocity, radius, SurfaceColors::default()).expect("valid radius")
}

fn world_with(bodies: Vec<Body>) -> World {
    World::with_bodies(SimulationConfig::default().with_seed(0), bodies).unwrap()
}

#[test]
fn overlapping_pair_swaps_after_integration() {
    let dt = 0.01;
    let a = body(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0), 1.0);
    let b = body(Vec3::new(1.5, 0.0, 0.0), Vec3::new(-3.0, 0.0, 0.0), 1.0);

    // What each body would look like after integration alone.
    let mut integrated = vec![a.clone(), b.clone()];
    Integrator::default().step(&ForceModel::default(), &mut integrated, dt);

    let mut world = world_with(vec![a, b]);
    assert_eq!(world.overlapping_pairs(), vec![OverlapPair { a: 0, b: 1 }]);
    world.step(dt);

    assert_eq!(world.body(0).unwrap().velocity, integrated[1].velocity);
    assert_eq!(world.body(1).unwrap().velocity, integrated[0].velocity);
    assert!(world.body(0).unwrap().velocity.x < 0.0);
    assert!(world.body(1).unwrap().velocity.x > 0.0);
    assert_eq!(world.last_profile().collision_count, 1);
}

#[test]
fn exact_swap_without_forces() {
    let mut config = SimulationConfig::default().with_seed(0);
    config.gravity = 0.0;
    config.friction_factor = 0.0;
    let v1 = Vec3::new(1.0, 2.0, 3.0);
    let v2 = Vec3::new(-4.0, 0.5, 6.0);
    let bodies = vec![
        body(Vec3::new(0.0, 5.0, 0.0), v1, 1.0),
        body(Vec3::new(0.0, 6.0, 0.0), v2, 0.5),
    ];
    let mut world = World::with_bodies(config, bodies).unwrap();

    world.step(0.001);

    assert_eq!(world.body(0).unwrap().velocity, v2);
    assert_eq!(world.body(1).unwrap().velocity, v1);
}

#[test]
fn distant_bodies_keep_their_velocities() {
    let mut config = SimulationConfig::default().with_seed(0);
    config.gravity = 0.0;
    config.friction_factor = 0.0;
    let bodies = vec![
        body(Vec3::new(-10.0, 5.0, 0.0), Vec3::X, 1.0),
        body(Vec3::new(10.0, 5.0, 0.0), Vec3::NEG_X, 1.0),
    ];
    let mut world = World::with_bodies(config, bodies).unwrap();
    world.step(0.01);
    assert_eq!(world.body(0).unwrap().velocity, Vec3::X);
    assert_eq!(world.last_profile().collision_count, 0);
}

#[test]
fn three_way_overlap_is_resolved_in_scan_order() {
    let mut config = SimulationConfig::default().with_seed(0);
    config.gravity = 0.0;
    config.friction_factor = 0.0;
    let bodies = vec![
        body(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 0.0, 1.0), 1.0),
        body(Vec3::new(0.5, 5.0, 0.0), Vec3::new(0.0, 0.0, 2.0), 1.0),
        body(Vec3::new(1.0, 5.0, 0.0), Vec3::new(0.0, 0.0, 3.0), 1.0),
    ];
    let mut world = World::with_bodies(config, bodies).unwrap();

    world.step(0.001);

    let vz: Vec<f32> = world.bodies().iter().map(|b| b.velocity.z).collect();
    assert_eq!(vz, vec![3.0, 2.0, 1.0]);
    assert_eq!(world.last_profile().collision_count, 3);
}
