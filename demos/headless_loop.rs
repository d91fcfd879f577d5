use sphere_box::*;

fn main() {
    let config = SimulationConfig::default().with_seed(2024);
    let mut app = match SphereBox::new(config, NoopRenderer::new()) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("failed to start: {err}");
            return;
        }
    };

    // Ten seconds at 60 Hz with the space bar held for the first second.
    app.handle(InputEvent::KeyDown(SPACE_KEY));
    for frame in 0..600u32 {
        if frame == 60 {
            app.handle(InputEvent::KeyUp(SPACE_KEY));
        }
        let now_ms = f64::from(frame) * 1000.0 / 60.0;
        let report = app.tick(now_ms);
        if frame % 120 == 0 {
            println!(
                "frame {frame:>3}: dt = {:.4}, {} ({} collisions last step)",
                report.dt,
                app.simulation().count_label(),
                app.simulation().world().last_profile().collision_count
            );
        }
    }

    let world = app.simulation().world();
    println!(
        "drew {} instances over {} frames; kinetic energy now {:.1}",
        app.renderer().instances_drawn,
        app.renderer().frames,
        world.total_kinetic_energy()
    );
}
