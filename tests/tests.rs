use planetsim::simulation::engine::Simulation;
use planetsim::simulation::error::SimulationError;
use planetsim::simulation::forces::Gravity;
use planetsim::simulation::integrator::verlet_step;
use planetsim::simulation::params::Parameters;
use planetsim::simulation::scenario::Scenario;
use planetsim::simulation::states::{Body, Color, NVec2, System};
use planetsim::view::camera::Camera;
use planetsim::view::controller::{Command, ViewController};

/// Build a simple two-body system separated along the x axis, neither anchored
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    let b1 = Body::new(
        "left",
        Color::new(255, 255, 255),
        NVec2::new(-dist / 2.0, 0.0),
        NVec2::zeros(),
        m1,
        0.0,
    );
    let b2 = Body::new(
        "right",
        Color::new(255, 255, 255),
        NVec2::new(dist / 2.0, 0.0),
        NVec2::zeros(),
        m2,
        0.0,
    );
    System::new(vec![b1, b2])
}

/// Anchor of mass `m_anchor` at the origin plus one orbiter at x = -r with
/// tangential velocity v_y
pub fn anchored_system(m_anchor: f64, m_orbiter: f64, r: f64, v_y: f64) -> System {
    let anchor = Body::new(
        "star",
        Color::new(255, 204, 0),
        NVec2::zeros(),
        NVec2::zeros(),
        m_anchor,
        0.0,
    )
    .anchored();
    let orbiter = Body::new(
        "planet",
        Color::new(0, 102, 255),
        NVec2::new(-r, 0.0),
        NVec2::new(0.0, v_y),
        m_orbiter,
        0.0,
    );
    System::new(vec![anchor, orbiter])
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters::default()
}

pub fn gravity(p: &Parameters) -> Gravity {
    Gravity { g: p.g }
}

/// Total mechanical energy of a two-body system
fn total_energy(sys: &System, g: f64) -> f64 {
    let kinetic: f64 = sys
        .bodies
        .iter()
        .map(|b| 0.5 * b.m * b.v.norm_squared())
        .sum();
    let (a, b) = (&sys.bodies[0], &sys.bodies[1]);
    let potential = -g * a.m * b.m / (b.x - a.x).norm();
    kinetic + potential
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1.0e11, 2.0e24, 3.0e24);
    let p = test_params();
    let forces = gravity(&p);

    let (a1, _) = forces.acceleration_on(&sys.bodies, 0).unwrap();
    let (a2, _) = forces.acceleration_on(&sys.bodies, 1).unwrap();

    let net = a1 * sys.bodies[0].m + a2 * sys.bodies[1].m;

    assert!(net.norm() < 1e-12, "Net force not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let sys = two_body_system(2.0e11, 1.0e24, 1.0e24);
    let p = test_params();
    let forces = gravity(&p);

    let dx = sys.bodies[1].x - sys.bodies[0].x;
    let (a1, _) = forces.acceleration_on(&sys.bodies, 0).unwrap();

    assert!(dx.norm() > 0.0);
    assert!(a1.dot(&dx) > 0.0, "Acceleration is not toward second body");
}

#[test]
fn gravity_inverse_square_law() {
    let sys_r = two_body_system(1.0e11, 1.0e24, 1.0e24);
    let sys_2r = two_body_system(2.0e11, 1.0e24, 1.0e24);
    let p = test_params();
    let forces = gravity(&p);

    let (a_r, _) = forces.acceleration_on(&sys_r.bodies, 0).unwrap();
    let (a_2r, _) = forces.acceleration_on(&sys_2r.bodies, 0).unwrap();

    let ratio = a_r.norm() / a_2r.norm();

    assert!((ratio - 4.0).abs() < 1e-9, "Expected ~4x, got {}", ratio);
}

#[test]
fn gravity_caches_anchor_distance() {
    let mut sys = anchored_system(1.0e30, 1.0e24, 1.0e11, 3.0e4);
    let p = test_params();
    let forces = gravity(&p);

    forces.accumulate_accels(&mut sys).unwrap();

    assert!(
        (sys.bodies[1].distance_to_anchor - 1.0e11).abs() < 1.0,
        "cached distance should match the separation"
    );
    // Anchor keeps zero acceleration; it is only a source
    assert_eq!(sys.bodies[0].a, NVec2::zeros());
}

#[test]
fn gravity_coincident_bodies_is_a_named_error() {
    let sys = two_body_system(0.0, 1.0e24, 1.0e24);
    let p = test_params();
    let forces = gravity(&p);

    let err = forces.acceleration_on(&sys.bodies, 0).unwrap_err();
    match err {
        SimulationError::CoincidentBodies { first, second, .. } => {
            assert_eq!(first, "left");
            assert_eq!(second, "right");
        }
        other => panic!("expected CoincidentBodies, got {other:?}"),
    }
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn first_tick_is_ballistic_drift() {
    // Anchor 1.0e30 at origin; orbiter 1.0e24 at x = -1.0e11 with
    // v_y = 3.0e4. At multiplier 1.0 and an 86400 s timestep the first
    // position update sees a = 0, so y lands exactly at v_y * dt.
    let sys = anchored_system(1.0e30, 1.0e24, 1.0e11, 3.0e4);
    let mut params = test_params();
    params.base_timestep = 86400.0;

    let mut sim = Simulation::new(sys, params);
    sim.tick().unwrap();

    assert_eq!(sim.bodies()[1].x.y, 2.592e9, "first drift must be exact");
}

#[test]
fn anchor_is_immobile() {
    let sys = anchored_system(1.0e30, 1.0e24, 1.0e11, 3.0e4);
    let mut sim = Simulation::new(sys, test_params());

    let before = sim.bodies()[0].clone();
    for _ in 0..500 {
        sim.tick().unwrap();
    }
    let after = &sim.bodies()[0];

    assert_eq!(before.x, after.x, "anchor position changed");
    assert_eq!(before.v, after.v, "anchor velocity changed");
    assert!(after.recent_trail.is_empty(), "anchor grew a trail");
}

#[test]
fn energy_drift_stays_bounded_over_circular_orbit() {
    // Closed two-body problem, no anchor: equal masses on a circular orbit
    // about the barycenter. v = sqrt(G m / (2 d)) for separation d.
    let p = test_params();
    let m = 1.0e30;
    let d = 2.0e11;
    let v = (p.g * m / (2.0 * d)).sqrt();

    let mut sys = two_body_system(d, m, m);
    sys.bodies[0].v = NVec2::new(0.0, -v);
    sys.bodies[1].v = NVec2::new(0.0, v);

    let forces = gravity(&p);
    let e0 = total_energy(&sys, p.g);

    let mut max_drift: f64 = 0.0;
    for frame in 1..=10_000 {
        verlet_step(&mut sys, &forces, p.base_timestep, frame, &p).unwrap();
        let drift = ((total_energy(&sys, p.g) - e0) / e0).abs();
        max_drift = max_drift.max(drift);
    }

    assert!(
        max_drift < 1e-5,
        "energy drifted by a relative {max_drift:e} over 10k steps"
    );
}

#[test]
fn recent_trail_respects_capacity() {
    let sys = anchored_system(1.0e30, 1.0e24, 1.0e11, 3.0e4);
    let mut params = test_params();
    params.recent_trail_capacity = 50;

    let mut sim = Simulation::new(sys, params);

    for n in 1..=120u64 {
        sim.tick().unwrap();
        let len = sim.bodies()[1].recent_trail.len();
        assert_eq!(len as u64, n.min(50), "after {n} ticks");
    }
}

#[test]
fn sparse_trail_samples_every_kth_tick() {
    let sys = anchored_system(1.0e30, 1.0e24, 1.0e11, 3.0e4);
    let mut params = test_params();
    params.sparse_interval = 15;

    let mut sim = Simulation::new(sys, params);

    for _ in 0..100 {
        sim.tick().unwrap();
    }

    // Ticks 15, 30, ..., 90 sample: floor(100 / 15) points
    assert_eq!(sim.bodies()[1].sparse_trail.len(), 6);
}

#[test]
fn time_multiplier_scales_the_step_and_has_a_floor() {
    let sys = anchored_system(1.0e30, 1.0e24, 1.0e11, 3.0e4);
    let mut sim = Simulation::new(sys, test_params());

    sim.scale_time_multiplier(2.0);
    assert_eq!(sim.time_multiplier(), 2.0);

    // Repeated shrinking clamps at the floor instead of freezing the run
    for _ in 0..100 {
        sim.scale_time_multiplier(1.0 / 1.5);
    }
    assert_eq!(sim.time_multiplier(), 0.1);

    let t0 = sim.elapsed();
    sim.tick().unwrap();
    assert!(
        (sim.elapsed() - t0 - 360.0).abs() < 1e-9,
        "floored multiplier should advance 0.1 * base_timestep"
    );
}

// ==================================================================================
// Camera tests
// ==================================================================================

#[test]
fn camera_transform_round_trips() {
    let mut params = test_params();
    params.viewport = (1920.0, 1080.0);
    let mut cam = Camera::new(&params);
    cam.pan(3.0, -2.0);
    cam.zoom(1.5);

    let p = NVec2::new(-1.5e11, 4.2e10);
    let back = cam.screen_to_sim(cam.sim_to_screen(p));

    assert!(
        (back - p).norm() < 1e-3,
        "round trip lost {:e} m",
        (back - p).norm()
    );
}

#[test]
fn camera_converges_on_focus_target_and_releases() {
    let target = NVec2::new(1.0e11, 5.0e10);
    let body = Body::new(
        "target",
        Color::new(255, 255, 255),
        target,
        NVec2::zeros(),
        1.0e24,
        0.0,
    );
    let bodies = vec![body];

    let mut params = test_params();
    params.focus_position_tolerance = 1.0e4;
    let mut cam = Camera::new(&params);
    cam.focus_on(0);

    let mut ticks = 0;
    while cam.focus().is_some() {
        cam.update(&bodies);
        ticks += 1;
        assert!(ticks < 2000, "camera failed to converge");
    }

    assert!(
        (cam.offset() - target).norm() < 1e-6 * target.x,
        "offset off by {:e}",
        (cam.offset() - target).norm()
    );
    assert!(
        (cam.scale() - params.focus_scale).abs() < 1e-9,
        "scale off by {:e}",
        (cam.scale() - params.focus_scale).abs()
    );
    // Already released by the tolerance check; further updates are no-ops
    let frozen = cam.offset();
    cam.update(&bodies);
    assert_eq!(cam.offset(), frozen);
}

#[test]
fn manual_command_breaks_focus_immediately() {
    let params = test_params();
    let mut cam = Camera::new(&params);

    cam.focus_on(0);
    cam.pan(1.0, 0.0);
    assert_eq!(cam.focus(), None);

    cam.focus_on(0);
    cam.zoom(1.5);
    assert_eq!(cam.focus(), None);

    cam.focus_on(0);
    cam.reset();
    assert_eq!(cam.focus(), None);
    assert_eq!(cam.offset(), NVec2::zeros());
    assert_eq!(cam.scale(), params.initial_scale);
}

#[test]
fn camera_falls_back_to_free_on_stale_index() {
    let params = test_params();
    let mut cam = Camera::new(&params);
    cam.focus_on(7);

    cam.update(&[]);
    assert_eq!(cam.focus(), None);
}

#[test]
fn zoom_ignores_degenerate_factors() {
    let params = test_params();
    let mut cam = Camera::new(&params);

    cam.zoom(0.0);
    cam.zoom(-2.0);
    cam.zoom(f64::NAN);
    assert_eq!(cam.scale(), params.initial_scale);

    cam.zoom(1.5);
    assert!((cam.zoom_ratio() - 1.5).abs() < 1e-12);
}

#[test]
fn pan_speed_is_inverse_to_scale() {
    let params = test_params();
    let mut cam = Camera::new(&params);

    cam.pan(1.0, 0.0);
    let coarse = cam.offset().x;

    let mut zoomed = Camera::new(&params);
    zoomed.zoom(2.0);
    zoomed.pan(1.0, 0.0);

    assert!(
        (zoomed.offset().x * 2.0 - coarse).abs() < coarse.abs() * 1e-12,
        "pan should cover half the distance at double zoom"
    );
}

// ==================================================================================
// Controller tests
// ==================================================================================

#[test]
fn controller_ignores_unknown_focus_target() {
    let scenario = Scenario::solar_system();
    let mut controller = ViewController::new(Camera::new(&scenario.parameters));
    let mut sim = scenario.into_simulation();

    controller.apply(Command::SelectFocusTarget(99), &mut sim);
    assert_eq!(controller.camera().focus(), None);

    controller.apply(Command::SelectFocusTarget(3), &mut sim);
    assert_eq!(controller.camera().focus(), Some(3));

    controller.apply(Command::ClearFocusTarget, &mut sim);
    assert_eq!(controller.camera().focus(), None);
}

#[test]
fn controller_projects_render_data_in_registration() {
    let scenario = Scenario::solar_system();
    let params = scenario.parameters.clone();
    let mut controller = ViewController::new(Camera::new(&params));
    let mut sim = scenario.into_simulation();

    for _ in 0..30 {
        sim.tick().unwrap();
        controller.update(&sim);
    }

    let rendered = controller.render_bodies(&sim);
    assert_eq!(rendered.len(), sim.bodies().len());

    // Last recent-trail point and the body itself go through the same
    // transform, so they must land on the same pixel
    let earth_idx = sim.bodies().iter().position(|b| b.name == "Earth").unwrap();
    let earth = &rendered[earth_idx];
    let last_trail = earth.recent_trail.last().unwrap();
    assert!((last_trail - earth.screen_pos).norm() < 1e-9);

    assert!(earth.screen_radius >= 2.0, "radius floor is 2 px");
    assert!(earth.distance_to_anchor_gm > 0.0);
}

#[test]
fn toggle_info_flips_the_display_flag() {
    let scenario = Scenario::solar_system();
    let mut controller = ViewController::new(Camera::new(&scenario.parameters));
    let mut sim = scenario.into_simulation();

    assert!(controller.display_info(&sim).show_info);
    controller.apply(Command::ToggleInfoDisplay, &mut sim);
    assert!(!controller.display_info(&sim).show_info);
}

// ==================================================================================
// Scenario / configuration tests
// ==================================================================================

#[test]
fn solar_system_preset_has_one_anchor() {
    let scenario = Scenario::solar_system();
    assert_eq!(scenario.system.bodies.len(), 9);
    assert_eq!(scenario.system.anchor_index(), Some(0));
    assert_eq!(scenario.system.bodies[0].name, "Sun");
    assert_eq!(
        scenario
            .system
            .bodies
            .iter()
            .filter(|b| b.is_anchor)
            .count(),
        1
    );
}

#[test]
fn scenario_from_yaml_builds_and_validates() {
    let yaml = r#"
parameters:
  g: 6.67428e-11
  base_timestep: 86400.0
  multiplier_floor: 0.1
  recent_trail_capacity: 400
  sparse_interval: 15
  initial_scale: 4.0e-10
  focus_scale: 1.2e-8
  lerp_factor: 0.05
  pan_speed: 20.0
  viewport: [1000.0, 1000.0]
bodies:
  - name: "Sun"
    color: [255, 204, 0]
    anchor: true
    x: [0.0, 0.0]
    v: [0.0, 0.0]
    m: 1.98892e30
    radius: 6.9634e8
  - name: "Earth"
    color: [0, 102, 255]
    x: [-1.496e11, 0.0]
    v: [0.0, 2.98e4]
    m: 5.97e24
    radius: 6.371e6
"#;
    let cfg: planetsim::ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    let scenario = Scenario::build(cfg).unwrap();

    assert_eq!(scenario.parameters.base_timestep, 86400.0);
    assert_eq!(scenario.system.bodies[1].name, "Earth");
    assert!(scenario.system.bodies[0].is_anchor);
}

#[test]
fn scenario_without_anchor_is_rejected() {
    let yaml = r#"
parameters:
  g: 6.67428e-11
  base_timestep: 86400.0
  multiplier_floor: 0.1
  recent_trail_capacity: 400
  sparse_interval: 15
  initial_scale: 4.0e-10
  focus_scale: 1.2e-8
  lerp_factor: 0.05
  pan_speed: 20.0
  viewport: [1000.0, 1000.0]
bodies:
  - name: "lonely"
    color: [255, 255, 255]
    x: [0.0, 0.0]
    v: [0.0, 0.0]
    m: 1.0e24
    radius: 1.0e6
"#;
    let cfg: planetsim::ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    match Scenario::build(cfg) {
        Err(SimulationError::AnchorCount { count }) => assert_eq!(count, 0),
        other => panic!("expected AnchorCount error, got {:?}", other.map(|_| ())),
    }
}
