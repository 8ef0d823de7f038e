use bevy::prelude::*;

use crate::simulation::rotating_frame::RotatedSeries;

/// Precomputed rotating-frame trajectory held as a Bevy resource and
/// drawn every frame. The simulation is finished before the app starts;
/// the viewer never feeds anything back into it.
#[derive(Resource)]
pub struct PhaseTrajectory {
    points: Vec<Vec2>,
}

const SCALE: f32 = 2.0e5; // meters to pixels; responses are O(1e-3 m)
const STRIDE: usize = 8; // thin out the linestrip, the curve is smooth

pub fn run_phase_view(series: RotatedSeries) {
    println!("phase_view: starting Bevy viewer with {} samples", series.len());

    let points = series
        .points()
        .step_by(STRIDE)
        .map(|(re, im)| Vec2::new(re as f32 * SCALE, im as f32 * SCALE))
        .collect();

    App::new()
        .insert_resource(PhaseTrajectory { points })
        .insert_resource(ClearColor(Color::rgb(0.06, 0.06, 0.06)))
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_camera_system)
        .add_systems(Update, draw_trajectory_system)
        .run();
}

fn setup_camera_system(mut commands: Commands) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());
}

fn draw_trajectory_system(trajectory: Res<PhaseTrajectory>, mut gizmos: Gizmos) {
    gizmos.linestrip_2d(trajectory.points.iter().copied(), Color::WHITE);
}
