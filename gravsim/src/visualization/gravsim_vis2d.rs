use std::collections::VecDeque;

use bevy::color::Srgba;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PrimaryWindow;

use super::field_map::grid_points;
use crate::simulation::scenario::Scenario;
use crate::simulation::vector::{NVec2, Vector2Ext};

#[derive(Component)]
struct BodyIndex(pub usize);

/// Heat-map cell sampling the field at this world point
#[derive(Component)]
struct FieldCell(NVec2);

#[derive(Resource)]
struct Sim(Scenario);

/// Previous positions per body; the physics keeps no history
#[derive(Resource, Default)]
struct Trails(Vec<VecDeque<Vec2>>);

const SCALE: f32 = 20.0;
const TRAIL_LEN: usize = 600;
const FIELD_CELL_PX: f32 = 16.0;

pub fn run_2d(scenario: Scenario) {
    log::info!(
        "run_2d: starting Bevy 2D viewer with {} bodies",
        scenario.system.len()
    );

    App::new()
        .insert_resource(Sim(scenario))
        .insert_resource(Trails::default())
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, (setup_bodies_system, setup_field_system))
        .add_systems(
            Update,
            (
                physics_step_system,
                sync_transforms_system,
                toggle_field_system,
                draw_field_system,
                draw_overlays_system,
            )
                .chain(),
        )
        .run();
}

fn to_screen(v: NVec2) -> Vec2 {
    Vec2::new(v.x as f32, v.y as f32) * SCALE
}

fn style_color(style: &str) -> Color {
    match style {
        "red" => Color::srgb(0.9, 0.2, 0.2),
        "blue" => Color::srgb(0.2, 0.4, 0.95),
        "green" => Color::srgb(0.2, 0.8, 0.3),
        "orange" => Color::srgb(1.0, 0.6, 0.1),
        "purple" => Color::srgb(0.6, 0.3, 0.9),
        "yellow" => Color::srgb(0.95, 0.9, 0.2),
        other => Srgba::hex(other).map(Color::from).unwrap_or(Color::WHITE),
    }
}

fn setup_bodies_system(
    mut commands: Commands,
    sim: Res<Sim>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    for (i, body) in sim.0.system.snapshot().iter().enumerate() {
        let radius_screen = (body.radius as f32).max(0.05) * SCALE;
        let p = to_screen(body.position);

        commands
            .spawn((
                MaterialMesh2dBundle {
                    mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                    material: materials.add(ColorMaterial::from(style_color(&body.style))),
                    transform: Transform::from_xyz(p.x, p.y, 0.0),
                    ..Default::default()
                },
                BodyIndex(i),
            ))
            .with_children(|parent| {
                parent.spawn(Text2dBundle {
                    text: Text::from_section(
                        format!("{:.1} kg", body.mass),
                        TextStyle {
                            font_size: 14.0,
                            color: Color::WHITE,
                            ..Default::default()
                        },
                    ),
                    transform: Transform::from_xyz(0.0, 0.0, 1.0),
                    ..Default::default()
                });
            });
    }
}

/// One sprite per screen cell behind the bodies, recoloured every frame
fn setup_field_system(mut commands: Commands, windows: Query<&Window, With<PrimaryWindow>>) {
    let (width, height) = windows
        .get_single()
        .map(|w| (w.width(), w.height()))
        .unwrap_or((1280.0, 720.0));
    let half = NVec2::new(width as f64, height as f64) / (2.0 * SCALE as f64);
    let spacing = (FIELD_CELL_PX / SCALE) as f64;

    let points = match grid_points(-half, half, spacing) {
        Ok(points) => points,
        Err(e) => {
            log::warn!("field heat-map disabled: {e}");
            return;
        }
    };
    let offset = NVec2::repeat(spacing / 2.0);
    for point in points {
        let center = point + offset;
        let p = to_screen(center);
        commands.spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: Color::BLACK,
                    custom_size: Some(Vec2::splat(FIELD_CELL_PX)),
                    ..Default::default()
                },
                transform: Transform::from_xyz(p.x, p.y, -1.0),
                visibility: Visibility::Visible,
                ..Default::default()
            },
            FieldCell(center),
        ));
    }
}

/// `F` shows or hides the heat-map
fn toggle_field_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut cells: Query<&mut Visibility, With<FieldCell>>,
) {
    if !keys.just_pressed(KeyCode::KeyF) {
        return;
    }
    for mut visibility in &mut cells {
        *visibility = match *visibility {
            Visibility::Hidden => Visibility::Visible,
            _ => Visibility::Hidden,
        };
    }
}

fn draw_field_system(sim: Res<Sim>, mut cells: Query<(&FieldCell, &Visibility, &mut Sprite)>) {
    let mut visible: Vec<_> = cells
        .iter_mut()
        .filter(|(_, visibility, _)| **visibility != Visibility::Hidden)
        .collect();
    let points: Vec<NVec2> = visible.iter().map(|(cell, _, _)| cell.0).collect();

    let colors = sim.0.system.field_heat_map(&points);
    for ((_, _, sprite), (_, [r, g, b])) in visible.iter_mut().zip(colors) {
        sprite.color = Color::srgb(r, g, b);
    }
}

fn physics_step_system(time: Res<Time>, mut sim: ResMut<Sim>, mut trails: ResMut<Trails>) {
    let Scenario { system, forces, .. } = &mut sim.0;

    // record pre-tick positions for the trails
    trails.0.resize_with(system.len(), VecDeque::new);
    for (trail, body) in trails.0.iter_mut().zip(system.bodies()) {
        push_trail(trail, to_screen(body.position()));
    }

    // wall-clock frame delta, not clamped
    system.tick_with(&*forces, time.delta_seconds_f64());
}

fn push_trail(trail: &mut VecDeque<Vec2>, point: Vec2) {
    trail.push_back(point);
    while trail.len() > TRAIL_LEN {
        trail.pop_front();
    }
}

fn sync_transforms_system(sim: Res<Sim>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = sim.0.system.body(*i) {
            let p = to_screen(b.position());
            transform.translation.x = p.x;
            transform.translation.y = p.y;
        }
    }
}

fn draw_overlays_system(sim: Res<Sim>, trails: Res<Trails>, mut gizmos: Gizmos) {
    for (trail, body) in trails.0.iter().zip(sim.0.system.snapshot()) {
        let color = style_color(&body.style);
        if trail.len() > 1 {
            gizmos.linestrip_2d(trail.iter().copied(), color);
        }

        // velocity and gravity arrows drawn from the disc edge
        for (vector, arrow_color) in [
            (body.velocity, Color::WHITE),
            (body.acceleration, Color::srgb(1.0, 0.6, 0.1)),
        ] {
            let start = body.position + vector.normalized_or_zero() * body.radius;
            let length = (vector.norm() * 0.5).min(5.0);
            let end = start + vector.with_magnitude(length);
            gizmos.arrow_2d(to_screen(start), to_screen(end), arrow_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_keeps_only_latest_points() {
        let mut trail = VecDeque::new();
        for i in 0..(TRAIL_LEN + 10) {
            push_trail(&mut trail, Vec2::new(i as f32, 0.0));
        }
        assert_eq!(trail.len(), TRAIL_LEN);
        assert_eq!(trail.front(), Some(&Vec2::new(10.0, 0.0)));
        assert_eq!(trail.back(), Some(&Vec2::new((TRAIL_LEN + 9) as f32, 0.0)));
    }
}
