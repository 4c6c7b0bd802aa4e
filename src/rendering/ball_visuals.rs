use bevy::platform::collections::HashMap;
use bevy::prelude::*;
use bevy::sprite::{ColorMaterial, MeshMaterial2d};

use crate::core::components::LoaderBall;
use crate::core::system::system_order::LoaderSet;

/// Circle meshes shared between balls of equal radius (keyed by `f32` bits).
#[derive(Resource, Default, Debug)]
pub struct BallMeshCache(pub HashMap<u32, Handle<Mesh>>);

pub struct BallVisualsPlugin;

impl Plugin for BallVisualsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BallMeshCache>()
            .add_systems(Update, attach_ball_visuals.in_set(LoaderSet::Animate));
    }
}

pub fn attach_ball_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut cache: ResMut<BallMeshCache>,
    q_new: Query<(Entity, &LoaderBall), Added<LoaderBall>>,
) {
    for (entity, ball) in &q_new {
        let radius = ball.descriptor.radius;
        let mesh = cache
            .0
            .entry(radius.to_bits())
            .or_insert_with(|| meshes.add(Circle::new(radius)))
            .clone();
        let material = materials.add(ball.descriptor.color);
        commands
            .entity(entity)
            .insert((Mesh2d(mesh), MeshMaterial2d(material)));
    }
}
