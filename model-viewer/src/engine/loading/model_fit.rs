use bevy::math::Affine3A;
use bevy::prelude::*;
use bevy::render::mesh::MeshAabb;
use bevy::scene::SceneInstanceReady;

use crate::engine::core::config::ViewerConfig;
use crate::engine::core::viewer_state::ViewerState;
use crate::engine::loading::animation::start_all_clips;

/// Root entity of the loaded GLB scene.
#[derive(Component)]
pub struct ViewerModel;

/// Axis-aligned box in model-root space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl ModelBounds {
    pub fn from_point(point: Vec3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    pub fn extend(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Uniform scale and offset that fit a model into the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelFit {
    pub scale: f32,
    pub translation: Vec3,
}

impl ModelFit {
    /// Scale the largest dimension to `target_size` and move the box centre to the origin.
    ///
    /// A degenerate (flat or empty) box keeps unit scale and is only centred.
    pub fn for_bounds(bounds: &ModelBounds, target_size: f32) -> Self {
        let max_dimension = bounds.size().max_element();
        let scale = if max_dimension > 0.0 && max_dimension.is_finite() {
            target_size / max_dimension
        } else {
            1.0
        };

        Self {
            scale,
            translation: -bounds.center() * scale,
        }
    }

    pub fn apply(&self, transform: &mut Transform) {
        transform.scale = Vec3::splat(self.scale);
        transform.translation = self.translation;
    }
}

/// Transform from `entity`'s local space up to (but excluding) `root`.
fn affine_to_root(
    entity: Entity,
    root: Entity,
    parents: &Query<&ChildOf>,
    transforms: &Query<&mut Transform>,
) -> Affine3A {
    let mut affine = Affine3A::IDENTITY;
    let mut current = entity;

    while current != root {
        if let Ok(transform) = transforms.get(current) {
            affine = transform.compute_affine() * affine;
        }
        let Ok(child_of) = parents.get(current) else {
            break;
        };
        current = child_of.parent();
    }

    affine
}

fn model_bounds(
    root: Entity,
    children: &Query<&Children>,
    parents: &Query<&ChildOf>,
    transforms: &Query<&mut Transform>,
    mesh_handles: &Query<&Mesh3d>,
    meshes: &Assets<Mesh>,
) -> Option<ModelBounds> {
    let mut bounds: Option<ModelBounds> = None;

    for entity in children.iter_descendants(root) {
        let Ok(mesh_handle) = mesh_handles.get(entity) else {
            continue;
        };
        let Some(aabb) = meshes.get(&mesh_handle.0).and_then(Mesh::compute_aabb) else {
            continue;
        };

        let to_root = affine_to_root(entity, root, parents, transforms);
        let (min, max) = (Vec3::from(aabb.min()), Vec3::from(aabb.max()));

        for corner in [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
        ] {
            let point = to_root.transform_point3(corner);
            match bounds.as_mut() {
                Some(bounds) => bounds.extend(point),
                None => bounds = Some(ModelBounds::from_point(point)),
            }
        }
    }

    bounds
}

/// Hand the spawned scene root to [`reveal_model`] once its instance exists.
pub fn fit_model_on_ready(trigger: Trigger<SceneInstanceReady>, mut commands: Commands) {
    commands.run_system_cached_with(reveal_model, trigger.target());
}

/// Fit, reveal and animate a scene root whose hierarchy is in place.
pub fn reveal_model(
    In(root): In<Entity>,
    mut commands: Commands,
    mut state: ResMut<ViewerState>,
    config: Res<ViewerConfig>,
    children: Query<&Children>,
    parents: Query<&ChildOf>,
    mut transforms: Query<&mut Transform>,
    mesh_handles: Query<&Mesh3d>,
    meshes: Res<Assets<Mesh>>,
    mut visibilities: Query<&mut Visibility, With<ViewerModel>>,
    mut players: Query<&mut AnimationPlayer>,
) {
    let Ok(mut visibility) = visibilities.get_mut(root) else {
        return;
    };

    match model_bounds(
        root,
        &children,
        &parents,
        &transforms,
        &mesh_handles,
        &meshes,
    ) {
        Some(bounds) => {
            let fit = ModelFit::for_bounds(&bounds, config.target_size);
            if let Ok(mut transform) = transforms.get_mut(root) {
                fit.apply(&mut transform);
            }
            debug!(
                "Model bounds {:?}..{:?}, scale {:.4}",
                bounds.min, bounds.max, fit.scale
            );
        }
        None => warn!("Model has no mesh geometry; leaving it unscaled"),
    }

    *visibility = Visibility::Inherited;
    state.model = Some(root);

    // Every clip on every player, all at once, looping forever.
    let Some(driver) = state.animation.as_ref() else {
        return;
    };
    for entity in children.iter_descendants(root) {
        let Ok(mut player) = players.get_mut(entity) else {
            continue;
        };
        start_all_clips(&mut player, &driver.nodes);
        commands
            .entity(entity)
            .insert(AnimationGraphHandle(driver.graph.clone()));
    }
}
