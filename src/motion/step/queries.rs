//! World queries the motion core consumes, and their avian2d adapter.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::motion::GameLayer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeHit {
    pub point: Vec2,
    pub distance: f32,
}

/// Synchronous, side-effect-free casts into the physics world.
pub trait MotionQueries {
    /// Sweep the character's own collider from its current position.
    fn cast_body(&self, direction: Dir2, max_distance: f32) -> Option<ProbeHit>;

    /// Cast a ray against grappleable surfaces only.
    fn cast_grapple(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> Option<ProbeHit>;
}

/// [`MotionQueries`] backed by avian2d's [`SpatialQuery`].
pub struct SpatialMotionQueries<'a, 'w, 's> {
    spatial: &'a SpatialQuery<'w, 's>,
    collider: &'a Collider,
    position: Vec2,
    solid_filter: SpatialQueryFilter,
    grapple_filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> SpatialMotionQueries<'a, 'w, 's> {
    pub fn new(
        spatial: &'a SpatialQuery<'w, 's>,
        entity: Entity,
        collider: &'a Collider,
        position: Vec2,
    ) -> Self {
        Self {
            spatial,
            collider,
            position,
            solid_filter: SpatialQueryFilter::from_mask(GameLayer::non_character())
                .with_excluded_entities([entity]),
            grapple_filter: SpatialQueryFilter::from_mask(GameLayer::Grappleable)
                .with_excluded_entities([entity]),
        }
    }
}

impl MotionQueries for SpatialMotionQueries<'_, '_, '_> {
    fn cast_body(&self, direction: Dir2, max_distance: f32) -> Option<ProbeHit> {
        // A body resting on the floor starts in contact; only count hits the
        // sweep actually moves into.
        let config = ShapeCastConfig {
            ignore_origin_penetration: true,
            ..ShapeCastConfig::from_max_distance(max_distance)
        };
        self.spatial
            .cast_shape(
                self.collider,
                self.position,
                0.0,
                direction,
                &config,
                &self.solid_filter,
            )
            .map(|hit| ProbeHit {
                point: hit.point1,
                distance: hit.distance,
            })
    }

    fn cast_grapple(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> Option<ProbeHit> {
        self.spatial
            .cast_ray(origin, direction, max_distance, true, &self.grapple_filter)
            .map(|hit| ProbeHit {
                point: origin + *direction * hit.distance,
                distance: hit.distance,
            })
    }
}
