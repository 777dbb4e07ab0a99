//! Procedural level construction and pillar recycling
//!
//! The level is two index-paired lanes of pillars scrolling left. A pillar
//! that falls off the left edge is teleported behind the rightmost pillar of
//! its lane rather than destroyed; the collections only change on reset.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::geom::Aabb;
use super::state::Obstacle;
use crate::consts::*;

/// Generate the near and far lanes left-to-right until the accumulated
/// width covers the playfield plus margin.
///
/// Near-lane heights are random integers in [40, 540); each far pillar is
/// 600 units taller and placed to leave the 40-unit gap above its partner.
/// Heights are rolled here and only here; recycling never touches them.
pub fn build_lanes(rng: &mut Pcg32) -> (Vec<Obstacle>, Vec<Obstacle>) {
    let mut near = Vec::new();
    let mut far = Vec::new();

    let mut total_width = 0.0_f32;
    while total_width < PLAYFIELD_WIDTH + SPAWN_MARGIN {
        let near_h = rng.random_range(OBSTACLE_MIN_HEIGHT as u32..OBSTACLE_MAX_HEIGHT as u32) as f32;
        let x = total_width + OBSTACLE_WIDTH / 2.0 + SPAWN_OFFSET;

        near.push(Obstacle::new(Aabb::new(
            Vec2::new(x, near_h / 2.0),
            Vec2::new(OBSTACLE_WIDTH, near_h),
        )));

        let far_h = near_h + FAR_HEIGHT_EXTRA;
        far.push(Obstacle::new(Aabb::new(
            Vec2::new(x, far_h / 2.0 + near_h + OBSTACLE_GAP),
            Vec2::new(OBSTACLE_WIDTH, far_h),
        )));

        total_width += OBSTACLE_WIDTH + OBSTACLE_SPACING;
    }

    (near, far)
}

/// A pillar has scrolled off once its center passes a half-width left of
/// the origin, i.e. its right edge fully cleared the playfield. Strict `<`:
/// exactly touching the boundary does not recycle.
#[inline]
pub fn has_scrolled_off(body: &Aabb) -> bool {
    body.center.x < -(body.size.x / 2.0)
}

/// Teleport pillar `i` to the right of its left array neighbor (wrapping to
/// the last index for i == 0), preserving lane order. Position only; the
/// pillar keeps its height.
pub fn recycle(lane: &mut [Obstacle], i: usize) {
    let left = if i == 0 { lane.len() - 1 } else { i - 1 };
    lane[i].body.center.x = lane[left].body.center.x
        + lane[left].body.size.x / 2.0
        + lane[i].body.size.x / 2.0
        + OBSTACLE_SPACING;
}
