//! Collision checks for the tunnel
//!
//! The tunnel is treated as a slab of half-width `B` around its axis and
//! obstacles as spheres. The craft is a point, swept along its forward step
//! so a fast tick can't skip over a sphere.

use glam::Vec3;

/// Which tunnel wall the craft went through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Upper,
    Lower,
}

impl Wall {
    /// Sign of the offset on this side of the axis
    pub fn sign(self) -> f32 {
        match self {
            Wall::Upper => 1.0,
            Wall::Lower => -1.0,
        }
    }
}

/// Result of a wall check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallContact {
    pub wall: Wall,
    /// How far past the wall the offset went
    pub penetration: f32,
}

/// Check a vertical offset against the tunnel half-width
pub fn wall_collision(offset: f32, half_width: f32) -> Option<WallContact> {
    let penetration = offset.abs() - half_width;
    if penetration <= 0.0 {
        return None;
    }
    let wall = if offset > 0.0 { Wall::Upper } else { Wall::Lower };
    Some(WallContact { wall, penetration })
}

/// Check if a point is strictly inside a sphere
#[inline]
pub fn point_sphere_collision(point: Vec3, center: Vec3, radius: f32) -> bool {
    point.distance_squared(center) < radius * radius
}

/// Check if the segment `start..=end` passes strictly inside a sphere
pub fn segment_sphere_collision(start: Vec3, end: Vec3, center: Vec3, radius: f32) -> bool {
    let segment = end - start;
    let length_sq = segment.length_squared();
    let t = if length_sq > 0.0 {
        ((center - start).dot(segment) / length_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    point_sphere_collision(start + segment * t, center, radius)
}

/// Check if a forward position fell more than `margin` behind the camera
#[inline]
pub fn behind_camera(z: f32, camera_distance: f32, margin: f32) -> bool {
    z < camera_distance - margin
}
