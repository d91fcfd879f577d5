//! Read-only interface between the world and whatever draws it.
//!
//! The core never talks to a graphics API. A renderer receives a
//! [`RenderSnapshot`] taken between steps plus the fixed camera and light.

use glam::{Mat3, Mat4, Quat, Vec3};

use crate::{core::types::SurfaceColors, world::World};

/// Per-sphere draw data.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RenderInstance {
    pub position: Vec3,
    pub radius: f32,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl RenderInstance {
    pub fn new(position: Vec3, radius: f32, colors: SurfaceColors) -> Self {
        Self {
            position,
            radius,
            ambient: colors.ambient,
            diffuse: colors.diffuse,
            specular: colors.specular,
        }
    }

    /// Unit sphere mesh scaled by the radius, then moved to the body position.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.radius), Quat::IDENTITY, self.position)
    }

    /// Inverse-transpose of the upper 3x3 of `view * model`.
    pub fn normal_matrix(&self, view: Mat4) -> Mat3 {
        Mat3::from_mat4(view * self.model_matrix()).inverse().transpose()
    }
}

/// Copy of the drawable state of every body, taken between steps.
#[derive(Debug, Default, Clone)]
pub struct RenderSnapshot {
    pub instances: Vec<RenderInstance>,
}

impl RenderSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_world(world: &World) -> Self {
        let mut snapshot = Self::new();
        snapshot.sync(world);
        snapshot
    }

    /// Refreshes the buffers from the world, reusing the allocation.
    pub fn sync(&mut self, world: &World) {
        self.instances.clear();
        self.instances.extend(
            world
                .bodies()
                .iter()
                .map(|body| RenderInstance::new(body.position, body.radius(), body.colors)),
        );
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// Fixed perspective camera looking down `-z` at the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub direction: Vec3,
    pub up: Vec3,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 100.0),
            direction: Vec3::NEG_Z,
            up: Vec3::Y,
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 200.0,
        }
    }
}

impl Camera {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.eye + self.direction, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }
}

/// Single white point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 40.0, 50.0),
            ambient: Vec3::ONE,
            diffuse: Vec3::ONE,
            specular: Vec3::ONE,
        }
    }
}

impl Lighting {
    /// Light position in eye space, as the shaders expect it.
    pub fn position_in_eye(&self, view: Mat4) -> Vec3 {
        view.transform_point3(self.position)
    }
}

/// Implemented by anything that can draw a snapshot.
pub trait RenderTarget {
    fn name(&self) -> &str;

    fn draw(&mut self, snapshot: &RenderSnapshot, camera: &Camera, lighting: &Lighting);
}

/// Renderer that only counts what it was asked to draw. Used headless.
#[derive(Debug, Default)]
pub struct NoopRenderer {
    pub frames: u64,
    pub instances_drawn: u64,
}

impl NoopRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderTarget for NoopRenderer {
    fn name(&self) -> &str {
        "noop"
    }

    fn draw(&mut self, snapshot: &RenderSnapshot, _camera: &Camera, _lighting: &Lighting) {
        self.frames += 1;
        self.instances_drawn += snapshot.len() as u64;
    }
}
