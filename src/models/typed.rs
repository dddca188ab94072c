// Copyright 2025 John Doe
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vector2D-composed discipline: the same circle data as [`plain`], but with
//! position and velocity grouped into a `Vector2D` value, the colour lifted
//! into an enum and the material id into an opaque newtype.
//!
//! [`plain`]: crate::models::plain

use serde::{Deserialize, Serialize};

/// Sample field values used by tests and the accumulation benchmarks.
pub const SAMPLE_POSITION: Vector2D = Vector2D::new(1.0, 2.0);
pub const SAMPLE_VELOCITY: Vector2D = Vector2D::new(3.0, 4.0);
pub const SAMPLE_COLOUR: Colour = Colour::Black;
pub const SAMPLE_MATERIAL: MaterialId = MaterialId(6);
pub const SAMPLE_WEIGHT: f32 = 7.0;
pub const SAMPLE_RADIUS: f32 = 8.0;

/// A 2D vector value. Immutable once built; the fluent setters operate on a
/// working copy until `build()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    x: f32,
    y: f32,
}

impl Vector2D {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Finalize a fluent chain into the immutable value.
    pub fn build(self) -> Self {
        self
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }
}

/// Circle colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum Colour {
    #[default]
    White,
    Black,
}

/// Opaque material identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialId(pub u32);

/// A circle over `Vector2D` position/velocity. Pure value: `Copy`,
/// field-wise equality, all-zero default (colour `White`, material 0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    position: Vector2D,
    velocity: Vector2D,
    colour: Colour,
    material: MaterialId,
    weight: f32,
    radius: f32,
}

impl Circle {
    /// Direct constructor. No validation: inputs are stored as-is.
    pub const fn new(
        position: Vector2D,
        velocity: Vector2D,
        colour: Colour,
        material: MaterialId,
        weight: f32,
        radius: f32,
    ) -> Self {
        Self {
            position,
            velocity,
            colour,
            material,
            weight,
            radius,
        }
    }

    pub fn with_position(mut self, position: Vector2D) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vector2D) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = material;
        self
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Finalize a fluent chain into the immutable value.
    pub fn build(self) -> Self {
        self
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn velocity(&self) -> Vector2D {
        self.velocity
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn material(&self) -> MaterialId {
        self.material
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

/// The sample circle every accumulation routine repeats.
pub fn sample() -> Circle {
    Circle::new(
        SAMPLE_POSITION,
        SAMPLE_VELOCITY,
        SAMPLE_COLOUR,
        SAMPLE_MATERIAL,
        SAMPLE_WEIGHT,
        SAMPLE_RADIUS,
    )
}

/// Append-by-copy: construct a temporary, then push it.
pub fn collect_push(count: u32) -> Vec<Circle> {
    let mut circles = Vec::new();
    for _ in 0..count {
        let circle = Circle::new(
            SAMPLE_POSITION,
            SAMPLE_VELOCITY,
            SAMPLE_COLOUR,
            SAMPLE_MATERIAL,
            SAMPLE_WEIGHT,
            SAMPLE_RADIUS,
        );
        circles.push(circle);
    }
    circles
}

/// Append-by-in-place-construction: extend from a value-producing iterator
/// so each element is written directly into the vector's storage.
pub fn collect_in_place(count: u32) -> Vec<Circle> {
    let mut circles = Vec::new();
    circles.extend(
        std::iter::repeat_with(|| {
            Circle::new(
                SAMPLE_POSITION,
                SAMPLE_VELOCITY,
                SAMPLE_COLOUR,
                SAMPLE_MATERIAL,
                SAMPLE_WEIGHT,
                SAMPLE_RADIUS,
            )
        })
        .take(count as usize),
    );
    circles
}

/// Append-by-copy through the fluent chain.
pub fn collect_push_fluent(count: u32) -> Vec<Circle> {
    let mut circles = Vec::new();
    for _ in 0..count {
        circles.push(
            Circle::default()
                .with_position(SAMPLE_POSITION)
                .with_velocity(SAMPLE_VELOCITY)
                .with_colour(SAMPLE_COLOUR)
                .with_material(SAMPLE_MATERIAL)
                .with_weight(SAMPLE_WEIGHT)
                .with_radius(SAMPLE_RADIUS)
                .build(),
        );
    }
    circles
}
