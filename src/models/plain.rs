// Copyright 2025 John Doe
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain-field discipline: a `Circle` with eight raw scalar fields and no
//! grouping types. The weakest typing of the three variants and the baseline
//! the others are measured against.

use serde::{Deserialize, Serialize};

/// Sample field values used by tests and the accumulation benchmarks.
pub const SAMPLE_POSITION_X: f32 = 1.0;
pub const SAMPLE_POSITION_Y: f32 = 2.0;
pub const SAMPLE_VELOCITY_X: f32 = 3.0;
pub const SAMPLE_VELOCITY_Y: f32 = 4.0;
pub const SAMPLE_COLOUR: u32 = 5;
pub const SAMPLE_MATERIAL: u32 = 6;
pub const SAMPLE_WEIGHT: f32 = 7.0;
pub const SAMPLE_RADIUS: f32 = 8.0;

/// A circle as eight loose scalars. Pure value: `Copy`, field-wise equality,
/// all-zero default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    position_x: f32,
    position_y: f32,
    velocity_x: f32,
    velocity_y: f32,
    colour: u32,
    material: u32,
    weight: f32,
    radius: f32,
}

impl Circle {
    /// Direct constructor. No validation: inputs are stored as-is.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        position_x: f32,
        position_y: f32,
        velocity_x: f32,
        velocity_y: f32,
        colour: u32,
        material: u32,
        weight: f32,
        radius: f32,
    ) -> Self {
        Self {
            position_x,
            position_y,
            velocity_x,
            velocity_y,
            colour,
            material,
            weight,
            radius,
        }
    }

    // Fluent setters. Each consumes the working value and returns it so the
    // chain reads like the builder it replaces.

    pub fn with_position_x(mut self, position_x: f32) -> Self {
        self.position_x = position_x;
        self
    }

    pub fn with_position_y(mut self, position_y: f32) -> Self {
        self.position_y = position_y;
        self
    }

    pub fn with_velocity_x(mut self, velocity_x: f32) -> Self {
        self.velocity_x = velocity_x;
        self
    }

    pub fn with_velocity_y(mut self, velocity_y: f32) -> Self {
        self.velocity_y = velocity_y;
        self
    }

    pub fn with_colour(mut self, colour: u32) -> Self {
        self.colour = colour;
        self
    }

    pub fn with_material(mut self, material: u32) -> Self {
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

    pub fn position_x(&self) -> f32 {
        self.position_x
    }

    pub fn position_y(&self) -> f32 {
        self.position_y
    }

    pub fn velocity_x(&self) -> f32 {
        self.velocity_x
    }

    pub fn velocity_y(&self) -> f32 {
        self.velocity_y
    }

    pub fn colour(&self) -> u32 {
        self.colour
    }

    pub fn material(&self) -> u32 {
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
        SAMPLE_POSITION_X,
        SAMPLE_POSITION_Y,
        SAMPLE_VELOCITY_X,
        SAMPLE_VELOCITY_Y,
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
            SAMPLE_POSITION_X,
            SAMPLE_POSITION_Y,
            SAMPLE_VELOCITY_X,
            SAMPLE_VELOCITY_Y,
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
                SAMPLE_POSITION_X,
                SAMPLE_POSITION_Y,
                SAMPLE_VELOCITY_X,
                SAMPLE_VELOCITY_Y,
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
                .with_position_x(SAMPLE_POSITION_X)
                .with_position_y(SAMPLE_POSITION_Y)
                .with_velocity_x(SAMPLE_VELOCITY_X)
                .with_velocity_y(SAMPLE_VELOCITY_Y)
                .with_colour(SAMPLE_COLOUR)
                .with_material(SAMPLE_MATERIAL)
                .with_weight(SAMPLE_WEIGHT)
                .with_radius(SAMPLE_RADIUS)
                .build(),
        );
    }
    circles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_stores_inputs() {
        let circle = sample();
        assert_eq!(circle.position_x(), SAMPLE_POSITION_X);
        assert_eq!(circle.position_y(), SAMPLE_POSITION_Y);
        assert_eq!(circle.velocity_x(), SAMPLE_VELOCITY_X);
        assert_eq!(circle.velocity_y(), SAMPLE_VELOCITY_Y);
        assert_eq!(circle.colour(), SAMPLE_COLOUR);
        assert_eq!(circle.material(), SAMPLE_MATERIAL);
        assert_eq!(circle.weight(), SAMPLE_WEIGHT);
        assert_eq!(circle.radius(), SAMPLE_RADIUS);
    }

    #[test]
    fn test_fluent_matches_constructor() {
        let fluent = Circle::default()
            .with_position_x(SAMPLE_POSITION_X)
            .with_position_y(SAMPLE_POSITION_Y)
            .with_velocity_x(SAMPLE_VELOCITY_X)
            .with_velocity_y(SAMPLE_VELOCITY_Y)
            .with_colour(SAMPLE_COLOUR)
            .with_material(SAMPLE_MATERIAL)
            .with_weight(SAMPLE_WEIGHT)
            .with_radius(SAMPLE_RADIUS)
            .build();
        assert_eq!(fluent, sample());
    }

    #[test]
    fn test_default_is_all_zero() {
        let circle = Circle::default();
        assert_eq!(circle.position_x(), 0.0);
        assert_eq!(circle.position_y(), 0.0);
        assert_eq!(circle.velocity_x(), 0.0);
        assert_eq!(circle.velocity_y(), 0.0);
        assert_eq!(circle.colour(), 0);
        assert_eq!(circle.material(), 0);
        assert_eq!(circle.weight(), 0.0);
        assert_eq!(circle.radius(), 0.0);
    }

    #[test]
    fn test_equality_is_field_wise() {
        let a = sample();
        let b = sample();
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, b.with_radius(9.0));
    }

    #[test]
    fn test_collectors_agree() {
        let n = 100;
        let pushed = collect_push(n);
        let in_place = collect_in_place(n);
        let fluent = collect_push_fluent(n);
        assert_eq!(pushed.len(), n as usize);
        assert_eq!(pushed, in_place);
        assert_eq!(pushed, fluent);
        assert!(pushed.iter().all(|c| *c == sample()));
    }
}
