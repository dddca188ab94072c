// Copyright 2025 John Doe
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strong-wrapper discipline: every scalar is wrapped in a tag-distinct
//! [`Strong`] newtype (`Meters`, `Kilograms`, `X`, `Y`, `Position`, ...) so
//! a value of the wrong role cannot reach the wrong field. The wrappers are
//! `#[repr(transparent)]` and carry no runtime representation beyond the
//! wrapped value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// A single-field wrapper distinguished from other wrappers of the same
/// underlying type by the `Tag` marker. The tag is never instantiated; it
/// exists only to keep semantically different scalars apart at compile time.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
#[repr(transparent)]
pub struct Strong<T, Tag>(T, PhantomData<Tag>);

impl<T, Tag> Strong<T, Tag> {
    pub const fn new(value: T) -> Self {
        Self(value, PhantomData)
    }

    /// Unwrap the underlying value.
    pub fn get(self) -> T {
        self.0
    }
}

// Manual trait impls: deriving would put bounds on the (uninhabited) tag.

impl<T: Clone, Tag> Clone for Strong<T, Tag> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<T: Copy, Tag> Copy for Strong<T, Tag> {}

impl<T: fmt::Debug, Tag> fmt::Debug for Strong<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Default, Tag> Default for Strong<T, Tag> {
    fn default() -> Self {
        Self(T::default(), PhantomData)
    }
}

impl<T: PartialEq, Tag> PartialEq for Strong<T, Tag> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Equality against the raw underlying value.
impl<T: PartialEq, Tag> PartialEq<T> for Strong<T, Tag> {
    fn eq(&self, other: &T) -> bool {
        self.0 == *other
    }
}

pub enum MeterTag {}
pub enum KilogramTag {}
pub enum XTag {}
pub enum YTag {}
pub enum PositionTag {}
pub enum VelocityTag {}
pub enum WeightTag {}
pub enum RadiusTag {}

/// A distance in meters.
pub type Meters = Strong<f32, MeterTag>;
/// A mass in kilograms.
pub type Kilograms = Strong<f32, KilogramTag>;
/// The x component of a vector, in meters.
pub type X = Strong<Meters, XTag>;
/// The y component of a vector, in meters.
pub type Y = Strong<Meters, YTag>;
/// A position vector.
pub type Position = Strong<Vector2D, PositionTag>;
/// A velocity vector.
pub type Velocity = Strong<Vector2D, VelocityTag>;
/// A weight, in kilograms.
pub type Weight = Strong<Kilograms, WeightTag>;
/// A radius, in meters.
pub type Radius = Strong<Meters, RadiusTag>;

/// Literal-style unit constructors, standing in for C-family literal
/// suffixes: `7.0.kilograms()`, `8.0.meters()`.
pub trait UnitLiteral {
    fn meters(self) -> Meters;
    fn kilograms(self) -> Kilograms;
}

impl UnitLiteral for f32 {
    fn meters(self) -> Meters {
        Meters::new(self)
    }

    fn kilograms(self) -> Kilograms {
        Kilograms::new(self)
    }
}

/// A 2D vector over [`Meters`] components. The constructor takes role-tagged
/// [`X`] and [`Y`] arguments so the two cannot be swapped silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    x: Meters,
    y: Meters,
}

impl Vector2D {
    pub fn new(x: X, y: Y) -> Self {
        Self {
            x: x.get(),
            y: y.get(),
        }
    }

    pub fn with_x(mut self, x: X) -> Self {
        self.x = x.get();
        self
    }

    pub fn with_y(mut self, y: Y) -> Self {
        self.y = y.get();
        self
    }

    /// Finalize a fluent chain into the immutable value.
    pub fn build(self) -> Self {
        self
    }

    pub fn x(&self) -> Meters {
        self.x
    }

    pub fn y(&self) -> Meters {
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

/// A circle whose constructor takes only role-tagged arguments. Pure value:
/// `Copy`, field-wise equality, all-zero default (colour `White`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    position: Vector2D,
    velocity: Vector2D,
    colour: Colour,
    material: MaterialId,
    weight: Kilograms,
    radius: Meters,
}

impl Circle {
    /// Direct constructor. Each argument type names its role, so the call
    /// site documents itself and cannot be misassembled.
    pub fn new(
        position: Position,
        velocity: Velocity,
        colour: Colour,
        material: MaterialId,
        weight: Weight,
        radius: Radius,
    ) -> Self {
        Self {
            position: position.get(),
            velocity: velocity.get(),
            colour,
            material,
            weight: weight.get(),
            radius: radius.get(),
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position.get();
        self
    }

    pub fn with_velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = velocity.get();
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

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight.get();
        self
    }

    pub fn with_radius(mut self, radius: Radius) -> Self {
        self.radius = radius.get();
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

    pub fn weight(&self) -> Kilograms {
        self.weight
    }

    pub fn radius(&self) -> Meters {
        self.radius
    }
}

/// Sample colour and material shared by tests and benchmarks.
pub const SAMPLE_COLOUR: Colour = Colour::Black;
pub const SAMPLE_MATERIAL: MaterialId = MaterialId(6);

pub fn sample_position() -> Position {
    Position::new(Vector2D::new(X::new(1.0.meters()), Y::new(2.0.meters())))
}

pub fn sample_velocity() -> Velocity {
    Velocity::new(Vector2D::new(X::new(3.0.meters()), Y::new(4.0.meters())))
}

pub fn sample_weight() -> Weight {
    Weight::new(7.0.kilograms())
}

pub fn sample_radius() -> Radius {
    Radius::new(8.0.meters())
}

/// The sample circle every accumulation routine repeats.
pub fn sample() -> Circle {
    Circle::new(
        sample_position(),
        sample_velocity(),
        SAMPLE_COLOUR,
        SAMPLE_MATERIAL,
        sample_weight(),
        sample_radius(),
    )
}

/// Append-by-copy: construct a temporary, then push it.
pub fn collect_push(count: u32) -> Vec<Circle> {
    let position = sample_position();
    let velocity = sample_velocity();
    let weight = sample_weight();
    let radius = sample_radius();
    let mut circles = Vec::new();
    for _ in 0..count {
        let circle = Circle::new(
            position,
            velocity,
            SAMPLE_COLOUR,
            SAMPLE_MATERIAL,
            weight,
            radius,
        );
        circles.push(circle);
    }
    circles
}

/// Append-by-in-place-construction: extend from a value-producing iterator
/// so each element is written directly into the vector's storage.
pub fn collect_in_place(count: u32) -> Vec<Circle> {
    let position = sample_position();
    let velocity = sample_velocity();
    let weight = sample_weight();
    let radius = sample_radius();
    let mut circles = Vec::new();
    circles.extend(
        std::iter::repeat_with(|| {
            Circle::new(
                position,
                velocity,
                SAMPLE_COLOUR,
                SAMPLE_MATERIAL,
                weight,
                radius,
            )
        })
        .take(count as usize),
    );
    circles
}

/// Append-by-copy through the fluent chain.
pub fn collect_push_fluent(count: u32) -> Vec<Circle> {
    let position = sample_position();
    let velocity = sample_velocity();
    let weight = sample_weight();
    let radius = sample_radius();
    let mut circles = Vec::new();
    for _ in 0..count {
        circles.push(
            Circle::default()
                .with_position(position)
                .with_velocity(velocity)
                .with_colour(SAMPLE_COLOUR)
                .with_material(SAMPLE_MATERIAL)
                .with_weight(weight)
                .with_radius(radius)
                .build(),
        );
    }
    circles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_round_trip_is_exact() {
        let raw = 8.0_f32;
        assert_eq!(Meters::new(raw).get(), raw);
        assert_eq!(raw.meters().get(), raw);
        assert_eq!(raw.kilograms().get(), raw);
    }

    #[test]
    fn test_wrapper_equality_wrapped_and_raw() {
        let a = 7.0.kilograms();
        let b = 7.0.kilograms();
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(a, 7.0_f32);
        assert_ne!(a, 7.5_f32);
    }

    #[test]
    fn test_wrapper_has_no_runtime_representation() {
        assert_eq!(std::mem::size_of::<Meters>(), std::mem::size_of::<f32>());
        assert_eq!(
            std::mem::size_of::<Position>(),
            std::mem::size_of::<Vector2D>()
        );
    }

    #[test]
    fn test_constructor_stores_inputs() {
        let circle = sample();
        assert_eq!(circle.position(), sample_position().get());
        assert_eq!(circle.velocity(), sample_velocity().get());
        assert_eq!(circle.colour(), SAMPLE_COLOUR);
        assert_eq!(circle.material(), SAMPLE_MATERIAL);
        assert_eq!(circle.weight(), sample_weight().get());
        assert_eq!(circle.radius(), sample_radius().get());
    }

    #[test]
    fn test_fluent_matches_constructor() {
        let fluent = Circle::default()
            .with_position(sample_position())
            .with_velocity(sample_velocity())
            .with_colour(SAMPLE_COLOUR)
            .with_material(SAMPLE_MATERIAL)
            .with_weight(sample_weight())
            .with_radius(sample_radius())
            .build();
        assert_eq!(fluent, sample());
    }

    #[test]
    fn test_vector_fluent_matches_constructor() {
        let fluent = Vector2D::default()
            .with_x(X::new(1.0.meters()))
            .with_y(Y::new(2.0.meters()))
            .build();
        assert_eq!(fluent, sample_position().get());
        assert_eq!(fluent.x(), 1.0_f32);
        assert_eq!(fluent.y(), 2.0_f32);
    }

    #[test]
    fn test_default_is_all_zero() {
        let circle = Circle::default();
        assert_eq!(circle.position(), Vector2D::default());
        assert_eq!(circle.velocity(), Vector2D::default());
        assert_eq!(circle.position().x(), 0.0_f32);
        assert_eq!(circle.position().y(), 0.0_f32);
        assert_eq!(circle.colour(), Colour::White);
        assert_eq!(circle.material(), MaterialId(0));
        assert_eq!(circle.weight(), 0.0_f32);
        assert_eq!(circle.radius(), 0.0_f32);
    }

    #[test]
    fn test_equality_is_field_wise() {
        let a = sample();
        let b = sample();
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, b.with_colour(Colour::White));
        assert_ne!(a, b.with_radius(Radius::new(9.0.meters())));
        assert_ne!(
            a,
            b.with_position(Position::new(Vector2D::new(
                X::new(1.0.meters()),
                Y::new(2.5.meters()),
            )))
        );
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&8.0.meters()).unwrap();
        assert_eq!(json, "8.0");
        let back: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, 8.0_f32);
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
