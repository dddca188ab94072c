// Copyright 2025 John Doe
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The three `Circle` modeling disciplines under comparison.
//!
//! The variants are intentionally redundant: same data, same operations,
//! different typing strength. They must stay structurally parallel so the
//! benchmarks measure only the cost of the discipline itself.

pub mod plain;
pub mod strong;
pub mod typed;

/// Number of circles each bulk-accumulation benchmark constructs.
pub const CREATION_COUNT: u32 = 1_000_000;

/// A catalog entry describing one modeling discipline, used for bench labels
/// and reporting.
pub struct Discipline {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// All disciplines, in bench-report order.
pub const CATALOG: [Discipline; 3] = [
    Discipline {
        id: "plain",
        name: "Plain fields",
        description: "eight raw scalar fields, fluent setters",
    },
    Discipline {
        id: "typed",
        name: "Vector2D-composed",
        description: "Vector2D position/velocity, Colour enum, MaterialId newtype",
    },
    Discipline {
        id: "strong",
        name: "Strong wrappers",
        description: "tag-distinct unit wrappers on every scalar",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in CATALOG.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    // The bench harness derives its labels from these ids and matches on
    // them exhaustively, so the set is part of the public contract.
    #[test]
    fn test_catalog_lists_every_discipline() {
        let ids: Vec<&str> = CATALOG.iter().map(|d| d.id).collect();
        assert_eq!(ids, ["plain", "typed", "strong"]);
    }
}
