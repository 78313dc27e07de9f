//! Highlighted constellation figures.

use super::stars::{to_object, StarRow};
use super::Constellation;

const LEO: &[StarRow] = &[
    ("Regulus", 152.093, 11.967, 1.35, "Leo"),
    ("Algieba", 154.993, 19.842, 2.28, "Leo"),
    ("Denebola", 177.265, 14.572, 2.14, "Leo"),
    ("Zosma", 169.619, 20.524, 2.56, "Leo"),
    ("Chertan", 165.045, 15.429, 3.33, "Leo"),
];

const SAGITTARIUS: &[StarRow] = &[
    ("Kaus Australis", 276.043, -34.385, 1.85, "Sagittarius"),
    ("Nunki", 283.816, -26.297, 2.02, "Sagittarius"),
    ("Ascella", 290.972, -29.880, 2.60, "Sagittarius"),
    ("Kaus Media", 273.440, -29.828, 2.70, "Sagittarius"),
    ("Kaus Borealis", 271.452, -25.421, 2.81, "Sagittarius"),
    ("Albaldah", 276.990, -25.421, 2.82, "Sagittarius"),
];

/// Leo and Sagittarius, both highlighted.
pub fn highlighted_constellations() -> Vec<Constellation> {
    vec![
        Constellation {
            name: "Leo".to_string(),
            objects: LEO.iter().map(to_object).collect(),
            highlighted: true,
            color: "#FFD700".to_string(),
        },
        Constellation {
            name: "Sagittarius".to_string(),
            objects: SAGITTARIUS.iter().map(to_object).collect(),
            highlighted: true,
            color: "#FF6B6B".to_string(),
        },
    ]
}
