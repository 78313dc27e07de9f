//! Bright star listing used by `/api/stars`.
//!
//! Order is significant and duplicates are intentional: Capella and
//! Bellatrix each appear twice and are reported twice.

use crate::models::CelestialObject;

/// (name, ra°, dec°, magnitude, constellation)
pub(crate) type StarRow = (&'static str, f64, f64, f64, &'static str);

pub(crate) const BRIGHT_STARS: &[StarRow] = &[
    // Brightest stars (magnitude < 1.5)
    ("Sirius", 101.287, -16.716, -1.46, "Cane Maggiore"),
    ("Canopus", 95.988, -52.696, -0.74, "Carena"),
    ("Arcturus", 213.915, 19.182, -0.05, "Boote"),
    ("Vega", 279.234, 38.784, 0.03, "Lira"),
    ("Capella", 79.172, 45.998, 0.08, "Auriga"),
    ("Rigel", 78.634, -8.202, 0.13, "Orione"),
    ("Procyon", 114.825, 5.225, 0.34, "Cane Minore"),
    ("Betelgeuse", 88.793, 7.407, 0.50, "Orione"),
    ("Altair", 297.696, 8.868, 0.77, "Aquila"),
    ("Aldebaran", 68.980, 16.509, 0.85, "Toro"),
    ("Spica", 201.298, -11.161, 0.97, "Vergine"),
    ("Antares", 247.352, -26.432, 1.09, "Scorpione"),
    ("Pollux", 116.329, 28.026, 1.14, "Gemelli"),
    ("Deneb", 310.358, 45.280, 1.25, "Cigno"),
    ("Regulus", 152.093, 11.967, 1.35, "Leone"),
    // Orsa Maggiore
    ("Dubhe", 165.932, 61.751, 1.79, "Orsa Maggiore"),
    ("Merak", 165.460, 56.382, 2.37, "Orsa Maggiore"),
    ("Phecda", 178.457, 53.695, 2.44, "Orsa Maggiore"),
    ("Megrez", 183.856, 57.026, 3.31, "Orsa Maggiore"),
    ("Alioth", 193.507, 55.960, 1.77, "Orsa Maggiore"),
    ("Mizar", 200.981, 54.925, 2.04, "Orsa Maggiore"),
    ("Alkaid", 206.885, 49.313, 1.86, "Orsa Maggiore"),
    // Cassiopea
    ("Schedar", 10.127, 56.537, 2.23, "Cassiopea"),
    ("Caph", 2.295, 59.150, 2.27, "Cassiopea"),
    ("Gamma Cas", 14.177, 60.717, 2.47, "Cassiopea"),
    ("Ruchbah", 20.769, 60.235, 2.66, "Cassiopea"),
    ("Segin", 23.396, 63.670, 3.38, "Cassiopea"),
    // Orione
    ("Bellatrix", 81.283, 6.350, 1.64, "Orione"),
    ("Mintaka", 83.002, -0.299, 2.23, "Orione"),
    ("Alnilam", 84.053, -1.202, 1.70, "Orione"),
    ("Alnitak", 85.190, -1.943, 1.79, "Orione"),
    ("Saiph", 86.939, -9.670, 2.09, "Orione"),
    // Cigno
    ("Sadr", 305.557, 40.257, 2.20, "Cigno"),
    ("Gienah", 311.553, 33.970, 2.46, "Cigno"),
    ("Delta Cyg", 292.680, 45.131, 2.87, "Cigno"),
    ("Albireo", 292.176, 27.960, 3.18, "Cigno"),
    // Lira
    ("Sheliak", 282.520, 33.363, 3.45, "Lira"),
    ("Sulafat", 284.736, 32.690, 3.24, "Lira"),
    // Aquila
    ("Tarazed", 296.565, 10.613, 2.72, "Aquila"),
    ("Alshain", 299.689, 6.407, 3.71, "Aquila"),
    // Additional bright stars
    ("Castor", 113.649, 31.888, 1.57, "Gemelli"),
    ("Elnath", 84.411, 28.608, 1.68, "Toro"),
    ("Bellatrix", 81.283, 6.350, 1.64, "Orione"),
    ("Alnath", 84.411, 28.608, 1.68, "Toro"),
    ("Miaplacidus", 138.300, -69.717, 1.68, "Carena"),
    ("Alphard", 141.897, -8.659, 1.98, "Idra"),
    ("Hamal", 31.793, 23.462, 2.00, "Ariete"),
    ("Algenib", 3.308, 15.183, 2.83, "Pegaso"),
    ("Markab", 346.190, 15.205, 2.49, "Pegaso"),
    ("Scheat", 345.944, 28.083, 2.42, "Pegaso"),
    ("Alpheratz", 2.097, 29.091, 2.06, "Andromeda"),
    // Fainter stars (magnitude 2-4)
    ("Polaris", 37.946, 89.264, 1.98, "Orsa Minore"),
    ("Kochab", 222.676, 74.156, 2.08, "Orsa Minore"),
    ("Mirfak", 51.081, 49.861, 1.80, "Perseo"),
    ("Algol", 47.042, 40.956, 2.12, "Perseo"),
    ("Menkar", 45.570, 4.089, 2.54, "Balena"),
    ("Diphda", 10.897, -17.987, 2.04, "Balena"),
    ("Achernar", 24.429, -57.237, 0.46, "Eridano"),
    ("Acamar", 44.565, -40.305, 2.88, "Eridano"),
    ("Fomalhaut", 344.413, -29.622, 1.16, "Pesce Australe"),
    // Ofiuco, Ercole, Corona Boreale
    ("Ras Alhague", 263.734, 12.560, 2.08, "Ofiuco"),
    ("Sabik", 258.032, -15.725, 2.43, "Ofiuco"),
    ("Kornephoros", 247.555, 21.490, 2.77, "Ercole"),
    ("Zeta Her", 248.110, 31.603, 2.81, "Ercole"),
    ("Alphecca", 233.672, 26.715, 2.23, "Corona Boreale"),
    ("Gemma", 233.672, 26.715, 2.23, "Corona Boreale"),
    // Southern hemisphere
    ("Alpha Cen A", 219.902, -60.834, -0.01, "Centauro"),
    ("Beta Cen", 210.956, -60.373, 0.61, "Centauro"),
    ("Gacrux", 187.791, -57.113, 1.63, "Croce del Sud"),
    ("Acrux", 186.650, -63.099, 0.77, "Croce del Sud"),
    // Milky Way region
    ("Shaula", 263.402, -37.104, 1.63, "Scorpione"),
    ("Sargas", 264.330, -42.998, 1.87, "Scorpione"),
    ("Kaus Australis", 276.043, -34.385, 1.85, "Sagittario"),
    ("Nunki", 283.816, -26.297, 2.02, "Sagittario"),
    // Auriga
    ("Capella", 79.172, 45.998, 0.08, "Auriga"),
    ("Menkalinan", 89.882, 44.947, 1.90, "Auriga"),
    ("Mahasim", 84.411, 33.166, 2.99, "Auriga"),
];

pub(crate) fn to_object(&(name, ra, dec, mag, constellation): &StarRow) -> CelestialObject {
    CelestialObject::new(name, ra, dec, mag, constellation)
}

/// All bright stars in declaration order.
pub fn bright_stars() -> Vec<CelestialObject> {
    BRIGHT_STARS.iter().map(to_object).collect()
}
