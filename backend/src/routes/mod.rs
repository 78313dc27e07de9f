pub mod constellations;
pub mod moon;
pub mod sky_data;
pub mod stars;

/// `GET /` static page.
pub const INDEX: &str = "/";

/// Static assets mount point.
pub const STATIC_ASSETS: &str = "/static";

/// Liveness check.
pub const HEALTH: &str = "/health";

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        assert_eq!(super::stars::GET_STARS, "/api/stars");
        assert_eq!(
            super::constellations::GET_CONSTELLATIONS,
            "/api/constellations"
        );
        assert_eq!(super::moon::GET_MOON, "/api/moon");
        assert_eq!(super::sky_data::GET_SKY_DATA, "/api/sky-data");
        assert_eq!(super::INDEX, "/");
        assert_eq!(super::STATIC_ASSETS, "/static");
        assert_eq!(super::HEALTH, "/health");
    }
}
