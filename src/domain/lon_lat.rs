use serde::{Deserialize, Serialize};

/// A `[longitude, latitude]` pair in decimal degrees, serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonLat(pub f64, pub f64);

impl LonLat {
    pub fn longitude(&self) -> f64 {
        self.0
    }

    pub fn latitude(&self) -> f64 {
        self.1
    }
}

impl From<LonLat> for Vec<f64> {
    fn from(lon_lat: LonLat) -> Self {
        vec![lon_lat.0, lon_lat.1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_longitude_first() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&LonLat(-122.3321, 47.6062))?;

        assert_eq!(json, "[-122.3321,47.6062]");
        Ok(())
    }
}
