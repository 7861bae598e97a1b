use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// NMFC freight class, from densest (50) to lightest (500).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FreightClass {
    Class50,
    Class55,
    Class60,
    Class65,
    Class70,
    Class77_5,
    Class85,
    Class92_5,
    Class100,
    Class110,
    Class125,
    Class150,
    Class175,
    Class200,
    Class250,
    Class300,
    Class400,
    Class500,
}

/// Lower density bound (lbs/ft³, inclusive) for each class, densest first.
/// Anything below the last bound is class 500.
pub const DENSITY_CLASS_TABLE: [(f64, FreightClass); 17] = [
    (50.0, FreightClass::Class50),
    (35.0, FreightClass::Class55),
    (30.0, FreightClass::Class60),
    (22.5, FreightClass::Class65),
    (15.0, FreightClass::Class70),
    (13.5, FreightClass::Class77_5),
    (12.0, FreightClass::Class85),
    (10.5, FreightClass::Class92_5),
    (9.0, FreightClass::Class100),
    (8.0, FreightClass::Class110),
    (7.0, FreightClass::Class125),
    (6.0, FreightClass::Class150),
    (5.0, FreightClass::Class175),
    (4.0, FreightClass::Class200),
    (3.0, FreightClass::Class250),
    (2.0, FreightClass::Class300),
    (1.0, FreightClass::Class400),
];

impl FreightClass {
    pub const ALL: [FreightClass; 18] = [
        FreightClass::Class50,
        FreightClass::Class55,
        FreightClass::Class60,
        FreightClass::Class65,
        FreightClass::Class70,
        FreightClass::Class77_5,
        FreightClass::Class85,
        FreightClass::Class92_5,
        FreightClass::Class100,
        FreightClass::Class110,
        FreightClass::Class125,
        FreightClass::Class150,
        FreightClass::Class175,
        FreightClass::Class200,
        FreightClass::Class250,
        FreightClass::Class300,
        FreightClass::Class400,
        FreightClass::Class500,
    ];

    /// First band whose lower bound the density reaches. NaN lands in 500.
    pub fn from_density(density: f64) -> Self {
        DENSITY_CLASS_TABLE
            .iter()
            .find(|(min, _)| density >= *min)
            .map(|(_, class)| *class)
            .unwrap_or(FreightClass::Class500)
    }

    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        Self::ALL.into_iter().find(|class| class.token() == token)
    }

    pub fn token(&self) -> &'static str {
        match self {
            FreightClass::Class50 => "50",
            FreightClass::Class55 => "55",
            FreightClass::Class60 => "60",
            FreightClass::Class65 => "65",
            FreightClass::Class70 => "70",
            FreightClass::Class77_5 => "77.5",
            FreightClass::Class85 => "85",
            FreightClass::Class92_5 => "92.5",
            FreightClass::Class100 => "100",
            FreightClass::Class110 => "110",
            FreightClass::Class125 => "125",
            FreightClass::Class150 => "150",
            FreightClass::Class175 => "175",
            FreightClass::Class200 => "200",
            FreightClass::Class250 => "250",
            FreightClass::Class300 => "300",
            FreightClass::Class400 => "400",
            FreightClass::Class500 => "500",
        }
    }

    pub fn numeric(&self) -> f64 {
        match self {
            FreightClass::Class77_5 => 77.5,
            FreightClass::Class92_5 => 92.5,
            other => other.token().parse().unwrap_or(500.0),
        }
    }

    /// Density range `[min, max)` covered by this class. Class 50 has no
    /// upper bound and class 500 starts at zero.
    pub fn band(&self) -> (f64, Option<f64>) {
        let position = DENSITY_CLASS_TABLE
            .iter()
            .position(|(_, class)| class == self);
        match position {
            Some(0) => (DENSITY_CLASS_TABLE[0].0, None),
            Some(idx) => (
                DENSITY_CLASS_TABLE[idx].0,
                Some(DENSITY_CLASS_TABLE[idx - 1].0),
            ),
            None => (0.0, Some(DENSITY_CLASS_TABLE[DENSITY_CLASS_TABLE.len() - 1].0)),
        }
    }
}

impl fmt::Display for FreightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl Serialize for FreightClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for FreightClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        FreightClass::from_token(&token)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown freight class `{token}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_bounds_are_inclusive() {
        assert_eq!(FreightClass::from_density(50.0), FreightClass::Class50);
        assert_eq!(FreightClass::from_density(49.99), FreightClass::Class55);
        assert_eq!(FreightClass::from_density(22.5), FreightClass::Class65);
        assert_eq!(FreightClass::from_density(13.5), FreightClass::Class77_5);
        assert_eq!(FreightClass::from_density(10.5), FreightClass::Class92_5);
        assert_eq!(FreightClass::from_density(1.0), FreightClass::Class400);
        assert_eq!(FreightClass::from_density(0.99), FreightClass::Class500);
        assert_eq!(FreightClass::from_density(f64::NAN), FreightClass::Class500);
        assert_eq!(FreightClass::from_density(1_000.0), FreightClass::Class50);
    }

    #[test]
    fn every_bound_maps_to_its_own_class() {
        for (min, class) in DENSITY_CLASS_TABLE {
            assert_eq!(FreightClass::from_density(min), class);
        }
    }

    #[test]
    fn denser_means_lower_class_number() {
        let numbers: Vec<f64> = FreightClass::ALL.iter().map(|c| c.numeric()).collect();
        assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn tokens_round_trip() {
        for class in FreightClass::ALL {
            assert_eq!(FreightClass::from_token(class.token()), Some(class));
        }
        assert_eq!(FreightClass::from_token("77.5"), Some(FreightClass::Class77_5));
        assert_eq!(FreightClass::from_token("80"), None);
    }

    #[test]
    fn serializes_as_token() {
        let json = serde_json::to_string(&FreightClass::Class92_5).unwrap();
        assert_eq!(json, "\"92.5\"");
        let parsed: FreightClass = serde_json::from_str("\"125\"").unwrap();
        assert_eq!(parsed, FreightClass::Class125);
        assert!(serde_json::from_str::<FreightClass>("\"90\"").is_err());
    }

    #[test]
    fn bands_cover_table() {
        assert_eq!(FreightClass::Class50.band(), (50.0, None));
        assert_eq!(FreightClass::Class100.band(), (9.0, Some(10.5)));
        assert_eq!(FreightClass::Class500.band(), (0.0, Some(1.0)));
    }
}
