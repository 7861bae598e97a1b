//! Density and freight class for a single cargo line.

use serde::{Serialize, Serializer};

use super::{
    entities::{CargoItem, CargoMeasurements},
    freight_class::FreightClass,
};

pub const CUBIC_INCHES_PER_CUBIC_FOOT: f64 = 1728.0;

/// Derived view of a cargo line. All three fields are empty together when
/// the line is missing a measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityResult {
    /// lbs/ft³, rounded to 2 decimals.
    pub density: Option<f64>,
    /// Total volume across all units, rounded to 2 decimals.
    pub cubic_feet: Option<f64>,
    #[serde(serialize_with = "class_or_empty")]
    pub freight_class: Option<FreightClass>,
}

impl DensityResult {
    pub const INCOMPLETE: DensityResult = DensityResult {
        density: None,
        cubic_feet: None,
        freight_class: None,
    };

    pub fn is_complete(&self) -> bool {
        self.freight_class.is_some()
    }

    /// Class token, or `""` while the line cannot be classified.
    #[cfg(test)]
    pub fn class_token(&self) -> &'static str {
        self.freight_class.map(|class| class.token()).unwrap_or("")
    }

    pub fn density_display(&self) -> String {
        self.density
            .map(|value| format!("{value:.2}"))
            .unwrap_or_default()
    }

    pub fn cubic_feet_display(&self) -> String {
        self.cubic_feet
            .map(|value| format!("{value:.2}"))
            .unwrap_or_default()
    }
}

fn class_or_empty<S: Serializer>(
    class: &Option<FreightClass>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(class.map(|c| c.token()).unwrap_or(""))
}

/// Unrounded figures for a complete line, shared with shipment totals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineDensity {
    pub cubic_feet: f64,
    pub density: f64,
    pub freight_class: FreightClass,
}

/// Never fails: incomplete input gives [`DensityResult::INCOMPLETE`].
pub fn compute_density(item: &CargoItem) -> DensityResult {
    match line_density(&item.measurements()) {
        Some(line) => DensityResult {
            density: Some(round2(line.density)),
            cubic_feet: Some(round2(line.cubic_feet)),
            freight_class: Some(line.freight_class),
        },
        None => DensityResult::INCOMPLETE,
    }
}

/// Density uses the line weight as entered, not weight × quantity, while
/// the volume does include quantity.
pub fn line_density(measurements: &CargoMeasurements) -> Option<LineDensity> {
    if !measurements.is_complete() {
        return None;
    }
    let cubic_feet = measurements.cubic_inches() / CUBIC_INCHES_PER_CUBIC_FOOT;
    let density = measurements.weight / cubic_feet;
    if !cubic_feet.is_finite() || !density.is_finite() {
        return None;
    }
    Some(LineDensity {
        cubic_feet,
        density,
        freight_class: FreightClass::from_density(density),
    })
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::loose_number::LooseNumber;

    const EPS: f64 = 1e-9;

    fn item(weight: &str, length: &str, width: &str, height: &str, quantity: &str) -> CargoItem {
        CargoItem {
            id: "line-1".to_string(),
            description: "Pallet".to_string(),
            weight: weight.into(),
            length: length.into(),
            width: width.into(),
            height: height.into(),
            quantity: quantity.into(),
        }
    }

    fn numeric(weight: f64, length: f64, width: f64, height: f64, quantity: f64) -> CargoItem {
        CargoItem {
            weight: weight.into(),
            length: length.into(),
            width: width.into(),
            height: height.into(),
            quantity: quantity.into(),
            ..CargoItem::default()
        }
    }

    #[test]
    fn standard_pallet() {
        let result = compute_density(&numeric(500.0, 48.0, 40.0, 48.0, 1.0));
        assert!((result.cubic_feet.unwrap() - 53.33).abs() < EPS);
        assert!((result.density.unwrap() - 9.38).abs() < EPS);
        assert_eq!(result.freight_class, Some(FreightClass::Class100));
        assert_eq!(result.class_token(), "100");
    }

    #[test]
    fn incomplete_inputs_give_sentinel() {
        let cases = [
            item("0", "48", "40", "48", "1"),
            item("500", "-48", "40", "48", "1"),
            item("500", "48", "abc", "48", "1"),
            item("500", "48", "40", "", "1"),
            item("", "", "", "", ""),
        ];
        for case in cases {
            let result = compute_density(&case);
            assert_eq!(result, DensityResult::INCOMPLETE);
            assert_eq!(result.class_token(), "");
            assert!(!result.is_complete());
        }
        assert_eq!(compute_density(&CargoItem::default()), DensityResult::INCOMPLETE);
    }

    #[test]
    fn non_positive_quantity_defaults_to_one() {
        let zero = compute_density(&numeric(100.0, 10.0, 10.0, 10.0, 0.0));
        let one = compute_density(&numeric(100.0, 10.0, 10.0, 10.0, 1.0));
        let negative = compute_density(&item("100", "10", "10", "10", "-4"));
        let garbage = compute_density(&item("100", "10", "10", "10", "lots"));
        assert_eq!(zero, one);
        assert_eq!(negative, one);
        assert_eq!(garbage, one);
    }

    #[test]
    fn quantity_scales_volume_but_not_weight() {
        let single = compute_density(&numeric(600.0, 48.0, 40.0, 36.0, 1.0));
        let triple = compute_density(&numeric(600.0, 48.0, 40.0, 36.0, 3.0));
        assert!((single.cubic_feet.unwrap() - 40.0).abs() < EPS);
        assert!((triple.cubic_feet.unwrap() - 120.0).abs() < EPS);
        assert!((single.density.unwrap() - 15.0).abs() < EPS);
        assert!((triple.density.unwrap() - 5.0).abs() < EPS);
        assert_eq!(single.freight_class, Some(FreightClass::Class70));
        assert_eq!(triple.freight_class, Some(FreightClass::Class175));
    }

    #[test]
    fn exact_threshold_is_inclusive() {
        // 12 x 12 x 12 in = 1 ft³, so density equals weight.
        let at = compute_density(&numeric(50.0, 12.0, 12.0, 12.0, 1.0));
        let below = compute_density(&numeric(49.99, 12.0, 12.0, 12.0, 1.0));
        assert_eq!(at.class_token(), "50");
        assert_eq!(below.class_token(), "55");
        assert!((below.density.unwrap() - 49.99).abs() < EPS);
    }

    #[test]
    fn more_weight_never_raises_class() {
        let lines: Vec<LineDensity> = (1..400)
            .map(|step| {
                let weight = f64::from(step) * 2.5;
                line_density(&numeric(weight, 48.0, 40.0, 40.0, 2.0).measurements()).unwrap()
            })
            .collect();
        for pair in lines.windows(2) {
            assert!(pair[1].density > pair[0].density);
            assert!(pair[1].freight_class.numeric() <= pair[0].freight_class.numeric());
        }
    }

    #[test]
    fn outputs_are_rounded_to_two_places() {
        let result = compute_density(&item("123.4567", "17.3", "11.11", "9.87", "3"));
        for value in [result.density.unwrap(), result.cubic_feet.unwrap()] {
            assert!((value * 100.0 - (value * 100.0).round()).abs() < 1e-6);
        }
        assert_eq!(result.density_display().split('.').nth(1).map(str::len), Some(2));
    }

    #[test]
    fn classification_uses_unrounded_density() {
        // 49.996 lbs in 1 ft³ rounds to 50.00 for display but stays class 55.
        let result = compute_density(&numeric(49.996, 12.0, 12.0, 12.0, 1.0));
        assert_eq!(result.density_display(), "50.00");
        assert_eq!(result.class_token(), "55");
    }

    #[test]
    fn huge_but_finite_density_is_still_classified() {
        let result = compute_density(&numeric(1e306, 1000.0, 1000.0, 1000.0, 1.0));
        let density = result.density.unwrap();
        assert!(density.is_finite());
        assert!((density / 1.728e300 - 1.0).abs() < 1e-9);
        assert_eq!(result.freight_class, Some(FreightClass::Class50));
    }

    #[test]
    fn light_freight_is_class_500() {
        let result = compute_density(&numeric(20.0, 48.0, 48.0, 48.0, 1.0));
        assert_eq!(result.freight_class, Some(FreightClass::Class500));
    }

    #[test]
    fn mixed_text_and_numbers() {
        let mixed = CargoItem {
            weight: LooseNumber::Number(500.0),
            length: "48 in".into(),
            width: LooseNumber::Number(40.0),
            height: "48".into(),
            quantity: "1".into(),
            ..CargoItem::default()
        };
        assert_eq!(compute_density(&mixed).class_token(), "100");
    }

    #[test]
    fn serializes_sentinel_and_values() {
        let empty = serde_json::to_value(DensityResult::INCOMPLETE).unwrap();
        assert_eq!(
            empty,
            serde_json::json!({"density": null, "cubicFeet": null, "freightClass": ""})
        );
        let full = serde_json::to_value(compute_density(&numeric(50.0, 12.0, 12.0, 12.0, 1.0)))
            .unwrap();
        assert_eq!(
            full,
            serde_json::json!({"density": 50.0, "cubicFeet": 1.0, "freightClass": "50"})
        );
    }
}
