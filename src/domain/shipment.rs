use serde::Serialize;

use super::{
    density::{line_density, round2},
    entities::CargoItem,
    freight_class::FreightClass,
};

/// Totals across every classifiable line of a shipment.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentSummary {
    pub line_count: usize,
    pub classified_lines: usize,
    pub incomplete_lines: usize,
    pub handling_units: u32,
    pub total_weight: f64,
    pub total_cubic_feet: f64,
    pub shipment_density: Option<f64>,
    pub shipment_class: Option<FreightClass>,
    /// Highest class number among the lines.
    pub highest_class: Option<FreightClass>,
}

impl ShipmentSummary {
    pub fn is_empty(&self) -> bool {
        self.classified_lines == 0
    }
}

pub fn summarize_shipment(items: &[CargoItem]) -> ShipmentSummary {
    let mut summary = ShipmentSummary {
        line_count: items.len(),
        ..ShipmentSummary::default()
    };
    let mut total_weight = 0.0;
    let mut total_cubic_feet = 0.0;

    for item in items {
        let measurements = item.measurements();
        let Some(line) = line_density(&measurements) else {
            summary.incomplete_lines += 1;
            continue;
        };
        summary.classified_lines += 1;
        summary.handling_units = summary.handling_units.saturating_add(measurements.quantity);
        total_weight += measurements.weight;
        total_cubic_feet += line.cubic_feet;
        summary.highest_class = summary
            .highest_class
            .max(Some(line.freight_class));
    }

    if total_cubic_feet > 0.0 {
        let density = total_weight / total_cubic_feet;
        summary.shipment_density = Some(round2(density));
        summary.shipment_class = Some(FreightClass::from_density(density));
    }
    summary.total_weight = round2(total_weight);
    summary.total_cubic_feet = round2(total_cubic_feet);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(weight: &str, dims: (&str, &str, &str), quantity: &str) -> CargoItem {
        CargoItem {
            weight: weight.into(),
            length: dims.0.into(),
            width: dims.1.into(),
            height: dims.2.into(),
            quantity: quantity.into(),
            ..CargoItem::default()
        }
    }

    #[test]
    fn empty_shipment() {
        let summary = summarize_shipment(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.shipment_class, None);
        assert_eq!(summary.highest_class, None);
    }

    #[test]
    fn totals_skip_incomplete_lines() {
        let items = vec![
            line("600", ("48", "40", "36"), "1"),
            line("", ("48", "40", "36"), "2"),
            line("50", ("12", "12", "12"), "1"),
        ];
        let summary = summarize_shipment(&items);
        assert_eq!(summary.line_count, 3);
        assert_eq!(summary.classified_lines, 2);
        assert_eq!(summary.incomplete_lines, 1);
        assert_eq!(summary.handling_units, 2);
        assert!((summary.total_weight - 650.0).abs() < 1e-9);
        assert!((summary.total_cubic_feet - 41.0).abs() < 1e-9);
        // 650 / 41 = 15.85
        assert!((summary.shipment_density.unwrap() - 15.85).abs() < 1e-9);
        assert_eq!(summary.shipment_class, Some(FreightClass::Class70));
        assert_eq!(summary.highest_class, Some(FreightClass::Class70));
    }

    #[test]
    fn highest_class_is_the_lightest_line() {
        let items = vec![
            line("50", ("12", "12", "12"), "1"),
            line("20", ("48", "48", "48"), "1"),
        ];
        let summary = summarize_shipment(&items);
        assert_eq!(summary.highest_class, Some(FreightClass::Class500));
    }
}
