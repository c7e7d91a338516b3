use crate::types::field::FieldName;
use crate::types::forecast_series::HOURS_PER_DAY;

/// Everything a [`crate::ChartSurface`] needs to draw one hourly chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub field: FieldName,
    /// X axis labels, always `"0"` to `"23"`.
    pub labels: Vec<String>,
    pub values: [f64; HOURS_PER_DAY],
    pub label: &'static str,
    /// The y axis always includes zero so magnitudes compare honestly.
    pub begin_at_zero: bool,
}

impl ChartSpec {
    pub fn new(field: FieldName, values: [f64; HOURS_PER_DAY]) -> Self {
        Self {
            field,
            labels: (0..HOURS_PER_DAY).map(|hour| hour.to_string()).collect(),
            values,
            label: field.chart_label(),
            begin_at_zero: true,
        }
    }

    /// Y axis bounds covering every value, and zero when `begin_at_zero` is set.
    pub fn y_range(&self) -> (f64, f64) {
        let finite = self.values.iter().copied().filter(|v| v.is_finite());
        let (mut low, mut high) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if !low.is_finite() {
            (low, high) = (0.0, 0.0);
        }
        if self.begin_at_zero {
            low = low.min(0.0);
            high = high.max(0.0);
        }
        if high <= low {
            high = low + 1.0;
        }
        (low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_labels() {
        let spec = ChartSpec::new(FieldName::Temperature, [0.0; HOURS_PER_DAY]);
        assert_eq!(spec.labels.len(), HOURS_PER_DAY);
        assert_eq!(spec.labels.first().map(String::as_str), Some("0"));
        assert_eq!(spec.labels.last().map(String::as_str), Some("23"));
        assert!(spec.begin_at_zero);
    }

    #[test]
    fn test_y_range_starts_at_zero_for_positive_data() {
        let mut values = [5.0; HOURS_PER_DAY];
        values[10] = 9.0;
        let spec = ChartSpec::new(FieldName::WindSpeed, values);
        assert_eq!(spec.y_range(), (0.0, 9.0));
    }

    #[test]
    fn test_y_range_keeps_zero_for_negative_data() {
        let mut values = [-5.0; HOURS_PER_DAY];
        values[3] = -12.0;
        let spec = ChartSpec::new(FieldName::Temperature, values);
        assert_eq!(spec.y_range(), (-12.0, 0.0));
    }

    #[test]
    fn test_y_range_flat_zero_series_is_not_empty() {
        let spec = ChartSpec::new(FieldName::Precipitation, [0.0; HOURS_PER_DAY]);
        assert_eq!(spec.y_range(), (0.0, 1.0));
    }
}
