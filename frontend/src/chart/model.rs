//! In-memory chart state and the payload-to-model transform.
//!
//! The model is deliberately decoupled from the drawing code so the
//! transform can be tested without a canvas.

use shared::BalancesResource;

/// One rendered line: an account name and its balance series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<f64>,
}

/// Whether the model still holds the synthetic pre-load series.
/// The transition to `Populated` is one-way; there is no refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPhase {
    Placeholder,
    Populated,
}

/// State driving the rendered chart: shared x-axis labels plus one
/// series per account.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartSeries>,
    pub phase: ChartPhase,
}

impl ChartModel {
    /// Zero-valued single-series model shown until real data arrives,
    /// so the canvas renders immediately without a visible gap.
    pub fn placeholder() -> Self {
        Self {
            labels: vec!["0".to_string()],
            datasets: vec![ChartSeries {
                label: String::new(),
                data: vec![0.0],
            }],
            phase: ChartPhase::Placeholder,
        }
    }

    /// Replace the model with a fetched resource.
    ///
    /// Labels are taken verbatim, existing datasets are dropped, and
    /// one series per account is appended in payload key order. A
    /// payload without `balances` leaves the dataset list empty.
    pub fn apply_resource(&mut self, resource: BalancesResource) {
        self.labels = resource.dates;
        self.datasets.clear();
        if let Some(balances) = resource.balances {
            for (account, series) in balances {
                self.datasets.push(ChartSeries {
                    label: account,
                    data: series,
                });
            }
        }
        self.phase = ChartPhase::Populated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resource() -> BalancesResource {
        BalancesResource {
            dates: vec!["2024-01".to_string(), "2024-02".to_string()],
            balances: Some(vec![
                ("checking".to_string(), vec![1.0, 2.0]),
                ("savings".to_string(), vec![3.0, 4.0]),
            ]),
        }
    }

    #[test]
    fn placeholder_has_single_zero_series() {
        let model = ChartModel::placeholder();

        assert_eq!(model.labels, vec!["0"]);
        assert_eq!(model.datasets.len(), 1);
        assert_eq!(model.datasets[0].data, vec![0.0]);
        assert_eq!(model.phase, ChartPhase::Placeholder);
    }

    #[test]
    fn apply_resource_preserves_account_order() {
        let mut model = ChartModel::placeholder();
        model.apply_resource(sample_resource());

        assert_eq!(model.labels, vec!["2024-01", "2024-02"]);
        assert_eq!(model.datasets.len(), 2);
        assert_eq!(model.datasets[0].label, "checking");
        assert_eq!(model.datasets[0].data, vec![1.0, 2.0]);
        assert_eq!(model.datasets[1].label, "savings");
        assert_eq!(model.datasets[1].data, vec![3.0, 4.0]);
        assert_eq!(model.phase, ChartPhase::Populated);
    }

    #[test]
    fn apply_resource_twice_is_idempotent() {
        let mut once = ChartModel::placeholder();
        once.apply_resource(sample_resource());

        let mut twice = ChartModel::placeholder();
        twice.apply_resource(sample_resource());
        twice.apply_resource(sample_resource());

        // Datasets are cleared before repopulation, so nothing accumulates.
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_balances_yields_empty_datasets() {
        let mut model = ChartModel::placeholder();
        model.apply_resource(BalancesResource {
            dates: vec!["2024-01".to_string(), "2024-02".to_string()],
            balances: None,
        });

        assert_eq!(model.labels, vec!["2024-01", "2024-02"]);
        assert!(model.datasets.is_empty());
    }

    #[test]
    fn missing_dates_yields_empty_labels() {
        let mut model = ChartModel::placeholder();
        model.apply_resource(BalancesResource {
            dates: Vec::new(),
            balances: Some(vec![("checking".to_string(), vec![5.0])]),
        });

        assert!(model.labels.is_empty());
        assert_eq!(model.datasets.len(), 1);
    }
}
