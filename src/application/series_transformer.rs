// Series transformer - Fans each raw sample out into three chart points
use crate::domain::ping::{ChartPoint, FormattedSeries, QueryResponse};
use crate::domain::time_label::TimeLabelFormatter;

#[derive(Debug, Clone)]
pub struct SeriesTransformer {
    formatter: TimeLabelFormatter,
}

impl SeriesTransformer {
    pub fn new(formatter: TimeLabelFormatter) -> Self {
        Self { formatter }
    }

    /// Element-wise map: index `i` of every output series comes from `values[i]`.
    pub fn transform(&self, response: &QueryResponse) -> FormattedSeries {
        let mut series = FormattedSeries::with_capacity(response.values.len());

        for sample in &response.values {
            let label = self.formatter.format(sample.timestamp);
            series
                .ping_min
                .push(ChartPoint::new(label.clone(), sample.value.min_value));
            series
                .ping_mean
                .push(ChartPoint::new(label.clone(), sample.value.avg_value));
            series
                .ping_max
                .push(ChartPoint::new(label, sample.value.max_value));
        }

        series
    }
}
