use crate::app::Message;
use crate::catalog::ANALYTICS_METRICS;
use plotters::chart::ChartBuilder;
use plotters::prelude::{IntoSegmentedCoord, SegmentValue};
use plotters::series::Histogram;
use plotters::style::{Color, RGBColor};
use plotters_iced::{Chart, DrawingBackend};

const BAR_COLOR: RGBColor = RGBColor(46, 134, 171);
const AXIS_COLOR: RGBColor = RGBColor(60, 60, 60);
const BACKGROUND: RGBColor = RGBColor(245, 245, 240);

// Analytics Chart
pub struct AnalyticsChartType;

impl Chart<Message> for AnalyticsChartType {
    type State = ();

    fn build_chart<DB: DrawingBackend>(&self, _state: &Self::State, mut builder: ChartBuilder<DB>) {
        let max_value = ANALYTICS_METRICS.iter().map(|m| m.value).max().unwrap_or(1);
        let categories = ANALYTICS_METRICS.len() as u32;

        let mut chart = builder
            .margin(15)
            .caption("Marketplace Activity", ("sans-serif", 20))
            .x_label_area_size(30)
            .y_label_area_size(30)
            .build_cartesian_2d((0u32..categories).into_segmented(), 0u32..max_value + 2)
            .expect("Failed to build chart");

        chart
            .plotting_area()
            .fill(&BACKGROUND)
            .expect("Failed to fill background");

        chart
            .configure_mesh()
            .disable_x_mesh()
            .axis_style(AXIS_COLOR)
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(i) => ANALYTICS_METRICS
                    .get(*i as usize)
                    .map(|m| m.name.to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .draw()
            .expect("Failed to draw mesh");

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BAR_COLOR.filled())
                    .margin(20)
                    .data(
                        ANALYTICS_METRICS
                            .iter()
                            .enumerate()
                            .map(|(i, m)| (i as u32, m.value)),
                    ),
            )
            .expect("Failed to draw series");
    }
}
