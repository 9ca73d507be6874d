use crate::app::Message;
use crate::catalog::LIFECYCLE_STEPS;
use crate::charts::AnalyticsChartType;
use iced::widget::{checkbox, column};
use iced::{Element, Length};
use plotters_iced::ChartWidget;

pub fn analytics() -> Element<'static, Message> {
    let chart = ChartWidget::new(AnalyticsChartType)
        .width(Length::Fill)
        .height(Length::Fixed(420.0));

    column![chart].into()
}

pub fn order_life_cycle(checked: &[bool; LIFECYCLE_STEPS.len()]) -> Element<'static, Message> {
    column(LIFECYCLE_STEPS.iter().enumerate().map(|(index, step)| {
        checkbox(*step, checked[index])
            .on_toggle(move |value| Message::LifecycleToggled(index, value))
            .into()
    }))
    .spacing(12)
    .into()
}
