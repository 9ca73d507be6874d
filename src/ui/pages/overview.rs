use crate::app::Message;
use crate::ui::banner;
use iced::widget::{column, text};
use iced::Element;

const PROBLEM_POINTS: &str = "\
• Fragmented mineral trade
• High fraud & counterparty risk
• No price discovery
• Slow deal execution";

const SOLUTION_POINTS: &str = "\
A buyer-centric digital marketplace with:
- Verified suppliers
- Escrow & block fund logic
- Structured bidding & consulting workflows";

pub fn home() -> Element<'static, Message> {
    column![
        text("The Problem").size(22),
        text(PROBLEM_POINTS),
        text("Our Solution").size(22),
        text(SOLUTION_POINTS),
        banner::success("This demo proves the problem, solution credibility, and scalability."),
    ]
    .spacing(15)
    .into()
}

const ABOUT_COPY: &str = "\
Mineral Trading Africa (MTA) is designed to become Africa’s trusted mineral marketplace.

Positioned against:
- Laprecio
- B2BMineral
- MineralDex

Our advantage: Trust + Process + Buyer Control";

pub fn about() -> Element<'static, Message> {
    column![text(ABOUT_COPY)].spacing(15).into()
}
