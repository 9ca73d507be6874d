use crate::app::{AdminAction, AdminDesk, Message};
use crate::catalog::Supplier;
use crate::ui::banner;
use iced::widget::{button, column, pick_list, row, text};
use iced::Element;

pub fn back_office(desk: &AdminDesk) -> Element<'_, Message> {
    let verification = column![
        text("Supplier Verification").size(22),
        row![
            pick_list(&Supplier::ALL[..], Some(desk.supplier), Message::SupplierSelected),
            button(text("Approve Supplier"))
                .on_press(Message::AdminActionTriggered(AdminAction::SupplierApproved))
                .padding(8),
        ]
        .spacing(10),
    ]
    .spacing(10);

    let deal_control = column![
        text("Deal Control").size(22),
        row![
            button(text("Approve Deal"))
                .on_press(Message::AdminActionTriggered(AdminAction::DealApproved))
                .padding(8),
            button(text("Pause Bidding"))
                .on_press(Message::AdminActionTriggered(AdminAction::BiddingPaused))
                .padding(8),
        ]
        .spacing(10),
    ]
    .spacing(10);

    let reports = column![
        text("Reports").size(22),
        button(text("Generate PDF Report (Mock)"))
            .on_press(Message::AdminActionTriggered(AdminAction::ReportGenerated))
            .padding(8),
    ]
    .spacing(10);

    let mut content = column![verification, deal_control, reports].spacing(25);

    if let Some(action) = desk.last_action {
        content = content.push(banner::info(action.status_line()));
    }

    content.into()
}
