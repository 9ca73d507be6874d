use crate::app::{ConsultingForm, MembershipForm, Message};
use crate::catalog::{Role, MEMBERSHIP_DOCUMENTS};
use crate::ui::banner;
use iced::widget::{button, column, container, pick_list, row, text, text_editor, text_input};
use iced::{Element, Length};

pub fn consulting(form: &ConsultingForm) -> Element<'_, Message> {
    let mut content = column![
        text("Buyer Demand").size(22),
        text_editor(&form.buyer_need)
            .placeholder("Describe Mineral Demand")
            .on_action(Message::BuyerNeedEdited)
            .height(120),
        text("Seller Capability").size(22),
        text_editor(&form.seller_supply)
            .placeholder("Describe Available Supply")
            .on_action(Message::SellerSupplyEdited)
            .height(120),
        button(text("Submit for Matching"))
            .on_press(Message::SubmitMatching)
            .padding(10),
    ]
    .spacing(15);

    if form.matched {
        content = content.push(banner::success("Status: Matched → Deal in Progress"));
    }

    content.into()
}

// Escrow fund-flow sequence, rendered verbatim as preformatted text
const ESCROW_FLOW: &str = "\
Buyer → Escrow → Supplier
       ↓
 Conditions Verified
       ↓
    Release Funds
       ↓
     Shipment";

const PAYMENT_STRUCTURES: &str = "\
• Escrow
• Block Fund
• SBLC / DLC / MT760 (conceptual)";

pub fn banking_risk() -> Element<'static, Message> {
    column![
        banner::info("No live banking integration — demo only"),
        text("Payment Structures").size(22),
        text(PAYMENT_STRUCTURES),
        container(text(ESCROW_FLOW).font(iced::Font::MONOSPACE))
            .padding(15)
            .style(container::bordered_box),
    ]
    .spacing(15)
    .into()
}

pub fn membership(form: &MembershipForm) -> Element<'_, Message> {
    let role_picker = row![
        text("Register As").width(Length::Fixed(160.0)),
        pick_list(&Role::ALL[..], Some(form.role), Message::RoleSelected),
    ]
    .spacing(10)
    .align_y(iced::alignment::Vertical::Center);

    let company = row![
        text("Company Name").width(Length::Fixed(160.0)),
        text_input("Company Name", &form.company_name)
            .on_input(Message::CompanyNameChanged)
            .width(Length::Fixed(300.0)),
    ]
    .spacing(10)
    .align_y(iced::alignment::Vertical::Center);

    let documents = column(MEMBERSHIP_DOCUMENTS.iter().enumerate().map(|(index, label)| {
        let attached = form.documents_attached[index];
        row![
            text(*label).width(Length::Fixed(260.0)),
            button(text(if attached { "Attached ✓" } else { "Attach (Demo)" }))
                .on_press(Message::DocumentToggled(index))
                .padding(8),
        ]
        .spacing(10)
        .align_y(iced::alignment::Vertical::Center)
        .into()
    }))
    .spacing(10);

    let mut content = column![
        role_picker,
        company,
        text("Verification Documents").size(22),
        documents,
        button(text("Submit Application"))
            .on_press(Message::SubmitApplication)
            .padding(10),
    ]
    .spacing(15);

    if form.submitted {
        content = content.push(banner::warning("Status: Submitted → Under Review"));
    }

    content.into()
}
