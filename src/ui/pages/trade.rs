use crate::app::Message;
use crate::bidding::{self, BidForm, BidPhase};
use crate::catalog::{self, Incoterm, Mineral, MineralListing};
use crate::ui::{banner, styles};
use iced::widget::{
    button, column, container, horizontal_rule, pick_list, progress_bar, row, slider, text,
    text_input,
};
use iced::{Element, Length};

// FillPortion weight per listings column, same order as LISTING_COLUMNS
const COLUMN_WEIGHTS: [u16; 7] = [3, 2, 2, 1, 2, 2, 2];

fn listing_row(listing: MineralListing) -> Element<'static, Message> {
    row![
        text(listing.mineral).width(Length::FillPortion(COLUMN_WEIGHTS[0])),
        text(listing.origin).width(Length::FillPortion(COLUMN_WEIGHTS[1])),
        text(listing.quantity_mt.to_string()).width(Length::FillPortion(COLUMN_WEIGHTS[2])),
        text(listing.incoterm.to_string()).width(Length::FillPortion(COLUMN_WEIGHTS[3])),
        text(listing.deposit.to_string()).width(Length::FillPortion(COLUMN_WEIGHTS[4])),
        text(listing.shipment_date.format("%Y-%m-%d").to_string())
            .width(Length::FillPortion(COLUMN_WEIGHTS[5])),
        text(listing.pricing_note).width(Length::FillPortion(COLUMN_WEIGHTS[6])),
    ]
    .spacing(10)
    .into()
}

pub fn mineral_deals() -> Element<'static, Message> {
    let header_font = iced::Font {
        weight: iced::font::Weight::Bold,
        ..iced::Font::DEFAULT
    };

    let header = row(catalog::LISTING_COLUMNS
        .iter()
        .zip(COLUMN_WEIGHTS)
        .map(|(name, weight)| {
            text(*name)
                .size(14)
                .font(header_font)
                .width(Length::FillPortion(weight))
                .into()
        }))
    .spacing(10);

    let body = column(catalog::listings().map(listing_row)).spacing(8);

    container(column![header, horizontal_rule(1), body].spacing(8))
        .padding(15)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

pub fn spot_bidding(form: &BidForm) -> Element<'_, Message> {
    let mineral_picker = row![
        text("Select Mineral").width(Length::Fixed(160.0)),
        pick_list(&Mineral::ALL[..], Some(form.mineral), Message::BidMineralSelected),
    ]
    .spacing(10)
    .align_y(iced::alignment::Vertical::Center);

    let quantity = column![
        text(format!("Quantity (MT): {}", form.quantity_mt)),
        slider(
            bidding::MIN_QUANTITY_MT..=bidding::MAX_QUANTITY_MT,
            form.quantity_mt,
            Message::BidQuantityChanged,
        ),
    ]
    .spacing(5);

    let price = row![
        text("Bid Price (USD/MT)").width(Length::Fixed(160.0)),
        button(text("−")).on_press(Message::BidPriceNudged(-1)).padding(8),
        text_input("1000", &form.price_text)
            .on_input(Message::BidPriceInput)
            .on_submit(Message::BidPriceCommitted)
            .width(Length::Fixed(120.0)),
        button(text("+")).on_press(Message::BidPriceNudged(1)).padding(8),
    ]
    .spacing(10)
    .align_y(iced::alignment::Vertical::Center);

    let incoterm_picker = row![
        text("Incoterm").width(Length::Fixed(160.0)),
        pick_list(&Incoterm::ALL[..], Some(form.incoterm), Message::BidIncotermSelected),
    ]
    .spacing(10)
    .align_y(iced::alignment::Vertical::Center);

    let start_button = button(text(if form.is_running() {
        "Bidding..."
    } else {
        "Start Bidding"
    }))
    .on_press_maybe((!form.is_running()).then_some(Message::StartBidding))
    .padding(10)
    .style(styles::action_button_style());

    let mut content = column![
        mineral_picker,
        quantity,
        price,
        incoterm_picker,
        start_button,
    ]
    .spacing(15);

    match form.phase {
        BidPhase::Idle => {}
        BidPhase::Running { percent } => {
            content = content.push(banner::info(bidding::SESSION_OPENED_BANNER));
            content = content.push(progress_bar(0.0..=100.0, f32::from(percent)));
        }
        BidPhase::Won => {
            content = content.push(banner::success(bidding::WINNING_BID_BANNER));
        }
    }

    content.into()
}
