use crate::bidding::{BidForm, BidPhase};
use crate::catalog::{Incoterm, Mineral, Role, Supplier, LIFECYCLE_STEPS};
use crate::page::Page;
use crate::simulation::{SimCommand, SimUpdate};
use crate::ui::pages;
use crate::ui::styles;
use iced::widget::{button, column, container, row, scrollable, text, text_editor};
use iced::{Element, Length, Subscription, Task};
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

// Update-channel poll cadence while a bidding session runs
const SIM_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Transient state of the consulting page widgets.
#[derive(Default)]
pub struct ConsultingForm {
    pub buyer_need: text_editor::Content,
    pub seller_supply: text_editor::Content,
    pub matched: bool,
}

/// Transient state of the membership page widgets.
pub struct MembershipForm {
    pub role: Role,
    pub company_name: String,
    pub documents_attached: [bool; 3],
    pub submitted: bool,
}

impl Default for MembershipForm {
    fn default() -> Self {
        Self {
            role: Role::Buyer,
            company_name: String::new(),
            documents_attached: [false; 3],
            submitted: false,
        }
    }
}

/// Back-office actions. Each press swaps the status line; nothing else
/// happens in the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    SupplierApproved,
    DealApproved,
    BiddingPaused,
    ReportGenerated,
}

impl AdminAction {
    pub fn status_line(&self) -> &'static str {
        match self {
            AdminAction::SupplierApproved => "Status: Supplier Verified (Demo)",
            AdminAction::DealApproved => "Status: Deal Approved (Demo)",
            AdminAction::BiddingPaused => "Status: Bidding Paused (Demo)",
            AdminAction::ReportGenerated => "Status: Report Generated (Mock)",
        }
    }
}

/// Transient state of the admin back-office page.
pub struct AdminDesk {
    pub supplier: Supplier,
    pub last_action: Option<AdminAction>,
}

impl Default for AdminDesk {
    fn default() -> Self {
        Self {
            supplier: Supplier::ZambiaCopper,
            last_action: None,
        }
    }
}

// Iced Application State
pub struct MtaDemo {
    pub page: Page,
    pub bid: BidForm,
    pub consulting: ConsultingForm,
    pub membership: MembershipForm,
    pub admin: AdminDesk,
    pub lifecycle_checked: [bool; LIFECYCLE_STEPS.len()],
    receiver: Receiver<SimUpdate>,
    command_sender: Sender<SimCommand>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
    Tick,
    BidMineralSelected(Mineral),
    BidQuantityChanged(u32),
    BidPriceInput(String),
    BidPriceCommitted,
    BidPriceNudged(i64),
    BidIncotermSelected(Incoterm),
    StartBidding,
    BuyerNeedEdited(text_editor::Action),
    SellerSupplyEdited(text_editor::Action),
    SubmitMatching,
    RoleSelected(Role),
    CompanyNameChanged(String),
    DocumentToggled(usize),
    SubmitApplication,
    SupplierSelected(Supplier),
    AdminActionTriggered(AdminAction),
    LifecycleToggled(usize, bool),
}

impl MtaDemo {
    pub fn new(
        receiver: Receiver<SimUpdate>,
        command_sender: Sender<SimCommand>,
    ) -> (Self, Task<Message>) {
        (
            MtaDemo {
                page: Page::Home,
                bid: BidForm::default(),
                consulting: ConsultingForm::default(),
                membership: MembershipForm::default(),
                admin: AdminDesk::default(),
                lifecycle_checked: [true; LIFECYCLE_STEPS.len()],
                receiver,
                command_sender,
            },
            Task::none(),
        )
    }

    /// Leaving a page discards its inputs; every page comes back with
    /// defaults.
    fn reset_transient_state(&mut self) {
        self.bid = BidForm::default();
        self.consulting = ConsultingForm::default();
        self.membership = MembershipForm::default();
        self.admin = AdminDesk::default();
        self.lifecycle_checked = [true; LIFECYCLE_STEPS.len()];
        // A cancelled session must not surface its completion later
        while self.receiver.try_recv().is_ok() {}
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(page) => {
                if page != self.page {
                    if self.bid.is_running() {
                        if let Err(e) = self.command_sender.send(SimCommand::Cancel) {
                            log::error!("Failed to cancel bidding session: {}", e);
                        }
                    }
                    self.page = page;
                    self.reset_transient_state();
                }
                Task::none()
            }
            Message::Tick => {
                // Process all pending updates without blocking
                while let Ok(update) = self.receiver.try_recv() {
                    match update {
                        SimUpdate::Progress(percent) => {
                            if self.bid.is_running() {
                                self.bid.phase = BidPhase::Running { percent };
                            }
                        }
                        SimUpdate::Complete => {
                            if self.bid.is_running() {
                                self.bid.phase = BidPhase::Won;
                            }
                        }
                    }
                }
                Task::none()
            }
            Message::BidMineralSelected(mineral) => {
                self.bid.mineral = mineral;
                Task::none()
            }
            Message::BidQuantityChanged(quantity_mt) => {
                self.bid.set_quantity(quantity_mt);
                Task::none()
            }
            Message::BidPriceInput(raw) => {
                self.bid.price_text = raw;
                Task::none()
            }
            Message::BidPriceCommitted => {
                self.bid.commit_price_text();
                Task::none()
            }
            Message::BidPriceNudged(steps) => {
                self.bid.nudge_price(steps);
                Task::none()
            }
            Message::BidIncotermSelected(incoterm) => {
                self.bid.incoterm = incoterm;
                Task::none()
            }
            Message::StartBidding => {
                if !self.bid.is_running() {
                    // Discard leftovers from any earlier session
                    while self.receiver.try_recv().is_ok() {}
                    match self.command_sender.send(SimCommand::Start) {
                        Ok(()) => self.bid.phase = BidPhase::Running { percent: 0 },
                        Err(e) => log::error!("Failed to start bidding session: {}", e),
                    }
                }
                Task::none()
            }
            Message::BuyerNeedEdited(action) => {
                self.consulting.buyer_need.perform(action);
                Task::none()
            }
            Message::SellerSupplyEdited(action) => {
                self.consulting.seller_supply.perform(action);
                Task::none()
            }
            Message::SubmitMatching => {
                self.consulting.matched = true;
                Task::none()
            }
            Message::RoleSelected(role) => {
                self.membership.role = role;
                Task::none()
            }
            Message::CompanyNameChanged(name) => {
                self.membership.company_name = name;
                Task::none()
            }
            Message::DocumentToggled(index) => {
                if let Some(attached) = self.membership.documents_attached.get_mut(index) {
                    *attached = !*attached;
                }
                Task::none()
            }
            Message::SubmitApplication => {
                self.membership.submitted = true;
                Task::none()
            }
            Message::SupplierSelected(supplier) => {
                self.admin.supplier = supplier;
                Task::none()
            }
            Message::AdminActionTriggered(action) => {
                log::info!("Admin action: {}", action.status_line());
                self.admin.last_action = Some(action);
                Task::none()
            }
            Message::LifecycleToggled(index, checked) => {
                if let Some(step) = self.lifecycle_checked.get_mut(index) {
                    *step = checked;
                }
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // The update channel only carries traffic while a session runs
        if self.bid.is_running() {
            iced::time::every(SIM_POLL_INTERVAL).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&'_ self) -> Element<'_, Message> {
        let sidebar = self.create_sidebar();

        let page_body = match self.page {
            Page::Home => pages::overview::home(),
            Page::About => pages::overview::about(),
            Page::MineralDeals => pages::trade::mineral_deals(),
            Page::SpotBidding => pages::trade::spot_bidding(&self.bid),
            Page::Consulting => pages::services::consulting(&self.consulting),
            Page::BankingRisk => pages::services::banking_risk(),
            Page::Membership => pages::services::membership(&self.membership),
            Page::AdminBackOffice => pages::admin::back_office(&self.admin),
            Page::Analytics => pages::insight::analytics(),
            Page::OrderLifeCycle => pages::insight::order_life_cycle(&self.lifecycle_checked),
        };

        let main_content = column![text(self.page.title()).size(28), page_body]
            .spacing(20)
            .padding(20)
            .width(Length::Fill);

        let content = row![
            sidebar,
            scrollable(main_content).width(Length::Fill).height(Length::Fill)
        ]
        .spacing(0);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn create_sidebar(&self) -> Element<'_, Message> {
        let title = text("MTA DEMO").size(20);
        let caption = text("Phase 1 – Shareholder Demo").size(13);

        let nav = Page::ALL.into_iter().map(|page| {
            let is_selected = page == self.page;
            button(text(page.label()).size(14))
                .on_press(Message::Navigate(page))
                .width(Length::Fill)
                .padding(10)
                .style(styles::nav_button_style(is_selected))
                .into()
        });

        let sidebar_content = column![title, caption, column(nav).spacing(5)]
            .spacing(10)
            .padding(20)
            .width(280);

        container(sidebar_content)
            .style(container::bordered_box)
            .width(Length::Fixed(280.0))
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidding::DEFAULT_QUANTITY_MT;
    use std::sync::mpsc;

    fn demo_app() -> (MtaDemo, mpsc::Sender<SimUpdate>, mpsc::Receiver<SimCommand>) {
        let (update_sender, update_receiver) = mpsc::channel();
        let (command_sender, command_receiver) = mpsc::channel();
        let (app, _task) = MtaDemo::new(update_receiver, command_sender);
        (app, update_sender, command_receiver)
    }

    #[test]
    fn test_starts_on_home() {
        let (app, _updates, _commands) = demo_app();
        assert_eq!(app.page, Page::Home);
        assert!(app.lifecycle_checked.iter().all(|&checked| checked));
    }

    #[test]
    fn test_navigation_resets_transient_state() {
        let (mut app, _updates, _commands) = demo_app();
        let _ = app.update(Message::Navigate(Page::SpotBidding));
        let _ = app.update(Message::BidQuantityChanged(640));
        assert_eq!(app.bid.quantity_mt, 640);

        let _ = app.update(Message::Navigate(Page::OrderLifeCycle));
        let _ = app.update(Message::LifecycleToggled(2, false));
        assert!(!app.lifecycle_checked[2]);

        let _ = app.update(Message::Navigate(Page::SpotBidding));
        assert_eq!(app.page, Page::SpotBidding);
        assert_eq!(app.bid.quantity_mt, DEFAULT_QUANTITY_MT);
        assert!(app.lifecycle_checked.iter().all(|&checked| checked));
    }

    #[test]
    fn test_bidding_session_lifecycle() {
        let (mut app, updates, commands) = demo_app();
        let _ = app.update(Message::Navigate(Page::SpotBidding));
        let _ = app.update(Message::StartBidding);
        assert!(app.bid.is_running());
        assert!(matches!(commands.try_recv(), Ok(SimCommand::Start)));

        // Starting again while running is inert
        let _ = app.update(Message::StartBidding);
        assert!(commands.try_recv().is_err());

        for percent in [20, 40, 60, 80, 100] {
            updates.send(SimUpdate::Progress(percent)).unwrap();
            let _ = app.update(Message::Tick);
            assert_eq!(app.bid.phase, BidPhase::Running { percent });
        }
        updates.send(SimUpdate::Complete).unwrap();
        let _ = app.update(Message::Tick);
        assert_eq!(app.bid.phase, BidPhase::Won);
    }

    #[test]
    fn test_navigation_cancels_running_session() {
        let (mut app, updates, commands) = demo_app();
        let _ = app.update(Message::Navigate(Page::SpotBidding));
        let _ = app.update(Message::StartBidding);
        let _ = commands.try_recv();

        let _ = app.update(Message::Navigate(Page::Home));
        assert!(matches!(commands.try_recv(), Ok(SimCommand::Cancel)));
        assert_eq!(app.bid.phase, BidPhase::Idle);

        // A stale completion from the cancelled session never surfaces
        updates.send(SimUpdate::Complete).unwrap();
        let _ = app.update(Message::Navigate(Page::SpotBidding));
        let _ = app.update(Message::Tick);
        assert_eq!(app.bid.phase, BidPhase::Idle);
    }

    #[test]
    fn test_admin_actions_swap_status_line() {
        let (mut app, _updates, _commands) = demo_app();
        let _ = app.update(Message::Navigate(Page::AdminBackOffice));
        assert!(app.admin.last_action.is_none());

        let _ = app.update(Message::AdminActionTriggered(AdminAction::SupplierApproved));
        assert_eq!(app.admin.last_action, Some(AdminAction::SupplierApproved));

        let _ = app.update(Message::AdminActionTriggered(AdminAction::ReportGenerated));
        assert_eq!(app.admin.last_action, Some(AdminAction::ReportGenerated));
    }

    #[test]
    fn test_membership_form_flow() {
        let (mut app, _updates, _commands) = demo_app();
        let _ = app.update(Message::Navigate(Page::Membership));
        let _ = app.update(Message::RoleSelected(Role::Seller));
        let _ = app.update(Message::CompanyNameChanged("Kivu Extraction Ltd".to_string()));
        let _ = app.update(Message::DocumentToggled(1));
        let _ = app.update(Message::SubmitApplication);

        assert_eq!(app.membership.role, Role::Seller);
        assert_eq!(app.membership.company_name, "Kivu Extraction Ltd");
        assert_eq!(app.membership.documents_attached, [false, true, false]);
        assert!(app.membership.submitted);
    }
}
