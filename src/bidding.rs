//! # Spot Bidding Module
//!
//! Transient bid form state and the input constraints enforced by the
//! bidding page widgets. The form lives only for the current visit to the
//! page; navigating away discards it.
//!
//! ## Constraints
//! - Quantity: [10, 1000] metric tons
//! - Price: [1000, 15000] USD/MT, committed values snap to 100-USD steps
//!   counted from the minimum

use crate::catalog::{Incoterm, Mineral};

pub const MIN_QUANTITY_MT: u32 = 10;
pub const MAX_QUANTITY_MT: u32 = 1000;
pub const DEFAULT_QUANTITY_MT: u32 = 100;

pub const MIN_PRICE_USD: u32 = 1_000;
pub const MAX_PRICE_USD: u32 = 15_000;
pub const PRICE_STEP_USD: u32 = 100;

/// Number of fixed increments in a simulated bidding session.
pub const SESSION_STEPS: u8 = 5;
/// Progress contributed by each increment.
pub const SESSION_STEP_PERCENT: u8 = 20;

pub const SESSION_OPENED_BANNER: &str = "Bidding session started...";
pub const WINNING_BID_BANNER: &str = "🏆 Winning Bid: Your Offer Leads";

/// Where the simulated session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidPhase {
    Idle,
    Running { percent: u8 },
    Won,
}

/// Transient state of the bidding page widgets.
#[derive(Debug, Clone)]
pub struct BidForm {
    pub mineral: Mineral,
    pub quantity_mt: u32,
    pub price_usd: u32,
    /// Raw text in the price field, committed on submit.
    pub price_text: String,
    pub incoterm: Incoterm,
    pub phase: BidPhase,
}

impl Default for BidForm {
    fn default() -> Self {
        Self {
            mineral: Mineral::CopperCathode,
            quantity_mt: DEFAULT_QUANTITY_MT,
            price_usd: MIN_PRICE_USD,
            price_text: MIN_PRICE_USD.to_string(),
            incoterm: Incoterm::Fob,
            phase: BidPhase::Idle,
        }
    }
}

impl BidForm {
    pub fn is_running(&self) -> bool {
        matches!(self.phase, BidPhase::Running { .. })
    }

    pub fn set_quantity(&mut self, quantity_mt: u32) {
        self.quantity_mt = quantity_mt.clamp(MIN_QUANTITY_MT, MAX_QUANTITY_MT);
    }

    /// Commit the raw price text. Unparseable input reverts to the last
    /// committed value; anything else is clamped and snapped.
    pub fn commit_price_text(&mut self) {
        if let Ok(raw) = self.price_text.trim().parse::<i64>() {
            self.price_usd = snap_price(raw);
        }
        self.price_text = self.price_usd.to_string();
    }

    /// Step the committed price by a number of 100-USD increments.
    pub fn nudge_price(&mut self, steps: i64) {
        let raw = i64::from(self.price_usd) + steps * i64::from(PRICE_STEP_USD);
        self.price_usd = snap_price(raw);
        self.price_text = self.price_usd.to_string();
    }
}

/// Clamp a raw price to [MIN_PRICE_USD, MAX_PRICE_USD] and round it to the
/// nearest 100-USD step counted from the minimum.
pub fn snap_price(raw: i64) -> u32 {
    let clamped = raw.clamp(i64::from(MIN_PRICE_USD), i64::from(MAX_PRICE_USD));
    let offset = clamped - i64::from(MIN_PRICE_USD);
    let step = i64::from(PRICE_STEP_USD);
    let snapped = i64::from(MIN_PRICE_USD) + (offset + step / 2) / step * step;
    snapped.min(i64::from(MAX_PRICE_USD)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form() {
        let form = BidForm::default();
        assert_eq!(form.mineral, Mineral::CopperCathode);
        assert_eq!(form.quantity_mt, 100);
        assert_eq!(form.price_usd, 1_000);
        assert_eq!(form.incoterm, Incoterm::Fob);
        assert_eq!(form.phase, BidPhase::Idle);
    }

    #[test]
    fn test_quantity_clamped() {
        let mut form = BidForm::default();
        form.set_quantity(5);
        assert_eq!(form.quantity_mt, 10);
        form.set_quantity(1_500);
        assert_eq!(form.quantity_mt, 1_000);
        form.set_quantity(250);
        assert_eq!(form.quantity_mt, 250);
    }

    #[test]
    fn test_snap_price_bounds() {
        assert_eq!(snap_price(0), 1_000);
        assert_eq!(snap_price(-50), 1_000);
        assert_eq!(snap_price(999_999), 15_000);
    }

    #[test]
    fn test_snap_price_rounds_to_step() {
        assert_eq!(snap_price(1_049), 1_000);
        assert_eq!(snap_price(1_050), 1_100);
        assert_eq!(snap_price(4_321), 4_300);
        // Every snapped value is MIN + k * STEP
        for raw in (900..16_000).step_by(37) {
            let snapped = snap_price(raw);
            assert!(snapped >= MIN_PRICE_USD && snapped <= MAX_PRICE_USD);
            assert_eq!((snapped - MIN_PRICE_USD) % PRICE_STEP_USD, 0);
        }
    }

    #[test]
    fn test_commit_price_text() {
        let mut form = BidForm::default();
        form.price_text = "5230".to_string();
        form.commit_price_text();
        assert_eq!(form.price_usd, 5_200);
        assert_eq!(form.price_text, "5200");

        form.price_text = "not a number".to_string();
        form.commit_price_text();
        assert_eq!(form.price_usd, 5_200);
        assert_eq!(form.price_text, "5200");
    }

    #[test]
    fn test_nudge_price() {
        let mut form = BidForm::default();
        form.nudge_price(3);
        assert_eq!(form.price_usd, 1_300);
        form.nudge_price(-10);
        assert_eq!(form.price_usd, 1_000);
        form.price_usd = 14_950;
        form.nudge_price(1);
        assert_eq!(form.price_usd, 15_000);
    }

    #[test]
    fn test_session_covers_full_progress() {
        assert_eq!(SESSION_STEPS as u32 * SESSION_STEP_PERCENT as u32, 100);
    }
}
