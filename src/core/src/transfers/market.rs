use crate::settings::LINEUP_SIZE;
use crate::shared::{ClubId, PlayerId};
use crate::state::SimulationState;
use crate::transfers::{
    CompletedTransfer, KEY_PLAYER_MULTIPLIER, NegotiationOutcome, PlayerValuationCalculator, RejectedOffer,
    RejectionReason, SQUAD_PLAYER_MULTIPLIER, SquadNeed, SquadNeedsAnalyzer, TransferOffer, TransferReport,
    negotiate_transfer,
};
use crate::utils::SeasonCalendar;
use chrono::NaiveDate;
use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

const MAX_APPROACHES_PER_NEED: usize = 3;

/// The single between-seasons window.
pub struct TransferMarket;

impl TransferMarket {
    pub fn run_window<R: Rng + ?Sized>(state: &mut SimulationState, rng: &mut R) -> TransferReport {
        let date = SeasonCalendar::transfer_window(state.season);
        let mut report = TransferReport::default();
        let mut moved: HashSet<PlayerId> = HashSet::new();

        let mut buyers: Vec<ClubId> = state.clubs.iter().map(|c| c.id.clone()).collect();
        buyers.shuffle(rng);

        info!("💼 transfer window {} opens for {} clubs", date, buyers.len());

        for buyer in &buyers {
            for need in SquadNeedsAnalyzer::analyze(state, buyer) {
                if report.arrivals(buyer) >= state.settings.max_incoming_transfers {
                    break;
                }

                Self::fill_need(state, &need, date, &mut moved, &mut report);
            }
        }

        info!(
            "💼 transfer window closed: {} completed ({:.0} in fees), {} rejected",
            report.completed.len(),
            report.total_fees(),
            report.rejected.len()
        );

        report
    }

    fn fill_need(
        state: &mut SimulationState,
        need: &SquadNeed,
        date: NaiveDate,
        moved: &mut HashSet<PlayerId>,
        report: &mut TransferReport,
    ) {
        let candidates = Self::candidates(state, need, moved);

        for offer in candidates.into_iter().take(MAX_APPROACHES_PER_NEED) {
            match Self::negotiate(state, &offer, moved) {
                Ok((fee, rounds)) => {
                    let transfer = Self::complete(state, &offer, fee, rounds, date);

                    moved.insert(offer.player_id.clone());
                    report.completed.push(transfer);
                    return;
                }
                Err(reason) => {
                    debug!("🚫 {} -> {}: {} ({})", offer.selling_club_id, offer.buying_club_id, offer.player_id, reason);
                    report.rejected.push(RejectedOffer { offer, reason });
                }
            }
        }
    }

    /// Affordable upgrades for the role at unrelated clubs, best rating per
    /// cost first.
    fn candidates(state: &SimulationState, need: &SquadNeed, moved: &HashSet<PlayerId>) -> Vec<TransferOffer> {
        let Some(buyer) = state.club(&need.club_id) else {
            return Vec::new();
        };

        let budget = buyer.balance.amount;
        let floor = need.current_best.unwrap_or(0);

        let mut candidates: Vec<(f64, TransferOffer)> = state
            .players
            .iter()
            .filter(|p| p.is_active() && p.position == need.position && p.rating > floor)
            .filter(|p| p.club_id != buyer.id && !moved.contains(&p.id))
            .filter(|p| !Self::related(state, &buyer.id, &p.club_id))
            .filter_map(|p| {
                let value = PlayerValuationCalculator::calculate(p, state.season);

                (value <= budget).then(|| {
                    (
                        p.rating as f64 / value,
                        TransferOffer::new(p.id.clone(), p.club_id.clone(), buyer.id.clone(), value),
                    )
                })
            })
            .collect();

        candidates.sort_by(|(a_ratio, a), (b_ratio, b)| {
            b_ratio
                .total_cmp(a_ratio)
                .then_with(|| a.player_id.cmp(&b.player_id))
        });

        candidates.into_iter().map(|(_, offer)| offer).collect()
    }

    /// A club and its reserve side never trade with each other.
    fn related(state: &SimulationState, buyer: &ClubId, seller: &ClubId) -> bool {
        let reserve_of = |club: &ClubId| state.club(club).and_then(|c| c.reserve_of.clone());

        reserve_of(buyer).as_ref() == Some(seller) || reserve_of(seller).as_ref() == Some(buyer)
    }

    fn negotiate(
        state: &SimulationState,
        offer: &TransferOffer,
        moved: &HashSet<PlayerId>,
    ) -> Result<(f64, u8), RejectionReason> {
        let player = state
            .player(&offer.player_id)
            .filter(|p| p.is_active() && p.club_id == offer.selling_club_id && !moved.contains(&p.id))
            .ok_or(RejectionReason::PlayerUnavailable)?;

        let seller_squad = state.club_players(&offer.selling_club_id);
        let same_role = seller_squad.iter().filter(|p| p.position == player.position).count();

        if seller_squad.len() <= LINEUP_SIZE || same_role <= 1 {
            return Err(RejectionReason::SquadTooThin);
        }

        let multiplier = match state.best_lineup(&offer.selling_club_id).contains(&player.id) {
            true => KEY_PLAYER_MULTIPLIER,
            false => SQUAD_PLAYER_MULTIPLIER,
        };

        let budget = state
            .club(&offer.buying_club_id)
            .map(|c| c.balance.amount)
            .ok_or(RejectionReason::PlayerUnavailable)?;

        match negotiate_transfer(offer.value, multiplier, budget, state.settings.negotiation_rounds()) {
            NegotiationOutcome::Accepted { fee, rounds } => Ok((fee, rounds)),
            NegotiationOutcome::Rejected(reason) => Err(reason),
        }
    }

    fn complete(
        state: &mut SimulationState,
        offer: &TransferOffer,
        fee: f64,
        rounds: u8,
        date: NaiveDate,
    ) -> CompletedTransfer {
        let mut player_name = offer.player_id.to_string();

        if let Some(player) = state.player_mut(&offer.player_id) {
            player.club_id = offer.buying_club_id.clone();
            player_name = player.full_name.to_string();
        }

        if let Some(buyer) = state.club_mut(&offer.buying_club_id) {
            buyer.debit(fee);
        }

        if let Some(seller) = state.club_mut(&offer.selling_club_id) {
            seller.credit(fee);
        }

        info!(
            "✍️ {} joins {} from {} for {:.0} after {} round(s)",
            player_name, offer.buying_club_id, offer.selling_club_id, fee, rounds
        );

        CompletedTransfer {
            player_id: offer.player_id.clone(),
            player_name,
            from_club_id: offer.selling_club_id.clone(),
            to_club_id: offer.buying_club_id.clone(),
            fee,
            rounds,
            transfer_date: date,
            season_year: state.season,
        }
    }
}
