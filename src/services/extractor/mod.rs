//! Typed facts derived from decoded events.
//!
//! Each pass reads the full decoded event list of one transaction and is
//! independent of the others:
//! - transfers: participant and amount sets
//! - swaps: pool swaps from `token_swapped` events
//! - staking: delegations, undelegations, redelegations and reward withdrawals
//! - ibc: ICS-20 transfers leaving the chain
//!
//! Classification runs last since it falls back on the derived facts.

mod classify;
mod ibc;
mod staking;
mod swaps;
mod transfers;

pub use classify::{classify, transaction_type_for_action};
pub use ibc::{extract_ibc, TRANSFER_PORT};
pub use staking::{extract_staking, staking_action_for_event, staking_action_for_message};
pub use swaps::{extract_swaps, TOKEN_SWAPPED_EVENT};
pub use transfers::extract_transfers;

use crate::models::DecodedTransaction;

#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticExtractor;

impl SemanticExtractor {
	pub fn new() -> Self {
		Self
	}

	/// Fills the fact sets and the classification of `tx`.
	pub fn enrich(&self, tx: &mut DecodedTransaction) {
		tx.transfer_facts = extract_transfers(&tx.events);
		tx.swap_facts = extract_swaps(&tx.events);
		tx.staking_facts = extract_staking(&tx.events);
		tx.ibc_facts = extract_ibc(&tx.events);
		tx.classified_type = classify(tx);
	}
}
