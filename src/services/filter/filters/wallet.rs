use std::collections::HashSet;

use crate::{
	models::{DecodedEvent, DecodedTransaction, FilterTier, MatchEvidence},
	services::filter::filters::TierFilter,
};

/// Message action prefixes under which wallet addresses are looked up.
const WALLET_ACTION_PREFIXES: &[&str] = &["/cosmos.staking.", "/cosmos.distribution.", "/ibc."];
const WALLET_ROLES: &[&str] = &["sender", "recipient", "delegator", "validator", "spender"];

/// Matches configured wallets and wasm contracts inside `message` events.
pub struct WalletContractFilter {
	wallets: HashSet<String>,
	contracts: HashSet<String>,
}

impl WalletContractFilter {
	pub fn new(wallets: HashSet<String>, contracts: HashSet<String>) -> Self {
		Self { wallets, contracts }
	}

	fn wallet_matches(&self, event: &DecodedEvent, action: &str) -> Vec<MatchEvidence> {
		let qualifies = action.contains("wasm")
			|| WALLET_ACTION_PREFIXES
				.iter()
				.any(|prefix| action.starts_with(prefix));
		if !qualifies {
			return Vec::new();
		}
		WALLET_ROLES
			.iter()
			.flat_map(|role| {
				event
					.values(role)
					.iter()
					.filter(|address| self.wallets.contains(*address))
					.map(move |address| MatchEvidence::Wallet {
						address: address.clone(),
						role: role.to_string(),
						action: action.to_string(),
					})
			})
			.collect()
	}

	fn contract_matches(&self, event: &DecodedEvent, action: &str) -> Vec<MatchEvidence> {
		if !action.contains("wasm") {
			return Vec::new();
		}
		event
			.values("contract")
			.iter()
			.filter(|contract| self.contracts.contains(*contract))
			.map(|contract| MatchEvidence::Contract {
				contract: contract.clone(),
				action: action.to_string(),
			})
			.collect()
	}
}

impl TierFilter for WalletContractFilter {
	fn tier(&self) -> FilterTier {
		FilterTier::WalletContract
	}

	fn is_configured(&self) -> bool {
		!self.wallets.is_empty() || !self.contracts.is_empty()
	}

	fn evaluate(&self, tx: &DecodedTransaction) -> Vec<MatchEvidence> {
		let mut evidence = Vec::new();
		for event in tx.message_events() {
			for action in event.values("action") {
				for matched in self
					.wallet_matches(event, action)
					.into_iter()
					.chain(self.contract_matches(event, action))
				{
					if !evidence.contains(&matched) {
						evidence.push(matched);
					}
				}
			}
		}
		evidence
	}
}
