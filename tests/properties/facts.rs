use cosmos_tx_monitor::{
	models::TransactionType,
	services::extractor::{extract_staking, extract_transfers, SemanticExtractor},
	utils::tests::builders::{event::EventBuilder, transaction::TransactionBuilder},
};
use proptest::prelude::*;

use crate::properties::strategies::{address_strategy, amount_strategy, transfer_events_strategy};

proptest! {
	#[test]
	fn repeated_sender_collapses(sender in address_strategy(), copies in 1usize..20) {
		let events: Vec<_> = (0..copies)
			.map(|_| EventBuilder::new("transfer").attribute("sender", &sender).build())
			.collect();
		let facts = extract_transfers(&events);
		prop_assert_eq!(facts.senders.len(), 1);
		prop_assert!(facts.senders.contains(&sender));
	}

	#[test]
	fn transfer_facts_ignore_event_order(events in transfer_events_strategy()) {
		let mut reversed = events.clone();
		reversed.reverse();
		prop_assert_eq!(extract_transfers(&events), extract_transfers(&reversed));
	}

	#[test]
	fn identical_delegations_reported_once(
		delegator in address_strategy(),
		amount in amount_strategy(),
		copies in 1usize..6,
	) {
		let events: Vec<_> = (0..copies)
			.map(|_| {
				EventBuilder::new("delegate")
					.attribute("delegator", &delegator)
					.attribute("validator", "osmovaloper1validator")
					.attribute("amount", &amount)
					.build()
			})
			.collect();
		let facts = extract_staking(&events);
		prop_assert_eq!(facts.len(), 1);
		prop_assert_eq!(&facts[0].delegator, &delegator);
		prop_assert!(amount.starts_with(facts[0].amount.as_deref().unwrap()));
	}

	#[test]
	fn message_action_outranks_swap_events(
		delegator in address_strategy(),
		tokens_in in amount_strategy(),
		tokens_out in amount_strategy(),
		pool_id in 1u64..2000,
	) {
		let mut tx = TransactionBuilder::new()
			.event(
				EventBuilder::new("token_swapped")
					.attribute("pool_id", pool_id.to_string())
					.attribute("sender", &delegator)
					.attribute("tokens_in", &tokens_in)
					.attribute("tokens_out", &tokens_out)
					.build(),
			)
			.event(
				EventBuilder::message("/cosmos.staking.v1beta1.MsgDelegate")
					.attribute("sender", &delegator)
					.build(),
			)
			.build();
		SemanticExtractor::new().enrich(&mut tx);

		prop_assert_eq!(tx.swap_facts.len(), 1);
		prop_assert_eq!(tx.classified_type, Some(TransactionType::Delegate));
	}
}
