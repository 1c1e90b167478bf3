use std::collections::{HashMap, HashSet};

use cosmos_tx_monitor::{
	models::{Condition, EventFilter, FilterSpec, MatchStrategy},
	services::filter::{CompiledCondition, FilterEngine},
	utils::tests::builders::{event::EventBuilder, transaction::TransactionBuilder},
};
use proptest::prelude::*;

use crate::properties::strategies::{address_strategy, transfer_events_strategy};

proptest! {
	#[test]
	fn wallet_only_passes_iff_evidence(
		wallet in address_strategy(),
		other in address_strategy(),
		use_wallet in any::<bool>(),
	) {
		let sender = if use_wallet { wallet.clone() } else { other };
		let tx = TransactionBuilder::new()
			.event(
				EventBuilder::message("/cosmos.staking.v1beta1.MsgDelegate")
					.attribute("sender", &sender)
					.build(),
			)
			.build();
		let spec = FilterSpec {
			wallet_addresses: HashSet::from([wallet.clone()]),
			..Default::default()
		};

		let outcome = FilterEngine::new(&spec).evaluate(&tx);
		prop_assert_eq!(outcome.passed, outcome.wallet_matches().next().is_some());
		prop_assert_eq!(outcome.passed, sender == wallet);

		let mut strict = spec;
		strict.event_filters = vec![EventFilter {
			event_types: Some(HashSet::from(["token_swapped".to_string()])),
			attribute_constraints: None,
		}];
		prop_assert!(!FilterEngine::new(&strict).evaluate(&tx).passed);
	}

	#[test]
	fn attribute_list_passes_iff_value_listed(
		events in transfer_events_strategy(),
		listed in address_strategy(),
	) {
		let tx = TransactionBuilder::new().events(events.clone()).build();
		let spec = FilterSpec {
			attribute_lists_by_key: HashMap::from([(
				"sender".to_string(),
				HashSet::from([listed.clone()]),
			)]),
			..Default::default()
		};
		let expected = events.iter().any(|event| event.values("sender").contains(&listed));
		prop_assert_eq!(FilterEngine::new(&spec).evaluate(&tx).passed, expected);
	}

	#[test]
	fn negated_condition_on_missing_key_holds(
		key in "[a-z]{3,10}_missing",
		values in prop::collection::vec("[a-z]{1,5}", 0..3),
	) {
		let event = EventBuilder::new("transfer").attribute("sender", "osmo1a").build();
		let condition = Condition::new(key, values, MatchStrategy::Exact);

		let plain = CompiledCondition::compile(&condition, &mut |_, _| {});
		let negated = CompiledCondition::compile(&condition.negate(), &mut |_, _| {});
		prop_assert!(!plain.holds(&event));
		prop_assert!(negated.holds(&event));
	}

	#[test]
	fn negated_presence_check_fails_on_present_key(memo in "[ -~]{0,32}") {
		let event = EventBuilder::new("tx").attribute("memo", memo).build();
		let presence = Condition::new("memo", Vec::new(), MatchStrategy::Exact);

		let negated = CompiledCondition::compile(&presence.clone().negate(), &mut |_, _| {});
		let plain = CompiledCondition::compile(&presence, &mut |_, _| {});
		prop_assert!(plain.holds(&event));
		prop_assert!(!negated.holds(&event));
	}
}
