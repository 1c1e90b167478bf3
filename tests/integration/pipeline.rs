//! End-to-end processing of recorded node messages.

use std::{collections::HashSet, sync::Arc};

use cosmos_tx_monitor::{
	models::{FilterSpec, FilterTier, MatchEvidence, StakingAction, StakingFact, TransactionType},
	services::{
		dispatch::{ChannelObserver, NoopObserver},
		pipeline::PipelineOutcome,
	},
};

use crate::integration::{
	common::{
		cosmos_chain, osmosis_chain, pipeline_with, read_fixture, terra_chain, unfiltered_pipeline,
		COSMOS_DELEGATOR, COSMOS_VALIDATOR, OSMO_RECIPIENT, OSMO_SENDER, TERRA_PAIR, TERRA_TRADER,
	},
	mocks::MockTransactionObserver,
};

#[test]
fn test_delegate_transaction() {
	let mut observer = MockTransactionObserver::new();
	observer.expect_on_raw_message().times(1).return_const(());
	observer.expect_on_transaction().times(1).return_const(());
	observer
		.expect_on_filtered_transaction()
		.times(1)
		.return_const(());
	observer
		.expect_on_staking_match()
		.withf(|_, facts| facts.len() == 1 && facts[0].action == StakingAction::Delegate)
		.times(1)
		.return_const(());
	observer.expect_on_wasm_match().never();
	observer.expect_on_wallet_match().never();

	let pipeline = pipeline_with(
		cosmos_chain(),
		FilterSpec::default(),
		Vec::new(),
		Arc::new(observer),
	);
	let outcome = pipeline.process_message(&read_fixture("delegate_tx.json"));

	assert!(outcome.passed());
	let tx = outcome.transaction().unwrap();
	assert_eq!(tx.chain_id, "cosmoshub-4");
	assert_eq!(tx.height, 19504301);
	assert_eq!(
		tx.tx_hash.as_deref(),
		Some("5F2B8A3C9D1E4F6A7B8C9D0E1F2A3B4C5D6E7F8A9B0C1D2E3F4A5B6C7D8E9F0A")
	);
	assert_eq!(tx.gas_used, "150123");
	assert!(tx.success());
	assert_eq!(tx.classified_type, Some(TransactionType::Delegate));
	assert_eq!(
		tx.staking_facts,
		vec![StakingFact {
			action: StakingAction::Delegate,
			delegator: COSMOS_DELEGATOR.to_string(),
			validator: Some(COSMOS_VALIDATOR.to_string()),
			source_validator: None,
			destination_validator: None,
			amount: Some("100".to_string()),
			denom: Some("uatom".to_string()),
		}]
	);
	assert_eq!(
		tx.transfer_facts.senders.iter().collect::<Vec<_>>(),
		vec![COSMOS_DELEGATOR]
	);
	assert_eq!(tx.messaging_data[0].module, "staking");
	assert_eq!(tx.messaging_data[0].action, "MsgDelegate");
}

#[test]
fn test_flattened_events_fallback() {
	let outcome =
		unfiltered_pipeline(osmosis_chain()).process_message(&read_fixture("flattened_only.json"));

	let tx = outcome.transaction().unwrap();
	assert_eq!(tx.height, 7);
	assert_eq!(tx.tx_hash, None);
	assert_eq!(tx.events.len(), 1);
	assert_eq!(tx.events[0].event_type, "transfer");
	assert_eq!(tx.events[0].values("sender"), [OSMO_SENDER.to_string()]);
	assert_eq!(tx.events[0].values("amount"), ["5uosmo".to_string()]);
	assert_eq!(tx.classified_type, Some(TransactionType::Transfer));
}

#[test]
fn test_oracle_vote_is_suppressed_before_decoding() {
	let pipeline = pipeline_with(
		terra_chain(),
		FilterSpec::default(),
		Vec::new(),
		Arc::new(MockTransactionObserver::expect_raw_only()),
	);
	let outcome = pipeline.process_message(&read_fixture("oracle_vote.json"));
	assert_eq!(outcome, PipelineOutcome::Suppressed);
}

#[test]
fn test_oracle_vote_processed_when_suppression_disabled() {
	let pipeline = unfiltered_pipeline(terra_chain()).with_oracle_suppression(false);
	let outcome = pipeline.process_message(&read_fixture("oracle_vote.json"));
	let tx = outcome.transaction().unwrap();
	assert!(tx.has_event_type("aggregate_vote"));
}

#[test]
fn test_subscription_ack_is_not_a_transaction() {
	let pipeline = pipeline_with(
		cosmos_chain(),
		FilterSpec::default(),
		Vec::new(),
		Arc::new(MockTransactionObserver::expect_raw_only()),
	);
	let outcome = pipeline.process_message(&read_fixture("subscription_ack.json"));
	assert_eq!(outcome, PipelineOutcome::NotTransaction);
}

#[test]
fn test_malformed_message_reaches_no_observer() {
	let mut observer = MockTransactionObserver::new();
	observer.expect_on_raw_message().never();
	observer.expect_on_transaction().never();

	let pipeline = pipeline_with(
		cosmos_chain(),
		FilterSpec::default(),
		Vec::new(),
		Arc::new(observer),
	);
	let outcome = pipeline.process_message("{\"result\": ");
	assert!(matches!(outcome, PipelineOutcome::Malformed(_)));
}

#[test]
fn test_base64_osmosis_swap() {
	let outcome = unfiltered_pipeline(osmosis_chain())
		.process_message(&read_fixture("osmosis_swap_base64.json"));
	let tx = outcome.transaction().unwrap();

	assert_eq!(tx.classified_type, Some(TransactionType::Swap));
	assert_eq!(tx.swap_facts.len(), 1);
	let swap = &tx.swap_facts[0];
	assert_eq!(swap.pool_id, "1");
	assert_eq!(swap.sender, OSMO_SENDER);
	assert_eq!(swap.tokens_in, "1000uosmo");
	assert_eq!(swap.amount_in, "1000");
	assert!(swap.tokens_out.starts_with("42ibc/"));
	assert!(tx.transfer_facts.recipients.contains(OSMO_RECIPIENT));

	let provenance = &tx.events[1].provenance[1];
	assert_eq!(provenance.raw_key, "cG9vbF9pZA==");
	assert_eq!(provenance.decoded_key, "pool_id");

	let pool_summary = tx
		.messaging_data
		.iter()
		.find(|summary| summary.module == "poolmanager")
		.unwrap();
	assert_eq!(pool_summary.action, "swap");
	assert_eq!(pool_summary.pool_id.as_deref(), Some("1"));
}

#[test]
fn test_ibc_transfer() {
	let outcome =
		unfiltered_pipeline(osmosis_chain()).process_message(&read_fixture("ibc_transfer.json"));
	let tx = outcome.transaction().unwrap();

	assert_eq!(
		tx.tx_hash.as_deref(),
		Some("1111111111111111111111111111111111111111111111111111111111111111")
	);
	assert_eq!(tx.classified_type, Some(TransactionType::IbcTransfer));
	assert_eq!(tx.ibc_facts.len(), 1);
	let fact = &tx.ibc_facts[0];
	assert_eq!(fact.sender.as_deref(), Some(OSMO_SENDER));
	assert_eq!(fact.amount.as_deref(), Some("250"));
	assert_eq!(fact.denom.as_deref(), Some("uosmo"));
	assert_eq!(fact.source_channel.as_deref(), Some("channel-0"));
	assert_eq!(fact.destination_channel.as_deref(), Some("channel-141"));
	assert_eq!(fact.sequence.as_deref(), Some("733"));
	assert_eq!(fact.packet_receiver.as_deref(), Some(COSMOS_DELEGATOR));
	assert_eq!(fact.memo.as_deref(), Some("payroll"));
}

#[test]
fn test_terra_wasm_swap_dispatches_contract_and_wallet_matches() {
	let mut observer = MockTransactionObserver::new();
	observer.expect_on_raw_message().return_const(());
	observer.expect_on_transaction().times(1).return_const(());
	observer
		.expect_on_filtered_transaction()
		.times(1)
		.return_const(());
	observer
		.expect_on_wasm_match()
		.withf(|_, matches| {
			matches.len() == 1
				&& matches!(&matches[0].evidence, MatchEvidence::Contract { contract, .. } if contract == TERRA_PAIR)
		})
		.times(1)
		.return_const(());
	observer
		.expect_on_wallet_match()
		.withf(|_, matches| {
			matches
				.iter()
				.all(|m| matches!(&m.evidence, MatchEvidence::Wallet { address, .. } if address == TERRA_TRADER))
		})
		.times(1)
		.return_const(());
	observer.expect_on_staking_match().never();

	let spec = FilterSpec {
		wallet_addresses: HashSet::from([TERRA_TRADER.to_string()]),
		wasm_contract_addresses: HashSet::from([TERRA_PAIR.to_string()]),
		..Default::default()
	};
	let pipeline = pipeline_with(terra_chain(), spec, Vec::new(), Arc::new(observer));
	let outcome = pipeline.process_message(&read_fixture("terra_wasm_swap.json"));

	assert!(outcome.passed());
	let tx = outcome.transaction().unwrap();
	assert_eq!(tx.classified_type, Some(TransactionType::Swap));
	assert_eq!(tx.swap_facts[0].pool_id, TERRA_PAIR);
	assert_eq!(tx.swap_facts[0].amount_out, "812345");
	assert!(tx
		.matched_filters
		.iter()
		.all(|m| m.filter_tier == FilterTier::WalletContract));
}

#[test]
fn test_failed_filters_still_report_transaction() {
	let spec = FilterSpec {
		wallet_addresses: HashSet::from(["cosmos1unrelated".to_string()]),
		..Default::default()
	};
	let mut observer = MockTransactionObserver::new();
	observer.expect_on_raw_message().return_const(());
	observer.expect_on_transaction().times(1).return_const(());
	observer.expect_on_filtered_transaction().never();
	observer.expect_on_staking_match().never();

	let pipeline = pipeline_with(cosmos_chain(), spec, Vec::new(), Arc::new(observer));
	let outcome = pipeline.process_message(&read_fixture("delegate_tx.json"));
	assert!(!outcome.passed());
	assert!(outcome.transaction().unwrap().matched_filters.is_empty());
}

#[tokio::test]
async fn test_channel_observer_receives_categories() {
	let (observer, mut channels) = ChannelObserver::new();
	let pipeline = pipeline_with(
		cosmos_chain(),
		FilterSpec::default(),
		Vec::new(),
		Arc::new(observer),
	);

	pipeline.process_message(&read_fixture("delegate_tx.json"));
	pipeline.process_message(&read_fixture("subscription_ack.json"));

	assert!(channels.raw_messages.recv().await.is_some());
	assert!(channels.raw_messages.recv().await.is_some());
	let tx = channels.transactions.recv().await.unwrap();
	assert_eq!(tx.height, 19504301);
	assert!(channels.filtered_transactions.recv().await.is_some());
	let staking = channels.staking_matches.recv().await.unwrap();
	assert_eq!(staking.matches[0].delegator, COSMOS_DELEGATOR);
	assert!(channels.transactions.try_recv().is_err());
	assert!(channels.wallet_matches.try_recv().is_err());
}

#[test]
fn test_pipeline_is_shareable_across_threads() {
	let pipeline = Arc::new(pipeline_with(
		osmosis_chain(),
		FilterSpec::default(),
		Vec::new(),
		Arc::new(NoopObserver),
	));
	let message = read_fixture("osmosis_swap_base64.json");

	let handles: Vec<_> = (0..4)
		.map(|_| {
			let pipeline = Arc::clone(&pipeline);
			let message = message.clone();
			std::thread::spawn(move || pipeline.process_message(&message))
		})
		.collect();
	let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

	assert!(outcomes.iter().all(|o| o == &outcomes[0]));
}
