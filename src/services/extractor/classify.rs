use crate::{
	models::{DecodedTransaction, TransactionType},
	services::extractor::staking::staking_action_for_message,
	utils::parsing::action_name,
};

/// Transaction type named by a message `action` attribute.
pub fn transaction_type_for_action(action: &str) -> Option<TransactionType> {
	if let Some(staking) = staking_action_for_message(action) {
		return Some(staking.into());
	}
	match action_name(action) {
		"MsgSwapExactAmountIn"
		| "MsgSwapExactAmountOut"
		| "MsgSplitRouteSwapExactAmountIn"
		| "MsgSplitRouteSwapExactAmountOut"
		| "swap_exact_amount_in"
		| "swap_exact_amount_out" => Some(TransactionType::Swap),
		"MsgVote" | "MsgVoteWeighted" | "vote" => Some(TransactionType::Vote),
		"MsgDeposit" | "deposit" => Some(TransactionType::Deposit),
		_ => None,
	}
}

/// Picks one label for the transaction.
///
/// Message actions are consulted first. Without a recognised action the
/// derived facts decide, in the order swaps, staking, IBC, then the bare
/// `transfer` and `withdraw_position` event types.
pub fn classify(tx: &DecodedTransaction) -> Option<TransactionType> {
	let from_action = tx
		.message_events()
		.flat_map(|event| event.values("action"))
		.find_map(|action| transaction_type_for_action(action));
	if from_action.is_some() {
		return from_action;
	}

	if !tx.swap_facts.is_empty() {
		Some(TransactionType::Swap)
	} else if let Some(staking) = tx.staking_facts.first() {
		Some(staking.action.into())
	} else if !tx.ibc_facts.is_empty() {
		Some(TransactionType::IbcTransfer)
	} else if tx.has_event_type("transfer") {
		Some(TransactionType::Transfer)
	} else if tx.has_event_type("withdraw_position") {
		Some(TransactionType::WithdrawPosition)
	} else {
		None
	}
}
