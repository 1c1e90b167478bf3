use crate::{
	models::{DecodedEvent, StakingAction, StakingFact},
	utils::parsing::{action_name, split_amount},
};

/// Staking action for a staking module event type.
pub fn staking_action_for_event(event_type: &str) -> Option<StakingAction> {
	match event_type {
		"delegate" => Some(StakingAction::Delegate),
		"unbond" => Some(StakingAction::Undelegate),
		"redelegate" => Some(StakingAction::Redelegate),
		"withdraw_rewards" => Some(StakingAction::WithdrawReward),
		_ => None,
	}
}

/// Staking action for a message `action` attribute, either a type URL or a
/// legacy action name.
pub fn staking_action_for_message(action: &str) -> Option<StakingAction> {
	match action_name(action) {
		"MsgDelegate" | "delegate" => Some(StakingAction::Delegate),
		"MsgUndelegate" | "begin_unbonding" | "undelegate" => Some(StakingAction::Undelegate),
		"MsgBeginRedelegate" | "begin_redelegate" => Some(StakingAction::Redelegate),
		"MsgWithdrawDelegatorReward" | "withdraw_delegator_reward" => {
			Some(StakingAction::WithdrawReward)
		}
		_ => None,
	}
}

/// Staking facts from staking events and from `message` events whose action
/// is a staking message. Identical facts are reported once.
pub fn extract_staking(events: &[DecodedEvent]) -> Vec<StakingFact> {
	let mut facts: Vec<StakingFact> = Vec::new();
	for event in events {
		let action = if event.is_type("message") {
			event.values("action")
				.iter()
				.find_map(|action| staking_action_for_message(action))
		} else {
			staking_action_for_event(&event.event_type)
		};
		let Some(fact) = action.and_then(|action| staking_fact(action, event)) else {
			continue;
		};
		if !facts.contains(&fact) {
			facts.push(fact);
		}
	}
	facts
}

fn staking_fact(action: StakingAction, event: &DecodedEvent) -> Option<StakingFact> {
	let delegator = event.first("delegator").or_else(|| event.first("sender"))?;

	let validator = event.first("validator").map(str::to_string);
	let source_validator = event.first("source_validator").map(str::to_string);
	let destination_validator = event.first("destination_validator").map(str::to_string);
	if validator.is_none() && source_validator.is_none() && destination_validator.is_none() {
		return None;
	}

	let (amount, denom) = match event.first("amount") {
		Some(raw) => {
			let (amount, denom) = split_amount(raw);
			(Some(amount), Some(denom).filter(|d| !d.is_empty()))
		}
		None => (None, None),
	};

	Some(StakingFact {
		action,
		delegator: delegator.to_string(),
		validator,
		source_validator,
		destination_validator,
		amount,
		denom,
	})
}
