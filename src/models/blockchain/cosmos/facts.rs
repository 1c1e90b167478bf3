//! Typed facts derived from decoded events.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Participants and amounts seen in any event of a transaction.
///
/// Each field is a set: encounter order is irrelevant and duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransferFacts {
	pub senders: BTreeSet<String>,
	pub receivers: BTreeSet<String>,
	pub recipients: BTreeSet<String>,
	pub spenders: BTreeSet<String>,
	pub amounts: BTreeSet<String>,
}

impl TransferFacts {
	pub fn is_empty(&self) -> bool {
		self.senders.is_empty()
			&& self.receivers.is_empty()
			&& self.recipients.is_empty()
			&& self.spenders.is_empty()
			&& self.amounts.is_empty()
	}
}

/// A pool swap.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SwapFact {
	pub pool_id: String,
	pub sender: String,
	pub tokens_in: String,
	pub tokens_out: String,
	/// Best-effort numeric part of `tokens_in`.
	pub amount_in: String,
	/// Best-effort numeric part of `tokens_out`.
	pub amount_out: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StakingAction {
	Delegate,
	Undelegate,
	Redelegate,
	WithdrawReward,
}

impl StakingAction {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Delegate => "delegate",
			Self::Undelegate => "undelegate",
			Self::Redelegate => "redelegate",
			Self::WithdrawReward => "withdraw_reward",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StakingFact {
	pub action: StakingAction,
	pub delegator: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub validator: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub source_validator: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub destination_validator: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub amount: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub denom: Option<String>,
}

/// An ICS-20 transfer leaving this chain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IbcTransferFact {
	pub sender: Option<String>,
	pub recipient: Option<String>,
	pub amount: Option<String>,
	pub denom: Option<String>,
	pub source_port: String,
	pub source_channel: Option<String>,
	pub destination_port: Option<String>,
	pub destination_channel: Option<String>,
	pub sequence: Option<String>,
	/// Receiver on the counterparty chain, from `packet_data`.
	pub packet_receiver: Option<String>,
	pub memo: Option<String>,
}

/// Best-effort label for what a transaction did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
	Swap,
	Delegate,
	Undelegate,
	Redelegate,
	WithdrawReward,
	Vote,
	Deposit,
	IbcTransfer,
	Transfer,
	WithdrawPosition,
}

impl TransactionType {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Swap => "swap",
			Self::Delegate => "delegate",
			Self::Undelegate => "undelegate",
			Self::Redelegate => "redelegate",
			Self::WithdrawReward => "withdraw_reward",
			Self::Vote => "vote",
			Self::Deposit => "deposit",
			Self::IbcTransfer => "ibc_transfer",
			Self::Transfer => "transfer",
			Self::WithdrawPosition => "withdraw_position",
		}
	}
}

impl From<StakingAction> for TransactionType {
	fn from(action: StakingAction) -> Self {
		match action {
			StakingAction::Delegate => Self::Delegate,
			StakingAction::Undelegate => Self::Undelegate,
			StakingAction::Redelegate => Self::Redelegate,
			StakingAction::WithdrawReward => Self::WithdrawReward,
		}
	}
}

/// Chain specific summary of one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageSummary {
	pub module: String,
	pub action: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sender: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub recipient: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub amount: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub contract: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub pool_id: Option<String>,
}
