use serde::Deserialize;

use crate::{
	models::{DecodedEvent, IbcTransferFact},
	utils::parsing::split_amount,
};

/// Port used by ICS-20 fungible token transfers.
pub const TRANSFER_PORT: &str = "transfer";

#[derive(Debug, Default, Deserialize)]
struct PacketData {
	#[serde(default)]
	receiver: Option<String>,
	#[serde(default)]
	memo: Option<String>,
}

/// Correlates the first ICS-20 `send_packet` event with every `transfer`
/// event of the same transaction.
pub fn extract_ibc(events: &[DecodedEvent]) -> Vec<IbcTransferFact> {
	let Some(packet) = events.iter().find(|event| {
		event.is_type("send_packet") && event.first("packet_src_port") == Some(TRANSFER_PORT)
	}) else {
		return Vec::new();
	};

	let packet_data = packet
		.first("packet_data")
		.and_then(|data| serde_json::from_str::<PacketData>(data).ok())
		.unwrap_or_default();
	let owned = |key: &str| packet.first(key).map(str::to_string);

	events
		.iter()
		.filter(|event| event.is_type("transfer"))
		.map(|transfer| {
			let (amount, denom) = match transfer.first("amount") {
				Some(raw) => {
					let (amount, denom) = split_amount(raw);
					(Some(amount), Some(denom).filter(|d| !d.is_empty()))
				}
				None => (None, None),
			};
			IbcTransferFact {
				sender: transfer.first("sender").map(str::to_string),
				recipient: transfer.first("recipient").map(str::to_string),
				amount,
				denom,
				source_port: TRANSFER_PORT.to_string(),
				source_channel: owned("packet_src_channel"),
				destination_port: owned("packet_dst_port"),
				destination_channel: owned("packet_dst_channel"),
				sequence: owned("packet_sequence"),
				packet_receiver: packet_data.receiver.clone(),
				memo: packet_data.memo.clone().filter(|m| !m.is_empty()),
			}
		})
		.collect()
}
