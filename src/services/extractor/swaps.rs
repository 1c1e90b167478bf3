use crate::{
	models::{DecodedEvent, SwapFact},
	utils::parsing::strip_amount,
};

pub const TOKEN_SWAPPED_EVENT: &str = "token_swapped";

/// One fact per `token_swapped` event carrying `pool_id`, `tokens_in` and
/// `tokens_out`. Events missing any of them are skipped.
pub fn extract_swaps(events: &[DecodedEvent]) -> Vec<SwapFact> {
	events
		.iter()
		.filter(|event| event.is_type(TOKEN_SWAPPED_EVENT))
		.filter_map(|event| {
			let pool_id = event.first("pool_id")?;
			let tokens_in = event.first("tokens_in")?;
			let tokens_out = event.first("tokens_out")?;
			Some(SwapFact {
				pool_id: pool_id.to_string(),
				sender: event.first("sender").unwrap_or_default().to_string(),
				tokens_in: tokens_in.to_string(),
				tokens_out: tokens_out.to_string(),
				amount_in: strip_amount(tokens_in),
				amount_out: strip_amount(tokens_out),
			})
		})
		.collect()
}
