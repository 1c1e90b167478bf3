//! Chain specific post-processing of decoded transactions.
//!
//! Every chain gets a `ChainTransformer`. The generic variant leaves events
//! untouched and summarizes `message` events; chain variants additionally
//! reshape their own events and recognise pool operations. New chains are
//! added by registering a transformer with the `TransformerRegistry`.

mod generic;
mod osmosis;
mod terra;

pub use generic::{message_summaries, parse_action, GenericTransformer};
pub use osmosis::OsmosisTransformer;
pub use terra::TerraTransformer;

use std::{collections::HashMap, sync::Arc};

use crate::models::{strip_revision, ChainKind, DecodedTransaction, MessageSummary};

/// Chain specific hook applied to every decoded transaction.
pub trait ChainTransformer: Send + Sync {
	fn kind(&self) -> ChainKind;

	/// Reshapes or extends the decoded events. Identity by default.
	fn transform_events(&self, tx: DecodedTransaction) -> DecodedTransaction {
		tx
	}

	/// Structured summaries of the messages in `tx`.
	fn extract_messaging_data(&self, tx: &DecodedTransaction) -> Vec<MessageSummary> {
		message_summaries(tx)
	}
}

/// Built-in transformer for a chain family.
pub fn transformer_for(kind: ChainKind) -> Arc<dyn ChainTransformer> {
	match kind {
		ChainKind::Generic => Arc::new(GenericTransformer),
		ChainKind::Osmosis => Arc::new(OsmosisTransformer),
		ChainKind::Terra => Arc::new(TerraTransformer),
	}
}

/// Chain names known to the default registry.
const DEFAULT_CHAINS: &[&str] = &["osmosis", "osmo-test", "phoenix", "columbus", "pisco", "terra"];

/// Transformers keyed by chain id or chain id without revision.
#[derive(Clone)]
pub struct TransformerRegistry {
	transformers: HashMap<String, Arc<dyn ChainTransformer>>,
}

impl TransformerRegistry {
	/// Registry without any chain specific transformer.
	pub fn empty() -> Self {
		Self {
			transformers: HashMap::new(),
		}
	}

	pub fn new() -> Self {
		let mut registry = Self::empty();
		for chain in DEFAULT_CHAINS {
			registry.register(*chain, transformer_for(ChainKind::from_chain_id(chain)));
		}
		registry
	}

	/// Registers `transformer` for a chain id such as `osmosis-1`, or for
	/// every revision of a chain when given the bare name `osmosis`.
	pub fn register(&mut self, chain_id: impl Into<String>, transformer: Arc<dyn ChainTransformer>) {
		self.transformers.insert(chain_id.into(), transformer);
	}

	/// Resolves by exact chain id, then by the id without its revision
	/// suffix, falling back to the generic transformer.
	pub fn resolve(&self, chain_id: &str) -> Arc<dyn ChainTransformer> {
		self.transformers
			.get(chain_id)
			.or_else(|| self.transformers.get(strip_revision(chain_id)))
			.cloned()
			.unwrap_or_else(|| {
				tracing::debug!(chain_id = %chain_id, "No chain transformer registered, using generic");
				Arc::new(GenericTransformer)
			})
	}
}

impl Default for TransformerRegistry {
	fn default() -> Self {
		Self::new()
	}
}
