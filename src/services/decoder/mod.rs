//! Subscription message decoding.
//!
//! - `codec`: conditional base64 decoding of attribute strings
//! - `envelope`: payload and event list extraction across message shapes
//! - `events`: per-attribute decoding with provenance

mod codec;
mod envelope;
mod events;

pub use codec::AttributeCodec;
pub use envelope::{events_from_flattened, extract_envelope, is_oracle_vote, ORACLE_VOTE_KEY};
pub use events::EventDecoder;
