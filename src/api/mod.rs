pub mod match_response;

pub use match_response::{assemble_match, MatchResponse};
