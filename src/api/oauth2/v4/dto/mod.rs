pub mod token_query;
pub mod token_response;
