pub mod suggest_fix_request;
pub mod suggest_fix_response;
pub mod suggest_fix_route;
