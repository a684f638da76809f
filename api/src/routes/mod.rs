pub mod branches_routes;
pub mod create_pr;
pub mod issues;
pub mod meta_routes;
pub mod pulls_routes;
pub mod repos_routes;
pub mod suggest_fix;
