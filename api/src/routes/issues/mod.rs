pub mod create_issue_request;
pub mod issues_routes;
