/*
[INPUT]:  Authentication configuration and credentials
[OUTPUT]: Authentication headers and credential errors
[POS]:    Auth layer - handles Rockside API authentication
[UPDATE]: When auth schemes change
*/

pub mod credential;

pub use credential::Credential;
