/// Module containing the push notification interface
pub mod notifier;
/// Module containing the price source interface
pub mod market;
/// Module containing the quote source interface
pub mod quotes;
/// Module containing the data store interface
pub mod store;
