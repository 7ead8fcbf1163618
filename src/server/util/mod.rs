pub mod links;
pub mod token;
