pub mod jwt;
pub mod search;
pub mod security;
