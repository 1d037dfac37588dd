pub mod market;
pub mod proposal;
pub mod request;
pub mod segment;
pub mod verdict;
