pub mod filter;
pub mod lookup;
pub mod pagination;
pub mod theme;
