pub(crate) mod digest;
pub(crate) mod filter;
pub(crate) mod grid;
pub(crate) mod identity;
pub(crate) mod layout;
pub(crate) mod palette;
