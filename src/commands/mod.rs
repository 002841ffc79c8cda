pub mod apply;
pub mod revert;
pub mod status;
