pub mod holders;
pub mod locks;
