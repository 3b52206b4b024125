pub mod add;
pub mod fix;
pub mod update;
