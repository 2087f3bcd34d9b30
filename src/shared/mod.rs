pub mod editor;
pub mod env_var;
pub mod table;
