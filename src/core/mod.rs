pub mod folder;
pub mod provision;
pub mod submit;
