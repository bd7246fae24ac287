pub mod list;
pub mod serve;
pub mod show;
pub mod submit;
