pub mod ai;
pub mod bootstrap;
pub mod config;
pub mod consts;
pub mod env;
