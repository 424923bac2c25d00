pub mod consts;
pub mod controller;
pub mod export;
pub mod model;
pub mod store;
