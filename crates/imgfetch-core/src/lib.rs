pub mod config;
pub mod logging;

pub mod batch;
pub mod checksum;
pub mod pipeline;
pub mod registry;
pub mod storage;
pub mod transport;
pub mod url_model;
