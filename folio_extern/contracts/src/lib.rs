pub mod relay;
pub mod web3forms;
pub mod webhook;
