//! HTTP adapter for the prediction service

mod error;
mod gateway;

pub use error::HttpGatewayError;
pub use gateway::ReqwestPredictionGateway;
