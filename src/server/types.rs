use crate::dice::{RollRequest, RollResult};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub ok: bool,
    pub message: &'static str,
}

/// The validated parameters echoed back alongside the outcome.
#[derive(Debug, Serialize)]
pub struct RollResponse {
    pub count: u32,
    pub sides: u32,
    pub rolls: Vec<u32>,
    pub total: u32,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl RollResponse {
    pub fn new(request: RollRequest, result: RollResult) -> Self {
        Self {
            count: request.count,
            sides: request.sides,
            rolls: result.rolls,
            total: result.total,
        }
    }
}
