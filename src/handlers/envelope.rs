//! Response envelopes
//!
//! Successful responses are wrapped in `{"status":"success","data":...}`,
//! with a `total` count for collections.

use serde::Serialize;

/// Single-resource envelope
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// Collection envelope
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub status: &'static str,
    pub total: usize,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            status: "success",
            total: data.len(),
            data,
        }
    }
}

/// Bare message body (deletions and similar)
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
