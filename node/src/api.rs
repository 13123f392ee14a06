// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

pub const WELCOME_TEXT: &str = "Bienvinido!";
pub const UPDATED_MESSAGE: &str = "Carro updated successfully";
pub const DELETED_MESSAGE: &str = "Carro deleted successfully";
pub const NOT_FOUND_MESSAGE: &str = "Carro not found";

/// `{"message": ...}` body of PUT/DELETE responses, success or 404.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}
