//! DTOs for the admin catalog endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Book, NewBook};

#[derive(Debug, Deserialize, Validate)]
pub struct AddBookRequest {
    #[serde(default)]
    #[validate(length(max = 2048))]
    pub link: String,

    #[serde(default)]
    #[validate(length(max = 300))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

impl From<AddBookRequest> for NewBook {
    fn from(req: AddBookRequest) -> Self {
        NewBook {
            link: req.link,
            title: req.title,
            description: req.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddBookResponse {
    pub success: bool,
    pub book: Book,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}
