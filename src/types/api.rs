use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadPaste {
    pub id: String,
    pub url: String,
}
