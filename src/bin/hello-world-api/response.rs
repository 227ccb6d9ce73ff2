use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

// Field order matches the JSON emitted to the gateway.
#[derive(Serialize, PartialEq, Debug)]
struct ResponseBody {
    key3: &'static str,
    key2: &'static str,
    key1: &'static str,
}

impl Response {
    pub fn fixed() -> Result<Self> {
        let body = serde_json::to_string(&ResponseBody {
            key3: "value3",
            key2: "value2",
            key1: "value1",
        })?;

        Ok(Self {
            status_code: 200,
            headers: HashMap::from([("my_header".to_string(), "my_value".to_string())]),
            body,
            is_base64_encoded: false,
        })
    }
}
