use std::{
    collections::HashMap,
    ops::{Deref, DerefMut},
};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form header mapping, passed through verbatim in both directions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForwardHeaders(pub HashMap<String, String>);

impl ForwardHeaders {
    pub fn get(&self, key: &str) -> Option<&String> {
        HashMap::get(self, key)
    }
}

impl Deref for ForwardHeaders {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ForwardHeaders {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[(String, String); N]> for ForwardHeaders {
    fn from(arr: [(String, String); N]) -> Self {
        let map = arr.into_iter().collect();
        ForwardHeaders(map)
    }
}

/// Description of one outbound request, deserialized from the inbound JSON
/// body. `url` is validated by the handler before any network call; the
/// other fields carry defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ForwardRequest {
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_method")]
    pub method: String,

    #[serde(default)]
    pub headers: ForwardHeaders,

    #[serde(default)]
    pub body: Option<Value>,
}

fn default_method() -> String {
    String::from("GET")
}
