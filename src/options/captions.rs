use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Captions", inline)]
#[serde(default)]
/// Heading captions cycled by the carousel, top to bottom.
pub struct CaptionOptions {
    /// Caption text, one per heading.
    pub headings: Vec<String>,
}

impl Default for CaptionOptions {
    fn default() -> Self {
        Self {
            headings: vec![
                "Earth".into(),
                "Csilla".into(),
                "Volcanic".into(),
                "Venus".into(),
            ],
        }
    }
}
