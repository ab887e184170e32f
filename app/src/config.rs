use serde::{Deserialize, Serialize};
use transform::transformer::TransformerConfig;

#[derive(Deserialize, Serialize, Debug, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub transformer: TransformerConfig,
}
