use crate::config::AtlasConfig;
use atlas_pack::io::ext_repr::{ExtAtlas, ExtAtlasInstance};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct AtlasOutput {
    #[serde(flatten)]
    pub instance: ExtAtlasInstance,
    pub solution: ExtAtlas,
    pub config: AtlasConfig,
}
