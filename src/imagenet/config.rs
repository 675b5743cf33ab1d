use std::{fs::File, path::Path};

use serde::Deserialize;

use crate::error::Result;

/// Parameters of the classifier input tensor. Defaults reproduce the
/// stock ImageNet convention: 224x224 spatial size, intensities scaled
/// by 256 relative to [0, 1].
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PreprocessConfig {
    pub target_size: usize,
    pub scale: f32,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        PreprocessConfig {
            target_size: 224,
            scale: 256.0,
        }
    }
}

impl PreprocessConfig {
    pub fn from_file(p: &Path) -> Result<Self> {
        let file = File::open(p)?;
        let config: PreprocessConfig = serde_json::from_reader(file)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_imagenet_convention() {
        let config = PreprocessConfig::default();
        assert_eq!(config.target_size, 224);
        assert_eq!(config.scale, 256.0);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: PreprocessConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.target_size, 224);
        assert_eq!(config.scale, 256.0);

        let config: PreprocessConfig = serde_json::from_str(r#"{"target_size": 112}"#).unwrap();
        assert_eq!(config.target_size, 112);
        assert_eq!(config.scale, 256.0);
    }
}
