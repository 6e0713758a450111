use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub default_tuple_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_tuple_size: 3,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, confy::ConfyError> {
        match confy::load("phrasematch", Some("config")) {
            Ok(config) => Ok(config),
            Err(err) => {
                eprintln!("Failed to load config, using defaults: {err}");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store("phrasematch", Some("config"), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuple_size() {
        assert_eq!(Config::default().default_tuple_size, 3);
    }
}
