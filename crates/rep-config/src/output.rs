//! Where and how resolved documents are written.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_dir() -> PathBuf {
    PathBuf::from("out")
}

fn default_rep_layout_file() -> String {
    String::from("rep_layout.json")
}

fn default_class_net_cache_file() -> String {
    String::from("class_net_cache.json")
}

const fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory both documents are written to.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_rep_layout_file")]
    pub rep_layout_file: String,

    #[serde(default = "default_class_net_cache_file")]
    pub class_net_cache_file: String,

    /// Indented JSON instead of a single line per document.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            rep_layout_file: default_rep_layout_file(),
            class_net_cache_file: default_class_net_cache_file(),
            pretty: default_pretty(),
        }
    }
}

impl OutputConfig {
    #[must_use]
    pub fn rep_layout_path(&self) -> PathBuf {
        self.dir.join(&self.rep_layout_file)
    }

    #[must_use]
    pub fn class_net_cache_path(&self) -> PathBuf {
        self.dir.join(&self.class_net_cache_file)
    }
}
