//! Content sources.
//!
//! Paths are relative content paths (`navigation.yaml`,
//! `tutorials/setup.md`). [`EmbeddedContent`] serves the files compiled into
//! the binary; [`FsContent`] reads the same layout from a directory so
//! communities can customise content without rebuilding.

use std::path::PathBuf;

use crate::error::ContentError;

/// Read access to site content.
pub trait ContentSource: Send + Sync {
    /// Read a content file.
    fn read(&self, path: &str) -> Result<String, ContentError>;

    /// Slugs of all tutorials (file stems under `tutorials/`), sorted.
    fn tutorials(&self) -> Result<Vec<String>, ContentError>;
}

macro_rules! embedded_tutorials {
    ($($slug:literal),* $(,)?) => {
        &[$(($slug, include_str!(concat!("../content/tutorials/", $slug, ".md")))),*]
    };
}

const EMBEDDED_FILES: &[(&str, &str)] = &[
    ("navigation.yaml", include_str!("../content/navigation.yaml")),
    ("home.yaml", include_str!("../content/home.yaml")),
    ("projects.yaml", include_str!("../content/projects.yaml")),
    ("resources.yaml", include_str!("../content/resources.yaml")),
];

const EMBEDDED_TUTORIALS: &[(&str, &str)] = embedded_tutorials![
    "basic-syntax",
    "chainlink-vrf",
    "common-attacks",
    "contract-interactions",
    "contract-linking",
    "data-types",
    "design-patterns",
    "devops-security",
    "erc1155",
    "erc20",
    "erc721",
    "foundry",
    "foundry-scripts",
    "functions",
    "gas-optimization",
    "github-basics",
    "inheritance",
    "introduction",
    "marketplace",
    "nft-minter",
    "oracle-integration",
    "security-best-practices",
    "setup",
    "transaction-status",
    "usdc-payment",
    "wagmi-integration",
    "wallet-actions",
];

/// Content compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedContent;

impl ContentSource for EmbeddedContent {
    fn read(&self, path: &str) -> Result<String, ContentError> {
        if let Some(slug) = path
            .strip_prefix("tutorials/")
            .and_then(|p| p.strip_suffix(".md"))
        {
            return EMBEDDED_TUTORIALS
                .iter()
                .find(|(s, _)| *s == slug)
                .map(|(_, content)| (*content).to_owned())
                .ok_or_else(|| ContentError::NotFound(path.to_owned()));
        }

        EMBEDDED_FILES
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, content)| (*content).to_owned())
            .ok_or_else(|| ContentError::NotFound(path.to_owned()))
    }

    fn tutorials(&self) -> Result<Vec<String>, ContentError> {
        let mut slugs: Vec<String> = EMBEDDED_TUTORIALS
            .iter()
            .map(|(slug, _)| (*slug).to_owned())
            .collect();
        slugs.sort();
        Ok(slugs)
    }
}

/// Content read from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsContent {
    root: PathBuf,
}

impl FsContent {
    /// Create a source rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl ContentSource for FsContent {
    fn read(&self, path: &str) -> Result<String, ContentError> {
        let file = self.root.join(path);
        std::fs::read_to_string(&file).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ContentError::NotFound(path.to_owned())
            } else {
                ContentError::Io {
                    path: file,
                    source: e,
                }
            }
        })
    }

    fn tutorials(&self) -> Result<Vec<String>, ContentError> {
        let dir = self.root.join("tutorials");
        let entries = std::fs::read_dir(&dir).map_err(|e| ContentError::Io {
            path: dir.clone(),
            source: e,
        })?;

        let mut slugs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ContentError::Io {
                path: dir.clone(),
                source: e,
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                slugs.push(stem.to_owned());
            }
        }
        slugs.sort();
        Ok(slugs)
    }
}
