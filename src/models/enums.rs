//! Enumerations shared across the SDK

use serde::{Deserialize, Serialize};

/// Target language for generated data objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    /// C# class with auto-properties
    CSharp,
    /// Java class with private fields and getters/setters
    Java,
    /// TypeScript exported interface
    TypeScript,
    /// Python dataclass
    Python,
}

impl TargetLanguage {
    /// All supported languages, in a stable order
    pub const ALL: [TargetLanguage; 4] = [
        TargetLanguage::CSharp,
        TargetLanguage::Java,
        TargetLanguage::TypeScript,
        TargetLanguage::Python,
    ];

    /// Identifier accepted by [`std::str::FromStr`] (case-insensitive)
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLanguage::CSharp => "csharp",
            TargetLanguage::Java => "java",
            TargetLanguage::TypeScript => "typescript",
            TargetLanguage::Python => "python",
        }
    }

    /// File extension used when writing generated sources to disk
    pub fn file_extension(&self) -> &'static str {
        match self {
            TargetLanguage::CSharp => "cs",
            TargetLanguage::Java => "java",
            TargetLanguage::TypeScript => "ts",
            TargetLanguage::Python => "py",
        }
    }

    /// Comma separated list of accepted identifiers, for error messages
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for TargetLanguage {
    fn default() -> Self {
        Self::CSharp
    }
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csharp" => Ok(TargetLanguage::CSharp),
            "java" => Ok(TargetLanguage::Java),
            "typescript" => Ok(TargetLanguage::TypeScript),
            "python" => Ok(TargetLanguage::Python),
            _ => Err(format!("Unknown target language: {}", s)),
        }
    }
}
