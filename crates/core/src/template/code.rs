use std::fmt;
use std::str::FromStr;

use super::types::PromptTemplate;

/// Instructions for the summarize / format / optimize prompt.
pub const CODE_REVIEW_INSTRUCTIONS: &str = include_str!("../../templates/code_review.txt");

/// Payload used when `code-opt` is run without one.
pub const SAMPLE_CODE: &str = include_str!("../../templates/bubble_sort.c");

/// Language the payload is written in, announced in the prompt preamble.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CodeLanguage {
    Python,
    #[default]
    C,
    Cpp,
    CSharp,
    Java,
    JavaScript,
    Json,
    Css,
    Html,
}

impl CodeLanguage {
    pub const ALL: [CodeLanguage; 9] = [
        CodeLanguage::Python,
        CodeLanguage::C,
        CodeLanguage::Cpp,
        CodeLanguage::CSharp,
        CodeLanguage::Java,
        CodeLanguage::JavaScript,
        CodeLanguage::Json,
        CodeLanguage::Css,
        CodeLanguage::Html,
    ];

    pub fn preamble(&self) -> &'static str {
        match self {
            CodeLanguage::Python => "This is a Python code:",
            CodeLanguage::C => "This is a C code:",
            CodeLanguage::Cpp => "This is a C++ code:",
            CodeLanguage::CSharp => "This is a C# code:",
            CodeLanguage::Java => "This is a Java code:",
            CodeLanguage::JavaScript => "This is a JavaScript code:",
            CodeLanguage::Json => "This is a JSON code:",
            CodeLanguage::Css => "This is CSS code:",
            CodeLanguage::Html => "This is a HTML code:",
        }
    }

    /// Name accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeLanguage::Python => "python",
            CodeLanguage::C => "c",
            CodeLanguage::Cpp => "cpp",
            CodeLanguage::CSharp => "csharp",
            CodeLanguage::Java => "java",
            CodeLanguage::JavaScript => "javascript",
            CodeLanguage::Json => "json",
            CodeLanguage::Css => "css",
            CodeLanguage::Html => "html",
        }
    }
}

impl fmt::Display for CodeLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "python" | "py" => Ok(CodeLanguage::Python),
            "c" => Ok(CodeLanguage::C),
            "cpp" | "c++" => Ok(CodeLanguage::Cpp),
            "csharp" | "c#" | "cs" => Ok(CodeLanguage::CSharp),
            "java" => Ok(CodeLanguage::Java),
            "javascript" | "js" => Ok(CodeLanguage::JavaScript),
            "json" => Ok(CodeLanguage::Json),
            "css" => Ok(CodeLanguage::Css),
            "html" => Ok(CodeLanguage::Html),
            other => Err(format!(
                "Unknown language '{}'. Expected one of: {}",
                other,
                CodeLanguage::ALL.map(|l| l.as_str()).join(", ")
            )),
        }
    }
}

/// Template that asks for a summary, a formatted copy, and an optimized
/// version of code written in `language`.
pub fn code_template(language: CodeLanguage) -> PromptTemplate {
    PromptTemplate {
        name: "code-review",
        preamble: language.preamble(),
        instructions: CODE_REVIEW_INSTRUCTIONS,
    }
}
