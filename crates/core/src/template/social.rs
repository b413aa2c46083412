use std::fmt;
use std::str::FromStr;

use super::types::PromptTemplate;

/// Instructions for turning a description into post copy.
pub const SOCIAL_POST_INSTRUCTIONS: &str = include_str!("../../templates/social_post.txt");

/// Payload used when `content-mod` is run without one.
pub const SAMPLE_DESCRIPTION: &str = include_str!("../../templates/iot_servo.txt");

/// Where the generated copy will be posted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Platform {
    #[default]
    LinkedIn,
    YouTube,
    X,
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::LinkedIn,
        Platform::YouTube,
        Platform::X,
        Platform::Instagram,
    ];

    pub fn preamble(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "generate a linked post:",
            Platform::YouTube => "generate a youTube post:",
            Platform::X => "generate a X tweet:",
            Platform::Instagram => "genrate a Instagram caption to post:",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "linkedin",
            Platform::YouTube => "youtube",
            Platform::X => "x",
            Platform::Instagram => "instagram",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linkedin" => Ok(Platform::LinkedIn),
            "youtube" | "yt" => Ok(Platform::YouTube),
            "x" | "twitter" => Ok(Platform::X),
            "instagram" | "insta" => Ok(Platform::Instagram),
            other => Err(format!(
                "Unknown platform '{}'. Expected one of: {}",
                other,
                Platform::ALL.map(|p| p.as_str()).join(", ")
            )),
        }
    }
}

/// Template that asks for ready-to-post copy for `platform`.
pub fn social_template(platform: Platform) -> PromptTemplate {
    PromptTemplate {
        name: "social-post",
        preamble: platform.preamble(),
        instructions: SOCIAL_POST_INSTRUCTIONS,
    }
}
