// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Value types stored under the application's preference keys

use serde::{Deserialize, Serialize};

use super::storable::RawRepresentable;

/// Where inline suggestions are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresentationMode {
    #[default]
    NearbyTextCursor,
    FloatingWidget,
}

impl PresentationMode {
    pub const ALL: [PresentationMode; 2] = [
        PresentationMode::NearbyTextCursor,
        PresentationMode::FloatingWidget,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PresentationMode::NearbyTextCursor => "Nearby text cursor",
            PresentationMode::FloatingWidget => "Floating widget",
        }
    }
}

impl RawRepresentable for PresentationMode {
    type Raw = i64;

    fn raw_value(&self) -> i64 {
        match self {
            PresentationMode::NearbyTextCursor => 0,
            PresentationMode::FloatingWidget => 1,
        }
    }

    fn from_raw_value(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(PresentationMode::NearbyTextCursor),
            1 => Some(PresentationMode::FloatingWidget),
            _ => None,
        }
    }
}

/// Color scheme of the floating widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidgetColorScheme {
    #[default]
    System,
    Light,
    Dark,
}

impl RawRepresentable for WidgetColorScheme {
    type Raw = String;

    fn raw_value(&self) -> String {
        match self {
            WidgetColorScheme::System => "system",
            WidgetColorScheme::Light => "light",
            WidgetColorScheme::Dark => "dark",
        }
        .to_string()
    }

    fn from_raw_value(raw: String) -> Option<Self> {
        match raw.as_str() {
            "system" => Some(WidgetColorScheme::System),
            "light" => Some(WidgetColorScheme::Light),
            "dark" => Some(WidgetColorScheme::Dark),
            _ => None,
        }
    }
}

/// How the Node.js runtime for language servers is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeRunner {
    #[default]
    Env,
    Bash,
    Shell,
}

impl RawRepresentable for NodeRunner {
    type Raw = i64;

    fn raw_value(&self) -> i64 {
        match self {
            NodeRunner::Env => 0,
            NodeRunner::Bash => 1,
            NodeRunner::Shell => 2,
        }
    }

    fn from_raw_value(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(NodeRunner::Env),
            1 => Some(NodeRunner::Bash),
            2 => Some(NodeRunner::Shell),
            _ => None,
        }
    }
}

/// Suggestion services bundled with the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum BuiltInSuggestionFeatureProvider {
    #[default]
    GitHubCopilot,
    Codeium,
}

impl BuiltInSuggestionFeatureProvider {
    pub const ALL: [BuiltInSuggestionFeatureProvider; 2] = [
        BuiltInSuggestionFeatureProvider::GitHubCopilot,
        BuiltInSuggestionFeatureProvider::Codeium,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BuiltInSuggestionFeatureProvider::GitHubCopilot => "GitHub Copilot",
            BuiltInSuggestionFeatureProvider::Codeium => "Codeium",
        }
    }
}

impl RawRepresentable for BuiltInSuggestionFeatureProvider {
    type Raw = i64;

    fn raw_value(&self) -> i64 {
        match self {
            BuiltInSuggestionFeatureProvider::GitHubCopilot => 0,
            BuiltInSuggestionFeatureProvider::Codeium => 1,
        }
    }

    fn from_raw_value(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(BuiltInSuggestionFeatureProvider::GitHubCopilot),
            1 => Some(BuiltInSuggestionFeatureProvider::Codeium),
            _ => None,
        }
    }
}

impl From<BuiltInSuggestionFeatureProvider> for i64 {
    fn from(provider: BuiltInSuggestionFeatureProvider) -> Self {
        provider.raw_value()
    }
}

impl TryFrom<i64> for BuiltInSuggestionFeatureProvider {
    type Error = String;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::from_raw_value(raw).ok_or_else(|| format!("unknown built-in provider {}", raw))
    }
}

/// The service that produces suggestions: bundled, or supplied by an
/// extension identified by its bundle identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionFeatureProvider {
    BuiltIn(BuiltInSuggestionFeatureProvider),
    #[serde(rename_all = "camelCase")]
    Extension {
        name: String,
        bundle_identifier: String,
    },
}

impl Default for SuggestionFeatureProvider {
    fn default() -> Self {
        SuggestionFeatureProvider::BuiltIn(BuiltInSuggestionFeatureProvider::default())
    }
}

crate::json_raw_representable!(SuggestionFeatureProvider);

/// Font used to render suggestion code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeFont {
    pub family: String,
    pub size: f64,
}

impl Default for CodeFont {
    fn default() -> Self {
        Self {
            family: "Menlo".to_string(),
            size: 13.0,
        }
    }
}

crate::json_raw_representable!(CodeFont);

/// What a custom command does when triggered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CustomCommandFeature {
    #[serde(rename_all = "camelCase")]
    PromptToCode {
        extra_system_prompt: Option<String>,
        prompt: Option<String>,
        continuous_mode: bool,
        generate_description: bool,
    },
    #[serde(rename_all = "camelCase")]
    CustomChat {
        system_prompt: Option<String>,
        prompt: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    SingleRoundDialog {
        system_prompt: Option<String>,
        prompt: String,
        receive_reply_in_notification: bool,
    },
}

/// A user-defined command listed in the editor menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCommand {
    pub command_id: String,
    pub name: String,
    pub feature: CustomCommandFeature,
}

/// API flavor a configured model speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModelFormat {
    #[serde(rename = "openAI")]
    OpenAI,
    #[serde(rename = "azureOpenAI")]
    AzureOpenAI,
    #[serde(rename = "openAICompatible")]
    OpenAICompatible,
    GoogleAI,
    Ollama,
    Claude,
}

/// A chat or embedding model configured by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    pub id: String,
    pub name: String,
    pub format: ModelFormat,
    pub base_url: String,
    pub model_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}
