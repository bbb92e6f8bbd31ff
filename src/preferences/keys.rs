// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Application preference keys
//!
//! Each key is a typed constant. [`KeyId`] enumerates the same keys for
//! untyped access (listing, printing, parsing text input).

use super::key::{DeprecatedPreferenceKey, PreferenceKey};
use super::storable::PreferenceValue;
use super::types::{
    BuiltInSuggestionFeatureProvider, CodeFont, CustomCommand, ModelConfig, NodeRunner,
    PresentationMode, SuggestionFeatureProvider, WidgetColorScheme,
};
use super::value::{Value, ValueKind};

// General

pub const QUIT_XPC_SERVICE_ON_XCODE_AND_APP_QUIT: PreferenceKey<bool> =
    PreferenceKey::new("QuitXPCServiceOnXcodeAndAppQuit", || false);

pub const AUTOMATICALLY_CHECK_FOR_UPDATE: PreferenceKey<bool> =
    PreferenceKey::new("AutomaticallyCheckForUpdate", || false);

pub const RUN_NODE_WITH: PreferenceKey<NodeRunner> =
    PreferenceKey::new("RunNodeWith", NodeRunner::default);

pub const WIDGET_COLOR_SCHEME: PreferenceKey<WidgetColorScheme> =
    PreferenceKey::new("WidgetColorScheme", WidgetColorScheme::default);

pub const CUSTOM_COMMANDS: PreferenceKey<Vec<CustomCommand>> =
    PreferenceKey::new("CustomCommands", Vec::new);

pub const CHAT_MODELS: PreferenceKey<Vec<ModelConfig>> =
    PreferenceKey::new("ChatModels", Vec::new);

pub const EMBEDDING_MODELS: PreferenceKey<Vec<ModelConfig>> =
    PreferenceKey::new("EmbeddingModels", Vec::new);

// Suggestion

pub const REALTIME_SUGGESTION_TOGGLE: PreferenceKey<bool> =
    PreferenceKey::new("RealtimeSuggestionToggle", || true);

/// Debounce before a real-time suggestion request, in seconds.
pub const REALTIME_SUGGESTION_DEBOUNCE: PreferenceKey<f64> =
    PreferenceKey::new("RealtimeSuggestionDebounce", || 0.3);

pub const SUGGESTION_PRESENTATION_MODE: PreferenceKey<PresentationMode> =
    PreferenceKey::new("SuggestionPresentationMode", PresentationMode::default);

pub const SUGGESTION_FEATURE_PROVIDER: PreferenceKey<SuggestionFeatureProvider> =
    PreferenceKey::new("NewSuggestionFeatureProvider", SuggestionFeatureProvider::default);

/// Superseded by [`SUGGESTION_FEATURE_PROVIDER`], which also allows
/// extension providers.
pub const OLD_SUGGESTION_FEATURE_PROVIDER: DeprecatedPreferenceKey<
    BuiltInSuggestionFeatureProvider,
> = DeprecatedPreferenceKey::new(
    "SuggestionFeatureProvider",
    BuiltInSuggestionFeatureProvider::default,
);

pub const DISABLE_SUGGESTION_FEATURE_GLOBALLY: PreferenceKey<bool> =
    PreferenceKey::new("DisableSuggestionFeatureGlobally", || false);

/// Projects where suggestions stay enabled while disabled globally.
pub const SUGGESTION_FEATURE_ENABLED_PROJECT_LIST: PreferenceKey<Vec<String>> =
    PreferenceKey::new("SuggestionFeatureEnabledProjectList", Vec::new);

pub const HIDE_COMMON_PRECEDING_SPACES_IN_SUGGESTION: PreferenceKey<bool> =
    PreferenceKey::new("HideCommonPrecedingSpacesInSuggestion", || false);

pub const SUGGESTION_CODE_FONT: PreferenceKey<CodeFont> =
    PreferenceKey::new("SuggestionCodeFont", CodeFont::default);

pub const SUGGESTION_DISPLAY_COMPACT_MODE: PreferenceKey<bool> =
    PreferenceKey::new("SuggestionDisplayCompactMode", || false);

pub const ACCEPT_SUGGESTION_WITH_TAB: PreferenceKey<bool> =
    PreferenceKey::new("AcceptSuggestionWithTab", || true);

pub const DISMISS_SUGGESTION_WITH_ESC: PreferenceKey<bool> =
    PreferenceKey::new("DismissSuggestionWithEsc", || true);

pub const IS_SUGGESTION_SENSE_ENABLED: PreferenceKey<bool> =
    PreferenceKey::new("IsSuggestionSenseEnabled", || false);

/// Identifier of every registered key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyId {
    QuitXpcServiceOnXcodeAndAppQuit,
    AutomaticallyCheckForUpdate,
    RunNodeWith,
    WidgetColorScheme,
    CustomCommands,
    ChatModels,
    EmbeddingModels,
    RealtimeSuggestionToggle,
    RealtimeSuggestionDebounce,
    SuggestionPresentationMode,
    SuggestionFeatureProvider,
    OldSuggestionFeatureProvider,
    DisableSuggestionFeatureGlobally,
    SuggestionFeatureEnabledProjectList,
    HideCommonPrecedingSpacesInSuggestion,
    SuggestionCodeFont,
    SuggestionDisplayCompactMode,
    AcceptSuggestionWithTab,
    DismissSuggestionWithEsc,
    IsSuggestionSenseEnabled,
}

/// Untyped description of a registered key.
#[derive(Debug, Clone)]
pub struct KeyDescriptor {
    pub id: KeyId,
    pub name: &'static str,
    pub kind: ValueKind,
    pub default: Value,
    pub deprecated: bool,
    normalize: fn(&Value) -> Option<Value>,
}

impl KeyDescriptor {
    /// Whether a raw value decodes as this key's type.
    pub fn accepts(&self, value: &Value) -> bool {
        (self.normalize)(value).is_some()
    }

    /// The value a typed read would return given the stored raw value.
    pub fn effective(&self, stored: Option<&Value>) -> Value {
        stored
            .and_then(|v| (self.normalize)(v))
            .unwrap_or_else(|| self.default.clone())
    }
}

fn normalize<T: PreferenceValue>(value: &Value) -> Option<Value> {
    T::from_value(value).map(|typed| typed.to_value())
}

fn describe<T: PreferenceValue>(id: KeyId, key: &PreferenceKey<T>) -> KeyDescriptor {
    KeyDescriptor {
        id,
        name: key.name(),
        kind: T::KIND,
        default: key.default_value().to_value(),
        deprecated: false,
        normalize: normalize::<T>,
    }
}

fn describe_deprecated<T: PreferenceValue>(
    id: KeyId,
    key: &DeprecatedPreferenceKey<T>,
) -> KeyDescriptor {
    KeyDescriptor {
        id,
        name: key.name(),
        kind: T::KIND,
        default: key.default_value().to_value(),
        deprecated: true,
        normalize: normalize::<T>,
    }
}

impl KeyId {
    pub const ALL: [KeyId; 20] = [
        KeyId::QuitXpcServiceOnXcodeAndAppQuit,
        KeyId::AutomaticallyCheckForUpdate,
        KeyId::RunNodeWith,
        KeyId::WidgetColorScheme,
        KeyId::CustomCommands,
        KeyId::ChatModels,
        KeyId::EmbeddingModels,
        KeyId::RealtimeSuggestionToggle,
        KeyId::RealtimeSuggestionDebounce,
        KeyId::SuggestionPresentationMode,
        KeyId::SuggestionFeatureProvider,
        KeyId::OldSuggestionFeatureProvider,
        KeyId::DisableSuggestionFeatureGlobally,
        KeyId::SuggestionFeatureEnabledProjectList,
        KeyId::HideCommonPrecedingSpacesInSuggestion,
        KeyId::SuggestionCodeFont,
        KeyId::SuggestionDisplayCompactMode,
        KeyId::AcceptSuggestionWithTab,
        KeyId::DismissSuggestionWithEsc,
        KeyId::IsSuggestionSenseEnabled,
    ];

    pub fn descriptor(&self) -> KeyDescriptor {
        let id = *self;
        match id {
            KeyId::QuitXpcServiceOnXcodeAndAppQuit => {
                describe(id, &QUIT_XPC_SERVICE_ON_XCODE_AND_APP_QUIT)
            }
            KeyId::AutomaticallyCheckForUpdate => describe(id, &AUTOMATICALLY_CHECK_FOR_UPDATE),
            KeyId::RunNodeWith => describe(id, &RUN_NODE_WITH),
            KeyId::WidgetColorScheme => describe(id, &WIDGET_COLOR_SCHEME),
            KeyId::CustomCommands => describe(id, &CUSTOM_COMMANDS),
            KeyId::ChatModels => describe(id, &CHAT_MODELS),
            KeyId::EmbeddingModels => describe(id, &EMBEDDING_MODELS),
            KeyId::RealtimeSuggestionToggle => describe(id, &REALTIME_SUGGESTION_TOGGLE),
            KeyId::RealtimeSuggestionDebounce => describe(id, &REALTIME_SUGGESTION_DEBOUNCE),
            KeyId::SuggestionPresentationMode => describe(id, &SUGGESTION_PRESENTATION_MODE),
            KeyId::SuggestionFeatureProvider => describe(id, &SUGGESTION_FEATURE_PROVIDER),
            KeyId::OldSuggestionFeatureProvider => {
                describe_deprecated(id, &OLD_SUGGESTION_FEATURE_PROVIDER)
            }
            KeyId::DisableSuggestionFeatureGlobally => {
                describe(id, &DISABLE_SUGGESTION_FEATURE_GLOBALLY)
            }
            KeyId::SuggestionFeatureEnabledProjectList => {
                describe(id, &SUGGESTION_FEATURE_ENABLED_PROJECT_LIST)
            }
            KeyId::HideCommonPrecedingSpacesInSuggestion => {
                describe(id, &HIDE_COMMON_PRECEDING_SPACES_IN_SUGGESTION)
            }
            KeyId::SuggestionCodeFont => describe(id, &SUGGESTION_CODE_FONT),
            KeyId::SuggestionDisplayCompactMode => describe(id, &SUGGESTION_DISPLAY_COMPACT_MODE),
            KeyId::AcceptSuggestionWithTab => describe(id, &ACCEPT_SUGGESTION_WITH_TAB),
            KeyId::DismissSuggestionWithEsc => describe(id, &DISMISS_SUGGESTION_WITH_ESC),
            KeyId::IsSuggestionSenseEnabled => describe(id, &IS_SUGGESTION_SENSE_ENABLED),
        }
    }

    /// Store name of this key.
    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// Look a key up by its store name.
    pub fn from_name(name: &str) -> Option<KeyId> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }
}
