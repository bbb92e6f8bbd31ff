// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Suggestion settings model
//!
//! The preferences bound by the suggestion settings screen, plus the
//! feature-provider option list shown in its picker.

use std::hash::{Hash, Hasher};
use std::path::Path;

use crate::preferences::keys;
use crate::preferences::types::{
    BuiltInSuggestionFeatureProvider, CodeFont, PresentationMode, SuggestionFeatureProvider,
};
use crate::preferences::{PreferenceStoreExt, RawRepresentable};
use crate::store::PreferenceStore;

/// Smallest debounce the slider allows, in seconds.
pub const MIN_DEBOUNCE: f64 = 0.1;
/// Largest debounce the slider allows, in seconds.
pub const MAX_DEBOUNCE: f64 = 2.0;
/// Slider step, in seconds.
pub const DEBOUNCE_STEP: f64 = 0.1;

/// Snap a debounce value onto the slider range and step.
pub fn clamp_debounce(seconds: f64) -> f64 {
    if !seconds.is_finite() {
        return keys::REALTIME_SUGGESTION_DEBOUNCE.default_value();
    }
    let clamped = seconds.clamp(MIN_DEBOUNCE, MAX_DEBOUNCE);
    let steps = (clamped / DEBOUNCE_STEP).round();
    // Round to two decimals so 0.30000000000000004 reads back as 0.3.
    ((steps * DEBOUNCE_STEP) * 100.0).round() / 100.0
}

/// Every preference the suggestion settings screen edits.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionSettings {
    pub realtime_suggestion_toggle: bool,
    pub realtime_suggestion_debounce: f64,
    pub suggestion_presentation_mode: PresentationMode,
    pub disable_suggestion_feature_globally: bool,
    pub suggestion_feature_enabled_project_list: Vec<String>,
    pub hide_common_preceding_spaces_in_suggestion: bool,
    pub font: CodeFont,
    pub suggestion_feature_provider: SuggestionFeatureProvider,
    pub suggestion_display_compact_mode: bool,
    pub accept_suggestion_with_tab: bool,
    pub dismiss_suggestion_with_esc: bool,
    pub is_suggestion_sense_enabled: bool,
}

impl SuggestionSettings {
    /// Read the current values from a store.
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        Self {
            realtime_suggestion_toggle: store.get(&keys::REALTIME_SUGGESTION_TOGGLE),
            realtime_suggestion_debounce: store.get(&keys::REALTIME_SUGGESTION_DEBOUNCE),
            suggestion_presentation_mode: store.get(&keys::SUGGESTION_PRESENTATION_MODE),
            disable_suggestion_feature_globally: store
                .get(&keys::DISABLE_SUGGESTION_FEATURE_GLOBALLY),
            suggestion_feature_enabled_project_list: store
                .get(&keys::SUGGESTION_FEATURE_ENABLED_PROJECT_LIST),
            hide_common_preceding_spaces_in_suggestion: store
                .get(&keys::HIDE_COMMON_PRECEDING_SPACES_IN_SUGGESTION),
            font: store.get(&keys::SUGGESTION_CODE_FONT),
            suggestion_feature_provider: store.get(&keys::SUGGESTION_FEATURE_PROVIDER),
            suggestion_display_compact_mode: store.get(&keys::SUGGESTION_DISPLAY_COMPACT_MODE),
            accept_suggestion_with_tab: store.get(&keys::ACCEPT_SUGGESTION_WITH_TAB),
            dismiss_suggestion_with_esc: store.get(&keys::DISMISS_SUGGESTION_WITH_ESC),
            is_suggestion_sense_enabled: store.get(&keys::IS_SUGGESTION_SENSE_ENABLED),
        }
    }

    /// Write every value back. The debounce is snapped to the slider first.
    pub fn save<S: PreferenceStore + ?Sized>(&self, store: &S) {
        store.set(&keys::REALTIME_SUGGESTION_TOGGLE, &self.realtime_suggestion_toggle);
        store.set(
            &keys::REALTIME_SUGGESTION_DEBOUNCE,
            &clamp_debounce(self.realtime_suggestion_debounce),
        );
        store.set(
            &keys::SUGGESTION_PRESENTATION_MODE,
            &self.suggestion_presentation_mode,
        );
        store.set(
            &keys::DISABLE_SUGGESTION_FEATURE_GLOBALLY,
            &self.disable_suggestion_feature_globally,
        );
        store.set(
            &keys::SUGGESTION_FEATURE_ENABLED_PROJECT_LIST,
            &self.suggestion_feature_enabled_project_list,
        );
        store.set(
            &keys::HIDE_COMMON_PRECEDING_SPACES_IN_SUGGESTION,
            &self.hide_common_preceding_spaces_in_suggestion,
        );
        store.set(&keys::SUGGESTION_CODE_FONT, &self.font);
        store.set(
            &keys::SUGGESTION_FEATURE_PROVIDER,
            &self.suggestion_feature_provider,
        );
        store.set(
            &keys::SUGGESTION_DISPLAY_COMPACT_MODE,
            &self.suggestion_display_compact_mode,
        );
        store.set(&keys::ACCEPT_SUGGESTION_WITH_TAB, &self.accept_suggestion_with_tab);
        store.set(&keys::DISMISS_SUGGESTION_WITH_ESC, &self.dismiss_suggestion_with_esc);
        store.set(&keys::IS_SUGGESTION_SENSE_ENABLED, &self.is_suggestion_sense_enabled);
    }

    /// Whether suggestions are active for a project, honoring the global
    /// switch and its exception list.
    pub fn is_suggestion_enabled_for_project(&self, project_path: &str) -> bool {
        if !self.disable_suggestion_feature_globally {
            return true;
        }
        self.suggestion_feature_enabled_project_list
            .iter()
            .any(|p| Path::new(project_path).starts_with(p))
    }
}

/// One entry of the feature-provider picker.
#[derive(Debug, Clone)]
pub struct SuggestionFeatureProviderOption {
    pub name: String,
    pub built_in_provider: Option<BuiltInSuggestionFeatureProvider>,
    pub bundle_identifier: Option<String>,
    /// Set for a configured extension provider that is not installed.
    pub missing: bool,
}

impl SuggestionFeatureProviderOption {
    pub fn built_in(provider: BuiltInSuggestionFeatureProvider) -> Self {
        Self {
            name: provider.label().to_string(),
            built_in_provider: Some(provider),
            bundle_identifier: None,
            missing: false,
        }
    }

    pub fn extension(name: impl Into<String>, bundle_identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            built_in_provider: None,
            bundle_identifier: Some(bundle_identifier.into()),
            missing: false,
        }
    }

    /// Text shown in the picker.
    pub fn label(&self) -> String {
        if self.missing {
            format!("{} (Not found)", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Built-in raw value, else bundle identifier, else `"n/A"`.
    pub fn id(&self) -> String {
        if let Some(provider) = self.built_in_provider {
            return provider.raw_value().to_string();
        }
        self.bundle_identifier
            .clone()
            .unwrap_or_else(|| "n/A".to_string())
    }

    /// The option representing a stored provider.
    pub fn for_provider(provider: &SuggestionFeatureProvider) -> Self {
        match provider {
            SuggestionFeatureProvider::BuiltIn(p) => Self::built_in(*p),
            SuggestionFeatureProvider::Extension {
                name,
                bundle_identifier,
            } => Self::extension(name.clone(), bundle_identifier.clone()),
        }
    }

    /// The provider to store when this option is picked.
    pub fn to_provider(&self) -> SuggestionFeatureProvider {
        match self.built_in_provider {
            Some(provider) => SuggestionFeatureProvider::BuiltIn(provider),
            None => SuggestionFeatureProvider::Extension {
                name: self.name.clone(),
                bundle_identifier: self.bundle_identifier.clone().unwrap_or_default(),
            },
        }
    }
}

impl PartialEq for SuggestionFeatureProviderOption {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for SuggestionFeatureProviderOption {}

impl Hash for SuggestionFeatureProviderOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

/// Options for the feature-provider picker.
///
/// Built-in providers come first, then installed extension providers. When
/// the current provider is an extension that is no longer installed, it is
/// kept selectable with a `(Not found)` suffix.
pub fn provider_options(
    current: &SuggestionFeatureProvider,
    extension_options: &[SuggestionFeatureProviderOption],
) -> Vec<SuggestionFeatureProviderOption> {
    let mut options: Vec<_> = BuiltInSuggestionFeatureProvider::ALL
        .into_iter()
        .map(SuggestionFeatureProviderOption::built_in)
        .collect();
    options.extend(extension_options.iter().cloned());

    if let SuggestionFeatureProvider::Extension {
        name,
        bundle_identifier,
    } = current
    {
        let installed = extension_options
            .iter()
            .any(|o| o.bundle_identifier.as_deref() == Some(bundle_identifier.as_str()));
        if !installed {
            let mut option =
                SuggestionFeatureProviderOption::extension(name.clone(), bundle_identifier.clone());
            option.missing = true;
            options.push(option);
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_clamp_debounce() {
        assert_eq!(clamp_debounce(0.0), 0.1);
        assert_eq!(clamp_debounce(5.0), 2.0);
        assert_eq!(clamp_debounce(0.34), 0.3);
        assert_eq!(clamp_debounce(1.26), 1.3);
        assert_eq!(clamp_debounce(f64::NAN), 0.3);
    }

    #[test]
    fn test_load_defaults_from_empty_store() {
        let settings = SuggestionSettings::load(&MemoryStore::new());
        assert!(settings.realtime_suggestion_toggle);
        assert_eq!(settings.realtime_suggestion_debounce, 0.3);
        assert_eq!(
            settings.suggestion_presentation_mode,
            PresentationMode::NearbyTextCursor
        );
        assert!(settings.suggestion_feature_enabled_project_list.is_empty());
        assert!(settings.accept_suggestion_with_tab);
        assert_eq!(settings.font, CodeFont::default());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let mut settings = SuggestionSettings::load(&store);
        settings.realtime_suggestion_debounce = 1.23;
        settings.suggestion_presentation_mode = PresentationMode::FloatingWidget;
        settings.suggestion_feature_enabled_project_list = vec!["/work/app".into()];
        settings.suggestion_feature_provider = SuggestionFeatureProvider::Extension {
            name: "Tabby".into(),
            bundle_identifier: "com.example.tabby".into(),
        };
        settings.save(&store);

        let reloaded = SuggestionSettings::load(&store);
        assert_eq!(reloaded.realtime_suggestion_debounce, 1.2);
        assert_eq!(
            reloaded.suggestion_presentation_mode,
            PresentationMode::FloatingWidget
        );
        assert_eq!(
            reloaded.suggestion_feature_provider,
            settings.suggestion_feature_provider
        );
        assert_eq!(
            reloaded.suggestion_feature_enabled_project_list,
            vec!["/work/app".to_string()]
        );
    }

    #[test]
    fn test_project_exception_list() {
        let mut settings = SuggestionSettings::load(&MemoryStore::new());
        assert!(settings.is_suggestion_enabled_for_project("/anything"));

        settings.disable_suggestion_feature_globally = true;
        settings.suggestion_feature_enabled_project_list = vec!["/work/app".into()];
        assert!(settings.is_suggestion_enabled_for_project("/work/app"));
        assert!(settings.is_suggestion_enabled_for_project("/work/app/src"));
        assert!(!settings.is_suggestion_enabled_for_project("/work/application"));
        assert!(!settings.is_suggestion_enabled_for_project("/other"));
    }

    #[test]
    fn test_option_ids() {
        let copilot =
            SuggestionFeatureProviderOption::built_in(BuiltInSuggestionFeatureProvider::GitHubCopilot);
        assert_eq!(copilot.id(), "0");

        let ext = SuggestionFeatureProviderOption::extension("Tabby", "com.example.tabby");
        assert_eq!(ext.id(), "com.example.tabby");

        let orphan = SuggestionFeatureProviderOption {
            name: "?".into(),
            built_in_provider: None,
            bundle_identifier: None,
            missing: false,
        };
        assert_eq!(orphan.id(), "n/A");
    }

    #[test]
    fn test_option_equality_by_id() {
        let a = SuggestionFeatureProviderOption::extension("Tabby", "com.example.tabby");
        let mut b = SuggestionFeatureProviderOption::extension("Tabby", "com.example.tabby");
        b.missing = true;
        assert_eq!(a, b);
    }

    #[test]
    fn test_option_provider_conversion() {
        let provider = SuggestionFeatureProvider::BuiltIn(BuiltInSuggestionFeatureProvider::Codeium);
        let option = SuggestionFeatureProviderOption::for_provider(&provider);
        assert_eq!(option.to_provider(), provider);

        let provider = SuggestionFeatureProvider::Extension {
            name: "Tabby".into(),
            bundle_identifier: "com.example.tabby".into(),
        };
        let option = SuggestionFeatureProviderOption::for_provider(&provider);
        assert_eq!(option.to_provider(), provider);
    }

    #[test]
    fn test_provider_options_lists_missing_extension() {
        let current = SuggestionFeatureProvider::Extension {
            name: "Tabby".into(),
            bundle_identifier: "com.example.tabby".into(),
        };
        let installed = vec![SuggestionFeatureProviderOption::extension(
            "Other",
            "com.example.other",
        )];

        let options = provider_options(&current, &installed);
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].name, "GitHub Copilot");
        assert_eq!(options[1].name, "Codeium");
        assert_eq!(options[2].name, "Other");
        assert_eq!(options[3].label(), "Tabby (Not found)");
        assert_eq!(options[3].to_provider(), current);
    }

    #[test]
    fn test_provider_options_installed_extension_not_duplicated() {
        let current = SuggestionFeatureProvider::Extension {
            name: "Tabby".into(),
            bundle_identifier: "com.example.tabby".into(),
        };
        let installed = vec![SuggestionFeatureProviderOption::extension(
            "Tabby",
            "com.example.tabby",
        )];
        assert_eq!(provider_options(&current, &installed).len(), 3);
    }
}
