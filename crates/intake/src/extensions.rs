// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extension modules linked into the binary.

use intake_config::DiscoveryConfig;
use intake_plugin::ExtensionModule;
use tracing::debug;

/// Every extension module compiled into `intake`, in discovery order.
pub fn builtin_modules() -> Vec<ExtensionModule> {
    vec![intake_csv::extension()]
}

/// The builtin modules minus those disabled in configuration.
pub fn search_path(config: &DiscoveryConfig) -> Vec<ExtensionModule> {
    builtin_modules()
        .into_iter()
        .filter(|module| {
            let disabled = config.disabled_modules.iter().any(|d| d == module.name());
            if disabled {
                debug!(module = module.name(), "extension module disabled");
            }
            !disabled
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_module_is_builtin() {
        let names: Vec<_> = builtin_modules().iter().map(|m| m.name().to_string()).collect();
        assert_eq!(names, vec![intake_csv::MODULE_NAME]);
    }

    #[test]
    fn disabled_modules_are_removed() {
        let config = DiscoveryConfig {
            disabled_modules: vec![intake_csv::MODULE_NAME.to_string()],
            ..Default::default()
        };
        assert!(search_path(&config).is_empty());
        assert_eq!(search_path(&DiscoveryConfig::default()).len(), 1);
    }
}
