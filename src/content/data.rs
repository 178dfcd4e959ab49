//! Built-in content: boot steps, message pools, snippets, and panel text.

use super::types::{BootStep, ContentStore, LogDetail, MessagePool, Panel};

/// Opening lines written before anything streams.
pub fn default_banner() -> Vec<String> {
    vec!["> Booting TranquilOS v1.0...".to_string(), String::new()]
}

/// All boot steps, in their canonical order.
pub fn default_boot_steps() -> Vec<BootStep> {
    [
        ("Injecting kernel: customer_facing_experience.kext", 220),
        ("Injecting kernel: endpoint_support_engine.kext", 200),
        ("Injecting kernel: system_administration_core.kext", 240),
        ("Uploading module: desktop_engine.home_builders", 180),
        ("Uploading module: tech_ops_lead.field_services", 180),
        ("Uploading module: it_lifecycle.regional_health", 200),
        ("Uploading module: it_support_training.bootcamp", 160),
        ("Uploading module: data_analytics_training.academy", 160),
        ("Loading driver: intune_device_provisioning.sys", 140),
        ("Loading driver: azure_ad_identity.sys", 140),
        ("Loading driver: windows_autopilot_boot.sys", 160),
        ("Starting service: freshservice_daemon", 120),
        ("Starting service: servicenow_assetd", 120),
        ("Starting service: ticket_routing.engine", 140),
        ("Mounting volume: imaging_pipeline.pxe", 200),
        ("Mounting volume: asset_tracking.index", 160),
        ("Mounting volume: inventory_management.db", 180),
        ("Enabling security surface: mfa_guardian", 140),
        ("Enabling security surface: access_controls.policy", 140),
        ("Injecting module: user_training_and_support", 160),
        ("Injecting module: cross_team_collaboration", 160),
        ("Injecting module: documentation_and_sops", 160),
        ("Patching subsystem: voip_callstack.so", 120),
        ("Patching subsystem: poe_device_controller.so", 120),
        ("Patching subsystem: basic_networking_dns_dhcp.so", 140),
        ("Loading daemon: asset_handoffd", 100),
        ("Loading daemon: clinical_support_bridge", 120),
        ("Optimizing cache: ticket_history.idx", 100),
        ("Optimizing cache: endpoint_profiles.cache", 100),
    ]
    .into_iter()
    .map(|(label, hint)| BootStep::new(label, hint))
    .collect()
}

/// One-liners mixed into the stream between full lines.
pub fn default_short_snippets() -> Vec<String> {
    [
        "> file.tmp",
        "> file.log",
        "> file.sys",
        "> file.xyz",
        "> Loading...",
        "> Loading…",
        "> Showing...",
        "> Ready.",
        "> OK",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Per-category loader messages.
pub fn default_message_pool() -> MessagePool {
    MessagePool::new()
        .with_category(
            "summary",
            [
                "Loading profile_summary.core",
                "Aggregating experience.timeline",
                "Indexing customer_facing_background.db",
                "Optimizing strengths_matrix.cache",
                "Syncing career_snapshot.view",
                "Verifying profile_integrity.checksum",
            ],
        )
        .with_category(
            "modules",
            [
                "Loading skill_modules.registry",
                "Mounting endpoint_management.stack",
                "Resolving directory_services.mapping",
                "Linking troubleshooting_playbook.pkg",
                "Refreshing security_controls.index",
                "Updating tools_and_platforms.catalog",
            ],
        )
        .with_category(
            "processes",
            [
                "Querying active_processes.table",
                "Syncing current_roles.status",
                "Linking employer_records.chain",
                "Validating uptime_for_roles.monitor",
                "Rebuilding active_stack.snapshot",
                "Confirming process_health.ok",
            ],
        )
        .with_category(
            "history",
            [
                "Loading history_archive.core",
                "Replaying past_deployments.log",
                "Reading contract_timeline.db",
                "Reconstructing previous_environments.view",
                "Syncing legacy_skill_usage.cache",
                "Compressing historical_context.bundle",
            ],
        )
        .with_category(
            "logs",
            [
                "Streaming system_logs.career",
                "Indexing incident_history.events",
                "Linking ticketing_system.records",
                "Validating accomplishments.audit",
                "Refreshing metrics_and_impact.index",
                "Archiving log_rollup.snapshot",
            ],
        )
        .with_category(
            "contact",
            [
                "Resolving contact_routes.dns",
                "Loading communication_channels.cfg",
                "Verifying availability_window.schedule",
                "Mounting social_presence.viewport",
                "Encrypting outbound_contact_packet",
                "Queuing response_pipeline.ready",
            ],
        )
        .with_category(
            "default",
            [
                "Loading generic_module.core",
                "Refreshing generic_cache.index",
                "Syncing generic_state.status",
            ],
        )
}

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|s| s.to_string()).collect()
}

/// Static panels shown on the main surface.
pub fn default_content_store() -> ContentStore {
    ContentStore {
        panels: vec![
            Panel {
                key: "summary".to_string(),
                title: "Summary".to_string(),
                body: lines(&[
                    "IT support and systems administration professional.",
                    "",
                    "Customer-facing troubleshooting, endpoint management,",
                    "and keeping a fleet of devices boring in the best way.",
                ]),
            },
            Panel {
                key: "modules".to_string(),
                title: "Modules".to_string(),
                body: lines(&[
                    "Endpoint management   Intune, Autopilot, imaging (PXE)",
                    "Identity              Azure AD, MFA, access policies",
                    "Service desk          Freshservice, ServiceNow",
                    "Networking            DNS, DHCP, PoE, VoIP",
                ]),
            },
            Panel {
                key: "processes".to_string(),
                title: "Processes".to_string(),
                body: lines(&[
                    "PID 1  desktop_engine       running",
                    "PID 2  tech_ops_lead        running",
                ]),
            },
            Panel {
                key: "history".to_string(),
                title: "History".to_string(),
                body: lines(&[
                    "it_lifecycle           exited (0)",
                    "it_support_training    exited (0)",
                    "data_analytics         exited (0)",
                ]),
            },
            Panel {
                key: "logs".to_string(),
                title: "Logs".to_string(),
                body: lines(&["Select an entry to expand its log."]),
            },
            Panel {
                key: "contact".to_string(),
                title: "Contact".to_string(),
                body: lines(&[
                    "Open to support and systems roles.",
                    "Reach out through the links on the page footer.",
                ]),
            },
        ],
        log_details: vec![
            LogDetail {
                role: "desktop".to_string(),
                title: "Desktop Engineer".to_string(),
                body: lines(&[
                    "Provisioned and imaged endpoints at scale.",
                    "Owned asset handoff from procurement to desk.",
                ]),
            },
            LogDetail {
                role: "techops".to_string(),
                title: "Tech Ops Lead".to_string(),
                body: lines(&[
                    "Led field technicians through rollouts.",
                    "Wrote the SOPs the team still follows.",
                ]),
            },
            LogDetail {
                role: "lifecycle".to_string(),
                title: "IT Lifecycle Technician".to_string(),
                body: lines(&[
                    "Supported clinical staff on hospital floors.",
                    "Tracked inventory across multiple sites.",
                ]),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_panel_has_a_pool() {
        let store = default_content_store();
        let pool = default_message_pool();
        for panel in &store.panels {
            assert!(
                pool.get(&panel.key).is_some_and(|l| !l.is_empty()),
                "panel {} has no loader messages",
                panel.key
            );
        }
    }

    #[test]
    fn test_panel_keys_are_unique() {
        let store = default_content_store();
        let mut keys: Vec<&str> = store.panels.iter().map(|p| p.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), store.panels.len());
    }

    #[test]
    fn test_boot_steps_are_not_empty() {
        let steps = default_boot_steps();
        assert!(!steps.is_empty());
        assert!(steps.iter().all(|s| !s.label.is_empty()));
    }

    #[test]
    fn test_snippets_start_with_prompt() {
        assert!(default_short_snippets().iter().all(|s| s.starts_with('>')));
    }
}
