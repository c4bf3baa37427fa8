//! Bundled `example_config.ini` template.
//!
//! Rebuilds copy the template file found next to the handler; this text is
//! what gets installed there when no template exists yet.

// =============================================================================
// PUBLIC API
// =============================================================================

/// The canonical template content.
pub fn default_template() -> &'static str {
    r#"# inikeep configuration template
# Copied over config.ini on rebuild. Edit config.ini, not this file.

[MQTT]
host = localhost
port = 1883
keepalive = 60
client_id = inikeep
topic = channels/1234

[CORE]
interval = 5
timeout = 30

[LOG]
level = INFO
file = inikeep.log
max_file_size_mb = 5
backup_count = 3

[channel]
id = 1234
type = channel
name = Канал
level = 0

[database]
driver = sqlite
"#
}

// =============================================================================
// TESTS
// =============================================================================
