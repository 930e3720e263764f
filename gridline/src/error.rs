use thiserror::Error;

/// Contract violations in a table configuration.
///
/// The engine itself never aborts on these: it logs a diagnostic and keeps
/// going with defensive defaults. `TableConfig::validate` surfaces them to
/// callers that want to fail fast instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Two columns share one key. The width map is keyed by column key, so a
    /// collision would let one column's measurement silently overwrite
    /// another's.
    #[error("duplicate column key {0:?}")]
    DuplicateKey(String),
}
