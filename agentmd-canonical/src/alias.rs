/// Looks up human-readable aliases for system paths, per language.
///
/// Implemented by the host over its path-alias storage; the layer only ever
/// asks one question per response.
pub trait AliasRepository: Send + Sync {
    /// The alias for `system_path` in `langcode`, if one exists.
    fn alias(&self, system_path: &str, langcode: &str) -> Option<String>;
}
