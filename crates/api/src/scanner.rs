/// Opaque component scanner attached to a module.
///
/// Scanners are carried through the bootstrap unchanged and handed to the
/// container, which uses them to discover additional registrable components.
/// Bootlace never inspects them beyond the diagnostic name.
pub trait Scanner: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn Scanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scanner({})", self.name())
    }
}
