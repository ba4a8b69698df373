//! Style-host seam for DOM reflection.

/// Optional capability for reflecting the active design system into a live
/// document.
///
/// Implementations wrap whatever the embedding environment offers for style
/// injection (a browser `document`, a webview bridge, a test double). The
/// core never requires a host; when none is installed the reflection step is
/// skipped without error.
pub trait StyleHost: Send + Sync {
    /// Inject `css` as this compiler's style element.
    fn inject_style(&mut self, css: &str);

    /// Remove the previously injected style element.
    ///
    /// Must be idempotent: a no-op when nothing was injected. Callers always
    /// invoke this before [`inject_style`](StyleHost::inject_style) so two
    /// conflicting variable blocks are never active at once.
    fn remove_style(&mut self);
}
