//! Core traits that decouple termstack from any specific terminal host or
//! screen-geometry strategy.
//!
//! The [`arranger`](crate::arranger) and [`theme`](crate::theme) modules only
//! depend on these abstractions; concrete backends live in
//! [`host`](crate::host) and [`probe`](crate::probe).

use crate::model::{ColorPreset, Frame, GridSize, PartialProfile, Profile, TerminalWindow};
use crate::probe::{ProbeError, ScreenBounds};

/// Abstraction over the scripting interface of a running terminal
/// application.
///
/// An implementation might talk to the host over its control socket, or it
/// might be an in-memory double used in tests.  Every method is a single
/// request/response round trip; callers issue them strictly in sequence.
pub trait TerminalHost {
    /// The error type produced by this host.
    type Error: std::error::Error + Send + 'static;

    /// Look up a color preset by name.
    ///
    /// Fails with the host's own error if no preset has that name.
    fn color_preset(&self, name: &str) -> Result<ColorPreset, Self::Error>;

    /// List every saved profile in its partial form.
    fn partial_profiles(&self) -> Result<Vec<PartialProfile>, Self::Error>;

    /// Fetch the complete profile behind a partial one.
    fn full_profile(&self, partial: &PartialProfile) -> Result<Profile, Self::Error>;

    /// Persistently set the color preset of `profile`.
    fn set_color_preset(&self, profile: &Profile, preset: &ColorPreset) -> Result<(), Self::Error>;

    /// Return all open terminal windows, in host order.
    fn terminal_windows(&self) -> Result<Vec<TerminalWindow>, Self::Error>;

    /// Read the current frame of `window`.
    fn window_frame(&self, window: &TerminalWindow) -> Result<Frame, Self::Error>;

    /// Ask the host to move/resize `window` to `frame`.
    ///
    /// The host may clamp the frame; read it back with
    /// [`window_frame`](TerminalHost::window_frame) to see what was applied.
    fn set_window_frame(&self, window: &TerminalWindow, frame: Frame) -> Result<(), Self::Error>;

    /// Set the preferred character grid of a session.
    ///
    /// Takes effect on the next [`update_layout`](TerminalHost::update_layout)
    /// of the session's tab.
    fn set_preferred_size(&self, session: &str, grid: GridSize) -> Result<(), Self::Error>;

    /// Recompute the window frame of a tab from its sessions' preferred sizes.
    fn update_layout(&self, tab: &str) -> Result<(), Self::Error>;
}

/// Strategy for discovering the usable screen area.
///
/// The default, [`ClampProbe`](crate::probe::ClampProbe), infers the bounds
/// from how the host clamps an off-screen window and only works with a single
/// display.  A strategy that asks the display server directly can be swapped
/// in without touching the stacking code.
pub trait DisplayBoundsProbe {
    /// Determine the screen bounds.  `window` may be moved as a side effect;
    /// the caller repositions it afterwards.
    fn screen_bounds<H: TerminalHost>(
        &self,
        host: &H,
        window: &TerminalWindow,
    ) -> Result<ScreenBounds, ProbeError<H::Error>>;
}
