//! Apply one color preset to every saved profile.

use crate::traits::TerminalHost;
use log::{debug, info};

/// Possible errors from [`apply_color_preset`].
#[derive(Debug, thiserror::Error)]
pub enum ThemeError<E: std::error::Error + 'static> {
    /// The host returned an error, including "no such preset".
    #[error("host error: {0}")]
    Host(#[from] E),
}

/// Resolve `preset_name` and set it on every profile.
///
/// Stops at the first failure; profiles already updated stay updated.
/// Returns the number of profiles changed.
pub fn apply_color_preset<H: TerminalHost>(
    host: &H,
    preset_name: &str,
) -> Result<usize, ThemeError<H::Error>> {
    let preset = host.color_preset(preset_name)?;
    let profiles = host.partial_profiles()?;
    debug!("applying {:?} to {} profile(s)", preset.name, profiles.len());

    for partial in &profiles {
        let profile = host.full_profile(partial)?;
        host.set_color_preset(&profile, &preset)?;
        info!("{}: color preset set to {}", profile.name, preset.name);
    }
    Ok(profiles.len())
}
