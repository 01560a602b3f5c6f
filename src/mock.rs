//! In-memory [`TerminalHost`] used by the unit tests.
//!
//! Simulates a single display and clamps frames the way the host does: the
//! top edge never rises above the screen, and at least `visible_margin`
//! units of the window stay on screen horizontally.

use crate::model::{ColorPreset, Frame, GridSize, PartialProfile, Profile, Tab, TerminalWindow};
use crate::traits::TerminalHost;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
#[error("mock error: {0}")]
pub struct MockError(pub String);

/// A test double that records every mutating call made to it.
#[derive(Debug)]
pub struct MockHost {
    pub screen_width: i32,
    pub screen_height: i32,
    pub visible_margin: i32,
    pub presets: Vec<String>,
    pub profiles: Vec<PartialProfile>,
    pub windows: Vec<TerminalWindow>,
    /// Frame each window gets after `update_layout`, keyed by window id.
    pub laid_out: HashMap<String, Frame>,
    pub frames: RefCell<HashMap<String, Frame>>,
    pub frame_log: RefCell<Vec<(String, Frame)>>,
    pub preset_log: RefCell<Vec<(String, String)>>,
    pub size_log: RefCell<Vec<(String, GridSize)>>,
    pub layout_log: RefCell<Vec<String>>,
    /// Fail `full_profile` for this guid.
    pub broken_profile: Option<String>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self {
            screen_width: 1920,
            screen_height: 1080,
            visible_margin: 40,
            presets: vec!["Solarized Dark".into(), "Tango Light".into()],
            profiles: Vec::new(),
            windows: Vec::new(),
            laid_out: HashMap::new(),
            frames: RefCell::new(HashMap::new()),
            frame_log: RefCell::new(Vec::new()),
            preset_log: RefCell::new(Vec::new()),
            size_log: RefCell::new(Vec::new()),
            layout_log: RefCell::new(Vec::new()),
            broken_profile: None,
        }
    }
}

impl MockHost {
    /// Add a window with one session whose 80x24 layout yields `width`x`height`.
    pub fn with_window(mut self, number: usize, width: i32, height: i32) -> Self {
        let id = format!("w{}", number);
        let window = TerminalWindow {
            id: id.clone(),
            number,
            current_tab: Tab {
                id: format!("t{}", number),
                sessions: vec![format!("s{}", number)],
            },
        };
        self.windows.push(window);
        self.laid_out
            .insert(id.clone(), Frame::new(100, 100, width, height));
        self.frames
            .borrow_mut()
            .insert(id, Frame::new(100 + number as i32 * 10, 100, width + 50, height + 50));
        self
    }

    pub fn with_profile(mut self, guid: &str, name: &str) -> Self {
        self.profiles.push(PartialProfile {
            guid: guid.into(),
            name: name.into(),
        });
        self
    }

    pub fn window(&self, number: usize) -> &TerminalWindow {
        self.windows
            .iter()
            .find(|w| w.number == number)
            .expect("no such window")
    }

    pub fn frame_of(&self, number: usize) -> Frame {
        self.frames.borrow()[&format!("w{}", number)]
    }

    fn clamp(&self, frame: Frame) -> Frame {
        let mut f = frame;
        let min_x = self.visible_margin - f.size.width;
        let max_x = self.screen_width - self.visible_margin;
        f.origin.x = f.origin.x.clamp(min_x, max_x);
        f.origin.y = f.origin.y.min(self.screen_height - f.size.height);
        f
    }
}

impl TerminalHost for MockHost {
    type Error = MockError;

    fn color_preset(&self, name: &str) -> Result<ColorPreset, MockError> {
        if self.presets.iter().any(|p| p == name) {
            Ok(ColorPreset { name: name.into() })
        } else {
            Err(MockError(format!("no such color preset: {}", name)))
        }
    }

    fn partial_profiles(&self) -> Result<Vec<PartialProfile>, MockError> {
        Ok(self.profiles.clone())
    }

    fn full_profile(&self, partial: &PartialProfile) -> Result<Profile, MockError> {
        if self.broken_profile.as_deref() == Some(partial.guid.as_str()) {
            return Err(MockError(format!("cannot fetch {}", partial.guid)));
        }
        Ok(Profile {
            guid: partial.guid.clone(),
            name: partial.name.clone(),
        })
    }

    fn set_color_preset(&self, profile: &Profile, preset: &ColorPreset) -> Result<(), MockError> {
        self.preset_log
            .borrow_mut()
            .push((profile.guid.clone(), preset.name.clone()));
        Ok(())
    }

    fn terminal_windows(&self) -> Result<Vec<TerminalWindow>, MockError> {
        Ok(self.windows.clone())
    }

    fn window_frame(&self, window: &TerminalWindow) -> Result<Frame, MockError> {
        self.frames
            .borrow()
            .get(&window.id)
            .copied()
            .ok_or_else(|| MockError(format!("no such window: {}", window.id)))
    }

    fn set_window_frame(&self, window: &TerminalWindow, frame: Frame) -> Result<(), MockError> {
        let applied = self.clamp(frame);
        self.frames.borrow_mut().insert(window.id.clone(), applied);
        self.frame_log.borrow_mut().push((window.id.clone(), frame));
        Ok(())
    }

    fn set_preferred_size(&self, session: &str, grid: GridSize) -> Result<(), MockError> {
        self.size_log.borrow_mut().push((session.to_string(), grid));
        Ok(())
    }

    fn update_layout(&self, tab: &str) -> Result<(), MockError> {
        self.layout_log.borrow_mut().push(tab.to_string());
        let window = self
            .windows
            .iter()
            .find(|w| w.current_tab.id == tab)
            .ok_or_else(|| MockError(format!("no such tab: {}", tab)))?;
        let target = self.laid_out[&window.id];
        let mut frames = self.frames.borrow_mut();
        if let Some(f) = frames.get_mut(&window.id) {
            f.size = target.size;
        }
        Ok(())
    }
}
