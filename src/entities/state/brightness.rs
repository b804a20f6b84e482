use crate::brightness::HALF_BRIGHTNESS;

/// Last non-zero platform brightness seen or commanded for a light, used to
/// restore the dimming level on a bare turn on.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct BrightnessMemory {
    previous: Option<f64>,
}

impl BrightnessMemory {
    pub(crate) fn previous(&self) -> Option<f64> {
        self.previous
    }

    pub(crate) fn observe(&mut self, level: u8) {
        if level != 0 {
            self.previous = Some(f64::from(level));
        }
    }

    /// Seeds the memory from the device, unless something was recorded already.
    pub(crate) fn prime(&mut self, level: u8) {
        if self.previous.is_none() {
            self.observe(level);
        }
    }

    /// Picks the level for a turn on: the requested one, else the remembered
    /// one, else half brightness. The choice is remembered.
    pub(crate) fn resolve(&mut self, requested: Option<u8>) -> f64 {
        let level = match (requested, self.previous) {
            (Some(requested), _) => f64::from(requested),
            (None, Some(previous)) if previous > 0.0 => previous,
            (None, _) => HALF_BRIGHTNESS,
        };
        if level > 0.0 {
            self.previous = Some(level);
        }
        level
    }
}
