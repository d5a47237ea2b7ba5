use wayfarer_domain::config::NotificationConfig;

/// When the success banner fades and when it leaves the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerSchedule {
    display_ms: u32,
    fade_ms: u32,
}

impl BannerSchedule {
    #[must_use]
    pub const fn new(display_ms: u32, fade_ms: u32) -> Self {
        Self { display_ms, fade_ms }
    }

    /// Delay between showing the banner and starting the fade-out animation.
    #[must_use]
    pub const fn fade_after(&self) -> u32 {
        self.display_ms
    }

    /// Delay between the fade starting and the element being removed.
    #[must_use]
    pub const fn remove_after_fade(&self) -> u32 {
        self.fade_ms
    }
}

impl From<&NotificationConfig> for BannerSchedule {
    fn from(config: &NotificationConfig) -> Self {
        Self::new(config.display_ms, config.fade_ms)
    }
}

impl Default for BannerSchedule {
    fn default() -> Self {
        Self::from(&NotificationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeline() {
        let schedule = BannerSchedule::default();
        assert_eq!(schedule.fade_after(), 3000);
        assert_eq!(schedule.remove_after_fade(), 500);
    }

    #[test]
    fn test_config_overrides_timeline() {
        let config = NotificationConfig { display_ms: 1200, fade_ms: 0, ..Default::default() };
        let schedule = BannerSchedule::from(&config);
        assert_eq!(schedule.fade_after(), 1200);
        assert_eq!(schedule.remove_after_fade(), 0);
    }
}
