//! Localization port

/// Keys this crate looks up
pub mod keys {
    pub const HOLD_ALT: &str = "PDE.TOOLTIP.HOLD_ALT";
    pub const GO_BACK: &str = "PDE.TOOLTIP.GO_BACK";
    pub const DISABLED: &str = "PDE.TOOLTIP.DISABLED";
    pub const TEMPORARY: &str = "PDE.TOOLTIP.TEMPORARY";
    pub const PASSIVE: &str = "PDE.TOOLTIP.PASSIVE";
    pub const YES: &str = "PDE.YES";
    pub const NO: &str = "PDE.NO";
    pub const CONFIRM: &str = "PDE.CONFIRM";
    pub const DIALOG_TITLE: &str = "PDE.DIALOG.TITLE";
    pub const TOKEN_SELECTOR_TITLE: &str = "PDE.TOKEN_SELECTOR.TITLE";
    pub const TEXT_EDITOR_TITLE: &str = "PDE.TEXT_EDITOR.TITLE";
    pub const TO_HIT: &str = "PDE.DETAILS.TO_HIT";
    pub const SAVE: &str = "PDE.DETAILS.SAVE";
    pub const RANGE: &str = "PDE.DETAILS.RANGE";
    pub const DURATION: &str = "PDE.DETAILS.DURATION";
    pub const TARGET: &str = "PDE.DETAILS.TARGET";
}

/// Host translation table. Unknown keys come back unchanged.
#[cfg_attr(test, mockall::automock)]
pub trait Localizer: Send + Sync {
    fn localize(&self, key: &str) -> String;
}
