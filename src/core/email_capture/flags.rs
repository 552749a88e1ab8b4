//! Persisted capture flags.
//!
//! Three independent keys live in the browser's key-value storage. Each is
//! only ever written as `"true"` and never cleared by this crate. Any set
//! flag makes the capture modal permanently inert on that browser profile.

/// Value written for a set flag. Anything else reads as unset.
pub const FLAG_SET_VALUE: &str = "true";

/// One of the three persisted flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureFlag {
    /// The modal has been revealed at least once.
    Seen,
    /// The visitor closed the modal.
    Dismissed,
    /// A subscription went through.
    Subscribed,
}

impl CaptureFlag {
    pub const ALL: [CaptureFlag; 3] = [
        CaptureFlag::Seen,
        CaptureFlag::Dismissed,
        CaptureFlag::Subscribed,
    ];

    /// Storage key, kept stable for previously stored data.
    pub fn storage_key(&self) -> &'static str {
        match self {
            CaptureFlag::Seen => "email_capture_seen",
            CaptureFlag::Dismissed => "email_capture_dismissed",
            CaptureFlag::Subscribed => "email_subscribed",
        }
    }
}

/// Whether the controller may arm its triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureGate {
    Active,
    Inert,
}

/// Snapshot of the three flags taken at mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureFlags {
    pub seen: bool,
    pub dismissed: bool,
    pub subscribed: bool,
}

impl CaptureFlags {
    /// Read every flag through `lookup`, which returns the raw stored value.
    pub fn load<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_set = |flag: CaptureFlag| is_flag_value(lookup(flag.storage_key()).as_deref());
        Self {
            seen: is_set(CaptureFlag::Seen),
            dismissed: is_set(CaptureFlag::Dismissed),
            subscribed: is_set(CaptureFlag::Subscribed),
        }
    }

    pub fn get(&self, flag: CaptureFlag) -> bool {
        match flag {
            CaptureFlag::Seen => self.seen,
            CaptureFlag::Dismissed => self.dismissed,
            CaptureFlag::Subscribed => self.subscribed,
        }
    }

    pub fn set(&mut self, flag: CaptureFlag) {
        match flag {
            CaptureFlag::Seen => self.seen = true,
            CaptureFlag::Dismissed => self.dismissed = true,
            CaptureFlag::Subscribed => self.subscribed = true,
        }
    }

    pub fn gate(&self) -> CaptureGate {
        if self.seen || self.dismissed || self.subscribed {
            CaptureGate::Inert
        } else {
            CaptureGate::Active
        }
    }
}

/// Only the literal `"true"` counts as set.
pub fn is_flag_value(value: Option<&str>) -> bool {
    value == Some(FLAG_SET_VALUE)
}
