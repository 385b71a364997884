// ============================================================================
// spark-observable - Options
// Construction-time behavior flags for an observable collection
// ============================================================================

use super::constants::*;
use super::error::{Error, Result};

// =============================================================================
// OBSERVABLE OPTIONS
// =============================================================================

/// Behavior flags fixed when a collection is created.
///
/// All flags are off by default.
///
/// # Example
///
/// ```
/// use spark_observable::ObservableOptions;
///
/// let options = ObservableOptions::new().disallow_notification_suppression(true);
/// assert!(options.disallows_notification_suppression());
/// assert!(!options.disallows_change_responders());
///
/// let same = ObservableOptions::from_bits(options.bits()).unwrap();
/// assert_eq!(same, options);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ObservableOptions {
    disallow_notification_suppression: bool,
    disable_auto_property_changed_subscription: bool,
    disallow_change_responders: bool,
}

impl ObservableOptions {
    /// Default options (everything permitted).
    pub const fn new() -> Self {
        Self {
            disallow_notification_suppression: false,
            disable_auto_property_changed_subscription: false,
            disallow_change_responders: false,
        }
    }

    /// Build options from flag bits (see [`crate::constants`]).
    ///
    /// Unknown bits are rejected.
    pub fn from_bits(bits: u32) -> Result<Self> {
        let unknown = bits & !ALL_OPTIONS;
        if unknown != 0 {
            return Err(Error::invalid_argument(format!(
                "unknown option bits {unknown:#x}"
            )));
        }

        Ok(Self {
            disallow_notification_suppression: bits & DISALLOW_NOTIFICATION_SUPPRESSION != 0,
            disable_auto_property_changed_subscription: bits
                & DISABLE_AUTO_PROPERTY_CHANGED_SUBSCRIPTION
                != 0,
            disallow_change_responders: bits & DISALLOW_CHANGE_RESPONDERS != 0,
        })
    }

    /// Flag bits for these options.
    pub fn bits(&self) -> u32 {
        let mut bits = DEFAULT;
        if self.disallow_notification_suppression {
            bits |= DISALLOW_NOTIFICATION_SUPPRESSION;
        }
        if self.disable_auto_property_changed_subscription {
            bits |= DISABLE_AUTO_PROPERTY_CHANGED_SUBSCRIPTION;
        }
        if self.disallow_change_responders {
            bits |= DISALLOW_CHANGE_RESPONDERS;
        }
        bits
    }

    /// Forbid switching notification suppression on.
    pub const fn disallow_notification_suppression(mut self, value: bool) -> Self {
        self.disallow_notification_suppression = value;
        self
    }

    /// Turn off the automatic item property-change relay.
    pub const fn disable_auto_property_changed_subscription(mut self, value: bool) -> Self {
        self.disable_auto_property_changed_subscription = value;
        self
    }

    /// Forbid assigning change hooks after construction.
    pub const fn disallow_change_responders(mut self, value: bool) -> Self {
        self.disallow_change_responders = value;
        self
    }

    pub fn disallows_notification_suppression(&self) -> bool {
        self.disallow_notification_suppression
    }

    pub fn disables_auto_property_changed_subscription(&self) -> bool {
        self.disable_auto_property_changed_subscription
    }

    pub fn disallows_change_responders(&self) -> bool {
        self.disallow_change_responders
    }
}

// =============================================================================
// TESTS
// =============================================================================
