// ============================================================================
// spark-observable - Constants
// Option flag bits and well-known container property names
// ============================================================================

// =============================================================================
// OPTION FLAGS
// =============================================================================

/// Default behavior: suppression allowed, hooks settable, auto-relay on
/// when the element type supports it.
pub const DEFAULT: u32 = 0;

/// Notification suppression may not be switched on
pub const DISALLOW_NOTIFICATION_SUPPRESSION: u32 = 1 << 0;

/// Do not subscribe to property-change signals of items
pub const DISABLE_AUTO_PROPERTY_CHANGED_SUBSCRIPTION: u32 = 1 << 1;

/// Change hooks may not be assigned after construction
pub const DISALLOW_CHANGE_RESPONDERS: u32 = 1 << 2;

/// Every bit that names a known option
pub const ALL_OPTIONS: u32 = DISALLOW_NOTIFICATION_SUPPRESSION
    | DISABLE_AUTO_PROPERTY_CHANGED_SUBSCRIPTION
    | DISALLOW_CHANGE_RESPONDERS;

// =============================================================================
// CONTAINER PROPERTY NAMES
// =============================================================================

/// Property name raised when the element count changes
pub const COUNT_PROPERTY: &str = "Count";

/// Property name raised when addressed contents change
pub const INDEXER_PROPERTY: &str = "Item[]";

// =============================================================================
// TESTS
// =============================================================================
