// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **General**: App identity and theme
//! - **Network**: Backend address and retry behaviour
//! - **Media**: Encoding quality and export file names
//! - **Editor**: Display frame and rotation step
//! - **Feed**: Carousel timings

// ==========================================================================
// General Defaults
// ==========================================================================

/// Display name of the application.
pub const DEFAULT_APP_NAME: &str = "Snapdeck";

/// Version string reported in settings.
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

/// Accent color as a `#RRGGBB` hex string.
pub const DEFAULT_THEME_COLOR_HEX: &str = "#007AFF";

/// Feature flags enabled out of the box, as `(key, enabled)` pairs.
pub const DEFAULT_FEATURES: [(&str, bool); 3] = [
    ("Comments", true),
    ("E-Commerce", false),
    ("User Profiles", true),
];

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Base URL of the backend API.
pub const DEFAULT_BACKEND_URL: &str = "https://lightek.diy";

/// Total attempts for a JSON fetch (first try included).
pub const DEFAULT_FETCH_ATTEMPTS: u32 = 3;

/// Fixed delay after a failed fetch attempt (in milliseconds).
pub const DEFAULT_RETRY_DELAY_MS: u64 = 500;

/// Secret-store key under which the auth token is kept.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

// ==========================================================================
// Media Defaults
// ==========================================================================

/// JPEG quality used for post uploads (0-100).
pub const JPEG_QUALITY: u8 = 80;

/// File name of the trim output inside the temp directory.
pub const TRIM_OUTPUT_FILE: &str = "trimmed.mov";

/// File name of the merge output inside the temp directory.
pub const MERGE_OUTPUT_FILE: &str = "merged.mov";

// ==========================================================================
// Editor Defaults
// ==========================================================================

/// Height of the on-screen image frame, in points.
pub const EDITOR_DISPLAY_HEIGHT: f32 = 400.0;

/// Rotation applied by a single rotate-left/right action, in degrees.
pub const ROTATION_STEP_DEGREES: f32 = 90.0;

// ==========================================================================
// Feed Defaults
// ==========================================================================

/// Interval between automatic carousel advances (in seconds).
pub const CAROUSEL_ADVANCE_SECS: u64 = 3;

/// Pause after a drag ends before auto-advance resumes (in seconds).
pub const CAROUSEL_RESUME_SECS: u64 = 2;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_FETCH_ATTEMPTS > 0);
    assert!(JPEG_QUALITY > 0 && JPEG_QUALITY <= 100);
    assert!(EDITOR_DISPLAY_HEIGHT > 0.0);
    assert!(CAROUSEL_ADVANCE_SECS > 0);
};
