// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crop dialog. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Initial coverage margin and zoom bounds
//! - **Steps**: Button and wheel zoom increments
//! - **Frame**: Crop frame inset and maximum on-screen size
//! - **Export**: Output upscale factor and JPEG quality

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Multiplier applied to the minimal covering scale when an image loads.
/// Values above 1.0 keep the image edges strictly outside the frame.
pub const DEFAULT_COVERAGE_MARGIN: f32 = 1.1;

/// Smallest coverage margin accepted from the config file.
pub const MIN_COVERAGE_MARGIN: f32 = 1.0;

/// Largest coverage margin accepted from the config file.
pub const MAX_COVERAGE_MARGIN: f32 = 2.0;

/// Default lower zoom bound.
pub const DEFAULT_MIN_SCALE: f32 = 0.3;

/// Default upper zoom bound.
pub const DEFAULT_MAX_SCALE: f32 = 5.0;

/// Absolute floor for any configured zoom bound.
pub const SCALE_FLOOR: f32 = 0.05;

/// Absolute ceiling for any configured zoom bound.
pub const SCALE_CEILING: f32 = 20.0;

// ==========================================================================
// Step Defaults
// ==========================================================================

/// Scale increment for the zoom in/out buttons.
pub const DEFAULT_ZOOM_STEP: f32 = 0.1;

/// Scale increment for one mouse wheel tick.
pub const DEFAULT_WHEEL_STEP: f32 = 0.05;

/// Minimum allowed step.
pub const MIN_STEP: f32 = 0.01;

/// Maximum allowed step.
pub const MAX_STEP: f32 = 1.0;

// ==========================================================================
// Frame Defaults
// ==========================================================================

/// Margin kept free on every side of the crop frame (in pixels).
pub const DEFAULT_FRAME_INSET: f32 = 40.0;

/// Maximum on-screen crop frame width.
pub const DEFAULT_MAX_FRAME_WIDTH: f32 = 800.0;

/// Maximum on-screen crop frame height.
pub const DEFAULT_MAX_FRAME_HEIGHT: f32 = 600.0;

/// Largest inset accepted from the config file.
pub const MAX_FRAME_INSET: f32 = 200.0;

/// Smallest maximum frame side accepted from the config file.
pub const MIN_FRAME_SIDE: f32 = 50.0;

/// Largest maximum frame side accepted from the config file.
pub const MAX_FRAME_SIDE: f32 = 4096.0;

// ==========================================================================
// Export Defaults
// ==========================================================================

/// Output resolution multiplier relative to the on-screen frame.
pub const DEFAULT_EXPORT_UPSCALE: f32 = 2.0;

/// Minimum export upscale.
pub const MIN_EXPORT_UPSCALE: f32 = 1.0;

/// Maximum export upscale.
pub const MAX_EXPORT_UPSCALE: f32 = 4.0;

/// JPEG quality of the committed crop (0.9 in browser canvas terms).
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Minimum JPEG quality.
pub const MIN_JPEG_QUALITY: u8 = 1;

/// Maximum JPEG quality.
pub const MAX_JPEG_QUALITY: u8 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scale validation
    assert!(DEFAULT_COVERAGE_MARGIN > MIN_COVERAGE_MARGIN);
    assert!(DEFAULT_COVERAGE_MARGIN <= MAX_COVERAGE_MARGIN);
    assert!(SCALE_FLOOR > 0.0);
    assert!(DEFAULT_MIN_SCALE >= SCALE_FLOOR);
    assert!(DEFAULT_MAX_SCALE > DEFAULT_MIN_SCALE);
    assert!(DEFAULT_MAX_SCALE <= SCALE_CEILING);

    // Step validation
    assert!(MIN_STEP > 0.0);
    assert!(DEFAULT_WHEEL_STEP >= MIN_STEP);
    assert!(DEFAULT_ZOOM_STEP > DEFAULT_WHEEL_STEP);
    assert!(DEFAULT_ZOOM_STEP <= MAX_STEP);

    // Frame validation
    assert!(DEFAULT_FRAME_INSET >= 0.0);
    assert!(DEFAULT_FRAME_INSET <= MAX_FRAME_INSET);
    assert!(DEFAULT_MAX_FRAME_WIDTH >= MIN_FRAME_SIDE);
    assert!(DEFAULT_MAX_FRAME_HEIGHT >= MIN_FRAME_SIDE);
    assert!(DEFAULT_MAX_FRAME_WIDTH <= MAX_FRAME_SIDE);

    // Export validation
    assert!(DEFAULT_EXPORT_UPSCALE >= MIN_EXPORT_UPSCALE);
    assert!(DEFAULT_EXPORT_UPSCALE <= MAX_EXPORT_UPSCALE);
    assert!(DEFAULT_JPEG_QUALITY >= MIN_JPEG_QUALITY);
    assert!(DEFAULT_JPEG_QUALITY <= MAX_JPEG_QUALITY);
};
