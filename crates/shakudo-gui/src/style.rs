//! Design tokens for the application chrome.
//!
//! All spacing is based on a 4px grid. These constants style the tool
//! itself; the previewed page is driven entirely by the user's token
//! configuration.

// ── Spacing (4px base grid) ──────────────────────────────────────

pub const SPACE_XXS: f32 = 2.0;
pub const SPACE_XS: f32 = 4.0;
pub const SPACE_SM: f32 = 8.0;
pub const SPACE_MD: f32 = 12.0;
pub const SPACE_LG: f32 = 16.0;
pub const SPACE_XL: f32 = 24.0;
#[allow(dead_code)]
pub const SPACE_2XL: f32 = 32.0;

// ── Typography ───────────────────────────────────────────────────

pub const TEXT_XS: f32 = 11.0;
pub const TEXT_SM: f32 = 12.0;
pub const TEXT_BASE: f32 = 15.0;
#[allow(dead_code)]
pub const TEXT_LG: f32 = 16.0;
pub const TEXT_XL: f32 = 22.0;

// Line heights (multipliers for `LineHeight::Relative`)
pub const LINE_HEIGHT_TIGHT: f32 = 1.2;
pub const LINE_HEIGHT_NORMAL: f32 = 1.45;
pub const LINE_HEIGHT_LOOSE: f32 = 1.6;

// ── Layout ───────────────────────────────────────────────────────

pub const NAV_RAIL_WIDTH: f32 = 80.0;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;
pub const CONTROLS_WIDTH: f32 = 340.0;

// ── Navigation rail ──────────────────────────────────────────────

pub const NAV_ICON_SIZE: f32 = 22.0;
pub const NAV_LABEL_SIZE: f32 = 12.0;

// ── Input components ────────────────────────────────────────────

pub const INPUT_FONT_SIZE: f32 = TEXT_SM;
pub const INPUT_PADDING: [f32; 2] = [SPACE_SM, SPACE_MD];
pub const INPUT_VALUE_WIDTH: f32 = 84.0;
pub const TOGGLER_SIZE: f32 = TEXT_BASE;

// ── Reference table ─────────────────────────────────────────────

pub const TABLE_TOKEN_WIDTH: f32 = 220.0;
pub const TABLE_VALUE_WIDTH: f32 = 90.0;

// ── Border radii ─────────────────────────────────────────────────

#[allow(dead_code)]
pub const RADIUS_SM: f32 = 4.0;
pub const RADIUS_MD: f32 = 8.0;
pub const RADIUS_LG: f32 = 12.0;
pub const RADIUS_XL: f32 = 16.0;
