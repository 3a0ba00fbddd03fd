/// DOM contract and rendering constants for the page glue.
// Canvas the backdrop draws into; missing it is fatal for the animator.
pub const CANVAS_ID: &str = "bg-canvas";

// Upload-card DOM contract
pub const CARD_SELECTOR: &str = ".card";
pub const UPLOAD_INPUT_SELECTOR: &str = ".card input[type=file]";
pub const CARD_DRAG_TRANSFORM: &str = "scale(1.01)";

// Toast banner
pub const TOAST_SELECTOR: &str = ".toast";
pub const TOAST_HIDE_DELAY_MS: i32 = 4000;

// Glow around every dot, centered on the accent hue
pub const GLOW_BLUR_PX: f64 = 8.0;
pub const GLOW_COLOR: &str = "#0ff";
pub const ACCENT_RGB: [u8; 3] = [0, 255, 255];
