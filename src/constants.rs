//! Shared constants: marker geometry, lifetime, random pools, and the stylesheet.

pub const BG_BASE: &str = "#0a0a0b";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_DIM: &str = "#52525b";

/// Markers are 50px circles; offsets center them on the cursor.
pub const MARKER_SIZE_PX: f64 = 50.0;
pub const MARKER_HALF_SIZE_PX: f64 = MARKER_SIZE_PX / 2.0;
pub const MARKER_LIFETIME_MS: u64 = 2500;

/// Symbols drawn for marker colors. Kept as shipped: 7, 8 and 9 are absent.
pub const COLOR_ALPHABET: &[u8] = b"0123456ABCDEF";
pub const COLOR_DIGITS: usize = 6;

pub const GREETINGS: [&str; 5] = ["Hi", "Hello", "Welcome", "Namaste", "Radhe Radhe"];

pub const MARKER_STYLESHEET: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
html, body { margin: 0; padding: 0; overflow: hidden; }
body { -webkit-font-smoothing: antialiased; }
.circle {
    position: fixed;
    width: 50px;
    height: 50px;
    border-radius: 50%;
    pointer-events: none;
    font-size: 9px;
    font-weight: 600;
    color: #fafafa;
    text-shadow: 0 1px 2px rgba(0,0,0,0.6);
    white-space: nowrap;
    animation: bloom 2.5s ease-out forwards;
}
.flex {
    display: flex;
    align-items: center;
    justify-content: center;
}
@keyframes bloom {
    0% { transform: scale(0.2); opacity: 1; }
    70% { transform: scale(1.4); opacity: 0.9; }
    100% { transform: scale(1.8); opacity: 0; }
}
"#;
