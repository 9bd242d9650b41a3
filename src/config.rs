// Bright-Point Parameters
pub const BRIGHT_THRESHOLD: f64 = 0.95;
pub const HIGHLIGHT_COLOR: [u8; 3] = [255, 0, 0];

// LED On/Off Parameters
pub const ON_OFF_RATIO: usize = 2;
pub const DEFAULT_LED_PAIRS: &[(&str, &str)] = &[
    ("img_1_on.jpg", "img_1_off.jpg"),
    ("img_2_on.jpg", "img_2_off.jpg"),
    ("img_3_on.jpg", "img_3_off.jpg"),
];

// Waveform Comparison Parameters
pub const LENGTH_ERROR_MARGIN: usize = 2;
pub const VALUE_ERROR_MARGIN: i64 = 10;
pub const REFERENCE_WAV: &str = "test_py.wav";
pub const PORT_WAV: &str = "test_c.wav";
