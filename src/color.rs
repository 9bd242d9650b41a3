use clap::ValueEnum;

#[derive(Clone, Copy)]
struct Normalized {
    r: f64,
    g: f64,
    b: f64,
    cmax: f64,
    cmin: f64,
    delta: f64,
}

impl Normalized {
    fn new(r: u8, g: u8, b: u8) -> Self {
        let r = r as f64 / 255.0;
        let g = g as f64 / 255.0;
        let b = b as f64 / 255.0;

        let cmax = r.max(g).max(b);
        let cmin = r.min(g).min(b);

        Normalized {
            r,
            g,
            b,
            cmax,
            cmin,
            delta: cmax - cmin,
        }
    }

    fn hue(&self) -> f64 {
        let Normalized { r, g, b, cmax, delta, .. } = *self;

        if delta == 0.0 {
            0.0
        } else if cmax == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if cmax == g {
            60.0 * ((b - r) / delta + 2.0)
        } else if cmax == b {
            60.0 * ((r - g) / delta + 4.0)
        } else {
            // cmax came from one of the channels, so this only triggers on NaN-like ties
            0.0
        }
    }

    fn lightness(&self) -> f64 {
        (self.cmax + self.cmin) / 2.0
    }
}

/// Convert an RGB pixel to `(hue, saturation, value)`.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let n = Normalized::new(r, g, b);

    let s = if n.cmax == 0.0 { 0.0 } else { n.delta / n.cmax };

    (n.hue(), s, n.cmax)
}

/// Convert an RGB pixel to `(hue, saturation, lightness)`.
///
/// Saturation is the HSL form `delta / (1 - |2l - 1|)`, not the HSV-style
/// `delta / cmax`, so that `hsl_to_rgb` inverts it. Hue and lightness are
/// unaffected.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let n = Normalized::new(r, g, b);
    let l = n.lightness();

    // delta > 0 implies 0 < l < 1, so the denominator is never zero here
    let s = if n.delta == 0.0 {
        0.0
    } else {
        (n.delta / (1.0 - (2.0 * l - 1.0).abs())).min(1.0)
    };

    (n.hue(), s, l)
}

/// Rec. 709 luma `0.2126 r + 0.7152 g + 0.0722 b`, truncated.
///
/// Evaluated in fixed point: the float sum for white lands just below 255.
pub fn rgb_to_grayscale(r: u8, g: u8, b: u8) -> u8 {
    let luma = 2126 * r as u32 + 7152 * g as u32 + 722 * b as u32;
    (luma / 10_000) as u8
}

/// Convert `(hue, saturation, lightness)` back to RGB.
///
/// Hue outside `[0, 360)` is wrapped; saturation and lightness are clamped
/// to `[0, 1]`. Channels are truncated, not rounded.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}

/// Which component of a pixel is compared against the bright-point threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Brightness {
    /// HSL lightness.
    #[default]
    Lightness,
    /// HSV value.
    Value,
    /// Grayscale luma scaled to `[0, 1]`.
    Luma,
}

impl Brightness {
    pub fn measure(self, r: u8, g: u8, b: u8) -> f64 {
        match self {
            Brightness::Lightness => rgb_to_hsl(r, g, b).2,
            Brightness::Value => rgb_to_hsv(r, g, b).2,
            Brightness::Luma => rgb_to_grayscale(r, g, b) as f64 / 255.0,
        }
    }
}
