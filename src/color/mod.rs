mod wheel;

use smart_leds::RGB8;

pub use wheel::wheel;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Divide every channel by `divisor`, rounding down
///
/// `divisor` of 0 yields black.
pub const fn dim(color: Rgb, divisor: u8) -> Rgb {
    if divisor == 0 {
        return BLACK;
    }
    Rgb {
        r: color.r / divisor,
        g: color.g / divisor,
        b: color.b / divisor,
    }
}
