use crate::color::Rgb;

/// Classic three-segment color wheel
///
/// Walks red -> green -> blue -> red as `pos` goes from 0 to 255.
/// Every segment is a linear crossfade between two primaries, so the
/// sum of the lit channels is always 255.
pub const fn wheel(pos: u8) -> Rgb {
    if pos < 85 {
        Rgb {
            r: pos * 3,
            g: 255 - pos * 3,
            b: 0,
        }
    } else if pos < 170 {
        let pos = pos - 85;
        Rgb {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        }
    } else {
        let pos = pos - 170;
        Rgb {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        }
    }
}
