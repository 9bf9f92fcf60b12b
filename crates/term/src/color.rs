//! Color downgrading for terminals that cannot show 24-bit color.

use crossterm::style::Color;

use crate::canvas::Rgb;
use crate::types::ColorProfile;

/// xterm's default 16-color palette, paired with crossterm's names.
const ANSI16: [(Rgb, Color); 16] = [
    (Rgb::new(0, 0, 0), Color::Black),
    (Rgb::new(128, 0, 0), Color::DarkRed),
    (Rgb::new(0, 128, 0), Color::DarkGreen),
    (Rgb::new(128, 128, 0), Color::DarkYellow),
    (Rgb::new(0, 0, 128), Color::DarkBlue),
    (Rgb::new(128, 0, 128), Color::DarkMagenta),
    (Rgb::new(0, 128, 128), Color::DarkCyan),
    (Rgb::new(192, 192, 192), Color::Grey),
    (Rgb::new(128, 128, 128), Color::DarkGrey),
    (Rgb::new(255, 0, 0), Color::Red),
    (Rgb::new(0, 255, 0), Color::Green),
    (Rgb::new(255, 255, 0), Color::Yellow),
    (Rgb::new(0, 0, 255), Color::Blue),
    (Rgb::new(255, 0, 255), Color::Magenta),
    (Rgb::new(0, 255, 255), Color::Cyan),
    (Rgb::new(255, 255, 255), Color::White),
];

/// Map an RGB color to what `profile` can display. `None` means "leave unset".
pub fn to_color(rgb: Rgb, profile: ColorProfile) -> Option<Color> {
    match profile {
        ColorProfile::NoColor => None,
        ColorProfile::Ansi16 => Some(nearest_ansi16(rgb)),
        ColorProfile::Ansi256 => Some(Color::AnsiValue(rgb_to_ansi256(rgb))),
        ColorProfile::TrueColor => Some(Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }),
    }
}

/// Index into the xterm 256-color palette (6x6x6 cube plus grayscale ramp).
pub fn rgb_to_ansi256(rgb: Rgb) -> u8 {
    if rgb.r == rgb.g && rgb.g == rgb.b {
        return match rgb.r {
            0..=7 => 16,
            249..=255 => 231,
            v => 232 + (((u16::from(v) - 8) * 24) / 247) as u8,
        };
    }
    let level = |c: u8| ((u16::from(c) * 5 + 127) / 255) as u8;
    16 + 36 * level(rgb.r) + 6 * level(rgb.g) + level(rgb.b)
}

/// Closest basic ANSI color by squared RGB distance.
pub fn nearest_ansi16(rgb: Rgb) -> Color {
    let dist = |p: Rgb| {
        let d = |a: u8, b: u8| {
            let v = i32::from(a) - i32::from(b);
            v * v
        };
        d(rgb.r, p.r) + d(rgb.g, p.g) + d(rgb.b, p.b)
    };
    ANSI16
        .iter()
        .min_by_key(|(p, _)| dist(*p))
        .map(|(_, c)| *c)
        .unwrap_or(Color::White)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_leaves_colors_unset() {
        assert_eq!(to_color(Rgb::new(1, 2, 3), ColorProfile::NoColor), None);
    }

    #[test]
    fn test_truecolor_is_passthrough() {
        assert_eq!(
            to_color(Rgb::new(1, 2, 3), ColorProfile::TrueColor),
            Some(Color::Rgb { r: 1, g: 2, b: 3 })
        );
    }

    #[test]
    fn test_ansi256_cube_and_grays() {
        assert_eq!(rgb_to_ansi256(Rgb::new(255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256(Rgb::new(0, 255, 0)), 46);
        assert_eq!(rgb_to_ansi256(Rgb::BLACK), 16);
        assert_eq!(rgb_to_ansi256(Rgb::WHITE), 231);
        let gray = rgb_to_ansi256(Rgb::new(128, 128, 128));
        assert!((232..=255).contains(&gray));
    }

    #[test]
    fn test_ansi16_nearest() {
        assert_eq!(nearest_ansi16(Rgb::new(0, 250, 10)), Color::Green);
        assert_eq!(nearest_ansi16(Rgb::new(20, 20, 20)), Color::Black);
        assert_eq!(nearest_ansi16(Rgb::new(250, 180, 0)), Color::Yellow);
    }
}
