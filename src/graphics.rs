#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color {
            r,
            g,
            b,
            a,
        }
    }

    // Channels in 0 - 255 map onto 0 - 1
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color {
            r: r as f32 / 255.,
            g: g as f32 / 255.,
            b: b as f32 / 255.,
            a: a as f32 / 255.,
        }
    }

    #[inline]
    pub fn red() -> Color {
        Color::new(1., 0., 0., 1.)
    }

    #[inline]
    pub fn green() -> Color {
        Color::new(0., 1., 0., 1.)
    }

    #[inline]
    pub fn blue() -> Color {
        Color::new(0., 0., 1., 1.)
    }

    #[inline]
    pub fn white() -> Color {
        Color::new(1., 1., 1., 1.)
    }

    #[inline]
    pub fn black() -> Color {
        Color::new(0., 0., 0., 1.)
    }
}

#[cfg(test)]
mod tests {
    use graphics::*;

    #[test]
    fn convert_u8() {
        assert!(Color::from_u8(255, 0, 0, 255) == Color::red());
        assert!(Color::from_u8(255, 255, 255, 255) == Color::white());
        assert!(Color::from_u8(0, 0, 0, 0) == Color::new(0., 0., 0., 0.));

        let color = Color::from_u8(0, 51, 102, 255);
        let error = (color.g - 0.2).abs() + (color.b - 0.4).abs();

        eprintln!("Error: {}", error);
        assert!(error < 0.0001);
    }
}
