// File: crates/tsplot-core/src/theme.rs
// Summary: Named color palettes for plot background, text, grid and series.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub text: skia::Color,
    pub grid: skia::Color,
    /// Colors handed out to series in registration order.
    pub series: [skia::Color; 6],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::new(0xff22_2222),
            text: skia::Color::new(0xffee_eeee),
            grid: skia::Color::new(0xff44_4444),
            series: [
                skia::Color::new(0xff50_ff50),
                skia::Color::new(0xff50_80ff),
                skia::Color::new(0xff00_40a0),
                skia::Color::new(0xff90_4090),
                skia::Color::new(0xffcc_0000),
                skia::Color::new(0xff88_0000),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            text: skia::Color::from_argb(255, 20, 20, 30),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            series: [
                skia::Color::from_argb(255, 20, 160, 90),
                skia::Color::from_argb(255, 32, 120, 200),
                skia::Color::from_argb(255, 20, 60, 140),
                skia::Color::from_argb(255, 140, 60, 140),
                skia::Color::from_argb(255, 200, 60, 60),
                skia::Color::from_argb(255, 120, 30, 30),
            ],
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            text: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            grid: skia::Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            series: solarized_accents(),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            text: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),       // base03
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            series: solarized_accents(),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            grid: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            series: [
                skia::Color::from_argb(255, 0x00, 0xff, 0x00),
                skia::Color::from_argb(255, 0x00, 0xff, 0xff),
                skia::Color::from_argb(255, 0xff, 0xff, 0x00),
                skia::Color::from_argb(255, 0xff, 0x00, 0xff),
                skia::Color::from_argb(255, 0xff, 0x00, 0x00),
                skia::Color::from_argb(255, 0x00, 0xaa, 0xff),
            ],
        }
    }

    /// Series color for registration slot `index`, cycling through the palette.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.series[index % self.series.len()]
    }
}

fn solarized_accents() -> [skia::Color; 6] {
    [
        skia::Color::from_argb(255, 0x85, 0x99, 0x00), // green
        skia::Color::from_argb(255, 0x26, 0x8b, 0xd2), // blue
        skia::Color::from_argb(255, 0x2a, 0xa1, 0x98), // cyan
        skia::Color::from_argb(255, 0x6c, 0x71, 0xc4), // violet
        skia::Color::from_argb(255, 0xdc, 0x32, 0x2f), // red
        skia::Color::from_argb(255, 0xcb, 0x4b, 0x16), // orange
    ]
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
