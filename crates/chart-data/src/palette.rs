// File: crates/chart-data/src/palette.rs
// Summary: Named color palette tables for categorical series and sequential scales.

use crate::color::Rgb;

const CATEGORY10: [Rgb; 10] = [
    Rgb::from_u32(0x1f77b4),
    Rgb::from_u32(0xff7f0e),
    Rgb::from_u32(0x2ca02c),
    Rgb::from_u32(0xd62728),
    Rgb::from_u32(0x9467bd),
    Rgb::from_u32(0x8c564b),
    Rgb::from_u32(0xe377c2),
    Rgb::from_u32(0x7f7f7f),
    Rgb::from_u32(0xbcbd22),
    Rgb::from_u32(0x17becf),
];

const CATEGORY20: [Rgb; 20] = [
    Rgb::from_u32(0x1f77b4),
    Rgb::from_u32(0xaec7e8),
    Rgb::from_u32(0xff7f0e),
    Rgb::from_u32(0xffbb78),
    Rgb::from_u32(0x2ca02c),
    Rgb::from_u32(0x98df8a),
    Rgb::from_u32(0xd62728),
    Rgb::from_u32(0xff9896),
    Rgb::from_u32(0x9467bd),
    Rgb::from_u32(0xc5b0d5),
    Rgb::from_u32(0x8c564b),
    Rgb::from_u32(0xc49c94),
    Rgb::from_u32(0xe377c2),
    Rgb::from_u32(0xf7b6d2),
    Rgb::from_u32(0x7f7f7f),
    Rgb::from_u32(0xc7c7c7),
    Rgb::from_u32(0xbcbd22),
    Rgb::from_u32(0xdbdb8d),
    Rgb::from_u32(0x17becf),
    Rgb::from_u32(0x9edae5),
];

const BLUES: [Rgb; 7] = [
    Rgb::from_u32(0xf7fbff),
    Rgb::from_u32(0xdeebf7),
    Rgb::from_u32(0x9ecae1),
    Rgb::from_u32(0x4292c6),
    Rgb::from_u32(0x2171b5),
    Rgb::from_u32(0x08519c),
    Rgb::from_u32(0x08306b),
];

const GREENS: [Rgb; 9] = [
    Rgb::from_u32(0xf7fcf5),
    Rgb::from_u32(0xe5f5e0),
    Rgb::from_u32(0xc7e9c0),
    Rgb::from_u32(0xa1d99b),
    Rgb::from_u32(0x74c476),
    Rgb::from_u32(0x41ab5d),
    Rgb::from_u32(0x238b45),
    Rgb::from_u32(0x006d2c),
    Rgb::from_u32(0x00441b),
];

const ORANGES: [Rgb; 5] = [
    Rgb::from_u32(0xfff5eb),
    Rgb::from_u32(0xfdd0a2),
    Rgb::from_u32(0xfd8d3c),
    Rgb::from_u32(0xe6550d),
    Rgb::from_u32(0xa63603),
];

const REDS: [Rgb; 9] = [
    Rgb::from_u32(0xfff5f0),
    Rgb::from_u32(0xfee0d2),
    Rgb::from_u32(0xfcbba1),
    Rgb::from_u32(0xfc9272),
    Rgb::from_u32(0xfb6a4a),
    Rgb::from_u32(0xef3b2c),
    Rgb::from_u32(0xcb181d),
    Rgb::from_u32(0xa50f15),
    Rgb::from_u32(0x67000d),
];

const VIRIDIS: [Rgb; 4] = [
    Rgb::from_u32(0x440154),
    Rgb::from_u32(0x31688e),
    Rgb::from_u32(0x35b779),
    Rgb::from_u32(0xfde725),
];

const WARM: [Rgb; 7] = [
    Rgb::from_u32(0xfff5f0),
    Rgb::from_u32(0xfee0d2),
    Rgb::from_u32(0xfc9272),
    Rgb::from_u32(0xfb6a4a),
    Rgb::from_u32(0xef3b2c),
    Rgb::from_u32(0xcb181d),
    Rgb::from_u32(0x99000d),
];

// Cool shares the blues ramp; kept as its own name for callers.
const COOL: [Rgb; 7] = BLUES;

/// The built-in palette names. `Category10`/`Category20` suit categorical
/// series; the rest are sequential ramps for value-based scales.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    Category10,
    Category20,
    Blues,
    Greens,
    Oranges,
    Reds,
    Viridis,
    Warm,
    Cool,
}

impl Palette {
    pub fn colors(&self) -> &'static [Rgb] {
        match self {
            Palette::Category10 => &CATEGORY10,
            Palette::Category20 => &CATEGORY20,
            Palette::Blues => &BLUES,
            Palette::Greens => &GREENS,
            Palette::Oranges => &ORANGES,
            Palette::Reds => &REDS,
            Palette::Viridis => &VIRIDIS,
            Palette::Warm => &WARM,
            Palette::Cool => &COOL,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Palette::Category10 => "category10",
            Palette::Category20 => "category20",
            Palette::Blues => "blues",
            Palette::Greens => "greens",
            Palette::Oranges => "oranges",
            Palette::Reds => "reds",
            Palette::Viridis => "viridis",
            Palette::Warm => "warm",
            Palette::Cool => "cool",
        }
    }

    pub fn all() -> &'static [Palette] {
        &[
            Palette::Category10,
            Palette::Category20,
            Palette::Blues,
            Palette::Greens,
            Palette::Oranges,
            Palette::Reds,
            Palette::Viridis,
            Palette::Warm,
            Palette::Cool,
        ]
    }
}

/// Find a palette by its `name`, falling back to `Category10`.
pub fn find(name: &str) -> Palette {
    for p in Palette::all() {
        if p.name().eq_ignore_ascii_case(name) {
            return *p;
        }
    }
    Palette::Category10
}
