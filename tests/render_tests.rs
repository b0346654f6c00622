use std::collections::BTreeSet;

use image::Rgb;
use image::RgbImage;
use wolfram::automaton::Automaton;
use wolfram::palette::Palette;
use wolfram::render;
use wolfram::rule::RULE_30;
use wolfram::rule::RULE_90;

const FG: Rgb<u8> = Rgb([0x9F, 0xEF, 0x00]);
const BG: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
const PALETTE: Palette = Palette::new(FG, BG);

/// Coordinates of every foreground pixel
fn on_pixels(img: &RgbImage) -> BTreeSet<(u32, u32)> {
    img.enumerate_pixels()
        .filter(|(_, _, px)| **px == FG)
        .map(|(x, y, _)| (x, y))
        .collect()
}

fn ascii_art(img: &RgbImage) -> String {
    img.rows()
        .map(|row| row.map(|&px| if px == FG { '#' } else { '.' }).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn rule_90_sierpinski() {
    let mut automaton = Automaton::new(RULE_90, 63);

    let img = render::render(&mut automaton, 32, &PALETTE);

    // Starting from a single cell, rule 90 computes Pascal's triangle mod 2. By Lucas' theorem the
    // cell `d` columns from the seed in generation `g` is on iff `C(g, (g + d) / 2)` is odd.
    let center = 31i64;
    let mut reference = BTreeSet::new();
    for g in 0..32i64 {
        for x in 0..63i64 {
            let d = x - center;
            if d.abs() > g || (g + d) % 2 != 0 {
                continue;
            }

            let k = (g + d) / 2;
            if k & (g - k) == 0 {
                reference.insert((x as u32, g as u32));
            }
        }
    }

    assert_eq!(img.dimensions(), (63, 32));
    assert_eq!(on_pixels(&img), reference);
    assert_eq!(automaton.generation(), 32);

    let art = ascii_art(&img);
    insta::assert_snapshot!(art);
}

#[test]
fn rows_line_up_with_generations() {
    let mut reference = Automaton::new(RULE_30, 41);
    let mut automaton = Automaton::new(RULE_30, 41);

    let img = render::render(&mut automaton, 20, &PALETTE);

    for y in 0..20 {
        assert_eq!(reference.generation(), y as usize);

        let expected: Vec<_> = reference.cells().iter().map(|&c| PALETTE.color(c)).collect();
        let got: Vec<_> = (0..41).map(|x| *img.get_pixel(x, y)).collect();
        assert_eq!(got, expected, "row {y}");

        reference.advance();
    }

    assert_eq!(automaton.generation(), 20);
    assert_eq!(automaton.cells(), reference.cells());
}

#[test]
fn zero_height_renders_nothing() {
    let mut automaton = Automaton::new(RULE_90, 63);

    let img = render::render(&mut automaton, 0, &PALETTE);

    assert_eq!(img.dimensions(), (63, 0));
    assert_eq!(automaton.generation(), 0);
}

#[test]
fn save_and_reload() -> anyhow::Result<()> {
    let mut automaton = Automaton::new(RULE_90, 31);
    let img = render::render(&mut automaton, 16, &PALETTE);

    let path = std::env::temp_dir().join(format!("wolfram-{}-rule-90.png", std::process::id()));
    render::save_png(&img, &path)?;

    let reloaded = image::open(&path)?.to_rgb8();
    std::fs::remove_file(&path)?;

    assert_eq!(reloaded, img);

    Ok(())
}
