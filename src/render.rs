use std::path::Path;

use image::ImageError;
use image::ImageFormat;
use image::RgbImage;
use thiserror::Error;
use tracing::debug;
use tracing::trace;

use crate::automaton::Automaton;
use crate::palette::Palette;

/// Draw `height` generations of `automaton`, one per pixel row, top to bottom.
///
/// The image is as wide as the automaton. Row `y` shows the automaton as it was `y` generations
/// after the call, so a fresh automaton puts generation `y` on row `y`. The automaton is advanced
/// once per row and is left `height` generations further along; it is not rewound.
///
/// A `height` of zero yields an empty image and leaves the automaton as-is.
pub fn render(automaton: &mut Automaton, height: u32, palette: &Palette) -> RgbImage {
    assert!(
        automaton.size() <= u32::MAX as usize,
        "automaton is too wide for an image"
    );

    let width = automaton.size() as u32;
    let start = automaton.generation();

    debug!(
        rule = %automaton.rule(),
        width,
        height,
        start,
        "rendering"
    );

    let mut img = RgbImage::new(width, height);

    for (y, row) in img.rows_mut().enumerate() {
        debug_assert_eq!(automaton.generation() - start, y);

        for (pixel, &state) in row.zip(automaton.cells()) {
            *pixel = palette.color(state);
        }

        trace!(
            generation = automaton.generation(),
            population = automaton.population(),
            "row drawn"
        );

        automaton.advance();
    }

    debug!(generation = automaton.generation(), "rendered");

    img
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot encode an empty {width}x{height} image")]
    Empty { width: u32, height: u32 },

    #[error("failed to write image: {0}")]
    Image(#[from] ImageError),
}

/// Encode `img` as a PNG file at `path`.
pub fn save_png<P: AsRef<Path>>(img: &RgbImage, path: P) -> Result<(), RenderError> {
    let (width, height) = img.dimensions();

    if width == 0 || height == 0 {
        return Err(RenderError::Empty { width, height });
    }

    img.save_with_format(path.as_ref(), ImageFormat::Png)?;

    debug!(path = %path.as_ref().display(), width, height, "saved");

    Ok(())
}

#[cfg(test)]
mod tests {
    use image::Rgb;

    use super::*;
    use crate::rule::RULE_110;

    const FG: Rgb<u8> = Rgb([255, 255, 255]);
    const BG: Rgb<u8> = Rgb([0, 0, 0]);

    fn palette() -> Palette {
        Palette::new(FG, BG)
    }

    #[test]
    fn first_row_is_the_seed() {
        let mut a = Automaton::new(RULE_110, 5);

        let img = render(&mut a, 1, &palette());

        assert_eq!(img.dimensions(), (5, 1));
        for x in 0..5 {
            let exp = if x == 2 { FG } else { BG };
            assert_eq!(*img.get_pixel(x, 0), exp, "pixel ({x}, 0)");
        }
    }

    #[test]
    fn second_row_is_the_next_generation() {
        let mut a = Automaton::new(RULE_110, 5);

        let img = render(&mut a, 2, &palette());

        let row: Vec<_> = (0..5).map(|x| *img.get_pixel(x, 1)).collect();
        assert_eq!(row, [BG, FG, FG, BG, BG]);
    }

    #[test]
    fn automaton_advances_once_per_row() {
        let mut a = Automaton::new(RULE_110, 8);

        let _ = render(&mut a, 13, &palette());

        assert_eq!(a.generation(), 13);
    }

    #[test]
    fn zero_height() {
        let mut a = Automaton::new(RULE_110, 8);

        let img = render(&mut a, 0, &palette());

        assert_eq!(img.dimensions(), (8, 0));
        assert!(img.as_raw().is_empty());
        assert_eq!(a.generation(), 0);
    }

    #[test]
    fn empty_image_is_not_saved() {
        let img = RgbImage::new(8, 0);
        let path = std::env::temp_dir().join("wolfram-empty-image-test.png");

        let res = save_png(&img, &path);

        assert!(matches!(res, Err(RenderError::Empty { width: 8, height: 0 })));
        assert!(!path.exists());
    }

    #[test]
    fn write_failure_leaves_automaton_alone() {
        let mut a = Automaton::new(RULE_110, 8);
        let img = render(&mut a, 4, &palette());
        let path = std::env::temp_dir()
            .join("wolfram-missing-directory")
            .join("out.png");

        let res = save_png(&img, &path);

        assert!(matches!(res, Err(RenderError::Image(_))));
        assert_eq!(a.generation(), 4);
        assert!(!path.exists());
    }
}
