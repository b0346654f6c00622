use crate::automaton::Automaton;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Text rendering of an automaton's history, for terminals.
///
/// Each braille character covers 2 cells of 4 consecutive generations.
pub struct Preview {
    /// The cell buffer, one row per generation
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Number of cells shown per generation
    w: usize,

    /// Number of generations shown
    h: usize,
}

impl Preview {
    pub fn new(w: usize, h: usize) -> Self {
        // Let `w` and `h` refer to width and height of the cell buffer. Then `bw = ceil(w / 2)`
        // and `bh = ceil(h / 4)` are the width and height of braille characters of our framebuffer.
        // Each braille character is 3 bytes of UTF-8, and each of the `bh` lines ends with a one
        // byte newline.
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));

        Self {
            cb: vec![false; w * h],
            fb: String::with_capacity(3 * (bw * bh) + bh),
            cp: vec![BRAILLE_EMPTY; bw * bh],
            w,
            h,
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Record the next `height` generations of `automaton`, advancing it once per generation.
    ///
    /// An automaton wider than the preview is cropped to its middle `width` cells. A preview wider
    /// than the automaton leaves the extra columns on the right blank.
    pub fn draw(&mut self, automaton: &mut Automaton) {
        self.reset();

        let offset = automaton.size().saturating_sub(self.w) / 2;

        for y in 0..self.h {
            let row = &mut self.cb[y * self.w..(y + 1) * self.w];

            for (px, &state) in row.iter_mut().zip(&automaton.cells()[offset..]) {
                *px = state == 1;
            }

            automaton.advance();
        }
    }

    /// Reset the cell buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Pack the cell buffer into braille characters, one line of text per 4 generations.
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            let (x, y) = self.xy_to(n);

            if px {
                self.cp[(y / 4) * bw + (x / 2)] += Self::get_hex_value(x, y);
            }
        }

        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            // Every sum of dots stays within U+2800..=U+28FF
            self.fb
                .push(char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER));
        }

        if !self.cp.is_empty() {
            self.fb.push('\n');
        }

        &self.fb
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.w, n / self.w)
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}
