use crate::foundation::core::{Line, Point};
use crate::foundation::math::Fnv1a64;
use crate::foundation::rng::RandomSource;

/// Characters used by the background columns: binary digits then half of the katakana syllabary.
pub const RAIN_CHARSET: &str =
    "01アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン";

/// Characters scattered by the ambient rain and inside silhouettes.
pub const BINARY_CHARSET: &str = "01";

pub fn pick(charset: &str, rng: &mut dyn RandomSource) -> char {
    let n = charset.chars().count();
    charset.chars().nth(rng.index(n)).unwrap_or('0')
}

// Candidate strokes on a 2x4 cell grid, in unit coordinates (x right, y down).
const CANDIDATES: [((f64, f64), (f64, f64)); 12] = [
    ((0.0, 0.0), (1.0, 0.0)),
    ((0.0, 0.5), (1.0, 0.5)),
    ((0.0, 1.0), (1.0, 1.0)),
    ((0.0, 0.0), (0.0, 0.5)),
    ((0.0, 0.5), (0.0, 1.0)),
    ((1.0, 0.0), (1.0, 0.5)),
    ((1.0, 0.5), (1.0, 1.0)),
    ((0.5, 0.0), (0.5, 1.0)),
    ((0.0, 0.0), (1.0, 1.0)),
    ((1.0, 0.0), (0.0, 1.0)),
    ((0.5, 0.5), (1.0, 1.0)),
    ((0.5, 0.5), (0.0, 1.0)),
];

/// Stroke outline of a glyph inside the unit box, stable per character.
///
/// `0` and `1` get hand-made shapes; every other character gets 2 to 5 strokes picked from a
/// fixed grid by hashing the code point, which reads as "some katakana" at rain sizes.
pub fn glyph_strokes(ch: char) -> Vec<Line> {
    let line = |a: (f64, f64), b: (f64, f64)| Line::new(Point::new(a.0, a.1), Point::new(b.0, b.1));
    match ch {
        '0' => vec![
            line((0.15, 0.0), (0.85, 0.0)),
            line((0.85, 0.0), (0.85, 1.0)),
            line((0.85, 1.0), (0.15, 1.0)),
            line((0.15, 1.0), (0.15, 0.0)),
        ],
        '1' => vec![
            line((0.5, 0.0), (0.5, 1.0)),
            line((0.25, 0.2), (0.5, 0.0)),
            line((0.25, 1.0), (0.75, 1.0)),
        ],
        _ => {
            let mut h = Fnv1a64::new_default();
            h.write_u32(u32::from(ch));
            let bits = h.finish();
            let mut out: Vec<Line> = CANDIDATES
                .iter()
                .enumerate()
                .filter(|(i, _)| (bits >> i) & 1 == 1)
                .map(|(_, &(a, b))| line(a, b))
                .take(5)
                .collect();
            // Guarantee a recognisable minimum.
            let mut extra = (bits >> 12) as usize;
            while out.len() < 2 {
                let (a, b) = CANDIDATES[extra % CANDIDATES.len()];
                let l = line(a, b);
                if !out.contains(&l) {
                    out.push(l);
                }
                extra = extra.wrapping_add(5);
            }
            out
        }
    }
}
