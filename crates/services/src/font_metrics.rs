/// Points to millimetres.
pub const PT_TO_MM: f64 = 25.4 / 72.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontFace {
    Regular,
    Bold,
}

// Base-14 Helvetica widths in 1/1000 em for ASCII 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const DEFAULT_WIDTH: u16 = 556;

#[must_use]
pub fn char_width(c: char, face: FontFace) -> u16 {
    let table = match face {
        FontFace::Regular => &HELVETICA,
        FontFace::Bold => &HELVETICA_BOLD,
    };
    u32::from(c)
        .checked_sub(0x20)
        .and_then(|idx| usize::try_from(idx).ok())
        .and_then(|idx| table.get(idx).copied())
        .unwrap_or(DEFAULT_WIDTH)
}

/// Rendered width of `text` in millimetres.
#[must_use]
pub fn text_width_mm(text: &str, size_pt: f64, face: FontFace) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, face))).sum();
    f64::from(units) / 1000.0 * size_pt * PT_TO_MM
}

/// Greedy word wrap to `max_width_mm`.
///
/// Explicit newlines start a new line; words wider than the limit are broken
/// between characters. Blank input yields no lines.
#[must_use]
pub fn wrap_text(text: &str, max_width_mm: f64, size_pt: f64, face: FontFace) -> Vec<String> {
    let fits = |candidate: &str| text_width_mm(candidate, size_pt, face) <= max_width_mm;
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_owned()
            } else {
                format!("{current} {word}")
            };
            if fits(&candidate) {
                current = candidate;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if fits(word) {
                current = word.to_owned();
            } else {
                for c in word.chars() {
                    current.push(c);
                    if !fits(&current) && current.chars().count() > 1 {
                        current.pop();
                        lines.push(std::mem::take(&mut current));
                        current.push(c);
                    }
                }
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_match_afm_samples() {
        assert_eq!(char_width(' ', FontFace::Regular), 278);
        assert_eq!(char_width('W', FontFace::Regular), 944);
        assert_eq!(char_width('i', FontFace::Regular), 222);
        assert_eq!(char_width('i', FontFace::Bold), 278);
        assert_eq!(char_width('~', FontFace::Bold), 584);
        assert_eq!(char_width('é', FontFace::Regular), DEFAULT_WIDTH);
    }

    #[test]
    fn width_scales_with_size() {
        let small = text_width_mm("Musical", 12.0, FontFace::Regular);
        let large = text_width_mm("Musical", 24.0, FontFace::Regular);
        assert!((large - 2.0 * small).abs() < 1e-9);
    }

    #[test]
    fn wrap_respects_width_and_keeps_words() {
        let text = "If you scored high in Musical Intelligence, you have a knack for understanding music.";
        let lines = wrap_text(text, 60.0, 12.0, FontFace::Regular);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, 12.0, FontFace::Regular) <= 60.0, "{line}");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn wrap_breaks_overlong_words() {
        let lines = wrap_text(&"m".repeat(40), 20.0, 12.0, FontFace::Regular);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), "m".repeat(40));
    }

    #[test]
    fn wrap_of_blank_text_is_empty() {
        assert!(wrap_text("   ", 50.0, 12.0, FontFace::Regular).is_empty());
        assert!(wrap_text("", 50.0, 12.0, FontFace::Regular).is_empty());
    }
}
