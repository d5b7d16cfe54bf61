use crate::encoder::QrEncoder;

/// Render a built symbol as text, two module rows per line.
///
/// `quiet_zone` light modules surround the symbol. With `invert` set, light
/// modules are drawn as blocks, which reads correctly on dark terminals.
/// An encoder without a grid renders as an empty string.
pub fn render_terminal(qr: &QrEncoder, quiet_zone: usize, invert: bool) -> String {
    let count = qr.module_count();
    if count == 0 {
        return String::new();
    }

    let start = -(quiet_zone as i32);
    let end = (count + quiet_zone) as i32;
    // Modules outside the symbol read as light
    let ink = |row: i32, col: i32| qr.is_dark(row, col) != invert;

    let mut out = String::new();
    let mut row = start;
    while row < end {
        for col in start..end {
            let top = ink(row, col);
            let bottom = row + 1 < end && ink(row + 1, col);
            out.push(match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push('\n');
        row += 2;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ECLevel;

    #[test]
    fn test_terminal_dimensions() {
        let mut qr = QrEncoder::new(ECLevel::M);
        qr.add_data("HELLO");
        qr.make().expect("fits");

        let text = render_terminal(&qr, 2, false);
        let lines: Vec<&str> = text.lines().collect();
        // 25 module rows -> 13 lines of 25 characters
        assert_eq!(lines.len(), 13);
        assert!(lines.iter().all(|l| l.chars().count() == 25));
        // Quiet zone row is blank; the second line holds finder rows 0 and 1
        assert!(lines[0].chars().all(|c| c == ' '));
        assert!(lines[1].starts_with("  █▀▀▀▀▀█"));
    }

    #[test]
    fn test_inverted_quiet_zone_is_solid() {
        let mut qr = QrEncoder::new(ECLevel::M);
        qr.add_data("HELLO");
        qr.make().expect("fits");
        let text = render_terminal(&qr, 2, true);
        let first = text.lines().next().expect("non-empty");
        assert!(first.chars().all(|c| c == '█'));
    }

    #[test]
    fn test_unbuilt_encoder_renders_nothing() {
        let qr = QrEncoder::new(ECLevel::M);
        assert!(render_terminal(&qr, 4, false).is_empty());
    }
}
