//! Terminal QR code rendering utilities.

use qrcode::QrCode;
use qrcode::types::QrError;

/// Modules of blank border around the code.
const QUIET_ZONE: usize = 2;

const INDENT: &str = "      ";

/// Render `data` as a QR code using Unicode half-block characters.
///
/// Each output character covers two vertically stacked modules so the code
/// stays roughly square in a terminal.
///
/// # Errors
///
/// Returns an error if `data` does not fit in a QR code.
pub fn render(data: &str) -> Result<String, QrError> {
    let code = QrCode::new(data)?;
    let colors = code.to_colors();
    let width = code.width();
    let total = width + QUIET_ZONE * 2;

    let is_dark = |x: usize, y: usize| {
        let inside = (QUIET_ZONE..QUIET_ZONE + width).contains(&x)
            && (QUIET_ZONE..QUIET_ZONE + width).contains(&y);
        inside && colors[(y - QUIET_ZONE) * width + (x - QUIET_ZONE)] == qrcode::Color::Dark
    };

    let mut out = String::new();
    for y in (0..total).step_by(2) {
        out.push_str(INDENT);
        for x in 0..total {
            let ch = match (is_dark(x, y), is_dark(x, y + 1)) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    Ok(out)
}

/// Print `data` as a QR code, or a warning if it cannot be encoded.
pub fn print_to_terminal(data: &str) {
    match render(data) {
        Ok(code) => {
            println!();
            print!("{code}");
        }
        Err(e) => eprintln!("Failed to generate QR code: {e}"),
    }
}
