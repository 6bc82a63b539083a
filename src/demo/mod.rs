//! # Demonstrations
//!
//! The two worked examples shipped as binaries: a production planning linear program and the
//! integral of `x^2` over `[0, 2]`. Each consists of a function that computes a report and a
//! `Display` implementation that prints it.
pub mod area;
pub mod production;

/// Format a float like an interactive interpreter would.
///
/// Integral values keep a trailing `.0`, magnitudes below `1e-4` or from `1e16` on are written
/// with an exponent of at least two digits, everything else in the shortest form that reads back
/// to the same value.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let scientific = format!("{:e}", value);
        return match scientific.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            },
            None => scientific,
        };
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod test {
    use super::format_float;

    #[test]
    fn floats() {
        assert_eq!(format_float(30.0), "30.0");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-2.0), "-2.0");
        assert_eq!(format_float(2.6666666666666665), "2.6666666666666665");
        assert_eq!(format_float(2.72), "2.72");
        assert_eq!(format_float(2.960594732333751e-14), "2.960594732333751e-14");
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(1.5e16), "1.5e+16");
        assert_eq!(format_float(f64::NAN), "nan");
    }
}
