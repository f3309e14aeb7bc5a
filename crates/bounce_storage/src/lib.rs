use bounce_core::{BounceError, BounceResult, TurningPointSummary};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Line keys of the summary file, in write order
pub const SUMMARY_KEYS: [&str; 4] = ["a_min (bounce)", "a_max (turnaround)", "T_half", "T_full"];

/// Create the output directory (and parents) if missing
pub fn ensure_output_dir(dir: &Path) -> BounceResult<()> {
    fs::create_dir_all(dir).map_err(|e| BounceError::io(dir, e))?;
    debug!("Output directory ready: {}", dir.display());
    Ok(())
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// `%g`-style formatting: `sig` significant digits, scientific notation
/// when the decimal exponent is below -4 or at least `sig`, trailing zeros
/// removed.
pub fn format_general(value: f64, sig: usize) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".into() } else { "-inf".into() };
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0".into() } else { "0".into() };
    }

    let sig = sig.max(1);
    let sci = format!("{:.*e}", sig - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= sig as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (sig as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Four `key: value` lines, one per summary field
pub fn summary_text(summary: &TurningPointSummary, sig: usize) -> String {
    let values = [summary.a_min, summary.a_max, summary.t_half, summary.t_full];
    SUMMARY_KEYS
        .iter()
        .zip(values)
        .map(|(key, v)| format!("{key}: {}\n", format_general(v, sig)))
        .collect()
}

/// Write the summary file, creating parent directories as needed
pub fn save_summary(summary: &TurningPointSummary, sig: usize, path: &Path) -> BounceResult<()> {
    if let Some(parent) = path.parent() {
        ensure_output_dir(parent)?;
    }
    fs::write(path, summary_text(summary, sig)).map_err(|e| BounceError::io(path, e))?;
    Ok(())
}

/// Read a summary file back. Values carry only the written precision.
pub fn load_summary(path: &Path) -> BounceResult<TurningPointSummary> {
    let text = fs::read_to_string(path).map_err(|e| BounceError::io(path, e))?;
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() != SUMMARY_KEYS.len() {
        return Err(BounceError::Parse(format!(
            "expected {} lines, found {}",
            SUMMARY_KEYS.len(),
            lines.len()
        )));
    }

    let mut values = [0.0f64; 4];
    for ((line, key), slot) in lines.iter().zip(SUMMARY_KEYS).zip(values.iter_mut()) {
        let (k, v) = line
            .split_once(": ")
            .ok_or_else(|| BounceError::Parse(format!("no `key: value` in {line:?}")))?;
        if k != key {
            return Err(BounceError::Parse(format!("expected key {key:?}, found {k:?}")));
        }
        *slot = v
            .trim()
            .parse()
            .map_err(|e| BounceError::Parse(format!("{key}: {e}")))?;
    }

    Ok(TurningPointSummary {
        a_min: values[0],
        a_max: values[1],
        t_half: values[2],
        t_full: values[3],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_core::SUMMARY_SIG_DIGITS;

    #[test]
    fn test_format_general_fixed() {
        assert_eq!(format_general(0.24177633131692622, 6), "0.241776");
        assert_eq!(format_general(3.7167791801222716, 6), "3.71678");
        assert_eq!(format_general(7.240173094960169, 6), "7.24017");
        assert_eq!(format_general(14.480346189920338, 6), "14.4803");
        assert_eq!(format_general(100.0, 6), "100");
        assert_eq!(format_general(123456.0, 6), "123456");
        assert_eq!(format_general(0.0001, 6), "0.0001");
        assert_eq!(format_general(-2.5, 6), "-2.5");
    }

    #[test]
    fn test_format_general_scientific() {
        assert_eq!(format_general(1e-5, 6), "1e-05");
        assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_general(-3.2e-12, 6), "-3.2e-12");
        assert_eq!(format_general(1e100, 6), "1e+100");
    }

    #[test]
    fn test_format_general_rounding_carries() {
        // Rounds up into the next decade
        assert_eq!(format_general(9.9999996, 6), "10");
        assert_eq!(format_general(999999.6, 6), "1e+06");
    }

    #[test]
    fn test_format_general_special() {
        assert_eq!(format_general(0.0, 6), "0");
        assert_eq!(format_general(f64::NAN, 6), "nan");
        assert_eq!(format_general(f64::INFINITY, 6), "inf");
    }

    #[test]
    fn test_summary_text_layout() {
        let summary = TurningPointSummary {
            a_min: 0.24177633131692622,
            a_max: 3.7167791801222716,
            t_half: 7.240173094960169,
            t_full: 14.480346189920338,
        };
        let text = summary_text(&summary, SUMMARY_SIG_DIGITS);
        assert_eq!(
            text,
            "a_min (bounce): 0.241776\n\
             a_max (turnaround): 3.71678\n\
             T_half: 7.24017\n\
             T_full: 14.4803\n"
        );
    }

    #[test]
    fn test_save_and_load_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("turning_points.txt");
        let summary = TurningPointSummary {
            a_min: 0.25,
            a_max: 3.5,
            t_half: 7.0,
            t_full: 14.0,
        };
        save_summary(&summary, SUMMARY_SIG_DIGITS, &path).unwrap();
        assert_eq!(load_summary(&path).unwrap(), summary);
    }

    #[test]
    fn test_load_rejects_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "a_min (bounce): 1\nT_half: 2\n").unwrap();
        assert!(matches!(load_summary(&path), Err(BounceError::Parse(_))));

        fs::write(&path, "a_min (bounce): 1\na_max (turnaround): x\nT_half: 2\nT_full: 4\n").unwrap();
        assert!(matches!(load_summary(&path), Err(BounceError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_summary(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, BounceError::Io { .. }));
    }
}
