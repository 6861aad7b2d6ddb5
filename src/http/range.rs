//! Range header parsing (RFC 7233, single `bytes` ranges).

/// Outcome of parsing a Range header against a body of known length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeOutcome {
    /// No usable range; serve the full body with 200.
    Full,
    /// Serve bytes `start..=end` with 206.
    Partial { start: usize, end: usize },
    /// Range cannot be satisfied; respond 416.
    Unsatisfiable,
}

/// Parse a Range header value for a body of `len` bytes.
///
/// Accepted forms: `bytes=a-b`, `bytes=a-` (open-ended), `bytes=-n`
/// (suffix). Multipart ranges and malformed values are ignored rather
/// than rejected, falling back to the full body.
///
/// # Examples
/// ```
/// use staticd::http::{parse_range, RangeOutcome};
///
/// assert_eq!(parse_range(Some("bytes=0-99"), 1000), RangeOutcome::Partial { start: 0, end: 99 });
/// assert_eq!(parse_range(None, 1000), RangeOutcome::Full);
/// ```
pub fn parse_range(header: Option<&str>, len: usize) -> RangeOutcome {
    let Some(spec) = header.and_then(|h| h.strip_prefix("bytes=")) else {
        return RangeOutcome::Full;
    };

    // Single range only.
    if spec.contains(',') {
        return RangeOutcome::Full;
    }

    let Some((start_spec, end_spec)) = spec.split_once('-') else {
        return RangeOutcome::Full;
    };
    let (start_spec, end_spec) = (start_spec.trim(), end_spec.trim());

    // Suffix form: the last N bytes.
    if start_spec.is_empty() {
        let Ok(suffix) = end_spec.parse::<usize>() else {
            return RangeOutcome::Full;
        };
        if suffix == 0 || len == 0 {
            return RangeOutcome::Unsatisfiable;
        }
        return RangeOutcome::Partial {
            start: len.saturating_sub(suffix),
            end: len - 1,
        };
    }

    let Ok(start) = start_spec.parse::<usize>() else {
        return RangeOutcome::Full;
    };
    if start >= len {
        return RangeOutcome::Unsatisfiable;
    }

    let end = if end_spec.is_empty() {
        len - 1
    } else {
        let Ok(end) = end_spec.parse::<usize>() else {
            return RangeOutcome::Full;
        };
        end.min(len - 1)
    };

    if start > end {
        return RangeOutcome::Unsatisfiable;
    }

    RangeOutcome::Partial { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_header_serves_full_body() {
        assert_eq!(parse_range(None, 100), RangeOutcome::Full);
    }

    #[test]
    fn non_bytes_unit_is_ignored() {
        assert_eq!(parse_range(Some("lines=0-9"), 100), RangeOutcome::Full);
    }

    #[test]
    fn fixed_range() {
        assert_eq!(
            parse_range(Some("bytes=0-9"), 100),
            RangeOutcome::Partial { start: 0, end: 9 }
        );
    }

    #[test]
    fn open_ended_range_runs_to_eof() {
        assert_eq!(
            parse_range(Some("bytes=50-"), 100),
            RangeOutcome::Partial { start: 50, end: 99 }
        );
    }

    #[test]
    fn suffix_range_takes_last_bytes() {
        assert_eq!(
            parse_range(Some("bytes=-20"), 100),
            RangeOutcome::Partial { start: 80, end: 99 }
        );
        // Oversized suffix clamps to the whole body.
        assert_eq!(
            parse_range(Some("bytes=-500"), 100),
            RangeOutcome::Partial { start: 0, end: 99 }
        );
    }

    #[test]
    fn end_is_clamped_to_body_length() {
        assert_eq!(
            parse_range(Some("bytes=90-150"), 100),
            RangeOutcome::Partial { start: 90, end: 99 }
        );
    }

    #[test]
    fn unsatisfiable_ranges() {
        assert_eq!(parse_range(Some("bytes=200-"), 100), RangeOutcome::Unsatisfiable);
        assert_eq!(parse_range(Some("bytes=-0"), 100), RangeOutcome::Unsatisfiable);
        assert_eq!(parse_range(Some("bytes=50-20"), 100), RangeOutcome::Unsatisfiable);
    }

    #[test]
    fn malformed_ranges_fall_back_to_full() {
        assert_eq!(parse_range(Some("bytes=a-b"), 100), RangeOutcome::Full);
        assert_eq!(parse_range(Some("bytes=0-9,20-29"), 100), RangeOutcome::Full);
        assert_eq!(parse_range(Some("bytes=10"), 100), RangeOutcome::Full);
    }
}
