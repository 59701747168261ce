// src/scan/width.rs

/// Widest intensity encoding a pair can carry
pub const MAX_INTENSITY_WIDTH: u16 = 4;

/// Outcome of reconciling a header's intensity width with its block length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthResolution {
    /// Width used to decode intensities
    pub width: u16,
    /// Pairs in the block at that width
    pub point_count: usize,
    /// True when `width` differs from the declared width
    pub corrected: bool,
}

/// Bytes occupied by one m/z and intensity pair
pub fn pair_size(width: u16) -> usize {
    2 + width as usize
}

/// Pick the intensity width that makes `data_len` (block length minus header)
/// a whole number of pairs.
///
/// In order of preference:
/// 1. the declared width, if it matches both `data_len` and `declared_points`
/// 2. a candidate matching `data_len` together with `declared_points`
/// 3. the declared width, if it divides `data_len`
/// 4. a candidate dividing `data_len`
///
/// Within steps 2 and 4, candidates above the declared width are tried first,
/// smallest first, then the ones below it. A declared width outside
/// `candidates` is never accepted as is, and candidates outside
/// `1..=MAX_INTENSITY_WIDTH` are ignored. Returns `None` when nothing fits.
///
/// ```
/// use qgd_rs::scan::resolve_intensity_width;
///
/// // 10 points declared at width 1, but the block holds 10 pairs of width 4
/// let r = resolve_intensity_width(60, 1, 10, &[1, 2, 3, 4]).unwrap();
/// assert_eq!((r.width, r.point_count, r.corrected), (4, 10, true));
/// ```
pub fn resolve_intensity_width(
    data_len: usize,
    declared_width: u16,
    declared_points: u16,
    candidates: &[u16],
) -> Option<WidthResolution> {
    let fits_points = |w: u16| pair_size(w) * declared_points as usize == data_len;
    let divides = |w: u16| data_len % pair_size(w) == 0;
    let usable = |w: &u16| (1..=MAX_INTENSITY_WIDTH).contains(w);
    let declared_valid = usable(&declared_width) && candidates.contains(&declared_width);

    let mut alternatives: Vec<u16> = candidates
        .iter()
        .copied()
        .filter(|w| usable(w) && *w != declared_width)
        .collect();
    alternatives.sort_unstable_by_key(|&w| (w < declared_width, w));

    let chosen = if declared_valid && fits_points(declared_width) {
        declared_width
    } else if let Some(w) = alternatives.iter().copied().find(|&w| fits_points(w)) {
        w
    } else if declared_valid && divides(declared_width) {
        declared_width
    } else {
        alternatives.iter().copied().find(|&w| divides(w))?
    };

    Some(WidthResolution {
        width: chosen,
        point_count: data_len / pair_size(chosen),
        corrected: chosen != declared_width,
    })
}
