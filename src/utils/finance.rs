/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

/// Rounds `value` to `decimals` decimal places
///
/// Works on the exact decimal expansion of `value` and breaks ties to even,
/// so `0.0625` becomes `0.062` and `1.0005` (stored as `1.000499...`) becomes `1.0`.
///
/// # Examples
/// ```
/// use bitthought_jobs::utils::finance::round_to;
/// assert_eq!(round_to(-1.23456, 3), -1.235);
/// assert_eq!(round_to(0.0625, 3), 0.062);
/// ```
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    format!("{value:.prec$}", prec = decimals as usize)
        .parse::<f64>()
        .unwrap_or(value)
}
