//! Supernova distance-table ingest.
//!
//! The input is a whitespace-delimited table with one header row (Pantheon+
//! release format); `#` lines are comments. Column identification is by
//! name pattern, but resolved once, up front, into a typed schema:
//!
//! - redshift: first header containing `ZHD` or `ZHEL`
//! - modulus: first header containing `MU_SH0ES`, or exactly `MU`
//! - error: first header containing `ERR`
//!
//! Design goals (shared with the rest of the ingest surface):
//! - **Strict schema** for required columns (clear errors, exit code 2)
//! - **Row-level validation**: bad rows are dropped and counted, not fatal
//! - **Deterministic behavior**: output sorted by redshift ascending

use std::path::Path;

use crate::domain::SnSample;
use crate::error::AppError;

/// One resolved column: where it is and what it was called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMatch {
    pub index: usize,
    pub name: String,
}

/// The three columns the fit needs, resolved against a concrete header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnSchema {
    pub z: ColumnMatch,
    pub mu: ColumnMatch,
    pub err: ColumnMatch,
}

/// Ingest output: the sample plus row-accounting for diagnostics.
#[derive(Debug, Clone)]
pub struct SnIngest {
    pub sample: SnSample,
    pub schema: SnSchema,
    pub rows_read: usize,
    pub rows_dropped: usize,
}

/// Resolve the required columns against a header row.
///
/// Matching is case-insensitive and first-match-wins in header order; the
/// three resolved columns must be distinct.
pub fn resolve_schema(headers: &[&str]) -> Result<SnSchema, AppError> {
    let upper: Vec<String> = headers.iter().map(|h| h.to_uppercase()).collect();

    let find = |pred: &dyn Fn(&str) -> bool, what: &str| -> Result<ColumnMatch, AppError> {
        upper
            .iter()
            .position(|h| pred(h))
            .map(|index| ColumnMatch {
                index,
                name: headers[index].to_string(),
            })
            .ok_or_else(|| {
                AppError::new(2, format!("No {what} column found in supernova table header."))
            })
    };

    let z = find(&|h| h.contains("ZHD") || h.contains("ZHEL"), "redshift")?;
    let mu = find(&|h| h.contains("MU_SH0ES") || h == "MU", "distance-modulus")?;
    let err = find(&|h| h.contains("ERR"), "modulus-error")?;

    if z.index == mu.index || z.index == err.index || mu.index == err.index {
        return Err(AppError::new(
            2,
            format!(
                "Supernova columns must be distinct; resolved z='{}', mu='{}', err='{}'.",
                z.name, mu.name, err.name
            ),
        ));
    }

    Ok(SnSchema { z, mu, err })
}

/// Load a supernova sample from a local table file.
pub fn load_sn_table(path: &Path) -> Result<SnIngest, AppError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to read supernova table '{}': {e}", path.display()),
        )
    })?;
    parse_sn_table(&text, &path.display().to_string())
}

/// Parse the table text. Separated from file I/O so tests can feed strings.
pub fn parse_sn_table(text: &str, source: &str) -> Result<SnIngest, AppError> {
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'));

    let header_line = lines
        .next()
        .ok_or_else(|| AppError::new(2, format!("Supernova table '{source}' is empty.")))?;
    let headers: Vec<&str> = header_line.split_whitespace().collect();
    let schema = resolve_schema(&headers)?;

    let mut rows: Vec<(f64, f64, f64)> = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_dropped = 0usize;

    for line in lines {
        rows_read += 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        match parse_row(&fields, &schema) {
            Some(row) => rows.push(row),
            None => rows_dropped += 1,
        }
    }

    if rows.is_empty() {
        return Err(AppError::new(
            3,
            format!("No usable supernova rows in '{source}' ({rows_read} read, all dropped)."),
        ));
    }

    rows.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut sample = SnSample {
        z: Vec::with_capacity(rows.len()),
        mu: Vec::with_capacity(rows.len()),
        sigma: Vec::with_capacity(rows.len()),
    };
    for (z, mu, sigma) in rows {
        sample.z.push(z);
        sample.mu.push(mu);
        sample.sigma.push(sigma);
    }

    Ok(SnIngest {
        sample,
        schema,
        rows_read,
        rows_dropped,
    })
}

/// Extract one `(z, mu, sigma)` row, or `None` if the row is unusable:
/// too few fields, unparseable numbers, non-finite values, negative
/// redshift, or a non-positive error.
fn parse_row(fields: &[&str], schema: &SnSchema) -> Option<(f64, f64, f64)> {
    let get = |i: usize| -> Option<f64> {
        let v: f64 = fields.get(i)?.parse().ok()?;
        v.is_finite().then_some(v)
    };
    let z = get(schema.z.index)?;
    let mu = get(schema.mu.index)?;
    let sigma = get(schema.err.index)?;
    (z >= 0.0 && sigma > 0.0).then_some((z, mu, sigma))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
# Pantheon+SH0ES distance table (excerpt)
CID IDSURVEY ZHD ZHEL MU_SH0ES MU_SH0ES_ERR_DIAG
2011fe 51 0.00122 0.00080 29.1662 0.1359
2021pit 56 0.00571 0.00485 32.1406 0.1624
2005df 12 0.00443 0.00400 31.5120 0.1510
";

    #[test]
    fn resolves_pantheon_header() {
        let headers: Vec<&str> =
            "CID IDSURVEY ZHD ZHEL MU_SH0ES MU_SH0ES_ERR_DIAG".split_whitespace().collect();
        let schema = resolve_schema(&headers).unwrap();
        assert_eq!(schema.z.index, 2);
        assert_eq!(schema.z.name, "ZHD");
        assert_eq!(schema.mu.index, 4);
        assert_eq!(schema.mu.name, "MU_SH0ES");
        assert_eq!(schema.err.index, 5);
        assert_eq!(schema.err.name, "MU_SH0ES_ERR_DIAG");
    }

    #[test]
    fn resolves_bare_mu_header() {
        let headers: Vec<&str> = "zhel mu mu_err".split_whitespace().collect();
        let schema = resolve_schema(&headers).unwrap();
        assert_eq!(schema.z.index, 0);
        assert_eq!(schema.mu.index, 1);
        assert_eq!(schema.err.index, 2);
    }

    #[test]
    fn missing_column_is_fatal() {
        let headers: Vec<&str> = "CID ZHD MU_SH0ES".split_whitespace().collect();
        let err = resolve_schema(&headers).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn parses_sorts_and_counts() {
        let ingest = parse_sn_table(TABLE, "test").unwrap();
        assert_eq!(ingest.rows_read, 3);
        assert_eq!(ingest.rows_dropped, 0);
        let s = &ingest.sample;
        assert_eq!(s.len(), 3);
        // Sorted ascending by ZHD, not input order.
        assert!(s.z[0] < s.z[1] && s.z[1] < s.z[2]);
        assert!((s.z[0] - 0.00122).abs() < 1e-12);
        assert!((s.mu[0] - 29.1662).abs() < 1e-12);
        assert!((s.sigma[0] - 0.1359).abs() < 1e-12);
    }

    #[test]
    fn drops_bad_rows() {
        let text = "\
ZHD MU ERR
0.1 38.0 0.1
bad 38.0 0.1
0.2 39.0 -0.5
0.3 39.5
0.4 40.1 0.2
";
        let ingest = parse_sn_table(text, "test").unwrap();
        assert_eq!(ingest.rows_read, 5);
        assert_eq!(ingest.rows_dropped, 3);
        assert_eq!(ingest.sample.len(), 2);
        assert_eq!(ingest.sample.z, vec![0.1, 0.4]);
    }

    #[test]
    fn all_rows_dropped_is_fatal() {
        let text = "ZHD MU ERR\nnan nan nan\n";
        let err = parse_sn_table(text, "test").unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn empty_input_is_fatal() {
        let err = parse_sn_table("", "test").unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
