//! Dynamic connectivity driver
//!
//! Streams pairs through a HeightUnionFind: pairs already connected are
//! skipped, the rest are merged and echoed, and the final component count is
//! written last.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{BufRead, Write};

use crate::pairs::PairReader;
use crate::union_find::HeightUnionFind;

/// Totals for one connectivity run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectivitySummary {
    pub sites: usize,
    pub pairs_read: usize,
    pub unions: usize,
    pub components: usize,
    pub max_height: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectivityOptions {
    /// Write every component after the count line
    pub print_groups: bool,
}

pub fn run_connectivity<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    options: ConnectivityOptions,
) -> Result<ConnectivitySummary> {
    let mut reader = PairReader::new(input);
    let n = reader.read_size()?;
    let mut uf = HeightUnionFind::create(n).context("reading the number of sites")?;
    info!("Tracking connectivity over {} sites", uf.len());

    let mut summary = ConnectivitySummary {
        sites: uf.len(),
        ..Default::default()
    };

    while let Some((raw_p, raw_q)) = reader.read_pair()? {
        summary.pairs_read += 1;
        let line = reader.line_no();
        let p = uf
            .site(raw_p)
            .with_context(|| format!("line {line}: bad pair {raw_p} {raw_q}"))?;
        let q = uf
            .site(raw_q)
            .with_context(|| format!("line {line}: bad pair {raw_p} {raw_q}"))?;

        if uf.connected(p, q)? {
            debug!("{p} and {q} already connected");
            continue;
        }
        uf.union(p, q)?;
        summary.unions += 1;
        writeln!(output, "{p} {q}")?;
    }

    summary.components = uf.count();
    writeln!(output, "{} components", summary.components)?;

    if options.print_groups {
        for group in uf.components() {
            let members: Vec<String> = group.iter().map(|p| p.to_string()).collect();
            writeln!(output, "{}", members.join(" "))?;
        }
    }

    for p in 0..uf.len() {
        if uf.is_root(p)? {
            summary.max_height = summary.max_height.max(uf.height(p)?);
        }
    }

    info!(
        "Read {} pairs, {} unions, {} components, tallest tree {}",
        summary.pairs_read, summary.unions, summary.components, summary.max_height
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnionFindError;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    const TINY_UF: &str = "10\n4 3\n3 8\n6 5\n9 4\n2 1\n8 9\n5 0\n7 2\n6 1\n1 0\n6 7\n";

    fn run(input: &str, options: ConnectivityOptions) -> Result<(String, ConnectivitySummary)> {
        let mut out = Vec::new();
        let summary = run_connectivity(Cursor::new(input), &mut out, options)?;
        Ok((String::from_utf8(out)?, summary))
    }

    #[test]
    fn test_tiny_uf() {
        let (out, summary) = run(TINY_UF, ConnectivityOptions::default()).unwrap();
        assert_eq!(
            out,
            "4 3\n3 8\n6 5\n9 4\n2 1\n5 0\n7 2\n6 1\n2 components\n"
        );
        assert_eq!(
            summary,
            ConnectivitySummary {
                sites: 10,
                pairs_read: 11,
                unions: 8,
                components: 2,
                max_height: 2,
            }
        );
    }

    #[test]
    fn test_groups_listed_after_count() {
        let options = ConnectivityOptions { print_groups: true };
        let (out, _) = run("5\n0 1\n3 4\n", options).unwrap();
        assert_eq!(out, "0 1\n3 4\n3 components\n0 1\n2\n3 4\n");
    }

    #[test]
    fn test_no_pairs() {
        let (out, summary) = run("3\n", ConnectivityOptions::default()).unwrap();
        assert_eq!(out, "3 components\n");
        assert_eq!(summary.unions, 0);
        assert_eq!(summary.max_height, 0);
    }

    #[test]
    fn test_zero_sites() {
        let (out, summary) = run("0\n", ConnectivityOptions::default()).unwrap();
        assert_eq!(out, "0 components\n");
        assert_eq!(summary.sites, 0);
    }

    #[test]
    fn test_negative_size() {
        let err = run("-1\n", ConnectivityOptions::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnionFindError>(),
            Some(&UnionFindError::InvalidArgument { size: -1 })
        );
    }

    #[test]
    fn test_unallocatable_size() {
        let err = run("9223372036854775807\n", ConnectivityOptions::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnionFindError>(),
            Some(&UnionFindError::TooLarge { size: i64::MAX })
        );
    }

    #[test]
    fn test_out_of_range_pair() {
        let err = run("3\n0 1\n1 3\n", ConnectivityOptions::default()).unwrap_err();
        assert!(err.to_string().contains("line 3"), "got: {err}");
        assert_eq!(
            err.downcast_ref::<UnionFindError>(),
            Some(&UnionFindError::IndexOutOfRange { index: 3, len: 3 })
        );
    }
}
